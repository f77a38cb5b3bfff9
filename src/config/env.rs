//! # Environment Variable Utilities
//!
//! Helpers for reading string settings from environment variables with a
//! fallback default.
//!
//! These functions are used by configuration loaders (e.g. `ImageTemplateConfig`).
//!
//! # Examples
//! ```rust,no_run
//! use catalog_image::config::env::read_string;
//!
//! let template = read_string("CATALOG_IMAGE_TEMPLATE", "Magento_Catalog::product/image.phtml");
//! ```

/// Reads a string from an environment variable.
///
/// Missing or blank values yield `default`. Surrounding whitespace and
/// quotes are stripped.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use catalog_image::config::env::read_string_from;
///
/// let val = read_string_from(|_| Some(" 'custom.phtml' ".into()), "TEMPLATE", "image.phtml");
/// assert_eq!(val, "custom.phtml");
///
/// let val = read_string_from(|_| None, "TEMPLATE", "image.phtml");
/// assert_eq!(val, "image.phtml");
/// ```
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| {
            v.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string()
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}
