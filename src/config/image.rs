//! # Image Template Configuration
//!
//! Template identifiers used for product images, one per frame style.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `CATALOG_IMAGE_TEMPLATE` | Template for unframed images | `Magento_Catalog::product/image.phtml` |
//! | `CATALOG_IMAGE_TEMPLATE_WITH_BORDERS` | Template for bordered images | `Magento_Catalog::product/image_with_borders.phtml` |
//!
//! # Example
//! ```rust
//! use catalog_image::config::image::ImageTemplateConfig;
//! use catalog_image::image::render::ImageTemplate;
//!
//! let cfg = ImageTemplateConfig::default();
//! assert_eq!(
//!     cfg.template_for(ImageTemplate::WithBorders),
//!     "Magento_Catalog::product/image_with_borders.phtml"
//! );
//! ```

use crate::config::env::read_string;
use crate::image::render::ImageTemplate;

pub const DEFAULT_TEMPLATE: &str = "Magento_Catalog::product/image.phtml";
pub const DEFAULT_TEMPLATE_WITH_BORDERS: &str = "Magento_Catalog::product/image_with_borders.phtml";

/// Template identifiers for product images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageTemplateConfig {
    /// Used when the helper reports frame `1`.
    pub template: String,
    /// Used for every other frame value.
    pub template_with_borders: String,
}

impl Default for ImageTemplateConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.into(),
            template_with_borders: DEFAULT_TEMPLATE_WITH_BORDERS.into(),
        }
    }
}

impl ImageTemplateConfig {
    /// Loads template identifiers from environment variables.
    ///
    /// Missing or blank variables fall back to the defaults.
    ///
    /// # Example
    /// ```rust,no_run
    /// use catalog_image::config::image::ImageTemplateConfig;
    ///
    /// let cfg = ImageTemplateConfig::from_env();
    /// assert!(!cfg.template.is_empty());
    /// ```
    pub fn from_env() -> Self {
        Self {
            template: read_string("CATALOG_IMAGE_TEMPLATE", DEFAULT_TEMPLATE),
            template_with_borders: read_string(
                "CATALOG_IMAGE_TEMPLATE_WITH_BORDERS",
                DEFAULT_TEMPLATE_WITH_BORDERS,
            ),
        }
    }

    /// Returns the identifier configured for `template`.
    pub fn template_for(&self, template: ImageTemplate) -> &str {
        match template {
            ImageTemplate::Plain => &self.template,
            ImageTemplate::WithBorders => &self.template_with_borders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_catalog_templates() {
        let cfg = ImageTemplateConfig::default();
        assert_eq!(cfg.template, "Magento_Catalog::product/image.phtml");
        assert_eq!(
            cfg.template_with_borders,
            "Magento_Catalog::product/image_with_borders.phtml"
        );
    }

    #[test]
    fn template_for_maps_variants() {
        let cfg = ImageTemplateConfig {
            template: "plain".into(),
            template_with_borders: "framed".into(),
        };
        assert_eq!(cfg.template_for(ImageTemplate::Plain), "plain");
        assert_eq!(cfg.template_for(ImageTemplate::WithBorders), "framed");
    }

    #[test]
    fn from_env_reads_overrides() {
        temp_env::with_vars(
            vec![
                ("CATALOG_IMAGE_TEMPLATE", Some("Theme::img.phtml")),
                ("CATALOG_IMAGE_TEMPLATE_WITH_BORDERS", Some("Theme::img_framed.phtml")),
            ],
            || {
                let cfg = ImageTemplateConfig::from_env();
                assert_eq!(cfg.template, "Theme::img.phtml");
                assert_eq!(cfg.template_with_borders, "Theme::img_framed.phtml");
            },
        );
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        temp_env::with_vars(
            vec![
                ("CATALOG_IMAGE_TEMPLATE", None::<&str>),
                ("CATALOG_IMAGE_TEMPLATE_WITH_BORDERS", Some("  ")),
            ],
            || {
                assert_eq!(ImageTemplateConfig::from_env(), ImageTemplateConfig::default());
            },
        );
    }

    #[test]
    fn clone_and_debug() {
        let cfg = ImageTemplateConfig::default();
        let clone = cfg.clone();
        assert_eq!(cfg, clone);

        let dbg_str = format!("{:?}", cfg);
        assert!(dbg_str.contains("image_with_borders.phtml"));
    }
}
