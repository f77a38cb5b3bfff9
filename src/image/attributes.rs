//! # Custom HTML Attributes
//!
//! Ordered `name → value` pairs appended to the rendered `<img>` tag.
//!
//! Serialization is deterministic: pairs are written in insertion order as
//! `name="value"`, separated by single spaces. An empty set serializes to an
//! empty string.
//!
//! # Example
//! ```rust
//! use catalog_image::image::attributes::CustomAttributes;
//!
//! let attrs = CustomAttributes::from([("name_1", "value_1"), ("name_2", "value_2")]);
//! assert_eq!(attrs.to_html(), r#"name_1="value_1" name_2="value_2""#);
//! assert_eq!(CustomAttributes::new().to_html(), "");
//! ```

use std::fmt;

/// Insertion-ordered HTML attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomAttributes {
    pairs: Vec<(String, String)>,
}

impl CustomAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`.
    ///
    /// An existing attribute keeps its position and gets the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((name, value)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serializes the attributes as `name="value"` pairs joined by spaces.
    ///
    /// Names and values are written verbatim; escaping is left to the template.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CustomAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}=\"{value}\"")?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for CustomAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

impl<K, V> From<Vec<(K, V)>> for CustomAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for CustomAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
