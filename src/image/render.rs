//! # Image Render Data
//!
//! The data handed to the product image template, and the factory that turns
//! it into a render object.
//!
//! This module defines:
//! - [`ImageTemplate`] — the two template identifiers, selected by frame flag.
//! - [`RenderConfig`] — resolved URL, sizes, label, ratio and attributes.
//! - [`ImageData`] — the `{ "data": RenderConfig }` envelope passed to a factory.
//! - [`ImageFactory`] — produces the host's render object from [`ImageData`].
//! - [`ProductImage`] / [`ProductImageFactory`] — a ready-to-use render object.
//!
//! # Example
//! ```rust
//! use catalog_image::image::render::ImageTemplate;
//!
//! assert_eq!(ImageTemplate::for_frame(1), ImageTemplate::Plain);
//! assert_eq!(ImageTemplate::for_frame(0), ImageTemplate::WithBorders);
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Template variant for a product image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageTemplate {
    /// Image rendered as-is.
    Plain,
    /// Image wrapped in a padded container that keeps the aspect ratio.
    WithBorders,
}

impl ImageTemplate {
    /// Picks the template for a helper frame flag: `1` is plain, anything else bordered.
    pub fn for_frame(frame: i32) -> Self {
        if frame == 1 {
            ImageTemplate::Plain
        } else {
            ImageTemplate::WithBorders
        }
    }
}

/// Resolved data for one product image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Template identifier.
    pub template: String,
    pub image_url: String,
    /// Requested display width.
    pub width: u32,
    /// Requested display height.
    pub height: u32,
    pub label: String,
    /// `width / height` of the requested size.
    pub ratio: f64,
    /// Serialized custom HTML attributes.
    pub custom_attributes: String,
    /// Actual width after resizing.
    pub resized_image_width: u32,
    /// Actual height after resizing.
    pub resized_image_height: u32,
}

/// Envelope passed to an [`ImageFactory`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub data: RenderConfig,
}

impl ImageData {
    /// Serializes the envelope, e.g. for a client-side template layer.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Produces the host's render object from resolved image data.
pub trait ImageFactory: Send + Sync {
    type Image;

    fn create(&self, data: ImageData) -> Result<Self::Image>;
}

/// Render object holding the data for a product image template.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductImage {
    data: RenderConfig,
}

impl ProductImage {
    pub fn new(data: RenderConfig) -> Self {
        Self { data }
    }

    pub fn template(&self) -> &str {
        &self.data.template
    }

    pub fn image_url(&self) -> &str {
        &self.data.image_url
    }

    pub fn width(&self) -> u32 {
        self.data.width
    }

    pub fn height(&self) -> u32 {
        self.data.height
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }

    pub fn ratio(&self) -> f64 {
        self.data.ratio
    }

    pub fn custom_attributes(&self) -> &str {
        &self.data.custom_attributes
    }

    pub fn resized_image_width(&self) -> u32 {
        self.data.resized_image_width
    }

    pub fn resized_image_height(&self) -> u32 {
        self.data.resized_image_height
    }

    /// Bottom padding in percent of the width (`ratio * 100`), reserving
    /// layout space for the image in the bordered template.
    pub fn padding_bottom_percent(&self) -> f64 {
        self.data.ratio * 100.0
    }

    pub fn into_config(self) -> RenderConfig {
        self.data
    }
}

/// [`ImageFactory`] producing [`ProductImage`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductImageFactory;

impl ImageFactory for ProductImageFactory {
    type Image = ProductImage;

    fn create(&self, data: ImageData) -> Result<ProductImage> {
        Ok(ProductImage::new(data.data))
    }
}
