//! # Image Helper Abstractions
//!
//! Defines the interface of the image helper that resolves display data for a
//! product image, and the factory that hands out fresh helper instances.
//!
//! This module provides:
//! - [`ImageHelper`] — initialized with a product and an image id, then
//!   queried for URL, requested size, label, frame flag and resized size.
//! - [`HelperFactory`] — creates a new helper per build.
//!
//! Resizing, URL generation and frame detection are up to the implementation
//! (e.g. a media gallery backed by the `image` crate or a CDN resolver).
//!
//! # Example
//! ```rust
//! use std::sync::Arc;
//!
//! use anyhow::Result;
//! use catalog_image::catalog::product::Product;
//! use catalog_image::image::helper::{HelperFactory, ImageHelper};
//!
//! #[derive(Default)]
//! struct PlaceholderHelper {
//!     image_id: String,
//! }
//!
//! impl ImageHelper for PlaceholderHelper {
//!     fn init(&mut self, _product: Option<Arc<dyn Product>>, image_id: &str) -> Result<()> {
//!         self.image_id = image_id.to_string();
//!         Ok(())
//!     }
//!     fn frame(&self) -> i32 { 1 }
//!     fn url(&self) -> Result<String> { Ok(format!("/placeholder/{}.jpg", self.image_id)) }
//!     fn width(&self) -> u32 { 135 }
//!     fn height(&self) -> u32 { 135 }
//!     fn label(&self) -> String { String::new() }
//!     fn resized_image_info(&self) -> Result<(u32, u32)> { Ok((135, 135)) }
//! }
//!
//! struct PlaceholderFactory;
//!
//! impl HelperFactory for PlaceholderFactory {
//!     fn create(&self) -> Result<Box<dyn ImageHelper>> {
//!         Ok(Box::new(PlaceholderHelper::default()))
//!     }
//! }
//!
//! let mut helper = PlaceholderFactory.create().unwrap();
//! helper.init(None, "thumbnail").unwrap();
//! assert_eq!(helper.url().unwrap(), "/placeholder/thumbnail.jpg");
//! ```

use std::sync::Arc;

use anyhow::Result;

use crate::catalog::product::Product;

/// Resolves display data for one product image.
///
/// [`init`](ImageHelper::init) must be called before any getter; getters
/// describe the image selected by the last `init`.
pub trait ImageHelper: Send {
    /// Selects the product and the image id (placement) to resolve.
    ///
    /// `product` may be `None`, in which case implementations usually fall
    /// back to a placeholder image.
    fn init(&mut self, product: Option<Arc<dyn Product>>, image_id: &str) -> Result<()>;

    /// Frame flag: `1` renders without a bordered wrapper, anything else with one.
    fn frame(&self) -> i32;

    /// Final image URL.
    fn url(&self) -> Result<String>;

    /// Requested display width (in pixels).
    fn width(&self) -> u32;

    /// Requested display height (in pixels).
    fn height(&self) -> u32;

    /// Image label, typically used as the `alt` text.
    fn label(&self) -> String;

    /// Actual `(width, height)` of the resized image, in pixels.
    fn resized_image_info(&self) -> Result<(u32, u32)>;
}

/// Creates fresh [`ImageHelper`] instances.
pub trait HelperFactory: Send + Sync {
    fn create(&self) -> Result<Box<dyn ImageHelper>>;
}
