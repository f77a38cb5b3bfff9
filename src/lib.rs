//! # catalog_image
//!
//! Builds the render data for product image widgets on catalog pages.
//!
//! This crate provides:
//! - Catalog ports for products and their custom options (`catalog`)
//! - The image helper / image factory ports and the [`ImageBuilder`] (`image`)
//! - Template configuration loaded from the environment (`config`)
//! - Typed errors for the builder's own failure modes (`error`)
//!
//! ## Example usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use catalog_image::anyhow::Result;
//! use catalog_image::catalog::product::Product;
//! use catalog_image::image::builder::ImageBuilder;
//! use catalog_image::image::helper::{HelperFactory, ImageHelper};
//! use catalog_image::image::render::ProductImageFactory;
//!
//! struct FixedHelper;
//!
//! impl ImageHelper for FixedHelper {
//!     fn init(&mut self, _product: Option<Arc<dyn Product>>, _image_id: &str) -> Result<()> {
//!         Ok(())
//!     }
//!     fn frame(&self) -> i32 { 0 }
//!     fn url(&self) -> Result<String> { Ok("/media/a.jpg".into()) }
//!     fn width(&self) -> u32 { 240 }
//!     fn height(&self) -> u32 { 300 }
//!     fn label(&self) -> String { "Jacket".into() }
//!     fn resized_image_info(&self) -> Result<(u32, u32)> { Ok((240, 300)) }
//! }
//!
//! struct FixedHelperFactory;
//!
//! impl HelperFactory for FixedHelperFactory {
//!     fn create(&self) -> Result<Box<dyn ImageHelper>> {
//!         Ok(Box::new(FixedHelper))
//!     }
//! }
//!
//! let mut builder = ImageBuilder::new(Arc::new(FixedHelperFactory), Arc::new(ProductImageFactory));
//! let image = builder
//!     .set_image_id("category_page_grid")
//!     .set_attributes([("class", "photo")])
//!     .create()
//!     .unwrap();
//!
//! assert_eq!(image.image_url(), "/media/a.jpg");
//! assert_eq!(image.ratio(), 1.25);
//! assert_eq!(image.custom_attributes(), r#"class="photo""#);
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use serde;
pub use serde_json;

// ===============================
// Public modules
// ===============================
pub mod catalog;
pub mod config;
pub mod error;
pub mod image;

pub use image::builder::ImageBuilder;
