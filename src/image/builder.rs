//! # Product Image Builder
//!
//! Collects the product, image id and custom attributes for one product
//! image, then resolves everything the image template needs through an
//! [`ImageHelper`] and hands the result to an [`ImageFactory`].
//!
//! Setters return the same builder, so calls can be chained. [`create`]
//! reads the current state on every call and caches nothing.
//!
//! [`create`]: ImageBuilder::create

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use super::attributes::CustomAttributes;
use super::helper::HelperFactory;
use super::render::{ImageData, ImageFactory, ImageTemplate, RenderConfig};
use crate::catalog::product::{Product, resolve_display_product};
use crate::config::image::ImageTemplateConfig;
use crate::error::image::ImageDataError;

/// Builds render data for a product image.
///
/// `I` is the render object produced by the injected [`ImageFactory`].
pub struct ImageBuilder<I> {
    helper_factory: Arc<dyn HelperFactory>,
    image_factory: Arc<dyn ImageFactory<Image = I>>,
    templates: ImageTemplateConfig,
    product: Option<Arc<dyn Product>>,
    image_id: String,
    attributes: CustomAttributes,
}

impl<I> ImageBuilder<I> {
    /// Creates a builder using the default template identifiers.
    pub fn new<F>(helper_factory: Arc<dyn HelperFactory>, image_factory: Arc<F>) -> Self
    where
        F: ImageFactory<Image = I> + 'static,
    {
        Self::with_templates(helper_factory, image_factory, ImageTemplateConfig::default())
    }

    /// Creates a builder with explicit template identifiers.
    pub fn with_templates<F>(
        helper_factory: Arc<dyn HelperFactory>,
        image_factory: Arc<F>,
        templates: ImageTemplateConfig,
    ) -> Self
    where
        F: ImageFactory<Image = I> + 'static,
    {
        Self {
            helper_factory,
            image_factory,
            templates,
            product: None,
            image_id: String::new(),
            attributes: CustomAttributes::new(),
        }
    }

    /// Sets the product to display; `None` clears it.
    pub fn set_product(&mut self, product: Option<Arc<dyn Product>>) -> &mut Self {
        self.product = product;
        self
    }

    pub fn set_image_id(&mut self, image_id: impl Into<String>) -> &mut Self {
        self.image_id = image_id.into();
        self
    }

    pub fn set_attributes(&mut self, attributes: impl Into<CustomAttributes>) -> &mut Self {
        self.attributes = attributes.into();
        self
    }

    /// Resolves the image through a fresh helper and builds the render object.
    ///
    /// If the product carries a `simple_product` option the helper is
    /// initialized with the linked product instead.
    ///
    /// # Errors
    /// - [`ImageDataError::ZeroWidth`] if the helper reports a width of 0.
    /// - Any error returned by the helper factory, the helper or the image
    ///   factory, unchanged.
    pub fn create(&self) -> Result<I> {
        let product = resolve_display_product(self.product.as_ref());

        let mut helper = self.helper_factory.create()?;
        helper.init(product, &self.image_id)?;

        let frame = helper.frame();
        let image_url = helper.url()?;
        let width = helper.width();
        let height = helper.height();
        let label = helper.label();
        let (resized_image_width, resized_image_height) = helper.resized_image_info()?;

        if width == 0 {
            warn!(image_id = %self.image_id, height, "image width is zero");
            return Err(ImageDataError::ZeroWidth {
                image_id: self.image_id.clone(),
            }
            .into());
        }
        let ratio = f64::from(height) / f64::from(width);

        let template = self.templates.template_for(ImageTemplate::for_frame(frame));
        debug!(image_id = %self.image_id, template, ratio, "built product image data");

        self.image_factory.create(ImageData {
            data: RenderConfig {
                template: template.to_string(),
                image_url,
                width,
                height,
                label,
                ratio,
                custom_attributes: self.attributes.to_html(),
                resized_image_width,
                resized_image_height,
            },
        })
    }
}
