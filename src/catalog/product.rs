//! # Catalog Product Ports
//!
//! Minimal view of a catalog product as seen by the image builder.
//!
//! This module defines:
//! - [`Product`] — a catalog entity that may carry per-render custom options.
//! - [`CustomOption`] — an attachment on a product linking to another product.
//! - [`SIMPLE_PRODUCT_OPTION`] — the option code used by configurable/composite
//!   products to point at their selected simple variant.
//!
//! The product model itself lives in the host application; these traits only
//! describe the lookups the builder needs.

use std::sync::Arc;

/// Option code under which a composite product exposes its selected simple variant.
pub const SIMPLE_PRODUCT_OPTION: &str = "simple_product";

/// A catalog product entity.
pub trait Product: Send + Sync {
    /// Stock keeping unit, used for identification and logging.
    fn sku(&self) -> &str;

    /// Looks up a custom option attached to this product by its code.
    ///
    /// Returns `None` when no option with that code is present.
    fn custom_option(&self, code: &str) -> Option<Arc<dyn CustomOption>>;
}

/// A custom option linking a product to another product.
pub trait CustomOption: Send + Sync {
    /// The product this option points at.
    fn product(&self) -> Arc<dyn Product>;
}

/// Resolves the product whose image should be displayed.
///
/// If `product` carries a [`SIMPLE_PRODUCT_OPTION`] option, the linked simple
/// product is returned in its place. Otherwise `product` is returned as-is,
/// including `None`.
pub fn resolve_display_product(product: Option<&Arc<dyn Product>>) -> Option<Arc<dyn Product>> {
    let product = product?;
    match product.custom_option(SIMPLE_PRODUCT_OPTION) {
        Some(option) => {
            let simple = option.product();
            tracing::debug!(
                parent = product.sku(),
                simple = simple.sku(),
                "using simple product image"
            );
            Some(simple)
        }
        None => Some(Arc::clone(product)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct StubProduct {
        sku: String,
        options: HashMap<String, Arc<dyn CustomOption>>,
        lookups: Mutex<Vec<String>>,
    }

    impl StubProduct {
        fn new(sku: &str) -> Self {
            Self {
                sku: sku.to_string(),
                options: HashMap::new(),
                lookups: Mutex::new(vec![]),
            }
        }
        fn with_option(mut self, code: &str, option: Arc<dyn CustomOption>) -> Self {
            self.options.insert(code.to_string(), option);
            self
        }
        fn lookups(&self) -> Vec<String> {
            self.lookups.lock().unwrap().clone()
        }
    }

    impl Product for StubProduct {
        fn sku(&self) -> &str {
            &self.sku
        }
        fn custom_option(&self, code: &str) -> Option<Arc<dyn CustomOption>> {
            self.lookups.lock().unwrap().push(code.to_string());
            self.options.get(code).cloned()
        }
    }

    struct LinkOption(Arc<dyn Product>);

    impl CustomOption for LinkOption {
        fn product(&self) -> Arc<dyn Product> {
            Arc::clone(&self.0)
        }
    }

    #[test]
    fn none_resolves_to_none() {
        assert!(resolve_display_product(None).is_none());
    }

    #[test]
    fn product_without_option_resolves_to_itself() {
        let stub = Arc::new(StubProduct::new("jacket"));
        let product: Arc<dyn Product> = stub.clone();

        let resolved = resolve_display_product(Some(&product)).expect("product");
        assert_eq!(resolved.sku(), "jacket");
        assert_eq!(stub.lookups(), vec!["simple_product".to_string()]);
    }

    #[test]
    fn simple_product_option_replaces_product() {
        let simple: Arc<dyn Product> = Arc::new(StubProduct::new("jacket-red-m"));
        let stub = Arc::new(
            StubProduct::new("jacket")
                .with_option(SIMPLE_PRODUCT_OPTION, Arc::new(LinkOption(simple))),
        );
        let product: Arc<dyn Product> = stub.clone();

        let resolved = resolve_display_product(Some(&product)).expect("product");
        assert_eq!(resolved.sku(), "jacket-red-m");
    }

    #[test]
    fn other_option_codes_are_ignored() {
        let other: Arc<dyn Product> = Arc::new(StubProduct::new("gift-card"));
        let product: Arc<dyn Product> =
            Arc::new(StubProduct::new("jacket").with_option("bundle_selection", Arc::new(LinkOption(other))));

        let resolved = resolve_display_product(Some(&product)).expect("product");
        assert_eq!(resolved.sku(), "jacket");
    }

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_product_and_option_are_send_sync() {
        assert_send_sync::<dyn Product>();
        assert_send_sync::<dyn CustomOption>();
    }
}
