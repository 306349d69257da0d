use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, product::entities::Product};

/// Anything able to resolve a barcode into a canonical product.
#[cfg_attr(test, mockall::automock)]
pub trait ProductSource: Send + Sync {
    /// `Ok(None)` means the source answered but does not know the barcode.
    fn lookup_barcode(
        &self,
        barcode: &str,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductLookupService: Send + Sync {
    fn find_product(
        &self,
        barcode: String,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;
}
