#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.missing_fields")]
    MissingFields,
    #[error("product.not_found")]
    NotFound,
    /// Listing an empty catalog is reported as an error, not an empty page.
    #[error("product.catalog_empty")]
    CatalogEmpty,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
