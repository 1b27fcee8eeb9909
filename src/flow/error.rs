//! Flow and builder errors.

use crate::catalog::Category;
use thiserror::Error;

/// Errors that can occur when building an order flow.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Catalog not specified. Call .catalog(catalog) before .build()")]
    MissingCatalog,
}

/// Recoverable errors from text-driven flow operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("{category} has no item named {name:?}")]
    UnknownItem { category: Category, name: String },
}
