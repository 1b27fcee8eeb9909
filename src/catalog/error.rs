//! Catalog errors.

use super::Category;
use rust_decimal::Decimal;
use thiserror::Error;

/// A single problem found while validating catalog data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogViolation {
    #[error("{category} has no items")]
    EmptyCategory { category: Category },

    #[error("{category} lists {name:?} more than once")]
    DuplicateItem { category: Category, name: String },

    #[error("{category} item #{index} has a blank name")]
    BlankName { category: Category, index: usize },

    #[error("{category} item {name:?} has negative price {price}")]
    NegativePrice {
        category: Category,
        name: String,
        price: Decimal,
    },

    #[error("{category} item {name:?} priced {price} makes the largest possible order overflow")]
    PriceTooLarge {
        category: Category,
        name: String,
        price: Decimal,
    },
}

/// Errors that can occur when constructing a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Every violation found, not only the first
    #[error("invalid catalog: {}", join_violations(.0))]
    Invalid(Vec<CatalogViolation>),

    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A category name that is not Entree, SideDish or Accompaniment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu category: {0:?}")]
pub struct ParseCategoryError(pub String);

fn join_violations(violations: &[CatalogViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
