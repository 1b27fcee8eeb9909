//! Menu catalog.
//!
//! The catalog is the read-only configuration of the ordering flow: what
//! can be ordered in each [`Category`] and what it costs. It is built once,
//! validated, and then shared by any number of flows.
//!
//! # Example
//!
//! ```rust
//! use lunchtray::catalog::{CatalogBuilder, Category, MenuItem};
//! use rust_decimal::Decimal;
//!
//! let catalog = CatalogBuilder::new()
//!     .entree(MenuItem::new("Burrito", Decimal::new(400, 2)))
//!     .side_dish(MenuItem::new("Chips", Decimal::new(150, 2)))
//!     .accompaniment(MenuItem::new("Salsa", Decimal::new(25, 2)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.items_for(Category::Entree)[0].name, "Burrito");
//! assert!(catalog.find(Category::SideDish, "Chips").is_some());
//! ```

mod builder;
mod data;
pub mod error;

pub use builder::CatalogBuilder;
pub use error::{CatalogError, CatalogViolation, ParseCategoryError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Partition of the menu.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    Entree,
    SideDish,
    Accompaniment,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Entree,
        Category::SideDish,
        Category::Accompaniment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Entree => "Entree",
            Self::SideDish => "SideDish",
            Self::Accompaniment => "Accompaniment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == name)
            .ok_or_else(|| ParseCategoryError(name.to_string()))
    }
}

/// Something that can be ordered.
///
/// Immutable once built; the category it belongs to is given by the
/// catalog list that holds it.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Validated, read-only menu.
///
/// Every category holds at least one item, names are unique within a
/// category and no price is negative. Construct through
/// [`CatalogBuilder`], [`MenuCatalog::from_json`] or
/// [`MenuCatalog::lunch_tray`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MenuCatalog {
    entrees: Vec<MenuItem>,
    side_dishes: Vec<MenuItem>,
    accompaniments: Vec<MenuItem>,
}

/// Unvalidated catalog data as it appears in configuration.
#[derive(Clone, Debug, Default, Deserialize)]
struct CatalogConfig {
    #[serde(default)]
    entrees: Vec<MenuItem>,
    #[serde(default)]
    side_dishes: Vec<MenuItem>,
    #[serde(default)]
    accompaniments: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Items offered for `category`, in menu order.
    pub fn items_for(&self, category: Category) -> &[MenuItem] {
        match category {
            Category::Entree => &self.entrees,
            Category::SideDish => &self.side_dishes,
            Category::Accompaniment => &self.accompaniments,
        }
    }

    /// Whether `item` is offered under `category`.
    pub fn contains(&self, category: Category, item: &MenuItem) -> bool {
        self.items_for(category).contains(item)
    }

    /// Look up an item by name within `category`.
    pub fn find(&self, category: Category, name: &str) -> Option<&MenuItem> {
        self.items_for(category).iter().find(|item| item.name == name)
    }

    /// Parse and validate a catalog from JSON text.
    ///
    /// The expected shape is
    /// `{"entrees": [...], "side_dishes": [...], "accompaniments": [...]}`
    /// where each item is `{"name", "description"?, "price"}`. Prices may be
    /// decimal strings or JSON numbers.
    ///
    /// ```rust
    /// use lunchtray::catalog::{Category, MenuCatalog};
    ///
    /// let catalog = MenuCatalog::from_json(r#"{
    ///     "entrees": [{"name": "Burrito", "price": "4.00"}],
    ///     "side_dishes": [{"name": "Chips", "price": "1.50"}],
    ///     "accompaniments": [{"name": "Salsa", "price": "0.25"}]
    /// }"#).unwrap();
    ///
    /// assert_eq!(catalog.items_for(Category::Entree).len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        CatalogBuilder::from_config(config).build()
    }

    /// Same as [`MenuCatalog::from_json`] for an already parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        let config: CatalogConfig = serde_json::from_value(value)?;
        CatalogBuilder::from_config(config).build()
    }

    /// Serialize the catalog to pretty-printed JSON in the shape
    /// [`MenuCatalog::from_json`] accepts.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
