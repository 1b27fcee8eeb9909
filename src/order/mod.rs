//! In-progress order.
//!
//! An [`OrderState`] holds at most one selected item per [`Category`].
//! It knows nothing about the catalog; checking that an item really
//! belongs to its category is the flow's job.

use crate::catalog::{Category, MenuItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current selections, one optional slot per category.
///
/// # Example
///
/// ```rust
/// use lunchtray::catalog::{Category, MenuItem};
/// use lunchtray::order::OrderState;
/// use rust_decimal::Decimal;
///
/// let mut order = OrderState::new();
/// assert_eq!(order.total_price(), Decimal::ZERO);
///
/// order.select(Category::Entree, MenuItem::new("Burrito", Decimal::new(400, 2)));
/// order.select(Category::SideDish, MenuItem::new("Chips", Decimal::new(150, 2)));
/// assert_eq!(order.total_price(), Decimal::new(550, 2));
///
/// order.clear();
/// assert!(order.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    entree: Option<MenuItem>,
    side_dish: Option<MenuItem>,
    accompaniment: Option<MenuItem>,
}

impl OrderState {
    /// Create an order with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entree(&self) -> Option<&MenuItem> {
        self.entree.as_ref()
    }

    pub fn side_dish(&self) -> Option<&MenuItem> {
        self.side_dish.as_ref()
    }

    pub fn accompaniment(&self) -> Option<&MenuItem> {
        self.accompaniment.as_ref()
    }

    /// Selection for `category`, if any.
    pub fn get(&self, category: Category) -> Option<&MenuItem> {
        match category {
            Category::Entree => self.entree(),
            Category::SideDish => self.side_dish(),
            Category::Accompaniment => self.accompaniment(),
        }
    }

    /// Put `item` in the slot for `category`.
    ///
    /// Last write wins; the replaced item, if any, is returned.
    pub fn select(&mut self, category: Category, item: MenuItem) -> Option<MenuItem> {
        self.slot_mut(category).replace(item)
    }

    /// Unset every slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.selections().next().is_none()
    }

    /// Set slots in category order.
    pub fn selections(&self) -> impl Iterator<Item = (Category, &MenuItem)> {
        Category::ALL
            .into_iter()
            .filter_map(move |category| self.get(category).map(|item| (category, item)))
    }

    /// Sum of the selected prices; unset slots count as zero.
    ///
    /// Saturates at [`Decimal::MAX`]. A validated catalog never gets there.
    pub fn total_price(&self) -> Decimal {
        self.selections()
            .fold(Decimal::ZERO, |total, (_, item)| total.saturating_add(item.price))
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<MenuItem> {
        match category {
            Category::Entree => &mut self.entree,
            Category::SideDish => &mut self.side_dish,
            Category::Accompaniment => &mut self.accompaniment,
        }
    }
}

/// Format a price for display with two decimal places, e.g. `$5.50`.
///
/// ```rust
/// use lunchtray::order::format_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_price(Decimal::new(55, 1)), "$5.50");
/// assert_eq!(format_price(Decimal::ZERO), "$0.00");
/// ```
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}
