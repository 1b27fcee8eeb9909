//! Builder for constructing validated catalogs.

use super::error::{CatalogError, CatalogViolation};
use super::{CatalogConfig, Category, MenuCatalog, MenuItem};
use rust_decimal::Decimal;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<CatalogViolation>>;

/// Builder for constructing a [`MenuCatalog`] with a fluent API.
///
/// Validation runs in [`CatalogBuilder::build`] and reports every
/// violation in one pass.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    entrees: Vec<MenuItem>,
    side_dishes: Vec<MenuItem>,
    accompaniments: Vec<MenuItem>,
}

impl CatalogBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entree(self, item: MenuItem) -> Self {
        self.item(Category::Entree, item)
    }

    pub fn side_dish(self, item: MenuItem) -> Self {
        self.item(Category::SideDish, item)
    }

    pub fn accompaniment(self, item: MenuItem) -> Self {
        self.item(Category::Accompaniment, item)
    }

    /// Append an item to `category`.
    pub fn item(mut self, category: Category, item: MenuItem) -> Self {
        self.list_mut(category).push(item);
        self
    }

    /// Append several items to `category`.
    pub fn items(mut self, category: Category, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.list_mut(category).extend(items);
        self
    }

    /// Build the catalog.
    /// Returns every violation found if the data is invalid.
    pub fn build(self) -> Result<MenuCatalog, CatalogError> {
        let mut checks: Vec<Check> = Vec::new();
        for category in Category::ALL {
            checks.extend(check_category(category, self.list(category)));
        }
        checks.push(self.check_order_ceiling());

        match Validation::all_vec(checks) {
            Validation::Success(_) => {
                tracing::debug!(
                    entrees = self.entrees.len(),
                    side_dishes = self.side_dishes.len(),
                    accompaniments = self.accompaniments.len(),
                    "catalog built"
                );
                Ok(MenuCatalog {
                    entrees: self.entrees,
                    side_dishes: self.side_dishes,
                    accompaniments: self.accompaniments,
                })
            }
            Validation::Failure(errors) => {
                let violations: Vec<CatalogViolation> = errors.iter().cloned().collect();
                tracing::warn!(violations = violations.len(), "catalog rejected");
                Err(CatalogError::Invalid(violations))
            }
        }
    }

    /// The dearest item of every category must add up without overflow,
    /// so no order drawn from the catalog can have an unrepresentable total.
    fn check_order_ceiling(&self) -> Check {
        let mut total = Decimal::ZERO;
        for category in Category::ALL {
            let Some(dearest) = self
                .list(category)
                .iter()
                .filter(|item| item.price >= Decimal::ZERO)
                .max_by_key(|item| item.price)
            else {
                continue;
            };
            match total.checked_add(dearest.price) {
                Some(sum) => total = sum,
                None => {
                    return Validation::fail(CatalogViolation::PriceTooLarge {
                        category,
                        name: dearest.name.clone(),
                        price: dearest.price,
                    })
                }
            }
        }
        Validation::success(())
    }

    pub(super) fn from_config(config: CatalogConfig) -> Self {
        Self {
            entrees: config.entrees,
            side_dishes: config.side_dishes,
            accompaniments: config.accompaniments,
        }
    }

    fn list(&self, category: Category) -> &[MenuItem] {
        match category {
            Category::Entree => &self.entrees,
            Category::SideDish => &self.side_dishes,
            Category::Accompaniment => &self.accompaniments,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<MenuItem> {
        match category {
            Category::Entree => &mut self.entrees,
            Category::SideDish => &mut self.side_dishes,
            Category::Accompaniment => &mut self.accompaniments,
        }
    }
}

fn check(ok: bool, violation: impl FnOnce() -> CatalogViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// One check per rule per item, so nothing short-circuits.
fn check_category(category: Category, items: &[MenuItem]) -> Vec<Check> {
    let mut checks = vec![check(!items.is_empty(), || {
        CatalogViolation::EmptyCategory { category }
    })];

    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        checks.push(check(!item.name.trim().is_empty(), || {
            CatalogViolation::BlankName { category, index }
        }));
        checks.push(check(item.price >= Decimal::ZERO, || {
            CatalogViolation::NegativePrice {
                category,
                name: item.name.clone(),
                price: item.price,
            }
        }));
        checks.push(check(seen.insert(item.name.as_str()), || {
            CatalogViolation::DuplicateItem {
                category,
                name: item.name.clone(),
            }
        }));
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: i64) -> MenuItem {
        MenuItem::new(name, Decimal::new(cents, 2))
    }

    #[test]
    fn builder_requires_every_category() {
        let result = CatalogBuilder::new().entree(item("Burrito", 400)).build();

        match result {
            Err(CatalogError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![
                        CatalogViolation::EmptyCategory {
                            category: Category::SideDish
                        },
                        CatalogViolation::EmptyCategory {
                            category: Category::Accompaniment
                        },
                    ]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let result = CatalogBuilder::new()
            .entree(item("Burrito", 400))
            .entree(item("Burrito", 450))
            .side_dish(item("  ", 100))
            .accompaniment(item("Salsa", -25))
            .build();

        let Err(CatalogError::Invalid(violations)) = result else {
            panic!("Expected Invalid");
        };

        assert_eq!(violations.len(), 3);
        assert!(violations.iter().any(|v| matches!(
            v,
            CatalogViolation::DuplicateItem { category: Category::Entree, name } if name == "Burrito"
        )));
        assert!(violations.iter().any(|v| matches!(
            v,
            CatalogViolation::BlankName {
                category: Category::SideDish,
                index: 0
            }
        )));
        assert!(violations
            .iter()
            .any(|v| matches!(v, CatalogViolation::NegativePrice { .. })));
    }

    #[test]
    fn same_name_in_different_categories_is_allowed() {
        let result = CatalogBuilder::new()
            .entree(item("Special", 400))
            .side_dish(item("Special", 150))
            .accompaniment(item("Special", 25))
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn free_items_are_allowed() {
        let catalog = CatalogBuilder::new()
            .entree(item("Burrito", 400))
            .side_dish(item("Chips", 150))
            .accompaniment(item("Napkin", 0))
            .build()
            .unwrap();

        assert_eq!(
            catalog.items_for(Category::Accompaniment)[0].price,
            Decimal::ZERO
        );
    }

    #[test]
    fn prices_whose_sum_overflows_are_rejected() {
        let result = CatalogBuilder::new()
            .entree(MenuItem::new("Banquet", Decimal::MAX))
            .side_dish(item("Chips", 150))
            .side_dish(MenuItem::new("Gold Leaf", Decimal::MAX))
            .accompaniment(item("Salsa", 25))
            .build();

        match result {
            Err(CatalogError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![CatalogViolation::PriceTooLarge {
                        category: Category::SideDish,
                        name: "Gold Leaf".to_string(),
                        price: Decimal::MAX,
                    }]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn largest_price_alone_is_accepted() {
        let catalog = CatalogBuilder::new()
            .entree(MenuItem::new("Banquet", Decimal::MAX))
            .side_dish(item("Water", 0))
            .accompaniment(item("Napkin", 0))
            .build()
            .unwrap();

        assert_eq!(
            catalog.find(Category::Entree, "Banquet").map(|i| i.price),
            Some(Decimal::MAX)
        );
    }

    #[test]
    fn negative_prices_do_not_mask_overflow_check() {
        let result = CatalogBuilder::new()
            .entree(MenuItem::new("Banquet", Decimal::MAX))
            .side_dish(item("Refund", -100))
            .accompaniment(item("Napkin", 0))
            .build();

        let Err(CatalogError::Invalid(violations)) = result else {
            panic!("Expected Invalid");
        };
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0],
            CatalogViolation::NegativePrice { .. }
        ));
    }

    #[test]
    fn items_appends_in_order() {
        let catalog = CatalogBuilder::new()
            .items(
                Category::Entree,
                vec![item("A", 100), item("B", 200), item("C", 300)],
            )
            .side_dish(item("Chips", 150))
            .accompaniment(item("Salsa", 25))
            .build()
            .unwrap();

        let names: Vec<_> = catalog
            .items_for(Category::Entree)
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
