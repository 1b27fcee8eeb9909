//! Built-in Lunch Tray menu.

use super::{Category, MenuCatalog, MenuItem};
use rust_decimal::Decimal;

fn item(name: &str, description: &str, cents: i64) -> MenuItem {
    MenuItem::new(name, Decimal::new(cents, 2)).with_description(description)
}

impl MenuCatalog {
    /// The default Lunch Tray menu.
    ///
    /// ```rust
    /// use lunchtray::catalog::{Category, MenuCatalog};
    ///
    /// let catalog = MenuCatalog::lunch_tray();
    /// assert_eq!(catalog.items_for(Category::Entree).len(), 4);
    /// assert_eq!(catalog.items_for(Category::Accompaniment)[0].name, "Lunch Roll");
    /// ```
    pub fn lunch_tray() -> Self {
        let entrees = vec![
            item(
                "Cauliflower",
                "Whole cauliflower, brined, roasted, and deep fried",
                700,
            ),
            item(
                "Three Bean Chili",
                "Black beans, red beans, kidney beans, slow cooked, topped with onion",
                400,
            ),
            item(
                "Mushroom Pasta",
                "Penne pasta, mushrooms, basil, with plum tomatoes cooked in garlic and olive oil",
                550,
            ),
            item(
                "Spicy Black Bean Skillet",
                "Seasonal vegetables, black beans, house spice blend, served with avocado and quick pickled onions",
                550,
            ),
        ];
        let side_dishes = vec![
            item(
                "Summer Salad",
                "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
                250,
            ),
            item(
                "Butternut Squash Soup",
                "Roasted butternut squash, roasted peppers, chili oil",
                300,
            ),
            item(
                "Spicy Potatoes",
                "Marble potatoes, roasted, and fried in house spice blend",
                200,
            ),
            item("Coconut Rice", "Rice, coconut milk, lime, and sugar", 150),
        ];
        let accompaniments = vec![
            item("Lunch Roll", "Fresh-baked roll made in house", 50),
            item(
                "Mixed Berries",
                "Strawberries, blueberries, raspberries, and huckleberries",
                100,
            ),
            item(
                "Pickled Veggies",
                "Pickled cucumbers and carrots, made in house",
                50,
            ),
        ];

        Self {
            entrees,
            side_dishes,
            accompaniments,
        }
    }
}
