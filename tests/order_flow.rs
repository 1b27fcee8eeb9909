//! End-to-end scenarios for the ordering flow.

use lunchtray::catalog::{CatalogBuilder, Category, MenuCatalog, MenuItem};
use lunchtray::{OrderFlow, ScreenId};
use rust_decimal::Decimal;

fn burrito() -> MenuItem {
    MenuItem::new("Burrito", Decimal::new(400, 2))
}

fn chips() -> MenuItem {
    MenuItem::new("Chips", Decimal::new(150, 2))
}

fn taqueria() -> MenuCatalog {
    CatalogBuilder::new()
        .entree(burrito())
        .side_dish(chips())
        .accompaniment(MenuItem::new("Salsa", Decimal::new(25, 2)))
        .build()
        .unwrap()
}

/// StartOrder -> EntreeMenu (Burrito) -> SideDishMenu (Chips)
fn burrito_and_chips() -> OrderFlow {
    let mut flow = OrderFlow::new(taqueria());
    flow.navigate_to(ScreenId::EntreeMenu);
    flow.select_item(Category::Entree, burrito());
    flow.navigate_to(ScreenId::SideDishMenu);
    flow.select_item(Category::SideDish, chips());
    flow
}

#[test]
fn burrito_and_chips_cost_five_fifty() {
    let flow = burrito_and_chips();

    assert_eq!(flow.total_price(), Decimal::new(550, 2));
    assert_eq!(flow.current_screen(), ScreenId::SideDishMenu);
}

#[test]
fn reset_after_burrito_and_chips_empties_the_order() {
    let mut flow = burrito_and_chips();

    flow.reset();

    assert_eq!(flow.total_price(), Decimal::ZERO);
    assert!(flow.order().entree().is_none());
    assert!(flow.order().side_dish().is_none());
    assert!(flow.order().accompaniment().is_none());
}

#[test]
fn backing_out_of_checkout_returns_to_start() {
    let mut flow = OrderFlow::new(taqueria());
    for screen in [
        ScreenId::EntreeMenu,
        ScreenId::SideDishMenu,
        ScreenId::AccompanimentMenu,
        ScreenId::Checkout,
    ] {
        flow.navigate_to(screen);
    }
    assert_eq!(flow.current_screen(), ScreenId::Checkout);

    let mut visited = Vec::new();
    while flow.navigate_up() {
        visited.push(flow.current_screen());
    }

    assert_eq!(
        visited,
        [
            ScreenId::AccompanimentMenu,
            ScreenId::SideDishMenu,
            ScreenId::EntreeMenu,
            ScreenId::StartOrder,
        ]
    );
    assert_eq!(flow.current_screen(), ScreenId::StartOrder);
    assert!(!flow.can_navigate_up());
}

#[test]
fn fresh_flow_has_no_back() {
    let mut flow = OrderFlow::new(taqueria());

    assert!(!flow.can_navigate_up());
    assert!(!flow.navigate_up());
    assert_eq!(flow.current_screen(), ScreenId::StartOrder);
}

#[test]
fn cancel_from_any_menu_discards_the_order() {
    for screen in [
        ScreenId::EntreeMenu,
        ScreenId::SideDishMenu,
        ScreenId::AccompanimentMenu,
        ScreenId::Checkout,
    ] {
        let mut flow = burrito_and_chips();
        flow.navigate_to(screen);

        flow.cancel();

        assert_eq!(flow.current_screen(), ScreenId::StartOrder);
        assert!(flow.order().is_empty());
        assert!(flow.can_navigate_up());
    }
}

#[test]
fn full_cycle_with_the_lunch_tray_menu() {
    let mut flow = OrderFlow::new(MenuCatalog::lunch_tray());

    flow.next();
    flow.select_by_name(Category::Entree, "Cauliflower").unwrap();
    flow.next();
    flow.select_by_name(Category::SideDish, "Summer Salad").unwrap();
    flow.next();
    flow.select_by_name(Category::Accompaniment, "Lunch Roll").unwrap();
    flow.next();

    assert_eq!(flow.current_screen(), ScreenId::Checkout);
    assert_eq!(flow.snapshot().formatted_total(), "$10.00");

    // Change the side dish from checkout.
    flow.navigate_up();
    flow.navigate_up();
    assert_eq!(flow.current_screen(), ScreenId::SideDishMenu);
    flow.select_by_name(Category::SideDish, "Coconut Rice").unwrap();
    flow.navigate_to(ScreenId::Checkout);

    let receipt = flow.submit();
    assert_eq!(receipt.total, Decimal::new(900, 2));
    assert_eq!(
        receipt.order.side_dish().map(|i| i.name.as_str()),
        Some("Coconut Rice")
    );
    assert_eq!(flow.current_screen(), ScreenId::StartOrder);
    assert!(flow.order().is_empty());
}

#[test]
fn flows_from_one_json_catalog_do_not_interfere() {
    let catalog = std::sync::Arc::new(
        MenuCatalog::from_json(
            r#"{
                "entrees": [{"name": "Burrito", "price": "4.00"}],
                "side_dishes": [{"name": "Chips", "price": "1.50"}],
                "accompaniments": [{"name": "Salsa", "price": "0.25"}]
            }"#,
        )
        .unwrap(),
    );

    let mut lunch = OrderFlow::new(std::sync::Arc::clone(&catalog));
    let mut dinner = OrderFlow::new(catalog);

    lunch.select_by_name(Category::Entree, "Burrito").unwrap();
    dinner.select_by_name(Category::SideDish, "Chips").unwrap();
    dinner.navigate_to(ScreenId::Checkout);

    assert_eq!(lunch.total_price(), Decimal::new(400, 2));
    assert_eq!(dinner.total_price(), Decimal::new(150, 2));
    assert_eq!(lunch.current_screen(), ScreenId::StartOrder);
}
