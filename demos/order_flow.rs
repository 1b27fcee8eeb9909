//! Lunch Tray Order Flow
//!
//! This example walks one order through every screen, backs up once to
//! change a choice, submits, then cancels a second order half way.
//!
//! Key concepts:
//! - Catalog as configuration (built-in menu, or JSON from a file)
//! - Observers receiving a snapshot after every call
//! - Next / Back / Cancel wired the way a UI layer would wire them
//!
//! Run with: cargo run --example order_flow [catalog.json]
//! Set RUST_LOG=lunchtray=debug to see every transition.

use lunchtray::catalog::{Category, MenuCatalog};
use lunchtray::order::format_price;
use lunchtray::{OrderFlow, ScreenId};

fn load_catalog() -> Result<MenuCatalog, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Ok(MenuCatalog::from_json(&json)?)
        }
        None => Ok(MenuCatalog::lunch_tray()),
    }
}

fn print_menu(catalog: &MenuCatalog, category: Category) {
    for item in catalog.items_for(category) {
        println!("    {:<26} {:>7}", item.name, format_price(item.price));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    lunchtray::logging::init_tracing(None);

    println!("=== Lunch Tray Order Flow ===\n");

    let catalog = load_catalog()?;
    let mut flow = OrderFlow::builder()
        .catalog(catalog)
        .observer(|snapshot| {
            println!(
                "  [{}] total {} back={}",
                snapshot.screen,
                snapshot.formatted_total(),
                snapshot.can_navigate_up
            );
        })
        .build()?;

    // Next from StartOrder
    flow.next();

    while let Some(category) = flow.current_screen().category() {
        println!("\n{category} menu:");
        print_menu(flow.catalog(), category);

        let first = flow.catalog().items_for(category)[0].clone();
        flow.select_item(category, first);
        flow.next();
    }

    println!("\nBack from {} to change the accompaniment", flow.current_screen());
    flow.navigate_up();
    if let Some(last) = flow.catalog().items_for(Category::Accompaniment).last() {
        let last = last.name.clone();
        flow.select_by_name(Category::Accompaniment, &last)?;
    }
    flow.navigate_to(ScreenId::Checkout);

    let receipt = flow.submit();
    println!("\nReceipt {}:", receipt.order_id);
    for (category, item) in receipt.order.selections() {
        println!("    {:<14} {:<26} {:>7}", category, item.name, format_price(item.price));
    }
    println!("    {:<41} {:>7}", "Total", receipt.formatted_total());

    println!("\nSecond order, cancelled on the side dish screen:");
    flow.next();
    flow.select_by_name(Category::Entree, "Three Bean Chili").ok();
    flow.next();
    flow.cancel();
    println!("Order empty after cancel: {}", flow.order().is_empty());

    println!("\n=== Example Complete ===");
    Ok(())
}
