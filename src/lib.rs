//! Lunch Tray: the order state machine behind a lunch ordering flow.
//!
//! A customer walks five screens (start, entree, side dish, accompaniment,
//! checkout), picking at most one item per menu category. This crate holds
//! the logic behind those screens and nothing else: rendering and platform
//! navigation are left to the caller, which reads the current screen and
//! order from an [`OrderFlow`] and calls its operations in response to
//! user actions.
//!
//! # Core Concepts
//!
//! - **Catalog**: validated, read-only menu passed in as configuration
//! - **Order**: one optional selection per category and its total price
//! - **Flow**: current screen plus back stack, any screen to any screen
//!
//! # Example
//!
//! ```rust
//! use lunchtray::catalog::{Category, MenuCatalog};
//! use lunchtray::{OrderFlow, ScreenId};
//!
//! let mut flow = OrderFlow::new(MenuCatalog::lunch_tray());
//!
//! flow.next(); // EntreeMenu
//! flow.select_by_name(Category::Entree, "Mushroom Pasta").unwrap();
//! flow.next(); // SideDishMenu
//! flow.select_by_name(Category::SideDish, "Coconut Rice").unwrap();
//! flow.next(); // AccompanimentMenu
//! flow.next(); // Checkout
//!
//! assert_eq!(flow.current_screen(), ScreenId::Checkout);
//! assert_eq!(flow.snapshot().formatted_total(), "$7.00");
//!
//! let receipt = flow.submit();
//! assert_eq!(receipt.order.selections().count(), 2);
//! assert_eq!(flow.current_screen(), ScreenId::StartOrder);
//! ```

pub mod catalog;
pub mod core;
pub mod flow;
pub mod logging;
pub mod order;

// Re-export commonly used types
pub use crate::catalog::{Category, MenuCatalog, MenuItem};
pub use crate::core::{NavigationHistory, ScreenId, State};
pub use crate::flow::{OrderFlow, OrderSnapshot};
pub use crate::order::OrderState;
