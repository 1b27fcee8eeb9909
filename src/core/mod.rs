//! Core flow types.
//!
//! This module contains the pure building blocks of the ordering flow:
//! - State definitions via the `State` trait
//! - The closed set of screens, `ScreenId`
//! - The back stack, `NavigationHistory`
//!
//! Nothing here performs I/O or logging.

mod history;
mod screen;
mod state;

pub use history::{NavigationHistory, StateTransition};
pub use screen::{ParseScreenError, ScreenId};
pub use state::State;
