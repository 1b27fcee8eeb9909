//! Screen identifiers for the ordering flow.

use super::state::State;
use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the five screens of the ordering flow.
///
/// A bare tag. Titles and other presentation details belong to whoever
/// renders the screen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ScreenId {
    StartOrder,
    EntreeMenu,
    SideDishMenu,
    AccompanimentMenu,
    Checkout,
}

/// A route name that does not match any [`ScreenId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen route: {0:?}")]
pub struct ParseScreenError(pub String);

impl ScreenId {
    /// All screens in canonical flow order.
    pub const ALL: [ScreenId; 5] = [
        ScreenId::StartOrder,
        ScreenId::EntreeMenu,
        ScreenId::SideDishMenu,
        ScreenId::AccompanimentMenu,
        ScreenId::Checkout,
    ];

    /// Canonical successor of this screen.
    ///
    /// Returns `None` from [`ScreenId::Checkout`]; leaving checkout means
    /// starting a new order, which also resets the selections.
    ///
    /// ```rust
    /// use lunchtray::ScreenId;
    ///
    /// assert_eq!(ScreenId::StartOrder.next(), Some(ScreenId::EntreeMenu));
    /// assert_eq!(ScreenId::AccompanimentMenu.next(), Some(ScreenId::Checkout));
    /// assert_eq!(ScreenId::Checkout.next(), None);
    /// ```
    pub fn next(self) -> Option<ScreenId> {
        match self {
            Self::StartOrder => Some(Self::EntreeMenu),
            Self::EntreeMenu => Some(Self::SideDishMenu),
            Self::SideDishMenu => Some(Self::AccompanimentMenu),
            Self::AccompanimentMenu => Some(Self::Checkout),
            Self::Checkout => None,
        }
    }

    /// Menu category offered on this screen, if it is a menu screen.
    pub fn category(self) -> Option<Category> {
        match self {
            Self::EntreeMenu => Some(Category::Entree),
            Self::SideDishMenu => Some(Category::SideDish),
            Self::AccompanimentMenu => Some(Category::Accompaniment),
            Self::StartOrder | Self::Checkout => None,
        }
    }
}

impl State for ScreenId {
    fn name(&self) -> &'static str {
        match self {
            Self::StartOrder => "StartOrder",
            Self::EntreeMenu => "EntreeMenu",
            Self::SideDishMenu => "SideDishMenu",
            Self::AccompanimentMenu => "AccompanimentMenu",
            Self::Checkout => "Checkout",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Checkout)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScreenId {
    type Err = ParseScreenError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.name() == route)
            .ok_or_else(|| ParseScreenError(route.to_string()))
    }
}
