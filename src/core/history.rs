//! Navigation history tracking.
//!
//! The back stack of the ordering flow. Every forward navigation records
//! a transition; going back pops the most recent one and returns to the
//! screen it came from.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single forward navigation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The screen being left
    pub from: S,
    /// The screen being entered
    pub to: S,
}

/// Back stack of forward navigations.
///
/// Append-only except for popping the most recent entry on "back".
///
/// # Example
///
/// ```rust
/// use lunchtray::core::{NavigationHistory, StateTransition};
/// use lunchtray::ScreenId;
///
/// let mut history = NavigationHistory::new();
/// history.push(StateTransition {
///     from: ScreenId::StartOrder,
///     to: ScreenId::EntreeMenu,
/// });
/// history.push(StateTransition {
///     from: ScreenId::EntreeMenu,
///     to: ScreenId::SideDishMenu,
/// });
///
/// assert_eq!(history.previous(), Some(&ScreenId::EntreeMenu));
///
/// let popped = history.pop().unwrap();
/// assert_eq!(popped.to, ScreenId::SideDishMenu);
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct NavigationHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for NavigationHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> NavigationHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a forward navigation on top of the stack.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Remove and return the most recent navigation.
    ///
    /// Returns `None` when there is nothing to go back to.
    pub fn pop(&mut self) -> Option<StateTransition<S>> {
        self.transitions.pop()
    }

    /// Screen a "back" action would return to.
    pub fn previous(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.from)
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get all transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
