//! The order state machine.
//!
//! [`OrderFlow`] owns the in-progress order and the current screen. It is
//! driven by whatever renders the screens: that layer picks items from the
//! catalog, calls [`OrderFlow::select_item`], and asks for transitions.
//! Which transitions are offered (Next, Cancel, Back) is the caller's
//! choice; the flow itself accepts any screen as a target.

mod builder;
pub mod error;

pub use builder::OrderFlowBuilder;
pub use error::{BuildError, FlowError};

use crate::catalog::{Category, MenuCatalog, MenuItem};
use crate::core::{NavigationHistory, ScreenId, State, StateTransition};
use crate::order::{format_price, OrderState};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Callback invoked with a fresh snapshot after every mutating call.
pub type Observer = Box<dyn Fn(&OrderSnapshot) + Send + Sync>;

/// Everything a renderer needs to draw the current screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Identifies the current order cycle; regenerated on every reset
    pub order_id: Uuid,
    /// When the current order cycle began
    pub started_at: DateTime<Utc>,
    pub screen: ScreenId,
    pub order: OrderState,
    pub total: Decimal,
    pub can_navigate_up: bool,
}

impl OrderSnapshot {
    /// Total formatted for display, e.g. `$5.50`.
    pub fn formatted_total(&self) -> String {
        format_price(self.total)
    }
}

/// Order state machine: current screen, back stack and selections.
///
/// The back stack is never trimmed. [`OrderFlow::cancel`] and
/// [`OrderFlow::submit`] push [`ScreenId::StartOrder`] like any other
/// navigation, so earlier cycles stay reachable through
/// [`OrderFlow::navigate_up`] and the stack grows by one entry per
/// completed or cancelled order.
///
/// # Example
///
/// ```rust
/// use lunchtray::catalog::{Category, MenuCatalog};
/// use lunchtray::{OrderFlow, ScreenId};
/// use rust_decimal::Decimal;
///
/// let catalog = MenuCatalog::lunch_tray();
/// let chili = catalog.find(Category::Entree, "Three Bean Chili").unwrap().clone();
///
/// let mut flow = OrderFlow::new(catalog);
/// assert_eq!(flow.current_screen(), ScreenId::StartOrder);
/// assert!(!flow.can_navigate_up());
///
/// flow.navigate_to(ScreenId::EntreeMenu);
/// flow.select_item(Category::Entree, chili);
/// assert_eq!(flow.total_price(), Decimal::new(400, 2));
///
/// assert!(flow.navigate_up());
/// assert_eq!(flow.current_screen(), ScreenId::StartOrder);
/// ```
pub struct OrderFlow {
    catalog: Arc<MenuCatalog>,
    order_id: Uuid,
    started_at: DateTime<Utc>,
    order: OrderState,
    current: ScreenId,
    history: NavigationHistory<ScreenId>,
    observers: Vec<Observer>,
}

impl OrderFlow {
    /// Create a flow on [`ScreenId::StartOrder`] with an empty order.
    pub fn new(catalog: impl Into<Arc<MenuCatalog>>) -> Self {
        Self::with_initial(catalog.into(), ScreenId::StartOrder)
    }

    /// Start building a flow.
    pub fn builder() -> OrderFlowBuilder {
        OrderFlowBuilder::new()
    }

    pub(crate) fn with_initial(catalog: Arc<MenuCatalog>, initial: ScreenId) -> Self {
        Self {
            catalog,
            order_id: Uuid::new_v4(),
            started_at: Utc::now(),
            order: OrderState::new(),
            current: initial,
            history: NavigationHistory::new(),
            observers: Vec::new(),
        }
    }

    /// Register a callback that receives a snapshot after every mutating call.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&OrderSnapshot) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current
    }

    pub fn order(&self) -> &OrderState {
        &self.order
    }

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    /// When the current order cycle began.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn history(&self) -> &NavigationHistory<ScreenId> {
        &self.history
    }

    /// Whether a "back" action has somewhere to go.
    pub fn can_navigate_up(&self) -> bool {
        !self.history.is_empty()
    }

    /// Sum of the selected prices; zero when nothing is selected.
    pub fn total_price(&self) -> Decimal {
        self.order.total_price()
    }

    /// Copy of the observable state.
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            order_id: self.order_id,
            started_at: self.started_at,
            screen: self.current,
            order: self.order.clone(),
            total: self.total_price(),
            can_navigate_up: self.can_navigate_up(),
        }
    }

    /// Select `item` for `category`, replacing any earlier choice.
    ///
    /// Screen and history are untouched.
    ///
    /// # Panics
    ///
    /// If `item` is not listed under `category` in this flow's catalog.
    pub fn select_item(&mut self, category: Category, item: MenuItem) {
        assert!(
            self.catalog.contains(category, &item),
            "{:?} is not a {} on this menu",
            item.name,
            category
        );

        tracing::debug!(
            order_id = %self.order_id,
            %category,
            item = %item.name,
            price = %item.price,
            "item selected"
        );
        self.order.select(category, item);
        self.notify();
    }

    /// Select the catalog item called `name` under `category`.
    ///
    /// Unlike [`OrderFlow::select_item`] an unknown item is a recoverable
    /// error, for callers that only hold item names.
    pub fn select_by_name(&mut self, category: Category, name: &str) -> Result<(), FlowError> {
        let Some(item) = self.catalog.find(category, name).cloned() else {
            tracing::warn!(%category, name, "no such item");
            return Err(FlowError::UnknownItem {
                category,
                name: name.to_string(),
            });
        };
        self.select_item(category, item);
        Ok(())
    }

    /// Clear every selection.
    ///
    /// Idempotent with respect to the order; each call starts a new order
    /// cycle with a fresh id.
    pub fn reset(&mut self) {
        self.clear_order();
        self.notify();
    }

    /// Push the current screen onto the back stack and show `screen`.
    ///
    /// Any screen may follow any other.
    pub fn navigate_to(&mut self, screen: ScreenId) {
        self.push_screen(screen);
        self.notify();
    }

    /// Return to the previous screen.
    ///
    /// Returns `false`, changing nothing, when the back stack is empty.
    pub fn navigate_up(&mut self) -> bool {
        let Some(transition) = self.history.pop() else {
            tracing::debug!(screen = %self.current, "back stack empty");
            return false;
        };

        tracing::debug!(from = %transition.to, to = %transition.from, "navigate up");
        self.current = transition.from;
        self.notify();
        true
    }

    /// Advance along the canonical flow.
    ///
    /// From [`ScreenId::Checkout`] this completes the order like
    /// [`OrderFlow::submit`]. Returns the screen now shown.
    pub fn next(&mut self) -> ScreenId {
        match self.current.next() {
            Some(screen) => self.navigate_to(screen),
            None => {
                self.submit();
            }
        }
        self.current
    }

    /// Abandon the order: clear it and go back to the start screen.
    ///
    /// The abandoned screen stays on the back stack.
    pub fn cancel(&mut self) {
        tracing::info!(
            order_id = %self.order_id,
            screen = %self.current,
            "order cancelled"
        );
        self.clear_order();
        self.push_screen(ScreenId::StartOrder);
        self.notify();
    }

    /// Complete the order and start over.
    ///
    /// Returns the order as it stood before being cleared.
    pub fn submit(&mut self) -> OrderSnapshot {
        let submitted = self.snapshot();
        if !self.current.is_final() {
            tracing::debug!(screen = %self.current, "submitting outside checkout");
        }
        tracing::info!(
            order_id = %submitted.order_id,
            items = submitted.order.selections().count(),
            total = %submitted.total,
            elapsed_ms = Utc::now()
                .signed_duration_since(submitted.started_at)
                .num_milliseconds(),
            "order submitted"
        );
        self.clear_order();
        self.push_screen(ScreenId::StartOrder);
        self.notify();
        submitted
    }

    fn clear_order(&mut self) {
        self.order.clear();
        self.order_id = Uuid::new_v4();
        self.started_at = Utc::now();
        tracing::debug!(order_id = %self.order_id, "order reset");
    }

    fn push_screen(&mut self, screen: ScreenId) {
        tracing::debug!(from = %self.current, to = %screen, "navigate");
        self.history.push(StateTransition {
            from: self.current,
            to: screen,
        });
        self.current = screen;
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer(&snapshot);
        }
    }
}

impl fmt::Debug for OrderFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderFlow")
            .field("order_id", &self.order_id)
            .field("started_at", &self.started_at)
            .field("current", &self.current)
            .field("order", &self.order)
            .field("history", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
