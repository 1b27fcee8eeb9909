//! Builder for constructing order flows.

use super::error::BuildError;
use super::{Observer, OrderFlow, OrderSnapshot};
use crate::catalog::MenuCatalog;
use crate::core::ScreenId;
use std::sync::Arc;

/// Builder for constructing an [`OrderFlow`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use lunchtray::catalog::MenuCatalog;
/// use lunchtray::{OrderFlow, ScreenId};
///
/// let flow = OrderFlow::builder()
///     .catalog(MenuCatalog::lunch_tray())
///     .observer(|snapshot| println!("now on {}", snapshot.screen))
///     .build()
///     .unwrap();
///
/// assert_eq!(flow.current_screen(), ScreenId::StartOrder);
/// ```
pub struct OrderFlowBuilder {
    catalog: Option<Arc<MenuCatalog>>,
    initial: ScreenId,
    observers: Vec<Observer>,
}

impl OrderFlowBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            catalog: None,
            initial: ScreenId::StartOrder,
            observers: Vec::new(),
        }
    }

    /// Set the catalog (required).
    pub fn catalog(mut self, catalog: impl Into<Arc<MenuCatalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Screen to open on. Defaults to [`ScreenId::StartOrder`].
    pub fn initial(mut self, screen: ScreenId) -> Self {
        self.initial = screen;
        self
    }

    /// Add an observer notified after every mutating call.
    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&OrderSnapshot) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the flow.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<OrderFlow, BuildError> {
        let catalog = self.catalog.ok_or(BuildError::MissingCatalog)?;

        let mut flow = OrderFlow::with_initial(catalog, self.initial);
        flow.observers = self.observers;

        tracing::debug!(
            order_id = %flow.order_id(),
            initial = %self.initial,
            "order flow built"
        );
        Ok(flow)
    }
}

impl Default for OrderFlowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn builder_validates_required_fields() {
        let result = OrderFlowBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingCatalog)));
    }

    #[test]
    fn fluent_api_builds_flow() {
        let flow = OrderFlowBuilder::new()
            .catalog(MenuCatalog::lunch_tray())
            .build()
            .unwrap();

        assert_eq!(flow.current_screen(), ScreenId::StartOrder);
        assert!(!flow.can_navigate_up());
    }

    #[test]
    fn initial_screen_can_be_overridden() {
        let flow = OrderFlowBuilder::new()
            .catalog(MenuCatalog::lunch_tray())
            .initial(ScreenId::Checkout)
            .build()
            .unwrap();

        assert_eq!(flow.current_screen(), ScreenId::Checkout);
        assert!(!flow.can_navigate_up());
    }

    #[test]
    fn observers_are_attached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut flow = OrderFlowBuilder::new()
            .catalog(MenuCatalog::lunch_tray())
            .observer(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        flow.select_by_name(Category::Entree, "Cauliflower").unwrap();
        flow.navigate_to(ScreenId::SideDishMenu);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
