//! Core State trait for flow states.
//!
//! Every screen identifier the order flow can sit on implements this trait,
//! which provides pure methods for inspecting where a state sits in its cycle.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for order flow states.
///
/// All methods are pure - no side effects. States are plain tags that
/// describe the current position in a flow.
///
/// # Required Traits
///
/// - `Copy`: States are small tags, copied freely into history entries
/// - `PartialEq`: States must be comparable for navigation logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States travel inside snapshots
///
/// # Example
///
/// ```rust
/// use lunchtray::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step {
///     Welcome,
///     Pick,
///     Pay,
/// }
///
/// impl State for Step {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Welcome => "Welcome",
///             Self::Pick => "Pick",
///             Self::Pay => "Pay",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Pay)
///     }
/// }
///
/// assert!(!Step::Welcome.is_final());
/// assert!(Step::Pay.is_final());
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &'static str;

    /// Check if this state closes a cycle of the flow.
    ///
    /// Final states are not absorbing: a flow leaves them by starting over.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
