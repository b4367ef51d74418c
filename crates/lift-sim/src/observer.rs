//! Step observer trait for progress reporting and data collection.

use lift_core::{ElevatorId, Floor, Tick};

/// Callbacks invoked by [`Environment::step_observed`][crate::Environment::step_observed].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: refusal counter
///
/// ```rust
/// use lift_core::{ElevatorId, Floor};
/// use lift_sim::EnvObserver;
///
/// #[derive(Default)]
/// struct Refusals(usize);
///
/// impl EnvObserver for Refusals {
///     fn on_retarget_rejected(&mut self, _car: ElevatorId, _requested: Floor) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait EnvObserver {
    /// Called before any car moves.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called when a car's guard refused the controller's requested target.
    fn on_retarget_rejected(&mut self, _car: ElevatorId, _requested: Floor) {}

    /// Called after every car has moved.  `tick` is the step just completed.
    fn on_step_end(&mut self, _tick: Tick) {}
}

/// An [`EnvObserver`] that does nothing.
pub struct NoopObserver;

impl EnvObserver for NoopObserver {}
