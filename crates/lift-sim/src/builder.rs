//! Fluent builder for constructing an [`Environment`].

use lift_core::{EnvConfig, Floor, LiftResult, RetargetGuard, SimRng, UniformChoice};

use crate::Environment;

/// Fluent builder for [`Environment<C>`].
///
/// Starts from an [`EnvConfig`] (or its defaults) and a [`SimRng`] seeded
/// from `config.seed`.  Swap the chooser with [`chooser`](Self::chooser) to
/// script passenger generation.
///
/// # Example
///
/// ```rust
/// use lift_sim::EnvBuilder;
///
/// let env = EnvBuilder::default()
///     .floors(-3, 12)
///     .max_people(50)
///     .elevators(2)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(env.elevators().len(), 2);
/// assert_eq!(env.reservoir(1), Some(50));
/// ```
pub struct EnvBuilder<C: UniformChoice = SimRng> {
    config:  EnvConfig,
    chooser: C,
}

impl Default for EnvBuilder<SimRng> {
    fn default() -> Self {
        Self::new(EnvConfig::default())
    }
}

impl EnvBuilder<SimRng> {
    /// Start from `config` with a chooser seeded from `config.seed`.
    pub fn new(config: EnvConfig) -> Self {
        let chooser = SimRng::new(config.seed);
        Self { config, chooser }
    }

    /// Reseed the built-in chooser.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self.chooser     = SimRng::new(seed);
        self
    }
}

impl<C: UniformChoice> EnvBuilder<C> {
    /// Replace the random-choice capability.
    pub fn chooser<D: UniformChoice>(self, chooser: D) -> EnvBuilder<D> {
        EnvBuilder { config: self.config, chooser }
    }

    /// Inclusive floor range; 0 is skipped.
    pub fn floors(mut self, low: Floor, high: Floor) -> Self {
        self.config.floor_low  = low;
        self.config.floor_high = high;
        self
    }

    pub fn max_people(mut self, max_people: u32) -> Self {
        self.config.max_people = max_people;
        self
    }

    pub fn elevators(mut self, count: usize) -> Self {
        self.config.num_elevators = count;
        self
    }

    pub fn car_capacity(mut self, capacity: usize) -> Self {
        self.config.car_capacity = Some(capacity);
        self
    }

    pub fn retarget_guard(mut self, guard: RetargetGuard) -> Self {
        self.config.retarget_guard = guard;
        self
    }

    /// Validate the configuration and return a freshly reset environment.
    pub fn build(self) -> LiftResult<Environment<C>> {
        Environment::new(self.config, self.chooser)
    }
}
