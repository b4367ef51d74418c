//! Construction-time configuration.

use crate::{Floor, FloorSet, LiftError, LiftResult};

/// How a car decides whether a new target is reachable given its momentum.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetargetGuard {
    /// Accept only `new > position + velocity + 0.5`, whichever way the car
    /// is going.  Downward retargets are therefore always refused.
    #[default]
    AboveOnly,
    /// Accept a target more than half a floor away from the car's next
    /// position, on either side.
    Symmetric,
}

impl RetargetGuard {
    /// Whether a car at `position` moving at `velocity` may take `new_target`.
    pub fn accepts(self, new_target: Floor, position: f64, velocity: f64) -> bool {
        let next = position + velocity;
        let new  = new_target as f64;
        match self {
            RetargetGuard::AboveOnly => new > next + 0.5,
            RetargetGuard::Symmetric => new > next + 0.5 || new < next - 0.5,
        }
    }
}

/// Everything needed to build an environment.
///
/// Typically constructed in code by a training harness, or loaded from JSON
/// by an application crate (with the `serde` feature).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnvConfig {
    /// Inclusive lowest floor.  Negative values are basements.
    pub floor_low: Floor,

    /// Inclusive highest floor.
    pub floor_high: Floor,

    /// Total population, seeded on the base floor at every reset.  Must be ≥ 1.
    pub max_people: u32,

    /// Number of cars.  Must be ≥ 1.
    pub num_elevators: usize,

    /// Riders a car accepts in one `board` call plus those already aboard.
    /// `None` means unlimited.
    pub car_capacity: Option<usize>,

    /// Retarget rule applied by every car.
    pub retarget_guard: RetargetGuard,

    /// Seed for the built-in [`SimRng`](crate::SimRng) chooser.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            floor_low:      1,
            floor_high:     10,
            max_people:     100,
            num_elevators:  1,
            car_capacity:   None,
            retarget_guard: RetargetGuard::AboveOnly,
            seed:           42,
        }
    }
}

impl EnvConfig {
    /// Config for `floor_range` with the given population and car count; the
    /// remaining fields take their defaults.
    pub fn new(floor_range: (Floor, Floor), max_people: u32, num_elevators: usize) -> Self {
        Self {
            floor_low: floor_range.0,
            floor_high: floor_range.1,
            max_people,
            num_elevators,
            ..Self::default()
        }
    }

    /// Check every field and build the floor set.
    ///
    /// # Errors
    ///
    /// - [`LiftError::Config`] for `max_people == 0`, `num_elevators == 0`,
    ///   `car_capacity == Some(0)`, an inverted range, or a range that does
    ///   not contain the base floor.
    /// - [`LiftError::TooFewFloors`] if the range yields fewer than two floors.
    pub fn validate(&self) -> LiftResult<FloorSet> {
        if self.max_people < 1 {
            return Err(LiftError::Config("max_people must be at least 1".into()));
        }
        if self.num_elevators < 1 {
            return Err(LiftError::Config("num_elevators must be at least 1".into()));
        }
        if u16::try_from(self.num_elevators).is_err() {
            return Err(LiftError::Config(format!(
                "num_elevators {} exceeds {}",
                self.num_elevators,
                u16::MAX
            )));
        }
        if self.car_capacity == Some(0) {
            return Err(LiftError::Config("car_capacity must be at least 1".into()));
        }

        let floors = FloorSet::from_range(self.floor_low, self.floor_high)?;
        if floors.len() < 2 {
            return Err(LiftError::TooFewFloors(floors.len()));
        }
        if !floors.contains(crate::BASE_FLOOR) {
            return Err(LiftError::Config(format!(
                "floor range [{}, {}] does not contain base floor {}",
                self.floor_low,
                self.floor_high,
                crate::BASE_FLOOR
            )));
        }
        Ok(floors)
    }
}
