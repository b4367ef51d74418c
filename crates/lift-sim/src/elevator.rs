//! A single car: motion model and passenger manifest.

use std::collections::{BTreeMap, BTreeSet};

use lift_core::{
    BASE_FLOOR, ElevatorId, Floor, FloorSet, LiftError, LiftResult, NO_CHANGE, PassengerId,
    RetargetGuard,
};
use tracing::{debug, trace};

use crate::Passenger;

/// Speed change per tick, in floors per tick.
pub const ACCELERATION: f64 = 0.5;

/// Top speed, in floors per tick.
pub const MAX_SPEED: f64 = 1.0;

/// Every velocity a car may hold after a tick.
pub const VELOCITY_LEVELS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

/// What a tick did with the requested target.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Retarget {
    /// The request was [`NO_CHANGE`].
    Unchanged,
    Accepted,
    /// The guard refused the request; the old target stands.
    Rejected,
}

/// One elevator car.
///
/// Position is real-valued so a car can sit between floors mid-flight; the
/// target is always a valid floor.  The manifest maps every floor of the
/// building to the riders heading there, including floors nobody is going to.
#[derive(Clone, Debug)]
pub struct Elevator {
    id:       ElevatorId,
    position: f64,
    target:   Floor,
    velocity: f64,
    guard:    RetargetGuard,
    manifest: BTreeMap<Floor, BTreeSet<PassengerId>>,
}

impl Elevator {
    /// A car parked on the base floor with an empty bucket for every floor.
    pub fn new(id: ElevatorId, floors: &FloorSet, guard: RetargetGuard) -> Self {
        Self {
            id,
            position: BASE_FLOOR as f64,
            target:   BASE_FLOOR,
            velocity: 0.0,
            guard,
            manifest: floors.iter().map(|f| (f, BTreeSet::new())).collect(),
        }
    }

    /// Park on the base floor at rest and empty every bucket.
    pub fn reset(&mut self) {
        self.position = BASE_FLOOR as f64;
        self.target   = BASE_FLOOR;
        self.velocity = 0.0;
        for riders in self.manifest.values_mut() {
            riders.clear();
        }
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Advance one tick toward `requested` (or the current target when
    /// `requested` is [`NO_CHANGE`]).
    ///
    /// # Errors
    ///
    /// - [`LiftError::UnknownFloor`] if `requested` is not a floor of this
    ///   building.
    /// - [`LiftError::InvalidVelocity`] if the motion update produced a
    ///   velocity outside [`VELOCITY_LEVELS`].
    pub fn tick(&mut self, requested: Floor) -> LiftResult<Retarget> {
        let outcome = if requested == NO_CHANGE {
            Retarget::Unchanged
        } else if self.update_target_floor(requested)? {
            Retarget::Accepted
        } else {
            Retarget::Rejected
        };
        self.update_motion()?;
        Ok(outcome)
    }

    /// Try to point the car at `new_target`.  Returns whether it was taken.
    ///
    /// A refusal is normal operation, not an error: the car keeps its old
    /// target.
    pub fn update_target_floor(&mut self, new_target: Floor) -> LiftResult<bool> {
        if !self.manifest.contains_key(&new_target) {
            return Err(LiftError::UnknownFloor(new_target));
        }
        if self.guard.accepts(new_target, self.position, self.velocity) {
            self.target = new_target;
            Ok(true)
        } else {
            debug!(
                car = %self.id,
                requested = new_target,
                position = self.position,
                velocity = self.velocity,
                "retarget refused"
            );
            Ok(false)
        }
    }

    /// Apply one tick of the acceleration-limited motion law.
    ///
    /// Heading up, the car gains 0.5 of speed per tick up to 1.0; heading
    /// down, it loses 0.5 per tick down to -1.0; then it moves by its
    /// velocity.  A car half a floor from its target at full speed brakes to
    /// 0.5 so it lands exactly, and a car that reaches its target stops.  At
    /// the target the velocity is left alone.
    pub fn update_motion(&mut self) -> LiftResult<()> {
        let target = self.target as f64;
        let d      = target - self.position;

        if d > 0.0 {
            if self.velocity < MAX_SPEED {
                self.velocity = (self.velocity + ACCELERATION).min(MAX_SPEED);
            }
            if self.velocity > d && self.velocity > ACCELERATION {
                self.velocity -= ACCELERATION;
            }
            self.position += self.velocity;
            if self.velocity > 0.0 && self.position >= target {
                self.position = target;
                self.velocity = 0.0;
            }
        } else if d < 0.0 {
            if self.velocity > -MAX_SPEED {
                self.velocity = (self.velocity - ACCELERATION).max(-MAX_SPEED);
            }
            if self.velocity < d && self.velocity < -ACCELERATION {
                self.velocity += ACCELERATION;
            }
            self.position += self.velocity;
            if self.velocity < 0.0 && self.position <= target {
                self.position = target;
                self.velocity = 0.0;
            }
        }

        if !VELOCITY_LEVELS.contains(&self.velocity) {
            return Err(LiftError::InvalidVelocity(self.velocity));
        }
        trace!(car = %self.id, position = self.position, velocity = self.velocity, target = self.target, "moved");
        Ok(())
    }

    // ── Manifest ──────────────────────────────────────────────────────────

    /// Put each passenger in the bucket for its destination.
    ///
    /// Waiting sets are not touched; the caller removes boarded passengers
    /// from their floor.  Returns the number added.
    ///
    /// # Errors
    ///
    /// [`LiftError::UnknownFloor`] if a destination is not a floor of this
    /// building.  Passengers before the offending one stay aboard.
    pub fn get_on<'a>(
        &mut self,
        passengers: impl IntoIterator<Item = (PassengerId, &'a Passenger)>,
    ) -> LiftResult<usize> {
        let mut added = 0;
        for (id, passenger) in passengers {
            let bucket = self
                .manifest
                .get_mut(&passenger.destination)
                .ok_or(LiftError::UnknownFloor(passenger.destination))?;
            if bucket.insert(id) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Unload everyone whose destination is the current floor and return how
    /// many left.
    ///
    /// # Errors
    ///
    /// [`LiftError::NotAtFloor`] unless the car is exactly on a valid floor.
    pub fn get_off(&mut self) -> LiftResult<usize> {
        self.take_arrivals().map(|riders| riders.len())
    }

    /// Like [`get_off`](Self::get_off), but hands back the alighting ids.
    pub fn take_arrivals(&mut self) -> LiftResult<BTreeSet<PassengerId>> {
        let floor  = self.current_floor().ok_or(LiftError::NotAtFloor(self.position))?;
        let bucket = self
            .manifest
            .get_mut(&floor)
            .ok_or(LiftError::NotAtFloor(self.position))?;
        Ok(std::mem::take(bucket))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Floor {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn guard(&self) -> RetargetGuard {
        self.guard
    }

    /// The floor the car is exactly on, if any.
    pub fn current_floor(&self) -> Option<Floor> {
        FloorSet::as_floor(self.position).filter(|f| self.manifest.contains_key(f))
    }

    /// At rest on its target.
    pub fn is_idle(&self) -> bool {
        self.velocity == 0.0 && self.position == self.target as f64
    }

    /// Riders aboard.
    pub fn load(&self) -> usize {
        self.manifest.values().map(BTreeSet::len).sum()
    }

    pub fn manifest(&self) -> &BTreeMap<Floor, BTreeSet<PassengerId>> {
        &self.manifest
    }

    /// Riders heading to `floor`; `None` for a floor outside the building.
    pub fn passengers_for(&self, floor: Floor) -> Option<&BTreeSet<PassengerId>> {
        self.manifest.get(&floor)
    }

    /// Overwrite the physical state.  Test and tooling hook; the velocity is
    /// checked against [`VELOCITY_LEVELS`] and the target against the floors.
    pub fn set_state(&mut self, position: f64, target: Floor, velocity: f64) -> LiftResult<()> {
        if !VELOCITY_LEVELS.contains(&velocity) {
            return Err(LiftError::InvalidVelocity(velocity));
        }
        if !self.manifest.contains_key(&target) {
            return Err(LiftError::UnknownFloor(target));
        }
        self.position = position;
        self.target   = target;
        self.velocity = velocity;
        Ok(())
    }
}
