//! The `Environment`: building bookkeeping plus the per-step orchestration of
//! every car.

use std::collections::{BTreeMap, BTreeSet};

use lift_core::{
    BASE_FLOOR, Direction, ElevatorId, EnvConfig, Floor, FloorSet, LiftError, LiftResult,
    PassengerId, SimRng, Tick, UniformChoice,
};
use tracing::{debug, info};

use crate::{
    Elevator, EnvObserver, NoopObserver, Passenger, PassengerRegistry, Retarget,
    elevator::VELOCITY_LEVELS,
};

// ── WaitingSets ───────────────────────────────────────────────────────────────

/// The passengers waiting on one floor, split by the way they want to go.
///
/// `BTreeSet` keeps ids in generation order, so boarding is first come first
/// served.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitingSets {
    pub up:   BTreeSet<PassengerId>,
    pub down: BTreeSet<PassengerId>,
}

impl WaitingSets {
    pub fn get(&self, direction: Direction) -> &BTreeSet<PassengerId> {
        match direction {
            Direction::Up   => &self.up,
            Direction::Down => &self.down,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut BTreeSet<PassengerId> {
        match direction {
            Direction::Up   => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    pub fn clear(&mut self) {
        self.up.clear();
        self.down.clear();
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Where the building's people are right now.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Population {
    /// People on floors who are not yet tracked passengers.
    pub reservoir: u64,
    /// Passengers in waiting sets.
    pub waiting:   u64,
    /// Passengers in car manifests.
    pub riding:    u64,
}

impl Population {
    #[inline]
    pub fn total(&self) -> u64 {
        self.reservoir + self.waiting + self.riding
    }
}

// ── Environment ───────────────────────────────────────────────────────────────

/// A building with one or more cars.
///
/// `Environment<C>` owns every per-floor map, every car, and the passenger
/// registry.  `C` is the injected random-choice capability (a seeded
/// [`SimRng`] unless a caller supplies its own).
///
/// Create via [`EnvBuilder`][crate::EnvBuilder] or [`Environment::new`].
pub struct Environment<C: UniformChoice = SimRng> {
    config:     EnvConfig,
    floors:     FloorSet,
    /// People per floor not yet materialized as passengers.
    reservoir:  BTreeMap<Floor, u32>,
    waiting:    BTreeMap<Floor, WaitingSets>,
    elevators:  Vec<Elevator>,
    passengers: PassengerRegistry,
    chooser:    C,
    tick:       Tick,
}

impl Environment<SimRng> {
    /// Build with a [`SimRng`] seeded from `config.seed`.
    pub fn seeded(config: EnvConfig) -> LiftResult<Self> {
        let rng = SimRng::new(config.seed);
        Self::new(config, rng)
    }
}

impl<C: UniformChoice> Environment<C> {
    /// Validate `config`, build the floors and cars, then reset.
    ///
    /// # Errors
    ///
    /// Whatever [`EnvConfig::validate`] reports.
    pub fn new(config: EnvConfig, chooser: C) -> LiftResult<Self> {
        let floors = config.validate()?;

        let elevators = (0..config.num_elevators)
            .map(|i| {
                let id = ElevatorId::try_from(i)
                    .map_err(|_| LiftError::Config(format!("elevator index {i} overflows")))?;
                Ok(Elevator::new(id, &floors, config.retarget_guard))
            })
            .collect::<LiftResult<Vec<_>>>()?;

        let mut env = Self {
            reservoir:  floors.iter().map(|f| (f, 0)).collect(),
            waiting:    floors.iter().map(|f| (f, WaitingSets::default())).collect(),
            config,
            floors,
            elevators,
            passengers: PassengerRegistry::new(),
            chooser,
            tick:       Tick::ZERO,
        };
        env.reset();
        Ok(env)
    }

    // ── Episode lifecycle ─────────────────────────────────────────────────

    /// Start a new episode: everyone back in the base-floor reservoir, no
    /// passengers, every car parked on the base floor.
    pub fn reset(&mut self) {
        for count in self.reservoir.values_mut() {
            *count = 0;
        }
        for sets in self.waiting.values_mut() {
            sets.clear();
        }
        if let Some(base) = self.reservoir.get_mut(&BASE_FLOOR) {
            *base = self.config.max_people;
        }
        for car in &mut self.elevators {
            car.reset();
        }
        self.passengers.clear();
        self.tick = Tick::ZERO;

        info!(
            floors = self.floors.len(),
            elevators = self.elevators.len(),
            people = self.config.max_people,
            "environment reset"
        );
    }

    /// Advance every car by one tick, in registration order.
    ///
    /// `actions[i]` is car `i`'s requested target floor, or
    /// [`NO_CHANGE`](lift_core::NO_CHANGE).
    ///
    /// # Errors
    ///
    /// - [`LiftError::ActionCountMismatch`] if `actions.len()` differs from
    ///   the car count.  Checked before any car moves.
    /// - Any error from [`Elevator::tick`].  Cars before the failing one have
    ///   already moved; treat the episode as over and reset.
    pub fn step(&mut self, actions: &[Floor]) -> LiftResult<()> {
        self.step_observed(actions, &mut NoopObserver)
    }

    /// [`step`](Self::step) with observer callbacks.
    pub fn step_observed<O: EnvObserver>(
        &mut self,
        actions:  &[Floor],
        observer: &mut O,
    ) -> LiftResult<()> {
        if actions.len() != self.elevators.len() {
            return Err(LiftError::ActionCountMismatch {
                expected: self.elevators.len(),
                got:      actions.len(),
            });
        }

        let now = self.tick;
        observer.on_step_start(now);
        for (car, &requested) in self.elevators.iter_mut().zip(actions) {
            if car.tick(requested)? == Retarget::Rejected {
                observer.on_retarget_rejected(car.id(), requested);
            }
        }
        observer.on_step_end(now);

        self.tick = now.next();
        Ok(())
    }

    // ── Passenger lifecycle ───────────────────────────────────────────────

    /// Turn one person from a random non-empty reservoir into a waiting
    /// passenger with a random destination.
    ///
    /// # Errors
    ///
    /// [`LiftError::ReservoirExhausted`] if every reservoir is empty.
    pub fn generate_passenger(&mut self) -> LiftResult<PassengerId> {
        let stocked: Vec<Floor> = self
            .reservoir
            .iter()
            .filter(|&(_, &n)| n > 0)
            .map(|(&f, _)| f)
            .collect();
        let origin = self
            .chooser
            .choose(&stocked)
            .ok_or(LiftError::ReservoirExhausted)?;

        let passenger = Passenger::new(origin, &self.floors, &mut self.chooser)?;
        let direction = passenger.direction()?;
        let destination = passenger.destination;

        if let Some(count) = self.reservoir.get_mut(&origin) {
            *count -= 1;
        }
        let id = self.passengers.insert(passenger)?;
        self.waiting
            .get_mut(&origin)
            .ok_or(LiftError::UnknownFloor(origin))?
            .get_mut(direction)
            .insert(id);

        debug!(passenger = %id, origin, destination, %direction, "passenger generated");
        Ok(id)
    }

    /// Move the passengers waiting at `car`'s floor in `direction` into the
    /// car, oldest first, up to the configured capacity.  Returns how many
    /// boarded.
    ///
    /// # Errors
    ///
    /// - [`LiftError::UnknownElevator`] for a bad `car`.
    /// - [`LiftError::NotAtFloor`] unless the car is exactly on a floor.
    pub fn board(&mut self, car: ElevatorId, direction: Direction) -> LiftResult<usize> {
        let elevator = self
            .elevators
            .get_mut(car.index())
            .ok_or(LiftError::UnknownElevator(car))?;
        let floor = elevator
            .current_floor()
            .ok_or(LiftError::NotAtFloor(elevator.position()))?;

        let room = match self.config.car_capacity {
            Some(cap) => cap.saturating_sub(elevator.load()),
            None      => usize::MAX,
        };
        let queue = self
            .waiting
            .get_mut(&floor)
            .ok_or(LiftError::UnknownFloor(floor))?
            .get_mut(direction);
        let chosen: Vec<PassengerId> = queue.iter().take(room).copied().collect();

        let mut boarding = Vec::with_capacity(chosen.len());
        for &id in &chosen {
            let passenger = self.passengers.get(id).ok_or_else(|| {
                LiftError::Violation(format!("{id} waits on floor {floor} but is not registered"))
            })?;
            boarding.push((id, passenger));
        }
        for id in &chosen {
            queue.remove(id);
        }
        let boarded = elevator.get_on(boarding)?;

        if boarded > 0 {
            debug!(%car, floor, %direction, boarded, load = elevator.load(), "boarded");
        }
        Ok(boarded)
    }

    /// Let everyone off `car` whose destination is its current floor.  They
    /// stop being tracked and rejoin that floor's reservoir.  Returns how
    /// many got off.
    ///
    /// # Errors
    ///
    /// - [`LiftError::UnknownElevator`] for a bad `car`.
    /// - [`LiftError::NotAtFloor`] unless the car is exactly on a floor.
    pub fn alight(&mut self, car: ElevatorId) -> LiftResult<usize> {
        let elevator = self
            .elevators
            .get_mut(car.index())
            .ok_or(LiftError::UnknownElevator(car))?;
        let floor = elevator
            .current_floor()
            .ok_or(LiftError::NotAtFloor(elevator.position()))?;
        let arrivals = elevator.take_arrivals()?;

        for &id in &arrivals {
            if self.passengers.remove(id).is_none() {
                return Err(LiftError::Violation(format!(
                    "{id} rode {car} but is not registered"
                )));
            }
        }
        let count = arrivals.len();
        let people = u32::try_from(count)
            .map_err(|_| LiftError::Violation(format!("{count} arrivals overflow a reservoir")))?;
        *self
            .reservoir
            .get_mut(&floor)
            .ok_or(LiftError::UnknownFloor(floor))? += people;

        if count > 0 {
            debug!(%car, floor, alighted = count, "alighted");
        }
        Ok(count)
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Head count by location.
    pub fn population(&self) -> Population {
        Population {
            reservoir: self.reservoir.values().map(|&n| u64::from(n)).sum(),
            waiting:   self.waiting.values().map(|w| w.len() as u64).sum(),
            riding:    self.elevators.iter().map(|e| e.load() as u64).sum(),
        }
    }

    /// Verify the building's bookkeeping.
    ///
    /// Checks that the population is conserved, that every per-floor map is
    /// keyed by exactly the valid floors, that every car holds an allowed
    /// velocity, and that every registered passenger sits in exactly one
    /// waiting set or manifest bucket consistent with its record.
    ///
    /// # Errors
    ///
    /// [`LiftError::Violation`] describing the first broken rule.
    pub fn check_invariants(&self) -> LiftResult<()> {
        let violation = |msg: String| Err(LiftError::Violation(msg));

        let population = self.population();
        if population.total() != u64::from(self.config.max_people) {
            return violation(format!(
                "population {population:?} does not add up to {}",
                self.config.max_people
            ));
        }

        let floors = self.floors.as_slice();
        if !self.reservoir.keys().copied().eq(floors.iter().copied()) {
            return violation("reservoir keys differ from the floor set".into());
        }
        if !self.waiting.keys().copied().eq(floors.iter().copied()) {
            return violation("waiting-set keys differ from the floor set".into());
        }

        let mut seen: BTreeSet<PassengerId> = BTreeSet::new();
        for (&floor, sets) in &self.waiting {
            for direction in Direction::ALL {
                for &id in sets.get(direction) {
                    let Some(p) = self.passengers.get(id) else {
                        return violation(format!("{id} waits on floor {floor} but is not registered"));
                    };
                    if p.origin != floor || p.direction()? != direction {
                        return violation(format!("{id} is in the wrong waiting set on floor {floor}"));
                    }
                    if !seen.insert(id) {
                        return violation(format!("{id} is tracked twice"));
                    }
                }
            }
        }

        for car in &self.elevators {
            if !VELOCITY_LEVELS.contains(&car.velocity()) {
                return Err(LiftError::InvalidVelocity(car.velocity()));
            }
            if !car.manifest().keys().copied().eq(floors.iter().copied()) {
                return violation(format!("{} manifest keys differ from the floor set", car.id()));
            }
            for (&destination, riders) in car.manifest() {
                for &id in riders {
                    let Some(p) = self.passengers.get(id) else {
                        return violation(format!("{id} rides {} but is not registered", car.id()));
                    };
                    if p.destination != destination {
                        return violation(format!("{id} is in the wrong bucket of {}", car.id()));
                    }
                    if !seen.insert(id) {
                        return violation(format!("{id} is tracked twice"));
                    }
                }
            }
        }

        if seen.len() != self.passengers.len() {
            return violation(format!(
                "{} passengers registered but {} placed",
                self.passengers.len(),
                seen.len()
            ));
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn floors(&self) -> &FloorSet {
        &self.floors
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, car: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(car.index())
    }

    /// Mutable access to one car, for tools and tests that place it directly.
    pub fn elevator_mut(&mut self, car: ElevatorId) -> Option<&mut Elevator> {
        self.elevators.get_mut(car.index())
    }

    /// People on `floor` not yet generated as passengers.  `None` off the
    /// building.
    pub fn reservoir(&self, floor: Floor) -> Option<u32> {
        self.reservoir.get(&floor).copied()
    }

    /// Sum of every floor's reservoir.
    pub fn total_reservoir(&self) -> u64 {
        self.population().reservoir
    }

    pub fn waiting(&self, floor: Floor, direction: Direction) -> Option<&BTreeSet<PassengerId>> {
        self.waiting.get(&floor).map(|sets| sets.get(direction))
    }

    pub fn waiting_sets(&self, floor: Floor) -> Option<&WaitingSets> {
        self.waiting.get(&floor)
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id)
    }

    pub fn passengers(&self) -> &PassengerRegistry {
        &self.passengers
    }

    /// Steps completed since the last reset.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn chooser_mut(&mut self) -> &mut C {
        &mut self.chooser
    }
}
