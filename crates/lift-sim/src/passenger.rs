//! Passenger records and the registry that owns them.

use lift_core::{Direction, Floor, FloorSet, LiftError, LiftResult, PassengerId, UniformChoice};

/// One person in transit: where they appeared and where they are going.
///
/// Fields are public so tools and tests can rewrite a destination after the
/// fact.  [`direction`](Self::direction) re-checks origin ≠ destination on
/// every call for that reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passenger {
    pub origin:      Floor,
    pub destination: Floor,
}

impl Passenger {
    /// A passenger born on `origin` with a destination drawn uniformly from
    /// `floors` minus `origin`.
    ///
    /// # Errors
    ///
    /// [`LiftError::TooFewFloors`] if `floors` has fewer than two entries.
    pub fn new<C: UniformChoice>(
        origin:  Floor,
        floors:  &FloorSet,
        chooser: &mut C,
    ) -> LiftResult<Self> {
        if floors.len() < 2 {
            return Err(LiftError::TooFewFloors(floors.len()));
        }
        let candidates  = floors.excluding(origin);
        let destination = chooser
            .choose(&candidates)
            .ok_or(LiftError::TooFewFloors(floors.len()))?;
        Ok(Self { origin, destination })
    }

    /// A passenger with a fixed destination.
    ///
    /// # Errors
    ///
    /// [`LiftError::SameFloor`] if `origin == destination`.
    pub fn with_destination(origin: Floor, destination: Floor) -> LiftResult<Self> {
        Direction::between(origin, destination)?;
        Ok(Self { origin, destination })
    }

    /// Which way this passenger wants to travel.
    ///
    /// # Errors
    ///
    /// [`LiftError::SameFloor`] if the destination was rewritten to equal
    /// the origin.
    pub fn direction(&self) -> LiftResult<Direction> {
        Direction::between(self.origin, self.destination)
    }
}

// ── PassengerRegistry ─────────────────────────────────────────────────────────

/// Arena of live passengers, addressed by [`PassengerId`].
///
/// Waiting sets and car manifests hold ids only, so each record has a single
/// owner.  Slots are not reused within an episode: an alighted passenger's
/// slot stays `None` until [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct PassengerRegistry {
    slots: Vec<Option<Passenger>>,
    live:  usize,
}

impl PassengerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `passenger` and return its new id.
    pub fn insert(&mut self, passenger: Passenger) -> LiftResult<PassengerId> {
        let id = PassengerId::try_from(self.slots.len())
            .map_err(|_| LiftError::Violation("passenger id space exhausted".into()))?;
        self.slots.push(Some(passenger));
        self.live += 1;
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Drop `id` from tracking, returning its record if it was live.
    pub fn remove(&mut self, id: PassengerId) -> Option<Passenger> {
        let taken = self.slots.get_mut(id.index()).and_then(Option::take);
        if taken.is_some() {
            self.live -= 1;
        }
        taken
    }

    /// Number of live passengers.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Ids ever issued this episode, live or not.
    #[inline]
    pub fn issued(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
    }

    /// Live passengers in id order.
    pub fn iter(&self) -> impl Iterator<Item = (PassengerId, &Passenger)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (PassengerId(i as u32), p)))
    }
}
