//! Floors, the valid-floor set, and travel direction.
//!
//! A `Floor` is a plain signed level number.  Buildings skip floor 0, so the
//! value doubles as the "no change" action sentinel: a controller that sends
//! `NO_CHANGE` for a car leaves that car's target alone.

use std::fmt;

use crate::{LiftError, LiftResult};

/// A building level.  Never 0 once it has passed through a [`FloorSet`].
pub type Floor = i32;

/// Action sentinel: keep the car's current target floor.
pub const NO_CHANGE: Floor = 0;

/// Where every car parks and the whole population starts on reset.
pub const BASE_FLOOR: Floor = 1;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Travel direction of a passenger or a waiting set.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Both directions, `Up` first.
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Direction of travel from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// [`LiftError::SameFloor`] when the two floors are equal.
    pub fn between(origin: Floor, destination: Floor) -> LiftResult<Direction> {
        match origin.cmp(&destination) {
            std::cmp::Ordering::Less    => Ok(Direction::Up),
            std::cmp::Ordering::Greater => Ok(Direction::Down),
            std::cmp::Ordering::Equal   => Err(LiftError::SameFloor(origin)),
        }
    }

    /// `+1` for up, `-1` for down.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Up   => 1,
            Direction::Down => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up   => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

// ── FloorSet ──────────────────────────────────────────────────────────────────

/// The ordered, gap-at-zero list of valid floors for one building.
///
/// Built from an inclusive `(low, high)` range.  Floors are stored ascending,
/// so iteration order is deterministic and doubles as the key order of every
/// per-floor map built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorSet {
    floors: Vec<Floor>,
}

impl FloorSet {
    /// Every integer in `low..=high` except 0.
    ///
    /// # Errors
    ///
    /// [`LiftError::Config`] if `low > high`.
    pub fn from_range(low: Floor, high: Floor) -> LiftResult<Self> {
        if low > high {
            return Err(LiftError::Config(format!(
                "floor range low {low} is above high {high}"
            )));
        }
        let floors = (low..=high).filter(|&f| f != 0).collect();
        Ok(Self { floors })
    }

    /// Build from an explicit list.  Zero and duplicates are dropped; the
    /// result is sorted.
    pub fn from_floors(floors: impl IntoIterator<Item = Floor>) -> Self {
        let mut floors: Vec<Floor> = floors.into_iter().filter(|&f| f != 0).collect();
        floors.sort_unstable();
        floors.dedup();
        Self { floors }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.binary_search(&floor).is_ok()
    }

    /// `true` if `position` is exactly one of the valid floors.
    pub fn contains_position(&self, position: f64) -> bool {
        Self::as_floor(position).is_some_and(|f| self.contains(f))
    }

    /// Convert a real-valued position to a floor number when it sits exactly
    /// on an integer.  Membership is not checked.
    pub fn as_floor(position: f64) -> Option<Floor> {
        if position.fract() == 0.0 && position.is_finite() {
            Some(position as Floor)
        } else {
            None
        }
    }

    pub fn lowest(&self) -> Option<Floor> {
        self.floors.first().copied()
    }

    pub fn highest(&self) -> Option<Floor> {
        self.floors.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.floors.iter().copied()
    }

    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }

    /// All floors except `floor`, ascending.
    pub fn excluding(&self, floor: Floor) -> Vec<Floor> {
        self.iter().filter(|&f| f != floor).collect()
    }
}

impl<'a> IntoIterator for &'a FloorSet {
    type Item     = Floor;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Floor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.floors.iter().copied()
    }
}
