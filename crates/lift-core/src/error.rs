//! Environment error type.
//!
//! Every failure is a programming or integration error surfaced straight to
//! the caller.  Nothing is retried.  [`LiftError::kind`] sorts the variants
//! into the two classes a training harness cares about.

use thiserror::Error;

use crate::{ElevatorId, Floor};

/// Coarse error class.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// Bad construction parameters or a malformed call.
    Configuration,
    /// Internal state broke one of the simulation's rules.
    Invariant,
}

#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("action count {got} does not match elevator count {expected}")]
    ActionCountMismatch { expected: usize, got: usize },

    #[error("floor {0} is not a floor of this building")]
    UnknownFloor(Floor),

    #[error("{0} does not exist")]
    UnknownElevator(ElevatorId),

    #[error("origin and destination are both floor {0}; direction is undefined")]
    SameFloor(Floor),

    #[error("velocity {0} is outside the allowed set")]
    InvalidVelocity(f64),

    #[error("no floor has people left to generate a passenger from")]
    ReservoirExhausted,

    #[error("need at least 2 floors to pick a destination, got {0}")]
    TooFewFloors(usize),

    #[error("position {0} is not an exact floor")]
    NotAtFloor(f64),

    #[error("invariant violated: {0}")]
    Violation(String),
}

impl LiftError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LiftError::Config(_)
            | LiftError::ActionCountMismatch { .. }
            | LiftError::UnknownFloor(_)
            | LiftError::UnknownElevator(_) => ErrorKind::Configuration,

            LiftError::SameFloor(_)
            | LiftError::InvalidVelocity(_)
            | LiftError::ReservoirExhausted
            | LiftError::TooFewFloors(_)
            | LiftError::NotAtFloor(_)
            | LiftError::Violation(_) => ErrorKind::Invariant,
        }
    }
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
