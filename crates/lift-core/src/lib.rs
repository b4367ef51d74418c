//! `lift-core`: foundational types for the `lift` elevator environment.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`floor`]     | `Floor`, `FloorSet`, `Direction`, `NO_CHANGE`, `BASE_FLOOR` |
//! | [`ids`]       | `PassengerId`, `ElevatorId`                             |
//! | [`time`]      | `Tick`                                                  |
//! | [`rng`]       | `UniformChoice` capability, `SimRng`                    |
//! | [`config`]    | `EnvConfig`, `RetargetGuard`                            |
//! | [`error`]     | `LiftError`, `ErrorKind`, `LiftResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EnvConfig, RetargetGuard};
pub use error::{ErrorKind, LiftError, LiftResult};
pub use floor::{BASE_FLOOR, Direction, Floor, FloorSet, NO_CHANGE};
pub use ids::{ElevatorId, PassengerId};
pub use rng::{SimRng, UniformChoice};
pub use time::Tick;
