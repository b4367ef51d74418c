//! `lift-sim`: discrete-tick elevator environment.
//!
//! # One step
//!
//! ```text
//! step(actions):
//!   for car in registration order:
//!     ① Retarget: actions[car] != NO_CHANGE → guard decides whether the
//!                 car takes the new target floor.
//!     ② Motion:   accelerate by 0.5 toward the target (|v| ≤ 1), move,
//!                 brake/snap onto the target floor on arrival.
//! ```
//!
//! Passenger demand and transfers are separate calls so a training harness
//! decides when they happen:
//!
//! | Call                    | Effect                                          |
//! |-------------------------|-------------------------------------------------|
//! | `generate_passenger()`  | reservoir → floor waiting set                   |
//! | `board(car, dir)`       | floor waiting set → car manifest                |
//! | `alight(car)`           | car manifest → destination floor's reservoir    |
//!
//! Reward, observation encoding, and dispatch policy belong to the caller.
//!
//! # Quick-start
//!
//! ```rust
//! use lift_core::{Direction, ElevatorId, NO_CHANGE};
//! use lift_sim::EnvBuilder;
//!
//! let mut env = EnvBuilder::default().floors(1, 6).max_people(20).build()?;
//! env.generate_passenger()?;
//! env.board(ElevatorId(0), Direction::Up)?;
//! env.step(&[4])?;
//! env.step(&[NO_CHANGE])?;
//! env.check_invariants()?;
//! # Ok::<(), lift_core::LiftError>(())
//! ```

pub mod builder;
pub mod elevator;
pub mod env;
pub mod observer;
pub mod passenger;


pub use builder::EnvBuilder;
pub use elevator::{Elevator, Retarget};
pub use env::{Environment, Population, WaitingSets};
pub use observer::{EnvObserver, NoopObserver};
pub use passenger::{Passenger, PassengerRegistry};
