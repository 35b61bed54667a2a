//! Gridwalk: a grid-bounded robot as a small pure state machine
//!
//! The robot lives on a 10x10 grid, starts at `(0, 0)` facing right, and
//! accepts a stream of move requests. Each request is checked against two
//! rules before anything changes:
//!
//! - it may not reverse its current heading, and
//! - it may not step off the grid.
//!
//! A rejected move surfaces a typed [`MoveError`] and leaves the robot
//! untouched. The rule checks themselves are pure functions over value
//! types; the actor is a thin owner of the current state.
//!
//! # Core Concepts
//!
//! - **Heading / Position / ActorState**: plain values in [`core`]
//! - **Policy**: the reversal and bounds rules in [`enforcement`]
//! - **Actor**: the stateful [`GridActor`] in [`actor`]
//! - **Configuration**: the fluent [`ActorBuilder`] in [`builder`]
//!
//! # Example
//!
//! ```rust
//! use gridwalk::{GridActor, Heading, MoveError};
//!
//! let mut robot = GridActor::new();
//! assert_eq!(robot.current_state(), "Position: (0,0). Direction: right");
//!
//! robot.attempt_move(Heading::Up).unwrap();
//! assert_eq!(robot.current_state(), "Position: (0,1). Direction: up");
//!
//! match robot.attempt_move(Heading::Down) {
//!     Err(MoveError::IllegalReversal { .. }) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod actor;
pub mod builder;
pub mod core;
pub mod enforcement;

// Re-export commonly used types
pub use actor::GridActor;
pub use builder::{ActorBuilder, BuildError};
pub use crate::core::{ActorState, Heading, MoveHistory, MoveRecord, Position};
pub use enforcement::MoveError;
