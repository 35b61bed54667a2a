//! Core value types of the grid actor.
//!
//! This module contains the pure data the actor is built from:
//! - Headings and their opposite/step lookups
//! - Bounded grid positions
//! - Actor states and their display rendering
//! - The journal of applied moves
//!
//! Nothing here mutates shared state or performs I/O.

mod heading;
mod history;
mod position;
mod state;

pub use heading::{Heading, ParseHeadingError};
pub use history::{MoveHistory, MoveRecord};
pub use position::{Position, PositionError, GRID_MAX, GRID_MIN};
pub use state::ActorState;
