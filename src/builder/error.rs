//! Build errors for the actor builder.

use thiserror::Error;

/// Errors that can occur when building a grid actor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start position ({x}, {y}) is off the grid. Coordinates must be within [0, 9]")]
    StartOutOfBounds { x: i32, y: i32 },
}
