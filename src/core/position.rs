//! Grid positions.
//!
//! A [`Position`] can only hold coordinates inside the grid, so every
//! value of the type already satisfies the bounds invariant.

use super::heading::Heading;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Smallest coordinate on either axis.
pub const GRID_MIN: i32 = 0;

/// Largest coordinate on either axis (inclusive).
pub const GRID_MAX: i32 = 9;

/// Error returned when coordinates fall outside the grid.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Position ({x}, {y}) is outside the grid [0, 9]")]
pub struct PositionError {
    pub x: i32,
    pub y: i32,
}

/// A cell on the 10x10 grid.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{Heading, Position};
///
/// let origin = Position::origin();
/// assert_eq!(origin.step(Heading::Up), Some(Position::new(0, 1).unwrap()));
/// assert_eq!(origin.step(Heading::Down), None);
/// assert!(Position::new(10, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Create a position, rejecting coordinates outside the grid.
    pub fn new(x: i32, y: i32) -> Result<Self, PositionError> {
        if Self::in_bounds(x) && Self::in_bounds(y) {
            Ok(Self { x, y })
        } else {
            Err(PositionError { x, y })
        }
    }

    /// The bottom-left cell `(0, 0)`.
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The neighbouring cell in `heading`, or `None` at the grid edge.
    pub fn step(&self, heading: Heading) -> Option<Self> {
        let (dx, dy) = heading.step();
        Self::new(self.x + dx, self.y + dy).ok()
    }

    fn in_bounds(coordinate: i32) -> bool {
        (GRID_MIN..=GRID_MAX).contains(&coordinate)
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = PositionError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<Position> for (i32, i32) {
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
