//! Movement headings.
//!
//! A heading is both the direction a move is requested in and the
//! direction of the actor's most recent successful move.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four grid directions.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::Heading;
///
/// assert_eq!(Heading::Right.opposite(), Heading::Left);
/// assert_eq!(Heading::Up.step(), (0, 1));
/// assert_eq!(Heading::Down.name(), "down");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Right,
    Left,
    Up,
    Down,
}

impl Heading {
    /// Every heading, in declaration order.
    pub const ALL: [Heading; 4] = [Heading::Right, Heading::Left, Heading::Up, Heading::Down];

    /// Display name used in state snapshots and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The heading pointing the other way.
    pub const fn opposite(&self) -> Heading {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Unit `(dx, dy)` applied to a position when moving this way.
    ///
    /// `y` grows upwards.
    pub const fn step(&self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::Up => (0, 1),
            Self::Down => (0, -1),
        }
    }

    /// True if moving towards `requested` would reverse this heading.
    pub fn is_reversed_by(&self, requested: Heading) -> bool {
        self.opposite() == requested
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a heading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown heading '{0}', expected one of: right, left, up, down")]
pub struct ParseHeadingError(pub String);

impl FromStr for Heading {
    type Err = ParseHeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Heading::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseHeadingError(s.to_string()))
    }
}
