//! Move errors.

use crate::core::{Heading, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a requested move was rejected.
///
/// Both variants carry the actor's position and heading at the time of the
/// request, which are unchanged by the failed move.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveError {
    #[error("Direction not supported. Current position: {position}. Current direction: {heading}")]
    IllegalReversal { position: Position, heading: Heading },

    #[error("Can not move out the field. Current position: {position}. Current direction: {heading}")]
    OutOfBounds { position: Position, heading: Heading },
}

impl MoveError {
    /// The fixed message for this failure kind, without the state context.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::IllegalReversal { .. } => "Direction not supported",
            Self::OutOfBounds { .. } => "Can not move out the field",
        }
    }

    pub const fn position(&self) -> Position {
        match self {
            Self::IllegalReversal { position, .. } | Self::OutOfBounds { position, .. } => {
                *position
            }
        }
    }

    pub const fn heading(&self) -> Heading {
        match self {
            Self::IllegalReversal { heading, .. } | Self::OutOfBounds { heading, .. } => *heading,
        }
    }

    pub const fn is_reversal(&self) -> bool {
        matches!(self, Self::IllegalReversal { .. })
    }

    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = MoveError::IllegalReversal {
            position: Position::new(2, 3).unwrap(),
            heading: Heading::Right,
        };
        assert_eq!(
            err.to_string(),
            "Direction not supported. Current position: (2, 3). Current direction: right"
        );

        let err = MoveError::OutOfBounds {
            position: Position::origin(),
            heading: Heading::Down,
        };
        assert_eq!(
            err.to_string(),
            "Can not move out the field. Current position: (0, 0). Current direction: down"
        );
    }

    #[test]
    fn accessors_expose_context() {
        let err = MoveError::OutOfBounds {
            position: Position::new(9, 0).unwrap(),
            heading: Heading::Right,
        };
        assert_eq!(err.position(), Position::new(9, 0).unwrap());
        assert_eq!(err.heading(), Heading::Right);
        assert_eq!(err.message(), "Can not move out the field");
        assert!(err.is_out_of_bounds());
        assert!(!err.is_reversal());
    }
}
