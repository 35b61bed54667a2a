//! Actor state: where the robot is and which way it last moved.
//!
//! The full state space is every (position, heading) pair on the grid,
//! 10 x 10 x 4 = 400 states. States are plain values with no side effects.

use super::heading::Heading;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single state of the grid actor.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{ActorState, Heading, Position};
///
/// let state = ActorState::INITIAL;
/// assert_eq!(state.position, Position::origin());
/// assert_eq!(state.heading, Heading::Right);
/// assert_eq!(state.render(), "Position: (0,0). Direction: right");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorState {
    /// Current cell
    pub position: Position,
    /// Direction of the last applied move
    pub heading: Heading,
}

impl ActorState {
    /// Start state: the origin, facing right.
    pub const INITIAL: ActorState = ActorState {
        position: Position::origin(),
        heading: Heading::Right,
    };

    pub const fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Human-readable snapshot shown to the player after each move.
    pub fn render(&self) -> String {
        format!(
            "Position: ({},{}). Direction: {}",
            self.position.x(),
            self.position.y(),
            self.heading.name()
        )
    }
}

impl Default for ActorState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for ActorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_initial() {
        assert_eq!(ActorState::default(), ActorState::INITIAL);
    }

    #[test]
    fn render_is_deterministic() {
        let state = ActorState::new(Position::new(4, 2).unwrap(), Heading::Down);
        assert_eq!(state.render(), "Position: (4,2). Direction: down");
        assert_eq!(state.render(), state.to_string());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = ActorState::new(Position::new(9, 3).unwrap(), Heading::Up);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ActorState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn states_compare_by_position_and_heading() {
        let a = ActorState::new(Position::origin(), Heading::Up);
        let b = ActorState::new(Position::origin(), Heading::Right);
        assert_ne!(a, b);
        assert_eq!(a, ActorState::new(Position::origin(), Heading::Up));
    }
}
