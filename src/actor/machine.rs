//! The grid actor state machine.

use crate::core::{ActorState, Heading, MoveHistory, MoveRecord, Position};
use crate::enforcement::{next_state, MoveError};
use chrono::Utc;

/// A robot on a 10x10 grid that refuses to reverse or leave the grid.
///
/// State changes only on a successful [`attempt_move`](Self::attempt_move);
/// a rejected move leaves position, heading, display string and history
/// exactly as they were.
///
/// # Example
///
/// ```rust
/// use gridwalk::actor::GridActor;
/// use gridwalk::core::Heading;
/// use gridwalk::enforcement::MoveError;
///
/// let mut robot = GridActor::new();
/// robot.attempt_move(Heading::Up).unwrap();
/// assert_eq!(robot.current_state(), "Position: (0,1). Direction: up");
///
/// let err = robot.attempt_move(Heading::Down).unwrap_err();
/// assert!(matches!(err, MoveError::IllegalReversal { .. }));
/// assert_eq!(robot.current_state(), "Position: (0,1). Direction: up");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridActor {
    state: ActorState,
    display: String,
    history: Option<MoveHistory>,
}

impl GridActor {
    /// Create an actor at the origin facing right, without history.
    pub fn new() -> Self {
        Self::from_parts(ActorState::INITIAL, false)
    }

    pub(crate) fn from_parts(state: ActorState, track_history: bool) -> Self {
        Self {
            state,
            display: state.render(),
            history: track_history.then(MoveHistory::new),
        }
    }

    /// Request a single move.
    ///
    /// The reversal rule is checked before the bounds rule; on success the
    /// position, heading and display string are updated together.
    pub fn attempt_move(&mut self, direction: Heading) -> Result<(), MoveError> {
        let next = next_state(&self.state, direction)?;

        if let Some(history) = self.history.take() {
            self.history = Some(history.record(MoveRecord {
                from: self.state,
                to: next,
                timestamp: Utc::now(),
            }));
        }
        self.state = next;
        self.display = next.render();
        Ok(())
    }

    /// Display string for the last successful move, or the initial state.
    pub fn current_state(&self) -> &str {
        &self.display
    }

    pub fn state(&self) -> ActorState {
        self.state
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    /// Applied moves, if history tracking was enabled at build time.
    pub fn history(&self) -> Option<&MoveHistory> {
        self.history.as_ref()
    }
}

impl Default for GridActor {
    fn default() -> Self {
        Self::new()
    }
}
