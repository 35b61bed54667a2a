//! Journal of applied moves.
//!
//! Only successful moves are recorded; rejected moves leave no trace.

use super::heading::Heading;
use super::state::ActorState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied move.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{ActorState, Heading, MoveRecord, Position};
/// use chrono::Utc;
///
/// let record = MoveRecord {
///     from: ActorState::INITIAL,
///     to: ActorState::new(Position::new(0, 1).unwrap(), Heading::Up),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.heading(), Heading::Up);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// State before the move
    pub from: ActorState,
    /// State after the move
    pub to: ActorState,
    /// When the move was applied
    pub timestamp: DateTime<Utc>,
}

impl MoveRecord {
    /// Direction the move was made in.
    pub fn heading(&self) -> Heading {
        self.to.heading
    }
}

/// Ordered history of applied moves.
///
/// `record` consumes the history and hands it back with the move appended,
/// so appending stays amortized constant time.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{ActorState, Heading, MoveHistory, MoveRecord, Position};
/// use chrono::Utc;
///
/// let up = ActorState::new(Position::new(0, 1).unwrap(), Heading::Up);
/// let history = MoveHistory::new().record(MoveRecord {
///     from: ActorState::INITIAL,
///     to: up,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&ActorState::INITIAL, &up]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a move, returning the extended history.
    pub fn record(mut self, record: MoveRecord) -> Self {
        self.records.push(record);
        self
    }

    /// States visited in order: the starting state, then the destination of
    /// each recorded move. Empty if nothing has been recorded.
    pub fn get_path(&self) -> Vec<&ActorState> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Time between the first and last recorded move.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn at(x: i32, y: i32, heading: Heading) -> ActorState {
        ActorState::new(Position::new(x, y).unwrap(), heading)
    }

    #[test]
    fn new_history_is_empty() {
        let history = MoveHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = MoveHistory::new()
            .record(MoveRecord {
                from: ActorState::INITIAL,
                to: at(1, 0, Heading::Right),
                timestamp: Utc::now(),
            })
            .record(MoveRecord {
                from: at(1, 0, Heading::Right),
                to: at(1, 1, Heading::Up),
                timestamp: Utc::now(),
            });

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &ActorState::INITIAL);
        assert_eq!(path[1], &at(1, 0, Heading::Right));
        assert_eq!(path[2], &at(1, 1, Heading::Up));
        assert_eq!(history.records()[1].heading(), Heading::Up);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = MoveHistory::new()
            .record(MoveRecord {
                from: ActorState::INITIAL,
                to: at(1, 0, Heading::Right),
                timestamp: start,
            })
            .record(MoveRecord {
                from: at(1, 0, Heading::Right),
                to: at(2, 0, Heading::Right),
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_record_has_zero_duration() {
        let history = MoveHistory::new().record(MoveRecord {
            from: ActorState::INITIAL,
            to: at(0, 1, Heading::Up),
            timestamp: Utc::now(),
        });

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = MoveHistory::new().record(MoveRecord {
            from: ActorState::INITIAL,
            to: at(0, 1, Heading::Up),
            timestamp: Utc::now(),
        });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: MoveHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
