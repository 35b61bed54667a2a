//! Movement rules and the move policy built from them.
//!
//! Two rules govern every move: the actor may not reverse its heading,
//! and it may not leave the grid. [`next_state`] applies them fail-fast,
//! reversal first. [`audit`] evaluates both and reports every violation.

use crate::core::{ActorState, Heading, Position};
use crate::enforcement::violations::MoveError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Reject a move that points exactly opposite the current heading.
pub fn check_reversal(state: &ActorState, requested: Heading) -> Result<(), MoveError> {
    if state.heading.is_reversed_by(requested) {
        return Err(MoveError::IllegalReversal {
            position: state.position,
            heading: state.heading,
        });
    }
    Ok(())
}

/// Compute the cell one step towards `requested`, rejecting moves off the grid.
pub fn check_bounds(state: &ActorState, requested: Heading) -> Result<Position, MoveError> {
    state
        .position
        .step(requested)
        .ok_or(MoveError::OutOfBounds {
            position: state.position,
            heading: state.heading,
        })
}

/// Resolve a move request against `state`.
///
/// Returns the successor state, or the first rule the move breaks. A move
/// that is both a reversal and off the grid reports `IllegalReversal`.
///
/// # Example
///
/// ```rust
/// use gridwalk::core::{ActorState, Heading, Position};
/// use gridwalk::enforcement::{next_state, MoveError};
///
/// let next = next_state(&ActorState::INITIAL, Heading::Up).unwrap();
/// assert_eq!(next.position, Position::new(0, 1).unwrap());
/// assert_eq!(next.heading, Heading::Up);
///
/// let err = next_state(&ActorState::INITIAL, Heading::Left).unwrap_err();
/// assert!(matches!(err, MoveError::IllegalReversal { .. }));
/// ```
pub fn next_state(state: &ActorState, requested: Heading) -> Result<ActorState, MoveError> {
    check_reversal(state, requested)?;
    let position = check_bounds(state, requested)?;
    Ok(ActorState::new(position, requested))
}

/// Evaluate every rule for a move, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the move is legal. This is a
/// diagnostic view; it never changes which error [`next_state`] reports.
pub fn audit(state: &ActorState, requested: Heading) -> Validation<(), NonEmptyVec<MoveError>> {
    let checks = vec![
        as_validation(check_reversal(state, requested)),
        as_validation(check_bounds(state, requested).map(|_| ())),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn as_validation(result: Result<(), MoveError>) -> Validation<(), NonEmptyVec<MoveError>> {
    match result {
        Ok(()) => Validation::success(()),
        Err(err) => Validation::fail(err),
    }
}
