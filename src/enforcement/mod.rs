//! Move policy enforcement.
//!
//! Every move request is checked against two rules before anything changes:
//!
//! 1. **Reversal**: the requested heading may not be the opposite of the
//!    current one.
//! 2. **Bounds**: the destination must stay on the grid.
//!
//! [`next_state`] is the fail-fast policy the actor uses; the reversal rule
//! always runs first. [`audit`] uses Stillwater's `Validation` type to
//! collect every broken rule instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use gridwalk::core::{ActorState, Heading};
//! use gridwalk::enforcement::audit;
//!
//! // At the origin facing right, "left" is a reversal AND leaves the grid.
//! let result = audit(&ActorState::INITIAL, Heading::Left);
//! assert!(result.is_failure());
//! ```

pub mod rules;
pub mod violations;

pub use rules::{audit, check_bounds, check_reversal, next_state};
pub use violations::MoveError;
