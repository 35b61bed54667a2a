//! The directional grid actor.
//!
//! [`GridActor`] owns a position and heading, validates every move request
//! through the [`enforcement`](crate::enforcement) policy, and caches a
//! display string that is refreshed after each successful move.
//!
//! The actor is synchronous and not designed for concurrent access; a host
//! that shares one between threads must serialize calls itself, e.g. by
//! wrapping it in a `Mutex`.

mod machine;

pub use machine::GridActor;
