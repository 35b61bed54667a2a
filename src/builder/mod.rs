//! Builder API for configuring grid actors.
//!
//! The builder is the actor's configuration layer: start cell, start
//! heading and whether applied moves are journaled.
//!
//! # Example
//!
//! ```
//! use gridwalk::builder::ActorBuilder;
//! use gridwalk::core::Heading;
//!
//! let mut robot = ActorBuilder::new()
//!     .start(9, 0)
//!     .heading(Heading::Right)
//!     .track_history(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(robot.attempt_move(Heading::Right).is_err());
//! assert!(robot.attempt_move(Heading::Up).is_ok());
//! assert_eq!(robot.history().map(|h| h.len()), Some(1));
//! ```

pub mod actor;
pub mod error;

pub use actor::ActorBuilder;
pub use error::BuildError;
