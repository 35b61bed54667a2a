//! Builder for constructing grid actors.

use crate::actor::GridActor;
use crate::builder::error::BuildError;
use crate::core::{ActorState, Heading, Position};

/// Builder for configuring a grid actor with a fluent API.
///
/// Every setting is optional; an empty builder produces the same actor as
/// [`GridActor::new`].
#[derive(Clone, Debug)]
pub struct ActorBuilder {
    start: (i32, i32),
    heading: Heading,
    track_history: bool,
}

impl ActorBuilder {
    /// Create a builder with the default start: `(0, 0)`, facing right.
    pub fn new() -> Self {
        Self {
            start: (0, 0),
            heading: Heading::Right,
            track_history: false,
        }
    }

    /// Set the starting cell. Validated in [`build`](Self::build).
    pub fn start(mut self, x: i32, y: i32) -> Self {
        self.start = (x, y);
        self
    }

    /// Set the starting heading.
    pub fn heading(mut self, heading: Heading) -> Self {
        self.heading = heading;
        self
    }

    /// Record every applied move in a [`MoveHistory`](crate::core::MoveHistory).
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.track_history = enabled;
        self
    }

    /// Build the actor.
    /// Returns an error if the start cell is off the grid.
    pub fn build(self) -> Result<GridActor, BuildError> {
        let (x, y) = self.start;
        let position =
            Position::new(x, y).map_err(|err| BuildError::StartOutOfBounds { x: err.x, y: err.y })?;

        Ok(GridActor::from_parts(
            ActorState::new(position, self.heading),
            self.track_history,
        ))
    }
}

impl Default for ActorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_matches_new() {
        let built = ActorBuilder::new().build().unwrap();
        assert_eq!(built, GridActor::new());
    }

    #[test]
    fn builder_sets_start_and_heading() {
        let robot = ActorBuilder::new()
            .start(4, 7)
            .heading(Heading::Down)
            .build()
            .unwrap();

        assert_eq!(robot.position(), Position::new(4, 7).unwrap());
        assert_eq!(robot.heading(), Heading::Down);
        assert_eq!(robot.current_state(), "Position: (4,7). Direction: down");
    }

    #[test]
    fn builder_rejects_off_grid_start() {
        let result = ActorBuilder::new().start(10, 3).build();
        assert!(matches!(
            result,
            Err(BuildError::StartOutOfBounds { x: 10, y: 3 })
        ));

        assert!(ActorBuilder::new().start(0, -1).build().is_err());
    }

    #[test]
    fn builder_enables_history() {
        let robot = ActorBuilder::new().track_history(true).build().unwrap();
        assert!(robot.history().is_some_and(|h| h.is_empty()));
    }
}
