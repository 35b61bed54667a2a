//! Grid Walk
//!
//! Drives a robot through a scripted list of commands, the way a console
//! host would: parse each command into a heading, attempt the move, then
//! print either the new state or the rejection message.
//!
//! Key concepts:
//! - Reversal and bounds rules surface as typed errors
//! - Rejected moves leave the robot untouched
//! - Logging lives in the host, not the actor
//!
//! Run with: RUST_LOG=debug cargo run --example grid_walk

use gridwalk::enforcement::audit;
use gridwalk::{ActorBuilder, Heading, MoveError};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

const SCRIPT: &[&str] = &[
    "up", "left", "down", "right", "right", "jump", "down", "down", "left", "up", "up",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Grid Walk ===\n");

    let mut robot = ActorBuilder::new().track_history(true).build()?;
    println!("Start: {}\n", robot.current_state());

    for command in SCRIPT {
        let direction: Heading = match command.parse() {
            Ok(direction) => direction,
            Err(err) => {
                warn!(command = *command, "skipping unknown command");
                println!("{err}");
                continue;
            }
        };

        let before = robot.state();
        match robot.attempt_move(direction) {
            Ok(()) => {
                info!(
                    requested = %direction,
                    position = %robot.position(),
                    "move applied"
                );
                println!("{}", robot.current_state());
            }
            Err(err) => {
                let kind = match err {
                    MoveError::IllegalReversal { .. } => "reversal",
                    MoveError::OutOfBounds { .. } => "out_of_bounds",
                };
                warn!(
                    requested = %direction,
                    position = %err.position(),
                    heading = %err.heading(),
                    kind,
                    "move rejected"
                );
                if audit(&before, direction).is_failure() {
                    debug!(requested = %direction, "audit confirms rejection");
                }
                println!("{err}");
            }
        }
    }

    if let Some(history) = robot.history() {
        println!("\nApplied {} moves:", history.len());
        for state in history.get_path() {
            println!("  {state}");
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
