//! Shared state between the shell and the game loop thread.

use std::sync::{Arc, Mutex};

use soulbound_core::commands::PlayerCommand;
use soulbound_core::state::GameStateSnapshot;

/// Commands sent from the shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot for synchronous polling.
/// Updated by the game loop thread after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;
