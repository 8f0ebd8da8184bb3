//! Session orchestration for the battle engine.
//!
//! This crate wires the pure rules in `game-core` to the outside world: it
//! owns the one seeded random generator for the session, the hero that
//! persists between battles (health, gold, inventory), and the adapters that
//! turn the player's inventory into the engine's item collaborator. Consumers
//! embed [`Session`] to run encounters and observe progress through their own
//! [`game_core::EventSink`].
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and the persistent hero
//! - [`inventory`] adapts owned items to the engine's stash contract
//! - [`log`] renders battle events into tracing output
mod error;
pub mod inventory;
pub mod log;
pub mod session;

pub use error::SessionError;
pub use inventory::{Inventory, ItemPicker};
pub use log::TracingSink;
pub use session::{Hero, Session};
