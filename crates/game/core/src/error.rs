//! Setup-time precondition errors.
//!
//! Expected battle outcomes (a disabled action, an empty target set, a
//! cancelled item prompt) are ordinary boolean/empty-collection results and
//! never appear here. These errors mark illegal roster construction and are
//! surfaced before the first round runs.

/// Fatal precondition violation while assembling a battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// The item-use action is reserved for the player-controlled hero.
    #[error("item use is reserved for the player-controlled hero (found on {name})")]
    ItemActionOnNonHero { name: String },

    /// A battle cannot be assembled without at least one opponent.
    #[error("battle requires at least one opponent")]
    NoOpponents,

    /// A combatant was given more actions than the engine tracks.
    #[error("{name} exceeds the action capacity of {capacity}")]
    TooManyActions { name: String, capacity: usize },
}
