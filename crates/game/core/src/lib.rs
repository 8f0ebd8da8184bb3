//! Deterministic battle resolution engine.
//!
//! `game-core` defines the canonical combat rules (combatants, statuses,
//! actions, rosters, the round sequencer) and exposes pure APIs reused by the
//! runtime and offline tools. All state mutation flows through
//! [`battle::Battle`], randomness comes exclusively from a caller-supplied
//! generator, and progress is reported as structured [`battle::BattleEvent`]
//! values rather than text.
pub mod action;
pub mod battle;
pub mod collab;
pub mod combatant;
pub mod config;
pub mod error;
pub mod status;

pub use action::{ActionKind, ActionProfile, ActionState, TargetingRule};
pub use battle::{Battle, BattleEvent, BattleOutcome, BattlePhase, CombatantId, Roster, Side};
pub use collab::{
    ActionPrompt, BattleView, CombatantView, EmptyStash, EventSink, ItemEffect, ItemStash,
    StashSelection,
};
pub use combatant::{Combatant, ResourceMeter, Weapon};
pub use config::{BattleConfig, PctRange};
pub use error::SetupError;
pub use status::{StatusDuration, StatusEffect, StatusKind, StatusMerge};
