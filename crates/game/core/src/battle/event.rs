//! Structured battle progress events.
//!
//! Frontends render these however they like; tests assert on them directly.
//! The payload (who, how much, to whom, resulting health) is the contract,
//! not any particular text.

use crate::action::ActionKind;
use crate::status::{StatusDuration, StatusKind};

/// One observable step of battle resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A new round began.
    RoundStarted { round: u32 },

    /// An attack (basic or special) landed.
    Attacked {
        actor: String,
        action: ActionKind,
        target: String,
        damage: u32,
        remaining_hp: u32,
    },

    /// A heal was applied.
    Healed {
        actor: String,
        target: String,
        amount: u32,
        current_hp: u32,
    },

    /// A status effect was newly applied.
    StatusApplied {
        target: String,
        kind: StatusKind,
        duration: StatusDuration,
    },

    /// A same-kind status was merged into an existing one.
    StatusExtended {
        target: String,
        kind: StatusKind,
        duration: StatusDuration,
    },

    /// The existing effect is permanent; the application was refused.
    StatusRejected { target: String, kind: StatusKind },

    /// A harmful status dealt its per-round damage.
    StatusDamage {
        target: String,
        kind: StatusKind,
        amount: u32,
        remaining_hp: u32,
    },

    /// A regenerative status restored health.
    StatusHealed {
        target: String,
        kind: StatusKind,
        amount: u32,
        current_hp: u32,
    },

    /// A timed status ran out and was removed.
    StatusExpired { target: String, kind: StatusKind },

    /// A hijack attempt converted the target to the actor's side.
    HijackSucceeded { actor: String, target: String },

    /// A hijack attempt failed.
    HijackFailed { actor: String, target: String },

    /// A combatant was stunned and will skip turns.
    Disabled { target: String, rounds: u32 },

    /// An inventory item was consumed.
    ItemUsed { actor: String, item: String },

    /// A combatant dropped to zero health.
    Defeated { name: String },
}
