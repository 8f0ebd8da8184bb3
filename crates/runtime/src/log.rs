//! Battle event rendering into tracing output.

use game_core::{BattleEvent, EventSink};

/// Sink that reports battle progress through `tracing`.
///
/// Useful for headless runs and tests; interactive clients render events
/// themselves and install this only for diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: BattleEvent) {
        match &event {
            BattleEvent::RoundStarted { round } => tracing::info!(round, "round started"),
            BattleEvent::Attacked {
                actor,
                action,
                target,
                damage,
                remaining_hp,
            } => tracing::info!(%actor, %action, %target, damage, remaining_hp, "attack"),
            BattleEvent::Healed {
                actor,
                target,
                amount,
                current_hp,
            } => tracing::info!(%actor, %target, amount, current_hp, "heal"),
            BattleEvent::StatusApplied { target, kind, .. } => {
                tracing::info!(%target, %kind, "status applied");
            }
            BattleEvent::StatusExtended { target, kind, .. } => {
                tracing::info!(%target, %kind, "status extended");
            }
            BattleEvent::StatusRejected { target, kind } => {
                tracing::debug!(%target, %kind, "status rejected by permanent effect");
            }
            BattleEvent::StatusDamage {
                target,
                kind,
                amount,
                remaining_hp,
            } => tracing::info!(%target, %kind, amount, remaining_hp, "status damage"),
            BattleEvent::StatusHealed {
                target,
                kind,
                amount,
                current_hp,
            } => tracing::info!(%target, %kind, amount, current_hp, "status heal"),
            BattleEvent::StatusExpired { target, kind } => {
                tracing::debug!(%target, %kind, "status expired");
            }
            BattleEvent::HijackSucceeded { actor, target } => {
                tracing::info!(%actor, %target, "hijack succeeded");
            }
            BattleEvent::HijackFailed { actor, target } => {
                tracing::info!(%actor, %target, "hijack failed");
            }
            BattleEvent::Disabled { target, rounds } => {
                tracing::info!(%target, rounds, "disabled");
            }
            BattleEvent::ItemUsed { actor, item } => tracing::info!(%actor, %item, "item used"),
            BattleEvent::Defeated { name } => tracing::info!(%name, "defeated"),
        }
    }
}
