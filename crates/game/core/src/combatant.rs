//! Combatant state: health, strength, actions, statuses, disable counters.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::action::{ActionKind, ActionState};
use crate::battle::BattleEvent;
use crate::collab::EventSink;
use crate::config::BattleConfig;
use crate::error::SetupError;
use crate::status::{StatusEffect, StatusKind, StatusMerge};

/// Integer resource meter (health) tracked per combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub const fn at_max(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub const fn is_full(&self) -> bool {
        self.current == self.maximum
    }

    /// Subtracts `amount`, clamping at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Adds `amount`, clamping at the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.maximum.min(self.current + amount);
    }
}

/// An equipped weapon's combat-relevant surface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub power: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }
}

/// Any entity capable of participating in a battle.
///
/// A combatant persists beyond a single battle (the hero carries health and
/// cooldowns between encounters); defeat filters it out of active rosters
/// without destroying it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    pub hp: ResourceMeter,
    base_strength: u32,
    electronic: bool,
    can_heal: bool,
    reward: u32,
    weapon: Option<Weapon>,
    actions: ArrayVec<ActionState, { BattleConfig::MAX_ACTIONS }>,
    statuses: ArrayVec<StatusEffect, { BattleConfig::MAX_STATUS_EFFECTS }>,
    disabled_rounds: u32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, max_hp: u32, base_strength: u32) -> Self {
        Self {
            name: name.into(),
            hp: ResourceMeter::at_max(max_hp),
            base_strength,
            electronic: false,
            can_heal: false,
            reward: 0,
            weapon: None,
            actions: ArrayVec::new(),
            statuses: ArrayVec::new(),
            disabled_rounds: 0,
        }
    }

    pub fn with_electronic(mut self, electronic: bool) -> Self {
        self.electronic = electronic;
        self
    }

    pub fn with_can_heal(mut self, can_heal: bool) -> Self {
        self.can_heal = can_heal;
        self
    }

    pub fn with_reward(mut self, reward: u32) -> Self {
        self.reward = reward;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    /// Grants an innate status (e.g. a permanent regeneration trait).
    pub fn with_status(mut self, status: StatusEffect) -> Self {
        self.apply_status(status);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_electronic(&self) -> bool {
        self.electronic
    }

    pub const fn can_heal(&self) -> bool {
        self.can_heal
    }

    pub const fn reward(&self) -> u32 {
        self.reward
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn equip(&mut self, weapon: Weapon) {
        self.weapon = Some(weapon);
    }

    pub const fn is_defeated(&self) -> bool {
        self.hp.is_depleted()
    }

    pub const fn is_disabled(&self) -> bool {
        self.disabled_rounds > 0
    }

    /// Stuns this combatant for at least `rounds` rounds.
    pub fn disable(&mut self, rounds: u32) {
        self.disabled_rounds = self.disabled_rounds.max(rounds);
    }

    /// Base strength plus every active strength-boosting status.
    pub fn effective_strength(&self) -> u32 {
        let boost: u32 = self
            .statuses
            .iter()
            .filter(|status| status.kind == StatusKind::AttackBoost)
            .map(|status| status.magnitude)
            .sum();
        self.base_strength + boost
    }

    /// Subtracts damage, clamping at zero. Callers decide defeat semantics.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp.damage(amount);
    }

    /// Restores health, clamping at the maximum. Healing a defeated
    /// combatant is a permitted no-op.
    pub fn heal(&mut self, amount: u32) {
        if self.is_defeated() {
            return;
        }
        self.hp.restore(amount);
    }

    /// Registers a new capability. Insertion order is selection order.
    pub fn register_action(&mut self, kind: ActionKind) -> Result<(), SetupError> {
        self.actions
            .try_push(ActionState::new(kind))
            .map_err(|_| SetupError::TooManyActions {
                name: self.name.clone(),
                capacity: BattleConfig::MAX_ACTIONS,
            })
    }

    pub fn actions(&self) -> &[ActionState] {
        &self.actions
    }

    pub fn has_action(&self, kind: ActionKind) -> bool {
        self.actions.iter().any(|action| action.kind == kind)
    }

    /// Actions currently off cooldown, in registration order.
    pub fn available_actions(&self) -> Vec<ActionKind> {
        self.actions
            .iter()
            .filter(|action| action.is_ready())
            .map(|action| action.kind)
            .collect()
    }

    /// Puts an action on cooldown after use.
    pub fn set_cooldown(&mut self, kind: ActionKind, rounds: u32) {
        if let Some(action) = self.actions.iter_mut().find(|action| action.kind == kind) {
            action.cooldown_remaining = rounds;
        }
    }

    pub fn statuses(&self) -> &[StatusEffect] {
        &self.statuses
    }

    pub fn status(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.statuses.iter().find(|status| status.kind == kind)
    }

    /// Applies a status effect, merging with an existing one of the same
    /// kind: a permanent instance refuses the merge, a timed one is extended
    /// by the incoming duration.
    pub fn apply_status(&mut self, status: StatusEffect) -> StatusMerge {
        if let Some(existing) = self
            .statuses
            .iter_mut()
            .find(|existing| existing.kind == status.kind)
        {
            return existing.extend(&status);
        }
        // One slot per kind, so capacity cannot run out before kinds do.
        if !self.statuses.is_full() {
            self.statuses.push(status);
        }
        StatusMerge::Applied
    }

    /// Strips harmful statuses. Returns true if anything was removed.
    pub fn cleanse(&mut self) -> bool {
        let before = self.statuses.len();
        self.statuses.retain(|status| !status.kind.is_harmful());
        self.statuses.len() < before
    }

    /// End-of-round bookkeeping: status effects fire and tick, expired ones
    /// are removed, then the disable counter and action cooldowns count down.
    /// Defeated combatants are skipped entirely.
    pub fn end_of_round<R: Rng>(
        &mut self,
        config: &BattleConfig,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) {
        if self.is_defeated() {
            return;
        }

        for index in 0..self.statuses.len() {
            let status = self.statuses[index];
            // Effects stop firing the moment a tick brings the combatant
            // down; durations keep counting regardless.
            if !self.is_defeated() {
                match status.kind {
                    StatusKind::Burning | StatusKind::Poisoned => {
                        let pct =
                            rng.gen_range(config.harmful_tick_pct.min..=config.harmful_tick_pct.max);
                        let amount = status.magnitude * pct / 100;
                        self.hp.damage(amount);
                        sink.emit(BattleEvent::StatusDamage {
                            target: self.name.clone(),
                            kind: status.kind,
                            amount,
                            remaining_hp: self.hp.current,
                        });
                        if self.is_defeated() {
                            sink.emit(BattleEvent::Defeated {
                                name: self.name.clone(),
                            });
                        }
                    }
                    StatusKind::Regenerating => {
                        if !self.hp.is_full() {
                            let pct =
                                rng.gen_range(config.regen_tick_pct.min..=config.regen_tick_pct.max);
                            let amount = status.magnitude * pct / 100;
                            self.hp.restore(amount);
                            sink.emit(BattleEvent::StatusHealed {
                                target: self.name.clone(),
                                kind: status.kind,
                                amount,
                                current_hp: self.hp.current,
                            });
                        }
                    }
                    StatusKind::AttackBoost => {}
                }
            }
            self.statuses[index].tick();
        }

        for index in (0..self.statuses.len()).rev() {
            if self.statuses[index].is_expired() {
                let expired = self.statuses.remove(index);
                sink.emit(BattleEvent::StatusExpired {
                    target: self.name.clone(),
                    kind: expired.kind,
                });
            }
        }

        if self.disabled_rounds > 0 {
            self.disabled_rounds -= 1;
        }
        for action in &mut self.actions {
            action.tick_cooldown();
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::status::StatusDuration;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn health_stays_within_bounds() {
        let mut combatant = Combatant::new("Test Subject", 50, 10);
        combatant.take_damage(10_000);
        assert_eq!(combatant.hp.current, 0);
        combatant.take_damage(5);
        assert_eq!(combatant.hp.current, 0);
        // Healing a defeated combatant stays a no-op.
        combatant.heal(10_000);
        assert_eq!(combatant.hp.current, 0);

        let mut combatant = Combatant::new("Test Subject", 50, 10);
        combatant.take_damage(20);
        combatant.heal(10_000);
        assert_eq!(combatant.hp.current, 50);
    }

    #[test]
    fn effective_strength_includes_active_boosts() {
        let mut combatant = Combatant::new("Chemist", 100, 10);
        assert_eq!(combatant.effective_strength(), 10);
        combatant.apply_status(StatusEffect::new(StatusKind::AttackBoost, 8, 3));
        assert_eq!(combatant.effective_strength(), 18);
    }

    #[test]
    fn available_actions_preserve_registration_order() {
        let mut combatant = Combatant::new("Hero", 100, 10);
        combatant.register_action(ActionKind::Attack).unwrap();
        combatant.register_action(ActionKind::UseItem).unwrap();
        combatant.register_action(ActionKind::SpecialAttack).unwrap();

        assert_eq!(
            combatant.available_actions(),
            vec![
                ActionKind::Attack,
                ActionKind::UseItem,
                ActionKind::SpecialAttack
            ]
        );

        combatant.set_cooldown(ActionKind::UseItem, 2);
        assert_eq!(
            combatant.available_actions(),
            vec![ActionKind::Attack, ActionKind::SpecialAttack]
        );
    }

    #[test]
    fn cooldown_clears_after_exactly_n_rounds() {
        let config = BattleConfig::default();
        let mut rng = rng();
        let mut combatant = Combatant::new("Hero", 100, 10);
        combatant.register_action(ActionKind::SpecialAttack).unwrap();
        combatant.set_cooldown(ActionKind::SpecialAttack, 5);

        let mut sink = Vec::new();
        for _ in 0..5 {
            assert!(combatant.available_actions().is_empty());
            combatant.end_of_round(&config, &mut rng, &mut sink);
        }
        assert_eq!(
            combatant.available_actions(),
            vec![ActionKind::SpecialAttack]
        );
    }

    #[test]
    fn permanent_status_rejects_reapplication() {
        let mut combatant = Combatant::new("Bioengineer", 100, 10)
            .with_status(StatusEffect::permanent(StatusKind::Regenerating, 5));

        let merge = combatant.apply_status(StatusEffect::new(StatusKind::Regenerating, 5, 3));
        assert_eq!(merge, StatusMerge::RejectedPermanent);
        assert_eq!(
            combatant.status(StatusKind::Regenerating).unwrap().duration,
            StatusDuration::Permanent
        );
    }

    #[test]
    fn reapplied_status_extends_by_incoming_duration() {
        let mut combatant = Combatant::new("Target", 100, 10);
        combatant.apply_status(StatusEffect::new(StatusKind::Burning, 25, 3));
        let merge = combatant.apply_status(StatusEffect::new(StatusKind::Burning, 25, 2));
        assert_eq!(merge, StatusMerge::Extended);
        assert_eq!(
            combatant.status(StatusKind::Burning).unwrap().duration,
            StatusDuration::Rounds(5)
        );
    }

    #[test]
    fn end_of_round_skips_defeated_combatants() {
        let config = BattleConfig::default();
        let mut rng = rng();
        let mut combatant = Combatant::new("Drone", 30, 5);
        combatant.apply_status(StatusEffect::new(StatusKind::Burning, 25, 3));
        combatant.take_damage(30);

        let mut sink = Vec::new();
        combatant.end_of_round(&config, &mut rng, &mut sink);
        assert!(sink.is_empty());
        assert_eq!(
            combatant.status(StatusKind::Burning).unwrap().duration,
            StatusDuration::Rounds(3)
        );
    }

    #[test]
    fn disable_counts_down_once_per_round() {
        let config = BattleConfig::default();
        let mut rng = rng();
        let mut combatant = Combatant::new("Drone", 30, 5);
        combatant.disable(2);
        assert!(combatant.is_disabled());

        let mut sink = Vec::new();
        combatant.end_of_round(&config, &mut rng, &mut sink);
        assert!(combatant.is_disabled());
        combatant.end_of_round(&config, &mut rng, &mut sink);
        assert!(!combatant.is_disabled());
    }

    #[test]
    fn regeneration_does_not_fire_at_full_health() {
        let config = BattleConfig::default();
        let mut rng = rng();
        let mut combatant = Combatant::new("Bioengineer", 100, 10)
            .with_status(StatusEffect::permanent(StatusKind::Regenerating, 5));

        let mut sink = Vec::new();
        combatant.end_of_round(&config, &mut rng, &mut sink);
        assert!(sink.is_empty());

        combatant.take_damage(40);
        combatant.end_of_round(&config, &mut rng, &mut sink);
        match &sink[0] {
            BattleEvent::StatusHealed { amount, .. } => {
                // 50-120% of magnitude 5, truncated.
                assert!(*amount >= 2 && *amount <= 6, "amount {amount} out of band");
            }
            other => panic!("expected StatusHealed, got {other:?}"),
        }
    }
}
