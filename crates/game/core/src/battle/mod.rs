//! The round sequencer and action resolution pipeline.
//!
//! [`Battle`] is the authoritative reducer for combat state. Each round walks
//! a fixed phase protocol: the player acts (via the input collaborator), then
//! allies, then opponents, then end-of-round effects resolve and defeated
//! units are pruned. Termination is re-evaluated before every phase so a
//! mid-round wipe stops further turns immediately.

mod event;
mod roster;

pub use event::BattleEvent;
pub use roster::{CombatantId, Roster, Side};

use rand::Rng;

use crate::action::{ActionKind, TargetingRule};
use crate::collab::{ActionPrompt, BattleView, CombatantView, EmptyStash, EventSink, ItemEffect, ItemStash};
use crate::combatant::Combatant;
use crate::config::{BattleConfig, PctRange};
use crate::error::SetupError;
use crate::status::{StatusEffect, StatusKind, StatusMerge};

/// Phases of one battle round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattlePhase {
    AwaitingPlayerAction,
    ResolvingPlayerAction,
    AlliesActing,
    OpponentsActing,
    EndOfRoundEffects,
    Victory,
    Defeat,
}

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// All opposition eliminated; `gold` sums the original opponent roster.
    Victory { gold: u32 },
    /// The player fell.
    Defeat,
}

/// A battle in progress.
#[derive(Debug)]
pub struct Battle {
    config: BattleConfig,
    roster: Roster,
    phase: BattlePhase,
    round: u32,
}

impl Battle {
    /// Assembles a battle, validating setup preconditions: at least one
    /// opponent, and the item-use action registered on the player only.
    pub fn new(
        config: BattleConfig,
        player: Combatant,
        allies: Vec<Combatant>,
        opponents: Vec<Combatant>,
    ) -> Result<Self, SetupError> {
        if opponents.is_empty() {
            return Err(SetupError::NoOpponents);
        }
        for combatant in allies.iter().chain(opponents.iter()) {
            if combatant.has_action(ActionKind::UseItem) {
                return Err(SetupError::ItemActionOnNonHero {
                    name: combatant.name().to_owned(),
                });
            }
        }

        Ok(Self {
            config,
            roster: Roster::new(player, allies, opponents),
            phase: BattlePhase::AwaitingPlayerAction,
            round: 0,
        })
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub const fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub const fn round(&self) -> u32 {
        self.round
    }

    pub fn combatant(&self, id: CombatantId) -> &Combatant {
        self.roster.get(id)
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> &mut Combatant {
        self.roster.get_mut(id)
    }

    /// Hands the player back to the session once the battle is over.
    pub fn into_player(self) -> Combatant {
        self.roster.into_player()
    }

    /// True once the battle has reached a terminal state: the player is
    /// down, the opponent roster is empty, or every opponent is at zero
    /// health.
    pub fn combat_ended(&self) -> bool {
        if self.roster.get(self.roster.player_id()).is_defeated() {
            return true;
        }
        self.roster
            .opponents()
            .iter()
            .all(|&id| self.roster.get(id).is_defeated())
    }

    /// Living opponents of `actor`, in roster order. For opponent-side
    /// actors this is the hero side, player first.
    pub fn living_opponents_of(&self, actor: CombatantId) -> Vec<CombatantId> {
        let ids = match self.roster.side_of(actor) {
            Side::Heroes => self.roster.opponents().to_vec(),
            Side::Opponents => self.roster.hero_side(),
        };
        ids.into_iter()
            .filter(|&id| !self.roster.get(id).is_defeated())
            .collect()
    }

    /// Living combatants on `actor`'s own side (the actor included).
    pub fn living_allies_of(&self, actor: CombatantId) -> Vec<CombatantId> {
        let ids = match self.roster.side_of(actor) {
            Side::Heroes => self.roster.hero_side(),
            Side::Opponents => self.roster.opponents().to_vec(),
        };
        ids.into_iter()
            .filter(|&id| !self.roster.get(id).is_defeated())
            .collect()
    }

    /// Resolves an action's candidate targets for `actor` this round.
    /// An empty set for a selection-requiring rule means the action cannot
    /// be used right now.
    pub fn valid_targets(&self, actor: CombatantId, kind: ActionKind) -> Vec<CombatantId> {
        match kind.profile().targeting {
            TargetingRule::Opponents => self.living_opponents_of(actor),
            TargetingRule::WoundedAllies => self
                .living_allies_of(actor)
                .into_iter()
                .filter(|&id| !self.roster.get(id).hp.is_full())
                .collect(),
            TargetingRule::ElectronicOpponents => self
                .living_opponents_of(actor)
                .into_iter()
                .filter(|&id| self.roster.get(id).is_electronic())
                .collect(),
            TargetingRule::AllOpponents | TargetingRule::Stash => Vec::new(),
        }
    }

    /// Executes one action. Returns whether the turn was consumed; a `false`
    /// return (missing target, cancelled item prompt, unhackable target)
    /// sends the caller back to selection.
    pub fn execute_action<R: Rng>(
        &mut self,
        actor: CombatantId,
        kind: ActionKind,
        target: Option<CombatantId>,
        rng: &mut R,
        stash: &mut dyn ItemStash,
        sink: &mut dyn EventSink,
    ) -> bool {
        match kind {
            ActionKind::Attack => {
                let config = self.config.clone();
                self.strike(
                    actor,
                    kind,
                    target,
                    config.attack_strength_pct,
                    config.attack_weapon_pct,
                    0,
                    rng,
                    sink,
                )
            }
            ActionKind::SpecialAttack => {
                let config = self.config.clone();
                self.strike(
                    actor,
                    kind,
                    target,
                    config.special_strength_pct,
                    config.special_weapon_pct,
                    config.special_cooldown,
                    rng,
                    sink,
                )
            }
            ActionKind::Heal => self.heal(actor, target, rng, sink),
            ActionKind::IncendiaryStrike => self.incendiary_strike(actor, rng, sink),
            ActionKind::Hijack => self.hijack(actor, target, rng, sink),
            ActionKind::UseItem => self.use_item(actor, stash, sink),
        }
    }

    /// Shared damage pipeline for basic and special attacks: independent
    /// percentage draws for the strength and weapon terms, truncated to
    /// integers.
    #[allow(clippy::too_many_arguments)]
    fn strike<R: Rng>(
        &mut self,
        actor: CombatantId,
        kind: ActionKind,
        target: Option<CombatantId>,
        strength_pct: PctRange,
        weapon_pct: PctRange,
        cooldown: u32,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };

        let (actor_name, strength, weapon_power) = {
            let attacker = self.roster.get(actor);
            (
                attacker.name().to_owned(),
                attacker.effective_strength(),
                attacker.weapon().map_or(0, |weapon| weapon.power),
            )
        };

        let strength_roll = rng.gen_range(strength_pct.min..=strength_pct.max);
        let mut damage = strength * strength_roll / 100;
        if weapon_power > 0 {
            let weapon_roll = rng.gen_range(weapon_pct.min..=weapon_pct.max);
            damage += weapon_power * weapon_roll / 100;
        }

        let defender = self.roster.get_mut(target);
        let was_alive = !defender.is_defeated();
        defender.take_damage(damage);
        let remaining_hp = defender.hp.current;
        let target_name = defender.name().to_owned();

        sink.emit(BattleEvent::Attacked {
            actor: actor_name,
            action: kind,
            target: target_name.clone(),
            damage,
            remaining_hp,
        });
        if was_alive && remaining_hp == 0 {
            sink.emit(BattleEvent::Defeated { name: target_name });
        }

        if cooldown > 0 {
            self.roster.get_mut(actor).set_cooldown(kind, cooldown);
        }
        true
    }

    fn heal<R: Rng>(
        &mut self,
        actor: CombatantId,
        target: Option<CombatantId>,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };

        let (actor_name, strength) = {
            let healer = self.roster.get(actor);
            (healer.name().to_owned(), healer.effective_strength())
        };
        let amount = self.config.heal_base
            + if strength > 0 {
                rng.gen_range(0..strength)
            } else {
                0
            };

        let patient = self.roster.get_mut(target);
        patient.heal(amount);
        sink.emit(BattleEvent::Healed {
            actor: actor_name,
            target: patient.name().to_owned(),
            amount,
            current_hp: patient.hp.current,
        });

        let cooldown = self.config.heal_cooldown;
        self.roster.get_mut(actor).set_cooldown(ActionKind::Heal, cooldown);
        true
    }

    /// Sets every current opponent of the actor on fire.
    fn incendiary_strike<R: Rng>(
        &mut self,
        actor: CombatantId,
        _rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> bool {
        let burn = StatusEffect::new(
            StatusKind::Burning,
            self.config.incendiary_burn_magnitude,
            self.config.incendiary_burn_rounds,
        );
        for id in self.living_opponents_of(actor) {
            self.apply_status_to(id, burn, sink);
        }

        let cooldown = self.config.incendiary_cooldown;
        self.roster
            .get_mut(actor)
            .set_cooldown(ActionKind::IncendiaryStrike, cooldown);
        true
    }

    fn hijack<R: Rng>(
        &mut self,
        actor: CombatantId,
        target: Option<CombatantId>,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };
        if !self.roster.get(target).is_electronic() {
            return false;
        }

        let actor_name = self.roster.get(actor).name().to_owned();
        let target_name = self.roster.get(target).name().to_owned();

        let roll = rng.gen_range(0..100);
        if roll < self.config.hijack_success_pct {
            self.roster.move_to_side_of(actor, target);
            let stun = self.config.hijack_stun_rounds;
            self.roster.get_mut(target).disable(stun);
            sink.emit(BattleEvent::HijackSucceeded {
                actor: actor_name,
                target: target_name.clone(),
            });
            sink.emit(BattleEvent::Disabled {
                target: target_name,
                rounds: stun,
            });
            let cooldown = self.config.hijack_success_cooldown;
            self.roster
                .get_mut(actor)
                .set_cooldown(ActionKind::Hijack, cooldown);
        } else {
            sink.emit(BattleEvent::HijackFailed {
                actor: actor_name,
                target: target_name,
            });
            let cooldown = self.config.hijack_fail_cooldown;
            self.roster
                .get_mut(actor)
                .set_cooldown(ActionKind::Hijack, cooldown);
        }
        // An attempt was made; the turn is consumed either way.
        true
    }

    fn use_item(
        &mut self,
        actor: CombatantId,
        stash: &mut dyn ItemStash,
        sink: &mut dyn EventSink,
    ) -> bool {
        let Some(selection) = stash.select() else {
            return false;
        };

        let actor_name = self.roster.get(actor).name().to_owned();
        match &selection.effect {
            ItemEffect::RestoreHealth(amount) => {
                let amount = *amount;
                let user = self.roster.get_mut(actor);
                user.heal(amount);
                sink.emit(BattleEvent::Healed {
                    actor: actor_name.clone(),
                    target: actor_name.clone(),
                    amount,
                    current_hp: user.hp.current,
                });
            }
            ItemEffect::GrantStatus(status) => {
                self.apply_status_to(actor, *status, sink);
            }
            ItemEffect::DamageOpponents(amount) => {
                let amount = *amount;
                for id in self.living_opponents_of(actor) {
                    let defender = self.roster.get_mut(id);
                    defender.take_damage(amount);
                    let remaining_hp = defender.hp.current;
                    let target_name = defender.name().to_owned();
                    sink.emit(BattleEvent::Attacked {
                        actor: actor_name.clone(),
                        action: ActionKind::UseItem,
                        target: target_name.clone(),
                        damage: amount,
                        remaining_hp,
                    });
                    if remaining_hp == 0 {
                        sink.emit(BattleEvent::Defeated { name: target_name });
                    }
                }
            }
        }

        stash.consume(&selection);
        sink.emit(BattleEvent::ItemUsed {
            actor: actor_name,
            item: selection.name,
        });
        true
    }

    /// Applies a status and reports the merge outcome as an event.
    fn apply_status_to(&mut self, id: CombatantId, status: StatusEffect, sink: &mut dyn EventSink) {
        let combatant = self.roster.get_mut(id);
        let name = combatant.name().to_owned();
        match combatant.apply_status(status) {
            StatusMerge::Applied => sink.emit(BattleEvent::StatusApplied {
                target: name,
                kind: status.kind,
                duration: status.duration,
            }),
            StatusMerge::Extended => {
                let duration = combatant
                    .status(status.kind)
                    .map(|merged| merged.duration)
                    .unwrap_or(status.duration);
                sink.emit(BattleEvent::StatusExtended {
                    target: name,
                    kind: status.kind,
                    duration,
                });
            }
            StatusMerge::RejectedPermanent => sink.emit(BattleEvent::StatusRejected {
                target: name,
                kind: status.kind,
            }),
        }
    }

    /// Runs the battle to a terminal state.
    pub fn run<R: Rng>(
        &mut self,
        rng: &mut R,
        prompt: &mut dyn ActionPrompt,
        stash: &mut dyn ItemStash,
        sink: &mut dyn EventSink,
    ) -> BattleOutcome {
        while !self.combat_ended() {
            self.round += 1;
            sink.emit(BattleEvent::RoundStarted { round: self.round });

            self.player_phase(rng, prompt, stash, sink);

            self.phase = BattlePhase::AlliesActing;
            if !self.combat_ended() {
                self.side_phase(self.roster.allies().to_vec(), rng, sink);
            }

            self.phase = BattlePhase::OpponentsActing;
            if !self.combat_ended() {
                self.side_phase(self.roster.opponents().to_vec(), rng, sink);
            }

            self.phase = BattlePhase::EndOfRoundEffects;
            self.end_of_round_phase(rng, sink);
        }
        self.finish()
    }

    /// The player keeps choosing until one action executes successfully.
    fn player_phase<R: Rng>(
        &mut self,
        rng: &mut R,
        prompt: &mut dyn ActionPrompt,
        stash: &mut dyn ItemStash,
        sink: &mut dyn EventSink,
    ) {
        let player = self.roster.player_id();
        loop {
            if self.combat_ended() {
                return;
            }
            self.phase = BattlePhase::AwaitingPlayerAction;

            let view = self.view();
            let actions = self.roster.get(player).available_actions();
            if actions.is_empty() {
                // Everything on cooldown; the turn passes.
                return;
            }
            let choice = prompt.choose_action(&view, &actions);
            let Some(&kind) = actions.get(choice) else {
                continue;
            };

            let target = if kind.profile().targeting.requires_selection() {
                let candidates = self.valid_targets(player, kind);
                match candidates.len() {
                    0 => continue,
                    1 => Some(candidates[0]),
                    _ => {
                        let views: Vec<CombatantView> =
                            candidates.iter().map(|&id| self.view_of(id)).collect();
                        let picked = prompt.choose_target(&views);
                        let Some(&id) = candidates.get(picked) else {
                            continue;
                        };
                        Some(id)
                    }
                }
            } else {
                None
            };

            self.phase = BattlePhase::ResolvingPlayerAction;
            if self.execute_action(player, kind, target, rng, stash, sink) {
                return;
            }
        }
    }

    /// AI turns for one side, iterated over a snapshot taken at phase start
    /// so mid-phase roster mutation (a capture) does not perturb iteration.
    fn side_phase<R: Rng>(
        &mut self,
        snapshot: Vec<CombatantId>,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) {
        for id in snapshot {
            if self.combat_ended() {
                return;
            }
            {
                let combatant = self.roster.get(id);
                if combatant.is_defeated() || combatant.is_disabled() {
                    continue;
                }
            }

            // Random action, retried without replacement when it has no
            // target this round; the weakest valid candidate is attacked or
            // healed (first encountered wins ties).
            let mut options = self.roster.get(id).available_actions();
            while !options.is_empty() {
                let pick = rng.gen_range(0..options.len());
                let kind = options.swap_remove(pick);

                let targeting = kind.profile().targeting;
                let target = match targeting {
                    TargetingRule::Stash => continue,
                    TargetingRule::AllOpponents => {
                        if self.living_opponents_of(id).is_empty() {
                            continue;
                        }
                        None
                    }
                    _ => {
                        let candidates = self.valid_targets(id, kind);
                        let Some(&weakest) = candidates
                            .iter()
                            .min_by_key(|&&candidate| self.roster.get(candidate).hp.current)
                        else {
                            continue;
                        };
                        Some(weakest)
                    }
                };

                self.execute_action(id, kind, target, rng, &mut EmptyStash, sink);
                break;
            }
        }
    }

    /// Resolves end-of-round effects in acting order (player, allies,
    /// opponents), then prunes defeated units from both sides.
    fn end_of_round_phase<R: Rng>(&mut self, rng: &mut R, sink: &mut dyn EventSink) {
        let mut order = self.roster.hero_side();
        order.extend_from_slice(self.roster.opponents());

        let config = self.config.clone();
        for id in order {
            self.roster.get_mut(id).end_of_round(&config, rng, sink);
        }
        self.roster.prune_defeated();
    }

    fn finish(&mut self) -> BattleOutcome {
        if self.roster.get(self.roster.player_id()).is_defeated() {
            self.phase = BattlePhase::Defeat;
            BattleOutcome::Defeat
        } else {
            self.phase = BattlePhase::Victory;
            BattleOutcome::Victory {
                gold: self.roster.original_reward(),
            }
        }
    }

    /// Snapshot of the battle for menus and status panels.
    pub fn view(&self) -> BattleView {
        BattleView {
            round: self.round,
            player: self.view_of(self.roster.player_id()),
            allies: self
                .roster
                .allies()
                .iter()
                .map(|&id| self.view_of(id))
                .collect(),
            opponents: self
                .roster
                .opponents()
                .iter()
                .map(|&id| self.view_of(id))
                .collect(),
        }
    }

    fn view_of(&self, id: CombatantId) -> CombatantView {
        let combatant = self.roster.get(id);
        CombatantView {
            id,
            name: combatant.name().to_owned(),
            hp_current: combatant.hp.current,
            hp_max: combatant.hp.maximum,
            electronic: combatant.is_electronic(),
        }
    }
}
