//! The session orchestrator and the persistent hero.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use game_content::{Encounter, HeroClass, ItemDefinition, PotionSize};
use game_core::{
    ActionPrompt, Battle, BattleConfig, BattleOutcome, Combatant, EventSink, SetupError,
};

use crate::error::SessionError;
use crate::inventory::{Inventory, ItemPicker, StashAdapter};

/// The player character as it persists between battles.
#[derive(Clone, Debug)]
pub struct Hero {
    pub combatant: Combatant,
    pub class: HeroClass,
    gold: u32,
    pub inventory: Inventory,
}

impl Hero {
    /// Creates a fresh hero of the given class with its starting loadout.
    pub fn new(class: HeroClass, name: impl Into<String>, gold: u32) -> Result<Self, SetupError> {
        let combatant = class.spawn(name)?;
        let mut inventory = Inventory::new();
        inventory.add(match class {
            HeroClass::Bioengineer => ItemDefinition::HealthPotion(PotionSize::Large),
            _ => ItemDefinition::HealthPotion(PotionSize::Small),
        });
        Ok(Self {
            combatant,
            class,
            gold,
            inventory,
        })
    }

    pub const fn gold(&self) -> u32 {
        self.gold
    }

    /// Credits battle rewards.
    pub fn collect_gold(&mut self, amount: u32) {
        self.gold += amount;
    }

    /// Spends gold if the hero can afford it.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold >= amount {
            self.gold -= amount;
            true
        } else {
            false
        }
    }
}

/// What a friendly contact did for the hero between battles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssistanceReport {
    /// Harmful statuses were stripped.
    pub cleansed: bool,
    /// Health restored (0 when already at full health).
    pub healed: u32,
}

/// A play session: one seeded generator, one hero, any number of battles.
///
/// The seed is the only externally supplied configuration affecting
/// determinism; replaying a session with the same seed and the same player
/// choices reproduces every battle exactly.
pub struct Session {
    battle_config: BattleConfig,
    difficulty: u32,
    rng: ChaCha8Rng,
    pub hero: Hero,
}

impl Session {
    pub fn new(seed: u64, difficulty: u32, hero: Hero) -> Self {
        Self {
            battle_config: BattleConfig::default(),
            difficulty,
            rng: ChaCha8Rng::seed_from_u64(seed),
            hero,
        }
    }

    /// Overrides combat constants (tests, difficulty mods).
    pub fn with_battle_config(mut self, config: BattleConfig) -> Self {
        self.battle_config = config;
        self
    }

    pub const fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Runs one encounter to its terminal state and folds the result back
    /// into the hero (health, statuses, cooldowns, gold).
    pub fn run_battle(
        &mut self,
        encounter: &Encounter,
        prompt: &mut dyn ActionPrompt,
        picker: &mut dyn ItemPicker,
        sink: &mut dyn EventSink,
    ) -> Result<BattleOutcome, SessionError> {
        self.run_battle_with_allies(encounter, Vec::new(), prompt, picker, sink)
    }

    /// As [`Self::run_battle`], with friendly combatants on the hero's side.
    pub fn run_battle_with_allies(
        &mut self,
        encounter: &Encounter,
        allies: Vec<Combatant>,
        prompt: &mut dyn ActionPrompt,
        picker: &mut dyn ItemPicker,
        sink: &mut dyn EventSink,
    ) -> Result<BattleOutcome, SessionError> {
        let enemies = encounter
            .enemies
            .iter()
            .map(|template| template.spawn(self.difficulty))
            .collect::<Result<Vec<_>, SetupError>>()?;

        let mut battle = Battle::new(
            self.battle_config.clone(),
            self.hero.combatant.clone(),
            allies,
            enemies,
        )?;
        tracing::info!(
            encounter = %encounter.name,
            difficulty = self.difficulty,
            "battle started"
        );

        let mut stash = StashAdapter {
            inventory: &mut self.hero.inventory,
            picker,
        };
        let outcome = battle.run(&mut self.rng, prompt, &mut stash, sink);
        let rounds = battle.round();
        self.hero.combatant = battle.into_player();

        match outcome {
            BattleOutcome::Victory { gold } => {
                self.hero.collect_gold(gold);
                tracing::info!(gold, rounds, "battle won");
            }
            BattleOutcome::Defeat => tracing::info!(rounds, "battle lost"),
        }
        Ok(outcome)
    }

    /// A friendly contact patches the hero up between battles: harmful
    /// statuses are cleansed and a bounded random amount of health restored.
    pub fn accept_assistance(&mut self) -> AssistanceReport {
        let cleansed = self.hero.combatant.cleanse();
        let healed = if self.hero.combatant.hp.is_full() {
            0
        } else {
            let amount = self.rng.gen_range(20..50);
            self.hero.combatant.heal(amount);
            amount
        };
        if cleansed || healed > 0 {
            tracing::info!(cleansed, healed, "assistance accepted");
        }
        AssistanceReport { cleansed, healed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_gold_is_guarded() {
        let mut hero = Hero::new(HeroClass::TacticalChemist, "Molly", 20).unwrap();
        assert!(hero.spend_gold(15));
        assert_eq!(hero.gold(), 5);
        assert!(!hero.spend_gold(10));
        assert_eq!(hero.gold(), 5);
        hero.collect_gold(45);
        assert_eq!(hero.gold(), 50);
    }

    #[test]
    fn assistance_cleanses_and_heals_the_wounded() {
        use game_core::{StatusEffect, StatusKind};

        let hero = Hero::new(HeroClass::PharmacologistHacker, "Case", 0).unwrap();
        let mut session = Session::new(99, 0, hero);
        session.hero.combatant.take_damage(60);
        session
            .hero
            .combatant
            .apply_status(StatusEffect::new(StatusKind::Poisoned, 10, 3));

        let report = session.accept_assistance();
        assert!(report.cleansed);
        assert!((20..50).contains(&report.healed));
        assert!(session.hero.combatant.status(StatusKind::Poisoned).is_none());
    }

    #[test]
    fn assistance_is_a_no_op_at_full_health() {
        let hero = Hero::new(HeroClass::Bioengineer, "Armitage", 0).unwrap();
        let mut session = Session::new(99, 0, hero);
        let report = session.accept_assistance();
        assert_eq!(
            report,
            AssistanceReport {
                cleansed: false,
                healed: 0
            }
        );
    }
}
