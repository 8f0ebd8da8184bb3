//! End-to-end battle scenarios driven through the session orchestrator with
//! scripted player input and a seeded generator.

use std::collections::VecDeque;

use game_content::{CombatantTemplate, Encounter, HeroClass, ItemDefinition};
use game_core::{
    ActionKind, ActionPrompt, BattleConfig, BattleEvent, BattleOutcome, BattleView, CombatantView,
};
use runtime::{Hero, ItemPicker, Session};

struct ScriptedPrompt {
    actions: VecDeque<usize>,
}

impl ScriptedPrompt {
    fn new(actions: &[usize]) -> Self {
        Self {
            actions: actions.iter().copied().collect(),
        }
    }

    /// Always attacks once the script runs out.
    fn attack_forever() -> Self {
        Self::new(&[])
    }
}

impl ActionPrompt for ScriptedPrompt {
    fn choose_action(&mut self, _view: &BattleView, _actions: &[ActionKind]) -> usize {
        self.actions.pop_front().unwrap_or(0)
    }

    fn choose_target(&mut self, _candidates: &[CombatantView]) -> usize {
        0
    }
}

struct PickFirst;

impl ItemPicker for PickFirst {
    fn pick(&mut self, _items: &[ItemDefinition]) -> Option<usize> {
        Some(0)
    }
}

fn practice_encounter() -> Encounter {
    Encounter {
        name: "Training Pit".into(),
        enemies: vec![
            CombatantTemplate::builder("Practice Drone")
                .hp(40)
                .strength(3)
                .reward(10)
                .electronic()
                .build(),
        ],
    }
}

#[test]
fn attack_only_battle_runs_to_victory_and_credits_gold() {
    let hero = Hero::new(HeroClass::TacticalChemist, "Molly", 0).unwrap();
    let mut session = Session::new(42, 0, hero);

    let mut prompt = ScriptedPrompt::attack_forever();
    let mut events = Vec::new();
    let outcome = session
        .run_battle(&practice_encounter(), &mut prompt, &mut PickFirst, &mut events)
        .unwrap();

    assert_eq!(outcome, BattleOutcome::Victory { gold: 10 });
    assert_eq!(session.hero.gold(), 10);
    assert!(events
        .iter()
        .any(|event| matches!(event, BattleEvent::RoundStarted { round: 1 })));
    assert!(events.iter().any(|event| matches!(
        event,
        BattleEvent::Attacked { action: ActionKind::Attack, .. }
    )));
    assert!(events
        .iter()
        .any(|event| matches!(event, BattleEvent::Defeated { .. })));
}

#[test]
fn hijacking_the_only_opponent_ends_the_battle_with_full_reward() {
    let mut config = BattleConfig::default();
    config.hijack_success_pct = 100;

    let hero = Hero::new(HeroClass::PharmacologistHacker, "Case", 0).unwrap();
    let mut session = Session::new(7, 0, hero).with_battle_config(config);

    // Hero menu: Attack, Use Item, Special Attack, Hijack.
    let mut prompt = ScriptedPrompt::new(&[3]);
    let mut events = Vec::new();
    let outcome = session
        .run_battle(&practice_encounter(), &mut prompt, &mut PickFirst, &mut events)
        .unwrap();

    assert_eq!(outcome, BattleOutcome::Victory { gold: 10 });
    assert_eq!(session.hero.gold(), 10);
    assert!(events
        .iter()
        .any(|event| matches!(event, BattleEvent::HijackSucceeded { .. })));
    // The drone was never defeated, only converted.
    assert!(!events
        .iter()
        .any(|event| matches!(event, BattleEvent::Defeated { .. })));
}

#[test]
fn using_a_potion_consumes_it_and_costs_the_turn() {
    let hero = Hero::new(HeroClass::TacticalChemist, "Molly", 0).unwrap();
    let mut session = Session::new(3, 0, hero);
    session.hero.combatant.take_damage(60);
    assert_eq!(session.hero.inventory.len(), 1);

    // Round one: Use Item (menu index 1); afterwards attack until done.
    let mut prompt = ScriptedPrompt::new(&[1]);
    let mut events = Vec::new();
    let outcome = session
        .run_battle(&practice_encounter(), &mut prompt, &mut PickFirst, &mut events)
        .unwrap();

    assert_eq!(outcome, BattleOutcome::Victory { gold: 10 });
    assert!(session.hero.inventory.is_empty());
    assert!(events
        .iter()
        .any(|event| matches!(event, BattleEvent::ItemUsed { .. })));
}

#[test]
fn hero_state_carries_across_battles() {
    let hero = Hero::new(HeroClass::TacticalChemist, "Molly", 5).unwrap();
    let mut session = Session::new(11, 0, hero);

    let mut prompt = ScriptedPrompt::attack_forever();
    let mut events = Vec::new();
    session
        .run_battle(&practice_encounter(), &mut prompt, &mut PickFirst, &mut events)
        .unwrap();
    let hp_after_first = session.hero.combatant.hp.current;
    assert_eq!(session.hero.gold(), 15);

    let mut prompt = ScriptedPrompt::attack_forever();
    session
        .run_battle(&practice_encounter(), &mut prompt, &mut PickFirst, &mut events)
        .unwrap();

    assert_eq!(session.hero.gold(), 25);
    // The second battle started from the first battle's remaining health.
    assert!(session.hero.combatant.hp.current <= hp_after_first);
}

#[test]
fn identical_seeds_replay_identical_battles() {
    let run = |seed: u64| -> Vec<BattleEvent> {
        let hero = Hero::new(HeroClass::TacticalChemist, "Molly", 0).unwrap();
        let mut session = Session::new(seed, 1, hero);
        let mut prompt = ScriptedPrompt::attack_forever();
        let mut events = Vec::new();
        session
            .run_battle(&practice_encounter(), &mut prompt, &mut PickFirst, &mut events)
            .unwrap();
        events
    };

    assert_eq!(run(1234), run(1234));
}
