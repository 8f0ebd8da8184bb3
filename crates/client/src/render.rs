//! Text rendering of battle views and events.

use game_core::{ActionKind, BattleEvent, BattleView, EventSink, StatusDuration};

/// Prints the status panel shown at the start of each player turn.
pub fn render_view(view: &BattleView) {
    println!("=====================================================");
    println!(
        " HERO: {}  HP [{}/{}]",
        view.player.name, view.player.hp_current, view.player.hp_max
    );
    if !view.allies.is_empty() {
        println!(" ALLIES:");
        for ally in &view.allies {
            println!(
                "   + {}  HP [{}/{}]",
                ally.name, ally.hp_current, ally.hp_max
            );
        }
    }
    println!(" ENEMIES:");
    for enemy in &view.opponents {
        let marker = if enemy.electronic { "[e]" } else { "   " };
        println!(
            "   {} {}  HP [{}/{}]",
            marker, enemy.name, enemy.hp_current, enemy.hp_max
        );
    }
    println!("=====================================================");
}

/// Sink that renders each battle event as a console line.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: BattleEvent) {
        match event {
            BattleEvent::RoundStarted { round } => {
                println!("\n--- Round {round} ---");
            }
            BattleEvent::Attacked {
                actor,
                action,
                target,
                damage,
                remaining_hp,
            } => {
                let verb = match action {
                    ActionKind::SpecialAttack => "unleashes a special attack on",
                    ActionKind::UseItem => "hits",
                    _ => "attacks",
                };
                println!("{actor} {verb} {target} for {damage} damage ({target} at {remaining_hp} HP)");
            }
            BattleEvent::Healed {
                actor,
                target,
                amount,
                current_hp,
            } => {
                if actor == target {
                    println!("{actor} recovers {amount} HP (now {current_hp})");
                } else {
                    println!("{actor} heals {target} for {amount} HP ({target} at {current_hp})");
                }
            }
            BattleEvent::StatusApplied {
                target,
                kind,
                duration,
            } => match duration {
                StatusDuration::Rounds(rounds) => {
                    println!("{target} is now {kind} for {rounds} rounds");
                }
                StatusDuration::Permanent => println!("{target} is now permanently {kind}"),
            },
            BattleEvent::StatusExtended {
                target,
                kind,
                duration,
            } => {
                if let StatusDuration::Rounds(rounds) = duration {
                    println!("{target}'s {kind} is prolonged ({rounds} rounds left)");
                }
            }
            BattleEvent::StatusRejected { target, kind } => {
                println!("{target}'s {kind} cannot be altered");
            }
            BattleEvent::StatusDamage {
                target,
                kind,
                amount,
                remaining_hp,
            } => {
                println!("{target} takes {amount} {kind} damage ({remaining_hp} HP left)");
            }
            BattleEvent::StatusHealed {
                target,
                kind,
                amount,
                current_hp,
            } => {
                println!("{target} regenerates {amount} HP from {kind} (now {current_hp})");
            }
            BattleEvent::StatusExpired { target, kind } => {
                println!("{target} is no longer {kind}");
            }
            BattleEvent::HijackSucceeded { actor, target } => {
                println!("{actor} hijacks {target} -- it fights for you now!");
            }
            BattleEvent::HijackFailed { actor, target } => {
                println!("{actor} fails to hijack {target}");
            }
            BattleEvent::Disabled { target, rounds } => {
                println!("{target} is disabled for {rounds} round(s)");
            }
            BattleEvent::ItemUsed { actor, item } => {
                println!("{actor} uses {item}");
            }
            BattleEvent::Defeated { name } => {
                println!("{name} goes down!");
            }
        }
    }
}
