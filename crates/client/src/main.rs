//! Terminal client entry point.
mod config;
mod console;
mod render;

use anyhow::Result;

use game_content::builtin_encounters;
use game_core::BattleOutcome;
use runtime::{Hero, Session};

use config::ClientConfig;
use console::Console;
use render::ConsoleSink;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let mut console = Console::new();

    println!("G R I D F A L L");
    println!("A text adventure in the undercity. Seed: {}", config.seed);

    let class = console.choose_class();
    let name = console.read_name("Name your hero: ");
    let hero = Hero::new(class, name, config.gold)?;
    let mut session = Session::new(config.seed, config.difficulty, hero);

    // Separate console handles for the two collaborator seams; both read
    // from the same stdin.
    let mut picker = Console::new();

    for encounter in builtin_encounters() {
        println!("\n*** {} ***", encounter.name);
        console.confirm("Press enter to engage...");

        let mut sink = ConsoleSink;
        let outcome = session.run_battle(&encounter, &mut console, &mut picker, &mut sink)?;
        match outcome {
            BattleOutcome::Victory { gold } => {
                println!(
                    "\nVictory! You loot {gold} gold ({} total).",
                    session.hero.gold()
                );
                let report = session.accept_assistance();
                if report.cleansed {
                    println!("A street medic cleanses your wounds.");
                }
                if report.healed > 0 {
                    println!("You are patched up for {} HP.", report.healed);
                }
            }
            BattleOutcome::Defeat => {
                println!("\nYou have fallen. The grid forgets quickly.");
                return Ok(());
            }
        }
    }

    println!(
        "\nThe vault is yours. {} retires with {} gold.",
        session.hero.combatant.name(),
        session.hero.gold()
    );
    Ok(())
}
