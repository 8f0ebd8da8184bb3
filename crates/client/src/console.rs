//! Stdin-driven implementations of the engine's input collaborators.
//!
//! All prompts re-ask on invalid entries; an out-of-range number never
//! escapes this module, so the engine only ever sees valid selections.

use std::io::{self, BufRead, Write};

use game_content::{HeroClass, ItemDefinition};
use game_core::{ActionKind, ActionPrompt, BattleView, CombatantView};
use runtime::ItemPicker;

use crate::render;

/// Line-oriented console I/O.
pub struct Console {
    input: io::Stdin,
}

impl Console {
    pub fn new() -> Self {
        Self { input: io::stdin() }
    }

    /// Reads one trimmed line; exits the process cleanly when stdin closes.
    fn read_line(&mut self) -> String {
        let mut line = String::new();
        let read = self.input.lock().read_line(&mut line).unwrap_or(0);
        if read == 0 {
            println!("\nInput closed. Until next time.");
            std::process::exit(0);
        }
        line.trim().to_owned()
    }

    fn flush_prompt(prompt: &str) {
        print!("{prompt}");
        let _ = io::stdout().flush();
    }

    /// Prompts until a number in `[1, len]` is entered; returns it 0-based.
    fn read_index(&mut self, prompt: &str, len: usize) -> usize {
        loop {
            Self::flush_prompt(prompt);
            match self.read_line().parse::<usize>() {
                Ok(choice) if (1..=len).contains(&choice) => return choice - 1,
                _ => println!("Invalid choice, try again."),
            }
        }
    }

    /// Prompts until a non-empty name is entered.
    pub fn read_name(&mut self, prompt: &str) -> String {
        loop {
            Self::flush_prompt(prompt);
            let name = self.read_line();
            if !name.is_empty() {
                return name;
            }
        }
    }

    pub fn choose_class(&mut self) -> HeroClass {
        println!("\nChoose your class:");
        for (index, class) in HeroClass::ALL.iter().enumerate() {
            println!("{}) {class}", index + 1);
        }
        let pick = self.read_index("> ", HeroClass::ALL.len());
        HeroClass::ALL[pick]
    }

    /// Pauses until the player presses enter.
    pub fn confirm(&mut self, prompt: &str) {
        Self::flush_prompt(prompt);
        self.read_line();
    }
}

impl ActionPrompt for Console {
    fn choose_action(&mut self, view: &BattleView, actions: &[ActionKind]) -> usize {
        render::render_view(view);
        println!("\nChoose your action:");
        for (index, action) in actions.iter().enumerate() {
            println!("{}) {action}", index + 1);
        }
        self.read_index("> ", actions.len())
    }

    fn choose_target(&mut self, candidates: &[CombatantView]) -> usize {
        println!("\nChoose your target:");
        for (index, candidate) in candidates.iter().enumerate() {
            println!(
                "{}) {}  HP [{}/{}]",
                index + 1,
                candidate.name,
                candidate.hp_current,
                candidate.hp_max
            );
        }
        self.read_index("> ", candidates.len())
    }
}

impl ItemPicker for Console {
    fn pick(&mut self, items: &[ItemDefinition]) -> Option<usize> {
        println!("\nYour stash (0 to cancel):");
        for (index, item) in items.iter().enumerate() {
            println!("{}) {}", index + 1, item.name());
        }
        loop {
            Self::flush_prompt("> ");
            match self.read_line().parse::<usize>() {
                Ok(0) => return None,
                Ok(choice) if choice <= items.len() => return Some(choice - 1),
                _ => println!("Invalid choice, try again."),
            }
        }
    }
}
