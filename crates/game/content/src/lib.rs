//! Declarative game content: combatant templates, hero classes, items, and
//! encounter definitions.
//!
//! Everything a battle is built from is data here; `game-core` stays free of
//! names and numbers. Templates can also be loaded from RON files via the
//! `loaders` feature, matching the rest of the content pipeline.
pub mod encounters;
pub mod heroes;
pub mod items;
pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounters::{Encounter, builtin_encounters};
pub use heroes::HeroClass;
pub use items::{ItemDefinition, PotionSize, builtin_items};
pub use templates::CombatantTemplate;
