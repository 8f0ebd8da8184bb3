//! RON loaders for externally defined content.
//!
//! Shipped content is compiled in; campaigns and mods can override it with
//! RON files laid out as a list of [`Encounter`] values.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::encounters::Encounter;

/// Loads encounter definitions from a RON file.
pub fn load_encounters(path: impl AsRef<Path>) -> Result<Vec<Encounter>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading encounter file {}", path.display()))?;
    parse_encounters(&text).with_context(|| format!("parsing encounter file {}", path.display()))
}

/// Parses encounter definitions from RON text.
pub fn parse_encounters(text: &str) -> Result<Vec<Encounter>> {
    Ok(ron::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        (
            name: "Loading Dock",
            enemies: [
                (
                    name: "Cargo Drone",
                    base_hp: 35,
                    base_strength: 5,
                    base_reward: 12,
                    electronic: true,
                    can_heal: false,
                    actions: [Attack],
                    weapon: None,
                ),
            ],
        ),
    ]"#;

    #[test]
    fn parses_a_minimal_encounter_file() {
        let encounters = parse_encounters(SAMPLE).unwrap();
        assert_eq!(encounters.len(), 1);
        assert_eq!(encounters[0].name, "Loading Dock");

        let drone = encounters[0].enemies[0].spawn(0).unwrap();
        assert!(drone.is_electronic());
        assert_eq!(drone.hp.maximum, 35);
        assert_eq!(drone.reward(), 12);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(parse_encounters("not ron at all").is_err());
    }
}
