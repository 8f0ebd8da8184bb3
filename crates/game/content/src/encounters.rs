//! Encounter definitions: which units the player faces, and where.

use game_core::ActionKind;

use crate::templates::CombatantTemplate;

/// A battle setup: a named group of enemy templates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub name: String,
    pub enemies: Vec<CombatantTemplate>,
}

/// The shipped campaign encounters, in story order.
pub fn builtin_encounters() -> Vec<Encounter> {
    vec![
        Encounter {
            name: "Back Alley".into(),
            enemies: vec![
                CombatantTemplate::builder("Street Thug")
                    .hp(45)
                    .strength(6)
                    .reward(10)
                    .weapon("Pipe Wrench", 4)
                    .build(),
                CombatantTemplate::builder("Street Thug")
                    .hp(45)
                    .strength(6)
                    .reward(10)
                    .weapon("Pipe Wrench", 4)
                    .build(),
            ],
        },
        Encounter {
            name: "Warehouse Perimeter".into(),
            enemies: vec![
                CombatantTemplate::builder("Combat Drone")
                    .hp(40)
                    .strength(7)
                    .reward(15)
                    .electronic()
                    .build(),
                CombatantTemplate::builder("Sentry Turret")
                    .hp(60)
                    .strength(9)
                    .reward(20)
                    .electronic()
                    .build(),
            ],
        },
        Encounter {
            name: "Server Vault".into(),
            enemies: vec![
                CombatantTemplate::builder("Riot Mech")
                    .hp(120)
                    .strength(14)
                    .reward(50)
                    .electronic()
                    .actions(&[ActionKind::Attack, ActionKind::SpecialAttack])
                    .build(),
                CombatantTemplate::builder("Medic Drone")
                    .hp(50)
                    .strength(5)
                    .reward(25)
                    .electronic()
                    .healer()
                    .build(),
                CombatantTemplate::builder("Enforcer")
                    .hp(70)
                    .strength(10)
                    .reward(30)
                    .weapon("Machine Pistol", 8)
                    .actions(&[ActionKind::Attack, ActionKind::SpecialAttack])
                    .build(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_encounter_has_enemies() {
        for encounter in builtin_encounters() {
            assert!(!encounter.enemies.is_empty(), "{} is empty", encounter.name);
        }
    }

    #[test]
    fn builtin_encounters_spawn_cleanly() {
        for encounter in builtin_encounters() {
            for template in &encounter.enemies {
                template.spawn(2).unwrap();
            }
        }
    }
}
