//! Hero classes and their starting loadouts.
//!
//! Classes differ in their action sets, starting weapons, and innate traits;
//! everything else about a hero is the shared combatant model.

use game_core::{
    ActionKind, Combatant, SetupError, StatusEffect, StatusKind, Weapon,
};

/// Playable character classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroClass {
    /// Subverts electronic enemies mid-battle.
    #[strum(serialize = "Pharmacologist Hacker")]
    PharmacologistHacker,
    /// Field medic with an engineered metabolism that keeps regenerating.
    Bioengineer,
    /// Area denial through incendiary compounds.
    #[strum(serialize = "Tactical Chemist")]
    TacticalChemist,
}

impl HeroClass {
    pub const ALL: [HeroClass; 3] = [
        HeroClass::PharmacologistHacker,
        HeroClass::Bioengineer,
        HeroClass::TacticalChemist,
    ];

    /// Magnitude of the Bioengineer's innate regeneration.
    const INNATE_REGEN: u32 = 5;

    const fn base_hp(self) -> u32 {
        match self {
            Self::PharmacologistHacker => 100,
            Self::Bioengineer => 110,
            Self::TacticalChemist => 95,
        }
    }

    const fn base_strength(self) -> u32 {
        match self {
            Self::PharmacologistHacker => 10,
            Self::Bioengineer => 9,
            Self::TacticalChemist => 12,
        }
    }

    fn class_action(self) -> ActionKind {
        match self {
            Self::PharmacologistHacker => ActionKind::Hijack,
            Self::Bioengineer => ActionKind::Heal,
            Self::TacticalChemist => ActionKind::IncendiaryStrike,
        }
    }

    fn starting_weapon(self) -> Weapon {
        match self {
            Self::PharmacologistHacker => Weapon::new("Neural Spike", 8),
            Self::Bioengineer => Weapon::new("Bone Saw", 6),
            Self::TacticalChemist => Weapon::new("Reaction Gauntlet", 10),
        }
    }

    /// Creates the hero combatant for this class.
    ///
    /// Every hero carries the basic attack, the item action, and the special
    /// attack; the class action comes last so menus group the shared
    /// capabilities first.
    pub fn spawn(self, name: impl Into<String>) -> Result<Combatant, SetupError> {
        let mut hero = Combatant::new(name, self.base_hp(), self.base_strength())
            .with_can_heal(matches!(self, Self::Bioengineer))
            .with_weapon(self.starting_weapon());

        hero.register_action(ActionKind::Attack)?;
        hero.register_action(ActionKind::UseItem)?;
        hero.register_action(ActionKind::SpecialAttack)?;
        hero.register_action(self.class_action())?;

        if matches!(self, Self::Bioengineer) {
            hero = hero.with_status(StatusEffect::permanent(
                StatusKind::Regenerating,
                Self::INNATE_REGEN,
            ));
        }

        Ok(hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::StatusDuration;

    #[test]
    fn each_class_gets_its_signature_action() {
        let hacker = HeroClass::PharmacologistHacker.spawn("Case").unwrap();
        assert!(hacker.has_action(ActionKind::Hijack));

        let chemist = HeroClass::TacticalChemist.spawn("Molly").unwrap();
        assert!(chemist.has_action(ActionKind::IncendiaryStrike));

        let engineer = HeroClass::Bioengineer.spawn("Armitage").unwrap();
        assert!(engineer.has_action(ActionKind::Heal));
    }

    #[test]
    fn every_class_can_attack_and_use_items() {
        for class in HeroClass::ALL {
            let hero = class.spawn("Test").unwrap();
            assert!(hero.has_action(ActionKind::Attack));
            assert!(hero.has_action(ActionKind::UseItem));
            assert!(hero.has_action(ActionKind::SpecialAttack));
            assert!(hero.weapon().is_some());
        }
    }

    #[test]
    fn bioengineer_regeneration_is_innate_and_permanent() {
        let engineer = HeroClass::Bioengineer.spawn("Armitage").unwrap();
        let regen = engineer.status(StatusKind::Regenerating).unwrap();
        assert_eq!(regen.duration, StatusDuration::Permanent);
        assert_eq!(regen.magnitude, 5);
    }
}
