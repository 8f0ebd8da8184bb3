//! Consumable item definitions and their battle effects.

use game_core::{ItemEffect, StatusEffect, StatusKind};

/// Sizes of health potions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PotionSize {
    Small,
    Large,
}

impl PotionSize {
    const fn restore(self) -> u32 {
        match self {
            Self::Small => 30,
            Self::Large => 75,
        }
    }
}

/// A consumable the hero can carry into battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemDefinition {
    /// Restores the user's health.
    HealthPotion(PotionSize),
    /// Timed strength boost.
    CombatStimulant { boost: u32, rounds: u32 },
    /// Flat damage to every current opponent.
    ShrapnelGrenade { damage: u32 },
}

impl ItemDefinition {
    pub fn name(&self) -> String {
        match self {
            Self::HealthPotion(PotionSize::Small) => "Small Health Potion".into(),
            Self::HealthPotion(PotionSize::Large) => "Large Health Potion".into(),
            Self::CombatStimulant { .. } => "Combat Stimulant".into(),
            Self::ShrapnelGrenade { .. } => "Shrapnel Grenade".into(),
        }
    }

    /// Maps this item onto the effect the battle engine applies.
    pub fn effect(&self) -> ItemEffect {
        match self {
            Self::HealthPotion(size) => ItemEffect::RestoreHealth(size.restore()),
            Self::CombatStimulant { boost, rounds } => ItemEffect::GrantStatus(
                StatusEffect::new(StatusKind::AttackBoost, *boost, *rounds),
            ),
            Self::ShrapnelGrenade { damage } => ItemEffect::DamageOpponents(*damage),
        }
    }
}

/// The item catalog vendors and starting inventories draw from.
pub fn builtin_items() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::HealthPotion(PotionSize::Small),
        ItemDefinition::HealthPotion(PotionSize::Large),
        ItemDefinition::CombatStimulant {
            boost: 8,
            rounds: 3,
        },
        ItemDefinition::ShrapnelGrenade { damage: 20 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potions_map_to_heals() {
        assert_eq!(
            ItemDefinition::HealthPotion(PotionSize::Small).effect(),
            ItemEffect::RestoreHealth(30)
        );
        assert_eq!(
            ItemDefinition::HealthPotion(PotionSize::Large).effect(),
            ItemEffect::RestoreHealth(75)
        );
    }

    #[test]
    fn stimulant_grants_a_timed_boost() {
        let effect = ItemDefinition::CombatStimulant {
            boost: 8,
            rounds: 3,
        }
        .effect();
        assert_eq!(
            effect,
            ItemEffect::GrantStatus(StatusEffect::new(StatusKind::AttackBoost, 8, 3))
        );
    }
}
