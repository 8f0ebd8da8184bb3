//! Combatant template definitions.
//!
//! Templates describe all combatant fields in a data-driven way and are
//! spawned into live [`Combatant`] instances at encounter setup. Whether a
//! unit is electronic (and therefore hijackable) is an explicit flag here,
//! set by the content author, never inferred from the name.

use game_core::{ActionKind, Combatant, SetupError, Weapon};

/// Data-driven description of an enemy or ally.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantTemplate {
    pub name: String,
    pub base_hp: u32,
    pub base_strength: u32,
    /// Gold credited when this unit is part of a defeated roster.
    pub base_reward: u32,
    /// Hijackable by the hack action.
    pub electronic: bool,
    /// Grants the heal action at spawn.
    pub can_heal: bool,
    pub actions: Vec<ActionKind>,
    pub weapon: Option<WeaponSpec>,
}

/// Weapon granted by a template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    pub name: String,
    pub power: u32,
}

impl CombatantTemplate {
    pub fn builder(name: impl Into<String>) -> CombatantTemplateBuilder {
        CombatantTemplateBuilder {
            name: name.into(),
            base_hp: 30,
            base_strength: 5,
            base_reward: 0,
            electronic: false,
            can_heal: false,
            actions: vec![ActionKind::Attack],
            weapon: None,
        }
    }

    /// Scales a base stat by the difficulty level.
    fn scale(base: u32, difficulty: u32) -> u32 {
        base + difficulty * 2
    }

    /// Spawns a live combatant at the given difficulty level.
    pub fn spawn(&self, difficulty: u32) -> Result<Combatant, SetupError> {
        let mut combatant = Combatant::new(
            self.name.clone(),
            Self::scale(self.base_hp, difficulty),
            Self::scale(self.base_strength, difficulty),
        )
        .with_electronic(self.electronic)
        .with_can_heal(self.can_heal)
        .with_reward(if self.base_reward > 0 {
            Self::scale(self.base_reward, difficulty)
        } else {
            0
        });

        if let Some(weapon) = &self.weapon {
            combatant.equip(Weapon::new(weapon.name.clone(), weapon.power));
        }

        for &kind in &self.actions {
            combatant.register_action(kind)?;
        }
        if self.can_heal && !combatant.has_action(ActionKind::Heal) {
            combatant.register_action(ActionKind::Heal)?;
        }

        Ok(combatant)
    }
}

/// Builder for constructing combatant templates.
#[derive(Clone, Debug)]
pub struct CombatantTemplateBuilder {
    name: String,
    base_hp: u32,
    base_strength: u32,
    base_reward: u32,
    electronic: bool,
    can_heal: bool,
    actions: Vec<ActionKind>,
    weapon: Option<WeaponSpec>,
}

impl CombatantTemplateBuilder {
    pub fn hp(mut self, base_hp: u32) -> Self {
        self.base_hp = base_hp;
        self
    }

    pub fn strength(mut self, base_strength: u32) -> Self {
        self.base_strength = base_strength;
        self
    }

    pub fn reward(mut self, base_reward: u32) -> Self {
        self.base_reward = base_reward;
        self
    }

    pub fn electronic(mut self) -> Self {
        self.electronic = true;
        self
    }

    pub fn healer(mut self) -> Self {
        self.can_heal = true;
        self
    }

    pub fn actions(mut self, actions: &[ActionKind]) -> Self {
        self.actions = actions.to_vec();
        self
    }

    pub fn weapon(mut self, name: impl Into<String>, power: u32) -> Self {
        self.weapon = Some(WeaponSpec {
            name: name.into(),
            power,
        });
        self
    }

    pub fn build(self) -> CombatantTemplate {
        CombatantTemplate {
            name: self.name,
            base_hp: self.base_hp,
            base_strength: self.base_strength,
            base_reward: self.base_reward,
            electronic: self.electronic,
            can_heal: self.can_heal,
            actions: self.actions,
            weapon: self.weapon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_scales_hp_strength_and_reward() {
        let template = CombatantTemplate::builder("Combat Drone")
            .hp(40)
            .strength(6)
            .reward(10)
            .electronic()
            .build();

        let spawned = template.spawn(3).unwrap();
        assert_eq!(spawned.hp.maximum, 46);
        assert_eq!(spawned.effective_strength(), 12);
        assert_eq!(spawned.reward(), 16);
        assert!(spawned.is_electronic());
    }

    #[test]
    fn healer_templates_gain_the_heal_action() {
        let template = CombatantTemplate::builder("Medic Drone").healer().build();
        let spawned = template.spawn(0).unwrap();
        assert!(spawned.has_action(ActionKind::Heal));
        // Registered after the template's own actions.
        assert_eq!(
            spawned.available_actions(),
            vec![ActionKind::Attack, ActionKind::Heal]
        );
    }

    #[test]
    fn zero_reward_stays_zero_at_any_difficulty() {
        let template = CombatantTemplate::builder("Street Cat").build();
        assert_eq!(template.spawn(5).unwrap().reward(), 0);
    }
}
