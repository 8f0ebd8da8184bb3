//! Action domain: the capabilities a combatant can invoke on its turn.
//!
//! Actions are a tagged variant ([`ActionKind`]) rather than a class
//! hierarchy: each kind carries a static [`ActionProfile`] describing how it
//! selects targets, and the execution logic lives in
//! [`crate::battle::Battle::execute_action`]. Per-combatant cooldown state is
//! tracked in [`ActionState`].

mod targeting;

pub use targeting::TargetingRule;

/// Every action the engine can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Attack,
    #[strum(serialize = "Special Attack")]
    SpecialAttack,
    Heal,
    #[strum(serialize = "Incendiary Strike")]
    IncendiaryStrike,
    Hijack,
    #[strum(serialize = "Use Item")]
    UseItem,
}

impl ActionKind {
    /// Static behavior specification for this kind.
    pub const fn profile(self) -> ActionProfile {
        match self {
            Self::Attack => ActionProfile {
                targeting: TargetingRule::Opponents,
            },
            Self::SpecialAttack => ActionProfile {
                targeting: TargetingRule::Opponents,
            },
            Self::Heal => ActionProfile {
                targeting: TargetingRule::WoundedAllies,
            },
            Self::IncendiaryStrike => ActionProfile {
                targeting: TargetingRule::AllOpponents,
            },
            Self::Hijack => ActionProfile {
                targeting: TargetingRule::ElectronicOpponents,
            },
            Self::UseItem => ActionProfile {
                targeting: TargetingRule::Stash,
            },
        }
    }
}

/// Static specification for an action kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionProfile {
    /// How this action selects targets.
    pub targeting: TargetingRule,
}

/// Per-combatant action slot with its cooldown counter.
///
/// An action is never invoked while `cooldown_remaining > 0`; invoking it may
/// reset the counter as a side effect (self-cooldown).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionState {
    pub kind: ActionKind,
    pub cooldown_remaining: u32,
}

impl ActionState {
    pub const fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            cooldown_remaining: 0,
        }
    }

    pub const fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0
    }

    /// Counts the cooldown down by one round.
    pub fn tick_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_match_menu_labels() {
        assert_eq!(ActionKind::Attack.to_string(), "Attack");
        assert_eq!(ActionKind::SpecialAttack.to_string(), "Special Attack");
        assert_eq!(ActionKind::IncendiaryStrike.to_string(), "Incendiary Strike");
        assert_eq!(ActionKind::UseItem.to_string(), "Use Item");
    }

    #[test]
    fn only_targeted_rules_require_selection() {
        assert!(ActionKind::Attack.profile().targeting.requires_selection());
        assert!(ActionKind::Heal.profile().targeting.requires_selection());
        assert!(ActionKind::Hijack.profile().targeting.requires_selection());
        assert!(!ActionKind::IncendiaryStrike
            .profile()
            .targeting
            .requires_selection());
        assert!(!ActionKind::UseItem.profile().targeting.requires_selection());
    }
}
