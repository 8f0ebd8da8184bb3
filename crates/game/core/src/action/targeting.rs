//! Targeting rules: how actions build their candidate sets.
//!
//! The rules here only name the filter; [`crate::battle::Battle`] resolves
//! them against live rosters. Defeated combatants are never candidates.

/// How an action selects targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetingRule {
    /// One living opponent of the actor.
    Opponents,

    /// One living ally of the actor (the actor included) missing health.
    WoundedAllies,

    /// One living opponent flagged electronic.
    ElectronicOpponents,

    /// Every living opponent at once; no explicit selection.
    AllOpponents,

    /// No combatant target; the inventory collaborator is prompted instead.
    Stash,
}

impl TargetingRule {
    /// True if the player must pick a single target from candidates.
    pub const fn requires_selection(self) -> bool {
        matches!(
            self,
            Self::Opponents | Self::WoundedAllies | Self::ElectronicOpponents
        )
    }
}
