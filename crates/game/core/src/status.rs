//! Timed status effects applied to combatants.
//!
//! A combatant carries at most one effect per [`StatusKind`]; the kind is the
//! merge key. Re-applying a kind that is already present extends the existing
//! effect instead of stacking a duplicate, and permanent effects (innate
//! traits such as the Bioengineer's regeneration) refuse the merge entirely.
//!
//! Effects tick once at end of round: harmful kinds deal damage, regeneration
//! heals, and strength boosts are folded into
//! [`crate::Combatant::effective_strength`] without a tick of their own.

/// Types of status effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    /// Fire damage over time.
    Burning,
    /// Toxin damage over time.
    Poisoned,
    /// HP recovery over time.
    Regenerating,
    /// Flat strength bonus while active.
    #[strum(serialize = "Attack boost")]
    AttackBoost,
}

impl StatusKind {
    /// Whether a cleanse may strip this effect.
    pub const fn is_harmful(self) -> bool {
        matches!(self, Self::Burning | Self::Poisoned)
    }
}

/// How long a status effect lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusDuration {
    /// Never expires and refuses merges.
    Permanent,
    /// Ticks down once per round; removed on reaching zero.
    Rounds(u32),
}

/// A single active effect on a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Per-round damage, per-round heal, or strength delta, by kind.
    pub magnitude: u32,
    pub duration: StatusDuration,
}

impl StatusEffect {
    pub const fn new(kind: StatusKind, magnitude: u32, rounds: u32) -> Self {
        Self {
            kind,
            magnitude,
            duration: StatusDuration::Rounds(rounds),
        }
    }

    /// An effect that never expires (innate class traits).
    pub const fn permanent(kind: StatusKind, magnitude: u32) -> Self {
        Self {
            kind,
            magnitude,
            duration: StatusDuration::Permanent,
        }
    }

    pub const fn is_permanent(&self) -> bool {
        matches!(self.duration, StatusDuration::Permanent)
    }

    /// True once the duration has counted down to zero.
    pub const fn is_expired(&self) -> bool {
        matches!(self.duration, StatusDuration::Rounds(0))
    }

    /// Counts the duration down by one round. Permanent effects are untouched.
    pub fn tick(&mut self) {
        if let StatusDuration::Rounds(rounds) = &mut self.duration {
            *rounds = rounds.saturating_sub(1);
        }
    }

    /// Extends this effect by another application of the same kind.
    ///
    /// Permanent targets refuse the merge; an incoming permanent upgrades a
    /// timed effect in place.
    pub fn extend(&mut self, incoming: &StatusEffect) -> StatusMerge {
        debug_assert_eq!(self.kind, incoming.kind);
        if self.is_permanent() {
            return StatusMerge::RejectedPermanent;
        }
        match (&mut self.duration, incoming.duration) {
            (StatusDuration::Rounds(rounds), StatusDuration::Rounds(extra)) => {
                *rounds += extra;
            }
            (duration, StatusDuration::Permanent) => {
                *duration = StatusDuration::Permanent;
            }
            (StatusDuration::Permanent, StatusDuration::Rounds(_)) => {}
        }
        StatusMerge::Extended
    }
}

/// Outcome of applying a status to a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMerge {
    /// No effect of this kind was present; the new one was added.
    Applied,
    /// An effect of this kind existed and its duration was extended.
    Extended,
    /// The existing effect is permanent; nothing changed.
    RejectedPermanent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_effect_expires_after_its_duration() {
        let mut effect = StatusEffect::new(StatusKind::Burning, 25, 3);
        for _ in 0..3 {
            assert!(!effect.is_expired());
            effect.tick();
        }
        assert!(effect.is_expired());
    }

    #[test]
    fn permanent_effect_never_expires() {
        let mut effect = StatusEffect::permanent(StatusKind::Regenerating, 5);
        for _ in 0..10 {
            effect.tick();
        }
        assert!(!effect.is_expired());
        assert!(effect.is_permanent());
    }

    #[test]
    fn extend_adds_the_incoming_duration() {
        let mut effect = StatusEffect::new(StatusKind::Poisoned, 10, 2);
        let merge = effect.extend(&StatusEffect::new(StatusKind::Poisoned, 10, 3));
        assert_eq!(merge, StatusMerge::Extended);
        assert_eq!(effect.duration, StatusDuration::Rounds(5));
    }

    #[test]
    fn permanent_effect_rejects_merges() {
        let mut effect = StatusEffect::permanent(StatusKind::Regenerating, 5);
        let merge = effect.extend(&StatusEffect::new(StatusKind::Regenerating, 5, 4));
        assert_eq!(merge, StatusMerge::RejectedPermanent);
        assert_eq!(effect.duration, StatusDuration::Permanent);
    }

    #[test]
    fn incoming_permanent_upgrades_a_timed_effect() {
        let mut effect = StatusEffect::new(StatusKind::AttackBoost, 8, 2);
        let merge = effect.extend(&StatusEffect::permanent(StatusKind::AttackBoost, 8));
        assert_eq!(merge, StatusMerge::Extended);
        assert!(effect.is_permanent());
    }
}
