/// Combat configuration constants and tunable parameters.
///
/// Every numeric rule of the engine lives here so that balance changes are
/// data changes. The defaults match the shipped game; tests construct
/// variants (e.g. a 100% hijack rate) to exercise specific branches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Basic attack strength contribution, percent of effective strength.
    pub attack_strength_pct: PctRange,
    /// Basic attack weapon contribution, percent of weapon power.
    pub attack_weapon_pct: PctRange,
    /// Special attack strength contribution.
    pub special_strength_pct: PctRange,
    /// Special attack weapon contribution.
    pub special_weapon_pct: PctRange,
    /// Rounds the special attack is disabled after use.
    pub special_cooldown: u32,

    /// Flat base of the heal action; the random part scales with strength.
    pub heal_base: u32,
    /// Rounds the heal action is disabled after use.
    pub heal_cooldown: u32,

    /// Burning magnitude applied by the incendiary strike.
    pub incendiary_burn_magnitude: u32,
    /// Burning duration applied by the incendiary strike.
    pub incendiary_burn_rounds: u32,
    /// Rounds the incendiary strike is disabled after use.
    pub incendiary_cooldown: u32,

    /// Hijack success chance, percent.
    pub hijack_success_pct: u32,
    /// Rounds the captured unit cannot act after a successful hijack.
    pub hijack_stun_rounds: u32,
    /// Rounds the hijack action is disabled after a success.
    pub hijack_success_cooldown: u32,
    /// Rounds the hijack action is disabled after a failure.
    pub hijack_fail_cooldown: u32,

    /// Per-round scaling of harmful status ticks (burning, poison).
    pub harmful_tick_pct: PctRange,
    /// Per-round scaling of regeneration ticks.
    pub regen_tick_pct: PctRange,
}

/// Inclusive percentage band for a uniform integer draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PctRange {
    pub min: u32,
    pub max: u32,
}

impl PctRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum actions a combatant can register.
    pub const MAX_ACTIONS: usize = 8;
    /// Maximum simultaneously active status effects per combatant.
    pub const MAX_STATUS_EFFECTS: usize = 8;

    pub fn new() -> Self {
        Self {
            attack_strength_pct: PctRange::new(80, 100),
            attack_weapon_pct: PctRange::new(90, 110),
            special_strength_pct: PctRange::new(100, 120),
            special_weapon_pct: PctRange::new(100, 150),
            special_cooldown: 5,
            heal_base: 15,
            heal_cooldown: 2,
            incendiary_burn_magnitude: 25,
            incendiary_burn_rounds: 3,
            incendiary_cooldown: 10,
            hijack_success_pct: 33,
            hijack_stun_rounds: 1,
            hijack_success_cooldown: 5,
            hijack_fail_cooldown: 1,
            harmful_tick_pct: PctRange::new(80, 120),
            regen_tick_pct: PctRange::new(50, 120),
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
