//! Collaborator seams between the engine and its host.
//!
//! The sequencer suspends in exactly two places: asking the player for an
//! action/target pair and asking the inventory for an item. Both are plain
//! blocking traits; implementations own their re-prompt loops and always
//! return in-range selections. Battle progress flows out through
//! [`EventSink`] so frontends can render incrementally.

use crate::action::ActionKind;
use crate::battle::{BattleEvent, CombatantId};
use crate::status::StatusEffect;

/// Read-only snapshot of one combatant, for menus and status panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantView {
    pub id: CombatantId,
    pub name: String,
    pub hp_current: u32,
    pub hp_max: u32,
    pub electronic: bool,
}

/// Read-only snapshot of the whole battle at the start of a player turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleView {
    pub round: u32,
    pub player: CombatantView,
    pub allies: Vec<CombatantView>,
    pub opponents: Vec<CombatantView>,
}

/// Input collaborator for the human-controlled side.
///
/// Both methods must return an index within the given slice; implementations
/// re-prompt on invalid entries rather than failing the battle.
pub trait ActionPrompt {
    /// Pick an action from the available (non-disabled) ones.
    fn choose_action(&mut self, view: &BattleView, actions: &[ActionKind]) -> usize;

    /// Pick a target among the valid candidates. Only called with two or
    /// more candidates; a single candidate is auto-selected.
    fn choose_target(&mut self, candidates: &[CombatantView]) -> usize;
}

/// Effect of a consumable item, as the battle engine sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    /// Heal the user.
    RestoreHealth(u32),
    /// Apply a status effect to the user.
    GrantStatus(StatusEffect),
    /// Deal flat damage to every current opponent of the user.
    DamageOpponents(u32),
}

/// An item chosen from the inventory collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StashSelection {
    pub name: String,
    pub effect: ItemEffect,
}

/// Inventory collaborator consumed by the item-use action.
pub trait ItemStash {
    /// Prompt for an item. `None` means the stash is empty or the player
    /// cancelled; the turn is not consumed.
    fn select(&mut self) -> Option<StashSelection>;

    /// Remove the item after a successful use.
    fn consume(&mut self, selection: &StashSelection);
}

/// Stash that never offers anything. Used for AI turns and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyStash;

impl ItemStash for EmptyStash {
    fn select(&mut self) -> Option<StashSelection> {
        None
    }

    fn consume(&mut self, _selection: &StashSelection) {}
}

/// Receiver for structured battle progress.
pub trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

/// Collecting sink; the natural choice for tests.
impl EventSink for Vec<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        self.push(event);
    }
}
