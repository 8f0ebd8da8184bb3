//! The hero's item stash and its adapter onto the engine's collaborator.

use game_core::{ItemStash, StashSelection};
use game_content::ItemDefinition;

/// Items the hero carries between battles.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    items: Vec<ItemDefinition>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: ItemDefinition) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes the first item with the given display name.
    pub fn remove_named(&mut self, name: &str) -> Option<ItemDefinition> {
        let index = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(index))
    }
}

/// Collaborator that picks an item out of the stash, or cancels.
///
/// The console client prompts the player; tests script the choice.
pub trait ItemPicker {
    fn pick(&mut self, items: &[ItemDefinition]) -> Option<usize>;
}

/// Bridges an [`Inventory`] and an [`ItemPicker`] onto the engine's
/// [`ItemStash`] contract for the duration of one battle.
pub(crate) struct StashAdapter<'a> {
    pub inventory: &'a mut Inventory,
    pub picker: &'a mut dyn ItemPicker,
}

impl ItemStash for StashAdapter<'_> {
    fn select(&mut self) -> Option<StashSelection> {
        if self.inventory.is_empty() {
            return None;
        }
        let index = self.picker.pick(self.inventory.items())?;
        let item = self.inventory.items().get(index)?;
        Some(StashSelection {
            name: item.name(),
            effect: item.effect(),
        })
    }

    fn consume(&mut self, selection: &StashSelection) {
        self.inventory.remove_named(&selection.name);
    }
}
