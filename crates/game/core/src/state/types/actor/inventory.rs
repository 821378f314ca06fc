//! Satchel of consumable items.
//!
//! Items are stacked by id. A stack whose count reaches zero stays in the
//! satchel (so it keeps its position) but is no longer offered in menus.

use std::fmt;

/// Stable item identifier, e.g. `mend_extract`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What an item restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    #[strum(serialize = "HP")]
    Heal,
    #[strum(serialize = "MP")]
    Mana,
}

/// A stack of identical consumables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub value: u32,
    pub count: u32,
    pub description: String,
}

impl ItemStack {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ItemKind, value: u32) -> Self {
        let name = name.into();
        Self {
            id: ItemId::new(id),
            description: format!("Restores {value} {kind}."),
            name,
            kind,
            value,
            count: 1,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Menu label, e.g. `Mend-Extract x2 (Restores 50 HP.)`.
    pub fn label(&self) -> String {
        format!("{} x{} ({})", self.name, self.count, self.description)
    }
}

/// The player's satchel.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: Vec<ItemStack>,
}

impl InventoryState {
    pub fn new(items: Vec<ItemStack>) -> Self {
        let mut inventory = Self::empty();
        for item in items {
            inventory.add(item);
        }
        inventory
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Mend-Extract x2 and Ether-Drop x1.
    pub fn starter() -> Self {
        Self::new(vec![
            ItemStack::new("mend_extract", "Mend-Extract", ItemKind::Heal, 50).with_count(2),
            ItemStack::new("ether_drop", "Ether-Drop", ItemKind::Mana, 20),
        ])
    }

    /// Adds a stack, merging into an existing stack with the same id.
    pub fn add(&mut self, stack: ItemStack) {
        match self.items.iter_mut().find(|item| item.id == stack.id) {
            Some(existing) => existing.count = existing.count.saturating_add(stack.count),
            None => self.items.push(stack),
        }
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemStack> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Stacks with at least one item left, in satchel order.
    pub fn available(&self) -> impl Iterator<Item = &ItemStack> {
        self.items.iter().filter(|item| item.count > 0)
    }

    pub fn is_depleted(&self) -> bool {
        self.available().next().is_none()
    }

    /// Removes one item from the stack and returns a copy of the stack
    /// as it was before. `None` if the id is unknown or the stack is empty.
    pub fn take_one(&mut self, id: &ItemId) -> Option<ItemStack> {
        let stack = self
            .items
            .iter_mut()
            .find(|item| &item.id == id && item.count > 0)?;
        let before = stack.clone();
        stack.count -= 1;
        Some(before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_stacks_by_id() {
        let mut inventory = InventoryState::starter();
        inventory.add(ItemStack::new("mend_extract", "Mend-Extract", ItemKind::Heal, 50));

        let mend = inventory.get(&ItemId::new("mend_extract"));
        assert_eq!(mend.map(|s| s.count), Some(3));
        assert_eq!(inventory.items.len(), 2);
    }

    #[test]
    fn take_one_rejects_empty_stack() {
        let mut inventory = InventoryState::starter();
        let ether = ItemId::new("ether_drop");
        assert!(inventory.take_one(&ether).is_some());
        assert!(inventory.take_one(&ether).is_none());
        assert_eq!(inventory.available().count(), 1);
    }

    #[test]
    fn default_description_names_the_resource() {
        let stack = ItemStack::new("mend_extract", "Mend-Extract", ItemKind::Heal, 50);
        assert_eq!(stack.description, "Restores 50 HP.");
    }
}
