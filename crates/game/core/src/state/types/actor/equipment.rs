//! Equipment slots for combatants.
//!
//! Every combatant carries an equipment map. Enemies simply leave it empty,
//! so derived-stat computation queries it uniformly.

use std::collections::BTreeMap;

use crate::stats::StatKind;

/// Slot an item is worn in. Each slot feeds exactly one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Boots,
}

impl EquipmentSlot {
    /// Stat this slot's bonus is added to.
    pub const fn stat(self) -> StatKind {
        match self {
            Self::Weapon => StatKind::Attack,
            Self::Armor => StatKind::Defense,
            Self::Boots => StatKind::Speed,
        }
    }
}

/// A worn item and its flat bonus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentItem {
    pub name: String,
    pub bonus: i32,
}

impl EquipmentItem {
    pub fn new(name: impl Into<String>, bonus: i32) -> Self {
        Self {
            name: name.into(),
            bonus,
        }
    }
}

/// Equipped items by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, EquipmentItem>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips an item, returning the previously worn one if any.
    pub fn equip(&mut self, slot: EquipmentSlot, item: EquipmentItem) -> Option<EquipmentItem> {
        self.slots.insert(slot, item)
    }

    /// Removes the item in `slot`, returning it if one was worn.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<EquipmentItem> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&EquipmentItem> {
        self.slots.get(&slot)
    }

    /// Worn items in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &EquipmentItem)> {
        self.slots.iter().map(|(slot, item)| (*slot, item))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_replaces_previous_item() {
        let mut equipment = Equipment::empty();
        assert!(
            equipment
                .equip(EquipmentSlot::Weapon, EquipmentItem::new("Rusted Blade", 2))
                .is_none()
        );
        let old = equipment.equip(EquipmentSlot::Weapon, EquipmentItem::new("Iron Blade", 7));
        assert_eq!(old.map(|item| item.bonus), Some(2));
        assert_eq!(equipment.iter().count(), 1);
    }

    #[test]
    fn unequip_empties_slot() {
        let mut equipment = Equipment::empty();
        equipment.equip(EquipmentSlot::Boots, EquipmentItem::new("Swift Boots", 3));
        assert!(equipment.unequip(EquipmentSlot::Boots).is_some());
        assert!(equipment.is_empty());
    }
}
