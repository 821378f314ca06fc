//! Combatant state.
//!
//! Entities, their effects, equipment and satchel, plus the two variants
//! (player, enemy). The combat session and progression mutate these in place;
//! the runtime persists the player between encounters.
pub mod types;

pub use types::{
    Combatant, Effect, Enemy, Entity, Equipment, EquipmentItem, EquipmentSlot, InventoryState,
    ItemId, ItemKind, ItemStack, Player, Rank, ResourceMeter, Skill, SkillCatalog, SkillId,
    SkillUnlock, StatusEffects, StatusEntry,
};
