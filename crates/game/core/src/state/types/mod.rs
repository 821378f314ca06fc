pub mod abilities;
pub mod actor;
pub mod common;
pub mod entities;
pub mod status;

pub use abilities::{Skill, SkillCatalog, SkillId, SkillUnlock};
pub use actor::{
    Combatant, Entity, Equipment, EquipmentItem, EquipmentSlot, InventoryState, ItemId, ItemKind,
    ItemStack,
};
pub use common::ResourceMeter;
pub use entities::{Enemy, Player, Rank};
pub use status::{Effect, StatusEffects, StatusEntry};
