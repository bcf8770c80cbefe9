//! Prelude module for convenient imports
//!
//! ```rust
//! use cnc_core::prelude::*;
//! ```

// Keys and identifiers
pub use crate::types::{ActionKind, Attribute, CharacterId, DefenseKind, Difficulty, ItemId, Skill, StressType};

// Characters and items
pub use crate::character::{Character, RestKind};
pub use crate::item::{Armor, Consumable, Item, ItemKind, Uses, Weapon, WeaponSize, WeaponType};

// Rules
pub use crate::config::RuleTables;
pub use crate::dice::{DiceSource, RollOutcome};

// Resolution
pub use crate::action::{
    resolve_damage, roll_attack, roll_attribute, roll_skill, ActionError, ActionOutcome, DamageOptions,
    DamageOutcome,
};

// Combat
pub use crate::combat::{CombatError, Encounter, Roster};
