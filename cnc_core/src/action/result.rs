//! ActionOutcome / DamageOutcome - Payloads handed to the host for rendering

use super::damage::DamageBreakdown;
use crate::dice::RollOutcome;
use crate::types::{Attribute, CharacterId, ItemId, Skill};
use serde::{Deserialize, Serialize};

/// What a roll was made for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CheckKind {
    Attribute { attribute: Attribute },
    Skill { skill: Skill },
    Attack {
        weapon: ItemId,
        /// `None` when the weapon names an unrecognized skill
        skill: Option<Skill>,
    },
    Initiative,
}

/// Result of one attribute, skill, attack or initiative roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    // === Actor ===
    pub actor_id: CharacterId,
    pub actor_name: String,

    // === Context ===
    pub check: CheckKind,
    /// Short description, e.g. `agility` or `Attack - Hatchet`
    pub label: String,

    // === Roll ===
    pub roll: RollOutcome,

    // === Side signals ===
    /// Dice showing 1 on a fumbled attack; the weapon risks breaking
    pub breakage_risk: u32,
    /// Dice showing 10 on an attack; the target's armor wears
    pub armor_wear: u32,
}

impl ActionOutcome {
    pub fn total(&self) -> i32 {
        self.roll.total
    }

    pub fn is_critical(&self) -> bool {
        self.roll.is_critical
    }

    pub fn is_fumble(&self) -> bool {
        self.roll.is_fumble
    }

    /// Fields for the generic roll message
    pub fn message(&self) -> RollMessage {
        RollMessage {
            actor_name: self.actor_name.clone(),
            label: self.label.clone(),
            formula: self.roll.formula(),
            total: self.roll.total,
            dice: self.roll.dice.to_vec(),
            is_critical: self.roll.is_critical,
            is_fumble: self.roll.is_fumble,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "{} rolls {} ({}): {}",
            self.actor_name,
            self.label,
            self.roll.formula(),
            self.roll.total
        )];

        if self.roll.is_critical {
            parts.push("CRITICAL".to_string());
        }
        if self.roll.is_fumble {
            parts.push("FUMBLE".to_string());
        }
        if self.breakage_risk > 0 {
            parts.push(format!("{} ones, weapon may break", self.breakage_risk));
        }
        if self.armor_wear > 0 {
            parts.push(format!("{} tens, armor wears", self.armor_wear));
        }

        parts.join(", ")
    }
}

/// Result of a weapon damage resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    pub actor_id: CharacterId,
    pub actor_name: String,
    pub weapon_id: ItemId,
    pub weapon_name: String,
    pub breakdown: DamageBreakdown,
}

impl DamageOutcome {
    pub fn final_damage(&self) -> i32 {
        self.breakdown.final_damage
    }

    /// Fields for the damage message
    pub fn message(&self) -> DamageMessage {
        DamageMessage {
            actor_name: self.actor_name.clone(),
            weapon_name: self.weapon_name.clone(),
            base_damage: self.breakdown.base_damage,
            exceed: self.breakdown.exceed,
            armor_reduction: self.breakdown.armor_reduction,
            final_damage: self.breakdown.final_damage,
        }
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let b = &self.breakdown;
        format!(
            "{} hits with {}: {} base + {} exceed - {} armor = {} damage",
            self.actor_name, self.weapon_name, b.base_damage, b.exceed, b.armor_reduction, b.final_damage
        )
    }
}

/// Generic roll message shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollMessage {
    pub actor_name: String,
    pub label: String,
    pub formula: String,
    pub total: i32,
    pub dice: Vec<u8>,
    pub is_critical: bool,
    pub is_fumble: bool,
}

/// Damage message shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageMessage {
    pub actor_name: String,
    pub weapon_name: String,
    pub base_damage: i32,
    pub exceed: i32,
    pub armor_reduction: i32,
    pub final_damage: i32,
}
