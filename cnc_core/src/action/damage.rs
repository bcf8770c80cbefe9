//! Damage - Flat armor mitigation with armor-ignore

use serde::{Deserialize, Serialize};

/// Numbers behind one damage resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub base_damage: i32,
    pub exceed: i32,
    /// Target armor before armor-ignore
    pub target_armor: i32,
    pub armor_ignore: i32,
    /// Armor actually subtracted
    pub armor_reduction: i32,
    pub final_damage: i32,
}

/// Calculate damage after armor
///
/// `effective_armor = max(0, target_armor - armor_ignore)` and
/// `final = max(0, base + exceed - effective_armor)`.
///
/// # Arguments
/// * `base_damage` - The weapon's base damage
/// * `exceed` - Margin of success carried over from the attack roll
/// * `target_armor` - The defender's armor value
/// * `armor_ignore` - Armor points the weapon ignores (2 for heavy weapons)
pub fn calculate_damage(base_damage: i32, exceed: i32, target_armor: i32, armor_ignore: i32) -> DamageBreakdown {
    let armor_reduction = target_armor.saturating_sub(armor_ignore).max(0);
    let final_damage = base_damage
        .saturating_add(exceed)
        .saturating_sub(armor_reduction)
        .max(0);

    DamageBreakdown {
        base_damage,
        exceed,
        target_armor,
        armor_ignore,
        armor_reduction,
        final_damage,
    }
}
