//! Derived Stat Engine - Recompute dependent character fields from base state
//!
//! Steps must run in dependency order: attribute totals feed skill bonuses,
//! and skill bonuses feed defenses, stress maxima and weapon damage. Each step
//! is exposed on its own so hosts can reason about partial recomputes, but
//! [`recompute`] is the entry point that keeps everything consistent.

use crate::character::{Character, Loadout};
use crate::config::RuleTables;
use crate::item::prepare_item;
use crate::types::{Attribute, Skill};
use tracing::debug;

/// Formula constants
pub mod constants {
    /// Passive defense base
    pub const PASSIVE_DEFENSE_BASE: i32 = 10;

    /// Active defense base (passive + 5)
    pub const ACTIVE_DEFENSE_BASE: i32 = 15;

    /// Base of both stress track maxima
    pub const STRESS_BASE: i32 = 3;

    /// Carry capacity added on top of strength
    pub const CARRY_BASE: i32 = 6;
}

use constants::*;

/// Recompute every derived field on the character and its items
///
/// Never fails: missing skill entries and unrecognized weapon skills
/// contribute 0. Calling it twice without a base change yields identical
/// derived fields.
pub fn recompute(character: &mut Character, tables: &RuleTables) {
    compute_attributes(character);
    compute_skills(character);
    compute_defense(character);
    compute_initiative(character);
    compute_loadout(character);
    compute_stress(character);
    prepare_items(character, tables);
    compute_weapon_damage(character);

    debug!(
        character = %character.id,
        initiative = character.initiative,
        physical_stress_max = character.stress.physical.max,
        mental_stress_max = character.stress.mental.max,
        "derived stats recomputed"
    );
}

/// `total = base + bonus` for all four attributes
pub fn compute_attributes(character: &mut Character) {
    for attribute in Attribute::all() {
        let score = character.attributes.get_mut(*attribute);
        score.total = score.base.saturating_add(score.bonus);
    }
}

/// `bonus = governing attribute total + rank` for every skill entry present
pub fn compute_skills(character: &mut Character) {
    let attributes = character.attributes;
    for (skill, score) in character.skills.iter_mut() {
        score.bonus = attributes.get(skill.attribute()).total.saturating_add(score.rank);
    }
}

/// Passive/active dodge and mental defense
pub fn compute_defense(character: &mut Character) {
    let dodge = character
        .attribute_total(Attribute::Agility)
        .saturating_add(character.skill_bonus(Skill::Vigilance));
    let mental = character
        .attribute_total(Attribute::Will)
        .saturating_add(character.skill_bonus(Skill::Insight));

    let defense = &mut character.defense;
    defense.passive_dodge = PASSIVE_DEFENSE_BASE.saturating_add(dodge);
    defense.active_dodge.value = ACTIVE_DEFENSE_BASE.saturating_add(dodge);
    defense.passive_mental = PASSIVE_DEFENSE_BASE.saturating_add(mental);
    defense.active_mental.value = ACTIVE_DEFENSE_BASE.saturating_add(mental);
}

/// Initiative modifier: mind + agility
pub fn compute_initiative(character: &mut Character) {
    character.initiative =
        character.attribute_total(Attribute::Mind).saturating_add(character.attribute_total(Attribute::Agility));
}

/// Capacity, used weight and overload; skipped when the character has no loadout
pub fn compute_loadout(character: &mut Character) {
    if character.loadout.is_none() {
        return;
    }

    let capacity = character.attribute_total(Attribute::Strength).saturating_add(CARRY_BASE);
    let used = character.items.iter().fold(0u32, |sum, i| sum.saturating_add(i.weight));
    let overload = i64::from(used) - i64::from(capacity);

    character.loadout = Some(Loadout {
        capacity,
        used,
        overload_level: u32::try_from(overload.max(0)).unwrap_or(u32::MAX),
        overloaded: overload > 0,
    });
}

/// Stress maxima; current values are clamped to the new maxima
pub fn compute_stress(character: &mut Character) {
    let will = character.attribute_total(Attribute::Will);
    let resist = character.skill_rank(Skill::Resist);

    let stress = &mut character.stress;
    stress.physical.max = non_negative(STRESS_BASE.saturating_add(will).saturating_add(resist));
    stress.mental.max = non_negative(STRESS_BASE.saturating_add(will));
    stress.physical.current = stress.physical.current.min(stress.physical.max);
    stress.mental.current = stress.mental.current.min(stress.mental.max);
}

/// Item-local derived data (size modifiers, armor reduction, XP)
pub fn prepare_items(character: &mut Character, tables: &RuleTables) {
    for item in &mut character.items {
        prepare_item(item, tables);
    }
}

/// `current = base + attack skill bonus` for every owned weapon
pub fn compute_weapon_damage(character: &mut Character) {
    let skills = &character.skills;
    for item in &mut character.items {
        if let Some(weapon) = item.as_weapon_mut() {
            let bonus = weapon
                .attack_skill()
                .and_then(|skill| skills.get(&skill))
                .map(|score| score.bonus)
                .unwrap_or(0);
            weapon.damage.current = weapon.damage.base.saturating_add(bonus);
        }
    }
}

fn non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
