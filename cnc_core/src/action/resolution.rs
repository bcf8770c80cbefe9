//! Action resolution - Turn a character's derived stats into rolls and damage
//!
//! All functions read the character as last recomputed and never mutate it.
//! Publishing the outcome is left to the caller.

use super::damage::calculate_damage;
use super::result::{ActionOutcome, CheckKind, DamageOutcome};
use super::ActionError;
use crate::character::Character;
use crate::config::RuleTables;
use crate::dice::{evaluate_with, DiceSource, RollOutcome};
use crate::item::{Item, Weapon};
use crate::types::{Attribute, ItemId, Skill};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Caller-supplied inputs to a damage resolution; both default to 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOptions {
    /// Margin of success from the preceding attack
    pub exceed: Option<i32>,
    /// Target's armor value
    pub target_armor: Option<i32>,
}

/// Roll 2d10 + attribute total
pub fn roll_attribute(
    character: &Character,
    key: &str,
    dice: &mut impl DiceSource,
) -> Result<ActionOutcome, ActionError> {
    let attribute: Attribute = key
        .parse()
        .map_err(|_| ActionError::UnknownAttribute(key.to_string()))?;

    let roll = evaluate_with(character.attribute_total(attribute), dice);
    Ok(outcome(
        character,
        CheckKind::Attribute { attribute },
        attribute.to_string(),
        roll,
    ))
}

/// Roll 2d10 + skill bonus
pub fn roll_skill(
    character: &Character,
    key: &str,
    dice: &mut impl DiceSource,
) -> Result<ActionOutcome, ActionError> {
    let skill: Skill = key
        .parse()
        .map_err(|_| ActionError::UnknownSkill(key.to_string()))?;

    let roll = evaluate_with(character.skill_bonus(skill), dice);
    Ok(outcome(character, CheckKind::Skill { skill }, skill.to_string(), roll))
}

/// Roll 2d10 + initiative modifier
pub fn roll_initiative(character: &Character, dice: &mut impl DiceSource) -> ActionOutcome {
    let roll = evaluate_with(character.initiative, dice);
    outcome(character, CheckKind::Initiative, "initiative".to_string(), roll)
}

/// Roll an attack: 2d10 + attack skill bonus + weapon size hit bonus
///
/// A fumble reports how many dice showed 1 as breakage risk.
pub fn roll_attack(
    character: &Character,
    weapon_id: &ItemId,
    tables: &RuleTables,
    dice: &mut impl DiceSource,
) -> Result<ActionOutcome, ActionError> {
    let (item, weapon) = find_weapon(character, weapon_id)?;

    let skill = weapon.attack_skill();
    if skill.is_none() {
        warn!(
            character = %character.id,
            weapon = %item.id,
            attack_skill = %weapon.attack_skill,
            "unrecognized attack skill, rolling without skill bonus"
        );
    }
    let skill_bonus = skill.map(|s| character.skill_bonus(s)).unwrap_or(0);
    let hit_bonus = tables.weapon_size(weapon.weapon_size).hit_bonus;

    let roll = evaluate_with(skill_bonus.saturating_add(hit_bonus), dice);
    let mut result = outcome(
        character,
        CheckKind::Attack {
            weapon: item.id.clone(),
            skill,
        },
        format!("Attack - {}", item.name),
        roll,
    );
    if roll.is_fumble {
        result.breakage_risk = roll.count_ones();
    }
    result.armor_wear = roll.count_tens();

    Ok(result)
}

/// Resolve weapon damage against a target's armor (no dice involved)
pub fn resolve_damage(
    character: &Character,
    weapon_id: &ItemId,
    options: DamageOptions,
    tables: &RuleTables,
) -> Result<DamageOutcome, ActionError> {
    let (item, weapon) = find_weapon(character, weapon_id)?;

    let armor_ignore = tables.weapon_size(weapon.weapon_size).armor_ignore;
    let breakdown = calculate_damage(
        weapon.damage.base,
        options.exceed.unwrap_or(0),
        options.target_armor.unwrap_or(0),
        armor_ignore,
    );

    debug!(
        character = %character.id,
        weapon = %item.id,
        final_damage = breakdown.final_damage,
        "damage resolved"
    );

    Ok(DamageOutcome {
        actor_id: character.id.clone(),
        actor_name: character.name.clone(),
        weapon_id: item.id.clone(),
        weapon_name: item.name.clone(),
        breakdown,
    })
}

fn find_weapon<'a>(character: &'a Character, id: &ItemId) -> Result<(&'a Item, &'a Weapon), ActionError> {
    let item = character
        .item(id)
        .ok_or_else(|| ActionError::ItemNotFound(id.clone()))?;
    let weapon = item.as_weapon().ok_or_else(|| ActionError::NotAWeapon {
        item: id.clone(),
        kind: item.kind.name(),
    })?;
    Ok((item, weapon))
}

fn outcome(character: &Character, check: CheckKind, label: String, roll: RollOutcome) -> ActionOutcome {
    debug!(
        character = %character.id,
        %label,
        total = roll.total,
        critical = roll.is_critical,
        fumble = roll.is_fumble,
        "roll resolved"
    );

    ActionOutcome {
        actor_id: character.id.clone(),
        actor_name: character.name.clone(),
        check,
        label,
        roll,
        breakage_risk: 0,
        armor_wear: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::item::{ItemKind, WeaponSize};

    fn fighter() -> Character {
        let tables = RuleTables::default();
        let mut character = Character::new("kat", "Kat")
            .with_attribute(Attribute::Strength, 3)
            .with_attribute(Attribute::Agility, 2)
            .with_attribute(Attribute::Mind, 1)
            .with_skill(Skill::Melee, 2)
            .with_skill(Skill::Stealth, 1)
            .with_item(Item::new(
                "knife",
                "Knife",
                ItemKind::Weapon(Weapon::new(2, Skill::Melee, WeaponSize::Light)),
            ))
            .with_item(Item::new(
                "maul",
                "Maul",
                ItemKind::Weapon(Weapon::new(5, Skill::Melee, WeaponSize::Heavy)),
            ))
            .with_item(Item::new(
                "sword",
                "Sword",
                ItemKind::Weapon(Weapon::new(5, Skill::Melee, WeaponSize::Normal)),
            ))
            .with_item(Item::new("rope", "Rope", ItemKind::Tool(Default::default())));
        character.recompute(&tables);
        character
    }

    #[test]
    fn test_attribute_check_uses_total() {
        let character = fighter();
        let result = roll_attribute(&character, "strength", &mut ScriptedDice::new([4, 5])).unwrap();

        assert_eq!(result.total(), 12);
        assert_eq!(result.check, CheckKind::Attribute { attribute: Attribute::Strength });
        assert_eq!(result.actor_name, "Kat");
        assert_eq!(result.breakage_risk, 0);
    }

    #[test]
    fn test_skill_check_uses_bonus() {
        let character = fighter();
        let result = roll_skill(&character, "stealth", &mut ScriptedDice::new([2, 2])).unwrap();
        // agility 2 + rank 1
        assert_eq!(result.total(), 7);
        assert_eq!(result.roll.modifier, 3);
    }

    #[test]
    fn test_unknown_keys_are_reported() {
        let character = fighter();
        let mut dice = ScriptedDice::new([5, 5]);

        assert_eq!(
            roll_attribute(&character, "charisma", &mut dice),
            Err(ActionError::UnknownAttribute("charisma".to_string()))
        );
        assert_eq!(
            roll_skill(&character, "hacking", &mut dice),
            Err(ActionError::UnknownSkill("hacking".to_string()))
        );
    }

    #[test]
    fn test_light_weapon_attack_bonus() {
        let character = fighter();
        let knife = roll_attack(&character, &ItemId::from("knife"), &RuleTables::default(), &mut ScriptedDice::new([3, 3])).unwrap();
        let sword = roll_attack(&character, &ItemId::from("sword"), &RuleTables::default(), &mut ScriptedDice::new([3, 3])).unwrap();

        // melee bonus 5, light +2
        assert_eq!(knife.total(), 6 + 5 + 2);
        assert_eq!(sword.total(), 6 + 5);
        assert_eq!(knife.label, "Attack - Knife");
    }

    #[test]
    fn test_fumbled_attack_reports_breakage() {
        let character = fighter();
        let result = roll_attack(&character, &ItemId::from("maul"), &RuleTables::default(), &mut ScriptedDice::new([1, 1])).unwrap();

        assert!(result.is_fumble());
        assert_eq!(result.breakage_risk, 2);
    }

    #[test]
    fn test_single_one_without_fumble_is_not_breakage() {
        let character = fighter();
        let result = roll_attack(&character, &ItemId::from("maul"), &RuleTables::default(), &mut ScriptedDice::new([1, 10])).unwrap();

        assert_eq!(result.breakage_risk, 0);
        assert_eq!(result.armor_wear, 1);
    }

    #[test]
    fn test_attack_with_non_weapon_fails() {
        let character = fighter();
        let err = roll_attack(&character, &ItemId::from("rope"), &RuleTables::default(), &mut ScriptedDice::new([5, 5])).unwrap_err();
        assert_eq!(
            err,
            ActionError::NotAWeapon {
                item: ItemId::from("rope"),
                kind: "tool"
            }
        );
    }

    #[test]
    fn test_unrecognized_attack_skill_rolls_flat() {
        let mut character = fighter();
        if let Some(weapon) = character.item_mut(&ItemId::from("sword")).and_then(|i| i.as_weapon_mut()) {
            weapon.attack_skill = "swordplay".to_string();
        }
        let result = roll_attack(&character, &ItemId::from("sword"), &RuleTables::default(), &mut ScriptedDice::new([4, 4])).unwrap();

        assert_eq!(result.total(), 8);
        assert_eq!(
            result.check,
            CheckKind::Attack {
                weapon: ItemId::from("sword"),
                skill: None
            }
        );
    }

    #[test]
    fn test_damage_normal_and_heavy() {
        let character = fighter();
        let tables = RuleTables::default();
        let options = DamageOptions {
            exceed: Some(2),
            target_armor: Some(4),
        };

        let sword = resolve_damage(&character, &ItemId::from("sword"), options, &tables).unwrap();
        let maul = resolve_damage(&character, &ItemId::from("maul"), options, &tables).unwrap();

        assert_eq!(sword.final_damage(), 3);
        assert_eq!(maul.breakdown.armor_reduction, 2);
        assert_eq!(maul.final_damage(), 5);
    }

    #[test]
    fn test_damage_options_default_to_zero() {
        let character = fighter();
        let result = resolve_damage(&character, &ItemId::from("knife"), DamageOptions::default(), &RuleTables::default()).unwrap();
        assert_eq!(result.final_damage(), 2);
        assert_eq!(result.breakdown.exceed, 0);
    }

    #[test]
    fn test_damage_unknown_weapon() {
        let character = fighter();
        let err = resolve_damage(&character, &ItemId::from("bow"), DamageOptions::default(), &RuleTables::default()).unwrap_err();
        assert_eq!(err, ActionError::ItemNotFound(ItemId::from("bow")));
    }

    #[test]
    fn test_initiative_roll() {
        let character = fighter();
        let result = roll_initiative(&character, &mut ScriptedDice::new([6, 2]));
        // mind 1 + agility 2
        assert_eq!(result.total(), 11);
        assert_eq!(result.check, CheckKind::Initiative);
    }
}
