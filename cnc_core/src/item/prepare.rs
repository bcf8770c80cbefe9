//! Per-kind derived item data

use super::{Item, ItemKind};
use crate::config::RuleTables;

/// Recompute the item's own derived fields from the rule tables
///
/// Weapon `damage.current` depends on the wielder and is set by the
/// character recompute, not here.
pub fn prepare_item(item: &mut Item, tables: &RuleTables) {
    match &mut item.kind {
        ItemKind::Weapon(weapon) => {
            let size = tables.weapon_size(weapon.weapon_size);
            weapon.hit_bonus = size.hit_bonus;
            weapon.armor_ignore = size.armor_ignore;
        }
        ItemKind::Armor(armor) => {
            armor.damage_reduction.current = armor.damage_reduction.base;
        }
        ItemKind::Flaw(flaw) => {
            flaw.xp_value = tables.flaw_xp(flaw.severity);
        }
        ItemKind::Perk(perk) => {
            perk.xp_cost = tables.perk_xp(perk.level);
        }
        ItemKind::Shield(_)
        | ItemKind::Tool(_)
        | ItemKind::Consumable(_)
        | ItemKind::Equipment(_)
        | ItemKind::Heritage(_)
        | ItemKind::Path(_) => {}
    }
}
