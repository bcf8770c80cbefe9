//! Character - Base and derived state of one actor
//!
//! Base fields (attribute base/bonus values, skill ranks, items, current
//! resource values) are written by the host. Derived fields are owned by
//! [`crate::derived::recompute`] and must not be edited directly.

mod resources;
mod sheet;

pub use resources::{RestKind, RestOutcome, StressChange};
pub use sheet::{
    AttributeScore, Attributes, DefenseProfile, DefenseValue, Loadout, ResourcePool, SkillScore,
    StressTrack, StressTracks,
};

use crate::config::RuleTables;
use crate::item::Item;
use crate::types::{Attribute, CharacterId, ItemId, Skill};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of actor; NPCs share the rules of player characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    #[default]
    Character,
    Npc,
}

/// Complete rules state for one actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    // === Identity ===
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub kind: ActorKind,

    // === Base + derived scores ===
    #[serde(default)]
    pub attributes: Attributes,
    /// Skill entries by key; entries absent from host data contribute nothing
    #[serde(default)]
    pub skills: BTreeMap<Skill, SkillScore>,

    // === Derived ===
    #[serde(default)]
    pub defense: DefenseProfile,
    /// Initiative modifier (mind + agility)
    #[serde(default)]
    pub initiative: i32,
    /// Carry capacity; `None` for entities that carry nothing
    #[serde(default)]
    pub loadout: Option<Loadout>,

    // === Resources ===
    #[serde(default)]
    pub stress: StressTracks,
    #[serde(default)]
    pub action_points: ResourcePool,

    // === Possessions ===
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Character {
    /// Create a character with zeroed attributes, all 24 skills at rank 0 and an empty loadout
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Character {
            id: id.into(),
            name: name.into(),
            kind: ActorKind::Character,
            attributes: Attributes::default(),
            skills: Skill::all().iter().map(|s| (*s, SkillScore::default())).collect(),
            defense: DefenseProfile::default(),
            initiative: 0,
            loadout: Some(Loadout::default()),
            stress: StressTracks::default(),
            action_points: ResourcePool::default(),
            items: Vec::new(),
        }
    }

    /// Builder-style attribute base value
    pub fn with_attribute(mut self, attribute: Attribute, base: i32) -> Self {
        self.attributes.get_mut(attribute).base = base;
        self
    }

    /// Builder-style skill rank
    pub fn with_skill(mut self, skill: Skill, rank: i32) -> Self {
        self.skills.entry(skill).or_default().rank = rank;
        self
    }

    /// Builder-style action point pool, starting full
    pub fn with_action_points(mut self, max: u32) -> Self {
        self.action_points = ResourcePool { current: max, max };
        self
    }

    /// Builder-style item
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Builder-style removal of the loadout sub-structure
    pub fn without_loadout(mut self) -> Self {
        self.loadout = None;
        self
    }

    /// Recompute every derived field
    pub fn recompute(&mut self, tables: &RuleTables) {
        crate::derived::recompute(self, tables);
    }

    // === Lookups ===

    pub fn attribute_total(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute).total
    }

    /// Skill bonus, 0 when the character has no entry for the skill
    pub fn skill_bonus(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).map(|s| s.bonus).unwrap_or(0)
    }

    /// Skill rank, 0 when the character has no entry for the skill
    pub fn skill_rank(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).map(|s| s.rank).unwrap_or(0)
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| &i.id == id)
    }

    /// Iterate over weapons with their owning items
    pub fn weapons(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.is_weapon())
    }

    // === Item list changes ===

    /// Add an item, automatically recomputing derived stats
    pub fn add_item(&mut self, item: Item, tables: &RuleTables) {
        self.items.push(item);
        self.recompute(tables);
    }

    /// Remove an item by ID, returning it if present
    pub fn remove_item(&mut self, id: &ItemId, tables: &RuleTables) -> Option<Item> {
        let index = self.items.iter().position(|i| &i.id == id)?;
        let item = self.items.remove(index);
        self.recompute(tables);
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemKind, Weapon, WeaponSize};

    #[test]
    fn test_new_character_has_all_skills() {
        let character = Character::new("hero", "Hero");
        assert_eq!(character.skills.len(), 24);
        assert!(character.loadout.is_some());
        assert_eq!(character.kind, ActorKind::Character);
    }

    #[test]
    fn test_missing_skill_lookups_are_zero() {
        let mut character = Character::new("hero", "Hero");
        character.skills.clear();
        assert_eq!(character.skill_bonus(Skill::Vigilance), 0);
        assert_eq!(character.skill_rank(Skill::Resist), 0);
    }

    #[test]
    fn test_add_and_remove_item_recompute() {
        let tables = RuleTables::default();
        let mut character = Character::new("hero", "Hero").with_attribute(Attribute::Strength, 2);
        character.recompute(&tables);

        let pack = Item::new("pack", "Pack", ItemKind::Equipment(Default::default())).with_weight(10);
        character.add_item(pack, &tables);
        let loadout = character.loadout.unwrap();
        assert_eq!(loadout.used, 10);
        assert!(loadout.overloaded);

        let removed = character.remove_item(&ItemId::from("pack"), &tables);
        assert!(removed.is_some());
        assert!(!character.loadout.unwrap().overloaded);
        assert!(character.remove_item(&ItemId::from("pack"), &tables).is_none());
    }

    #[test]
    fn test_weapons_iterator() {
        let character = Character::new("hero", "Hero")
            .with_item(Item::new(
                "knife",
                "Knife",
                ItemKind::Weapon(Weapon::new(2, Skill::Melee, WeaponSize::Light)),
            ))
            .with_item(Item::new("rope", "Rope", ItemKind::Tool(Default::default())));

        assert_eq!(character.weapons().count(), 1);
    }
}
