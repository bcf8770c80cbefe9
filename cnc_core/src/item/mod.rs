//! Items - Closed set of item kinds owned by characters

mod prepare;

pub use prepare::prepare_item;

use crate::types::{ItemId, Skill};
use serde::{Deserialize, Serialize};

/// An item owned by a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Loadout weight
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub equipped: bool,
    pub kind: ItemKind,
}

impl Item {
    /// Create an unequipped, weightless item
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            weight: 0,
            equipped: false,
            kind,
        }
    }

    /// Builder-style weight setter
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn as_weapon(&self) -> Option<&Weapon> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut Weapon> {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.as_weapon().is_some()
    }

    /// Flip the equipped flag, returning the new state
    pub fn toggle_equipped(&mut self) -> bool {
        self.equipped = !self.equipped;
        self.equipped
    }
}

/// Variant-specific item data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Weapon(Weapon),
    Armor(Armor),
    Shield(Shield),
    Tool(Description),
    Consumable(Consumable),
    Equipment(Description),
    Heritage(Description),
    Path(Description),
    Perk(Perk),
    Flaw(Flaw),
}

impl ItemKind {
    /// Lowercase kind name, as hosts key their item types
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon(_) => "weapon",
            ItemKind::Armor(_) => "armor",
            ItemKind::Shield(_) => "shield",
            ItemKind::Tool(_) => "tool",
            ItemKind::Consumable(_) => "consumable",
            ItemKind::Equipment(_) => "equipment",
            ItemKind::Heritage(_) => "heritage",
            ItemKind::Path(_) => "path",
            ItemKind::Perk(_) => "perk",
            ItemKind::Flaw(_) => "flaw",
        }
    }
}

/// Size class of a weapon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponSize {
    /// +2 to hit
    Light,
    #[default]
    Normal,
    /// Ignores 2 points of target armor
    Heavy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    #[default]
    Melee,
    Ranged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponRange {
    Close,
    Medium,
    Long,
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponTag {
    Brutal,
    Defensive,
    Reach,
    Reload,
    Silent,
    TwoHanded,
    Unload,
    Zone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorTag {
    Concealed,
    Noisy,
    Shield,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlawType {
    #[default]
    Physical,
    Mental,
    Social,
}

/// Weapon damage: `current` is derived from `base` plus the wielder's attack skill bonus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponDamage {
    pub base: i32,
    #[serde(default)]
    pub current: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub damage: WeaponDamage,
    /// Skill key used for attack rolls; unrecognized keys contribute nothing
    pub attack_skill: String,
    #[serde(default)]
    pub weapon_type: WeaponType,
    #[serde(default)]
    pub weapon_size: WeaponSize,
    #[serde(default)]
    pub range: Option<WeaponRange>,
    #[serde(default)]
    pub tags: Vec<WeaponTag>,

    // Derived from the size table
    #[serde(default)]
    pub hit_bonus: i32,
    #[serde(default)]
    pub armor_ignore: i32,
}

impl Weapon {
    pub fn new(base_damage: i32, attack_skill: Skill, weapon_size: WeaponSize) -> Self {
        Weapon {
            damage: WeaponDamage {
                base: base_damage,
                current: base_damage,
            },
            attack_skill: attack_skill.to_string(),
            weapon_type: WeaponType::default(),
            weapon_size,
            range: None,
            tags: Vec::new(),
            hit_bonus: 0,
            armor_ignore: 0,
        }
    }

    /// Parsed attack skill, `None` when the stored key is not a known skill
    pub fn attack_skill(&self) -> Option<Skill> {
        self.attack_skill.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReduction {
    pub base: i32,
    #[serde(default)]
    pub current: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub damage_reduction: DamageReduction,
    #[serde(default)]
    pub tags: Vec<ArmorTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shield {
    #[serde(default)]
    pub defense_bonus: i32,
    #[serde(default)]
    pub tags: Vec<ArmorTag>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uses {
    pub current: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    pub uses: Uses,
}

/// Free-form payload for kinds with no rules of their own
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Perk {
    #[serde(default = "lowest_tier")]
    pub level: u8,
    /// Derived from the perk level table
    #[serde(default)]
    pub xp_cost: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flaw {
    #[serde(default)]
    pub flaw_type: FlawType,
    #[serde(default = "lowest_tier")]
    pub severity: u8,
    /// Derived from the flaw severity table
    #[serde(default)]
    pub xp_value: u32,
}

fn lowest_tier() -> u8 {
    1
}
