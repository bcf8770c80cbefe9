//! Rule tables: weapon sizes, difficulties, action costs and XP tiers

use super::ConfigError;
use crate::item::WeaponSize;
use crate::types::{ActionKind, Attribute, Difficulty, Skill};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Immutable rule data handed to every component that needs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTables {
    #[serde(default)]
    pub weapon_sizes: WeaponSizeTable,
    #[serde(default)]
    pub difficulties: DifficultyTable,
    #[serde(default)]
    pub action_costs: ActionCostTable,
    /// Flaw severity -> XP granted
    #[serde(default = "default_flaw_severities")]
    pub flaw_severities: Vec<XpTier>,
    /// Perk level -> XP cost
    #[serde(default = "default_perk_levels")]
    pub perk_levels: Vec<XpTier>,
}

impl Default for RuleTables {
    fn default() -> Self {
        RuleTables {
            weapon_sizes: WeaponSizeTable::default(),
            difficulties: DifficultyTable::default(),
            action_costs: ActionCostTable::default(),
            flaw_severities: default_flaw_severities(),
            perk_levels: default_perk_levels(),
        }
    }
}

impl RuleTables {
    /// The attribute whose total feeds a skill's bonus
    pub fn governing_attribute(&self, skill: Skill) -> Attribute {
        skill.attribute()
    }

    /// The six skills bound to an attribute
    pub fn skills_for(&self, attribute: Attribute) -> [Skill; 6] {
        attribute.skills()
    }

    /// Size modifiers for a weapon
    pub fn weapon_size(&self, size: WeaponSize) -> WeaponSizeRule {
        self.weapon_sizes.get(size)
    }

    /// Target number for a named difficulty
    pub fn difficulty(&self, level: Difficulty) -> i32 {
        self.difficulties.get(level)
    }

    /// Action point cost of a combat action
    pub fn action_cost(&self, action: ActionKind) -> u32 {
        self.action_costs.get(action)
    }

    /// XP granted by a flaw of the given severity
    pub fn flaw_xp(&self, severity: u8) -> u32 {
        tier_xp(&self.flaw_severities, severity)
    }

    /// XP cost of a perk at the given level
    pub fn perk_xp(&self, level: u8) -> u32 {
        tier_xp(&self.perk_levels, level)
    }

    /// Check structural constraints that serde defaults cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tiers("flaw_severities", &self.flaw_severities)?;
        validate_tiers("perk_levels", &self.perk_levels)?;

        let thresholds: Vec<i32> = Difficulty::all().iter().map(|d| self.difficulty(*d)).collect();
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::ValidationError(format!(
                "difficulty thresholds must be strictly ascending, got {thresholds:?}"
            )));
        }

        Ok(())
    }
}

/// Look up a tier's XP, falling back to the lowest tier when the tier is absent
fn tier_xp(tiers: &[XpTier], tier: u8) -> u32 {
    tiers
        .iter()
        .find(|t| t.tier == tier)
        .or_else(|| tiers.iter().min_by_key(|t| t.tier))
        .map(|t| t.xp)
        .unwrap_or(0)
}

fn validate_tiers(name: &str, tiers: &[XpTier]) -> Result<(), ConfigError> {
    if tiers.is_empty() {
        return Err(ConfigError::ValidationError(format!("{name} must not be empty")));
    }
    for (i, tier) in tiers.iter().enumerate() {
        if tiers[..i].iter().any(|t| t.tier == tier.tier) {
            return Err(ConfigError::ValidationError(format!(
                "{name} lists tier {} more than once",
                tier.tier
            )));
        }
    }
    Ok(())
}

/// Load rule tables from a TOML file and validate them
pub fn load_rule_tables(path: &Path) -> Result<RuleTables, ConfigError> {
    let tables: RuleTables = super::load_toml(path)?;
    tables.validate()?;
    Ok(tables)
}

/// Load rule tables from a TOML string and validate them
pub fn parse_rule_tables(content: &str) -> Result<RuleTables, ConfigError> {
    let tables: RuleTables = super::parse_toml(content)?;
    tables.validate()?;
    Ok(tables)
}

/// To-hit and armor-ignore modifiers for one weapon size class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSizeRule {
    #[serde(default)]
    pub hit_bonus: i32,
    #[serde(default)]
    pub armor_ignore: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSizeTable {
    #[serde(default = "default_light")]
    pub light: WeaponSizeRule,
    #[serde(default)]
    pub normal: WeaponSizeRule,
    #[serde(default = "default_heavy")]
    pub heavy: WeaponSizeRule,
}

impl Default for WeaponSizeTable {
    fn default() -> Self {
        WeaponSizeTable {
            light: default_light(),
            normal: WeaponSizeRule::default(),
            heavy: default_heavy(),
        }
    }
}

impl WeaponSizeTable {
    pub fn get(&self, size: WeaponSize) -> WeaponSizeRule {
        match size {
            WeaponSize::Light => self.light,
            WeaponSize::Normal => self.normal,
            WeaponSize::Heavy => self.heavy,
        }
    }
}

fn default_light() -> WeaponSizeRule {
    WeaponSizeRule {
        hit_bonus: 2,
        armor_ignore: 0,
    }
}

fn default_heavy() -> WeaponSizeRule {
    WeaponSizeRule {
        hit_bonus: 0,
        armor_ignore: 2,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable {
    #[serde(default = "default_trivial")]
    pub trivial: i32,
    #[serde(default = "default_easy")]
    pub easy: i32,
    #[serde(default = "default_moderate")]
    pub moderate: i32,
    #[serde(default = "default_hard")]
    pub hard: i32,
    #[serde(default = "default_expert")]
    pub expert: i32,
    #[serde(default = "default_master")]
    pub master: i32,
    #[serde(default = "default_heroic")]
    pub heroic: i32,
    #[serde(default = "default_impossible")]
    pub impossible: i32,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        DifficultyTable {
            trivial: default_trivial(),
            easy: default_easy(),
            moderate: default_moderate(),
            hard: default_hard(),
            expert: default_expert(),
            master: default_master(),
            heroic: default_heroic(),
            impossible: default_impossible(),
        }
    }
}

impl DifficultyTable {
    pub fn get(&self, level: Difficulty) -> i32 {
        match level {
            Difficulty::Trivial => self.trivial,
            Difficulty::Easy => self.easy,
            Difficulty::Moderate => self.moderate,
            Difficulty::Hard => self.hard,
            Difficulty::Expert => self.expert,
            Difficulty::Master => self.master,
            Difficulty::Heroic => self.heroic,
            Difficulty::Impossible => self.impossible,
        }
    }
}

fn default_trivial() -> i32 {
    12
}
fn default_easy() -> i32 {
    15
}
fn default_moderate() -> i32 {
    18
}
fn default_hard() -> i32 {
    21
}
fn default_expert() -> i32 {
    24
}
fn default_master() -> i32 {
    27
}
fn default_heroic() -> i32 {
    30
}
fn default_impossible() -> i32 {
    33
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCostTable {
    #[serde(default = "default_attack_cost")]
    pub attack: u32,
    #[serde(default = "one")]
    pub r#move: u32,
    #[serde(default = "two")]
    pub defense: u32,
    #[serde(default = "one")]
    pub aim: u32,
    #[serde(default = "two")]
    pub assist: u32,
    #[serde(default = "one")]
    pub swap_weapon: u32,
    #[serde(default = "two")]
    pub use_item: u32,
    #[serde(default = "one")]
    pub stand: u32,
    #[serde(default)]
    pub wait: u32,
}

impl Default for ActionCostTable {
    fn default() -> Self {
        ActionCostTable {
            attack: default_attack_cost(),
            r#move: 1,
            defense: 2,
            aim: 1,
            assist: 2,
            swap_weapon: 1,
            use_item: 2,
            stand: 1,
            wait: 0,
        }
    }
}

impl ActionCostTable {
    pub fn get(&self, action: ActionKind) -> u32 {
        match action {
            ActionKind::Attack => self.attack,
            ActionKind::Move => self.r#move,
            ActionKind::Defense => self.defense,
            ActionKind::Aim => self.aim,
            ActionKind::Assist => self.assist,
            ActionKind::SwapWeapon => self.swap_weapon,
            ActionKind::UseItem => self.use_item,
            ActionKind::Stand => self.stand,
            ActionKind::Wait => self.wait,
        }
    }
}

fn default_attack_cost() -> u32 {
    3
}
fn one() -> u32 {
    1
}
fn two() -> u32 {
    2
}

/// One row of a severity/level -> XP table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpTier {
    pub tier: u8,
    pub xp: u32,
}

fn default_flaw_severities() -> Vec<XpTier> {
    vec![
        XpTier { tier: 1, xp: 10 },
        XpTier { tier: 2, xp: 20 },
        XpTier { tier: 3, xp: 30 },
    ]
}

fn default_perk_levels() -> Vec<XpTier> {
    vec![
        XpTier { tier: 1, xp: 5 },
        XpTier { tier: 2, xp: 10 },
        XpTier { tier: 3, xp: 15 },
    ]
}
