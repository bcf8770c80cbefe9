//! Core keys and identifiers shared across the rules engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four top-level character capabilities
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Agility,
    Mind,
    Will,
}

impl Attribute {
    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Agility,
            Attribute::Mind,
            Attribute::Will,
        ]
    }

    /// The six skills governed by this attribute
    pub fn skills(self) -> [Skill; 6] {
        use Skill::*;
        match self {
            Attribute::Strength => [Athletics, Brawl, Intimidate, Melee, Resist, Throw],
            Attribute::Agility => [Drive, Firearms, Larceny, Ride, Stealth, Vigilance],
            Attribute::Mind => [Art, Craft, Knowledge, Medicine, Perception, Scholarship],
            Attribute::Will => [Insight, Leadership, Performance, Persuasion, Streetwise, Survival],
        }
    }
}

/// One of the 24 skills, each bound to exactly one attribute
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    // Strength
    Athletics,
    Brawl,
    Intimidate,
    Melee,
    Resist,
    Throw,
    // Agility
    Drive,
    Firearms,
    Larceny,
    Ride,
    Stealth,
    Vigilance,
    // Mind
    Art,
    Craft,
    Knowledge,
    Medicine,
    Perception,
    Scholarship,
    // Will
    Insight,
    Leadership,
    Performance,
    Persuasion,
    Streetwise,
    Survival,
}

impl Skill {
    /// Get all skills, grouped by governing attribute
    pub fn all() -> &'static [Skill] {
        use Skill::*;
        &[
            Athletics, Brawl, Intimidate, Melee, Resist, Throw,
            Drive, Firearms, Larceny, Ride, Stealth, Vigilance,
            Art, Craft, Knowledge, Medicine, Perception, Scholarship,
            Insight, Leadership, Performance, Persuasion, Streetwise, Survival,
        ]
    }

    /// The attribute whose total feeds this skill's bonus
    pub const fn attribute(self) -> Attribute {
        use Skill::*;
        match self {
            Athletics | Brawl | Intimidate | Melee | Resist | Throw => Attribute::Strength,
            Drive | Firearms | Larceny | Ride | Stealth | Vigilance => Attribute::Agility,
            Art | Craft | Knowledge | Medicine | Perception | Scholarship => Attribute::Mind,
            Insight | Leadership | Performance | Persuasion | Streetwise | Survival => {
                Attribute::Will
            }
        }
    }
}

/// Which stress track a wound or recovery applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StressType {
    Physical,
    Mental,
}

/// Which defense pair is being queried or toggled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseKind {
    /// Physical defense (agility + vigilance)
    Dodge,
    /// Mental defense (will + insight)
    Mental,
}

/// Named difficulty thresholds for checks
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    Trivial,
    Easy,
    Moderate,
    Hard,
    Expert,
    Master,
    Heroic,
    Impossible,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Trivial,
            Difficulty::Easy,
            Difficulty::Moderate,
            Difficulty::Hard,
            Difficulty::Expert,
            Difficulty::Master,
            Difficulty::Heroic,
            Difficulty::Impossible,
        ]
    }
}

/// Combat actions that spend action points
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Attack,
    Move,
    Defense,
    Aim,
    Assist,
    SwapWeapon,
    UseItem,
    Stand,
    Wait,
}

impl ActionKind {
    pub fn all() -> &'static [ActionKind] {
        &[
            ActionKind::Attack,
            ActionKind::Move,
            ActionKind::Defense,
            ActionKind::Aim,
            ActionKind::Assist,
            ActionKind::SwapWeapon,
            ActionKind::UseItem,
            ActionKind::Stand,
            ActionKind::Wait,
        ]
    }
}

/// Identifier for a character entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub String);

impl From<&str> for CharacterId {
    fn from(s: &str) -> Self {
        CharacterId(s.to_string())
    }
}

impl From<String> for CharacterId {
    fn from(s: String) -> Self {
        CharacterId(s)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for an item owned by a character
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_six_skills_per_attribute() {
        for attribute in Attribute::all() {
            let governed = Skill::all()
                .iter()
                .filter(|s| s.attribute() == *attribute)
                .count();
            assert_eq!(governed, 6, "{attribute} should govern 6 skills");
        }
        assert_eq!(Skill::all().len(), 24);
    }

    #[test]
    fn test_attribute_skill_lists_agree_with_binding() {
        for attribute in Attribute::all() {
            for skill in attribute.skills() {
                assert_eq!(skill.attribute(), *attribute);
            }
        }
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(Skill::from_str("vigilance").unwrap(), Skill::Vigilance);
        assert_eq!(Skill::from_str("Firearms").unwrap(), Skill::Firearms);
        assert_eq!(Attribute::from_str("will").unwrap(), Attribute::Will);
        assert!(Attribute::from_str("charisma").is_err());
        assert_eq!(ActionKind::from_str("swap_weapon").unwrap(), ActionKind::SwapWeapon);
    }

    #[test]
    fn test_keys_display_snake_case() {
        assert_eq!(Skill::Streetwise.to_string(), "streetwise");
        assert_eq!(Attribute::Agility.as_ref(), "agility");
    }
}
