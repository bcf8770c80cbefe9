//! Score, defense, stress, loadout and resource containers

use crate::types::{Attribute, DefenseKind, StressType};
use serde::{Deserialize, Serialize};

/// Attribute score: `total = base + bonus`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeScore {
    #[serde(default)]
    pub base: i32,
    #[serde(default)]
    pub bonus: i32,
    /// Derived
    #[serde(default)]
    pub total: i32,
}

/// The four attributes; the set is closed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub strength: AttributeScore,
    #[serde(default)]
    pub agility: AttributeScore,
    #[serde(default)]
    pub mind: AttributeScore,
    #[serde(default)]
    pub will: AttributeScore,
}

impl Attributes {
    pub fn get(&self, attribute: Attribute) -> &AttributeScore {
        match attribute {
            Attribute::Strength => &self.strength,
            Attribute::Agility => &self.agility,
            Attribute::Mind => &self.mind,
            Attribute::Will => &self.will,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut AttributeScore {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Mind => &mut self.mind,
            Attribute::Will => &mut self.will,
        }
    }
}

/// Skill entry: `bonus = governing attribute total + rank`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScore {
    #[serde(default)]
    pub rank: i32,
    /// Derived
    #[serde(default)]
    pub bonus: i32,
}

/// Active defense value and whether it is currently in effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseValue {
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub active: bool,
}

/// Passive and active defense pairs. Active is always passive + 5.
///
/// Only the active entry of a pair carries a toggle; the passive value is
/// in effect whenever that toggle is off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseProfile {
    #[serde(default)]
    pub passive_dodge: i32,
    #[serde(default)]
    pub active_dodge: DefenseValue,
    #[serde(default)]
    pub passive_mental: i32,
    #[serde(default)]
    pub active_mental: DefenseValue,
}

impl DefenseProfile {
    /// The active entry of a pair, which carries the toggle
    pub fn active_entry_mut(&mut self, kind: DefenseKind) -> &mut DefenseValue {
        match kind {
            DefenseKind::Dodge => &mut self.active_dodge,
            DefenseKind::Mental => &mut self.active_mental,
        }
    }

    /// Value currently in effect: active when toggled on, passive otherwise
    pub fn value(&self, kind: DefenseKind) -> i32 {
        let (passive, active) = match kind {
            DefenseKind::Dodge => (self.passive_dodge, self.active_dodge),
            DefenseKind::Mental => (self.passive_mental, self.active_mental),
        };
        if active.active {
            active.value
        } else {
            passive
        }
    }
}

/// Stress track; `current` never exceeds `max`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressTrack {
    #[serde(default)]
    pub current: u32,
    /// Derived
    #[serde(default)]
    pub max: u32,
}

impl StressTrack {
    /// Add stress, clamped at max. Returns the amount actually added.
    ///
    /// A `current` already above `max` is pulled down to `max` first.
    pub fn add(&mut self, amount: u32) -> u32 {
        let before = self.current.min(self.max);
        self.current = before.saturating_add(amount).min(self.max);
        self.current - before
    }

    /// Remove stress, floored at 0. Returns the amount actually removed.
    pub fn recover(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    pub fn clear(&mut self) {
        self.current = 0;
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressTracks {
    #[serde(default)]
    pub physical: StressTrack,
    #[serde(default)]
    pub mental: StressTrack,
}

impl StressTracks {
    pub fn get(&self, stress_type: StressType) -> &StressTrack {
        match stress_type {
            StressType::Physical => &self.physical,
            StressType::Mental => &self.mental,
        }
    }

    pub fn get_mut(&mut self, stress_type: StressType) -> &mut StressTrack {
        match stress_type {
            StressType::Physical => &mut self.physical,
            StressType::Mental => &mut self.mental,
        }
    }
}

/// Carry capacity and overload, fully derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub used: u32,
    #[serde(default)]
    pub overload_level: u32,
    #[serde(default)]
    pub overloaded: bool,
}

/// A spendable pool such as action points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub max: u32,
}

impl ResourcePool {
    /// Refill to max
    pub fn restore(&mut self) {
        self.current = self.max;
    }

    /// Spend `amount` if available; leaves the pool untouched otherwise
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.current.checked_sub(amount) {
            Some(remaining) => {
                self.current = remaining;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_add_clamps() {
        let mut track = StressTrack { current: 4, max: 6 };
        assert_eq!(track.add(5), 2);
        assert_eq!(track.current, 6);
        assert!(track.is_full());
    }

    #[test]
    fn test_stress_add_above_max_clamps() {
        let mut track = StressTrack { current: 5, max: 2 };
        assert_eq!(track.add(1), 0);
        assert_eq!(track.current, 2);

        let mut track = StressTrack { current: 9, max: 4 };
        assert_eq!(track.add(0), 0);
        assert_eq!(track.current, 4);
    }

    #[test]
    fn test_stress_recover_floors_at_zero() {
        let mut track = StressTrack { current: 1, max: 6 };
        assert_eq!(track.recover(3), 1);
        assert_eq!(track.current, 0);
    }

    #[test]
    fn test_defense_value_respects_toggle() {
        let mut profile = DefenseProfile {
            passive_dodge: 14,
            active_dodge: DefenseValue { value: 19, active: false },
            ..Default::default()
        };
        assert_eq!(profile.value(DefenseKind::Dodge), 14);

        profile.active_entry_mut(DefenseKind::Dodge).active = true;
        assert_eq!(profile.value(DefenseKind::Dodge), 19);
    }

    #[test]
    fn test_resource_pool_spend() {
        let mut pool = ResourcePool { current: 3, max: 6 };
        assert!(pool.spend(3));
        assert!(!pool.spend(1));
        assert_eq!(pool.current, 0);
        pool.restore();
        assert_eq!(pool.current, 6);
    }
}
