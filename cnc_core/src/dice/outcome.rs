//! RollOutcome - Immutable result of one 2d10 evaluation

use super::{DICE_COUNT, DIE_FACES};
use serde::{Deserialize, Serialize};

/// Result of one dice evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Individual die faces
    pub dice: [u8; DICE_COUNT],
    pub modifier: i32,
    /// Natural sum plus modifier
    pub total: i32,
    /// Natural sum is the maximum (20)
    pub is_critical: bool,
    /// Natural sum is the minimum (2)
    pub is_fumble: bool,
}

impl RollOutcome {
    /// Build an outcome from die faces, classifying on the natural sum only
    pub fn new(dice: [u8; DICE_COUNT], modifier: i32) -> Self {
        let natural: i32 = dice.iter().map(|f| i32::from(*f)).sum();
        let max_natural = i32::from(DIE_FACES) * DICE_COUNT as i32;
        let min_natural = DICE_COUNT as i32;

        RollOutcome {
            dice,
            modifier,
            total: natural.saturating_add(modifier),
            is_critical: natural == max_natural,
            is_fumble: natural == min_natural,
        }
    }

    /// Sum of the dice without the modifier
    pub fn natural(&self) -> i32 {
        self.dice.iter().map(|f| i32::from(*f)).sum()
    }

    /// Dice showing 1; signals weapon breakage risk on a fumble
    pub fn count_ones(&self) -> u32 {
        self.dice.iter().filter(|f| **f == 1).count() as u32
    }

    /// Dice showing 10; signals armor wear
    pub fn count_tens(&self) -> u32 {
        self.dice.iter().filter(|f| **f == DIE_FACES).count() as u32
    }

    /// Dice notation, e.g. `2d10 + 3`
    pub fn formula(&self) -> String {
        let dice = format!("{DICE_COUNT}d{DIE_FACES}");
        match self.modifier {
            0 => dice,
            m if m > 0 => format!("{dice} + {m}"),
            m => format!("{dice} - {}", m.unsigned_abs()),
        }
    }

    /// Whether the total meets a target number
    pub fn succeeds_against(&self, target: i32) -> bool {
        self.total >= target
    }

    /// Margin above a target number, 0 on a miss
    pub fn exceed(&self, target: i32) -> i32 {
        self.total.saturating_sub(target).max(0)
    }
}
