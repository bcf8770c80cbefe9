//! Dice Resolution Engine - "2d10 + modifier"
//!
//! Every roll in the game uses two ten-sided dice. A natural 20 is a
//! critical, a natural 2 a fumble; the modifier never affects either.

mod outcome;

pub use outcome::RollOutcome;

use rand::Rng;
use std::collections::VecDeque;

/// Number of dice in every roll
pub const DICE_COUNT: usize = 2;

/// Faces per die
pub const DIE_FACES: u8 = 10;

/// Source of individual die faces
///
/// Implemented for every [`rand::Rng`], so production code passes
/// `&mut rand::thread_rng()` and tests pass a seeded rng or [`ScriptedDice`].
pub trait DiceSource {
    /// Roll one die, returning a face in `1..=faces`
    fn roll_die(&mut self, faces: u8) -> u8;
}

impl<R: Rng> DiceSource for R {
    fn roll_die(&mut self, faces: u8) -> u8 {
        self.gen_range(1..=faces.max(1))
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted
///
/// Faces are clamped into the die's range.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        ScriptedDice {
            faces: faces.into_iter().collect(),
        }
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, faces: u8) -> u8 {
        let Some(face) = self.faces.pop_front() else {
            return 1;
        };
        self.faces.push_back(face);
        face.clamp(1, faces.max(1))
    }
}

/// Roll 2d10 + modifier with the thread rng
pub fn evaluate(modifier: i32) -> RollOutcome {
    evaluate_with(modifier, &mut rand::thread_rng())
}

/// Roll 2d10 + modifier with a provided dice source (for deterministic testing)
pub fn evaluate_with(modifier: i32, dice: &mut impl DiceSource) -> RollOutcome {
    let mut faces = [0u8; DICE_COUNT];
    for face in &mut faces {
        *face = dice.roll_die(DIE_FACES);
    }
    RollOutcome::new(faces, modifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_double_ten_is_critical() {
        let roll = evaluate_with(3, &mut ScriptedDice::new([10, 10]));
        assert_eq!(roll.total, 23);
        assert!(roll.is_critical);
        assert!(!roll.is_fumble);
    }

    #[test]
    fn test_double_one_is_fumble() {
        let roll = evaluate_with(0, &mut ScriptedDice::new([1, 1]));
        assert_eq!(roll.total, 2);
        assert!(!roll.is_critical);
        assert!(roll.is_fumble);
    }

    #[test]
    fn test_ordinary_faces_ignore_modifier() {
        for modifier in [-20, -1, 0, 7, 18] {
            let roll = evaluate_with(modifier, &mut ScriptedDice::new([4, 6]));
            assert!(!roll.is_critical, "modifier {modifier}");
            assert!(!roll.is_fumble, "modifier {modifier}");
            assert_eq!(roll.total, 10 + modifier);
        }
    }

    #[test]
    fn test_modifier_cannot_fake_a_critical() {
        let roll = evaluate_with(10, &mut ScriptedDice::new([5, 5]));
        assert_eq!(roll.total, 20);
        assert!(!roll.is_critical);

        let roll = evaluate_with(-8, &mut ScriptedDice::new([5, 5]));
        assert_eq!(roll.total, 2);
        assert!(!roll.is_fumble);
    }

    #[test]
    fn test_scripted_dice_cycles_and_clamps() {
        let mut dice = ScriptedDice::new([12, 0]);
        assert_eq!(dice.roll_die(DIE_FACES), 10);
        assert_eq!(dice.roll_die(DIE_FACES), 1);
        assert_eq!(dice.roll_die(DIE_FACES), 10);

        let mut empty = ScriptedDice::new([]);
        assert_eq!(empty.roll_die(DIE_FACES), 1);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(evaluate_with(1, &mut a), evaluate_with(1, &mut b));
        }
    }

    #[test]
    fn test_rng_faces_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let roll = evaluate_with(0, &mut rng);
            assert!(roll.dice.iter().all(|f| (1..=DIE_FACES).contains(f)));
            assert!((2..=20).contains(&roll.total));
        }
    }

    #[test]
    fn test_thread_rng_evaluate() {
        let roll = evaluate(5);
        assert!((7..=25).contains(&roll.total));
    }
}
