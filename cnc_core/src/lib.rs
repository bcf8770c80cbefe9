//! cnc_core - Rules engine for the Core & Cold tabletop RPG
//!
//! This library provides:
//! - RuleTables: Fixed rule data (skill bindings, weapon sizes, difficulties, costs, XP)
//! - Character: Attributes, skills, stress, action points and items
//! - Derived Stat Engine: Recomputes every derived field from base values
//! - Dice: 2d10 + modifier with critical/fumble classification
//! - Action Resolver: Attribute, skill and attack rolls plus weapon damage
//! - Encounter: Initiative order, turns and rounds
//!
//! The library never installs a `tracing` subscriber; hosts decide where
//! logs go.

pub mod action;
pub mod character;
pub mod combat;
pub mod config;
pub mod derived;
pub mod dice;
pub mod item;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use action::{
    calculate_damage, resolve_damage, roll_attack, roll_attribute, roll_initiative, roll_skill,
    ActionError, ActionOutcome, CheckKind, DamageBreakdown, DamageMessage, DamageOptions,
    DamageOutcome, RollMessage,
};
pub use character::{ActorKind, Character, RestKind, RestOutcome, StressChange};
pub use combat::{CombatError, Encounter, EncounterState, Participant, ParticipantId, Roster, TurnAdvance};
pub use config::{load_rule_tables, parse_rule_tables, ConfigError, RuleTables};
pub use dice::{evaluate, evaluate_with, DiceSource, RollOutcome, ScriptedDice};
pub use item::{Item, ItemKind, Weapon, WeaponSize};
pub use types::{ActionKind, Attribute, CharacterId, DefenseKind, Difficulty, ItemId, Skill, StressType};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<Character>();
        assert_send_sync::<Item>();
        assert_send_sync::<Encounter>();
        assert_send_sync::<RuleTables>();
        assert_send_sync::<RollOutcome>();
        assert_send_sync::<ActionOutcome>();
        assert_send_sync::<DamageOutcome>();
        assert_send_sync::<ActionError>();
        assert_send_sync::<CombatError>();
        assert_send_sync::<ConfigError>();
    }
}
