//! Action Resolver - Attribute checks, skill checks, weapon attacks and damage

mod damage;
mod resolution;
mod result;

pub use damage::{calculate_damage, DamageBreakdown};
pub use resolution::{
    roll_attack, roll_attribute, roll_initiative, roll_skill, resolve_damage, DamageOptions,
};
pub use result::{ActionOutcome, CheckKind, DamageMessage, DamageOutcome, RollMessage};

use crate::types::{ActionKind, ItemId};
use thiserror::Error;

/// Recoverable failure of an action request; no state was changed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("No such attribute: {0}")]
    UnknownAttribute(String),
    #[error("No such skill: {0}")]
    UnknownSkill(String),
    #[error("No such item: {0}")]
    ItemNotFound(ItemId),
    #[error("Only weapons can attack or deal damage; {item} is a {kind}")]
    NotAWeapon { item: ItemId, kind: &'static str },
    #[error("Only consumables can be used; {item} is a {kind}")]
    NotAConsumable { item: ItemId, kind: &'static str },
    #[error("{0} has no uses left")]
    NoUsesLeft(ItemId),
    #[error("{action} costs {cost} action points but only {available} remain")]
    InsufficientActionPoints {
        action: ActionKind,
        cost: u32,
        available: u32,
    },
}
