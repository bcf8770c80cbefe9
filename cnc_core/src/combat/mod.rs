//! Combat Turn Engine - Initiative order, turns and rounds

mod encounter;
mod roster;

pub use encounter::{Encounter, EncounterState, InitiativeRoll, Participant, ParticipantId, TurnAdvance};
pub use roster::Roster;

use thiserror::Error;

/// Misuse of an encounter; the encounter was left unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("Combat has not started")]
    NotStarted,
    #[error("Combat is already active")]
    AlreadyActive,
    #[error("Combat needs at least one participant")]
    NoParticipants,
    #[error("No such participant: {0}")]
    UnknownParticipant(ParticipantId),
}
