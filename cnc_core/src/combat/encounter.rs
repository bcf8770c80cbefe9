//! Encounter - Participants, initiative order and the turn/round pointer

use super::roster::Roster;
use super::CombatError;
use crate::action::{roll_initiative, ActionOutcome};
use crate::dice::DiceSource;
use crate::types::CharacterId;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Handle for one participant slot in an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A character taking part in an encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub character_id: CharacterId,
    /// `None` until initiative is rolled
    pub initiative: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterState {
    #[default]
    Inactive,
    Active,
}

/// Initiative result for one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeRoll {
    pub participant: ParticipantId,
    pub outcome: ActionOutcome,
}

/// What happened on a turn advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAdvance {
    pub round: u32,
    pub turn: usize,
    /// Participant whose turn it now is
    pub participant: ParticipantId,
    /// The pointer wrapped and a new round began
    pub new_round: bool,
}

/// Turn and round bookkeeping for one fight
///
/// Participants refer to characters by id only; the characters themselves
/// live in whatever [`Roster`] the host passes in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    participants: Vec<Participant>,
    round: u32,
    turn: usize,
    state: EncounterState,
    next_id: u32,
}

impl Encounter {
    pub fn new() -> Self {
        Self::default()
    }

    // === Accessors ===

    /// Participants in turn order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Current round, 0 before the encounter starts
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Index of the acting participant
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == EncounterState::Active
    }

    /// The acting participant, if the encounter is running
    pub fn current(&self) -> Option<&Participant> {
        if !self.is_active() {
            return None;
        }
        self.participants.get(self.turn)
    }

    // === Roster changes ===

    /// Append a participant for a character; allowed at any time
    pub fn add_participant(&mut self, character_id: impl Into<CharacterId>) -> ParticipantId {
        let id = ParticipantId(self.next_id);
        self.next_id += 1;
        self.participants.push(Participant {
            id,
            character_id: character_id.into(),
            initiative: None,
        });
        id
    }

    /// Remove a participant, keeping the pointer on the same acting participant
    ///
    /// Removing the acting participant hands the turn to whoever followed it,
    /// wrapping to the top of the order without starting a new round.
    /// Removing the last participant ends the encounter.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<Participant, CombatError> {
        let index = self.index_of(id)?;
        let removed = self.participants.remove(index);

        if index < self.turn {
            self.turn -= 1;
        }
        if self.turn >= self.participants.len() {
            self.turn = 0;
        }
        if self.participants.is_empty() && self.is_active() {
            debug!("last participant removed, ending combat");
            self.end();
        }

        Ok(removed)
    }

    // === Lifecycle ===

    /// Begin combat at round 1 with the first participant acting
    pub fn start(&mut self) -> Result<(), CombatError> {
        if self.is_active() {
            return Err(CombatError::AlreadyActive);
        }
        if self.participants.is_empty() {
            return Err(CombatError::NoParticipants);
        }

        self.state = EncounterState::Active;
        self.round = 1;
        self.turn = 0;
        debug!(participants = self.participants.len(), "combat started");
        Ok(())
    }

    /// Return to the inactive state; participants and initiative are kept
    pub fn end(&mut self) {
        self.state = EncounterState::Inactive;
        self.round = 0;
        self.turn = 0;
    }

    /// Roll initiative for the given participants and re-sort the order
    ///
    /// Each roll uses the character's initiative modifier. All ids are
    /// checked before anything is rolled, so an unknown id changes nothing.
    /// Participants whose character is missing from the roster are skipped.
    /// The order is then sorted by initiative, highest first, keeping the
    /// existing order between ties and placing unrolled participants last.
    /// Round and turn pointer are not touched.
    pub fn roll_initiative(
        &mut self,
        ids: &[ParticipantId],
        roster: &impl Roster,
        dice: &mut impl DiceSource,
    ) -> Result<Vec<InitiativeRoll>, CombatError> {
        for id in ids {
            self.index_of(*id)?;
        }

        let mut rolls = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(participant) = self.participant(*id) else {
                continue;
            };
            let Some(character) = roster.character(&participant.character_id) else {
                warn!(
                    participant = %id,
                    character = %participant.character_id,
                    "character not in roster, skipping initiative"
                );
                continue;
            };
            rolls.push(InitiativeRoll {
                participant: *id,
                outcome: roll_initiative(character, dice),
            });
        }

        for roll in &rolls {
            if let Some(participant) = self.participants.iter_mut().find(|p| p.id == roll.participant) {
                participant.initiative = Some(roll.outcome.total());
            }
        }
        // Option orders None below Some, so descending puts unrolled last
        self.participants.sort_by(|a, b| b.initiative.cmp(&a.initiative));

        debug!(rolled = rolls.len(), "initiative applied");
        Ok(rolls)
    }

    /// End the acting participant's turn
    ///
    /// The departing character's action points are restored to max before
    /// the pointer moves. Wrapping past the last participant starts a new
    /// round.
    pub fn next_turn(&mut self, roster: &mut impl Roster) -> Result<TurnAdvance, CombatError> {
        if !self.is_active() {
            return Err(CombatError::NotStarted);
        }
        let departing = self.participants.get(self.turn).ok_or(CombatError::NoParticipants)?;

        match roster.character_mut(&departing.character_id) {
            Some(character) => character.action_points.restore(),
            None => warn!(
                participant = %departing.id,
                character = %departing.character_id,
                "character not in roster, action points not reset"
            ),
        }

        self.turn += 1;
        let new_round = self.turn >= self.participants.len();
        if new_round {
            self.turn = 0;
            self.round += 1;
        }

        let participant = self.participants[self.turn].id;
        debug!(round = self.round, turn = self.turn, %participant, new_round, "turn advanced");

        Ok(TurnAdvance {
            round: self.round,
            turn: self.turn,
            participant,
            new_round,
        })
    }

    fn index_of(&self, id: ParticipantId) -> Result<usize, CombatError> {
        self.participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(CombatError::UnknownParticipant(id))
    }
}
