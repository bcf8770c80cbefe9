//! Resource changes on a character: stress, rest, defenses, action points, consumables

use super::Character;
use crate::action::ActionError;
use crate::config::RuleTables;
use crate::item::ItemKind;
use crate::types::{ActionKind, DefenseKind, ItemId, StressType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of applying stress to a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressChange {
    pub stress_type: StressType,
    /// Amount requested by the caller
    pub requested: u32,
    /// Amount that fit under the track maximum
    pub applied: u32,
    pub current: u32,
    pub max: u32,
}

impl StressChange {
    /// Whether the track is now at its maximum
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }
}

/// Kind of rest taken between scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestKind {
    /// Recover 1 stress on the chosen track
    Short(StressType),
    /// Recover all stress and refill action points
    Long,
}

/// What a rest restored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestOutcome {
    pub kind: RestKind,
    pub physical_recovered: u32,
    pub mental_recovered: u32,
    pub action_points_restored: bool,
}

impl Character {
    /// Add stress to a track, clamped at the track maximum
    pub fn apply_damage(&mut self, amount: u32, stress_type: StressType) -> StressChange {
        let track = self.stress.get_mut(stress_type);
        let applied = track.add(amount);
        debug!(
            character = %self.id,
            %stress_type,
            requested = amount,
            applied,
            "stress applied"
        );
        let track = self.stress.get(stress_type);
        StressChange {
            stress_type,
            requested: amount,
            applied,
            current: track.current,
            max: track.max,
        }
    }

    /// Remove stress from a track, floored at 0. Returns the amount removed.
    pub fn recover_stress(&mut self, amount: u32, stress_type: StressType) -> u32 {
        self.stress.get_mut(stress_type).recover(amount)
    }

    /// Take a short or long rest
    pub fn rest(&mut self, kind: RestKind) -> RestOutcome {
        let outcome = match kind {
            RestKind::Short(stress_type) => {
                let recovered = self.recover_stress(1, stress_type);
                RestOutcome {
                    kind,
                    physical_recovered: if stress_type == StressType::Physical { recovered } else { 0 },
                    mental_recovered: if stress_type == StressType::Mental { recovered } else { 0 },
                    action_points_restored: false,
                }
            }
            RestKind::Long => {
                let physical = self.stress.physical.current;
                let mental = self.stress.mental.current;
                self.stress.physical.clear();
                self.stress.mental.clear();
                self.action_points.restore();
                RestOutcome {
                    kind,
                    physical_recovered: physical,
                    mental_recovered: mental,
                    action_points_restored: true,
                }
            }
        };
        debug!(character = %self.id, ?outcome, "rest taken");
        outcome
    }

    /// Switch a defense pair to its active value
    pub fn activate_defense(&mut self, kind: DefenseKind) {
        self.defense.active_entry_mut(kind).active = true;
    }

    /// Switch a defense pair back to its passive value
    pub fn deactivate_defense(&mut self, kind: DefenseKind) {
        self.defense.active_entry_mut(kind).active = false;
    }

    /// Defense value currently in effect
    pub fn defense_value(&self, kind: DefenseKind) -> i32 {
        self.defense.value(kind)
    }

    /// Pay the table cost of an action. Returns the points left.
    pub fn spend_action(&mut self, action: ActionKind, tables: &RuleTables) -> Result<u32, ActionError> {
        let cost = tables.action_cost(action);
        if !self.action_points.spend(cost) {
            return Err(ActionError::InsufficientActionPoints {
                action,
                cost,
                available: self.action_points.current,
            });
        }
        Ok(self.action_points.current)
    }

    /// Consume one use of a consumable. Returns the uses left.
    pub fn use_item(&mut self, id: &ItemId) -> Result<u32, ActionError> {
        let item = self
            .item_mut(id)
            .ok_or_else(|| ActionError::ItemNotFound(id.clone()))?;

        let consumable = match &mut item.kind {
            ItemKind::Consumable(consumable) => consumable,
            other => {
                return Err(ActionError::NotAConsumable {
                    item: id.clone(),
                    kind: other.name(),
                })
            }
        };

        if consumable.uses.current == 0 {
            return Err(ActionError::NoUsesLeft(id.clone()));
        }
        consumable.uses.current -= 1;
        Ok(consumable.uses.current)
    }

    /// Flip an item's equipped flag. Returns the new state.
    pub fn toggle_equipped(&mut self, id: &ItemId) -> Result<bool, ActionError> {
        self.item_mut(id)
            .map(|item| item.toggle_equipped())
            .ok_or_else(|| ActionError::ItemNotFound(id.clone()))
    }
}
