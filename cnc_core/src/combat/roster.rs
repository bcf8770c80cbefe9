//! Roster - Character lookup used by the turn engine

use crate::character::Character;
use crate::types::CharacterId;
use std::collections::{BTreeMap, HashMap};

/// Where an encounter finds the characters its participants refer to
///
/// The encounter only stores character ids; initiative modifiers are read
/// and action points restored through this lookup.
pub trait Roster {
    fn character(&self, id: &CharacterId) -> Option<&Character>;
    fn character_mut(&mut self, id: &CharacterId) -> Option<&mut Character>;
}

impl Roster for Vec<Character> {
    fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.iter().find(|c| &c.id == id)
    }

    fn character_mut(&mut self, id: &CharacterId) -> Option<&mut Character> {
        self.iter_mut().find(|c| &c.id == id)
    }
}

impl Roster for HashMap<CharacterId, Character> {
    fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.get(id)
    }

    fn character_mut(&mut self, id: &CharacterId) -> Option<&mut Character> {
        self.get_mut(id)
    }
}

impl Roster for BTreeMap<CharacterId, Character> {
    fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.get(id)
    }

    fn character_mut(&mut self, id: &CharacterId) -> Option<&mut Character> {
        self.get_mut(id)
    }
}
