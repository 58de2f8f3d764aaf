//! In-memory player store.
//!
//! A single `Mutex` guards the id → player map. The lock is held only while
//! touching the map: callers get owned copies back and serialize them after
//! the guard is dropped.

use crate::models::{NewPlayer, Player};
use parking_lot::Mutex;
use rand::seq::IteratorRandom;
use std::collections::HashMap;
use uuid::Uuid;

/// Id of the fixture player inserted by [`PlayerStore::seeded`].
pub const TEST_PLAYER_ID: &str = "test";

#[derive(Debug, Default)]
pub struct PlayerStore {
    players: Mutex<HashMap<String, Player>>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding one known player under [`TEST_PLAYER_ID`].
    pub fn seeded() -> Self {
        let store = Self::new();
        let fixture = NewPlayer {
            first_name: "Diyar".into(),
            last_name: "Kudrat".into(),
            position: String::new(),
            height: "5'11".into(),
            weight: 245,
            state: "CA".into(),
        };
        store
            .players
            .lock()
            .insert(TEST_PLAYER_ID.into(), fixture.into_player(TEST_PLAYER_ID.into()));
        store
    }

    /// Snapshot of every player, in no particular order.
    pub fn list(&self) -> Vec<Player> {
        self.players.lock().values().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<Player> {
        self.players.lock().get(id).cloned()
    }

    /// Pick one stored id uniformly at random. `None` when empty.
    pub fn random_id(&self) -> Option<String> {
        let players = self.players.lock();
        match players.len() {
            0 => None,
            1 => players.keys().next().cloned(),
            _ => players.keys().choose(&mut rand::rng()).cloned(),
        }
    }

    /// Insert a new player and return the id assigned to it.
    pub fn create(&self, new: NewPlayer) -> String {
        let id = Uuid::new_v4().to_string();
        let player = new.into_player(id.clone());
        self.players.lock().insert(id.clone(), player);
        id
    }

    pub fn len(&self) -> usize {
        self.players.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
