//! Player record as stored and served, plus the create payload.

use serde::{Deserialize, Serialize};

/// One stored player. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub height: String,
    pub weight: i64,
    pub state: String,
}

/// Body of `POST /players`.
///
/// Missing fields default to empty / zero. Older clients send the
/// capitalised, space-separated names (`"First Name"`), which are accepted
/// as aliases. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewPlayer {
    #[serde(alias = "First Name")]
    pub first_name: String,
    #[serde(alias = "Last Name")]
    pub last_name: String,
    #[serde(alias = "Position")]
    pub position: String,
    #[serde(alias = "Height")]
    pub height: String,
    #[serde(alias = "Weight")]
    pub weight: i64,
    #[serde(alias = "State")]
    pub state: String,
}

impl NewPlayer {
    pub fn into_player(self, id: String) -> Player {
        Player {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            height: self.height,
            weight: self.weight,
            state: self.state,
        }
    }
}
