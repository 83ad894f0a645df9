use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input of a player lookup, as received from the query layer.
///
/// Either field may be absent. When both are present the name wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerQuery {
    pub name: Option<String>,
    pub id: Option<u64>,
}

impl PlayerQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }

    pub fn by_id(id: u64) -> Self {
        Self {
            name: None,
            id: Some(id),
        }
    }
}

/// A single player as returned by the player service. Not interpreted here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRecord(pub Value);

/// Records shared between every caller of the same fetch and the cache.
pub type PlayerList = Arc<Vec<PlayerRecord>>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActivePlayersPayload {
    pub activeplayers: ActivePlayers,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActivePlayers {
    pub playerentry: Vec<PlayerEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlayerEntry {
    pub player: PlayerRecord,
}

impl ActivePlayersPayload {
    pub fn into_players(self) -> Vec<PlayerRecord> {
        self.activeplayers
            .playerentry
            .into_iter()
            .map(|entry| entry.player)
            .collect()
    }
}
