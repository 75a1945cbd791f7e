use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A player record as held by the document store. The store is schemaless,
/// so anything beyond the known fields rides along in `extra` untouched.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Player {
    /// Store-assigned key, injected on reads. Never written back to the store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub team: String,
    pub position: String,
    pub number: i64,
    /// Attached by get-one only, never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    // `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.team.to_lowercase().contains(needle)
            || self.position.to_lowercase().contains(needle)
    }
}
