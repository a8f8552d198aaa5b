use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Audio-feature attributes every song of the playlist dataset is expected to carry.
pub const AUDIO_FEATURES: [&str; 16] = [
    "danceability",
    "energy",
    "key",
    "loudness",
    "mode",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo",
    "duration_ms",
    "time_signature",
    "num_bars",
    "num_sections",
    "num_segments",
    "class",
];

/// One row of the dataset, a flat attribute -> scalar mapping.
///
/// Attribute order follows the dataset file, so every song serializes its
/// fields in the same order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Song(Map<String, Value>);

impl Song {
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Song {
    fn from(fields: Map<String, Value>) -> Self {
        Song(fields)
    }
}
