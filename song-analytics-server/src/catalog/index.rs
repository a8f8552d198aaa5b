use super::Song;
use std::collections::HashMap;
use tracing::debug;

/// Key used for title lookups: surrounding whitespace removed, full Unicode
/// case folding ("Straße" and "STRASSE" share a key).
pub fn normalize_title(title: &str) -> String {
    caseless::default_case_fold_str(title.trim())
}

/// Case-insensitive title -> song position lookup.
///
/// Songs sharing a normalized title collide on one key and the later song
/// wins. The collision is counted, not resolved.
#[derive(Debug, Default)]
pub struct TitleIndex {
    positions: HashMap<String, usize>,
    shadowed: usize,
}

impl TitleIndex {
    pub fn build(songs: &[Song]) -> TitleIndex {
        let mut positions = HashMap::with_capacity(songs.len());
        let mut shadowed = 0;

        for (position, song) in songs.iter().enumerate() {
            let key = match song.title().map(normalize_title) {
                Some(key) if !key.is_empty() => key,
                _ => continue,
            };
            if let Some(previous) = positions.insert(key, position) {
                shadowed += 1;
                debug!(
                    "Song at row {} shadows row {} with the same title {:?}",
                    position,
                    previous,
                    song.title()
                );
            }
        }

        TitleIndex {
            positions,
            shadowed,
        }
    }

    /// Position of the song matching `title`, if any.
    pub fn get(&self, title: &str) -> Option<usize> {
        self.positions.get(&normalize_title(title)).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of songs hidden behind a later song with the same title.
    pub fn shadowed(&self) -> usize {
        self.shadowed
    }
}
