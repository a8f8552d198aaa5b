//! Test fixture creation
//!
//! Writes a column-oriented playlist dataset into a temporary directory.

use super::constants::*;
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use tempfile::TempDir;

fn title_for_row(row: usize) -> String {
    match row {
        0 => SONG_1_TITLE.to_owned(),
        3 | 7 => DUPLICATE_TITLE.to_owned(),
        _ => format!("Song {row:02}"),
    }
}

fn id_for_row(row: usize) -> String {
    match row {
        0 => SONG_1_ID.to_owned(),
        _ => format!("song-{row}"),
    }
}

fn dataset_json() -> Value {
    let attributes = [
        "id",
        "title",
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

    let mut dataset = Map::new();
    for attribute in attributes {
        let mut rows = Map::new();
        for row in 0..SONGS_COUNT {
            let value = match attribute {
                "id" => json!(id_for_row(row)),
                "title" => json!(title_for_row(row)),
                "key" | "num_sections" => json!(row % 12),
                "mode" | "class" => json!(row % 2),
                "time_signature" => json!(4),
                "loudness" => json!(-5.0 - row as f64 / 10.0),
                "tempo" => json!(90.0 + row as f64),
                "duration_ms" => json!(200_000 + row * 1500),
                "num_bars" => json!(80 + row),
                "num_segments" => json!(700 + row * 3),
                _ => json!((row as f64 / SONGS_COUNT as f64 * 1000.0).round() / 1000.0),
            };
            rows.insert(row.to_string(), value);
        }
        dataset.insert(attribute.to_owned(), Value::Object(rows));
    }
    Value::Object(dataset)
}

/// Creates a temporary directory holding `playlist.json`.
///
/// The directory must be kept alive for as long as the dataset is needed.
pub fn create_test_dataset() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("playlist.json");
    std::fs::write(&path, serde_json::to_string_pretty(&dataset_json())?)?;
    Ok((temp_dir, path))
}
