//! Column-oriented datasets for unit tests.

use serde_json::{json, Map, Value};

pub(crate) const FIXTURE_SONGS_COUNT: usize = 25;

pub(crate) fn song_title(row: usize) -> String {
    if row == 0 {
        "3am".to_owned()
    } else {
        format!("Track {row:02}")
    }
}

/// A playlist-shaped dataset with `rows` songs. Row 0 is titled "3am".
pub(crate) fn columns_json(rows: usize) -> Value {
    let mut id = Map::new();
    let mut title = Map::new();
    let mut danceability = Map::new();
    let mut energy = Map::new();
    let mut tempo = Map::new();
    let mut duration_ms = Map::new();
    let mut class = Map::new();

    for row in 0..rows {
        let key = row.to_string();
        id.insert(key.clone(), json!(format!("song-{row}")));
        title.insert(key.clone(), json!(song_title(row)));
        danceability.insert(key.clone(), json!(0.5 + row as f64 / 100.0));
        energy.insert(key.clone(), json!(0.9 - row as f64 / 100.0));
        tempo.insert(key.clone(), json!(100.0 + row as f64));
        duration_ms.insert(key.clone(), json!(180_000 + row * 1000));
        class.insert(key, json!(row % 2));
    }

    json!({
        "id": id,
        "title": title,
        "danceability": danceability,
        "energy": energy,
        "tempo": tempo,
        "duration_ms": duration_ms,
        "class": class,
    })
}
