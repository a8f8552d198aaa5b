use super::{RawDataset, Song};
use serde_json::{Map, Value};

/// Pivots the column-oriented dataset into one [`Song`] per row, in ascending
/// row index order.
///
/// A cell missing from an attribute's mapping becomes `null`.
pub fn normalize(raw: &RawDataset) -> Vec<Song> {
    (0..raw.row_count())
        .map(|row| {
            let row_key = row.to_string();
            let fields: Map<String, Value> = raw
                .columns()
                .map(|(attribute, rows)| {
                    let value = rows.get(&row_key).cloned().unwrap_or(Value::Null);
                    (attribute.to_owned(), value)
                })
                .collect();
            Song::from(fields)
        })
        .collect()
}
