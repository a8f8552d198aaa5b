//! Dataset loading, performed once before the server accepts requests.

use super::{RawDataset, SongCatalog};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<SongCatalog> {
    let path = path.as_ref();
    info!("Loading dataset from {}...", path.display());

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {:?}", path))?;
    let raw = RawDataset::from_json_str(&text)
        .with_context(|| format!("Could not load dataset {:?}", path))?;
    let catalog = SongCatalog::from_raw(raw);

    info!(
        "Dataset has:\n{} songs\n{} attributes\n{} indexed titles",
        catalog.get_songs_count(),
        catalog.get_attributes().len(),
        catalog.get_indexed_titles_count()
    );
    if catalog.get_shadowed_titles_count() > 0 {
        warn!(
            "{} songs share a title with a later song and cannot be found by title.",
            catalog.get_shadowed_titles_count()
        );
    }

    Ok(catalog)
}
