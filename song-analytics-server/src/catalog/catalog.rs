use super::{
    normalize, paginate, CatalogError, PageRequest, PageResult, RawDataset, Song, TitleIndex,
    AUDIO_FEATURES,
};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Read-only view over the normalized dataset.
///
/// Built once at startup and shared between request handlers; nothing in it
/// changes afterwards.
#[derive(Debug)]
pub struct SongCatalog {
    songs: Vec<Song>,
    attributes: Vec<String>,
    title_index: TitleIndex,
}

impl SongCatalog {
    pub fn from_raw(raw: RawDataset) -> SongCatalog {
        let attributes = raw.attributes().map(str::to_owned).collect();
        let songs = normalize(&raw);
        Self::with_attributes(songs, attributes)
    }

    pub fn from_songs(songs: Vec<Song>) -> SongCatalog {
        let attributes = songs
            .first()
            .map(|song| song.attributes().map(str::to_owned).collect())
            .unwrap_or_default();
        Self::with_attributes(songs, attributes)
    }

    fn with_attributes(songs: Vec<Song>, attributes: Vec<String>) -> SongCatalog {
        let title_index = TitleIndex::build(&songs);
        SongCatalog {
            songs,
            attributes,
            title_index,
        }
    }

    /// Looks for `data/playlist.json` below the working directory.
    pub fn infer_path() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::infer_path_in(&cwd)
    }

    fn infer_path_in(base: &Path) -> Option<PathBuf> {
        let candidates = [
            base.join("data").join("playlist.json"),
            base.join("song-analytics-server")
                .join("data")
                .join("playlist.json"),
        ];
        candidates.into_iter().find(|path| path.is_file())
    }

    pub fn get_all(&self) -> &[Song] {
        &self.songs
    }

    pub fn get_page(&self, request: PageRequest) -> PageResult<'_, Song> {
        paginate(&self.songs, request)
    }

    /// Exact title match, ignoring case and surrounding whitespace.
    pub fn get_by_title(&self, title: Option<&str>) -> Result<&Song, CatalogError> {
        let title = title.ok_or(CatalogError::MissingArgument("title"))?;
        if title.trim().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "title cannot be empty".to_owned(),
            ));
        }
        self.title_index
            .get(title)
            .and_then(|position| self.songs.get(position))
            .ok_or(CatalogError::NotFound)
    }

    pub fn get_songs_count(&self) -> usize {
        self.songs.len()
    }

    pub fn get_attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn get_indexed_titles_count(&self) -> usize {
        self.title_index.len()
    }

    pub fn get_shadowed_titles_count(&self) -> usize {
        self.title_index.shadowed()
    }

    /// Well-known audio-feature attributes the dataset does not provide.
    pub fn get_missing_audio_features(&self) -> Vec<&'static str> {
        AUDIO_FEATURES
            .iter()
            .copied()
            .filter(|feature| !self.attributes.iter().any(|a| a == feature))
            .collect()
    }

    /// Human readable summary printed by `--check-only`.
    pub fn check_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(
            report,
            "Dataset has:\n{} songs\n{} attributes\n{} indexed titles",
            self.get_songs_count(),
            self.attributes.len(),
            self.get_indexed_titles_count()
        );
        let _ = writeln!(report, "Attributes: {}", self.attributes.join(", "));

        let missing = self.get_missing_audio_features();
        if !missing.is_empty() {
            let _ = writeln!(report, "Missing audio features: {}", missing.join(", "));
        }

        let _ = match self.get_shadowed_titles_count() {
            0 => writeln!(report, "Dataset checked, no issues found."),
            shadowed => writeln!(
                report,
                "Dataset loaded, but {} songs are shadowed by a later song with the same title.",
                shadowed
            ),
        };
        report
    }

    #[cfg(test)]
    pub fn dummy() -> SongCatalog {
        let value = super::fixtures::columns_json(super::fixtures::FIXTURE_SONGS_COUNT);
        match RawDataset::from_value(value) {
            Ok(raw) => SongCatalog::from_raw(raw),
            Err(err) => panic!("Fixture dataset is malformed: {}", err),
        }
    }
}
