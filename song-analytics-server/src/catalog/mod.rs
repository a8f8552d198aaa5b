mod catalog;
mod error;
#[cfg(test)]
pub(crate) mod fixtures;
mod index;
mod load;
mod normalize;
mod paginate;
mod raw;
mod song;

pub use catalog::SongCatalog;
pub use error::CatalogError;
pub use index::{normalize_title, TitleIndex};
pub use load::load_catalog;
pub use normalize::normalize;
pub use paginate::{paginate, PageRequest, PageResult, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use raw::RawDataset;
pub use song::{Song, AUDIO_FEATURES};
