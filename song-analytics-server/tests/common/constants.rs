//! Shared constants for end-to-end tests
//!
//! When the fixture dataset changes, update only this file.

/// Number of songs in the fixture dataset
pub const SONGS_COUNT: usize = 25;

/// Default page size applied by the server
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Title of the song at row 0
pub const SONG_1_TITLE: &str = "3AM";

/// Id of the song at row 0
pub const SONG_1_ID: &str = "5vYA1mW9g2Coh1HUFUSmlb";

/// Title shared by rows 3 and 7, row 7 wins title lookups
pub const DUPLICATE_TITLE: &str = "Echoes";

/// Id of the song at row 7
pub const DUPLICATE_WINNER_ID: &str = "song-7";

/// Maximum time to wait for server to be ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between server ready checks (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Request timeout for test HTTP client (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
