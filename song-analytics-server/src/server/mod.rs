pub mod config;
mod error;
mod http_layers;
pub mod metrics;
pub mod server;
mod songs;
pub mod state;

pub use config::ServerConfig;
pub use error::ErrorBody;
pub use http_layers::*;
pub(self) use songs::make_songs_routes;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
