use super::RequestsLoggingLevel;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: String,
    pub port: u16,
    /// Port of the Prometheus scraping listener, `None` disables it.
    pub metrics_port: Option<u16>,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: "127.0.0.1".to_owned(),
            port: 5000,
            metrics_port: Some(9091),
            content_cache_age_sec: 3600,
            frontend_dir_path: None,
        }
    }
}
