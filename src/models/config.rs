//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Keys the flash message cookies; at least 64 bytes.
    pub secret: String,
    /// JSON record set to serve instead of the bundled one.
    #[serde(default)]
    pub dataset_path: Option<String>,
}
