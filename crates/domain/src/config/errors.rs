#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Failed to parse config {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
