#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Wrong argument count for prefer: expected 1, got {0}")]
    ArgumentCount(usize),

    #[error("invalid ip version preference: {0}, must be 'ipv4' or 'ipv6'")]
    InvalidPreference(String),
}
