use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcError {
    #[error("Invalid complaint: {0}")]
    InvalidComplaint(String),
    #[error("Generator error: {0}")]
    Generator(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GcError>;
