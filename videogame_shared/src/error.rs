use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Failed to load the application configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
