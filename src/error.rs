use thiserror::Error;

/// Errors that can occur at the edges of the printing pipeline.
///
/// Parsing and rendering are infallible by design; this type only shows up
/// around fetching, configuration and transport I/O.
#[derive(Error, Debug)]
pub enum PrintError {
    /// Failed to fetch a page over HTTP
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Failed to write to a printer transport
    #[error("Transport write failed: {0}")]
    Transport(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Request-level validation: nothing to print
    #[error("Nothing to print: {0}")]
    EmptyInput(String),
}
