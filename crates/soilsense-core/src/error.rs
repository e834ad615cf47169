use thiserror::Error;

/// Errors raised by the dashboard core.
///
/// None of these are fatal: chat and capture errors are absorbed by the UI,
/// and config errors fall back to defaults at the binary edge.
#[derive(Debug, Error)]
pub enum Error {
    /// Voice capture requested but no recognizer is available.
    #[error("voice recognition is not supported")]
    UnsupportedCapability,

    /// Draft was blank after trimming.
    #[error("draft is empty")]
    EmptyInput,

    /// A language code with no speech locale. Treated as a configuration defect.
    #[error("no speech locale mapped for language code '{0}'")]
    UnmappedLanguage(String),

    /// A capture session is already running.
    #[error("a capture session is already active")]
    CaptureBusy,

    /// Failure reported by the speech recognizer.
    #[error("capture error: {0}")]
    Capture(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
