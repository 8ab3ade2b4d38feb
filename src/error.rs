use thiserror::Error;

/// Result type alias for scheduler operations.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Scheduler errors
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("{field} out of range: {value} (limit {limit})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        limit: u64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Worker failed: {0}")]
    Worker(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchedulerError {
    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAlgorithm(_) | Self::MalformedInput(_) | Self::OutOfRange { .. }
        )
    }

    /// Short label used for rejection counters
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidAlgorithm(_) => "invalid_algorithm",
            Self::MalformedInput(_) => "malformed_input",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Config(_) => "config",
            Self::Worker(_) => "worker",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}
