use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid argument for {0}: {1}")]
    InvalidArgument(String, String),
    #[error("Sell fee is estimated from the buy fee; turn matching off to edit it")]
    SellFeeLocked,
    #[error("Feedback form is closed; open it first")]
    FeedbackClosed,
    #[error("Unknown feedback option: {0}")]
    UnknownFeedbackOption(usize),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True for mistakes in a command line; the shell reports those and
    /// keeps reading.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_) | AppError::Json(_))
    }
}
