use thiserror::Error;

/// Text returned in place of a description when the engine had to recover from a fault.
pub const RECOVERED_MESSAGE: &str = "生成日志信息从崩溃中恢复，不记录差异";

/// Errors the engine can hand back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// Bad caller input: a non-record instance or a malformed schema definition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Anything unexpected while resolving, rendering or transforming,
    /// panics included. Displays the recovery text followed by the detail.
    #[error("{recovered}: {0}", recovered = RECOVERED_MESSAGE)]
    InternalFault(String),
}

impl LogError {
    /// Shorthand for transformers that fail.
    pub fn fault(msg: impl Into<String>) -> Self {
        LogError::InternalFault(msg.into())
    }
}

impl From<serde_json::Error> for LogError {
    fn from(e: serde_json::Error) -> Self {
        LogError::fault(format!("value serialization failed: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
