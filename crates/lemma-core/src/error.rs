/// Core error types for the Lemma toolkit.

/// A specialized Result type for Lemma operations.
pub type LemmaResult<T> = Result<T, LemmaError>;

/// Top-level error type encompassing all Lemma subsystems.
#[derive(Debug, thiserror::Error)]
pub enum LemmaError {
    #[error("script validation error: {0}")]
    ScriptValidation(String),

    #[error("unknown scene: {0}")]
    UnknownScene(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl LemmaError {
    /// Create a script validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        LemmaError::ScriptValidation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = LemmaError::validation("wait duration must be positive");
        assert_eq!(
            err.to_string(),
            "script validation error: wait duration must be positive"
        );
    }

    #[test]
    fn test_unknown_scene_display() {
        let err = LemmaError::UnknownScene("no-such-scene".into());
        assert!(err.to_string().contains("no-such-scene"));
    }
}
