use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("Error loading model from {path}: {message}")]
    ModelLoad { path: String, message: String },

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Filesystem error: {path}: {message}")]
    Fs { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("A response is still being generated")]
    Busy,
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
