use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("level {requested} is outside 1..={max}")]
    LevelOutOfRange { requested: u32, max: u32 },

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Serde(#[from] serde_json::Error),
}
