use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The root position has no legal moves but was handed to the engine anyway.
    #[error("position has no legal moves")]
    NoLegalMoves,
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("FEN error: {0}")]
    Fen(String),
    #[error("invalid engine config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
