// Time-boxed negamax chess bot
pub mod board;
pub mod bots;
pub mod config;
pub mod error;
pub mod search;
pub mod uci;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
