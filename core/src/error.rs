use crate::types::{PlayerId, UnitId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Execution '{name}' ticked before init()")]
    ExecutionNotInitialized { name: &'static str },

    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Unknown unit: {0}")]
    UnknownUnit(UnitId),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GameResult<T> = Result<T, GameError>;
