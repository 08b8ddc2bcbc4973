use alloc::string::String;
use thiserror::Error;

use crate::{ButtonId, LevelId};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Level {0} is not registered")]
    UnknownLevel(LevelId),
    #[error("Level {0} has no button {1}")]
    UnknownButton(LevelId, ButtonId),
    #[error("Level {0} is still locked")]
    LevelLocked(LevelId),
    #[error("Level {0} is not complete yet")]
    NotComplete(LevelId),
    #[error("Input is locked, no new presses are accepted")]
    InputLocked,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure reported by a [`crate::ProgressStore`] backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("progress storage failed: {reason}")]
pub struct StoreError {
    reason: String,
}

impl StoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
