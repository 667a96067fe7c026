//! Startup error type
//!
//! Only startup can fail recoverably-enough to report: reading the config
//! file and reserving the entity pool. Everything after that is total, or
//! (pool exhaustion) a bug that panics.

use std::collections::TryReserveError;

#[derive(Debug)]
pub enum GameError {
    IoError(std::io::Error),
    ConfigParseError(ron::error::SpannedError),
    /// Reserving backing storage for the entity pool failed
    OutOfMemory(TryReserveError),
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for GameError {
    fn from(e: ron::error::SpannedError) -> Self {
        GameError::ConfigParseError(e)
    }
}

impl From<TryReserveError> for GameError {
    fn from(e: TryReserveError) -> Self {
        GameError::OutOfMemory(e)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IoError(e) => write!(f, "IO error: {}", e),
            GameError::ConfigParseError(e) => write!(f, "Config parse error: {}", e),
            GameError::OutOfMemory(e) => write!(f, "Memory allocation failed: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(e) => Some(e),
            GameError::ConfigParseError(e) => Some(e),
            GameError::OutOfMemory(e) => Some(e),
        }
    }
}
