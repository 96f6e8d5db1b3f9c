use thiserror::Error;

use crate::curriculum_engine::models::{Level, OperationKind};

/// Errors surfaced by the engine.
///
/// Exhausted rejection sampling is not an error: such problems come back with
/// [`Problem::degraded`](crate::curriculum_engine::models::Problem::degraded) set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("operation {operation} is not defined for level {level}")]
    InvalidLevelForOperation { level: Level, operation: OperationKind },

    #[error("worksheet {worksheet} is outside level {level} (1..={max})")]
    WorksheetOutOfRange { level: Level, worksheet: u32, max: u32 },

    #[error("no bucket covers worksheet {worksheet} in the {operation} table for level {level}")]
    ConfigurationGap { level: Level, operation: OperationKind, worksheet: u32 },

    #[error("unknown level: {0}")]
    UnknownLevel(String),

    #[error("unknown concept: {0}")]
    UnknownConcept(String),

    #[error("unknown subtype: {0}")]
    UnknownSubtype(String),

    #[error("invalid settings: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
