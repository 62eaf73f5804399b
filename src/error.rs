//! Error types for board, plan-book and session operations.
//!
//! None of these are fatal: every variant maps to a toast or dialog and
//! leaves the board usable.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Resource '{0}' is not available")]
    ResourceUnavailable(String),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Order '{0}' is not in the queue")]
    UnknownOrder(String),

    #[error("Unknown slot: {0}")]
    UnknownSlot(String),

    #[error("Resource '{resource_id}' is already occupied at {hour:02}:00 by {conflicting:?}")]
    SlotConflict {
        resource_id: String,
        hour: u32,
        conflicting: Vec<String>,
    },

    #[error("Hour {hour} is outside working hours {start:02}:00-{end:02}:00")]
    OutsideWorkingHours { hour: u32, start: u32, end: u32 },

    #[error(transparent)]
    Validation(#[from] AllocationError),

    #[error("No plan is open for {0}")]
    DayNotOpen(NaiveDate),

    #[error("A plan already exists for {0}")]
    PlanAlreadyExists(NaiveDate),

    #[error("Nothing is being dragged")]
    NoDragPayload,
}

/// Allocation input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("Select a driver")]
    MissingDriver,

    #[error("Select a truck")]
    MissingTruck,
}

/// Errors raised while loading [`BoardConfig`](crate::config::BoardConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
