//! Dispatch failures

use thiserror::Error;

use super::types::{ElevatorId, Floor};

/// Errors reported by the fleet dispatcher
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Requested floor lies outside `[0, bound]`
    #[error("invalid floor {floor}: requests must lie within 0..={bound}")]
    InvalidFloor { floor: Floor, bound: Floor },

    /// Every elevator fails the combined weight and headcount test
    #[error("no available elevator can take the hall call at floor {floor}")]
    NoAvailableElevator { floor: Floor },

    #[error("unknown elevator {0}")]
    UnknownElevator(ElevatorId),

    #[error("a fleet needs at least one elevator")]
    EmptyFleet,

    #[error("elevator id {0} is configured more than once")]
    DuplicateElevatorId(ElevatorId),
}
