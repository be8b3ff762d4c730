//! Elevator fleet simulation
//!
//! This module contains the dispatch and motion logic for the fleet. It has
//! no I/O of its own and can be driven from tests, the headless binary, or
//! the threaded dispatch service.

mod config;
mod dispatcher;
mod elevator;
mod error;
mod passenger;
mod service;
mod stats;
mod types;
mod world;

pub use config::{
    default_fleet, ElevatorConfig, ScenarioConfig, DEFAULT_MAX_GROUP,
    DEFAULT_MAX_PASSENGER_WEIGHT, DEFAULT_MIN_PASSENGER_WEIGHT,
};
pub use dispatcher::{Dispatcher, HallCallOutcome};
pub use elevator::{Elevator, TripReport, LOWEST_FLOOR};
pub use error::DispatchError;
pub use passenger::{checked_total_weight, total_passenger_weight, Passenger};
pub use service::{DispatchHandle, DispatchService};
pub use stats::SimulationStats;
pub use types::{AccessPolicy, Direction, ElevatorId, Floor, Weight};
pub use world::{HallCallGenerator, SimWorld};
