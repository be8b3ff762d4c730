//! Elevator Fleet Simulation Library
//!
//! Dispatch and LOOK-style motion control for a small fleet of elevators,
//! runnable headless from the command line or driven directly from code.

pub mod simulation;
