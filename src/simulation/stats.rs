//! Running totals for a simulation run

use log::info;

use super::dispatcher::HallCallOutcome;
use super::error::DispatchError;

/// Counters collected while hall calls are served
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub hall_calls_issued: u32,
    /// Calls where at least one passenger boarded
    pub hall_calls_served: u32,
    /// Calls that got a car but every passenger was refused at the door
    pub hall_calls_refused: u32,
    pub invalid_floor_failures: u32,
    pub no_elevator_failures: u32,
    pub passengers_boarded: u32,
    pub passengers_left_behind: u32,
    pub passengers_delivered: u32,
    pub floors_travelled: u64,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the result of one hall call into the totals
    pub fn record(&mut self, result: &Result<HallCallOutcome, DispatchError>) {
        self.hall_calls_issued += 1;
        match result {
            Ok(outcome) => {
                if outcome.boarded.is_empty() {
                    self.hall_calls_refused += 1;
                } else {
                    self.hall_calls_served += 1;
                }
                self.passengers_boarded += outcome.boarded.len() as u32;
                self.passengers_left_behind += outcome.left_behind.len() as u32;
                self.passengers_delivered += outcome.delivered_count() as u32;
                self.floors_travelled += u64::from(outcome.floors_travelled());
            }
            Err(DispatchError::InvalidFloor { .. }) => self.invalid_floor_failures += 1,
            Err(DispatchError::NoAvailableElevator { .. }) => self.no_elevator_failures += 1,
            Err(_) => {}
        }
    }

    /// Add another run's totals to these
    pub fn merge(&mut self, other: &SimulationStats) {
        self.hall_calls_issued += other.hall_calls_issued;
        self.hall_calls_served += other.hall_calls_served;
        self.hall_calls_refused += other.hall_calls_refused;
        self.invalid_floor_failures += other.invalid_floor_failures;
        self.no_elevator_failures += other.no_elevator_failures;
        self.passengers_boarded += other.passengers_boarded;
        self.passengers_left_behind += other.passengers_left_behind;
        self.passengers_delivered += other.passengers_delivered;
        self.floors_travelled += other.floors_travelled;
    }

    /// Share of issued hall calls that were served, as a percentage
    pub fn success_rate(&self) -> f32 {
        if self.hall_calls_issued > 0 {
            (self.hall_calls_served as f32 / self.hall_calls_issued as f32) * 100.0
        } else {
            0.0
        }
    }

    /// Write the end-of-run report to the log
    pub fn log_report(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Hall calls issued: {}", self.hall_calls_issued);
        info!("Hall calls served: {}", self.hall_calls_served);
        info!("Hall calls refused: {}", self.hall_calls_refused);
        info!("Invalid floor failures: {}", self.invalid_floor_failures);
        info!("No elevator failures: {}", self.no_elevator_failures);
        info!("Passengers boarded: {}", self.passengers_boarded);
        info!("Passengers left behind: {}", self.passengers_left_behind);
        info!("Passengers delivered: {}", self.passengers_delivered);
        info!("Floors travelled: {}", self.floors_travelled);
        info!("Success rate: {:.1}%", self.success_rate());
    }
}
