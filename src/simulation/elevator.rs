//! Elevator car state and LOOK movement
//!
//! An elevator only changes state through boarding and floor transitions.
//! Passengers leave the manifest when the car arrives at their destination.

use log::{debug, warn};

use super::config::ElevatorConfig;
use super::passenger::{checked_total_weight, Passenger};
use super::types::{AccessPolicy, Direction, ElevatorId, Floor, Weight};

/// Lowest floor any car can reach
pub const LOWEST_FLOOR: Floor = 0;

/// Summary of one LOOK run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripReport {
    /// Number of single-floor transitions made
    pub floors_travelled: u32,
    /// Passengers dropped off during the run, in drop-off order
    pub delivered: Vec<Passenger>,
}

impl TripReport {
    fn record_step(&mut self, delivered: Vec<Passenger>) {
        self.floors_travelled += 1;
        self.delivered.extend(delivered);
    }
}

/// A single elevator car
#[derive(Debug, Clone)]
pub struct Elevator {
    config: ElevatorConfig,
    current_floor: Floor,
    /// Always the sum of the manifest's weights
    current_weight: Weight,
    manifest: Vec<Passenger>,
}

impl Elevator {
    /// Create an empty car parked at the lowest floor
    pub fn new(config: ElevatorConfig) -> Self {
        Self {
            config,
            current_floor: LOWEST_FLOOR,
            current_weight: 0,
            manifest: Vec::new(),
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.config.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn current_weight(&self) -> Weight {
        self.current_weight
    }

    pub fn max_floors(&self) -> Floor {
        self.config.max_floors
    }

    pub fn max_weight(&self) -> Weight {
        self.config.max_weight
    }

    pub fn max_passengers(&self) -> usize {
        self.config.max_passengers
    }

    pub fn access_policy(&self) -> AccessPolicy {
        self.config.access_policy
    }

    /// Passengers on board, in boarding order
    pub fn manifest(&self) -> &[Passenger] {
        &self.manifest
    }

    pub fn passenger_count(&self) -> usize {
        self.manifest.len()
    }

    /// Move directly to `target` and drop off everyone bound for it
    ///
    /// Moving to the floor the car is already on does nothing, even if a
    /// passenger's destination is that floor. Returns the passengers dropped off.
    pub fn move_to_floor(&mut self, target: Floor) -> Vec<Passenger> {
        if target == self.current_floor {
            return Vec::new();
        }
        if target < LOWEST_FLOOR {
            warn!(
                "Elevator {} refused to move below floor {} (target {})",
                self.config.id, LOWEST_FLOOR, target
            );
            return Vec::new();
        }

        self.current_floor = target;

        let mut delivered = Vec::new();
        self.manifest.retain(|passenger| {
            if passenger.destination_floor() == target {
                delivered.push(*passenger);
                false
            } else {
                true
            }
        });

        for passenger in &delivered {
            self.current_weight -= passenger.weight();
        }

        if !delivered.is_empty() {
            debug!(
                "Elevator {} dropped off {} passenger(s) at floor {}",
                self.config.id,
                delivered.len(),
                target
            );
        }

        delivered
    }

    /// Check whether `passengers` fit alongside the current load
    ///
    /// Both the combined weight and the combined headcount must stay within
    /// this car's limits. Sums that overflow never fit.
    pub fn can_accommodate(&self, passengers: &[Passenger]) -> bool {
        let weight_fits = checked_total_weight(passengers)
            .and_then(|extra| self.current_weight.checked_add(extra))
            .is_some_and(|total| total <= self.config.max_weight);

        let count_fits = self
            .manifest
            .len()
            .checked_add(passengers.len())
            .is_some_and(|total| total <= self.config.max_passengers);

        weight_fits && count_fits
    }

    /// Board one passenger at the current floor
    ///
    /// Returns false, leaving the car untouched, when the access policy forbids
    /// boarding here or the passenger would exceed the weight or headcount limit.
    pub fn add_passenger(&mut self, passenger: Passenger) -> bool {
        if !self.config.access_policy.allows_boarding_at(self.current_floor) {
            debug!(
                "Elevator {} ({:?}) cannot board at floor {}",
                self.config.id, self.config.access_policy, self.current_floor
            );
            return false;
        }

        if !self.can_accommodate(std::slice::from_ref(&passenger)) {
            debug!(
                "Elevator {} is full: {} aboard, {}/{} kg, refused {} kg passenger",
                self.config.id,
                self.manifest.len(),
                self.current_weight,
                self.config.max_weight,
                passenger.weight()
            );
            return false;
        }

        self.current_weight += passenger.weight();
        self.manifest.push(passenger);
        true
    }

    /// Decide where the next residual-service step goes
    ///
    /// Up wins whenever any reachable destination lies above the car, so the
    /// car exhausts upward stops before reversing.
    pub fn next_direction(&self) -> Direction {
        let mut below = false;
        for destination in self
            .manifest
            .iter()
            .map(|p| p.destination_floor())
            .filter(|&d| d >= LOWEST_FLOOR)
        {
            if destination > self.current_floor {
                return Direction::Up;
            }
            if destination < self.current_floor {
                below = true;
            }
        }

        if below {
            Direction::Down
        } else {
            Direction::Idle
        }
    }

    /// Step one floor at a time to `target`, dropping passengers off on the way
    pub fn approach(&mut self, target: Floor) -> TripReport {
        let target = target.max(LOWEST_FLOOR);
        let mut report = TripReport::default();

        while self.current_floor != target {
            let next = if target > self.current_floor {
                self.current_floor + 1
            } else {
                self.current_floor - 1
            };
            report.record_step(self.move_to_floor(next));
        }

        report
    }

    /// LOOK movement: travel to `target`, then keep serving onboard destinations
    ///
    /// Once at `target` the car keeps stepping towards remaining destinations
    /// (above first, then below) until none differ from the current floor.
    pub fn move_look(&mut self, target: Floor) -> TripReport {
        let mut report = self.approach(target);

        loop {
            let next = match self.next_direction() {
                Direction::Up => self.current_floor + 1,
                Direction::Down => self.current_floor - 1,
                Direction::Idle => break,
            };
            report.record_step(self.move_to_floor(next));
        }

        debug!(
            "Elevator {} finished LOOK run at floor {} after {} floor(s), {} delivered",
            self.config.id,
            self.current_floor,
            report.floors_travelled,
            report.delivered.len()
        );

        report
    }
}
