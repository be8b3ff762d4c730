//! Main simulation world that ties everything together
//!
//! Generates random hall calls and feeds them to a dispatcher, keeping
//! running statistics. This is what the headless binary drives.

use anyhow::{bail, Result};
use log::warn;
use rand::distr::uniform::{SampleRange, SampleUniform};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::config::ScenarioConfig;
use super::dispatcher::{Dispatcher, HallCallOutcome};
use super::error::DispatchError;
use super::passenger::Passenger;
use super::stats::SimulationStats;
use super::types::Floor;

/// Produces random hall calls within a floor bound
#[derive(Debug, Clone)]
pub struct HallCallGenerator {
    scenario: ScenarioConfig,
    /// Highest floor a generated call may name
    bound: Floor,
    /// Optional seeded RNG for reproducible runs
    rng: Option<StdRng>,
}

impl HallCallGenerator {
    /// Create a generator for floors `0..=bound`
    ///
    /// Fails when `bound` leaves fewer than two floors, since no passenger
    /// could then travel anywhere and would ride forever.
    pub fn new(scenario: ScenarioConfig, bound: Floor, seed: Option<u64>) -> Result<Self> {
        if bound < 1 {
            bail!("hall calls need at least two floors, got floor bound {}", bound);
        }
        Ok(Self {
            scenario,
            bound,
            rng: seed.map(StdRng::seed_from_u64),
        })
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Pick a destination different from `origin`
    fn random_destination(&mut self, origin: Floor) -> Floor {
        let floor = self.random_range(0..self.bound);
        if floor >= origin {
            floor + 1
        } else {
            floor
        }
    }

    /// Generate the next hall call: origin floor and the waiting group
    pub fn next_call(&mut self) -> (Floor, Vec<Passenger>) {
        let origin = self.random_range(0..=self.bound);
        let group_size = self.random_range(1..=self.scenario.max_group.max(1));

        let min_weight = self.scenario.min_passenger_weight;
        let max_weight = self.scenario.max_passenger_weight.max(min_weight);

        let mut passengers = Vec::with_capacity(group_size);
        for _ in 0..group_size {
            let weight = self.random_range(min_weight..=max_weight);
            let destination = self.random_destination(origin);
            passengers.push(Passenger::new(weight, destination));
        }

        (origin, passengers)
    }
}

/// The main simulation world
pub struct SimWorld {
    /// Fleet under simulation
    pub dispatcher: Dispatcher,

    /// Source of hall calls
    generator: HallCallGenerator,

    /// Totals for the run so far
    pub stats: SimulationStats,

    /// Number of hall calls issued so far
    pub time: u32,
}

impl SimWorld {
    fn new_internal(
        dispatcher: Dispatcher,
        scenario: ScenarioConfig,
        seed: Option<u64>,
    ) -> Result<Self> {
        let bound = dispatcher.reference_floor_bound();
        Ok(Self {
            dispatcher,
            generator: HallCallGenerator::new(scenario, bound, seed)?,
            stats: SimulationStats::new(),
            time: 0,
        })
    }

    pub fn new(dispatcher: Dispatcher, scenario: ScenarioConfig) -> Result<Self> {
        Self::new_internal(dispatcher, scenario, None)
    }

    /// Create a new SimWorld with a seeded RNG for reproducible simulations
    pub fn new_with_seed(
        dispatcher: Dispatcher,
        scenario: ScenarioConfig,
        seed: u64,
    ) -> Result<Self> {
        Self::new_internal(dispatcher, scenario, Some(seed))
    }

    /// Issue one random hall call and serve it
    pub fn tick(&mut self) -> Result<HallCallOutcome, DispatchError> {
        self.time += 1;

        let (floor, passengers) = self.generator.next_call();
        let result = self.dispatcher.dispatch_hall_call(floor, &passengers);

        if let Err(err) = &result {
            warn!("Hall call {} at floor {} failed: {}", self.time, floor, err);
        }

        self.stats.record(&result);
        result
    }

    /// Issue `calls` hall calls back to back
    pub fn run(&mut self, calls: u32) {
        for _ in 0..calls {
            let _ = self.tick();
        }
    }

    /// Print a summary of the fleet state
    pub fn print_summary(&self) {
        println!("=== Elevator Fleet Summary ===");
        println!("Hall calls: {}", self.time);
        println!(
            "Reference floor bound: {}",
            self.dispatcher.reference_floor_bound()
        );
        println!();

        println!("--- Elevators ---");
        for elevator in self.dispatcher.elevators() {
            println!(
                "  Elevator {}: floor={}, passengers={}/{}, load={}/{} kg, access={:?}",
                elevator.id(),
                elevator.current_floor(),
                elevator.passenger_count(),
                elevator.max_passengers(),
                elevator.current_weight(),
                elevator.max_weight(),
                elevator.access_policy()
            );
        }

        println!("--- Totals ---");
        println!(
            "  Served: {}/{} ({:.1}%)",
            self.stats.hall_calls_served,
            self.stats.hall_calls_issued,
            self.stats.success_rate()
        );
        println!("  Refused at the door: {}", self.stats.hall_calls_refused);
        println!(
            "  Failed: {} invalid floor, {} no elevator",
            self.stats.invalid_floor_failures, self.stats.no_elevator_failures
        );
        println!(
            "  Boarded: {}, left behind: {}, delivered: {}",
            self.stats.passengers_boarded,
            self.stats.passengers_left_behind,
            self.stats.passengers_delivered
        );
        println!("  Floors travelled: {}", self.stats.floors_travelled);
    }
}
