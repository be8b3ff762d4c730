//! Fleet dispatcher
//!
//! Owns every elevator in the fleet. Selection (`request_elevator`) only
//! reads fleet state and hands back an `ElevatorId`; all mutation goes
//! through the id-addressed operations below.

use log::debug;

use super::config::{default_fleet, ElevatorConfig};
use super::elevator::{Elevator, TripReport};
use super::error::DispatchError;
use super::passenger::{total_passenger_weight, Passenger};
use super::types::{ElevatorId, Floor, Weight};

/// Result of serving one hall call end to end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallCallOutcome {
    pub elevator: ElevatorId,
    /// Passengers that made it on board
    pub boarded: Vec<Passenger>,
    /// Passengers refused at the door (access policy or capacity)
    pub left_behind: Vec<Passenger>,
    /// Movement from the car's previous floor to the hall call floor
    pub pickup: TripReport,
    /// LOOK run after boarding
    pub delivery: TripReport,
}

impl HallCallOutcome {
    pub fn floors_travelled(&self) -> u32 {
        self.pickup.floors_travelled + self.delivery.floors_travelled
    }

    pub fn delivered_count(&self) -> usize {
        self.pickup.delivered.len() + self.delivery.delivered.len()
    }
}

/// The fleet controller
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Fleet order; the first car supplies the reference floor bound
    elevators: Vec<Elevator>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            elevators: default_fleet().into_iter().map(Elevator::new).collect(),
        }
    }
}

impl Dispatcher {
    /// Build a fleet from an explicit roster, in the given order
    pub fn new(configs: Vec<ElevatorConfig>) -> Result<Self, DispatchError> {
        if configs.is_empty() {
            return Err(DispatchError::EmptyFleet);
        }

        for (index, config) in configs.iter().enumerate() {
            if configs[..index].iter().any(|c| c.id == config.id) {
                return Err(DispatchError::DuplicateElevatorId(config.id));
            }
        }

        Ok(Self {
            elevators: configs.into_iter().map(Elevator::new).collect(),
        })
    }

    /// The upper floor bound every hall call is validated against
    ///
    /// This is always the first elevator's `max_floors`, even for cars with a
    /// shorter shaft.
    pub fn reference_floor_bound(&self) -> Floor {
        self.elevators
            .first()
            .map(Elevator::max_floors)
            .unwrap_or_default()
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Result<&Elevator, DispatchError> {
        self.elevators
            .iter()
            .find(|e| e.id() == id)
            .ok_or(DispatchError::UnknownElevator(id))
    }

    fn elevator_mut(&mut self, id: ElevatorId) -> Result<&mut Elevator, DispatchError> {
        self.elevators
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(DispatchError::UnknownElevator(id))
    }

    /// Sum the weights of a waiting group
    pub fn total_passenger_weight(passengers: &[Passenger]) -> Weight {
        total_passenger_weight(passengers)
    }

    /// Pick the nearest elevator that can take the whole group
    ///
    /// Cars are ranked by distance to `floor`; ties keep fleet order. The first
    /// car whose remaining weight and headcount fit the group wins. Nothing is
    /// moved or boarded.
    pub fn request_elevator(
        &self,
        floor: Floor,
        passengers: &[Passenger],
    ) -> Result<ElevatorId, DispatchError> {
        let bound = self.reference_floor_bound();
        if floor < 0 || floor > bound {
            return Err(DispatchError::InvalidFloor { floor, bound });
        }

        let mut ranked: Vec<(u32, &Elevator)> = self
            .elevators
            .iter()
            .map(|e| (e.current_floor().abs_diff(floor), e))
            .collect();
        // sort_by_key is stable
        ranked.sort_by_key(|(distance, _)| *distance);

        let chosen = ranked
            .into_iter()
            .find(|(_, e)| e.can_accommodate(passengers))
            .map(|(distance, e)| (distance, e.id()));

        match chosen {
            Some((distance, id)) => {
                debug!(
                    "Hall call at floor {} ({} passenger(s)) -> elevator {} at distance {}",
                    floor,
                    passengers.len(),
                    id,
                    distance
                );
                Ok(id)
            }
            None => Err(DispatchError::NoAvailableElevator { floor }),
        }
    }

    /// Board one passenger on the given elevator
    pub fn add_passenger(
        &mut self,
        id: ElevatorId,
        passenger: Passenger,
    ) -> Result<bool, DispatchError> {
        Ok(self.elevator_mut(id)?.add_passenger(passenger))
    }

    pub fn move_to_floor(
        &mut self,
        id: ElevatorId,
        target: Floor,
    ) -> Result<Vec<Passenger>, DispatchError> {
        Ok(self.elevator_mut(id)?.move_to_floor(target))
    }

    pub fn move_look(&mut self, id: ElevatorId, target: Floor) -> Result<TripReport, DispatchError> {
        Ok(self.elevator_mut(id)?.move_look(target))
    }

    /// Serve a hall call as one transaction
    ///
    /// Selects a car, brings it straight to `floor`, boards the group in
    /// order and then runs LOOK towards the first boarded passenger's
    /// destination, which also serves everyone else on board.
    pub fn dispatch_hall_call(
        &mut self,
        floor: Floor,
        passengers: &[Passenger],
    ) -> Result<HallCallOutcome, DispatchError> {
        let id = self.request_elevator(floor, passengers)?;
        let elevator = self.elevator_mut(id)?;

        let pickup = elevator.approach(floor);

        let (boarded, left_behind): (Vec<Passenger>, Vec<Passenger>) = passengers
            .iter()
            .copied()
            .partition(|p| elevator.add_passenger(*p));

        let delivery = match boarded.first() {
            Some(first) => elevator.move_look(first.destination_floor()),
            None => TripReport::default(),
        };

        debug!(
            "Elevator {} served floor {}: {} boarded, {} left behind, now at floor {}",
            id,
            floor,
            boarded.len(),
            left_behind.len(),
            elevator.current_floor()
        );

        Ok(HallCallOutcome {
            elevator: id,
            boarded,
            left_behind,
            pickup,
            delivery,
        })
    }
}
