//! Fleet and scenario configuration
//!
//! The default roster mirrors the building the simulator was first written
//! for. Callers can pass their own roster to `Dispatcher::new`.

use super::types::{AccessPolicy, ElevatorId, Floor, Weight};

/// Default number of passengers in one randomly generated hall call (upper bound)
pub const DEFAULT_MAX_GROUP: usize = 4;

/// Lightest generated passenger
pub const DEFAULT_MIN_PASSENGER_WEIGHT: Weight = 45;

/// Heaviest generated passenger
pub const DEFAULT_MAX_PASSENGER_WEIGHT: Weight = 120;

/// Fixed configuration of one elevator car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorConfig {
    pub id: ElevatorId,
    pub max_floors: Floor,
    pub max_weight: Weight,
    pub max_passengers: usize,
    pub access_policy: AccessPolicy,
}

impl ElevatorConfig {
    pub fn new(
        id: usize,
        max_floors: Floor,
        max_weight: Weight,
        max_passengers: usize,
        access_policy: AccessPolicy,
    ) -> Self {
        Self {
            id: ElevatorId(id),
            max_floors,
            max_weight,
            max_passengers,
            access_policy,
        }
    }
}

/// The four-car default roster
///
/// The legacy roster carried an "odd only" flag on cars 2 and 4, but boarding
/// was actually gated on car identity: car 2 boards on odd floors, car 3 on
/// even floors, cars 1 and 4 anywhere. The policies below reproduce the
/// enforced behaviour. The flag on car 4 never had any effect and looks like a
/// latent defect in the old roster.
pub fn default_fleet() -> Vec<ElevatorConfig> {
    vec![
        ElevatorConfig::new(1, 20, 800, 10, AccessPolicy::Unrestricted),
        ElevatorConfig::new(2, 10, 800, 10, AccessPolicy::OddFloorOnly),
        ElevatorConfig::new(3, 10, 800, 10, AccessPolicy::EvenFloorOnly),
        ElevatorConfig::new(4, 20, 2000, 20, AccessPolicy::Unrestricted),
    ]
}

/// Parameters for randomly generated hall calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Largest group waiting behind one hall call
    pub max_group: usize,
    pub min_passenger_weight: Weight,
    pub max_passenger_weight: Weight,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            max_group: DEFAULT_MAX_GROUP,
            min_passenger_weight: DEFAULT_MIN_PASSENGER_WEIGHT,
            max_passenger_weight: DEFAULT_MAX_PASSENGER_WEIGHT,
        }
    }
}
