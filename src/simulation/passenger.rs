//! Passengers riding the fleet

use super::types::{Floor, Weight};

/// A waiting or riding passenger. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    weight: Weight,
    destination_floor: Floor,
}

impl Passenger {
    pub fn new(weight: Weight, destination_floor: Floor) -> Self {
        Self {
            weight,
            destination_floor,
        }
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn destination_floor(&self) -> Floor {
        self.destination_floor
    }
}

/// Sum the weights of a group of passengers
///
/// Returns `None` if the sum does not fit in a `Weight`.
pub fn checked_total_weight(passengers: &[Passenger]) -> Option<Weight> {
    passengers
        .iter()
        .try_fold(0 as Weight, |total, p| total.checked_add(p.weight))
}

/// Sum the weights of a group of passengers, saturating at `Weight::MAX`
pub fn total_passenger_weight(passengers: &[Passenger]) -> Weight {
    checked_total_weight(passengers).unwrap_or(Weight::MAX)
}
