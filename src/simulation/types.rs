//! Core types for the elevator simulation

/// A floor number. Requests may name negative floors, which dispatch rejects.
pub type Floor = i32;

/// Passenger and load weight in kilograms
pub type Weight = u32;

/// A unique identifier for an elevator in the fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElevatorId(pub usize);

impl std::fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction chosen for a single LOOK step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    /// No onboard destination differs from the current floor
    Idle,
}

/// Which current floors permit boarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    #[default]
    Unrestricted,
    /// Boarding is refused while stopped at an even floor
    OddFloorOnly,
    /// Boarding is refused while stopped at an odd floor
    EvenFloorOnly,
}

impl AccessPolicy {
    /// Check whether passengers may board while the car is at `floor`
    pub fn allows_boarding_at(&self, floor: Floor) -> bool {
        let odd = floor.rem_euclid(2) == 1;
        match self {
            AccessPolicy::Unrestricted => true,
            AccessPolicy::OddFloorOnly => odd,
            AccessPolicy::EvenFloorOnly => !odd,
        }
    }
}
