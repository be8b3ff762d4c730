//! Elevator car behaviour: boarding limits, access policies and LOOK movement

use elevator_sim::simulation::{
    AccessPolicy, Direction, Elevator, ElevatorConfig, ElevatorId, Passenger, LOWEST_FLOOR,
};

fn elevator_with(policy: AccessPolicy) -> Elevator {
    Elevator::new(ElevatorConfig::new(1, 20, 800, 10, policy))
}

fn destinations(passengers: &[Passenger]) -> Vec<i32> {
    passengers.iter().map(|p| p.destination_floor()).collect()
}

#[test]
fn test_passenger_fields() {
    let passenger = Passenger::new(70, 5);
    assert_eq!(passenger.weight(), 70);
    assert_eq!(passenger.destination_floor(), 5);
}

#[test]
fn test_new_elevator_starts_empty_at_ground() {
    let elevator = elevator_with(AccessPolicy::Unrestricted);
    assert_eq!(elevator.current_floor(), LOWEST_FLOOR);
    assert_eq!(elevator.current_weight(), 0);
    assert!(elevator.manifest().is_empty());
}

#[test]
fn test_limits_come_from_configuration() {
    let elevator = Elevator::new(ElevatorConfig::new(3, 10, 650, 8, AccessPolicy::EvenFloorOnly));
    assert_eq!(elevator.id(), ElevatorId(3));
    assert_eq!(elevator.max_floors(), 10);
    assert_eq!(elevator.max_weight(), 650);
    assert_eq!(elevator.max_passengers(), 8);
    assert_eq!(elevator.access_policy(), AccessPolicy::EvenFloorOnly);
}

#[test]
fn test_move_to_floor() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    elevator.move_to_floor(5);
    assert_eq!(elevator.current_floor(), 5);
}

#[test]
fn test_move_to_floor_drops_off_matching_passengers() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    assert!(elevator.add_passenger(Passenger::new(70, 5)));
    assert!(elevator.add_passenger(Passenger::new(80, 5)));
    assert!(elevator.add_passenger(Passenger::new(60, 7)));

    let delivered = elevator.move_to_floor(5);

    assert_eq!(delivered.len(), 2);
    assert_eq!(elevator.current_floor(), 5);
    assert_eq!(elevator.current_weight(), 60);
    assert_eq!(destinations(elevator.manifest()), vec![7]);
}

#[test]
fn test_move_to_same_floor_is_noop() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    assert!(elevator.add_passenger(Passenger::new(70, 0)));

    let delivered = elevator.move_to_floor(0);

    assert!(delivered.is_empty());
    assert_eq!(elevator.passenger_count(), 1);
    assert_eq!(elevator.current_weight(), 70);
}

#[test]
fn test_move_below_lowest_floor_is_refused() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    elevator.move_to_floor(-1);
    assert_eq!(elevator.current_floor(), 0);
}

#[test]
fn test_add_passenger() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    assert!(elevator.add_passenger(Passenger::new(70, 5)));
    assert_eq!(elevator.passenger_count(), 1);
    assert_eq!(elevator.current_weight(), 70);
}

#[test]
fn test_add_passenger_exceed_max_passengers() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);

    let accepted: Vec<bool> = (0..21)
        .map(|_| elevator.add_passenger(Passenger::new(70, 5)))
        .collect();

    assert!(accepted[..10].iter().all(|&ok| ok));
    assert!(accepted[10..].iter().all(|&ok| !ok));
    assert_eq!(elevator.passenger_count(), elevator.max_passengers());
    assert_eq!(elevator.current_weight(), 700);
}

#[test]
fn test_add_passenger_exceed_max_weight() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);

    assert!(!elevator.add_passenger(Passenger::new(2500, 5)));
    assert!(elevator.manifest().is_empty());
    assert_eq!(elevator.current_weight(), 0);
}

#[test]
fn test_weight_limit_is_inclusive() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    assert!(elevator.add_passenger(Passenger::new(700, 5)));
    assert!(elevator.add_passenger(Passenger::new(100, 6)));
    assert!(!elevator.add_passenger(Passenger::new(1, 7)));
    assert_eq!(elevator.current_weight(), 800);
}

#[test]
fn test_odd_floor_only_rejects_even_floors() {
    let mut elevator = elevator_with(AccessPolicy::OddFloorOnly);

    assert!(!elevator.add_passenger(Passenger::new(70, 5)));
    assert!(elevator.manifest().is_empty());

    elevator.move_to_floor(1);
    assert!(elevator.add_passenger(Passenger::new(70, 5)));
}

#[test]
fn test_even_floor_only_rejects_odd_floors() {
    let mut elevator = elevator_with(AccessPolicy::EvenFloorOnly);
    assert!(elevator.add_passenger(Passenger::new(70, 5)));

    elevator.move_to_floor(3);
    assert!(!elevator.add_passenger(Passenger::new(70, 6)));
    assert_eq!(elevator.passenger_count(), 1);
}

#[test]
fn test_access_policy_parity_of_negative_floors() {
    assert!(AccessPolicy::OddFloorOnly.allows_boarding_at(-1));
    assert!(!AccessPolicy::OddFloorOnly.allows_boarding_at(-2));
    assert!(AccessPolicy::EvenFloorOnly.allows_boarding_at(-2));
    assert!(AccessPolicy::Unrestricted.allows_boarding_at(-3));
}

#[test]
fn test_can_accommodate_checks_group() {
    let elevator = elevator_with(AccessPolicy::Unrestricted);
    let fits = vec![Passenger::new(400, 3), Passenger::new(400, 4)];
    let too_heavy = vec![Passenger::new(400, 3), Passenger::new(401, 4)];
    let too_many: Vec<Passenger> = (0..11).map(|_| Passenger::new(10, 2)).collect();

    assert!(elevator.can_accommodate(&fits));
    assert!(!elevator.can_accommodate(&too_heavy));
    assert!(!elevator.can_accommodate(&too_many));
    assert!(!elevator.can_accommodate(&[Passenger::new(u32::MAX, 1)]));
}

#[test]
fn test_move_look_algorithm() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    let report = elevator.move_look(5);

    assert_eq!(elevator.current_floor(), 5);
    assert_eq!(report.floors_travelled, 5);
    assert!(report.delivered.is_empty());
}

#[test]
fn test_move_look_serves_remaining_destinations() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    for destination in [2, 6, 4] {
        assert!(elevator.add_passenger(Passenger::new(70, destination)));
    }

    let report = elevator.move_look(3);

    assert_eq!(elevator.current_floor(), 6);
    assert_eq!(report.floors_travelled, 6);
    assert_eq!(destinations(&report.delivered), vec![2, 4, 6]);
    assert!(elevator.manifest().is_empty());
    assert_eq!(elevator.current_weight(), 0);
}

#[test]
fn test_move_look_prefers_up_before_reversing() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    elevator.move_to_floor(5);
    assert!(elevator.add_passenger(Passenger::new(70, 2)));
    assert!(elevator.add_passenger(Passenger::new(80, 8)));
    assert_eq!(elevator.next_direction(), Direction::Up);

    let report = elevator.move_look(5);

    assert_eq!(destinations(&report.delivered), vec![8, 2]);
    assert_eq!(report.floors_travelled, 9);
    assert_eq!(elevator.current_floor(), 2);
}

#[test]
fn test_move_look_goes_down_when_nothing_above() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    elevator.move_to_floor(6);
    assert!(elevator.add_passenger(Passenger::new(70, 1)));
    assert_eq!(elevator.next_direction(), Direction::Down);

    let report = elevator.move_look(4);

    assert_eq!(elevator.current_floor(), 1);
    assert_eq!(report.floors_travelled, 5);
    assert_eq!(report.delivered.len(), 1);
}

#[test]
fn test_move_look_leaves_passenger_bound_for_current_floor() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    assert!(elevator.add_passenger(Passenger::new(70, 0)));
    assert_eq!(elevator.next_direction(), Direction::Idle);

    let report = elevator.move_look(0);

    assert_eq!(report.floors_travelled, 0);
    assert_eq!(elevator.passenger_count(), 1);
}

#[test]
fn test_move_look_ignores_unreachable_destinations() {
    let mut elevator = elevator_with(AccessPolicy::Unrestricted);
    assert!(elevator.add_passenger(Passenger::new(70, -3)));
    assert_eq!(elevator.next_direction(), Direction::Idle);

    elevator.move_look(-2);

    assert_eq!(elevator.current_floor(), 0);
    assert_eq!(elevator.passenger_count(), 1);
}
