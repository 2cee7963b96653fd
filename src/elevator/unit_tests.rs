/*
 * Unit tests for elevator module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_unit_init
 * - test_unit_add_request_is_idempotent
 * - test_unit_idle_without_requests
 * - test_unit_scan_upward_trip
 * - test_unit_scan_reverses_downward
 * - test_unit_scan_reverses_upward
 * - test_unit_scan_down_prefers_nearest_below
 * - test_unit_next_destination_keeps_requests
 * - test_unit_request_at_current_floor
 * - test_unit_move_towards
 * - test_unit_snapshot
 * - prop_move_towards_one_floor
 * - prop_next_destination_is_a_request
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod unit_tests {
    use crate::elevator::ElevatorUnit;
    use crate::shared::Behaviour::{Idle, Moving};
    use proptest::prelude::*;

    #[test]
    fn test_unit_init() {
        // Act
        let unit = ElevatorUnit::new(3);

        // Assert
        assert_eq!(unit.id(), 3);
        assert_eq!(unit.current_floor(), 0);
        assert!(unit.requests().is_empty());
        assert!(unit.moving_up());
        assert_eq!(unit.behaviour(), Idle);
    }

    #[test]
    fn test_unit_add_request_is_idempotent() {
        // Arrange
        let mut unit = ElevatorUnit::new(0);

        // Act
        unit.add_request(4);
        unit.add_request(4);

        // Assert
        assert_eq!(unit.requests().len(), 1);
        assert!(unit.requests().contains(&4));
    }

    #[test]
    fn test_unit_idle_without_requests() {
        // Arrange
        let mut unit = ElevatorUnit::new(0);
        unit.add_request(2);
        assert_eq!(unit.next_destination(), Some(2));
        assert_eq!(unit.behaviour(), Moving);

        // Act
        unit.clear_request(2);
        let destination = unit.next_destination();

        // Assert
        assert_eq!(destination, None);
        assert_eq!(unit.behaviour(), Idle);
        assert_eq!(unit.next_destination(), None);
    }

    #[test]
    fn test_unit_scan_upward_trip() {
        // Purpose: Verify that the car visits requests in the direction of travel before skipping ahead

        // Arrange
        let mut unit = ElevatorUnit::new(0);
        unit.add_request(5);
        unit.add_request(9);

        // Act & Assert
        assert_eq!(unit.next_destination(), Some(5));

        // Simulate arriving at floor 5
        unit.test_set_floor(5);
        unit.clear_request(5);

        assert_eq!(unit.next_destination(), Some(9));
        assert!(unit.moving_up());
    }

    #[test]
    fn test_unit_scan_reverses_downward() {
        // Arrange
        let mut unit = ElevatorUnit::new(0);
        unit.test_set_floor(10);
        unit.add_request(3);

        // Act
        let destination = unit.next_destination();

        // Assert
        assert_eq!(destination, Some(3));
        assert!(!unit.moving_up());
    }

    #[test]
    fn test_unit_scan_reverses_upward() {
        // Arrange
        let mut unit = ElevatorUnit::new(0);
        unit.test_set_floor(6);
        unit.test_set_moving_up(false);
        unit.add_request(8);
        unit.add_request(7);

        // Act
        let destination = unit.next_destination();

        // Assert
        assert_eq!(destination, Some(7));
        assert!(unit.moving_up());
    }

    #[test]
    fn test_unit_scan_down_prefers_nearest_below() {
        // Arrange
        let mut unit = ElevatorUnit::new(0);
        unit.test_set_floor(6);
        unit.test_set_moving_up(false);
        unit.add_request(1);
        unit.add_request(4);
        unit.add_request(9);

        // Act & Assert
        assert_eq!(unit.next_destination(), Some(4));
        assert!(!unit.moving_up());
    }

    #[test]
    fn test_unit_next_destination_keeps_requests() {
        // Arrange
        let mut unit = ElevatorUnit::new(0);
        unit.add_request(2);
        unit.add_request(7);

        // Act
        for _ in 0..5 {
            assert_eq!(unit.next_destination(), Some(2));
        }

        // Assert
        assert_eq!(unit.requests().len(), 2);
    }

    #[test]
    fn test_unit_request_at_current_floor() {
        // Arrange
        let mut unit = ElevatorUnit::new(0);
        unit.test_set_floor(4);
        unit.test_set_moving_up(false);
        unit.add_request(4);

        // Act & Assert
        assert_eq!(unit.next_destination(), Some(4));
        assert!(!unit.moving_up());
    }

    #[test]
    fn test_unit_move_towards() {
        // Arrange
        let mut unit = ElevatorUnit::new(0);

        // Act & Assert
        unit.move_towards(3);
        assert_eq!(unit.current_floor(), 1);
        unit.move_towards(1);
        assert_eq!(unit.current_floor(), 1);
        unit.move_towards(0);
        assert_eq!(unit.current_floor(), 0);
    }

    #[test]
    fn test_unit_snapshot() {
        // Arrange
        let mut unit = ElevatorUnit::new(1);
        unit.add_request(6);
        unit.add_request(2);
        unit.next_destination();

        // Act
        let snapshot = unit.snapshot();

        // Assert
        assert_eq!(snapshot.id, 1);
        assert_eq!(snapshot.floor, 0);
        assert_eq!(snapshot.behaviour, Moving);
        assert!(snapshot.moving_up);
        assert_eq!(snapshot.requests, vec![2, 6]);
    }

    proptest! {
        #[test]
        fn prop_move_towards_one_floor(start in 0u8..=255, destination in 0u8..=255) {
            let mut unit = ElevatorUnit::new(0);
            unit.test_set_floor(start);

            unit.move_towards(destination);

            let moved = unit.current_floor().abs_diff(start);
            prop_assert!(moved <= 1);
            prop_assert!(unit.current_floor().abs_diff(destination) <= start.abs_diff(destination));
            prop_assert_eq!(moved == 0, start == destination);
        }

        #[test]
        fn prop_next_destination_is_a_request(
            start in 0u8..20,
            moving_up in any::<bool>(),
            requests in proptest::collection::btree_set(0u8..20, 1..8),
        ) {
            let mut unit = ElevatorUnit::new(0);
            unit.test_set_floor(start);
            unit.test_set_moving_up(moving_up);
            for floor in &requests {
                unit.add_request(*floor);
            }

            let destination = unit.next_destination();

            let destination = destination.unwrap();
            prop_assert!(requests.contains(&destination));
            prop_assert_eq!(unit.requests(), &requests);
            // The chosen floor always lies in the (possibly flipped) direction of travel
            if unit.moving_up() {
                prop_assert!(destination >= start);
            } else {
                prop_assert!(destination <= start);
            }
        }
    }
}
