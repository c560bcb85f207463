/*
 * Unit tests for the elevator car module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_car_initial_state
 * - test_car_update_overwrites_position_and_goal
 * - test_car_update_leaves_busy_untouched
 * - test_car_direction_sign
 * - test_car_advance_moves_one_floor
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod car_tests {
    use crate::elevator::Elevator;
    use crate::elevator::NO_GOAL;

    #[test]
    fn test_car_initial_state() {
        // Purpose: Verify that a new car rests at floor 1 with no goal

        // Arrange
        let elevator = Elevator::new(3);

        // Assert
        let status = elevator.status();
        assert_eq!(status.id, 3);
        assert_eq!(status.current_floor, 1);
        assert_eq!(status.goal_floor, NO_GOAL);
        assert!(!elevator.is_busy());
    }

    #[test]
    fn test_car_update_overwrites_position_and_goal() {
        // Purpose: Verify that update replaces both fields unconditionally

        // Arrange
        let mut elevator = Elevator::new(0);

        // Act
        elevator.update(4, 9);

        // Assert
        assert_eq!(elevator.current_floor(), 4);
        assert_eq!(elevator.goal_floor(), 9);

        // Act: a second update overwrites again, bounds are not checked
        elevator.update(-2, -7);

        // Assert
        assert_eq!(elevator.current_floor(), -2);
        assert_eq!(elevator.goal_floor(), -7);
    }

    #[test]
    fn test_car_update_leaves_busy_untouched() {
        // Purpose: Verify that update never changes the busy flag

        // Arrange
        let mut elevator = Elevator::new(0);
        elevator.set_busy(true);

        // Act
        elevator.update(2, 6);

        // Assert
        assert!(elevator.is_busy());
    }

    #[test]
    fn test_car_direction_sign() {
        // Purpose: Verify the direction sign convention (goal - current)

        // Arrange
        let mut elevator = Elevator::new(0);

        // Act + Assert: headed down
        elevator.update(5, 2);
        assert!(elevator.direction() < 0);

        // Act + Assert: headed up
        elevator.update(2, 5);
        assert!(elevator.direction() > 0);

        // Act + Assert: no defined direction
        elevator.update(5, 5);
        assert_eq!(elevator.direction(), 0);
    }

    #[test]
    fn test_car_advance_moves_one_floor() {
        // Purpose: Verify that advance moves exactly one floor toward the goal

        // Arrange
        let mut elevator = Elevator::new(0);
        elevator.update(3, 1);

        // Act + Assert: downward, one floor per call
        elevator.advance();
        assert_eq!(elevator.current_floor(), 2);
        elevator.advance();
        assert_eq!(elevator.current_floor(), 1);

        // Arrange again: upward
        elevator.update(1, 3);

        // Act + Assert
        elevator.advance();
        assert_eq!(elevator.current_floor(), 2);
    }
}
