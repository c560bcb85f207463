/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ElevatorStatus;

/// Goal floor sentinel for a car that has nowhere to go yet.
pub const NO_GOAL: i32 = -1;

/**
 * Holds the state of a single elevator car.
 *
 * A car knows nothing about scheduling: the control system decides goals
 * and marks the car busy, the car reports position and direction. Floors
 * are unbounded signed integers; a freshly created car rests at floor 1
 * with `NO_GOAL` as its goal.
 *
 * # Fields
 * - `id`:              Stable identifier, equal to the index in the bank.
 * - `current_floor`:   Floor the car is on right now.
 * - `goal_floor`:      Floor the car is headed to, or `NO_GOAL`.
 * - `busy`:            True while the car is committed to a pickup.
 */
pub struct Elevator {
    id: usize,
    current_floor: i32,
    goal_floor: i32,
    busy: bool,
}

impl Elevator {
    pub fn new(id: usize) -> Elevator {
        Elevator {
            id,
            current_floor: 1,
            goal_floor: NO_GOAL,
            busy: false,
        }
    }

    /// Overwrites the car's position and goal unconditionally. The busy
    /// flag is left untouched.
    pub fn update(&mut self, floor_number: i32, goal_floor: i32) {
        self.current_floor = floor_number;
        self.goal_floor = goal_floor;
    }

    /// Negative when the car is headed down, positive when headed up,
    /// zero when it has no defined direction. Only the sign matters to
    /// callers.
    pub fn direction(&self) -> i32 {
        self.goal_floor - self.current_floor
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            current_floor: self.current_floor,
            goal_floor: self.goal_floor,
        }
    }

    /// Moves exactly one floor toward the goal.
    pub fn advance(&mut self) {
        if self.direction() < 0 {
            self.current_floor -= 1;
        } else {
            self.current_floor += 1;
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn goal_floor(&self) -> i32 {
        self.goal_floor
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
