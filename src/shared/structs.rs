/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::DispatchError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl TryFrom<i32> for Direction {
    type Error = DispatchError;

    // Only the sign carries meaning; callers may pass -1/+1 or any other
    // nonzero magnitude.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(Direction::Up)
        } else if value < 0 {
            Ok(Direction::Down)
        } else {
            Err(DispatchError::InvalidDirection { value })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupRequest {
    pub floor: i32,
    pub direction: Direction,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ElevatorStatus {
    pub id: usize,
    pub current_floor: i32,
    pub goal_floor: i32,
}
