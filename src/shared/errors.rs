/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*            Error types              */
/***************************************/
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("floor {floor} is outside the building (0..{num_floors})")]
    FloorOutOfRange { floor: u8, num_floors: u8 },

    #[error("no elevator with id {id} (building has {num_elevators})")]
    UnknownElevator { id: usize, num_elevators: usize },

    #[error("floor {floor} has no {direction} call button")]
    NoSuchCallButton { floor: u8, direction: Direction },
}
