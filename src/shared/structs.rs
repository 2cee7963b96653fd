/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "moving")]
    Moving,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn iter() -> impl Iterator<Item = Direction> {
        [Direction::Up, Direction::Down].iter().copied()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A hall call button press, keyed by floor and requested direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HallCall {
    pub floor: u8,
    pub direction: Direction,
}

impl HallCall {
    pub fn new(floor: u8, direction: Direction) -> HallCall {
        HallCall { floor, direction }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorSnapshot {
    pub id: usize,
    pub floor: u8,
    pub behaviour: Behaviour,
    #[serde(rename = "movingUp")]
    pub moving_up: bool,
    pub requests: Vec<u8>,
}

/**
 * Everything the presentation layer needs after one simulation tick.
 *
 * # Fields
 * - `elevators`:       Snapshot of every elevator, ordered by id.
 * - `pending_calls`:   Hall calls still waiting for an elevator, ordered by floor.
 * - `arrivals`:        `(elevator id, floor)` for each elevator that reached a destination this tick.
 * - `pickup`:          True if an arrival served a pending hall call.
 * - `delay_ms`:        Recommended wait before the next tick.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StepReport {
    pub elevators: Vec<ElevatorSnapshot>,
    #[serde(rename = "pendingCalls")]
    pub pending_calls: Vec<HallCall>,
    pub arrivals: Vec<(usize, u8)>,
    pub pickup: bool,
    #[serde(rename = "delayMs")]
    pub delay_ms: u64,
}

impl StepReport {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
