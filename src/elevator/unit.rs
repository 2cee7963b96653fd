/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Behaviour, ElevatorSnapshot};

/**
 * A single elevator car running a SCAN schedule.
 *
 * The car keeps travelling in its current direction while any request lies ahead of it, and only
 * reverses once the direction of travel is exhausted. `behaviour` is refreshed lazily every time
 * the next destination is queried.
 *
 * # Fields
 * - `id`:              Index of the elevator in the building, never changes.
 * - `current_floor`:   Floor the car is currently at.
 * - `requests`:        Distinct floors the car still has to visit.
 * - `moving_up`:       Current scan direction, only meaningful while `requests` is non-empty.
 * - `behaviour`:       `Idle` when the last query found no requests, `Moving` otherwise.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorUnit {
    id: usize,
    current_floor: u8,
    requests: BTreeSet<u8>,
    moving_up: bool,
    behaviour: Behaviour,
}

impl ElevatorUnit {
    pub fn new(id: usize) -> ElevatorUnit {
        ElevatorUnit {
            id,
            current_floor: 0,
            requests: BTreeSet::new(),
            moving_up: true,
            behaviour: Behaviour::Idle,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn current_floor(&self) -> u8 {
        self.current_floor
    }

    pub fn requests(&self) -> &BTreeSet<u8> {
        &self.requests
    }

    pub fn moving_up(&self) -> bool {
        self.moving_up
    }

    pub fn behaviour(&self) -> Behaviour {
        self.behaviour
    }

    // Floor bounds are checked by the building before requests reach the car
    pub fn add_request(&mut self, floor: u8) {
        self.requests.insert(floor);
    }

    pub fn clear_request(&mut self, floor: u8) -> bool {
        self.requests.remove(&floor)
    }

    /// Returns the next floor to visit, flipping the scan direction when nothing is left ahead.
    /// Never removes requests, so it is safe to call more than once per tick.
    pub fn next_destination(&mut self) -> Option<u8> {
        if self.requests.is_empty() {
            self.behaviour = Behaviour::Idle;
            return None;
        }

        self.behaviour = Behaviour::Moving;

        if self.moving_up {
            // Nearest request at or above the car
            if let Some(&floor) = self.requests.range(self.current_floor..).next() {
                return Some(floor);
            }
            // Everything left is below, so the highest request is the nearest one going down
            self.moving_up = false;
            self.requests.iter().next_back().copied()
        } else {
            if let Some(&floor) = self.requests.range(..=self.current_floor).next_back() {
                return Some(floor);
            }
            self.moving_up = true;
            self.requests.iter().next().copied()
        }
    }

    /// Moves at most one floor towards `destination`.
    pub fn move_towards(&mut self, destination: u8) {
        if self.current_floor < destination {
            self.current_floor += 1;
        } else if self.current_floor > destination {
            self.current_floor -= 1;
        }
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            floor: self.current_floor,
            behaviour: self.behaviour,
            moving_up: self.moving_up,
            requests: self.requests.iter().copied().collect(),
        }
    }

    #[cfg(test)]
    pub fn test_set_floor(&mut self, floor: u8) {
        self.current_floor = floor;
    }

    #[cfg(test)]
    pub fn test_set_moving_up(&mut self, moving_up: bool) {
        self.moving_up = moving_up;
    }
}
