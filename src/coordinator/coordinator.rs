/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::BTreeSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorUnit;
use crate::shared::{Behaviour, Direction, EngineError, HallCall};

/**
 * Owns every elevator in the building and the hall calls waiting to be served.
 *
 * Hall calls are assigned in three tiers: an elevator already travelling towards the call in the
 * requested direction, then the nearest idle elevator, then the least loaded elevator. Every tier
 * scans elevators in ascending id order and keeps the first one found on ties.
 *
 * # Fields
 * - `elevators`:       All elevators, indexed by id.
 * - `pending_calls`:   Hall calls dispatched but not yet served by an arrival.
 * - `n_floors`:        Number of floors in the building.
 */
#[derive(Debug, Clone)]
pub struct Building {
    elevators: Vec<ElevatorUnit>,
    pending_calls: BTreeSet<HallCall>,
    n_floors: u8,
}

impl Building {
    pub fn new(n_elevators: usize, n_floors: u8) -> Building {
        Building {
            elevators: (0..n_elevators).map(ElevatorUnit::new).collect(),
            pending_calls: BTreeSet::new(),
            n_floors,
        }
    }

    pub fn elevators(&self) -> &[ElevatorUnit] {
        &self.elevators
    }

    pub fn elevators_mut(&mut self) -> &mut [ElevatorUnit] {
        &mut self.elevators
    }

    pub fn elevator(&self, id: usize) -> Result<&ElevatorUnit, EngineError> {
        self.elevators.get(id).ok_or(EngineError::UnknownElevator {
            id,
            num_elevators: self.elevators.len(),
        })
    }

    pub fn pending_calls(&self) -> &BTreeSet<HallCall> {
        &self.pending_calls
    }

    pub fn num_floors(&self) -> u8 {
        self.n_floors
    }

    /// Registers a hall call and hands it to an elevator.
    ///
    /// Returns `Ok(None)` when the same call is already pending.
    pub fn dispatch_elevator(
        &mut self,
        call_floor: u8,
        direction: Direction,
    ) -> Result<Option<&ElevatorUnit>, EngineError> {
        self.check_floor(call_floor)?;

        let call = HallCall::new(call_floor, direction);
        if !self.pending_calls.insert(call) {
            debug!("Call {} {} already pending", call_floor, direction);
            return Ok(None);
        }

        let chosen = self
            .nearest_perfect_match(call_floor, direction)
            .or_else(|| self.nearest_idle(call_floor))
            .or_else(|| self.least_loaded());

        // Only empty when the building has no elevators at all
        let Some(index) = chosen else {
            return Ok(None);
        };

        let elevator = &mut self.elevators[index];
        elevator.add_request(call_floor);
        debug!(
            "Call {} {} assigned to elevator {}",
            call_floor,
            direction,
            elevator.id()
        );
        Ok(Some(&self.elevators[index]))
    }

    /// Cab panel selection. Returns `Ok(false)` when the car is already at `floor`.
    pub fn select_destination(&mut self, elevator_id: usize, floor: u8) -> Result<bool, EngineError> {
        self.check_floor(floor)?;
        let num_elevators = self.elevators.len();
        let elevator = self
            .elevators
            .get_mut(elevator_id)
            .ok_or(EngineError::UnknownElevator {
                id: elevator_id,
                num_elevators,
            })?;

        if elevator.current_floor() == floor {
            return Ok(false);
        }
        elevator.add_request(floor);
        Ok(true)
    }

    /// Removes both hall calls at `floor`. Returns true if either was pending.
    pub fn clear_calls_at(&mut self, floor: u8) -> bool {
        let mut served = false;
        for direction in Direction::iter() {
            served |= self.pending_calls.remove(&HallCall::new(floor, direction));
        }
        served
    }

    fn nearest_perfect_match(&self, call_floor: u8, direction: Direction) -> Option<usize> {
        self.nearest_where(call_floor, |e| {
            e.behaviour() == Behaviour::Moving
                && match direction {
                    Direction::Up => e.moving_up() && e.current_floor() <= call_floor,
                    Direction::Down => !e.moving_up() && e.current_floor() >= call_floor,
                }
        })
    }

    fn nearest_idle(&self, call_floor: u8) -> Option<usize> {
        self.nearest_where(call_floor, |e| e.behaviour() == Behaviour::Idle)
    }

    fn least_loaded(&self) -> Option<usize> {
        // min_by_key keeps the first of equal elements
        self.elevators
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| e.requests().len())
            .map(|(index, _)| index)
    }

    fn nearest_where<F>(&self, call_floor: u8, predicate: F) -> Option<usize>
    where
        F: Fn(&ElevatorUnit) -> bool,
    {
        self.elevators
            .iter()
            .enumerate()
            .filter(|(_, e)| predicate(*e))
            .min_by_key(|(_, e)| e.current_floor().abs_diff(call_floor))
            .map(|(index, _)| index)
    }

    fn check_floor(&self, floor: u8) -> Result<(), EngineError> {
        if floor >= self.n_floors {
            return Err(EngineError::FloorOutOfRange {
                floor,
                num_floors: self.n_floors,
            });
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_elevator_mut(&mut self, id: usize) -> &mut ElevatorUnit {
        &mut self.elevators[id]
    }
}
