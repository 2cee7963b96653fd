/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::coordinator::Building;
use crate::shared::{Behaviour, StepReport};

/// Delay used when nothing moved and nothing was picked up.
pub const POLL_DELAY: Duration = Duration::from_millis(200);

/**
 * Delays the stepper recommends to its driver.
 *
 * # Fields
 * - `dwell`:   Wait after a pickup, stands in for door open time.
 * - `travel`:  Wait between ticks while any elevator is moving, i.e. time per floor.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub dwell: Duration,
    pub travel: Duration,
}

impl Timing {
    pub fn from_config(config: &SimulationConfig) -> Timing {
        Timing {
            dwell: seconds_to_duration(config.idle_time_sec),
            travel: seconds_to_duration(config.elevator_speed_sec),
        }
    }
}

// Truncated to whole milliseconds
fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::from_millis((seconds * 1000.0) as u64)
}

/**
 * Owns the building and advances it one discrete tick at a time.
 *
 * The engine never sleeps. Each call to `step` returns how long the driver should wait before
 * calling it again.
 *
 * # Fields
 * - `building`:    Elevators and pending hall calls.
 * - `timing`:      Delays handed back to the driver.
 */
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    building: Building,
    timing: Timing,
}

impl SimulationEngine {
    pub fn new(building: Building, timing: Timing) -> SimulationEngine {
        SimulationEngine { building, timing }
    }

    pub fn from_config(config: &SimulationConfig) -> SimulationEngine {
        SimulationEngine::new(
            Building::new(config.num_elevators, config.num_floors),
            Timing::from_config(config),
        )
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn building_mut(&mut self) -> &mut Building {
        &mut self.building
    }

    pub fn step(&mut self) -> StepReport {
        let mut pickup = false;
        let mut arrivals = Vec::new();

        for index in 0..self.building.elevators().len() {
            let elevator = &mut self.building.elevators_mut()[index];

            let Some(destination) = elevator.next_destination() else {
                continue;
            };

            if elevator.current_floor() != destination {
                elevator.move_towards(destination);
                continue;
            }

            // Arrived
            elevator.clear_request(destination);
            let id = elevator.id();
            info!("Elevator {} arrived at floor {}", id, destination);
            arrivals.push((id, destination));

            // Any arrival serves both hall buttons on the floor
            if self.building.clear_calls_at(destination) {
                pickup = true;
            }
        }

        let any_moving = self
            .building
            .elevators()
            .iter()
            .any(|e| e.behaviour() == Behaviour::Moving);

        let delay = if pickup {
            self.timing.dwell
        } else if any_moving {
            self.timing.travel
        } else {
            POLL_DELAY
        };

        StepReport {
            elevators: self.building.elevators().iter().map(|e| e.snapshot()).collect(),
            pending_calls: self.building.pending_calls().iter().copied().collect(),
            arrivals,
            pickup,
            delay_ms: delay.as_millis() as u64,
        }
    }
}
