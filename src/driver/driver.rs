/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::time::Instant;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::driver::input::Command;
use crate::shared::{Behaviour, Direction, EngineError, StepReport};
use crate::simulation::SimulationEngine;

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    CommandReceived(Command),
    InputClosed,
    Tick,
    Terminate,
}

// The hall panel has no up button on the top floor and no down button on the ground floor
fn check_call_button(floor: u8, direction: Direction, num_floors: u8) -> Result<(), EngineError> {
    let missing = match direction {
        Direction::Up => floor == num_floors.saturating_sub(1),
        Direction::Down => floor == 0,
    };
    if missing {
        return Err(EngineError::NoSuchCallButton { floor, direction });
    }
    Ok(())
}

/**
 * Runs the simulation on a timer and applies operator commands between ticks.
 *
 * The driver is the only owner of the engine. Commands from other threads arrive over
 * `command_rx`, so every mutation of the building happens on the driver thread.
 *
 * # Fields
 * - `engine`:          The simulation being driven.
 * - `tick_limit`:      Stop after this many ticks, runs until told to stop when `None`.
 * - `command_rx`:      Receives parsed operator commands.
 * - `terminate_rx`:    Stops the driver when it fires or disconnects.
 * - `report_tx`:       Sends the report of every tick to the renderer.
 */
pub struct SimulationDriver {
    engine: SimulationEngine,
    tick_limit: Option<u64>,

    command_rx: cbc::Receiver<Command>,
    terminate_rx: cbc::Receiver<()>,
    report_tx: cbc::Sender<StepReport>,
}

impl SimulationDriver {
    pub fn new(
        engine: SimulationEngine,
        tick_limit: Option<u64>,
        command_rx: cbc::Receiver<Command>,
        terminate_rx: cbc::Receiver<()>,
        report_tx: cbc::Sender<StepReport>,
    ) -> SimulationDriver {
        SimulationDriver {
            engine,
            tick_limit,
            command_rx,
            terminate_rx,
            report_tx,
        }
    }

    /// Returns the number of ticks executed.
    pub fn run(mut self) -> u64 {
        let mut ticks: u64 = 0;
        // The first tick runs immediately
        let mut next_tick = Instant::now();

        loop {
            if self.tick_limit.map_or(false, |limit| ticks >= limit) {
                break;
            }

            match self.wait_for_event(next_tick) {
                Event::CommandReceived(Command::Quit) => break,
                Event::CommandReceived(command) => self.handle_command(command),
                Event::InputClosed => {
                    debug!("Command channel closed, simulation keeps running");
                    self.command_rx = cbc::never();
                }
                Event::Tick => {
                    let report = self.engine.step();
                    ticks += 1;
                    next_tick = Instant::now() + report.delay();
                    if self.report_tx.send(report).is_err() {
                        warn!("Renderer disconnected, stopping simulation");
                        break;
                    }
                }
                Event::Terminate => break,
            }
        }

        info!("Simulation stopped after {} ticks", ticks);
        ticks
    }

    pub fn handle_command(&mut self, command: Command) {
        let building = self.engine.building_mut();

        match command {
            Command::Call { floor, direction } => {
                info!("Call button pressed on floor {} for direction '{}'", floor, direction);
                if let Err(e) = check_call_button(floor, direction, building.num_floors()) {
                    warn!("Rejected call: {}", e);
                    return;
                }
                match building.dispatch_elevator(floor, direction) {
                    Ok(Some(_)) => {}
                    Ok(None) => debug!("Call {} {} is already being served", floor, direction),
                    Err(e) => warn!("Rejected call: {}", e),
                }
            }

            Command::Select { elevator, floor } => {
                // The cab panel is locked while the car is travelling
                match building.elevator(elevator) {
                    Ok(unit) if unit.behaviour() == Behaviour::Moving => {
                        warn!("Elevator {} is moving, destination {} ignored", elevator, floor);
                        return;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Rejected destination: {}", e);
                        return;
                    }
                }

                match building.select_destination(elevator, floor) {
                    Ok(true) => info!("Elevator {} destination set for floor {}", elevator, floor),
                    Ok(false) => debug!("Elevator {} is already at floor {}", elevator, floor),
                    Err(e) => warn!("Rejected destination: {}", e),
                }
            }

            Command::Quit => {}
        }
    }

    fn wait_for_event(&self, next_tick: Instant) -> Event {
        let timeout = next_tick.saturating_duration_since(Instant::now());

        cbc::select! {
            recv(self.command_rx) -> command => {
                match command {
                    Ok(command) => Event::CommandReceived(command),
                    Err(_) => Event::InputClosed,
                }
            },

            // A dropped sender counts as a stop request
            recv(self.terminate_rx) -> _ => Event::Terminate,

            default(timeout) => Event::Tick,
        }
    }

    #[cfg(test)]
    pub fn test_get_engine(&self) -> &SimulationEngine {
        &self.engine
    }

    #[cfg(test)]
    pub fn test_get_engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }
}
