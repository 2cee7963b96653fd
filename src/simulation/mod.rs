pub mod stepper;

pub use stepper::SimulationEngine;
pub use stepper::Timing;
