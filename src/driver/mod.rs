pub mod driver;
pub mod input;

pub use driver::SimulationDriver;
pub use input::Command;
pub use input::InputReader;
