pub mod errors;
pub mod macros;
pub mod structs;

pub use errors::EngineError;
pub use structs::Behaviour;
pub use structs::Direction;
pub use structs::ElevatorSnapshot;
pub use structs::HallCall;
pub use structs::StepReport;
