pub mod unit;
mod unit_tests;

pub use unit::ElevatorUnit;
