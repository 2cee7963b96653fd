/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Behaviour, Direction, ElevatorSnapshot, HallCall, StepReport};

/**
 * Text rendering of a simulation tick.
 *
 * One row per floor, top floor first. The call column shows `^`/`v` for a lit hall button, `.` for
 * an unlit one and a blank where the floor has no such button. Each elevator gets a shaft column
 * holding the car (`[U]`, `[D]` or `[I]`) or a `*` where the car has a pending request.
 */
pub fn render_diagram(report: &StepReport, num_floors: u8) -> String {
    let mut out = String::new();

    for floor in (0..num_floors).rev() {
        let _ = write!(out, "{:>3} {} |", floor, call_lamps(report, floor, num_floors));
        for elevator in &report.elevators {
            let _ = write!(out, " {}", shaft_cell(elevator, floor));
        }
        out.push('\n');
    }

    for elevator in &report.elevators {
        let _ = writeln!(
            out,
            "E{}: floor {} {} requests {:?}",
            elevator.id,
            elevator.floor,
            status(elevator),
            elevator.requests
        );
    }
    out
}

pub fn render_json(report: &StepReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

fn call_lamps(report: &StepReport, floor: u8, num_floors: u8) -> String {
    let lamp = |direction: Direction, lit: char| {
        let exists = match direction {
            Direction::Up => floor + 1 < num_floors,
            Direction::Down => floor > 0,
        };
        if !exists {
            ' '
        } else if report.pending_calls.contains(&HallCall::new(floor, direction)) {
            lit
        } else {
            '.'
        }
    };
    format!("{}{}", lamp(Direction::Up, '^'), lamp(Direction::Down, 'v'))
}

fn shaft_cell(elevator: &ElevatorSnapshot, floor: u8) -> &'static str {
    if elevator.floor == floor {
        match (elevator.behaviour, elevator.moving_up) {
            (Behaviour::Idle, _) => "[I]",
            (Behaviour::Moving, true) => "[U]",
            (Behaviour::Moving, false) => "[D]",
        }
    } else if elevator.requests.contains(&floor) {
        " * "
    } else {
        "   "
    }
}

fn status(elevator: &ElevatorSnapshot) -> &'static str {
    match (elevator.behaviour, elevator.moving_up) {
        (Behaviour::Idle, _) => "idle",
        (Behaviour::Moving, true) => "up",
        (Behaviour::Moving, false) => "down",
    }
}
