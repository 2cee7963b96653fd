/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, warn};
use std::io::BufRead;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Call { floor: u8, direction: Direction },
    Select { elevator: usize, floor: u8 },
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', expected call, select or quit")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a valid {1}")]
    InvalidArgument(String, &'static str),
}

const CALL_USAGE: &str = "call <floor> <up|down>";
const SELECT_USAGE: &str = "select <elevator> <floor>";

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
    let Some((name, args)) = tokens.split_first() else {
        return Err(ParseError::Empty);
    };

    match name.as_str() {
        "call" | "c" => match args {
            [floor, direction] => Ok(Command::Call {
                floor: parse_arg(floor, "floor")?,
                direction: parse_direction(direction)?,
            }),
            _ => Err(ParseError::Usage(CALL_USAGE)),
        },
        "select" | "s" => match args {
            [elevator, floor] => Ok(Command::Select {
                elevator: parse_arg(elevator, "elevator id")?,
                floor: parse_arg(floor, "floor")?,
            }),
            _ => Err(ParseError::Usage(SELECT_USAGE)),
        },
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_arg<T: std::str::FromStr>(token: &str, what: &'static str) -> Result<T, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidArgument(token.to_string(), what))
}

fn parse_direction(token: &str) -> Result<Direction, ParseError> {
    match token {
        "up" | "u" => Ok(Direction::Up),
        "down" | "d" => Ok(Direction::Down),
        _ => Err(ParseError::InvalidArgument(token.to_string(), "direction")),
    }
}

/**
 * Reads operator commands line by line and forwards them to the simulation driver.
 *
 * Runs on its own thread. Lines that fail to parse are logged and dropped. The reader stops after
 * forwarding `quit`, at end of input, or when the driver hangs up.
 *
 * # Fields
 * - `command_tx`:  Sends parsed commands to the driver.
 */
pub struct InputReader {
    command_tx: cbc::Sender<Command>,
}

impl InputReader {
    pub fn new(command_tx: cbc::Sender<Command>) -> InputReader {
        InputReader { command_tx }
    }

    pub fn run<R: BufRead>(self, reader: R) {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(command) => {
                    if self.command_tx.send(command).is_err() {
                        debug!("Driver stopped listening for commands");
                        return;
                    }
                    if command == Command::Quit {
                        return;
                    }
                }
                Err(e) => warn!("Ignoring input '{}': {}", line.trim(), e),
            }
        }
        debug!("Input closed");
    }
}
