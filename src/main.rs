/* 3rd party libraries */
use clap::{Arg, Command as CliCommand};
use crossbeam_channel as cbc;
use log::{info, warn};
use std::thread::Builder;

/* Custom libraries */
use config::DisplayFormat;
use driver::{Command, InputReader, SimulationDriver};
use shared::StepReport;
use simulation::SimulationEngine;

/* Modules */
mod config;
mod coordinator;
mod driver;
mod elevator;
mod shared;
mod simulation;
mod view;

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = CliCommand::new("elevator-sim")
        .about("Multi-elevator dispatch simulator")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the TOML configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON document per tick instead of the floor diagram"),
        )
        .arg(
            Arg::new("ticks")
                .long("ticks")
                .takes_value(true)
                .help("Stop after this many ticks"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(
        config::load_config(config_path),
        format!("Could not load {}", config_path)
    );
    if matches.is_present("json") {
        config.display.format = DisplayFormat::Json;
    }
    let tick_limit = match matches.value_of("ticks") {
        Some(ticks) => Some(unwrap_or_exit!(ticks.parse::<u64>(), "Invalid --ticks")),
        None => None,
    };

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    // Nothing outside the driver stops the binary, it ends on `quit` or `--ticks`
    let terminate_rx = cbc::never::<()>();
    let (report_tx, report_rx) = cbc::unbounded::<StepReport>();

    // Start the input reader
    let input_reader = InputReader::new(command_tx);
    let input_thread = Builder::new().name("input_reader".into());
    unwrap_or_exit!(
        input_thread.spawn(move || input_reader.run(std::io::stdin().lock())),
        "Failed to start input thread"
    );

    // Start the renderer
    let num_floors = config.simulation.num_floors;
    let format = config.display.format;
    let renderer_thread = Builder::new().name("renderer".into());
    let renderer = unwrap_or_exit!(
        renderer_thread.spawn(move || render_reports(report_rx, format, num_floors)),
        "Failed to start renderer thread"
    );

    info!(
        "Elevator simulation initialized with {} elevators and {} floors",
        config.simulation.num_elevators, config.simulation.num_floors
    );

    // Run the simulation on the main thread
    let engine = SimulationEngine::from_config(&config.simulation);
    let driver = SimulationDriver::new(engine, tick_limit, command_rx, terminate_rx, report_tx);
    driver.run();

    if renderer.join().is_err() {
        warn!("Renderer thread panicked");
    }
}

fn render_reports(report_rx: cbc::Receiver<StepReport>, format: DisplayFormat, num_floors: u8) {
    for report in report_rx.iter() {
        match format {
            DisplayFormat::Diagram => println!("{}", view::render_diagram(&report, num_floors)),
            DisplayFormat::Json => match view::render_json(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => warn!("Failed to serialize report: {}", e),
            },
        }
    }
}
