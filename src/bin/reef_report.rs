// Usage: reef_report [PARAMETERS.json] [--json]
//
// Prints the indicator report for one parameter vector. Parameters come from
// the JSON file when given, the built-in defaults otherwise. `--json` adds a
// JSON line on stdout after the console report.

use std::env;
use std::process::ExitCode;

use colored::Colorize;
use marine_eco_rust::parameter_loader::load_parameters;
use marine_eco_rust::sink::{ConsoleSink, JsonSink, SinkHandle};
use marine_eco_rust::{ParameterVector, SimProps, Simulation};
use tracing::info;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let emit_json = args.iter().any(|arg| arg == "--json");
    let path = args.iter().find(|arg| !arg.starts_with("--"));

    let params = match path {
        Some(path) => match load_parameters(path) {
            Ok(params) => params,
            Err(error) => {
                eprintln!("{} {}", "❌ Could not load parameters:".red().bold(), error);
                return ExitCode::FAILURE;
            }
        },
        None => ParameterVector::default(),
    };

    let mut sinks = vec![SinkHandle::new(Box::new(ConsoleSink::new("Marine Ecosystem Report")))];
    if emit_json {
        sinks.push(SinkHandle::new(Box::new(JsonSink::stdout())));
    }

    let mut sim = Simulation::new(SimProps {
        name: "reef_report",
        sinks,
    });
    info!(
        target: "marine_eco::simulation",
        source = path.map(String::as_str).unwrap_or("defaults"),
        sinks = ?sim.sink_names(),
        "report.start"
    );

    sim.tick(&params);
    ExitCode::SUCCESS
}
