//! wave-replay: run a wave scenario headless and print its timeline.
//!
//! Usage:
//!   wave-replay [scenario.json] [--dt 0.1] [--max-secs 600] [--json]
//!
//! Without a scenario path the built-in demo is used. Set `RUST_LOG=debug`
//! to see every spawn and drop as it happens.

use std::path::PathBuf;
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use waveline_core::services::{SceneRegistry, TimelineLog};
use waveline_core::types::TimelineStamp;
use waveline_sim::scenario::{self, ScenarioFile};

const TIMELINE_LABEL: &str = "replay";

struct Options {
    scenario: Option<PathBuf>,
    dt: f64,
    max_secs: f64,
    json: bool,
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {message}");
            print_usage();
            process::exit(1);
        }
    };

    let scenario = match &options.scenario {
        Some(path) => match scenario::load_scenario(path) {
            Ok(scenario) => scenario,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to load scenario");
                process::exit(1);
            }
        },
        None => scenario::demo(),
    };

    let log = run(scenario, &options);

    if options.json {
        for event in &log.events {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(e) => error!(error = %e, "failed to encode event"),
            }
        }
    } else {
        for event in &log.events {
            println!("{:>8.2}s  {:<12} {}", event.time.secs, event.kind, event.id);
        }
    }
}

fn run(scenario: ScenarioFile, options: &Options) -> TimelineLog {
    let total = scenario.map.enemy_count;
    let field = scenario.grid_map();
    let mut controller = scenario.into_controller(SceneRegistry::default(), field);
    let mut log = TimelineLog::default();

    info!(enemies = total, waves = controller.waves().len(), dt = options.dt, "replay started");

    let mut frame: u64 = 0;
    loop {
        // Frame time from the counter so long runs don't accumulate drift.
        let now = TimelineStamp::new(TIMELINE_LABEL, frame as f64 * options.dt);
        if now.secs > options.max_secs {
            info!(t = now.secs, remaining = controller.enemy_count(), "time limit reached");
            break;
        }
        if let Err(e) = controller.tick(&mut log, options.dt, &now) {
            error!(t = now.secs, error = %e, "spawn failed");
            process::exit(1);
        }
        if controller.is_cleared() {
            info!(t = now.secs, "all waves cleared");
            break;
        }
        frame += 1;
    }

    info!(
        events = log.events.len(),
        enemy_count = controller.enemy_count(),
        "replay finished"
    );
    log
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        scenario: None,
        dt: 0.1,
        max_secs: 600.0,
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--dt" => {
                i += 1;
                options.dt = parse_positive(args.get(i), "--dt")?;
            }
            "--max-secs" => {
                i += 1;
                options.max_secs = parse_positive(args.get(i), "--max-secs")?;
            }
            "--json" => options.json = true,
            "help" | "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other if other.starts_with("--") => return Err(format!("unknown flag: {other}")),
            path => options.scenario = Some(PathBuf::from(path)),
        }
        i += 1;
    }
    Ok(options)
}

fn parse_positive(value: Option<&String>, flag: &str) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    match value.parse::<f64>() {
        Ok(v) if v > 0.0 => Ok(v),
        _ => Err(format!("{flag} must be a positive number, got {value}")),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_usage() {
    eprintln!(
        "wave-replay: run a WAVELINE scenario headless\n\
         \n\
         Usage: wave-replay [scenario.json] [options]\n\
         \n\
           --dt <secs>        Frame interval (default: 0.1)\n\
           --max-secs <secs>  Stop after this much timeline time (default: 600)\n\
           --json             Print timeline events as JSON lines\n\
         \n\
         Without a scenario file the built-in demo is replayed.\n"
    );
}
