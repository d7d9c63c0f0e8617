//! Cooling scheduler entry point: CLI wiring and scenario loading.

use std::fs;
use std::path::Path;
use std::process;

use tracing_subscriber::EnvFilter;

use cooling_sched::config::ScenarioConfig;
use cooling_sched::engine::CoolingOptimizer;
use cooling_sched::io::export::export_csv;
use cooling_sched::request::{ErrorResponse, optimize_json};

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    request_path: Option<String>,
    seed_override: Option<u64>,
    schedule_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("cooling-sched: building-wide evening cooling scheduler");
    eprintln!();
    eprintln!("Usage: cooling-sched [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        ScenarioConfig::PRESETS.join(", ")
    );
    eprintln!("  --request <path>         Optimize a JSON request file and print the JSON response");
    eprintln!("  --seed <u64>             Override the synthetic building seed (weather seed with --serve)");
    eprintln!("  --schedule-out <path>    Export assignments to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the REST API server");
        eprintln!("  --port <u16>             API server port (default: 5000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario, --preset or --request is given, the tower preset is used.");
}

/// Returns the value following flag `args[*i]`, advancing `i`.
fn flag_value<'a>(args: &'a [String], i: &mut usize, what: &str) -> &'a str {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(v) => v.as_str(),
        None => {
            eprintln!("error: {flag} requires {what}");
            process::exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        request_path: None,
        seed_override: None,
        schedule_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 5000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                cli.scenario_path = Some(flag_value(&args, &mut i, "a path argument").to_string());
            }
            "--preset" => {
                cli.preset = Some(flag_value(&args, &mut i, "a name argument").to_string());
            }
            "--request" => {
                cli.request_path = Some(flag_value(&args, &mut i, "a path argument").to_string());
            }
            "--seed" => {
                let v = flag_value(&args, &mut i, "a u64 argument");
                if let Ok(s) = v.parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{v}\" is not a valid u64");
                    process::exit(1);
                }
            }
            "--schedule-out" => {
                cli.schedule_out = Some(flag_value(&args, &mut i, "a path argument").to_string());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                let v = flag_value(&args, &mut i, "a u16 argument");
                if let Ok(p) = v.parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{v}\" is not a valid u16");
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the JSON interface on a request file and prints the response.
fn run_request(path: &str) {
    let body = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: cannot read \"{path}\": {e}");
            process::exit(1);
        }
    };

    let (json, ok) = match optimize_json(&body) {
        Ok(resp) => (serde_json::to_string_pretty(&resp), true),
        Err(e) => (serde_json::to_string_pretty(&ErrorResponse::new(e)), false),
    };
    match json {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("error: failed to serialize response: {e}");
            process::exit(1);
        }
    }
    if !ok {
        process::exit(1);
    }
}

fn load_scenario(cli: &CliArgs) -> ScenarioConfig {
    // --scenario takes priority, then --preset, then the tower default
    let loaded = if let Some(ref path) = cli.scenario_path {
        ScenarioConfig::from_toml_file(Path::new(path))
    } else if let Some(ref name) = cli.preset {
        ScenarioConfig::from_preset(name)
    } else {
        Ok(ScenarioConfig::tower())
    };
    let mut scenario = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if let Some(seed) = cli.seed_override {
        scenario.building.seed = seed;
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    scenario
}

#[cfg(feature = "api")]
fn run_server(port: u16, weather_seed: Option<u64>) {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use cooling_sched::api::AppState;

    let defaults = AppState::default();
    let state = Arc::new(AppState {
        weather_seed: weather_seed.unwrap_or(defaults.weather_seed),
        ..defaults
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(cooling_sched::api::serve(state, addr)) {
        eprintln!("error: server on {addr} failed: {e}");
        process::exit(1);
    }
}

fn main() {
    init_tracing();
    let cli = parse_args();

    #[cfg(feature = "api")]
    if cli.serve {
        run_server(cli.port, cli.seed_override);
        return;
    }

    if let Some(ref path) = cli.request_path {
        run_request(path);
        return;
    }

    let scenario = load_scenario(&cli);
    let apartments = scenario.apartments();
    let result =
        CoolingOptimizer::default().optimize(&apartments, &scenario.weather(), &scenario.tariff());

    for a in &result.assignments {
        println!("{a}");
    }
    for id in &result.unscheduled {
        println!("{id:<8} unscheduled");
    }
    println!("\n{}", result.metrics);

    if let Some(ref path) = cli.schedule_out {
        if let Err(e) = export_csv(&result.assignments, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Schedule written to {path}");
    }
}
