/* 3rd party libraries */
use clap::Arg;
use clap::Command;
use log::LevelFilter;
use std::io::BufRead;
use std::io::Write;

/* Custom libraries */
use dispatch::DispatchRng;
use dispatch::ElevatorControlSystem;

/* Modules */
mod config;
mod dispatch;
mod elevator;
mod shared;

/* Main */
fn main() {
    let matches = Command::new("elevator-control")
        .about("Dispatch and motion simulator for a bank of elevators")
        .arg(
            Arg::new("num_elevators")
                .help("Number of elevators in the bank (overrides the config file)")
                .value_parser(clap::value_parser!(usize))
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .get_matches();

    init_logger();

    let config_path = matches.get_one::<String>("config").unwrap();
    let config = crate::unwrap_or_exit!(
        config::load_or_default(config_path),
        "Failed to load configuration"
    );

    let num_elevators = matches
        .get_one::<usize>("num_elevators")
        .copied()
        .unwrap_or(config.simulation.n_elevators);
    if num_elevators == 0 {
        log::error!("At least one elevator is required");
        std::process::exit(1);
    }

    let mut ecs = match config.simulation.rng_seed {
        Some(seed) => {
            ElevatorControlSystem::with_rng(num_elevators, DispatchRng::from_seed_u64(seed))
        }
        None => ElevatorControlSystem::new(num_elevators),
    };

    run_shell(&mut ecs);
}

// Installs env_logger behind the log facade. The filter is left wide open
// and the effective level is driven through `log::set_max_level`, so the
// `debug`/`info` shell commands can raise it at runtime.
fn init_logger() {
    let logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
            .build();
    log::set_boxed_logger(Box::new(logger)).expect("Failed to install logger");
    log::set_max_level(LevelFilter::Error);
}

// Line-oriented shell around the four core operations. One command per
// line; the loop ends at EOF.
fn run_shell(ecs: &mut ElevatorControlSystem) {
    let stdin = std::io::stdin();

    print_prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        handle_command(ecs, line.trim());
        print_prompt();
    }
}

fn print_prompt() {
    print!("Enter action: ");
    let _ = std::io::stdout().flush();
}

fn handle_command(ecs: &mut ElevatorControlSystem, line: &str) {
    let mut parts = line.split_whitespace();

    match parts.next() {
        Some("status") => {
            let status =
                serde_json::to_string(&ecs.status()).expect("Failed to serialize status");
            println!("{}", status);
        }
        Some("step") => {
            ecs.step();
            println!("Step action performed");
            let pending = ecs.pending_requests();
            if pending > 0 {
                println!("{} pickup request(s) still pending", pending);
            }
        }
        Some("pickup") => {
            match (parse_arg::<i32>(parts.next()), parse_arg::<i32>(parts.next())) {
                (Some(floor), Some(direction)) => {
                    if let Err(e) = ecs.pickup(floor, direction) {
                        println!("Rejected: {}", e);
                    }
                }
                _ => println!("Usage: pickup <floor> <direction>"),
            }
        }
        Some("update") => {
            match (
                parse_arg::<usize>(parts.next()),
                parse_arg::<i32>(parts.next()),
                parse_arg::<i32>(parts.next()),
            ) {
                (Some(elevator_id), Some(floor), Some(goal)) => {
                    if let Err(e) = ecs.update(elevator_id, floor, goal) {
                        println!("Rejected: {}", e);
                    }
                }
                _ => println!("Usage: update <elevator_id> <floor> <goal>"),
            }
        }
        Some("debug") => log::set_max_level(LevelFilter::Debug),
        Some("info") => log::set_max_level(LevelFilter::Info),
        Some(other) => println!("Unknown action: {}", other),
        None => {}
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<&str>) -> Option<T> {
    arg.and_then(|value| value.parse().ok())
}
