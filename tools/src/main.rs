//! sim-runner: headless runner for the shop simulation.
//!
//! Usage:
//!   sim-runner --seed 12345 --ticks 960
//!   sim-runner --seed 12345 --config shop.json
//!   sim-runner --ipc-mode
//!
//! In IPC mode a UI process drives the engine over stdin/stdout with
//! line-delimited JSON; the runner relays snapshots back after every
//! request. The payloads carry no simulation semantics of their own.

use anyhow::Result;
use shopsim_core::{
    command::PlayerCommand,
    config::ShopConfig,
    engine::ShopEngine,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    Tick { count: u64 },
    Command { command: PlayerCommand },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ticks = parse_arg(&args, "--ticks", 960u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let config = match args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str())
    {
        Some(path) => ShopConfig::from_json_file(Path::new(path))?,
        None => ShopConfig::default(),
    };

    let run_id = format!("run-{seed}-{}", unix_seconds());
    let mut engine = ShopEngine::build(run_id, seed, config)?;

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        println!("shop sim-runner");
        println!("  seed:  {seed}");
        println!("  ticks: {ticks}");
        println!();
        run_headless(&mut engine, ticks);
        print_summary(&engine);
    }

    Ok(())
}

/// Fast-forward `ticks` minutes. Incidents pause the clock until resolved,
/// so a headless run always takes the first option to keep moving.
fn run_headless(engine: &mut ShopEngine, ticks: u64) {
    for _ in 0..ticks {
        if engine.state.incident.is_some() {
            log::info!("auto-resolving incident with option 0");
            engine.resolve_incident(0);
        }
        if engine.paused() {
            continue; // player pause never set headlessly; defensive
        }
        if let Err(e) = engine.tick() {
            log::error!("tick failed: {e}");
            break;
        }
    }
}

fn run_ipc_loop(engine: &mut ShopEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::Tick { count } => {
                // The driver owns the schedule; paused ticks are no-ops.
                engine.run_ticks(count)?;
            }
            IpcRequest::GetState => {}
            IpcRequest::Command { command } => {
                engine.apply_command(command);
            }
        }
        writeln!(stdout, "{}", serde_json::to_string(&engine.snapshot())?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(engine: &ShopEngine) {
    let snapshot = engine.snapshot();
    println!("=== RUN SUMMARY ===");
    println!("  run_id: {}", snapshot.run_id);
    println!("  time:   {} (tick {})", snapshot.time_label, snapshot.tick);
    println!("  cash:   ${:.2}", snapshot.cash);
    println!();
    println!("  product        stock  sold(today)  sold(total)");
    for row in &snapshot.products {
        println!(
            "  {:<14} {:>5}  {:>11}  {:>11}",
            row.name, row.stock, row.sold_today, row.sold_lifetime
        );
    }
    println!();
    println!("  recent activity:");
    for line in &snapshot.recent_log {
        println!("    {line}");
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
