// slotsim - terminal driver for the slot execution simulator
//
// Runs the engine at the configured cadence, logs per-slot telemetry, and
// prints the narrative briefing when the run ends.
//
// Usage:
//   slotsim --ticks 50
//   slotsim --scenario mint-rush --ticks 100 --seed 7
//   slotsim --scenario market-crash --ticks 30 --slot-time-ms 0 --json

use std::env;
use std::error::Error;
use std::process;
use std::thread;
use std::time::Duration;

use log::info;
use slotsim_core_rs::{
    summarize_or_fallback, BriefingReporter, Engine, Scenario, SimulationConfig,
};

const DEFAULT_TICKS: u64 = 50;

struct CliArgs {
    scenario: Scenario,
    ticks: u64,
    seed: u64,
    slot_time_ms: Option<u64>,
    json: bool,
}

fn usage() -> ! {
    eprintln!(
        "Usage: slotsim [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --scenario <normal|mint-rush|market-crash>  traffic profile (default: normal)\n\
         \x20 --ticks <N>                                 slots to simulate (default: {})\n\
         \x20 --seed <N>                                  RNG seed (default: 42)\n\
         \x20 --slot-time-ms <N>                          tick cadence, 0 = no sleep\n\
         \x20 --json                                      print the stats snapshot as JSON",
        DEFAULT_TICKS
    );
    process::exit(2);
}

fn parse_scenario(value: &str) -> Option<Scenario> {
    match value {
        "normal" => Some(Scenario::Normal),
        "mint-rush" => Some(Scenario::MintRush),
        "market-crash" => Some(Scenario::MarketCrash),
        _ => None,
    }
}

fn parse_args() -> CliArgs {
    let mut args = CliArgs {
        scenario: Scenario::Normal,
        ticks: DEFAULT_TICKS,
        seed: 42,
        slot_time_ms: None,
        json: false,
    };

    let mut iter = env::args().skip(1);
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--scenario" => {
                let value = iter.next().unwrap_or_else(|| usage());
                args.scenario = parse_scenario(&value).unwrap_or_else(|| {
                    eprintln!("unknown scenario: {}", value);
                    usage()
                });
            }
            "--ticks" => {
                let value = iter.next().unwrap_or_else(|| usage());
                args.ticks = value.parse().unwrap_or_else(|_| usage());
            }
            "--seed" => {
                let value = iter.next().unwrap_or_else(|| usage());
                args.seed = value.parse().unwrap_or_else(|_| usage());
            }
            "--slot-time-ms" => {
                let value = iter.next().unwrap_or_else(|| usage());
                args.slot_time_ms = Some(value.parse().unwrap_or_else(|_| usage()));
            }
            "--json" => args.json = true,
            "--help" | "-h" => usage(),
            other => {
                eprintln!("unknown option: {}", other);
                usage()
            }
        }
    }

    args
}

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let args = parse_args();

    let config = SimulationConfig {
        rng_seed: args.seed,
        ..SimulationConfig::default()
    };
    // A zero cadence means "step as fast as possible" for batch runs; the
    // engine itself still requires a positive cadence for timed drivers
    let cadence_ms = args.slot_time_ms.unwrap_or(config.slot_time_ms);

    let mut engine = Engine::new(config)?;
    engine.set_scenario(args.scenario);
    engine.start();

    info!(
        "starting run: scenario={} ticks={} seed={}",
        engine.scenario(),
        args.ticks,
        args.seed
    );

    for _ in 0..args.ticks {
        if !engine.is_running() {
            break;
        }
        let result = engine.tick()?;
        info!(
            "slot {}: batch={} legacy {}ok/{}drop/{}reorder reserved {}ok mev_delta=${:.0}",
            result.slot,
            result.batch_size,
            result.legacy_confirmed,
            result.legacy_dropped,
            result.legacy_reordered,
            result.reserved_confirmed,
            result.mev_lost_delta,
        );
        if cadence_ms > 0 {
            thread::sleep(Duration::from_millis(cadence_ms));
        }
    }

    engine.pause();

    let state = engine.state();
    info!(
        "run complete: {} tx/lane, legacy dropped {} ({:.1}%), mev lost ${:.0}",
        state.legacy_stats.total_tx,
        state.legacy_stats.dropped_tx,
        state.legacy_stats.drop_rate() * 100.0,
        state.legacy_stats.mev_lost,
    );

    let snapshot = engine.snapshot();
    println!();
    println!("{}", summarize_or_fallback(&BriefingReporter::new(), &snapshot));

    if args.json {
        println!();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}
