//! skirmish-runner: headless VOIDSIEGE match driver.
//!
//! Usage:
//!   skirmish-runner run --seed 7 --ticks 7200 --auto
//!   skirmish-runner run --rules hard.json --place 1@150 --place 3@200

use std::path::{Path, PathBuf};
use std::process;

use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use voidsiege_core::commands::PlayerCommand;
use voidsiege_core::constants::GROUND_Y;
use voidsiege_core::enums::{AttackerArchetype, Faction, MatchPhase};
use voidsiege_core::events::MatchEvent;
use voidsiege_core::rules::MatchRules;
use voidsiege_core::state::MatchSummary;
use voidsiege_sim::{MatchEngine, SimConfig};

/// Where auto-deployed units are dropped.
const FORWARD_LINE_X: f64 = 150.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "skirmish-runner: headless VOIDSIEGE match driver\n\
         \n\
         Commands:\n\
         \n\
         run       Play a match without a renderer and print a JSON report\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --ticks <N>        Maximum ticks to run (default: 3600)\n\
           --dt <secs>        Frame delta per tick (default: 0.016)\n\
           --rules <path>     Match rules JSON; missing fields keep defaults\n\
           --place <ID@X>     Place archetype ID at x before the first tick (repeatable)\n\
           --auto             Keep deploying archetypes in rotation whenever affordable\n\
         \n\
         Environment:\n\
         \n\
           RUST_LOG           Log filter, e.g. RUST_LOG=voidsiege_sim=debug\n\
         \n\
         Examples:\n\
         \n\
           skirmish-runner run --seed 7 --ticks 7200 --auto\n\
           skirmish-runner run --rules hard.json --place 1@150 --place 3@200\n"
    );
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn parse_rules_path(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--rules" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

/// Collect every `--place ID@X`, skipping malformed entries.
fn parse_placements(args: &[String]) -> Vec<(u8, f64)> {
    let mut placements = Vec::new();
    for i in 0..args.len() {
        if args[i] == "--place" && i + 1 < args.len() {
            match parse_placement(&args[i + 1]) {
                Some(p) => placements.push(p),
                None => eprintln!("Warning: ignoring malformed placement '{}'", args[i + 1]),
            }
        }
    }
    placements
}

fn parse_placement(raw: &str) -> Option<(u8, f64)> {
    let (id, x) = raw.split_once('@')?;
    Some((id.parse().ok()?, x.parse().ok()?))
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// What the runner prints once the match stops.
#[derive(Debug, Serialize)]
struct RunReport {
    seed: u64,
    ticks_run: u64,
    elapsed_secs: f64,
    phase: MatchPhase,
    wave: u32,
    score: u32,
    resources: u32,
    units_deployed: u32,
    attackers_lost: u32,
    defenders_killed: u32,
    attackers_alive: usize,
    defenders_alive: usize,
    summary: Option<MatchSummary>,
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let seed: u64 = parse_value(args, "--seed").unwrap_or(42);
    let max_ticks: u64 = parse_value(args, "--ticks").unwrap_or(3600);
    let dt: f64 = parse_value(args, "--dt").unwrap_or(0.016);
    let auto = has_flag(args, "--auto");

    let rules = match parse_rules_path(args) {
        Some(path) => match load_rules(&path) {
            Ok(rules) => rules,
            Err(e) => {
                error!(path = %path.display(), "failed to load rules: {e}");
                process::exit(1);
            }
        },
        None => MatchRules::default(),
    };

    let mut engine = MatchEngine::new(SimConfig {
        seed,
        rules,
        ..Default::default()
    });

    engine.queue_commands(
        parse_placements(args)
            .into_iter()
            .map(|(archetype_id, x)| PlayerCommand::PlaceUnit {
                archetype_id,
                x,
                y: GROUND_Y,
            }),
    );

    let mut report = RunReport {
        seed,
        ticks_run: 0,
        elapsed_secs: 0.0,
        phase: MatchPhase::Running,
        wave: 1,
        score: 0,
        resources: 0,
        units_deployed: 0,
        attackers_lost: 0,
        defenders_killed: 0,
        attackers_alive: 0,
        defenders_alive: 0,
        summary: None,
    };
    let mut rotation = 0usize;

    for _ in 0..max_ticks {
        if auto {
            let next = AttackerArchetype::ALL[rotation % AttackerArchetype::ALL.len()];
            if engine.resources() >= next.descriptor().cost {
                engine.queue_command(PlayerCommand::PlaceUnit {
                    archetype_id: next.id(),
                    x: FORWARD_LINE_X,
                    y: GROUND_Y,
                });
                rotation += 1;
            }
        }

        let snapshot = engine.tick(dt);
        for event in &snapshot.events {
            match event {
                MatchEvent::UnitDeployed { .. } => report.units_deployed += 1,
                MatchEvent::UnitKilled { kind, .. } => match kind.faction() {
                    Faction::Attacker => report.attackers_lost += 1,
                    Faction::Defender => report.defenders_killed += 1,
                },
                _ => {}
            }
        }

        if snapshot.phase == MatchPhase::Ended {
            break;
        }
    }

    let time = engine.time();
    report.ticks_run = time.tick;
    report.elapsed_secs = time.elapsed_secs;
    report.phase = engine.phase();
    report.wave = engine.wave();
    report.score = engine.score();
    report.resources = engine.resources();
    report.attackers_alive = engine.attacker_units().len();
    report.defenders_alive = engine.defender_units().len();
    report.summary = engine.summary();

    info!(
        ticks = report.ticks_run,
        wave = report.wave,
        score = report.score,
        "run finished"
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to serialize report: {e}");
            process::exit(1);
        }
    }
}

fn load_rules(path: &Path) -> Result<MatchRules, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(MatchRules::from_json_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_placements() {
        let a = args(&["--place", "1@150", "--place", "bogus", "--place", "4@220.5"]);
        assert_eq!(parse_placements(&a), vec![(1, 150.0), (4, 220.5)]);
    }

    #[test]
    fn test_parse_value_defaults() {
        let a = args(&["--seed", "9", "--dt", "x"]);
        assert_eq!(parse_value::<u64>(&a, "--seed"), Some(9));
        assert_eq!(parse_value::<f64>(&a, "--dt"), None);
        assert_eq!(parse_value::<u64>(&a, "--ticks"), None);
        assert!(!has_flag(&a, "--auto"));
    }

    #[test]
    fn test_load_partial_rules_file() {
        let path = std::env::temp_dir().join("skirmish-runner-rules-test.json");
        std::fs::write(&path, r#"{ "difficulty": "hard", "initial_resources": 150 }"#).unwrap();
        let rules = load_rules(&path).unwrap();
        assert_eq!(rules.initial_resources, 150);
        assert_eq!(rules.max_resources, 200);
        let _ = std::fs::remove_file(&path);
    }
}
