//! Train command - Run a learning simulation in the synthetic world

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::SyntheticWorld,
    cli::output,
    config::AgentConfig,
    pipeline::{ProgressObserver, SimulationConfig, SimulationRun},
    q_learning::DrivingAgent,
};

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("performance_report.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Run a learning simulation", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Number of trials to run
    #[arg(long, short = 't', default_value_t = 100)]
    pub trials: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Learning rate (alpha)
    #[arg(long, default_value_t = 0.65)]
    pub learning_rate: f64,

    /// Discount rate (gamma)
    #[arg(long, default_value_t = 0.35)]
    pub discount_rate: f64,

    /// Initial exploration probability
    #[arg(long, default_value_t = 0.1)]
    pub epsilon: f64,

    /// Epsilon decrement applied on each exploring decision
    #[arg(long, default_value_t = 0.01)]
    pub annealing_rate: f64,

    /// Epsilon value restored at each trial start inside the horizon
    #[arg(long, default_value_t = 0.05)]
    pub epsilon_reset_value: f64,

    /// Number of initial trials with per-trial epsilon reset
    #[arg(long, default_value_t = 200)]
    pub epsilon_reset_trials: usize,

    /// Optional path for writing the performance report as JSON
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    pub progress: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = AgentConfig::default()
        .with_learning_rate(args.learning_rate)
        .with_discount_rate(args.discount_rate)
        .with_initial_epsilon(args.epsilon)
        .with_annealing_rate(args.annealing_rate)
        .with_epsilon_reset(args.epsilon_reset_value, args.epsilon_reset_trials);
    let config = match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    let win_threshold = config.win_reward_threshold;

    let (mut env, planner) = SyntheticWorld::create(args.seed);
    let mut agent = DrivingAgent::new(config, Box::new(planner))?;

    let mut run = SimulationRun::new(SimulationConfig {
        trials: args.trials,
    });
    if args.progress {
        run = run.with_observer(Box::new(ProgressObserver::new(win_threshold)));
    }

    println!("RUNNING SIMULATION FOR {} TRIALS...", args.trials);
    let report = run.run(&mut agent, &mut env)?;

    output::print_section("Simulation complete");
    println!("{report}");
    output::print_stats_table(&[
        ("Learned Q entries", agent.q_table().len().to_string()),
        ("Final epsilon", format!("{:.4}", agent.epsilon())),
    ]);

    if let Some(raw_path) = &args.summary {
        let path = sanitize_summary_path(raw_path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        report.save(&path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_appends_json_extension() {
        let path = sanitize_summary_path(Path::new("run_overview"));
        assert_eq!(path, PathBuf::from("run_overview.json"));
    }

    #[test]
    fn test_sanitize_keeps_json_extension() {
        let path = sanitize_summary_path(Path::new("report.JSON"));
        assert_eq!(path, PathBuf::from("report.JSON"));
    }

    #[test]
    fn test_sanitize_directory_gets_default_name() {
        let raw = format!("reports{}", std::path::MAIN_SEPARATOR);
        let path = sanitize_summary_path(Path::new(&raw));
        assert_eq!(path, Path::new("reports").join("performance_report.json"));
    }
}
