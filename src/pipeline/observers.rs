//! Observer implementations for simulation runs
//!
//! Observers allow composable data collection during a run without coupling
//! the driver to specific output formats.

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, ports::Observer, q_learning::agent::StepRecord};

/// Progress bar observer - Shows run progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    total_infractions: usize,
    wins: usize,
    win_threshold: f64,
}

impl ProgressObserver {
    /// Create a new progress observer.
    ///
    /// `win_threshold` mirrors the agent's configured win threshold so the
    /// bar can show goal arrivals as they happen.
    pub fn new(win_threshold: f64) -> Self {
        Self {
            progress_bar: None,
            total_infractions: 0,
            wins: 0,
            win_threshold,
        }
    }
}

impl Observer for ProgressObserver {
    fn on_run_start(&mut self, total_trials: usize) -> Result<()> {
        let pb = ProgressBar::new(total_trials as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} trials ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_step(&mut self, _trial: usize, record: &StepRecord) -> Result<()> {
        if record.reward >= self.win_threshold {
            self.wins += 1;
        }
        Ok(())
    }

    fn on_trial_end(&mut self, trial: usize, infractions: usize) -> Result<()> {
        self.total_infractions += infractions;
        if let Some(pb) = &self.progress_bar {
            pb.set_position(trial as u64 + 1);
            pb.set_message(format!(
                "goals:{} infractions:{}",
                self.wins, self.total_infractions
            ));
        }
        Ok(())
    }

    fn on_run_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!(
                "goals:{} infractions:{}",
                self.wins, self.total_infractions
            ));
        }
        Ok(())
    }
}

/// Metrics observer - Tracks per-trial run metrics
pub struct MetricsObserver {
    trials: usize,
    steps_per_trial: Vec<usize>,
    current_steps: usize,
    infractions_per_trial: Vec<usize>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self {
            trials: 0,
            steps_per_trial: Vec::new(),
            current_steps: 0,
            infractions_per_trial: Vec::new(),
        }
    }

    /// Average decision steps per trial
    pub fn avg_trial_length(&self) -> f64 {
        if self.steps_per_trial.is_empty() {
            0.0
        } else {
            self.steps_per_trial.iter().sum::<usize>() as f64 / self.steps_per_trial.len() as f64
        }
    }

    /// Infraction counts per trial, in trial order
    pub fn infractions_per_trial(&self) -> &[usize] {
        &self.infractions_per_trial
    }

    /// Trials observed so far
    pub fn trials(&self) -> usize {
        self.trials
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_trial_start(&mut self, _trial: usize) -> Result<()> {
        self.current_steps = 0;
        Ok(())
    }

    fn on_step(&mut self, _trial: usize, _record: &StepRecord) -> Result<()> {
        self.current_steps += 1;
        Ok(())
    }

    fn on_trial_end(&mut self, _trial: usize, infractions: usize) -> Result<()> {
        self.trials += 1;
        self.steps_per_trial.push(self.current_steps);
        self.infractions_per_trial.push(infractions);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        state::DrivingState,
        types::{Action, Observation, Traffic, TrafficLight},
    };

    #[test]
    fn test_metrics_observer_tracks_trials() {
        let mut observer = MetricsObserver::new();

        observer.on_trial_start(0).unwrap();
        let observation = Observation {
            light: TrafficLight::Green,
            oncoming: Traffic::None,
            left: Traffic::None,
        };
        let record = StepRecord {
            t: 0,
            deadline: 10,
            state: DrivingState::encode(&observation, Action::Forward),
            action: Action::Forward,
            reward: 2.0,
        };
        observer.on_step(0, &record).unwrap();
        observer.on_step(0, &record).unwrap();
        observer.on_trial_end(0, 1).unwrap();

        assert_eq!(observer.trials(), 1);
        assert_eq!(observer.avg_trial_length(), 2.0);
        assert_eq!(observer.infractions_per_trial(), &[1]);
    }
}
