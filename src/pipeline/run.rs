//! Simulation run driver
//!
//! Drives an agent through a configured number of trials against an
//! environment, notifying observers along the way. The driver owns no
//! learning state; it only sequences trial boundaries and steps.

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{Environment, Observer},
    q_learning::{DrivingAgent, PerformanceReport},
};

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of trials to run
    pub trials: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { trials: 100 }
    }
}

/// Drives trials for a single agent against an environment
pub struct SimulationRun {
    config: SimulationConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl SimulationRun {
    /// Create a new run driver
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the run
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run all trials and return the final performance report.
    ///
    /// Each trial: reset the environment and agent, step until the
    /// environment declares the trial complete, then flush the trial's
    /// statistics.
    pub fn run(
        &mut self,
        agent: &mut DrivingAgent,
        env: &mut dyn Environment,
    ) -> Result<PerformanceReport> {
        for observer in &mut self.observers {
            observer.on_run_start(self.config.trials)?;
        }

        for trial in 0..self.config.trials {
            let destination = env.reset_trial();
            agent.reset(destination);

            for observer in &mut self.observers {
                observer.on_trial_start(trial)?;
            }

            let mut t = 0;
            while !env.trial_complete() {
                let record = agent.update(env, t);
                for observer in &mut self.observers {
                    observer.on_step(trial, &record)?;
                }
                t += 1;
            }

            let infractions = agent.end_trial();
            for observer in &mut self.observers {
                observer.on_trial_end(trial, infractions)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        Ok(agent.performance_report(self.config.trials))
    }
}
