//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::Action,
};

/// Configuration for creating a driving agent.
///
/// Collects every learning hyperparameter in one record so the single
/// parameterized engine can reproduce either historical tuning by swapping
/// values rather than code.
///
/// # Examples
///
/// ```
/// use smartcab::AgentConfig;
///
/// let config = AgentConfig::default()
///     .with_seed(42)
///     .with_learning_rate(0.1)
///     .with_discount_rate(0.7)
///     .with_initial_epsilon(0.0);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Blend factor for TD updates (alpha)
    pub learning_rate: f64,
    /// Weight on estimated future value in the TD target (gamma)
    pub discount_rate: f64,
    /// Exploration probability at the start of a run
    pub initial_epsilon: f64,
    /// Amount subtracted from epsilon on each exploring decision
    pub epsilon_annealing_rate: f64,
    /// Value epsilon is restored to at each trial start inside the horizon
    pub epsilon_reset_value: f64,
    /// Number of initial trials during which epsilon is reset each trial
    pub epsilon_reset_trials: usize,
    /// Rewards at or above this count as reaching the goal
    pub win_reward_threshold: f64,
    /// Rewards at or below this count as rule violations
    pub infraction_reward_threshold: f64,
    /// Valid driving actions, in greedy-search order
    pub actions: Vec<Action>,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.65,
            discount_rate: 0.35,
            initial_epsilon: 0.1,
            epsilon_annealing_rate: 0.01,
            epsilon_reset_value: 0.05,
            epsilon_reset_trials: 200,
            win_reward_threshold: 5.0,
            infraction_reward_threshold: -1.0,
            actions: Action::ALL.to_vec(),
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount rate.
    pub fn with_discount_rate(mut self, discount_rate: f64) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Set the initial exploration probability.
    pub fn with_initial_epsilon(mut self, epsilon: f64) -> Self {
        self.initial_epsilon = epsilon;
        self
    }

    /// Set the epsilon annealing step.
    pub fn with_annealing_rate(mut self, rate: f64) -> Self {
        self.epsilon_annealing_rate = rate;
        self
    }

    /// Set the per-trial epsilon reset value and horizon.
    pub fn with_epsilon_reset(mut self, value: f64, trials: usize) -> Self {
        self.epsilon_reset_value = value;
        self.epsilon_reset_trials = trials;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration, failing fast on values that would make
    /// action selection or the update rule ill-defined.
    pub fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "action set must not be empty".to_string(),
            });
        }

        for (name, value) in [
            ("learning_rate", self.learning_rate),
            ("discount_rate", self.discount_rate),
            ("initial_epsilon", self.initial_epsilon),
            ("epsilon_reset_value", self.epsilon_reset_value),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be in [0, 1], got {value}"),
                });
            }
        }

        if !self.epsilon_annealing_rate.is_finite() || self.epsilon_annealing_rate < 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "epsilon_annealing_rate must be finite and non-negative, got {}",
                    self.epsilon_annealing_rate
                ),
            });
        }

        if !self.win_reward_threshold.is_finite() || !self.infraction_reward_threshold.is_finite() {
            return Err(Error::InvalidConfiguration {
                message: "reward thresholds must be finite".to_string(),
            });
        }

        if self.infraction_reward_threshold >= self.win_reward_threshold {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "infraction threshold {} must be below win threshold {}",
                    self.infraction_reward_threshold, self.win_reward_threshold
                ),
            });
        }

        Ok(())
    }
}
