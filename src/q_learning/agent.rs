//! The learning driving agent
//!
//! `DrivingAgent` owns all mutable learning state - the Q-table, the
//! exploration schedule, and the performance counters - and runs the full
//! sense -> encode -> select -> act -> re-sense -> learn -> record sequence
//! once per simulation step. One instance per simulated vehicle; nothing is
//! shared or global.

use serde::{Deserialize, Serialize};

use crate::{
    config::AgentConfig,
    error::Result,
    ports::{Environment, RoutePlanner},
    q_learning::{
        exploration::ExplorationSchedule,
        policy::EpsilonGreedyPolicy,
        q_table::QTable,
        stats::{PerformanceReport, PerformanceTracker},
    },
    state::DrivingState,
    types::{Action, Intersection},
};

/// Everything that happened in one decision step, for observers and logs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StepRecord {
    /// Simulation tick within the trial
    pub t: usize,
    /// Steps remaining before the deadline when the decision was made
    pub deadline: i64,
    /// State the decision was made in
    pub state: DrivingState,
    /// Action taken
    pub action: Action,
    /// Reward the environment assigned
    pub reward: f64,
}

/// Tabular Q-learning agent for the smartcab world
pub struct DrivingAgent {
    planner: Box<dyn RoutePlanner>,
    q_table: QTable,
    policy: EpsilonGreedyPolicy,
    stats: PerformanceTracker,
    trial_count: usize,
    trial_active: bool,
}

impl DrivingAgent {
    /// Create an agent from a validated configuration and a route planner.
    ///
    /// # Errors
    ///
    /// Fails fast with `Error::InvalidConfiguration` when the configuration
    /// is unusable (empty action set, rates outside [0, 1], inverted reward
    /// thresholds).
    pub fn new(config: AgentConfig, planner: Box<dyn RoutePlanner>) -> Result<Self> {
        config.validate()?;

        let schedule = ExplorationSchedule::new(
            config.initial_epsilon,
            config.epsilon_annealing_rate,
            config.epsilon_reset_value,
            config.epsilon_reset_trials,
        );
        let mut policy = EpsilonGreedyPolicy::new(schedule);
        if let Some(seed) = config.seed {
            policy = policy.with_seed(seed);
        }

        Ok(Self {
            planner,
            q_table: QTable::new(config.learning_rate, config.discount_rate, config.actions),
            policy,
            stats: PerformanceTracker::new(
                config.win_reward_threshold,
                config.infraction_reward_threshold,
            ),
            trial_count: 0,
            trial_active: false,
        })
    }

    /// Prepare for a new trip.
    ///
    /// Routes the planner to the destination, flushes the prior trial's
    /// violation count into the history (unless `end_trial` already did),
    /// and applies the per-trial epsilon reset rule.
    pub fn reset(&mut self, destination: Option<Intersection>) {
        self.planner.route_to(destination);
        if self.trial_active {
            self.stats.end_trial();
        }
        self.trial_active = true;
        self.trial_count += 1;
        self.policy.on_trial_reset(self.trial_count);
    }

    /// Close the current trial explicitly, flushing its violation count.
    /// Returns the flushed count. Safe to call when no trial is active.
    pub fn end_trial(&mut self) -> usize {
        if self.trial_active {
            self.trial_active = false;
            self.stats.end_trial()
        } else {
            0
        }
    }

    /// Run one full decision step against the environment.
    ///
    /// Two-phase by construction: the resulting state used in the TD target
    /// is re-sensed and re-encoded after the action has executed.
    pub fn update(&mut self, env: &mut dyn Environment, t: usize) -> StepRecord {
        // Gather inputs
        let waypoint = self.planner.next_waypoint();
        let inputs = env.sense();
        let deadline = env.deadline();

        let state = DrivingState::encode(&inputs, waypoint);

        // Select action according to the policy
        let action = self.policy.select(&self.q_table, &state);

        // Execute action and get reward
        let reward = env.act(action);

        // Learn: re-sense, re-encode, then apply the TD update
        let next_inputs = env.sense();
        let next_waypoint = self.planner.next_waypoint();
        let next_state = DrivingState::encode(&next_inputs, next_waypoint);
        self.q_table.td_update(state, action, reward, &next_state);

        self.stats.record(reward);

        StepRecord {
            t,
            deadline,
            state,
            action,
            reward,
        }
    }

    /// Read-only summary of the run so far
    pub fn performance_report(&self, total_trials: usize) -> PerformanceReport {
        self.stats.summary(total_trials)
    }

    /// Current exploration probability
    pub fn epsilon(&self) -> f64 {
        self.policy.epsilon()
    }

    /// The learned Q-table
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Violation count of the trial currently in progress
    pub fn trial_infractions(&self) -> usize {
        self.stats.trial_infractions()
    }

    /// Trials started so far
    pub fn trial_count(&self) -> usize {
        self.trial_count
    }
}
