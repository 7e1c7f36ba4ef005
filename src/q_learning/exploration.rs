//! Exploration-rate annealing schedule

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Two-phase epsilon schedule for epsilon-greedy exploration.
///
/// During the first `reset_trials` trials, epsilon is restored to
/// `reset_value` at every trial boundary, holding exploration at a
/// near-constant low rate. Past that horizon the per-trial reset stops and
/// epsilon keeps annealing toward zero from wherever it stands.
///
/// Epsilon is decremented only on exploring decisions, not on every step, so
/// the schedule anneals faster while it explores more. Both behaviors are
/// intentional and preserved from the tuned reference agent; changing either
/// changes the learning dynamics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationSchedule {
    epsilon: f64,
    annealing_rate: f64,
    reset_value: f64,
    reset_trials: usize,
}

impl ExplorationSchedule {
    /// Create a new schedule.
    ///
    /// `initial_epsilon` applies until the first trial reset; `reset_value`
    /// is the floor restored at each trial start within the horizon.
    pub fn new(
        initial_epsilon: f64,
        annealing_rate: f64,
        reset_value: f64,
        reset_trials: usize,
    ) -> Self {
        Self {
            epsilon: initial_epsilon,
            annealing_rate,
            reset_value,
            reset_trials,
        }
    }

    /// Current exploration probability
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Draw once; returns true with probability epsilon.
    ///
    /// On the exploring branch, epsilon is decremented by the annealing rate
    /// and clamped at zero so repeated decrements can never drive it negative.
    pub fn should_explore<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if rng.random::<f64>() < self.epsilon {
            self.epsilon = (self.epsilon - self.annealing_rate).max(0.0);
            true
        } else {
            false
        }
    }

    /// Apply the per-trial reset rule at a trial boundary.
    ///
    /// `trial_index` is the 1-based count of trials started so far. Within
    /// the reset horizon epsilon snaps back to the reset value regardless of
    /// where annealing left it; beyond the horizon it is left alone.
    pub fn on_trial_reset(&mut self, trial_index: usize) {
        if trial_index < self.reset_trials {
            self.epsilon = self.reset_value;
        }
    }
}
