//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{state::DrivingState, types::Action};

/// Q-table mapping (state, action) pairs to learned value estimates.
///
/// Unseen pairs default to 0.0, so a lookup miss is a defined value rather
/// than an error. Keys are structural (state record + action enum), replacing
/// the string-concatenated keys of earlier implementations. The table carries
/// the learning and discount rates so the TD update lives next to the values
/// it reads and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QTable {
    /// Q-values: (state, action) -> value estimate
    values: HashMap<(DrivingState, Action), f64>,
    /// Learning rate (alpha)
    learning_rate: f64,
    /// Discount rate (gamma)
    discount_rate: f64,
    /// Fixed action set scanned by `best_value`.
    /// Invariant: non-empty, enforced by `AgentConfig::validate`.
    actions: Vec<Action>,
}

impl QTable {
    /// Create a new Q-table
    pub fn new(learning_rate: f64, discount_rate: f64, actions: Vec<Action>) -> Self {
        Self {
            values: HashMap::new(),
            learning_rate,
            discount_rate,
            actions,
        }
    }

    /// Get the stored value for a state-action pair, or 0.0 if absent
    pub fn value(&self, state: &DrivingState, action: Action) -> f64 {
        *self.values.get(&(*state, action)).unwrap_or(&0.0)
    }

    /// Maximum value over the fixed action set for the given state.
    ///
    /// An unvisited state returns 0.0, since every entry defaults to 0.0.
    pub fn best_value(&self, state: &DrivingState) -> f64 {
        self.actions
            .iter()
            .map(|&action| self.value(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Overwrite the value for a state-action pair, inserting if absent
    pub fn set(&mut self, state: DrivingState, action: Action, value: f64) {
        self.values.insert((state, action), value);
    }

    /// One-step Q-learning update: off-policy TD control
    ///
    /// Q(s,a) <- Q(s,a) + alpha * [r + gamma * max_a' Q(s',a') - Q(s,a)]
    ///
    /// `next_state` is the state re-sensed after the action executed.
    pub fn td_update(
        &mut self,
        state: DrivingState,
        action: Action,
        reward: f64,
        next_state: &DrivingState,
    ) {
        let current = self.value(&state, action);
        let td_target = reward + self.discount_rate * self.best_value(next_state);
        let new_value = current + self.learning_rate * (td_target - current);
        self.set(state, action, new_value);
    }

    /// The fixed action set, in greedy-search order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of state-action pairs with stored values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if no value has been stored yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Observation, Traffic, TrafficLight};

    fn table(learning_rate: f64, discount_rate: f64) -> QTable {
        QTable::new(learning_rate, discount_rate, Action::ALL.to_vec())
    }

    fn state(waypoint: Action) -> DrivingState {
        DrivingState::encode(
            &Observation {
                light: TrafficLight::Green,
                oncoming: Traffic::None,
                left: Traffic::None,
            },
            waypoint,
        )
    }

    #[test]
    fn test_unseen_pairs_default_to_zero() {
        let qtable = table(0.65, 0.35);
        let s = state(Action::Forward);
        for action in Action::ALL {
            assert_eq!(qtable.value(&s, action), 0.0);
        }
        assert_eq!(qtable.best_value(&s), 0.0);
        assert!(qtable.is_empty());
    }

    #[test]
    fn test_set_overwrites_last_write_wins() {
        let mut qtable = table(0.65, 0.35);
        let s = state(Action::Forward);

        qtable.set(s, Action::Left, 1.5);
        qtable.set(s, Action::Left, -0.25);

        assert_eq!(qtable.value(&s, Action::Left), -0.25);
        assert_eq!(qtable.len(), 1);
    }

    #[test]
    fn test_best_value_scans_all_actions() {
        let mut qtable = table(0.65, 0.35);
        let s = state(Action::Forward);

        qtable.set(s, Action::Wait, 0.5);
        qtable.set(s, Action::Forward, 2.0);
        qtable.set(s, Action::Right, 0.8);

        assert_eq!(qtable.best_value(&s), 2.0);
    }

    #[test]
    fn test_td_update_distinct_states() {
        let mut qtable = table(0.65, 0.35);
        let s = state(Action::Forward);
        let s2 = state(Action::Left);

        qtable.set(s2, Action::Left, 2.0);
        qtable.td_update(s, Action::Forward, 1.0, &s2);

        // target = 1.0 + 0.35 * 2.0 = 1.7; new = 0 + 0.65 * 1.7 = 1.105
        assert!((qtable.value(&s, Action::Forward) - 1.105).abs() < 1e-12);
    }

    #[test]
    fn test_td_update_self_loop() {
        let mut qtable = table(0.5, 0.9);
        let s = state(Action::Forward);

        qtable.set(s, Action::Forward, 1.0);
        qtable.td_update(s, Action::Forward, 2.0, &s);

        // best_value(s) before the write is 1.0 (the pre-update estimate)
        // target = 2.0 + 0.9 * 1.0 = 2.9; new = 1.0 + 0.5 * (2.9 - 1.0) = 1.95
        assert!((qtable.value(&s, Action::Forward) - 1.95).abs() < 1e-12);
    }
}
