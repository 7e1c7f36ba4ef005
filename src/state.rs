//! Canonical driving-state representation
//!
//! The learned policy is tabular, so two observations that read the same must
//! collapse to one table key. `DrivingState` is a fixed-shape record with
//! structural equality and hashing; encoding is a pure function of the sensor
//! reading and the planner's waypoint hint.

use serde::{Deserialize, Serialize};

use crate::types::{Action, Observation, Traffic, TrafficLight};

/// Canonical, hashable state the policy conditions on.
///
/// Four discrete fields: light phase, oncoming-traffic intent, left-traffic
/// intent, and the routing hint toward the destination. The whole space is
/// 2 x 4 x 4 x 4 = 128 states, so the Q-table stays small by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrivingState {
    pub light: TrafficLight,
    pub oncoming: Traffic,
    pub left: Traffic,
    pub waypoint: Action,
}

impl DrivingState {
    /// Encode a sensor reading plus the current waypoint hint.
    ///
    /// Pure and deterministic: the same inputs always produce a state that
    /// compares equal and hashes identically, which Q-table lookups rely on.
    pub fn encode(inputs: &Observation, waypoint: Action) -> Self {
        Self {
            light: inputs.light,
            oncoming: inputs.oncoming,
            left: inputs.left,
            waypoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use super::*;

    fn hash_of(state: &DrivingState) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_encode_is_deterministic() {
        let inputs = Observation {
            light: TrafficLight::Green,
            oncoming: Traffic::Forward,
            left: Traffic::None,
        };

        let a = DrivingState::encode(&inputs, Action::Left);
        let b = DrivingState::encode(&inputs, Action::Left);

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_encode_distinguishes_waypoint() {
        let inputs = Observation {
            light: TrafficLight::Red,
            oncoming: Traffic::None,
            left: Traffic::None,
        };

        let forward = DrivingState::encode(&inputs, Action::Forward);
        let right = DrivingState::encode(&inputs, Action::Right);

        assert_ne!(forward, right);
    }
}
