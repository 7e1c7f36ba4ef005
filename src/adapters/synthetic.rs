//! Synthetic traffic world for demos and integration tests
//!
//! A randomized stand-in for a real grid simulator: trips are a random
//! number of legs, observations are rolled fresh each step, and rewards
//! follow a toy right-of-way rule. There is no map topology here - the world
//! only tracks how far along its trip the cab is - but it exercises every
//! port the learning core consumes, including arrival and deadline expiry.

use std::sync::{Arc, Mutex};

use rand::{Rng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    ports::{Environment, RoutePlanner},
    q_learning::policy::build_rng,
    types::{Action, Intersection, Observation, Traffic, TrafficLight},
};

/// Reward handed out when the trip completes; clears the default win
/// threshold of 5.0.
const ARRIVAL_REWARD: f64 = 10.0;
/// Reward for a legal move along the route
const PROGRESS_REWARD: f64 = 2.0;
/// Reward for a legal move off the route
const DETOUR_REWARD: f64 = -0.5;
/// Reward for running a red light; at the default infraction threshold
const INFRACTION_REWARD: f64 = -1.0;

const MOVES: [Action; 3] = [Action::Forward, Action::Left, Action::Right];

#[derive(Debug)]
struct WorldState {
    rng: StdRng,
    observation: Observation,
    waypoint: Action,
    remaining_legs: usize,
    deadline: i64,
    arrived: bool,
}

impl WorldState {
    fn new(seed: Option<u64>) -> Self {
        let mut state = Self {
            rng: build_rng(seed),
            observation: Observation {
                light: TrafficLight::Green,
                oncoming: Traffic::None,
                left: Traffic::None,
            },
            waypoint: Action::Forward,
            remaining_legs: 0,
            deadline: 0,
            arrived: false,
        };
        state.begin_trip();
        state
    }

    fn begin_trip(&mut self) -> Intersection {
        self.remaining_legs = self.rng.random_range(3..=8);
        self.deadline = 5 * self.remaining_legs as i64;
        self.arrived = false;
        self.roll_waypoint();
        self.roll_observation();
        (
            self.rng.random_range(1..8),
            self.rng.random_range(1..6),
        )
    }

    fn roll_observation(&mut self) {
        let light = if self.rng.random::<f64>() < 0.5 {
            TrafficLight::Red
        } else {
            TrafficLight::Green
        };
        self.observation = Observation {
            light,
            oncoming: self.roll_traffic(),
            left: self.roll_traffic(),
        };
    }

    fn roll_traffic(&mut self) -> Traffic {
        // Light traffic: most approaches are empty
        if self.rng.random::<f64>() < 0.7 {
            Traffic::None
        } else {
            match *MOVES.choose(&mut self.rng).unwrap() {
                Action::Left => Traffic::Left,
                Action::Right => Traffic::Right,
                _ => Traffic::Forward,
            }
        }
    }

    fn roll_waypoint(&mut self) {
        self.waypoint = if self.arrived {
            Action::Wait
        } else {
            *MOVES.choose(&mut self.rng).unwrap()
        };
    }

    fn step(&mut self, action: Action) -> f64 {
        let ran_red = self.observation.light == TrafficLight::Red && action != Action::Wait;

        let reward = if ran_red {
            INFRACTION_REWARD
        } else if action == self.waypoint && action != Action::Wait {
            self.remaining_legs -= 1;
            if self.remaining_legs == 0 {
                self.arrived = true;
                ARRIVAL_REWARD
            } else {
                self.roll_waypoint();
                PROGRESS_REWARD
            }
        } else if action == Action::Wait {
            0.0
        } else {
            DETOUR_REWARD
        };

        self.deadline -= 1;
        if self.arrived {
            self.waypoint = Action::Wait;
        }
        self.roll_observation();
        reward
    }
}

/// Factory for a paired synthetic environment and planner.
///
/// Both halves share one world behind a mutex, so the planner's waypoint
/// hints stay consistent with the environment the agent is acting in.
pub struct SyntheticWorld;

impl SyntheticWorld {
    /// Create a connected environment/planner pair.
    pub fn create(seed: Option<u64>) -> (SyntheticEnvironment, SyntheticPlanner) {
        let world = Arc::new(Mutex::new(WorldState::new(seed)));
        (
            SyntheticEnvironment {
                world: Arc::clone(&world),
            },
            SyntheticPlanner { world },
        )
    }
}

/// Environment half of the synthetic world
pub struct SyntheticEnvironment {
    world: Arc<Mutex<WorldState>>,
}

impl Environment for SyntheticEnvironment {
    fn reset_trial(&mut self) -> Option<Intersection> {
        Some(self.world.lock().unwrap().begin_trip())
    }

    fn sense(&self) -> Observation {
        self.world.lock().unwrap().observation
    }

    fn deadline(&self) -> i64 {
        self.world.lock().unwrap().deadline
    }

    fn act(&mut self, action: Action) -> f64 {
        self.world.lock().unwrap().step(action)
    }

    fn trial_complete(&self) -> bool {
        let world = self.world.lock().unwrap();
        world.arrived || world.deadline <= 0
    }
}

/// Planner half of the synthetic world
pub struct SyntheticPlanner {
    world: Arc<Mutex<WorldState>>,
}

impl RoutePlanner for SyntheticPlanner {
    fn route_to(&mut self, _destination: Option<Intersection>) {
        // Routing is handled by the world when a trip begins
    }

    fn next_waypoint(&mut self) -> Action {
        self.world.lock().unwrap().waypoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_matches_between_halves() {
        let (env, mut planner) = SyntheticWorld::create(Some(3));
        let hint = planner.next_waypoint();
        assert_ne!(hint, Action::Wait);
        // Sensing does not advance the world
        let _ = env.sense();
        assert_eq!(planner.next_waypoint(), hint);
    }

    #[test]
    fn test_trip_eventually_completes() {
        let (mut env, mut planner) = SyntheticWorld::create(Some(5));
        env.reset_trial();

        let mut steps = 0;
        while !env.trial_complete() {
            // Follow the route when the light allows it
            let action = if env.sense().light == TrafficLight::Green {
                planner.next_waypoint()
            } else {
                Action::Wait
            };
            env.act(action);
            steps += 1;
            assert!(steps < 1000, "trial must end by arrival or deadline");
        }
    }

    #[test]
    fn test_red_light_move_is_an_infraction() {
        let (mut env, _planner) = SyntheticWorld::create(Some(8));
        env.reset_trial();

        // Walk until a red light shows up, then drive through it
        for _ in 0..100 {
            if env.sense().light == TrafficLight::Red {
                assert_eq!(env.act(Action::Forward), INFRACTION_REWARD);
                return;
            }
            env.act(Action::Wait);
        }
        panic!("no red light in 100 steps");
    }
}
