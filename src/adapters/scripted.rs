//! Scripted test doubles for the environment and planner ports
//!
//! These adapters replay predetermined observations, rewards, and waypoints,
//! giving tests full control over what the agent perceives without standing
//! up any simulated world.

use crate::{
    ports::{Environment, RoutePlanner},
    types::{Action, Intersection, Observation, Traffic, TrafficLight},
};

const QUIET: Observation = Observation {
    light: TrafficLight::Red,
    oncoming: Traffic::None,
    left: Traffic::None,
};

/// One scripted decision step: the observation sensed before acting, the
/// reward handed out for whatever action is taken, and optionally an
/// explicit post-act observation.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedStep {
    pub observation: Observation,
    pub reward: f64,
    /// Post-act observation override. When `None`, the next step's
    /// observation (or the current one, at the end of the script) is sensed
    /// after acting.
    pub next_observation: Option<Observation>,
}

impl ScriptedStep {
    /// Step with the default post-act observation
    pub fn new(observation: Observation, reward: f64) -> Self {
        Self {
            observation,
            reward,
            next_observation: None,
        }
    }

    /// Step with an explicit post-act observation
    pub fn with_next(observation: Observation, reward: f64, next: Observation) -> Self {
        Self {
            observation,
            reward,
            next_observation: Some(next),
        }
    }
}

/// Environment double that replays a fixed script of steps.
///
/// The reward is independent of the chosen action; tests that need to know
/// which action was taken run the agent with exploration disabled.
#[derive(Debug, Clone)]
pub struct ScriptedEnvironment {
    steps: Vec<ScriptedStep>,
    cursor: usize,
    current: Observation,
}

impl ScriptedEnvironment {
    pub fn new(steps: Vec<ScriptedStep>) -> Self {
        let current = steps.first().map(|s| s.observation).unwrap_or(QUIET);
        Self {
            steps,
            cursor: 0,
            current,
        }
    }

    /// Steps consumed so far
    pub fn steps_taken(&self) -> usize {
        self.cursor
    }
}

impl Environment for ScriptedEnvironment {
    fn reset_trial(&mut self) -> Option<Intersection> {
        self.cursor = 0;
        self.current = self.steps.first().map(|s| s.observation).unwrap_or(QUIET);
        None
    }

    fn sense(&self) -> Observation {
        self.current
    }

    fn deadline(&self) -> i64 {
        self.steps.len() as i64 - self.cursor as i64
    }

    fn act(&mut self, _action: Action) -> f64 {
        let Some(step) = self.steps.get(self.cursor).copied() else {
            // Acting past the end of the script is a no-op
            return 0.0;
        };

        self.current = step.next_observation.unwrap_or_else(|| {
            self.steps
                .get(self.cursor + 1)
                .map(|s| s.observation)
                .unwrap_or(step.observation)
        });
        self.cursor += 1;
        step.reward
    }

    fn trial_complete(&self) -> bool {
        self.cursor >= self.steps.len()
    }
}

/// Planner double that replays waypoint hints from a script.
///
/// Each `next_waypoint` call consumes one entry; the agent queries twice per
/// decision step (before and after acting). The last entry repeats once the
/// script is exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedPlanner {
    script: Vec<Action>,
    cursor: usize,
}

impl ScriptedPlanner {
    pub fn new(script: Vec<Action>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Planner that always suggests the same waypoint
    pub fn fixed(waypoint: Action) -> Self {
        Self::new(vec![waypoint])
    }
}

impl RoutePlanner for ScriptedPlanner {
    fn route_to(&mut self, _destination: Option<Intersection>) {
        self.cursor = 0;
    }

    fn next_waypoint(&mut self) -> Action {
        let Some(last) = self.script.last() else {
            return Action::Wait;
        };
        let hint = *self.script.get(self.cursor).unwrap_or(last);
        self.cursor += 1;
        hint
    }
}
