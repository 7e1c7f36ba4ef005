//! Shared vocabulary types for the smartcab world

use serde::{Deserialize, Serialize};

/// Traffic-light phase at the agent's current intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLight {
    Red,
    Green,
}

/// Direction-intent of another vehicle on a given approach.
///
/// `None` means no vehicle is present on that approach; otherwise the value
/// is the direction that vehicle intends to travel through the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traffic {
    None,
    Forward,
    Left,
    Right,
}

/// One discrete driving decision, chosen once per simulation step.
///
/// The same type doubles as the route planner's waypoint hint: the planner
/// reports `Wait` once the destination has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Wait,
    Forward,
    Left,
    Right,
}

impl Action {
    /// The full driving action set, in the canonical ordering used by
    /// greedy search initialization.
    pub const ALL: [Action; 4] = [Action::Wait, Action::Forward, Action::Left, Action::Right];
}

/// One raw sensor reading from the environment.
///
/// All fields are mandatory at construction, so a partially-populated
/// observation cannot exist and cannot corrupt state encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Traffic-light phase at the agent's intersection
    pub light: TrafficLight,
    /// Intent of oncoming traffic
    pub oncoming: Traffic,
    /// Intent of traffic approaching from the left
    pub left: Traffic,
}

/// Grid intersection coordinates, used to name trip destinations
pub type Intersection = (i32, i32);
