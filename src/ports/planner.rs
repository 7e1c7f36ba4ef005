//! Route-planner port - abstraction over destination routing
//!
//! The planner knows where the destination is and suggests the next turn to
//! get there. How it computes that (map search, heuristics) is hidden behind
//! this boundary; the learning core only consumes the hint.

use crate::types::{Action, Intersection};

/// RoutePlanner trait - supplies the waypoint hint toward the destination
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture. The hint it
/// produces becomes one field of the encoded state, so planners must be
/// consistent: between two actions, repeated `next_waypoint` calls return
/// the same value.
pub trait RoutePlanner: Send {
    /// Point the planner at a new destination.
    ///
    /// Called once per trial reset. `None` lets the planner keep or choose
    /// its own target.
    fn route_to(&mut self, destination: Option<Intersection>);

    /// The suggested next action toward the destination.
    ///
    /// Returns `Action::Wait` once the destination has been reached. The
    /// agent queries this twice per step: once before acting and once after,
    /// to encode the resulting state.
    fn next_waypoint(&mut self) -> Action;
}
