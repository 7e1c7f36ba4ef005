//! Environment port - abstraction over the traffic world
//!
//! This port defines the interface the learning core needs from the
//! simulated world: trial setup, sensing, deadline readout, and action
//! execution with a scalar reward. Map topology, other vehicles, and reward
//! assignment all live behind this boundary.

use crate::types::{Action, Intersection, Observation};

/// Environment trait - the world the agent drives in
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture - a boundary
/// between the learning core and the simulated world. Real simulators and
/// the scripted/synthetic test doubles in `adapters` are **adapters** that
/// implement this port.
///
/// # Step Contract
///
/// Within one simulation step the driver calls `sense` before `act` and the
/// agent re-senses afterwards to build the TD target. Every `act` call
/// produces exactly one reward; the environment must not batch or defer
/// reward assignment.
pub trait Environment: Send {
    /// Start a new trial, returning the trip destination if the world
    /// assigns one.
    ///
    /// Called once per trial boundary, before the agent's own reset.
    fn reset_trial(&mut self) -> Option<Intersection>;

    /// Read the sensors at the agent's current intersection.
    ///
    /// Must be side-effect free: sensing twice between actions returns the
    /// same observation.
    fn sense(&self) -> Observation;

    /// Steps remaining before the trial deadline expires.
    ///
    /// Informational only - the learning rule does not use it, but step
    /// records carry it for reporting.
    fn deadline(&self) -> i64;

    /// Execute an action and return the reward assigned by the world.
    fn act(&mut self, action: Action) -> f64;

    /// True once the current trial has ended, whether by reaching the
    /// destination or by deadline expiry.
    fn trial_complete(&self) -> bool;
}
