//! Tabular Q-learning driving agent for a discrete grid-world traffic
//! simulation
//!
//! This crate provides:
//! - A Q-learning policy-and-update engine: state featurization, epsilon-
//!   greedy action selection with an annealing exploration schedule, a
//!   sparse Q-value store, and the one-step TD update rule
//! - Performance bookkeeping (goal arrivals, rule violations) and report
//!   rendering
//! - Port traits for the environment and route planner, with scripted and
//!   synthetic adapters for tests and demos
//! - A run driver with composable observers and a CLI front end

pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod q_learning;
pub mod state;
pub mod types;

pub use config::AgentConfig;
pub use error::{Error, Result};
pub use q_learning::{
    DrivingAgent, EpsilonGreedyPolicy, ExplorationSchedule, PerformanceReport, PerformanceTracker,
    QTable, StepRecord,
};
pub use state::DrivingState;
pub use types::{Action, Intersection, Observation, Traffic, TrafficLight};
