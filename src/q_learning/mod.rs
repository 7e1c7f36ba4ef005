//! Tabular Q-learning policy-and-update engine
//!
//! This module implements the learning core: the Q-value store, the one-step
//! TD update, epsilon-greedy action selection with an annealing exploration
//! schedule, and the performance bookkeeping that interprets step rewards.
//!
//! ## Update Rule
//!
//! The engine performs standard one-step tabular Q-learning:
//!
//! ```text
//! Q(s,a) <- Q(s,a) + alpha * [r + gamma * max_a' Q(s',a') - Q(s,a)]
//! ```
//!
//! where `s'` is re-sensed after the action executes.
//!
//! ## Usage Example
//!
//! ```no_run
//! use smartcab::{AgentConfig, DrivingAgent};
//! use smartcab::adapters::SyntheticWorld;
//!
//! let (mut env, planner) = SyntheticWorld::create(Some(42));
//! let mut agent = DrivingAgent::new(
//!     AgentConfig::default().with_seed(42),
//!     Box::new(planner),
//! ).unwrap();
//! ```

pub mod agent;
pub mod exploration;
pub mod policy;
pub mod q_table;
pub mod stats;

// Public re-exports
pub use agent::{DrivingAgent, StepRecord};
pub use exploration::ExplorationSchedule;
pub use policy::EpsilonGreedyPolicy;
pub use q_table::QTable;
pub use stats::{PerformanceReport, PerformanceTracker};
