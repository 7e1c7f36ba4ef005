//! Simulation run pipeline
//!
//! This module provides the driver that sequences trials and steps for a
//! learning run, plus composable observers for progress display and metrics
//! collection.

pub mod observers;
pub mod run;

// Re-export observer implementations (adapters)
pub use observers::{MetricsObserver, ProgressObserver};
pub use run::{SimulationConfig, SimulationRun};

pub use crate::ports::Observer;
