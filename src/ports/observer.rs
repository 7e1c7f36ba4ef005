//! Observer port - abstraction for run observation and data collection
//!
//! This port defines the interface for observing simulation events, allowing
//! composable data collection without coupling the run driver to specific
//! output formats or metrics.

use crate::{Result, q_learning::agent::StepRecord};

/// Observer trait for monitoring a learning run
///
/// Observers can be composed to collect different types of data during a
/// run. Examples include:
/// - Progress bars for user feedback
/// - Metrics tracking for evaluation
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_run_start(total_trials)` - Once at the beginning
/// 2. For each trial:
///    - `on_trial_start(trial)`
///    - `on_step(trial, record)` - For each decision step
///    - `on_trial_end(trial, infractions)`
/// 3. `on_run_end()` - Once at the end
pub trait Observer: Send {
    /// Called when the run starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_run_start(&mut self, _total_trials: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a trial starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to reset per-trial state.
    fn on_trial_start(&mut self, _trial: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each decision step, with the full step record
    /// (state, action, reward, deadline).
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to observe individual decisions.
    fn on_step(&mut self, _trial: usize, _record: &StepRecord) -> Result<()> {
        Ok(())
    }

    /// Called when a trial ends, with that trial's rule-violation count.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to record trial outcomes.
    fn on_trial_end(&mut self, _trial: usize, _infractions: usize) -> Result<()> {
        Ok(())
    }

    /// Called when the run completes.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to perform cleanup or final reporting.
    fn on_run_end(&mut self) -> Result<()> {
        Ok(())
    }
}
