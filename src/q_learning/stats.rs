//! Performance bookkeeping for learning runs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Classifies step rewards into goal arrivals and rule violations.
///
/// Rewards at or above the win threshold count as reaching the goal; rewards
/// at or below the infraction threshold count as rule violations; anything
/// strictly between the two is ignored. Violation counts are kept per trial
/// and flushed into a history at trial boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceTracker {
    win_threshold: f64,
    infraction_threshold: f64,
    total_wins: usize,
    trial_infractions: usize,
    infractions_record: Vec<usize>,
}

impl PerformanceTracker {
    /// Create a tracker with the given reward thresholds
    pub fn new(win_threshold: f64, infraction_threshold: f64) -> Self {
        Self {
            win_threshold,
            infraction_threshold,
            total_wins: 0,
            trial_infractions: 0,
            infractions_record: Vec::new(),
        }
    }

    /// Classify one step reward
    pub fn record(&mut self, reward: f64) {
        if reward >= self.win_threshold {
            self.total_wins += 1;
        }
        if reward <= self.infraction_threshold {
            self.trial_infractions += 1;
        }
    }

    /// Flush the current trial's violation count into the history and reset
    /// the per-trial counter. Returns the flushed count.
    pub fn end_trial(&mut self) -> usize {
        let infractions = self.trial_infractions;
        self.infractions_record.push(infractions);
        self.trial_infractions = 0;
        infractions
    }

    /// Violation count of the trial currently in progress
    pub fn trial_infractions(&self) -> usize {
        self.trial_infractions
    }

    /// Total goal arrivals across the whole run
    pub fn total_wins(&self) -> usize {
        self.total_wins
    }

    /// Per-trial violation counts flushed so far
    pub fn infractions_record(&self) -> &[usize] {
        &self.infractions_record
    }

    /// Summarize the run for reporting
    pub fn summary(&self, total_trials: usize) -> PerformanceReport {
        PerformanceReport {
            total_trials,
            total_wins: self.total_wins,
            trials_without_win: total_trials.saturating_sub(self.total_wins),
            total_infractions: self.infractions_record.iter().sum(),
            infractions_record: self.infractions_record.clone(),
        }
    }
}

/// Final statistics of a learning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Trials the run was asked to complete
    pub total_trials: usize,

    /// Times the agent reached the goal
    pub total_wins: usize,

    /// Trials that ended without reaching the goal
    pub trials_without_win: usize,

    /// Per-trial rule-violation counts
    pub infractions_record: Vec<usize>,

    /// Rule violations summed across all trials
    pub total_infractions: usize,
}

impl PerformanceReport {
    /// Save report to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let report = serde_json::from_reader(file)?;
        Ok(report)
    }
}

impl fmt::Display for PerformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}FINAL REPORT:{}", "*".repeat(25), "*".repeat(25))?;
        writeln!(f, "TIMES REACHED GOAL:        {}", self.total_wins)?;
        writeln!(f, "TIMES GOAL NOT REACHED:    {}", self.trials_without_win)?;
        writeln!(f, "TOTAL TRAFFIC INFRACTIONS: {}", self.total_infractions)?;
        writeln!(f, "INFRACTIONS RECORD:        {:?}", self.infractions_record)?;
        write!(f, "{}", "*".repeat(63))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PerformanceTracker {
        PerformanceTracker::new(5.0, -1.0)
    }

    #[test]
    fn test_win_reward_counts_win_only() {
        let mut stats = tracker();
        stats.record(6.0);
        assert_eq!(stats.total_wins(), 1);
        assert_eq!(stats.trial_infractions(), 0);
    }

    #[test]
    fn test_negative_reward_counts_infraction_only() {
        let mut stats = tracker();
        stats.record(-2.0);
        assert_eq!(stats.total_wins(), 0);
        assert_eq!(stats.trial_infractions(), 1);
    }

    #[test]
    fn test_midrange_reward_ignored() {
        let mut stats = tracker();
        stats.record(2.0);
        assert_eq!(stats.total_wins(), 0);
        assert_eq!(stats.trial_infractions(), 0);
    }

    #[test]
    fn test_end_trial_flushes_and_resets() {
        let mut stats = tracker();
        stats.record(-2.0);
        stats.record(0.0);
        stats.record(6.0);

        assert_eq!(stats.end_trial(), 1);
        assert_eq!(stats.trial_infractions(), 0);
        assert_eq!(stats.infractions_record(), &[1]);
        assert_eq!(stats.total_wins(), 1);
    }

    #[test]
    fn test_summary_totals() {
        let mut stats = tracker();
        stats.record(-1.0);
        stats.record(-3.0);
        stats.end_trial();
        stats.record(10.0);
        stats.end_trial();

        let report = stats.summary(3);
        assert_eq!(report.total_trials, 3);
        assert_eq!(report.total_wins, 1);
        assert_eq!(report.trials_without_win, 2);
        assert_eq!(report.infractions_record, vec![2, 0]);
        assert_eq!(report.total_infractions, 2);
    }
}
