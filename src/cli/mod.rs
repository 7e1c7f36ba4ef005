//! CLI infrastructure for the smartcab toolkit
//!
//! This module provides the command-line interface for running learning
//! simulations and rendering their reports.

pub mod commands;
pub mod output;
