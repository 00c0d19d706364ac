//! Utility functions for interpreting career database values.
//!
//! This module turns the raw strings and counters stored by the game into display values:
//! pilot description fields, event dates, statistic labels, and sortie summaries. These are
//! pure functions shared by the services.

pub mod date;
pub mod description;
pub mod sortie;
pub mod stats;
