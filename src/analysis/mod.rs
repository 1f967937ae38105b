//! Analysis modules.
//!
//! This module holds the single-pass accumulators that fold the record
//! stream into the final statistics.

pub mod aggregator;

pub use aggregator::*;
