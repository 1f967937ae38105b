//! Report rendering and writing.

pub mod generator;

pub use generator::*;
