//! End-to-end tests for benchtable
//!
//! Result documents are written to temporary directories and the whole
//! generation runs through the library API.

pub mod errors;
pub mod fixtures;
pub mod pipeline;
