//!
//! Utility functions.
//!

pub mod timer;
