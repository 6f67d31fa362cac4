//!
//! The benchmark data model.
//!

pub mod table;
