//! Numeric helpers shared across modules.

pub mod math;
