//! Foundation utilities shared by every simulation module

pub mod logging;
pub mod math;
