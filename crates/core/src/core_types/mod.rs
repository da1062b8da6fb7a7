//! Core types and utilities

pub mod identity;
pub mod units;

pub use identity::{ObjectId, ObjectKind};
pub use units::{Celsius, CelsiusDelta, Seconds};
