//! Core data models for the presence log.
//!
//! This module contains the per-employee presence types used throughout the crate.

mod employee;
mod interval;
mod presence_record;

pub use employee::EmployeeId;
pub use interval::Interval;
pub use presence_record::{PresenceRecord, RecordState};
