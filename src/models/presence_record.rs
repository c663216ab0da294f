//! Presence record model.
//!
//! A [`PresenceRecord`] holds one employee's enter/exit timeline and refuses
//! any call that would break the strict enter/exit alternation.

use chrono::{DateTime, Utc};

use crate::error::{PresenceError, PresenceResult};

use super::employee::EmployeeId;
use super::interval::Interval;

/// Where a record sits in its enter/exit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// No interval recorded yet.
    Empty,
    /// Last interval is awaiting its exit.
    Open,
    /// Last interval is complete.
    Closed,
}

/// Ordered interval history for one employee.
///
/// Intervals are kept in call order. Only the last interval may be open.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use presence_log::models::{EmployeeId, PresenceRecord, RecordState};
///
/// let mut record = PresenceRecord::new(EmployeeId(1));
/// record.add_enter(Utc.with_ymd_and_hms(2026, 1, 13, 9, 0, 0).unwrap()).unwrap();
/// assert_eq!(record.state(), RecordState::Open);
///
/// // A second enter before an exit is rejected.
/// assert!(record.add_enter(Utc.with_ymd_and_hms(2026, 1, 13, 10, 0, 0).unwrap()).is_err());
/// assert_eq!(record.intervals().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceRecord {
    employee_id: EmployeeId,
    intervals: Vec<Interval>,
}

impl PresenceRecord {
    /// Creates an empty record for the given employee.
    pub fn new(employee_id: EmployeeId) -> Self {
        Self {
            employee_id,
            intervals: Vec::new(),
        }
    }

    /// Returns the employee this record belongs to.
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Returns the intervals in call order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns the current state, derived from the last interval.
    pub fn state(&self) -> RecordState {
        match self.intervals.last() {
            None => RecordState::Empty,
            Some(Interval::Open { .. }) => RecordState::Open,
            Some(Interval::Closed { .. }) => RecordState::Closed,
        }
    }

    /// Returns true while the employee has an open interval.
    pub fn is_present(&self) -> bool {
        self.state() == RecordState::Open
    }

    /// Returns the number of closed intervals.
    pub fn completed_count(&self) -> usize {
        self.intervals.iter().filter(|i| !i.is_open()).count()
    }

    /// Appends a new open interval starting at `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the last interval is still open.
    /// The record is left unchanged.
    pub fn add_enter(&mut self, timestamp: DateTime<Utc>) -> PresenceResult<()> {
        if self.state() == RecordState::Open {
            return Err(self.rejected("awaiting exit, cannot enter again"));
        }
        self.intervals.push(Interval::Open { enter: timestamp });
        Ok(())
    }

    /// Closes the last interval at `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the record is empty or the last
    /// interval is already closed. The record is left unchanged.
    pub fn add_exit(&mut self, timestamp: DateTime<Utc>) -> PresenceResult<()> {
        let closed = self
            .intervals
            .last()
            .and_then(|last| last.close(timestamp))
            .ok_or_else(|| self.rejected("no open interval to close"))?;

        if let Some(last) = self.intervals.last_mut() {
            *last = closed;
        }
        Ok(())
    }

    fn rejected(&self, reason: &str) -> PresenceError {
        PresenceError::InvalidStateTransition {
            employee_id: self.employee_id,
            reason: reason.to_string(),
        }
    }
}
