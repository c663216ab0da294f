//! Process-wide presence registry.
//!
//! The [`PresenceRegistry`] maps employee identifiers to their
//! [`PresenceRecord`]s. Records are created on the first enter and never
//! removed.
//!
//! # Locking
//!
//! Records live in a `DashMap`, so lookups for different employees touch
//! different shards. Each record has its own `Mutex`, so calls for the same
//! employee are applied one at a time. First-seen order is kept in a
//! separate log that is appended to only when a new entry is inserted.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

use crate::error::{PresenceError, PresenceResult};
use crate::models::{EmployeeId, Interval, PresenceRecord};

type RecordHandle = Arc<Mutex<PresenceRecord>>;

/// Read-only snapshot of one employee's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePresence {
    /// The employee the snapshot belongs to.
    pub employee_id: EmployeeId,
    /// Intervals in call order.
    pub intervals: Vec<Interval>,
}

impl EmployeePresence {
    fn of(record: &PresenceRecord) -> Self {
        Self {
            employee_id: record.employee_id(),
            intervals: record.intervals().to_vec(),
        }
    }
}

/// Maps employee identifiers to presence records.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use presence_log::models::EmployeeId;
/// use presence_log::registry::PresenceRegistry;
///
/// let registry = PresenceRegistry::new();
/// let nine = Utc.with_ymd_and_hms(2026, 1, 13, 9, 0, 0).unwrap();
/// let five = Utc.with_ymd_and_hms(2026, 1, 13, 17, 0, 0).unwrap();
///
/// registry.record_enter(EmployeeId(1), nine)?;
/// registry.record_exit(EmployeeId(1), five)?;
///
/// let presence = registry.get_one(EmployeeId(1))?;
/// assert_eq!(presence.intervals.len(), 1);
/// assert!(registry.get_one(EmployeeId(2)).is_err());
/// # Ok::<(), presence_log::error::PresenceError>(())
/// ```
#[derive(Debug, Default)]
pub struct PresenceRegistry {
    records: DashMap<EmployeeId, RecordHandle>,
    // First-seen order.
    order: Mutex<Vec<RecordHandle>>,
}

impl PresenceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an arrival, creating the employee's record if this is their first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateTransition` if the employee already has an open interval.
    pub fn record_enter(
        &self,
        employee_id: EmployeeId,
        timestamp: DateTime<Utc>,
    ) -> PresenceResult<()> {
        let handle = self.get_or_create(employee_id);
        let result = lock(&handle).add_enter(timestamp);
        log_outcome("enter", employee_id, &result);
        result
    }

    /// Records a departure for an employee who has entered before.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEmployee` if the employee has never entered, or
    /// `InvalidStateTransition` if there is no open interval to close.
    pub fn record_exit(
        &self,
        employee_id: EmployeeId,
        timestamp: DateTime<Utc>,
    ) -> PresenceResult<()> {
        let result = self.find(employee_id).and_then(|handle| {
            let mut record = lock(&handle);
            record.add_exit(timestamp)
        });
        log_outcome("exit", employee_id, &result);
        result
    }

    /// Returns a snapshot of one employee's history.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEmployee` if the employee has never entered.
    pub fn get_one(&self, employee_id: EmployeeId) -> PresenceResult<EmployeePresence> {
        let handle = self.find(employee_id)?;
        let record = lock(&handle);
        Ok(EmployeePresence::of(&record))
    }

    /// Returns snapshots of every known employee, in first-seen order.
    pub fn get_all(&self) -> Vec<EmployeePresence> {
        let handles: Vec<RecordHandle> = lock_order(&self.order).clone();
        handles
            .iter()
            .map(|handle| EmployeePresence::of(&lock(handle)))
            .collect()
    }

    /// Returns the number of known employees.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no employee has entered yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find(&self, employee_id: EmployeeId) -> PresenceResult<RecordHandle> {
        self.records
            .get(&employee_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(PresenceError::UnknownEmployee { employee_id })
    }

    fn get_or_create(&self, employee_id: EmployeeId) -> RecordHandle {
        match self.records.entry(employee_id) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                debug!(employee_id = %employee_id, "Creating presence record");
                let handle = Arc::new(Mutex::new(PresenceRecord::new(employee_id)));
                // Appended while the shard is still held, so the log never
                // sees the same employee twice.
                lock_order(&self.order).push(Arc::clone(&handle));
                entry.insert(Arc::clone(&handle));
                handle
            }
        }
    }
}

fn lock_order(order: &Mutex<Vec<RecordHandle>>) -> MutexGuard<'_, Vec<RecordHandle>> {
    order.lock().unwrap_or_else(PoisonError::into_inner)
}

// Records validate before writing, so a poisoned lock never guards a half-applied change.
fn lock(handle: &RecordHandle) -> MutexGuard<'_, PresenceRecord> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

fn log_outcome(event: &str, employee_id: EmployeeId, result: &PresenceResult<()>) {
    match result {
        Ok(()) => debug!(employee_id = %employee_id, event, "Presence event recorded"),
        Err(err) => {
            warn!(employee_id = %employee_id, event, error = %err, "Presence event rejected")
        }
    }
}
