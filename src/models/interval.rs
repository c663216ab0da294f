//! Interval model.
//!
//! An interval pairs one enter timestamp with an optional exit timestamp.
//! The open/closed distinction is carried by the variant itself.

use chrono::{DateTime, Duration, Utc};

/// One enter/exit pairing for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// Enter recorded, exit still pending.
    Open {
        /// When the employee entered.
        enter: DateTime<Utc>,
    },
    /// Both enter and exit recorded.
    Closed {
        /// When the employee entered.
        enter: DateTime<Utc>,
        /// When the employee exited.
        exit: DateTime<Utc>,
    },
}

impl Interval {
    /// Returns the enter timestamp.
    pub fn enter(&self) -> DateTime<Utc> {
        match *self {
            Interval::Open { enter } | Interval::Closed { enter, .. } => enter,
        }
    }

    /// Returns the exit timestamp, if the interval is closed.
    pub fn exit(&self) -> Option<DateTime<Utc>> {
        match *self {
            Interval::Open { .. } => None,
            Interval::Closed { exit, .. } => Some(exit),
        }
    }

    /// Returns true if the exit is still pending.
    pub fn is_open(&self) -> bool {
        matches!(self, Interval::Open { .. })
    }

    /// Returns the time spent between enter and exit.
    ///
    /// Open intervals have no duration yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use presence_log::models::Interval;
    ///
    /// let interval = Interval::Closed {
    ///     enter: Utc.with_ymd_and_hms(2026, 1, 13, 9, 0, 0).unwrap(),
    ///     exit: Utc.with_ymd_and_hms(2026, 1, 13, 17, 30, 0).unwrap(),
    /// };
    /// assert_eq!(interval.duration(), Some(Duration::minutes(510)));
    /// ```
    pub fn duration(&self) -> Option<Duration> {
        self.exit().map(|exit| exit - self.enter())
    }

    /// Closes an open interval at `exit`. Returns `None` if already closed.
    pub(crate) fn close(self, exit: DateTime<Utc>) -> Option<Interval> {
        match self {
            Interval::Open { enter } => Some(Interval::Closed { enter, exit }),
            Interval::Closed { .. } => None,
        }
    }
}
