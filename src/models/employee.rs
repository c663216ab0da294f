//! Employee identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque identifier distinguishing one employee's presence history from another's.
///
/// Serializes as a bare JSON number.
///
/// # Examples
///
/// ```
/// use presence_log::models::EmployeeId;
///
/// let id: EmployeeId = "42".parse().unwrap();
/// assert_eq!(id, EmployeeId(42));
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EmployeeId)
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        EmployeeId(value)
    }
}
