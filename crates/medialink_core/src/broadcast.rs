//! Broadcast completion statistics.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transient statistics for one finished broadcast run.
///
/// Used only to format a single completion message; never persisted.
///
/// # Examples
///
/// ```
/// use medialink_core::BroadcastStats;
/// use std::time::Duration;
///
/// let stats = BroadcastStats::new(Duration::from_secs(90), 120, 118, 2);
/// assert_eq!(*stats.total(), 120);
/// assert_eq!(*stats.successes() + *stats.failures(), 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct BroadcastStats {
    /// Wall-clock time the broadcast took
    elapsed: Duration,
    /// Total users targeted
    total: usize,
    /// Deliveries that succeeded
    successes: usize,
    /// Deliveries that failed
    failures: usize,
}
