//! Append-only access log.
//!
//! Every evaluation appends exactly one [`AccessLogEntry`], granted or
//! denied. Entries are never edited. When a capacity bound is configured the
//! oldest entries are evicted first; by default the log is unbounded.

use std::collections::VecDeque;
use std::fmt::{self, Display};

use serde::Serialize;
use tracing::debug;
use warden_types::{AccessModel, Outcome, UserId};

/// One recorded access attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessLogEntry {
    pub user: UserId,
    pub model: AccessModel,
    pub outcome: Outcome,
}

impl AccessLogEntry {
    pub fn new(user: UserId, model: AccessModel, outcome: Outcome) -> Self {
        Self {
            user,
            model,
            outcome,
        }
    }
}

impl Display for AccessLogEntry {
    /// Formats as `"{user} tried {model} access: {outcome}"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tried {} access: {}",
            self.user, self.model, self.outcome
        )
    }
}

/// Insertion-ordered log of access attempts.
#[derive(Debug, Clone, Default)]
pub struct AccessLog {
    entries: VecDeque<AccessLogEntry>,
    capacity: Option<usize>,
    evicted: u64,
}

impl AccessLog {
    /// Creates an empty, unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty log that keeps at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    pub fn bounded(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
            evicted: 0,
        }
    }

    /// Appends an entry, evicting the oldest one if the bound is reached.
    pub(crate) fn record(&mut self, entry: AccessLogEntry) {
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                if let Some(oldest) = self.entries.pop_front() {
                    self.evicted += 1;
                    debug!(user = %oldest.user, model = %oldest.model, "Evicted access log entry");
                }
            }
        }
        self.entries.push_back(entry);
    }

    /// Iterates entries oldest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &AccessLogEntry> {
        self.entries.iter()
    }

    /// Renders every entry as a human-readable line, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&AccessLogEntry> {
        self.entries.back()
    }

    /// Returns the configured bound, if any.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of entries dropped because of the capacity bound.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn granted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_granted())
            .count()
    }

    pub fn denied_count(&self) -> usize {
        self.len() - self.granted_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user: &str, model: AccessModel, granted: bool) -> AccessLogEntry {
        AccessLogEntry::new(UserId::new(user), model, Outcome::from(granted))
    }

    #[test]
    fn test_entry_format() {
        assert_eq!(
            entry("deng", AccessModel::Mac, true).to_string(),
            "deng tried MAC access: Access Granted"
        );
        assert_eq!(
            entry("luna", AccessModel::Abac, false).to_string(),
            "luna tried ABAC access: Access Denied"
        );
    }

    #[test]
    fn test_log_preserves_insertion_order() {
        let mut log = AccessLog::new();
        log.record(entry("deng", AccessModel::Mac, true));
        log.record(entry("keng", AccessModel::Dac, false));
        log.record(entry("red", AccessModel::Rbac, true));

        let users: Vec<&str> = log.entries().map(|e| e.user.as_str()).collect();
        assert_eq!(users, vec!["deng", "keng", "red"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.granted_count(), 2);
        assert_eq!(log.denied_count(), 1);
    }

    #[test]
    fn test_lines_are_repeatable() {
        let mut log = AccessLog::new();
        log.record(entry("red", AccessModel::Rbac, false));

        assert_eq!(log.lines(), log.lines());
        assert_eq!(log.lines(), vec!["red tried RBAC access: Access Denied"]);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut log = AccessLog::new();
        for _ in 0..1_000 {
            log.record(entry("deng", AccessModel::Mac, true));
        }
        assert_eq!(log.len(), 1_000);
        assert_eq!(log.capacity(), None);
        assert_eq!(log.evicted(), 0);
    }

    #[test]
    fn test_bounded_log_evicts_oldest() {
        let mut log = AccessLog::bounded(2);
        log.record(entry("deng", AccessModel::Mac, true));
        log.record(entry("keng", AccessModel::Dac, true));
        log.record(entry("luna", AccessModel::Abac, false));

        let users: Vec<&str> = log.entries().map(|e| e.user.as_str()).collect();
        assert_eq!(users, vec!["keng", "luna"]);
        assert_eq!(log.evicted(), 1);
        assert_eq!(log.last().map(|e| e.model), Some(AccessModel::Abac));
    }

    #[test]
    fn test_zero_capacity_keeps_latest_entry() {
        let mut log = AccessLog::bounded(0);
        log.record(entry("deng", AccessModel::Mac, true));
        log.record(entry("red", AccessModel::Mac, false));

        assert_eq!(log.len(), 1);
        assert_eq!(log.capacity(), Some(1));
        assert_eq!(log.last().map(|e| e.user.as_str()), Some("red"));
    }

    #[test]
    fn test_entry_serializes() {
        let json = serde_json::to_value(entry("keng", AccessModel::Dac, true)).unwrap();
        assert_eq!(json["user"], "keng");
        assert_eq!(json["model"], "DAC");
        assert_eq!(json["outcome"], "Granted");
    }
}
