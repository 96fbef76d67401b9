use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Unique identifier for an element.
///
/// Ids are unix-millisecond timestamps so saved documents sort by creation
/// time. A monotonic bump keeps rapid generations from colliding: each fresh
/// id is strictly greater than any id generated earlier in this process.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(i64);

static LAST_ID: AtomicI64 = AtomicI64::new(0);

impl ElementId {
    /// Generates a fresh time-based id.
    pub fn generate() -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        let id = LAST_ID
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        Self(id)
    }

    /// Builds an id from a raw value, e.g. one read from a saved document.
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let ids: Vec<ElementId> = (0..100).map(|_| ElementId::generate()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let id = ElementId::from_raw(1700000000000);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "1700000000000");
    }
}
