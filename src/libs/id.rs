//! Record identifiers.
//!
//! Ids are millisecond timestamps, bumped when two records are created within
//! the same millisecond, so they are strictly increasing within a process.

use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh id greater than every id handed out before and greater than `floor`.
pub fn next_id_after(floor: u64) -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let mut last = LAST_ID.load(Ordering::SeqCst);
    loop {
        let candidate = now.max(last + 1).max(floor + 1);
        match LAST_ID.compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let ids: Vec<u64> = (0..100).map(|_| next_id_after(0)).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_floor_is_respected() {
        let far_future = u64::MAX / 2;
        assert!(next_id_after(far_future) > far_future);
    }
}
