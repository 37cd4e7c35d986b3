//! Stable id minting for shelves and items.
//!
//! # Responsibility
//! - Produce process-unique decimal-string ids from a high-resolution
//!   wall-clock reading.
//!
//! # Invariants
//! - Ids issued within one process are strictly increasing, so rapid
//!   successive creations never collide and id order approximates
//!   insertion order.
//! - Cross-process collisions are not guarded beyond clock resolution.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Mints a fresh id: microseconds since the Unix epoch as a decimal string,
/// bumped past the previously issued value when the clock has not advanced.
pub fn generate_id() -> String {
    let now_micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_micros() as u64)
        .unwrap_or(0);

    let mut candidate = now_micros;
    loop {
        let last = LAST_ISSUED.load(Ordering::Relaxed);
        if candidate <= last {
            candidate = last + 1;
        }
        match LAST_ISSUED.compare_exchange(last, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate.to_string(),
            Err(_) => continue,
        }
    }
}
