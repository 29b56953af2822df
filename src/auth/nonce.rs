//! Nonce generation for Kuna API authentication.
//!
//! Kuna expects the nonce to be the request time in milliseconds. The exchange
//! checks nonce monotonicity per key; the client only supplies the value.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the nonce for the next signed request.
    fn next_nonce(&self) -> u64;
}

/// Current time in milliseconds since UNIX epoch.
fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Wall-clock millisecond nonce.
///
/// Two calls within the same millisecond return the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampNonce;

impl NonceProvider for TimestampNonce {
    fn next_nonce(&self) -> u64 {
        current_time_millis()
    }
}

/// A nonce provider that never repeats a value within the process.
///
/// Uses milliseconds since UNIX epoch, bumping by one when two requests land
/// in the same millisecond.
pub struct IncreasingNonce {
    last_nonce: AtomicU64,
}

impl IncreasingNonce {
    /// Create a new increasing nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }
}

impl Default for IncreasingNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for IncreasingNonce {
    fn next_nonce(&self) -> u64 {
        let time_nonce = current_time_millis();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = time_nonce.max(last + 1);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_timestamp_nonce_is_millis() {
        let before = current_time_millis();
        let nonce = TimestampNonce.next_nonce();
        let after = current_time_millis();
        assert!(before <= nonce && nonce <= after);
        // Milliseconds, not micro- or nanoseconds.
        assert_eq!(nonce.to_string().len(), 13);
    }

    #[test]
    fn test_increasing_nonce_strictly_increasing() {
        let provider = IncreasingNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce > last, "Nonce must be strictly increasing");
            last = nonce;
        }
    }

    #[test]
    fn test_increasing_nonce_unique_across_threads() {
        let provider = std::sync::Arc::new(IncreasingNonce::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                (0..500).map(|_| p.next_nonce()).collect::<Vec<_>>()
            }));
        }

        let mut all_nonces = HashSet::new();
        for handle in handles {
            for nonce in handle.join().unwrap() {
                assert!(all_nonces.insert(nonce), "Nonce must be unique across threads");
            }
        }
    }
}
