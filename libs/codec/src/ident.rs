//! # Client Identifier Generation
//!
//! Produces integer identifiers for client/session naming, distinct from
//! every identifier previously issued by the same generator for the lifetime
//! of the process. Uniqueness is best-effort by construction (random UUID
//! component plus wall-clock milliseconds) and enforced by a used-id set:
//! the membership check and the insert happen under one lock acquisition, so
//! two concurrent callers can never accept the same candidate.
//!
//! The used-id set only grows. It is owned by the generator handle and
//! shared across clones, never global; a process that wants independent id
//! spaces creates independent generators.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tracing::debug;
use uuid::Uuid;

use types::now_millis;

use crate::error::{ProtocolError, ProtocolResult};

/// Upper bound on candidate regeneration before giving up.
///
/// The candidate space within one millisecond is narrow (a UUID character
/// sum spans under two thousand values), so a burst of issues can exhaust
/// it; the bound is sized so a full retry round outlasts the millisecond
/// tick that refreshes the space. Exhausting it anyway means the clock or
/// the RNG is broken, which must surface as an error rather than loop
/// forever.
pub const MAX_UID_RETRIES: u32 = 4096;

/// Process-lifetime unique identifier source for client/session naming.
///
/// Cloning shares the underlying used-id set, so clones hand out ids from
/// one common space.
#[derive(Debug, Clone, Default)]
pub struct UidGenerator {
    used: Arc<Mutex<HashSet<u64>>>,
}

impl UidGenerator {
    /// Create a generator with an empty used-id set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue an identifier distinct from every previous issue of this
    /// generator.
    ///
    /// The used-id set mutation is the only side effect and happens only on
    /// a successful return.
    pub fn next_id(&self) -> ProtocolResult<u64> {
        let mut used = self.used.lock().expect("used-id set lock poisoned");
        for attempt in 0..MAX_UID_RETRIES {
            let candidate = candidate_id();
            if used.insert(candidate) {
                return Ok(candidate);
            }
            debug!(candidate, attempt, "client id already issued, regenerating");
        }
        Err(ProtocolError::IdSpaceExhausted {
            retries: MAX_UID_RETRIES,
        })
    }

    /// How many identifiers this generator has issued.
    pub fn issued(&self) -> usize {
        self.used.lock().expect("used-id set lock poisoned").len()
    }
}

/// Candidate identifier: the character values of a fresh hyphenated UUIDv4
/// summed, plus the current wall-clock milliseconds. The time component
/// keeps candidates moving even if the RNG were to repeat.
fn candidate_id() -> u64 {
    let uuid = Uuid::new_v4();
    let char_sum: u64 = uuid
        .hyphenated()
        .to_string()
        .chars()
        .map(|c| c as u64)
        .sum();
    char_sum + now_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_thousand_sequential_ids_are_distinct() {
        let generator = UidGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = generator.next_id().unwrap();
            assert!(seen.insert(id), "id {} issued twice", id);
        }
        assert_eq!(generator.issued(), 10_000);
    }

    #[test]
    fn clones_share_one_id_space() {
        let generator = UidGenerator::new();
        let clone = generator.clone();
        let a = generator.next_id().unwrap();
        let b = clone.next_id().unwrap();
        assert_ne!(a, b);
        assert_eq!(generator.issued(), 2);
        assert_eq!(clone.issued(), 2);
    }

    #[test]
    fn concurrent_issuance_never_duplicates() {
        let generator = UidGenerator::new();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let gen = generator.clone();
            handles.push(std::thread::spawn(move || {
                (0..250)
                    .map(|_| gen.next_id().unwrap())
                    .collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {} issued twice across threads", id);
            }
        }
        assert_eq!(seen.len(), 8 * 250);
    }

    #[test]
    fn candidates_track_wall_clock_scale() {
        // A candidate is dominated by the millisecond epoch component, so it
        // must exceed any plausible char-sum alone.
        let id = candidate_id();
        assert!(id > 1_000_000_000_000);
    }
}
