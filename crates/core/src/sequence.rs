//! Ticket numbering.

use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL: TicketSequence = TicketSequence::new();

/// Shared, gap-free counter that hands out ticket sequence numbers.
///
/// Numbers start at 1. `next` is a single atomic read-modify-write, so tickets
/// issued from several threads still receive unique, consecutive numbers.
#[derive(Debug, Default)]
pub struct TicketSequence {
    last: AtomicU64,
}

impl TicketSequence {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// A sequence whose next number is `last + 1`.
    pub const fn starting_at(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// The process-wide sequence used by `Ticket::new`.
    pub fn global() -> &'static TicketSequence {
        &GLOBAL
    }

    /// Claim the next number.
    pub fn next(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The last number handed out, i.e. how many tickets this sequence issued
    /// (plus any starting offset).
    pub fn current(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn numbers_start_at_one() {
        let seq = TicketSequence::new();
        assert_eq!(seq.current(), 0);
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.current(), 2);
    }

    #[test]
    fn starting_offset_is_respected() {
        let seq = TicketSequence::starting_at(41);
        assert_eq!(seq.next(), 42);
    }

    #[test]
    fn concurrent_claims_are_unique_and_gap_free() {
        let seq = Arc::new(TicketSequence::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let seq = Arc::clone(&seq);
                std::thread::spawn(move || (0..250).map(|_| seq.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for n in handle.join().unwrap() {
                assert!(seen.insert(n), "duplicate sequence number {n}");
            }
        }

        assert_eq!(seen.len(), 2000);
        assert_eq!(seen.iter().copied().min(), Some(1));
        assert_eq!(seen.iter().copied().max(), Some(2000));
        assert_eq!(seq.current(), 2000);
    }
}
