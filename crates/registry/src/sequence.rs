use std::sync::atomic::{AtomicU64, Ordering};

/// Monotone id sequence shared by every generator task.
///
/// Values are never reused and never reset for the lifetime of the
/// process. `Relaxed` ordering: only uniqueness of the returned value
/// matters, the counter synchronizes nothing else.
#[derive(Debug)]
pub struct IdSequence(AtomicU64);

impl IdSequence {
    /// Seeded potatoes use fixed low ids (`p001`..), generated ids start
    /// above them.
    pub const FIRST_GENERATED: u64 = 1001;

    pub fn new() -> Self {
        Self(AtomicU64::new(Self::FIRST_GENERATED))
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn values_are_monotone() {
        let seq = IdSequence::new();
        let a = seq.next();
        let b = seq.next();
        assert_eq!(a, IdSequence::FIRST_GENERATED);
        assert!(b > a);
    }

    #[test]
    fn values_are_unique_across_threads() {
        let seq = Arc::new(IdSequence::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let seq = seq.clone();
            handles.push(thread::spawn(move || {
                (0..100).map(|_| seq.next()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(seen.insert(id), "id {id} handed out twice");
            }
        }
        assert_eq!(seen.len(), 800);
    }
}
