use parking_lot::{Condvar, Mutex};

/// Count-down latch: [`wait`](Self::wait) returns once `count` completions
/// have been signalled.
///
/// Completions beyond the configured count are ignored.
#[derive(Debug)]
pub struct CompletionLatch {
    remaining: Mutex<usize>,
    released: Condvar,
}

impl CompletionLatch {
    pub fn new(count: usize) -> Self {
        Self {
            remaining: Mutex::new(count),
            released: Condvar::new(),
        }
    }

    /// Signal one completion.
    pub fn count_down(&self) {
        let mut remaining = self.remaining.lock();
        if *remaining == 0 {
            return;
        }
        *remaining -= 1;
        if *remaining == 0 {
            self.released.notify_all();
        }
    }

    /// Completions still outstanding.
    pub fn remaining(&self) -> usize {
        *self.remaining.lock()
    }

    /// Block until every completion has been signalled.
    pub fn wait(&self) {
        let mut remaining = self.remaining.lock();
        while *remaining > 0 {
            self.released.wait(&mut remaining);
        }
    }

    /// Guard that signals one completion when dropped, including on unwind.
    pub fn guard(&self) -> LatchGuard<'_> {
        LatchGuard { latch: self }
    }
}

pub struct LatchGuard<'a> {
    latch: &'a CompletionLatch,
}

impl Drop for LatchGuard<'_> {
    fn drop(&mut self) {
        self.latch.count_down();
    }
}
