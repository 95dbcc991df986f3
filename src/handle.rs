//! Shared ownership of a queue between collaborators.
//!
//! `FairQueue` does no locking. When a command handler and a playback loop
//! both touch the same queue, they share a `QueueHandle` and go through this
//! one mutex for every call, including read-then-write sequences such as
//! "check empty, then pull".

use std::sync::{Arc, Mutex, MutexGuard};

use crate::queue::{FairQueue, Queueable};

pub type QueueHandle<T> = Arc<Mutex<FairQueue<T>>>;

/// Wrap `queue` in a handle that can be cloned across threads.
pub fn shared<T>(queue: FairQueue<T>) -> QueueHandle<T> {
    Arc::new(Mutex::new(queue))
}

/// Lock the queue. A panic in another holder cannot leave the sequence
/// half-edited, so a poisoned lock is taken over rather than propagated.
pub fn lock<T>(handle: &QueueHandle<T>) -> MutexGuard<'_, FairQueue<T>> {
    handle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Take the front item if there is one, as a single locked step.
pub fn pull_next<T: Queueable>(handle: &QueueHandle<T>) -> Option<T> {
    let mut queue = lock(handle);
    if queue.is_empty() {
        return None;
    }
    queue.pull().ok()
}

/// Fair-insert `item` under the lock and return its slot.
pub fn enqueue<T: Queueable>(handle: &QueueHandle<T>, item: T) -> usize {
    lock(handle).add(item)
}
