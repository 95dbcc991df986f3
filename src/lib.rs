//! A queue that keeps submitters fair.
//!
//! Items carry the identity of whoever submitted them. [`FairQueue::add`]
//! places each new item at the earliest slot that does not let its submitter
//! get a second turn before every other queued submitter has had one, so a
//! burst from a single submitter cannot take over the front of the queue.
//!
//! Positional operations (`insert_at`, `remove_at`, `move_item`, `skip`) and
//! submitter-scoped bulk operations (`remove_all`, `shuffle_submitter`) work
//! on the same backing sequence.
//!
//! ```
//! use fairqueue::FairQueue;
//!
//! let mut q = FairQueue::new();
//! assert_eq!(q.add((1u64, "a1")), 0);
//! assert_eq!(q.add((1u64, "a2")), 1);
//! assert_eq!(q.add((2u64, "b1")), 1);
//! assert_eq!(q.pull().unwrap(), (1, "a1"));
//! ```

pub mod config;
pub mod error;
pub mod handle;
pub mod queue;

pub use error::{QueueError, Result};
pub use handle::QueueHandle;
pub use queue::{FairQueue, Queueable, ShuffleMode, SkipMode};
