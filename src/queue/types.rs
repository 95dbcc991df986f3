//! Small types shared by the queue: the item capability and the mode enums.

use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can sit in a [`FairQueue`](super::FairQueue).
///
/// The queue only ever reads the submitter identifier; the rest of the item
/// is opaque to it.
pub trait Queueable {
    /// Key grouping items from the same submitter.
    type Id: Copy + Eq + Hash + Debug;

    fn identifier(&self) -> Self::Id;
}

impl<I, T> Queueable for (I, T)
where
    I: Copy + Eq + Hash + Debug,
{
    type Id = I;

    fn identifier(&self) -> I {
        self.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Swap each slot with one drawn (with replacement) from the same
    /// submitter's slots. Not a uniform permutation.
    Sampled,
    /// Fisher-Yates restricted to the submitter's slots.
    Uniform,
}

impl Default for ShuffleMode {
    fn default() -> Self {
        Self::Sampled
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipMode {
    /// Pop from the front until done; underflow empties the queue and then
    /// reports `QueueError::Empty`.
    Partial,
    /// Refuse to skip more items than are queued, leaving the queue intact.
    Atomic,
}

impl Default for SkipMode {
    fn default() -> Self {
        Self::Partial
    }
}
