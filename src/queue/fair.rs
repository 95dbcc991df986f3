//! `FairQueue`: an ordered sequence of submitted items with fair insertion.
//!
//! The queue is a plain `Vec`; every operation is a synchronous O(1)..O(n)
//! scan or shift. It does no locking of its own, see `crate::handle` for the
//! shared wrapper.

use std::collections::HashSet;

use rand::Rng;

use crate::config::QueueSettings;
use crate::error::{QueueError, Result};

use super::shuffle::{apply_swaps, permute_slots};
use super::types::{Queueable, ShuffleMode, SkipMode};

#[derive(Debug, Clone)]
pub struct FairQueue<T> {
    items: Vec<T>,
    shuffle_mode: ShuffleMode,
    skip_mode: SkipMode,
}

impl<T> Default for FairQueue<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            shuffle_mode: ShuffleMode::default(),
            skip_mode: SkipMode::default(),
        }
    }
}

impl<T: Queueable> FairQueue<T> {
    /// Create an empty queue with the default modes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with explicit shuffle and skip modes.
    pub fn with_modes(shuffle_mode: ShuffleMode, skip_mode: SkipMode) -> Self {
        Self {
            items: Vec::new(),
            shuffle_mode,
            skip_mode,
        }
    }

    /// Create an empty queue configured from the `[queue]` settings table.
    pub fn with_settings(settings: &QueueSettings) -> Self {
        Self::with_modes(settings.shuffle_mode.into(), settings.skip_mode.into())
    }

    /// Mode used by `shuffle_submitter`.
    pub fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle_mode
    }

    /// Change the mode used by later `shuffle_submitter` calls.
    pub fn set_shuffle_mode(&mut self, mode: ShuffleMode) {
        self.shuffle_mode = mode;
    }

    /// What `skip` does when asked for more items than are queued.
    pub fn skip_mode(&self) -> SkipMode {
        self.skip_mode
    }

    pub fn set_skip_mode(&mut self, mode: SkipMode) {
        self.skip_mode = mode;
    }

    /// The slot `add` would give `item`, without inserting it.
    ///
    /// Starts just after the submitter's last queued item (or at the head if
    /// they have none) and walks forward over one fairness round: the first
    /// submitter seen twice marks where the round ends.
    pub fn fair_index(&self, item: &T) -> usize {
        let id = item.identifier();
        let mut cursor = self
            .items
            .iter()
            .rposition(|queued| queued.identifier() == id)
            .map_or(0, |last| last + 1);

        let mut seen = HashSet::new();
        while let Some(queued) = self.items.get(cursor) {
            if !seen.insert(queued.identifier()) {
                break;
            }
            cursor += 1;
        }
        cursor
    }

    /// Insert `item` at its fair slot and return that slot.
    ///
    /// Existing items keep their relative order.
    pub fn add(&mut self, item: T) -> usize {
        let index = self.fair_index(&item);
        tracing::trace!(
            submitter = ?item.identifier(),
            index,
            len = self.items.len(),
            "fair insert"
        );
        self.items.insert(index, item);
        index
    }

    /// Insert at `index`, or append when `index` is past the end.
    pub fn insert_at(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    /// Remove and return the front item.
    pub fn pull(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(QueueError::Empty);
        }
        Ok(self.items.remove(0))
    }

    /// Remove and return the item at `index`, or `QueueError::IndexOutOfRange`
    /// without touching the queue when `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Remove every item from `id`, keeping the rest in order. Returns how
    /// many were removed.
    pub fn remove_all(&mut self, id: T::Id) -> usize {
        let before = self.items.len();
        self.items.retain(|queued| queued.identifier() != id);
        let removed = before - self.items.len();
        tracing::debug!(submitter = ?id, removed, "removed submitter items");
        removed
    }

    /// Drop every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop the first `n` items.
    ///
    /// With `SkipMode::Partial` an oversized `n` removes everything and then
    /// returns `QueueError::Empty`; the queue stays emptied. With
    /// `SkipMode::Atomic` it returns `QueueError::IndexOutOfRange` and
    /// removes nothing.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        let len = self.items.len();
        if n <= len {
            self.items.drain(..n);
            return Ok(());
        }

        match self.skip_mode {
            SkipMode::Partial => {
                self.items.clear();
                tracing::debug!(requested = n, removed = len, "skip ran past the end of the queue");
                Err(QueueError::Empty)
            }
            SkipMode::Atomic => Err(QueueError::IndexOutOfRange { index: n - 1, len }),
        }
    }

    /// Rearrange `id`'s items among the slots they already occupy, using the
    /// queue's shuffle mode. Returns the number of items belonging to `id`.
    pub fn shuffle_submitter<R: Rng + ?Sized>(&mut self, id: T::Id, rng: &mut R) -> usize {
        self.shuffle_submitter_with(id, self.shuffle_mode, rng)
    }

    /// Like `shuffle_submitter`, overriding the mode for this call only.
    pub fn shuffle_submitter_with<R: Rng + ?Sized>(
        &mut self,
        id: T::Id,
        mode: ShuffleMode,
        rng: &mut R,
    ) -> usize {
        let slots = self.slots_of(id);
        let swaps = permute_slots(&slots, mode, rng);
        apply_swaps(&mut self.items, &swaps);
        tracing::trace!(submitter = ?id, items = slots.len(), ?mode, "shuffled submitter");
        slots.len()
    }

    /// Move the item at `from` so it ends up at `to` in the shortened
    /// sequence; `to` past the end appends.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<&T> {
        self.check_index(from)?;
        let item = self.items.remove(from);
        let to = to.min(self.items.len());
        self.items.insert(to, item);
        Ok(&self.items[to])
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, or `QueueError::IndexOutOfRange` when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(QueueError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Read-only view of the queue in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of queued items from `id`.
    pub fn count_submitter(&self, id: T::Id) -> usize {
        self.items.iter().filter(|queued| queued.identifier() == id).count()
    }

    /// Index of `id`'s next item, if any.
    pub fn position_of_submitter(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|queued| queued.identifier() == id)
    }

    fn slots_of(&self, id: T::Id) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, queued)| queued.identifier() == id)
            .map(|(i, _)| i)
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(QueueError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<'a, T> IntoIterator for &'a FairQueue<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
