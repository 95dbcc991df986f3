//! Rng-injected permutations over a set of queue slots.
//!
//! These helpers never touch a queue. They take the slots belonging to one
//! submitter and return the swaps that rearrange items among those slots;
//! `FairQueue::shuffle_submitter` applies them. Every swap pairs two slots
//! from the input set, so items never leave their submitter's slots.

use rand::Rng;
use rand::seq::IteratorRandom;

use super::types::ShuffleMode;

/// Swaps for the given `mode` over `slots`.
pub fn permute_slots<R: Rng + ?Sized>(
    slots: &[usize],
    mode: ShuffleMode,
    rng: &mut R,
) -> Vec<(usize, usize)> {
    match mode {
        ShuffleMode::Sampled => sampled_swaps(slots, rng),
        ShuffleMode::Uniform => uniform_swaps(slots, rng),
    }
}

/// One swap per slot, in ascending slot order, each with a partner drawn
/// uniformly with replacement from `slots` (a self-swap is possible).
pub fn sampled_swaps<R: Rng + ?Sized>(slots: &[usize], rng: &mut R) -> Vec<(usize, usize)> {
    let mut swaps = Vec::with_capacity(slots.len());
    for &first in slots {
        if let Some(k) = (0..slots.len()).choose(rng) {
            swaps.push((first, slots[k]));
        }
    }
    swaps
}

/// Fisher-Yates over `slots`: every arrangement of the slot contents is
/// equally likely.
pub fn uniform_swaps<R: Rng + ?Sized>(slots: &[usize], rng: &mut R) -> Vec<(usize, usize)> {
    let mut swaps = Vec::with_capacity(slots.len().saturating_sub(1));
    for i in (1..slots.len()).rev() {
        if let Some(j) = (0..=i).choose(rng) {
            swaps.push((slots[i], slots[j]));
        }
    }
    swaps
}

pub(super) fn apply_swaps<T>(items: &mut [T], swaps: &[(usize, usize)]) {
    for &(a, b) in swaps {
        items.swap(a, b);
    }
}
