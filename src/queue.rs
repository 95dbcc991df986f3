//! The submitter-fair queue.
//!
//! `FairQueue` lives in `queue::fair`; the slot permutation used by
//! `shuffle_submitter` is a pure helper in `queue::shuffle`.

mod fair;
mod shuffle;
mod types;

pub use fair::FairQueue;
pub use shuffle::{permute_slots, sampled_swaps, uniform_swaps};
pub use types::*;
