#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod components;
mod error;
mod priorityqueue;
mod ringqueue;
mod trace;
mod utils;

pub use components::Entry;
pub use error::{Error, Result};
pub use priorityqueue::*;
pub use ringqueue::*;

/// Payload type stored by both containers.
pub type Value = i32;

/// Rank of a priority queue entry. Higher values dequeue first.
pub type Priority = i32;
