//! kmodes finds the k most frequent elements of an array or a stream, exactly and online
//!
//! Every element's count is kept in a frequency table, and a bounded tracker holds the k
//! elements with the highest counts seen so far. Two trackers share one contract: a linear
//! scan that recomputes the minimum after every update, and a binary min-heap that keeps
//! it at the root. Both return the same elements for the same input.

mod driver;
mod error;
mod frequency;
mod heap;
mod linear;
mod priority_queue;
mod tracker;

pub use driver::{k_modes_array, k_modes_stream, IterProducer, KModes, Producer};
pub use error::{checked_bound, Error, Result};
pub use frequency::FrequencyTable;
pub use heap::HeapTracker;
pub use linear::LinearTracker;
pub use tracker::{Engine, Node, Strategy, Tracker};
