//! Partition store: who is where, in what order.

mod store;

pub use store::Partition;
