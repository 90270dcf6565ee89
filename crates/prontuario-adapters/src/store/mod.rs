//! Record storage adapters.
//!
//! [`InMemoryStore`] owns every cross-record constraint; [`JsonFileStore`]
//! adds a snapshot file on top of it.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::{InMemoryStore, Snapshot};
