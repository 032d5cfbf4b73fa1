//! Profile directory adapters.
//!
//! Profiles live in an external store; this service only reads them.

mod in_memory;

pub use in_memory::InMemoryProfileDirectory;
