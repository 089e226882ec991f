//! Persistence adapters.
//!
//! The engines themselves are external collaborators; this crate ships
//! in-memory adapters that honour the ports' atomicity contract. A
//! database-backed adapter slots in behind the same traits.

mod memory;

pub use memory::{InMemoryComplaintStore, InMemoryRerouteStore, InMemoryUserStore};
