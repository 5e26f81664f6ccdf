//! Persistence gateway subsystem
//!
//! The gateway is the only component that touches storage. It is
//! constructed once at startup and handed to the HTTP layer; without a
//! configured store every operation reports `StorageUnavailable`.
//!
//! # Design Principles
//!
//! - Explicit construction, no ambient global connection
//! - One failed operation surfaces immediately: no retries
//! - Single-document inserts are atomic by construction
//! - Concurrent-write safety is delegated to the storage engine

mod errors;
mod memory;
mod mongo;
mod store;

pub use errors::{GatewayError, GatewayResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, Gateway};
