//! Resilient document-store client.
//!
//! The remote SDK is abstracted behind [`StoreBackend`]; the client adds
//! retrying initialization and retrying operation execution on top of it.

pub mod backend;
pub mod client;

pub use backend::{FnOperation, StoreBackend, StoreOperation};
pub use client::{HandleState, ResilientStoreClient, StoreStatus};
