//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory natively)
//! - Device class detection

pub mod device;
pub mod storage;

pub use device::{detect_device_class, is_compact_user_agent};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
pub use storage::{MemoryStore, PersistentStore};
