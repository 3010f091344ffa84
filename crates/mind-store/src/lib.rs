//! Critical Mind Interaction Store
//!
//! Owns all mutable per-user state: liked, favorited and completed topics
//! plus accumulated points.
//!
//! # Architecture
//!
//! - **Interactions**: [`InteractionView`] (queries) and [`InteractionStore`]
//!   (mutations) traits
//! - **UserData**: Plain serializable snapshot implementing both traits
//! - **KV**: Synchronous key-value backends (memory, sled)
//! - **Persistent**: Write-through store over any backend
//!
//! # Example
//!
//! ```
//! use mind_store::{InteractionStore, InteractionView, MemoryBackend, PersistentStore};
//!
//! let mut store = PersistentStore::open(MemoryBackend::new())?;
//! store.toggle_like("nuclear-power")?;
//! assert!(store.is_liked("nuclear-power"));
//! # Ok::<(), mind_store::Error>(())
//! ```

pub mod error;
pub mod interactions;
pub mod kv;
pub mod persistent;
pub mod user_data;

pub use error::{Error, Result};
pub use interactions::{InteractionRecord, InteractionStore, InteractionView};
pub use kv::{KvBackend, MemoryBackend, SledBackend};
pub use persistent::PersistentStore;
pub use user_data::UserData;
