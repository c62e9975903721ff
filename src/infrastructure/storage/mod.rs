pub mod memory;

pub use memory::{MemoryCredentialStore, MemoryResponseStore, MemoryStoreProvider};
