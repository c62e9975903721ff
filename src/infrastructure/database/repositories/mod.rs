//! Database repository implementations
//!
//! Per-aggregate SeaORM stores + unified StoreProvider.

pub mod response_repository;
pub mod store_provider;
pub mod user_repository;

pub use response_repository::SeaOrmResponseStore;
pub use store_provider::SeaOrmStoreProvider;
pub use user_repository::SeaOrmCredentialStore;
