//! Database entities module

pub mod response;
pub mod user;

pub use response::Entity as Response;
pub use user::Entity as User;
