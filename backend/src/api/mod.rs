pub mod auth;
pub mod error;
pub mod listings;
pub mod server;
