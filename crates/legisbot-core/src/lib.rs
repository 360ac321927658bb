pub mod api;
pub mod chart;
pub mod chat;
pub mod config;
pub mod credential;
pub mod error;
pub mod guard;
pub mod history;
pub mod transcript;
pub mod user;

// Re-export common error type
pub use error::LegisError;
