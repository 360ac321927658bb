//! Infrastructure layer: file paths, credential storage, configuration.

pub mod config_service;
pub mod paths;
pub mod token_storage;

pub use config_service::ConfigService;
pub use paths::LegisPaths;
pub use token_storage::TokenStorage;
