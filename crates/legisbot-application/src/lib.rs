//! Application layer: use cases orchestrating the API client, credential
//! storage, and domain state.

pub mod chat_usecase;
pub mod history_usecase;
pub mod session_usecase;
pub mod stats_usecase;

pub use chat_usecase::ChatUseCase;
pub use history_usecase::HistoryUseCase;
pub use session_usecase::{NavTarget, SessionUseCase};
pub use stats_usecase::StatsUseCase;
