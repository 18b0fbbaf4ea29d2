//! Session store and remote data client for the QuestVault API.
//!
//! The API owns all persistence, validation, and business rules; this crate
//! only holds the bearer token, issues HTTP requests, and maps faults. The
//! one piece of local state is the token file managed by [`Session`].

/// The HTTP client for the QuestVault API.
pub mod api;
/// Error types used throughout the crate.
pub mod error;
/// Cancellable background fetches for view-driven loading.
pub mod loader;
/// The persistent session store.
pub mod session;

/// Re-export the API client types.
pub use api::{ApiClient, DEFAULT_API_URL, NewAchievement, NewQuest, QuestPatch, VisibilityTarget};
/// Re-export error types.
pub use error::{ClientError, ClientResult};
/// Re-export loader types.
pub use loader::{CancelToken, FetchHandle, fetch};
/// Re-export the session store.
pub use session::Session;
