//! Mastra Preview Session State
//!
//! Persists ephemeral preview session state in tab-scoped storage under the
//! `mastra-preview-` key namespace:
//! - One record per session, keyed by session id
//! - Full overwrite on save, no merge
//! - Every operation is best-effort: backend and serialization failures are
//!   logged and swallowed, never surfaced to the caller
//! - A preview that fails to persist or restore behaves like a fresh,
//!   never-before-seen session instead of crashing

mod error;
mod state;
mod store;

pub use state::PreviewState;
pub use store::{SessionStateStore, KEY_PREFIX};

use error::StateError;

pub(crate) type Result<T> = std::result::Result<T, StateError>;
