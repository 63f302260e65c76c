//! error types for wicket-rules.

use thiserror::Error;

/// errors that can occur in wicket-rules.
#[derive(Debug, Error)]
pub enum Error {
    /// failed to parse a json rule set.
    #[error("failed to parse rule set JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
}

/// the enforcement outcome for a denied request.
///
/// returned by [`Engine::ensure_authorized`](crate::Engine::ensure_authorized).
/// a denial is a normal decision, not a fault, so this carries no detail
/// beyond the fact of the refusal; the framework binding that owns the
/// request decides how to surface it (typically as a 401 response).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("401 unauthorized")]
pub struct Unauthorized;

/// result type for wicket-rules operations.
pub type Result<T> = std::result::Result<T, Error>;
