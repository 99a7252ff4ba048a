//! Runner error types.

/// Errors that can prevent a run from starting.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Api(#[from] crate::client::ApiError),
}
