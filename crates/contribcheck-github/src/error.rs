use thiserror::Error;

/// GitHub boundary error types.
///
/// Absent entities that the contribution rules interpret as a negative
/// answer (missing comparison, unknown fork candidate, not starred, not an
/// org member) are never errors; they surface as `Option::None` or `false`
/// from [`crate::client::HostingClient`]. Everything here aborts the whole
/// evaluation.
#[derive(Debug, Error)]
pub enum GithubError {
    #[error("Invalid commit URL provided")]
    InvalidCommitUrl,

    #[error("Invalid access token provided")]
    InvalidAccessToken,

    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Octocrab error: {0}")]
    OctocrabError(#[from] octocrab::Error),
}

pub type GithubResult<T> = Result<T, GithubError>;
