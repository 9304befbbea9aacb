pub mod api;
pub mod client;
pub mod commit_url;
pub mod error;
pub mod fixture;

// Re-export commonly used types
pub use api::GithubApiClient;
pub use client::HostingClient;
pub use commit_url::{CommitRef, parse_commit_url};
pub use error::{GithubError, GithubResult};
pub use fixture::FixtureClient;
