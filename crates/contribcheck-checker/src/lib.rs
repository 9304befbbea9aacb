pub mod access;
pub mod branch;
pub mod checker;
pub mod forks;

// Re-export commonly used types
pub use checker::ContributionChecker;
