use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that occur before or outside the per-label batch.
///
/// Failures of individual create-label calls are not represented here; they
/// are contained by the provisioner and reported per label (see
/// [`crate::provision::Outcome`]).
#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub client error: {0}")]
    Github(#[from] octocrab::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Missing required input {0}")]
    MissingInput(&'static str),

    #[error("Invalid repository coordinate {0:?}, expected owner/repo")]
    InvalidRepo(String),
}
