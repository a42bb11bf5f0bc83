//! Hosting-platform abstraction for label provisioning.
//!
//! The provisioner needs exactly one capability from the hosting platform:
//! create a label on a repository. Everything else about the remote API stays
//! behind [`Host`] so that tests can substitute a controllable fake.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;
use tracing::error;

use crate::catalog::LabelSpec;
use crate::error::{Error as CrateError, Result};
use crate::host::github::GithubHost;

pub mod github;

/// The (owner, repository) pair that scopes every label call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinate {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoCoordinate {
    type Err = CrateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(RepoCoordinate {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(CrateError::InvalidRepo(s.to_string())),
        }
    }
}

impl Display for RepoCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Failure of one create-label call, as reported by the hosting platform.
///
/// Carried into the per-label report as text; a label that already exists
/// surfaces here the same way as any other rejection.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl From<octocrab::Error> for HostError {
    fn from(err: octocrab::Error) -> Self {
        HostError(err.to_string())
    }
}

/// Abstraction of a hosting platform that can create repository labels.
#[async_trait]
pub trait Host: Send + Sync {
    /// Create one label. Creating a name that already exists on the
    /// repository is a remote rejection, not a silent no-op.
    async fn create_label(
        &self,
        repo: &RepoCoordinate,
        label: &LabelSpec,
    ) -> std::result::Result<(), HostError>;
}

/// Build an authenticated host client from the API token.
pub fn open_host(token: &SecretString) -> Result<Box<dyn Host>> {
    match GithubHost::new(token) {
        Ok(host) => Ok(Box::new(host)),
        Err(err) => {
            error!("Failed to initialize GitHub client: {err}");
            Err(err)
        }
    }
}
