//! GitHub implementation of the host abstraction, backed by octocrab.

use async_trait::async_trait;
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::{Host, HostError, RepoCoordinate};
use crate::catalog::LabelSpec;
use crate::error::Result;

pub struct GithubHost {
    client: Octocrab,
}

impl GithubHost {
    /// Build a client authenticated with a personal access token.
    pub fn new(token: &SecretString) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.expose_secret().to_owned())
            .build()?;
        Ok(GithubHost { client })
    }
}

#[async_trait]
impl Host for GithubHost {
    async fn create_label(
        &self,
        repo: &RepoCoordinate,
        label: &LabelSpec,
    ) -> std::result::Result<(), HostError> {
        let created = self
            .client
            .issues(&repo.owner, &repo.repo)
            .create_label(
                &label.name,
                &label.color,
                label.description.as_deref().unwrap_or_default(),
            )
            .await?;
        debug!(name = %created.name, "Label created on {repo}");
        Ok(())
    }
}
