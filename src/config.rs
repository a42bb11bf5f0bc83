//! Step configuration: credentials and repository context from the CI
//! environment, plus an optional catalog override file.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::{self, LabelSpec};
use crate::error::{Error, Result};
use crate::host::RepoCoordinate;

/// The token used to authenticate every create-label call.
pub static GH_TOKEN_VAR: &str = "INPUT_GH_TOKEN";

/// Auxiliary IBM GitHub credential. Accepted but not used by provisioning.
pub static GH_IBM_TOKEN_VAR: &str = "INPUT_GH_IBM_TOKEN";

/// Auxiliary ZenHub credential. Accepted but not used by provisioning.
pub static ZENHUB_APIKEY_VAR: &str = "INPUT_ZENHUB_IBM_APIKEY";

/// Set by the CI runner to the target repository as `owner/repo`.
pub static REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// Credentials and context read from the step environment.
///
/// Token values are never logged.
#[derive(Debug)]
pub struct Inputs {
    pub gh_token: SecretString,
    pub gh_ibm_token: Option<SecretString>,
    pub zenhub_apikey: Option<SecretString>,
    pub repository: RepoCoordinate,
}

impl Inputs {
    /// Read inputs from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read inputs through an arbitrary lookup, so tests never have to touch
    /// the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gh_token = match lookup(GH_TOKEN_VAR) {
            Some(token) if !token.is_empty() => SecretString::from(token),
            _ => return Err(Error::MissingInput(GH_TOKEN_VAR)),
        };
        let gh_ibm_token = lookup(GH_IBM_TOKEN_VAR)
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        let zenhub_apikey = lookup(ZENHUB_APIKEY_VAR)
            .filter(|t| !t.is_empty())
            .map(SecretString::from);
        let repository = match lookup(REPOSITORY_VAR) {
            Some(value) => value.parse()?,
            None => return Err(Error::MissingInput(REPOSITORY_VAR)),
        };
        Ok(Inputs {
            gh_token,
            gh_ibm_token,
            zenhub_apikey,
            repository,
        })
    }
}

/// Contents of a catalog override file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub labels: Vec<LabelSpec>,
}

/// Load the label catalog: the built-in set, or the file given on the
/// command line. Either way the catalog is validated before use.
pub fn load_catalog(path: &Option<PathBuf>) -> Result<Vec<LabelSpec>> {
    let labels = match path {
        Some(path) => from_file(path)?.labels,
        None => catalog::builtin_catalog(),
    };
    catalog::validate(&labels)?;
    Ok(labels)
}

fn from_file(path: &Path) -> Result<CatalogFile> {
    debug!(?path, "Loading catalog from file");
    let text = std::fs::read_to_string(path).map_err(|err| {
        Error::Config(format!(
            "Failed to load catalog file {}: {err}",
            path.display()
        ))
    })?;
    toml::from_str(&text).map_err(|err| {
        Error::Config(format!(
            "Failed to parse catalog file {}: {err}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use assert_matches::assert_matches;
    use secrecy::ExposeSecret;
    use tempfile::NamedTempFile;

    use super::*;

    fn lookup_in<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn inputs_from_full_environment() {
        let env = HashMap::from([
            (GH_TOKEN_VAR, "ghp_newco"),
            (GH_IBM_TOKEN_VAR, "ghp_ibm"),
            (ZENHUB_APIKEY_VAR, "zh_key"),
            (REPOSITORY_VAR, "newco/widgets"),
        ]);
        let inputs = Inputs::from_lookup(lookup_in(&env)).unwrap();
        assert_eq!(inputs.gh_token.expose_secret(), "ghp_newco");
        assert!(inputs.gh_ibm_token.is_some());
        assert!(inputs.zenhub_apikey.is_some());
        assert_eq!(inputs.repository.to_string(), "newco/widgets");
    }

    #[test]
    fn auxiliary_credentials_are_optional() {
        let env = HashMap::from([
            (GH_TOKEN_VAR, "ghp_newco"),
            (REPOSITORY_VAR, "newco/widgets"),
        ]);
        let inputs = Inputs::from_lookup(lookup_in(&env)).unwrap();
        assert!(inputs.gh_ibm_token.is_none());
        assert!(inputs.zenhub_apikey.is_none());
    }

    #[test]
    fn missing_or_empty_token_is_fatal() {
        let env = HashMap::from([(REPOSITORY_VAR, "newco/widgets")]);
        assert_matches!(
            Inputs::from_lookup(lookup_in(&env)),
            Err(Error::MissingInput(name)) if name == GH_TOKEN_VAR
        );

        let env = HashMap::from([
            (GH_TOKEN_VAR, ""),
            (REPOSITORY_VAR, "newco/widgets"),
        ]);
        assert_matches!(
            Inputs::from_lookup(lookup_in(&env)),
            Err(Error::MissingInput(name)) if name == GH_TOKEN_VAR
        );
    }

    #[test]
    fn missing_or_malformed_repository_is_fatal() {
        let env = HashMap::from([(GH_TOKEN_VAR, "ghp_newco")]);
        assert_matches!(
            Inputs::from_lookup(lookup_in(&env)),
            Err(Error::MissingInput(name)) if name == REPOSITORY_VAR
        );

        let env = HashMap::from([(GH_TOKEN_VAR, "ghp_newco"), (REPOSITORY_VAR, "widgets")]);
        assert_matches!(
            Inputs::from_lookup(lookup_in(&env)),
            Err(Error::InvalidRepo(_))
        );
    }

    #[test]
    fn default_catalog_is_the_builtin_set() {
        let catalog = load_catalog(&None).unwrap();
        assert_eq!(catalog, catalog::builtin_catalog());
    }

    #[test]
    fn catalog_file_overrides_builtin_set() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[labels]]
name = "Blocked"
color = "D93F0B"

[[labels]]
name = "Needs review"
color = "0E8A16"
description = "Waiting on a reviewer"
"#
        )
        .unwrap();
        let catalog = load_catalog(&Some(file.path().to_path_buf())).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Blocked");
        assert_eq!(catalog[0].description, None);
        assert_eq!(
            catalog[1].description.as_deref(),
            Some("Waiting on a reviewer")
        );
    }

    #[test]
    fn invalid_catalog_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[labels]]
name = "Blocked"
color = "red"
"#
        )
        .unwrap();
        assert_matches!(
            load_catalog(&Some(file.path().to_path_buf())),
            Err(Error::Config(_))
        );
    }

    #[test]
    fn unreadable_catalog_file_is_rejected() {
        let path = PathBuf::from("/nonexistent/labels.toml");
        assert_matches!(
            load_catalog(&Some(path)),
            Err(Error::Config(msg)) if msg.contains("Failed to load")
        );
    }
}
