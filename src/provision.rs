// Copyright 2025 NewCo

//! Create every catalog label on the target repository.
//!
//! Each creation is dispatched independently and failures are contained per
//! label: one rejected call never cancels its siblings and never fails the
//! batch.

use futures::future::join_all;
use serde::Serialize;
use tracing::{error, info};

use crate::catalog::LabelSpec;
use crate::host::{Host, RepoCoordinate};

/// What happened to one label in the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The remote call succeeded.
    Created,
    /// The remote call was rejected; the error text is kept for the report.
    /// A label that already exists on the repository lands here too.
    Failed { error: String },
}

/// Per-label record produced by [`provision`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelReport {
    pub label: LabelSpec,
    pub outcome: Outcome,
}

impl LabelReport {
    pub fn created(&self) -> bool {
        matches!(self.outcome, Outcome::Created)
    }
}

/// Attempt to create every label in `catalog` on `repo`.
///
/// All calls are dispatched at once and awaited together; the function
/// returns only after every call has settled, with reports in catalog order
/// regardless of completion order. Per-label failures are data in the
/// returned reports, never an `Err`, so a caller's exit status reflects only
/// whether the batch ran.
pub async fn provision(
    host: &dyn Host,
    repo: &RepoCoordinate,
    catalog: &[LabelSpec],
) -> Vec<LabelReport> {
    info!("Creating {} labels on {repo}", catalog.len());
    let reports = join_all(catalog.iter().map(|label| async move {
        match host.create_label(repo, label).await {
            Ok(()) => {
                info!(
                    "Successfully created label {:?} with color {}",
                    label.name, label.color
                );
                LabelReport {
                    label: label.clone(),
                    outcome: Outcome::Created,
                }
            }
            Err(err) => {
                error!(
                    "Failed to create label ({}/{}) with error: {err}",
                    label.name, label.color
                );
                LabelReport {
                    label: label.clone(),
                    outcome: Outcome::Failed {
                        error: err.to_string(),
                    },
                }
            }
        }
    }))
    .await;
    let created = reports.iter().filter(|r| r.created()).count();
    info!(
        "Finished creating labels: {created} created, {failed} failed",
        failed = reports.len() - created
    );
    reports
}
