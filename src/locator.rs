//! Project lookup from a board URL.

use anyhow::{Context, Result};

use crate::error::RoadmapError;
use crate::links::ProjectPath;
use crate::model::Project;
use crate::source::BoardSource;

/// Finds the project a board URL points at.
///
/// Lists the projects of the organization or repository named in `uri` and
/// returns the one whose number matches.
///
/// # Errors
///
/// Returns [`RoadmapError::InvalidProjectUri`] if the URI has neither project
/// shape, [`RoadmapError::ProjectNotFound`] if no listed project matches, or
/// the listing error if projects cannot be fetched.
pub fn locate<S: BoardSource + ?Sized>(source: &S, uri: &str) -> Result<Project> {
    let path = ProjectPath::parse(uri)?;

    let candidates = match &path {
        ProjectPath::Organization { org, .. } => source
            .organization_projects(org)
            .with_context(|| format!("Failed to list projects of organization {org}"))?,
        ProjectPath::Repository { repository, .. } => source
            .repository_projects(repository)
            .with_context(|| format!("Failed to list projects of repository {repository}"))?,
    };

    tracing::debug!(candidates = candidates.len(), number = path.number(), "Locating project");

    candidates
        .into_iter()
        .find(|project| project.number == path.number())
        .ok_or_else(|| {
            RoadmapError::ProjectNotFound {
                uri: uri.to_string(),
            }
            .into()
        })
}
