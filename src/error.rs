//! Fatal roadmap errors.
//!
//! These abort a render. They travel inside [`anyhow::Error`] and can be
//! recovered with `downcast_ref::<RoadmapError>()`.

use thiserror::Error;

/// Conditions that abort a roadmap run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoadmapError {
    /// No project on the owner matched the requested number.
    #[error("Project not found: {uri}")]
    ProjectNotFound { uri: String },

    /// Project URI matched neither the organization nor the repository shape.
    #[error("Project not found: {uri} is not an organization or repository project URL")]
    InvalidProjectUri { uri: String },

    /// Milestone API URL did not have the `/repos/{org}/{repo}/milestones/{n}` shape.
    #[error("Malformed milestone API URL: {url}")]
    MalformedMilestoneUrl { url: String },
}
