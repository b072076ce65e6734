//! Data sources the renderers read from.
//!
//! [`crate::GithubClient`] implements both traits over the REST API; tests
//! use in-memory fakes.

use anyhow::Result;

use crate::model::{Card, Column, Issue, Label, Milestone, Project};

/// Milestones, labels and issues of one repository.
pub trait RepositorySource {
    /// Milestones in tracker order.
    fn milestones(&self) -> Result<Vec<Milestone>>;

    /// Labels in tracker order.
    fn labels(&self) -> Result<Vec<Label>>;

    /// Issues carrying `label` and assigned to `milestone`.
    fn issues(&self, milestone: &Milestone, label: &Label) -> Result<Vec<Issue>>;
}

/// Project boards, their columns and cards.
pub trait BoardSource {
    /// Projects owned by an organization.
    fn organization_projects(&self, org: &str) -> Result<Vec<Project>>;

    /// Projects owned by a repository (`owner/name`).
    fn repository_projects(&self, repository: &str) -> Result<Vec<Project>>;

    /// Columns of a project in board order.
    fn columns(&self, project: &Project) -> Result<Vec<Column>>;

    /// Cards of a column in board order.
    fn cards(&self, column: &Column) -> Result<Vec<Card>>;

    /// Issue or pull request linked to a card, `None` for notes.
    fn card_content(&self, card: &Card) -> Result<Option<Issue>>;
}
