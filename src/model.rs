//! Tracker records as returned by the GitHub REST API.
//!
//! All records are read-only views built fresh per invocation.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Repository the milestone roadmap is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub html_url: String,
}

/// Deadline container for issues.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
    /// API URL, `.../repos/{org}/{repo}/milestones/{number}`.
    pub url: String,
}

/// Issue tag, used as the secondary grouping axis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Issue or pull request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// Issue or pull request. Also the linked content of a project card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub state: IssueState,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Issue {
    /// Returns true when the issue is closed.
    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }
}

/// Classic project board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u64,
    pub number: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
}

/// Board column. Cards are fetched separately, in board order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Column {
    pub id: u64,
    pub name: String,
}

/// Board card: either linked to an issue through `content_url`, or a free-text note.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub id: u64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub content_url: Option<String>,
}
