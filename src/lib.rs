//! Markdown roadmaps from GitHub milestones and project boards.

mod config;
mod error;
mod github;
mod links;
mod locator;
pub mod logging;
pub mod markdown;
mod milestones;
mod model;
mod output;
mod project;
mod resolver;
mod source;

pub use config::{GithubArgs, MilestonesConfig, ProjectConfig};
pub use error::RoadmapError;
pub use github::{DEFAULT_API_URL, GithubClient, GithubRepository};
pub use links::{ProjectPath, milestone_html_url};
pub use locator::locate;
pub use milestones::render_milestones;
pub use model::{Card, Column, Issue, IssueState, Label, Milestone, Project, Repository};
pub use output::{join_lines, write_markdown};
pub use project::{MilestoneGroups, format_cards, render_project};
pub use resolver::ContentResolver;
pub use source::{BoardSource, RepositorySource};
