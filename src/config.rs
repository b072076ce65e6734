//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser};
use std::path::PathBuf;

use crate::github::DEFAULT_API_URL;

/// Options shared by both roadmap commands.
#[derive(Debug, Clone, Args)]
pub struct GithubArgs {
    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Write Markdown to this file instead of standard output
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// GitHub API root, for GitHub Enterprise hosts
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

/// Configuration for `milestones-to-markdown`.
#[derive(Debug, Clone, Parser)]
#[command(name = "milestones-to-markdown", version, about = "Render repository milestones as a Markdown roadmap", long_about = None)]
pub struct MilestonesConfig {
    /// Repository as owner/name
    pub repository: String,

    #[command(flatten)]
    pub github: GithubArgs,
}

impl MilestonesConfig {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the repository is not of the form `owner/name`.
    pub fn validate(&self) -> Result<()> {
        match self.repository.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(())
            }
            _ => bail!(
                "Repository must be given as owner/name: {}",
                self.repository
            ),
        }
    }
}

/// Configuration for `project-to-markdown`.
#[derive(Debug, Clone, Parser)]
#[command(name = "project-to-markdown", version, about = "Render a GitHub project board as a Markdown roadmap", long_about = None)]
pub struct ProjectConfig {
    /// Project board URL, organization or repository scoped
    pub project_uri: String,

    #[command(flatten)]
    pub github: GithubArgs,
}

impl ProjectConfig {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the project URI is not an http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if !(self.project_uri.starts_with("https://") || self.project_uri.starts_with("http://")) {
            bail!("Project URI must be an http(s) URL: {}", self.project_uri);
        }

        Ok(())
    }
}
