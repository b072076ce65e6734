//! GitHub URL parsing and derivation.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

use crate::error::RoadmapError;

static MILESTONE_API_PATH: OnceLock<Regex> = OnceLock::new();
static ORG_PROJECT_PATH: OnceLock<Regex> = OnceLock::new();
static REPO_PROJECT_PATH: OnceLock<Regex> = OnceLock::new();

fn milestone_api_path() -> &'static Regex {
    MILESTONE_API_PATH.get_or_init(|| {
        Regex::new(r"/repos/([^/]+)/([^/]+)/milestones/(\d+)/?$").expect("Invalid regex pattern")
    })
}

fn org_project_path() -> &'static Regex {
    ORG_PROJECT_PATH.get_or_init(|| {
        Regex::new(r"^/orgs/([^/]+)/projects/(\d+)$").expect("Invalid regex pattern")
    })
}

fn repo_project_path() -> &'static Regex {
    REPO_PROJECT_PATH.get_or_init(|| {
        Regex::new(r"^/([^/]+/[^/]+)/projects/(\d+)$").expect("Invalid regex pattern")
    })
}

/// Derives the web URL of a milestone from its API URL.
///
/// `https://api.github.com/repos/acme/widgets/milestones/5` becomes
/// `https://github.com/acme/widgets/milestone/5`.
///
/// # Errors
///
/// Returns [`RoadmapError::MalformedMilestoneUrl`] if the URL cannot be parsed
/// or its path lacks the `/repos/{org}/{repo}/milestones/{number}` shape.
pub fn milestone_html_url(api_url: &str) -> Result<String> {
    let malformed = || RoadmapError::MalformedMilestoneUrl {
        url: api_url.to_string(),
    };

    let parsed = Url::parse(api_url).map_err(|_| malformed())?;
    let captures = milestone_api_path()
        .captures(parsed.path())
        .ok_or_else(malformed)?;

    Ok(format!(
        "https://github.com/{}/{}/milestone/{}",
        &captures[1], &captures[2], &captures[3]
    ))
}

/// Owner and number of a project board, parsed from its web URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectPath {
    /// `/orgs/{org}/projects/{number}`
    Organization { org: String, number: u64 },
    /// `/{owner}/{repo}/projects/{number}`, repository stored as `owner/repo`
    Repository { repository: String, number: u64 },
}

impl ProjectPath {
    /// Parses a project web URL.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::InvalidProjectUri`] if the URI is not a URL or
    /// its path matches neither project shape.
    pub fn parse(uri: &str) -> Result<Self> {
        let invalid = || RoadmapError::InvalidProjectUri {
            uri: uri.to_string(),
        };

        let parsed = Url::parse(uri).map_err(|_| invalid())?;
        let path = parsed.path();

        if let Some(captures) = org_project_path().captures(path) {
            let number = captures[2]
                .parse()
                .with_context(|| format!("Project number out of range in {uri}"))?;
            return Ok(Self::Organization {
                org: captures[1].to_string(),
                number,
            });
        }

        if let Some(captures) = repo_project_path().captures(path) {
            let number = captures[2]
                .parse()
                .with_context(|| format!("Project number out of range in {uri}"))?;
            return Ok(Self::Repository {
                repository: captures[1].to_string(),
                number,
            });
        }

        Err(invalid().into())
    }

    /// Project number within its owner.
    pub fn number(&self) -> u64 {
        match self {
            Self::Organization { number, .. } | Self::Repository { number, .. } => *number,
        }
    }
}
