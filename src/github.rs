//! GitHub REST API client.
//!
//! Blocking and sequential. List endpoints are paginated through the `Link`
//! response header.

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, LINK, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::model::{Card, Column, Issue, Label, Milestone, Project, Repository};
use crate::source::{BoardSource, RepositorySource};

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type enabling the classic projects API.
const PROJECTS_MEDIA_TYPE: &str = "application/vnd.github.inertia-preview+json";

const PER_PAGE: &str = "100";

/// Authenticated handle on the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_url: String,
}

impl GithubClient {
    /// Creates a client for `api_url`, authenticating with `token` when given.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client cannot be built.
    pub fn new(api_url: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("roadmapper"));
        headers.insert(ACCEPT, HeaderValue::from_static(PROJECTS_MEDIA_TYPE));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("token {token}"))
                .context("GitHub token contains invalid characters")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches repository metadata for `full_name` (`owner/name`).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the repository does not exist.
    pub fn repository(&self, full_name: &str) -> Result<Repository> {
        self.get_json(&self.endpoint(&format!("repos/{full_name}")), &[])
    }

    /// Milestone, label and issue listings scoped to `full_name`.
    pub fn repository_source(&self, full_name: &str) -> GithubRepository<'_> {
        GithubRepository {
            client: self,
            full_name: full_name.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    fn send(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        tracing::debug!(%url, ?query, "GET");

        self.http
            .get(url)
            .query(query)
            .send()
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("GitHub API rejected request to {url}"))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        self.send(url, query)?
            .json()
            .with_context(|| format!("Failed to decode response from {url}"))
    }

    /// Collects every page of a list endpoint, following `rel="next"` links.
    fn get_paginated<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut first_query = query.to_vec();
        first_query.push(("per_page", PER_PAGE));

        let mut items = Vec::new();
        let mut response = self.send(url, &first_query)?;

        loop {
            let next = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_url);

            let page: Vec<T> = response
                .json()
                .with_context(|| format!("Failed to decode page from {url}"))?;
            tracing::debug!(%url, items = page.len(), "Fetched page");
            items.extend(page);

            match next {
                Some(next_url) => response = self.send(&next_url, &[])?,
                None => break,
            }
        }

        Ok(items)
    }
}

/// Extracts the `rel="next"` target from a `Link` header.
fn next_page_url(link: &str) -> Option<String> {
    link.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        let is_next = params
            .split(';')
            .any(|param| param.trim() == r#"rel="next""#);
        if !is_next {
            return None;
        }
        target
            .trim()
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(String::from)
    })
}

/// Repository-scoped view of a [`GithubClient`].
#[derive(Debug, Clone)]
pub struct GithubRepository<'a> {
    client: &'a GithubClient,
    full_name: String,
}

impl RepositorySource for GithubRepository<'_> {
    fn milestones(&self) -> Result<Vec<Milestone>> {
        let url = self
            .client
            .endpoint(&format!("repos/{}/milestones", self.full_name));
        self.client.get_paginated(&url, &[("state", "open")])
    }

    fn labels(&self) -> Result<Vec<Label>> {
        let url = self
            .client
            .endpoint(&format!("repos/{}/labels", self.full_name));
        self.client.get_paginated(&url, &[])
    }

    fn issues(&self, milestone: &Milestone, label: &Label) -> Result<Vec<Issue>> {
        let url = self
            .client
            .endpoint(&format!("repos/{}/issues", self.full_name));
        let number = milestone.number.to_string();
        self.client.get_paginated(
            &url,
            &[
                ("milestone", number.as_str()),
                ("labels", label.name.as_str()),
                ("state", "all"),
            ],
        )
    }
}

impl BoardSource for GithubClient {
    fn organization_projects(&self, org: &str) -> Result<Vec<Project>> {
        self.get_paginated(&self.endpoint(&format!("orgs/{org}/projects")), &[])
    }

    fn repository_projects(&self, repository: &str) -> Result<Vec<Project>> {
        self.get_paginated(&self.endpoint(&format!("repos/{repository}/projects")), &[])
    }

    fn columns(&self, project: &Project) -> Result<Vec<Column>> {
        self.get_paginated(
            &self.endpoint(&format!("projects/{}/columns", project.id)),
            &[],
        )
    }

    fn cards(&self, column: &Column) -> Result<Vec<Card>> {
        self.get_paginated(
            &self.endpoint(&format!("projects/columns/{}/cards", column.id)),
            &[],
        )
    }

    fn card_content(&self, card: &Card) -> Result<Option<Issue>> {
        match &card.content_url {
            Some(url) => self.get_json(url, &[]).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_url_picks_next_relation() {
        // Arrange
        let link = r#"<https://api.github.com/repositories/1/labels?per_page=100&page=2>; rel="next", <https://api.github.com/repositories/1/labels?per_page=100&page=5>; rel="last""#;

        // Act
        let next = next_page_url(link);

        // Assert
        assert_eq!(
            next.as_deref(),
            Some("https://api.github.com/repositories/1/labels?per_page=100&page=2")
        );
    }

    #[test]
    fn test_next_page_url_absent_on_last_page() {
        let link = r#"<https://api.github.com/x?page=1>; rel="first", <https://api.github.com/x?page=4>; rel="prev""#;
        assert_eq!(next_page_url(link), None);
    }

    #[test]
    fn test_new_rejects_token_with_newline() {
        let result = GithubClient::new(DEFAULT_API_URL, Some("abc\ndef"));
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        // Arrange
        let client =
            GithubClient::new("https://ghe.example.com/api/v3/", None).expect("client should build");

        // Act
        let url = client.endpoint("repos/acme/widgets");

        // Assert
        assert_eq!(url, "https://ghe.example.com/api/v3/repos/acme/widgets");
    }
}
