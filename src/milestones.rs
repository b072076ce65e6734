//! Milestone roadmap rendering.

use anyhow::{Context, Result};
use std::collections::HashSet;

use crate::markdown::{self, SEPARATOR};
use crate::model::Repository;
use crate::source::RepositorySource;

/// Renders a repository's milestones as Markdown lines.
///
/// Each milestone lists, per label, the issues carrying that label. An issue
/// is printed once per run, under the first milestone and label it matches.
///
/// # Errors
///
/// Returns error if milestones, labels or issues cannot be listed.
pub fn render_milestones<S: RepositorySource + ?Sized>(
    repository: &Repository,
    source: &S,
) -> Result<Vec<String>> {
    let milestones = source.milestones().context("Failed to list milestones")?;
    let labels = source.labels().context("Failed to list labels")?;

    tracing::info!(
        repository = %repository.full_name,
        milestones = milestones.len(),
        labels = labels.len(),
        "Rendering milestone roadmap"
    );

    let mut seen_issues = HashSet::new();
    let mut lines = Vec::new();

    for milestone in &milestones {
        lines.push(markdown::milestone_heading(milestone));
        lines.push(markdown::eta_timestamp(milestone.due_on.as_ref()));
        lines.push(String::new());
        lines.push(milestone.description.clone().unwrap_or_default());
        lines.push(String::new());

        for label in &labels {
            let issues = source.issues(milestone, label).with_context(|| {
                format!(
                    "Failed to list issues for milestone '{}' and label '{}'",
                    milestone.title, label.name
                )
            })?;

            if issues.is_empty() {
                continue;
            }

            lines.push(markdown::label_bullet(label));

            for issue in &issues {
                if seen_issues.insert(issue.id) {
                    lines.push(markdown::issue_bullet(issue));
                }
            }
        }

        lines.push(String::new());
    }

    lines.push(SEPARATOR.to_string());
    lines.push(markdown::repository_attribution(&repository.html_url));

    Ok(lines)
}
