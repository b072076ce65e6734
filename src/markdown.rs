//! Markdown line formatting.
//!
//! Pure functions turning tracker records into literal Markdown lines. The
//! renderers decide ordering; nothing here fetches data.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::model::{Issue, Label, Milestone};

/// Horizontal rule between the document body and its attribution.
pub const SEPARATOR: &str = "---";

/// Heading of the bucket for cards without a milestone.
pub const MISCELLANEOUS_HEADING: &str = "## Miscellaneous Tasks";

/// Explanation under [`MISCELLANEOUS_HEADING`].
pub const MISCELLANEOUS_EXPLANATION: &str =
    "These tasks have no product features or milestones associated with them.";

static CDATA_BLOCK: OnceLock<Regex> = OnceLock::new();

fn cdata_block() -> &'static Regex {
    CDATA_BLOCK.get_or_init(|| {
        Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("Invalid regex pattern")
    })
}

/// Replaces every `<![CDATA[...]]>` block with its inner text.
pub fn unwrap_cdata(body: &str) -> String {
    cdata_block().replace_all(body, "$1").into_owned()
}

/// Wraps `line` in strike-through markers.
pub fn strike(line: &str) -> String {
    format!("~~{line}~~")
}

/// Wraps `line` in strike-through markers when `issue` is closed.
fn strike_if_closed(issue: &Issue, line: String) -> String {
    if issue.is_closed() { strike(&line) } else { line }
}

/// Top-level milestone heading: `# {title}`.
pub fn milestone_heading(milestone: &Milestone) -> String {
    format!("# {}", milestone.title)
}

/// Linked milestone heading: `## [{title}]({url})`.
pub fn milestone_link_heading(milestone: &Milestone, html_url: &str) -> String {
    format!("## [{}]({})", milestone.title, html_url)
}

/// ETA line with the full due timestamp, `None` when unset.
pub fn eta_timestamp(due_on: Option<&DateTime<Utc>>) -> String {
    match due_on {
        Some(due) => format!("**ETA {}**", due.naive_utc()),
        None => "**ETA None**".to_string(),
    }
}

/// ETA line with the due date only, ISO formatted.
pub fn eta_date(due_on: &DateTime<Utc>) -> String {
    format!("**ETA {}**", due_on.date_naive().format("%Y-%m-%d"))
}

/// Label bullet: `* {name} - {description}`, or `* {name}` without description.
pub fn label_bullet(label: &Label) -> String {
    match label.description.as_deref() {
        Some(description) if !description.is_empty() => {
            format!("* {} - {}", label.name, description)
        }
        _ => format!("* {}", label.name),
    }
}

/// Nested issue bullet: `  * {title} [Github Issue #{number}]({url})`.
pub fn issue_bullet(issue: &Issue) -> String {
    let line = format!(
        "{} [Github Issue #{}]({})",
        issue.title, issue.number, issue.html_url
    );
    format!("  * {}", strike_if_closed(issue, line))
}

/// Card bullet from the linked content, or from the note when there is none.
///
/// Returns `None` when the resulting text is blank.
pub fn card_bullet(content: Option<&Issue>, note: Option<&str>) -> Option<String> {
    let line = match content {
        Some(issue) => strike_if_closed(
            issue,
            format!("{} - [Issue #{}]({})", issue.title, issue.number, issue.html_url),
        ),
        None => note.unwrap_or_default().to_string(),
    };

    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    Some(format!("* {}", line.replace("\r\n", " ").replace('\n', " ")))
}

/// Closing attribution line for the milestone roadmap.
pub fn repository_attribution(html_url: &str) -> String {
    format!(
        "For more information see [the Repository that this Roadmap was generated from.]({html_url})"
    )
}

/// Closing attribution line for the project roadmap.
pub fn project_attribution(html_url: &str) -> String {
    format!(
        "For more information see [the Project that this Roadmap was generated from.]({html_url})"
    )
}
