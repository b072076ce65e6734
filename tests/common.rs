//! Shared fixtures for integration tests.
//!
//! Provides an in-memory tracker implementing both source traits, plus
//! builders for the records it serves.

#![allow(dead_code)]

use anyhow::{Result, bail};
use chrono::{TimeZone, Utc};
use roadmapper::{
    BoardSource, Card, Column, Issue, IssueState, Label, Milestone, Project, RepositorySource,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// In-memory tracker serving fixed records.
///
/// Issues are matched to `(milestone, label)` queries by milestone id and
/// label name. Card content lookups are counted per card id.
#[derive(Default)]
pub struct FakeTracker {
    pub milestones: Vec<Milestone>,
    pub labels: Vec<Label>,
    pub issues: Vec<Issue>,
    pub org_projects: Vec<Project>,
    pub repo_projects: Vec<Project>,
    pub columns: Vec<(Column, Vec<Card>)>,
    pub contents: HashMap<u64, Issue>,
    pub failing_cards: HashSet<u64>,
    pub content_calls: RefCell<HashMap<u64, usize>>,
}

impl FakeTracker {
    /// Number of content lookups made for `card_id`.
    pub fn content_calls_for(&self, card_id: u64) -> usize {
        self.content_calls
            .borrow()
            .get(&card_id)
            .copied()
            .unwrap_or(0)
    }
}

impl RepositorySource for FakeTracker {
    fn milestones(&self) -> Result<Vec<Milestone>> {
        Ok(self.milestones.clone())
    }

    fn labels(&self) -> Result<Vec<Label>> {
        Ok(self.labels.clone())
    }

    fn issues(&self, milestone: &Milestone, label: &Label) -> Result<Vec<Issue>> {
        Ok(self
            .issues
            .iter()
            .filter(|issue| issue.milestone.as_ref().map(|m| m.id) == Some(milestone.id))
            .filter(|issue| issue.labels.iter().any(|l| l.name == label.name))
            .cloned()
            .collect())
    }
}

impl BoardSource for FakeTracker {
    fn organization_projects(&self, _org: &str) -> Result<Vec<Project>> {
        Ok(self.org_projects.clone())
    }

    fn repository_projects(&self, _repository: &str) -> Result<Vec<Project>> {
        Ok(self.repo_projects.clone())
    }

    fn columns(&self, _project: &Project) -> Result<Vec<Column>> {
        Ok(self.columns.iter().map(|(column, _)| column.clone()).collect())
    }

    fn cards(&self, column: &Column) -> Result<Vec<Card>> {
        Ok(self
            .columns
            .iter()
            .find(|(c, _)| c.id == column.id)
            .map(|(_, cards)| cards.clone())
            .unwrap_or_default())
    }

    fn card_content(&self, card: &Card) -> Result<Option<Issue>> {
        *self.content_calls.borrow_mut().entry(card.id).or_insert(0) += 1;

        if self.failing_cards.contains(&card.id) {
            bail!("404 Not Found: content of card {} was removed", card.id);
        }

        Ok(self.contents.get(&card.id).cloned())
    }
}

/// Milestone `number` of acme/widgets, due 2024-05-01 when `due` is set.
pub fn milestone(number: u64, title: &str, description: Option<&str>, due: bool) -> Milestone {
    Milestone {
        id: 1000 + number,
        number,
        title: title.to_string(),
        description: description.map(String::from),
        due_on: due.then(|| {
            Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0)
                .single()
                .expect("valid timestamp")
        }),
        url: format!("https://api.github.com/repos/acme/widgets/milestones/{number}"),
    }
}

pub fn label(name: &str, description: Option<&str>) -> Label {
    Label {
        name: name.to_string(),
        description: description.map(String::from),
    }
}

pub fn issue(
    number: u64,
    title: &str,
    state: IssueState,
    milestone: Option<&Milestone>,
    labels: &[&Label],
) -> Issue {
    Issue {
        id: 500 + number,
        number,
        title: title.to_string(),
        html_url: format!("https://github.com/acme/widgets/issues/{number}"),
        state,
        milestone: milestone.cloned(),
        labels: labels.iter().map(|l| (*l).clone()).collect(),
    }
}

pub fn linked_card(id: u64) -> Card {
    Card {
        id,
        note: None,
        content_url: Some(format!("https://api.github.com/repos/acme/widgets/issues/{id}")),
    }
}

pub fn note_card(id: u64, note: &str) -> Card {
    Card {
        id,
        note: Some(note.to_string()),
        content_url: None,
    }
}

pub fn column(id: u64, name: &str) -> Column {
    Column {
        id,
        name: name.to_string(),
    }
}

pub fn project(number: u64, body: Option<&str>) -> Project {
    Project {
        id: 9000 + number,
        number,
        name: format!("Roadmap {number}"),
        body: body.map(String::from),
        html_url: format!("https://github.com/orgs/acme/projects/{number}"),
    }
}
