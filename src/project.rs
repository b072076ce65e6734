//! Project board roadmap rendering.

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::links::milestone_html_url;
use crate::markdown::{self, MISCELLANEOUS_EXPLANATION, MISCELLANEOUS_HEADING, SEPARATOR};
use crate::model::{Card, Milestone, Project};
use crate::resolver::ContentResolver;
use crate::source::BoardSource;

/// Cards of one column grouped by the milestone of their linked issue.
///
/// Milestones keep the position of the first card that resolved to them.
#[derive(Debug, Default)]
pub struct MilestoneGroups {
    milestones: Vec<Milestone>,
    cards_by_milestone: HashMap<u64, Vec<Card>>,
    miscellaneous: Vec<Card>,
}

impl MilestoneGroups {
    /// Groups `cards`, resolving each through `resolver`, preserving board order.
    pub fn collect<S: BoardSource + ?Sized>(
        cards: Vec<Card>,
        resolver: &mut ContentResolver<'_, S>,
    ) -> Self {
        let mut groups = Self::default();

        for card in cards {
            let milestone = resolver
                .resolve(&card)
                .and_then(|content| content.milestone.clone());

            match milestone {
                Some(milestone) => {
                    let bucket = groups.cards_by_milestone.entry(milestone.id).or_default();
                    if bucket.is_empty() {
                        groups.milestones.push(milestone);
                    }
                    bucket.push(card);
                }
                None => groups.miscellaneous.push(card),
            }
        }

        groups
    }

    /// Milestones in first-encountered order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Cards assigned to the milestone with `milestone_id`, in board order.
    pub fn cards_for(&self, milestone_id: u64) -> &[Card] {
        self.cards_by_milestone
            .get(&milestone_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cards without a resolvable milestone, in board order.
    pub fn miscellaneous(&self) -> &[Card] {
        &self.miscellaneous
    }
}

/// Formats cards as Markdown bullets, dropping cards with blank text.
pub fn format_cards<S: BoardSource + ?Sized>(
    cards: &[Card],
    resolver: &mut ContentResolver<'_, S>,
) -> Vec<String> {
    cards
        .iter()
        .filter_map(|card| markdown::card_bullet(resolver.resolve(card), card.note.as_deref()))
        .collect()
}

/// Renders a project board as Markdown lines.
///
/// The project body comes first with CDATA blocks unwrapped. Each column then
/// lists its cards grouped by milestone, followed by cards without one.
///
/// # Errors
///
/// Returns error if columns or cards cannot be listed, or if a milestone API
/// URL is malformed. Card content failures never surface here.
pub fn render_project<S: BoardSource + ?Sized>(project: &Project, source: &S) -> Result<Vec<String>> {
    let mut resolver = ContentResolver::new(source);
    let mut lines = Vec::new();

    let body = markdown::unwrap_cdata(project.body.as_deref().unwrap_or_default());
    lines.extend(body.trim().split('\n').map(String::from));

    lines.push(String::new());
    lines.push(SEPARATOR.to_string());

    let columns = source
        .columns(project)
        .with_context(|| format!("Failed to list columns of project {}", project.number))?;

    for column in &columns {
        tracing::info!(column = %column.name, "Rendering column");
        lines.push(format!("# {}", column.name));

        let cards = source
            .cards(column)
            .with_context(|| format!("Failed to list cards of column '{}'", column.name))?;
        let groups = MilestoneGroups::collect(cards, &mut resolver);

        for milestone in groups.milestones() {
            let url = milestone_html_url(&milestone.url)?;
            lines.push(markdown::milestone_link_heading(milestone, &url));

            if let Some(due_on) = &milestone.due_on {
                lines.push(markdown::eta_date(due_on));
                lines.push(String::new());
            }

            if let Some(description) = milestone.description.as_deref().filter(|d| !d.is_empty()) {
                lines.extend(description.split('\n').map(String::from));
            }

            lines.push(String::new());
            lines.extend(format_cards(groups.cards_for(milestone.id), &mut resolver));
            lines.push(String::new());
        }

        if !groups.miscellaneous().is_empty() {
            lines.push(MISCELLANEOUS_HEADING.to_string());
            lines.push(MISCELLANEOUS_EXPLANATION.to_string());
            lines.push(String::new());
            lines.extend(format_cards(groups.miscellaneous(), &mut resolver));
            lines.push(String::new());
        }
    }

    lines.push(SEPARATOR.to_string());
    lines.push(markdown::project_attribution(&project.html_url));

    Ok(lines)
}
