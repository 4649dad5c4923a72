//! Pure rendering: map a phase to the lines printed before its prompt.
//!
//! Indices shown next to choices count from zero within the page; the
//! prompt marker itself is added by the run loop.

use crate::types::BACK_CHAR;

use super::state::{page_bounds, Catalog, Notice, Phase};

/// Title used when the caller gives none.
pub const DEFAULT_TITLE: &str = "Make a choice:";

pub const CHOICE_HINT: &str = "Enter number or name; return for next page";

pub const ACTION_HEADING: &str = "Select an action:";

/// Lines to print for `phase`, in order. Empty once resolved.
pub fn render(phase: &Phase, catalog: &Catalog<'_>, title: Option<&str>) -> Vec<String> {
    match phase {
        Phase::PickingChoice { page, heading } => {
            render_choices(*page, *heading, catalog, title)
        }
        Phase::PickingAction { .. } => render_actions(catalog),
        Phase::Resolved(_) => Vec::new(),
    }
}

/// The line printed for a notice.
pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::InvalidChoice(input) => format!("{} is not a valid choice", input),
    }
}

fn render_choices(
    page: usize,
    heading: bool,
    catalog: &Catalog<'_>,
    title: Option<&str>,
) -> Vec<String> {
    let mut lines = Vec::new();

    if heading {
        lines.push(title.unwrap_or(DEFAULT_TITLE).to_string());
    }

    let bounds = page_bounds(page, catalog.choices.len());
    for (i, label) in catalog.choices[bounds].iter().enumerate() {
        lines.push(format!(" {}: {}", i, label));
    }

    if !catalog.globals.is_empty() {
        lines.push(String::new());
        for global in &catalog.globals {
            if global.is_keyword() {
                lines.push(format!("    {}", global.token));
            } else {
                lines.push(format!(" {}: {}", global.token, global.label));
            }
        }
    }

    lines.push(String::new());
    lines.push(CHOICE_HINT.to_string());
    lines
}

fn render_actions(catalog: &Catalog<'_>) -> Vec<String> {
    let mut lines = vec![ACTION_HEADING.to_string()];
    for (i, label) in catalog.actions.iter().enumerate() {
        lines.push(format!(" {}: {}", i, label));
    }
    lines.push(format!(" {}: back", BACK_CHAR));
    lines
}

// ============================================================================
// TESTS
// ============================================================================
