//! Pure state transitions: (Phase, answer) → Step.
//!
//! This is the core logic of the menu. Fully testable without a console.
//! Each phase decides what an answer means; answers that resolve nothing
//! keep the phase and attach a notice.

use crate::types::{BACK_CHAR, BACK_WORD};

use super::state::{next_page, page_start, Catalog, Phase, Resolution, Step};

/// What a trimmed answer to the choice prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceAnswer {
    /// Empty: show the next page.
    NextPage,
    /// A number, already shifted from page-relative to global.
    Index(i64),
    /// A number too large to be any item's position.
    Overflow(String),
    /// Anything else: a global action token or a choice label.
    Name(String),
}

/// Interpret a choice-prompt answer given while `page` is on screen.
///
/// Numbers are page-relative on screen but resolve globally: `n` on a page
/// starting at `start` means item `n + start`, even past the page's end.
pub fn read_choice_answer(answer: &str, page: usize) -> ChoiceAnswer {
    let answer = answer.trim();
    if answer.is_empty() {
        return ChoiceAnswer::NextPage;
    }
    match read_number(answer) {
        Some(Number::Fits(n)) => ChoiceAnswer::Index(n.saturating_add(page_start(page) as i64)),
        Some(Number::Overflow) => ChoiceAnswer::Overflow(answer.to_string()),
        None => ChoiceAnswer::Name(answer.to_string()),
    }
}

/// A trimmed answer spelled as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Number {
    Fits(i64),
    Overflow,
}

/// `None` unless `answer` is an optional sign followed by digits.
///
/// Integer-shaped answers never fall through to name lookup, however
/// many digits they have.
fn read_number(answer: &str) -> Option<Number> {
    let digits = answer.strip_prefix(['+', '-']).unwrap_or(answer);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(match answer.parse::<i64>() {
        Ok(n) => Number::Fits(n),
        Err(_) => Number::Overflow,
    })
}

/// Pure state transition function.
///
/// Given the current phase, one raw answer, and the menu's text, produce
/// the next phase. `Resolved` is terminal and absorbs every answer.
pub fn update(phase: Phase, answer: &str, catalog: &Catalog<'_>) -> Step {
    match phase {
        Phase::PickingChoice { page, .. } => update_picking_choice(page, answer, catalog),
        Phase::PickingAction { choice } => update_picking_action(choice, answer, catalog),
        Phase::Resolved(_) => Step::to(phase),
    }
}

// ============================================================================
// PER-PHASE HANDLERS
// ============================================================================

fn update_picking_choice(page: usize, answer: &str, catalog: &Catalog<'_>) -> Step {
    let count = catalog.choices.len();
    let retry = Phase::PickingChoice {
        page,
        heading: true,
    };

    let (chosen, shown) = match read_choice_answer(answer, page) {
        ChoiceAnswer::NextPage => {
            let page = next_page(page, count);
            tracing::debug!(page, "advancing to next page");
            return Step::to(Phase::PickingChoice {
                page,
                heading: false,
            });
        }
        ChoiceAnswer::Index(index) => (
            usize::try_from(index).ok().filter(|&i| i < count),
            index.to_string(),
        ),
        ChoiceAnswer::Overflow(text) => (None, text),
        ChoiceAnswer::Name(name) => {
            // Global actions win over a choice with the same label
            if let Some(global) = catalog.globals.iter().position(|g| g.token == name) {
                tracing::debug!(token = %name, "global action selected");
                return Step::to(Phase::Resolved(Resolution::Global(global)));
            }
            (catalog.choices.iter().position(|&label| label == name), name)
        }
    };

    match chosen {
        Some(choice) if catalog.has_action_phase() => {
            tracing::debug!(choice, "choice selected, asking for action");
            Step::to(Phase::PickingAction { choice })
        }
        Some(choice) => {
            tracing::debug!(choice, "choice selected");
            Step::to(Phase::Resolved(Resolution::Choice(choice)))
        }
        None => {
            tracing::debug!(answer = answer.trim(), resolved = %shown, "answer matched no choice");
            Step::rejected(retry, &shown)
        }
    }
}

fn update_picking_action(choice: usize, answer: &str, catalog: &Catalog<'_>) -> Step {
    let answer = answer.trim();

    if answer == BACK_CHAR || answer == BACK_WORD {
        tracing::debug!("back from action selection, restarting menu");
        return Step::to(Phase::start());
    }

    let chosen = match read_number(answer) {
        Some(Number::Fits(n)) => usize::try_from(n).ok().filter(|&i| i < catalog.actions.len()),
        Some(Number::Overflow) => None,
        None => catalog.actions.iter().position(|&label| label == answer),
    };

    match chosen {
        Some(action) => {
            tracing::debug!(choice, action, "action selected");
            Step::to(Phase::Resolved(Resolution::ChoiceAction(choice, action)))
        }
        None => {
            tracing::debug!(answer, "answer matched no action");
            Step::rejected(Phase::PickingAction { choice }, answer)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
