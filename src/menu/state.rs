//! Menu state algebra: pure types, zero effects.
//!
//! A menu is always in exactly one [`Phase`]. The transition function in
//! `update` moves between phases one answer at a time; the run loop in
//! `run` keeps asking until the phase is `Resolved`.
//!
//! Phases refer to items by position, never by identifier. The typed
//! identifiers only come back into play once the run loop maps a
//! [`Resolution`] onto the caller's lists.

use crate::types::PAGE_SIZE;

// ============================================================================
// PHASES
// ============================================================================

/// Where the menu is in its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing one page of choices.
    PickingChoice {
        /// Zero-based page being shown.
        page: usize,
        /// Whether the title goes out before this page. True when the
        /// choice prompt is (re)entered, false after a page advance.
        heading: bool,
    },

    /// A choice is made; asking which action to apply to it.
    PickingAction {
        /// Global index of the chosen item.
        choice: usize,
    },

    /// Terminal.
    Resolved(Resolution),
}

/// Positions of whatever the user settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A choice, with no action phase.
    Choice(usize),
    /// A choice and the action to apply to it.
    ChoiceAction(usize, usize),
    /// A global action; no choice was made.
    Global(usize),
}

/// Message printed after an answer that resolved nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// `input` matched no choice, action, or global action.
    InvalidChoice(String),
}

/// Result of feeding one answer to the transition function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub phase: Phase,
    pub notice: Option<Notice>,
}

impl Phase {
    /// Fresh menu: first page, title shown.
    pub fn start() -> Self {
        Phase::PickingChoice {
            page: 0,
            heading: true,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Phase::Resolved(_))
    }
}

impl Step {
    pub fn to(phase: Phase) -> Self {
        Step {
            phase,
            notice: None,
        }
    }

    pub fn rejected(phase: Phase, input: &str) -> Self {
        Step {
            phase,
            notice: Some(Notice::InvalidChoice(input.to_string())),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// A global action as the user sees and types it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalEntry<'a> {
    /// The identifier as text: both the displayed token and what the
    /// user types to pick it.
    pub token: String,
    pub label: &'a str,
}

impl GlobalEntry<'_> {
    /// Shown as a bare keyword when the token already says it all.
    pub fn is_keyword(&self) -> bool {
        self.token == self.label
    }
}

/// The text side of a menu: everything rendering and resolution need,
/// nothing they don't.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog<'a> {
    pub choices: Vec<&'a str>,
    pub actions: Vec<&'a str>,
    pub globals: Vec<GlobalEntry<'a>>,
}

impl Catalog<'_> {
    /// Action phase runs only when there is a real choice of action.
    pub fn has_action_phase(&self) -> bool {
        self.actions.len() > 1
    }
}

// ============================================================================
// PAGING
// ============================================================================

/// Pages needed for `count` choices. Never zero.
pub fn num_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Global index of the first choice on `page`.
pub fn page_start(page: usize) -> usize {
    page * PAGE_SIZE
}

/// Global index range shown on `page`, clamped to `count`.
pub fn page_bounds(page: usize, count: usize) -> std::ops::Range<usize> {
    let start = page_start(page).min(count);
    let end = (start + PAGE_SIZE).min(count);
    start..end
}

/// Page after `page`, wrapping from the last back to the first.
pub fn next_page(page: usize, count: usize) -> usize {
    let next = page + 1;
    if next >= num_pages(count) { 0 } else { next }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_pages_rounds_up() {
        assert_eq!(num_pages(1), 1);
        assert_eq!(num_pages(10), 1);
        assert_eq!(num_pages(11), 2);
        assert_eq!(num_pages(15), 2);
        assert_eq!(num_pages(20), 2);
        assert_eq!(num_pages(21), 3);
    }

    #[test]
    fn num_pages_is_at_least_one() {
        assert_eq!(num_pages(0), 1);
    }

    #[test]
    fn pages_are_full_except_possibly_last() {
        for count in 0..=35 {
            let pages = num_pages(count);
            let mut seen = 0;
            for page in 0..pages {
                let len = page_bounds(page, count).len();
                if page + 1 < pages {
                    assert_eq!(len, PAGE_SIZE, "count {count} page {page}");
                } else if count > 0 {
                    let expected = if count % PAGE_SIZE == 0 { PAGE_SIZE } else { count % PAGE_SIZE };
                    assert_eq!(len, expected, "count {count} last page");
                }
                seen += len;
            }
            assert_eq!(seen, count);
        }
    }

    #[test]
    fn next_page_wraps_from_last_to_first() {
        assert_eq!(next_page(0, 15), 1);
        assert_eq!(next_page(1, 15), 0);
        assert_eq!(next_page(0, 3), 0);
        assert_eq!(next_page(0, 0), 0);
    }

    #[test]
    fn cycling_every_page_returns_to_start() {
        let count = 47;
        let mut page = 0;
        for _ in 0..num_pages(count) {
            page = next_page(page, count);
        }
        assert_eq!(page, 0);
    }

    #[test]
    fn start_phase_is_first_page_with_heading() {
        assert_eq!(
            Phase::start(),
            Phase::PickingChoice {
                page: 0,
                heading: true
            }
        );
        assert!(!Phase::start().is_resolved());
        assert!(Phase::Resolved(Resolution::Choice(0)).is_resolved());
    }

    #[test]
    fn action_phase_needs_two_actions() {
        let mut catalog = Catalog::default();
        assert!(!catalog.has_action_phase());
        catalog.actions = vec!["edit"];
        assert!(!catalog.has_action_phase());
        catalog.actions = vec!["edit", "delete"];
        assert!(catalog.has_action_phase());
    }

    #[test]
    fn global_keyword_when_token_equals_label() {
        let exit = GlobalEntry { token: "exit".into(), label: "exit" };
        let new = GlobalEntry { token: "n".into(), label: "new post" };
        assert!(exit.is_keyword());
        assert!(!new.is_keyword());
    }
}
