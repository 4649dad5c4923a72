//! Answer formatting for the demo binary.
//!
//! Pure functions: (answer, OutputFormat) → String.
//! No I/O, no side effects.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

use crate::types::{OutputFormat, Selection};

/// Format a menu answer for output.
pub fn format_selection<C, A, G>(selection: &Selection<C, A, G>, format: OutputFormat) -> String
where
    C: Display + Serialize,
    A: Display + Serialize,
    G: Display + Serialize,
{
    match format {
        OutputFormat::Human => format_selection_human(selection),
        OutputFormat::Json => format_json(selection),
    }
}

/// Format any single prompt answer (number, text, yes/no) for output.
pub fn format_answer<T>(label: &str, value: &T, format: OutputFormat) -> String
where
    T: Display + Serialize,
{
    match format {
        OutputFormat::Human => format!("{}: {}\n", label, value),
        OutputFormat::Json => format_json(&BTreeMap::from([(label, value)])),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_selection_human<C: Display, A: Display, G: Display>(
    selection: &Selection<C, A, G>,
) -> String {
    match selection {
        Selection::Choice(c) => format!("Chose: {}\n", c),
        Selection::ChoiceAction(c, a) => format!("Chose: {}\nAction: {}\n", c, a),
        Selection::Global(g) => format!("Global action: {}\n", g),
    }
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    let mut out = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize answer: {}\"}}", e));
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================
