//! Menu effects boundary: the ask loop.
//!
//! The only menu module that touches a console. It renders the current
//! phase, reads one answer, feeds it through the pure transition, and
//! repeats until the phase resolves. Restarting after "back" is just a
//! transition to the start phase; the loop never recurses.

use std::io::{BufRead, Write};

use crate::console::{Console, PromptError, PROMPT_MARKER};

use super::state::{Catalog, Phase, Resolution};
use super::update::update;
use super::view::{render, render_notice};

/// Drive a menu to resolution on `console`.
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog<'_>,
    title: Option<&str>,
    console: &mut Console<R, W>,
) -> Result<Resolution, PromptError> {
    let mut phase = Phase::start();

    loop {
        if let Phase::Resolved(resolution) = phase {
            return Ok(resolution);
        }

        console.lines(render(&phase, catalog, title))?;
        let answer = console.read_answer(PROMPT_MARKER)?;
        console.blank()?;

        let step = update(phase, &answer, catalog);
        if let Some(notice) = &step.notice {
            console.line(&render_notice(notice))?;
        }
        phase = step.phase;
    }
}

// ============================================================================
// TESTS
// ============================================================================
