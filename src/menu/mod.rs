//! Paged choice menu with optional per-choice actions and global actions.
//!
//! Organized the same way as any pure state-machine UI:
//! - `state`: pure types (Phase, Resolution, Catalog) and paging math
//! - `update`: pure transitions, one answer at a time
//! - `view`: pure rendering to lines
//! - `run`: the effectful ask loop over a [`Console`]
//!
//! [`Menu`] is the typed front: it owns the caller's items, hands their
//! labels to the pure layers, and maps the resolved positions back onto
//! the caller's identifiers.

pub mod run;
pub mod state;
pub mod update;
pub mod view;

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::console::{Console, PromptError};
use crate::types::{Item, Selection};

use state::{Catalog, GlobalEntry, Resolution};

/// A menu over choices of id type `C`, actions `A`, and global actions `G`.
#[derive(Debug, Clone)]
pub struct Menu<C, A, G> {
    choices: Vec<Item<C>>,
    actions: Vec<Item<A>>,
    global_actions: Vec<Item<G>>,
    title: Option<String>,
}

impl<C> Menu<C, String, String> {
    /// A menu with no actions and no global actions yet.
    pub fn new(choices: Vec<Item<C>>) -> Self {
        Menu {
            choices,
            actions: Vec::new(),
            global_actions: Vec::new(),
            title: None,
        }
    }
}

impl<C, A, G> Menu<C, A, G> {
    /// Actions offered once a choice is made.
    ///
    /// With fewer than two, no action is asked for and the menu answers
    /// with the bare choice.
    pub fn with_actions<A2>(self, actions: Vec<Item<A2>>) -> Menu<C, A2, G> {
        Menu {
            choices: self.choices,
            actions,
            global_actions: self.global_actions,
            title: self.title,
        }
    }

    /// Escape hatches listed under every page of choices.
    ///
    /// A global action is picked by typing its identifier, so identifiers
    /// must print as something the user can type.
    pub fn with_global_actions<G2: Display>(self, global_actions: Vec<Item<G2>>) -> Menu<C, A, G2> {
        Menu {
            choices: self.choices,
            actions: self.actions,
            global_actions,
            title: self.title,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn actions(&self) -> &[Item<A>] {
        &self.actions
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl<C: Clone, A: Clone, G: Clone + Display> Menu<C, A, G> {
    /// Ask on stdin/stdout.
    pub fn ask(&self) -> Result<Selection<C, A, G>, PromptError> {
        self.ask_on(&mut Console::stdio())
    }

    pub fn ask_on<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Selection<C, A, G>, PromptError> {
        let resolution = run::run(&self.catalog(), self.title(), console)?;
        Ok(self.select(resolution))
    }

    /// The labels the pure layers work with.
    pub fn catalog(&self) -> Catalog<'_> {
        Catalog {
            choices: self.choices.iter().map(|c| c.label.as_str()).collect(),
            actions: self.actions.iter().map(|a| a.label.as_str()).collect(),
            globals: self
                .global_actions
                .iter()
                .map(|g| GlobalEntry {
                    token: g.id.to_string(),
                    label: g.label.as_str(),
                })
                .collect(),
        }
    }

    /// Map resolved positions back to identifiers.
    ///
    /// Positions come from this menu's own catalog, so they are in range.
    fn select(&self, resolution: Resolution) -> Selection<C, A, G> {
        match resolution {
            Resolution::Choice(c) => Selection::Choice(self.choices[c].id.clone()),
            Resolution::ChoiceAction(c, a) => {
                Selection::ChoiceAction(self.choices[c].id.clone(), self.actions[a].id.clone())
            }
            Resolution::Global(g) => Selection::Global(self.global_actions[g].id.clone()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::labels;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn posts_menu() -> Menu<String, String, String> {
        let posts: Vec<String> = (0..15).map(|n| format!("post {n}")).collect();
        Menu::new(labels(posts))
            .with_actions(labels(["edit", "delete", "publish"]))
            .with_global_actions(labels(["newpost", "exit"]))
    }

    #[test]
    fn bare_names_return_the_name() {
        let menu = Menu::new(labels(["steak", "potatoes", "eggplant"]));
        let answer = menu.ask_on(&mut console("1\n")).unwrap();
        assert_eq!(answer, Selection::Choice("potatoes".to_string()));
    }

    #[test]
    fn explicit_ids_are_returned_not_labels() {
        let menu = Menu::new(vec![Item::new(101u32, "alpha"), Item::new(202u32, "beta")])
            .with_actions(vec![Item::new('e', "edit"), Item::new('d', "delete")]);
        let answer = menu.ask_on(&mut console("beta\ndelete\n")).unwrap();
        assert_eq!(answer, Selection::ChoiceAction(202, 'd'));
    }

    #[test]
    fn single_action_answers_with_bare_choice() {
        let menu = Menu::new(labels(["a", "b"])).with_actions(labels(["open"]));
        let answer = menu.ask_on(&mut console("0\n")).unwrap();
        assert_eq!(answer, Selection::Choice("a".to_string()));
        assert_eq!(answer.action(), None);
    }

    #[test]
    fn two_or_more_actions_answer_with_pair() {
        let answer = posts_menu().ask_on(&mut console("3\n0\n")).unwrap();
        assert_eq!(
            answer,
            Selection::ChoiceAction("post 3".to_string(), "edit".to_string())
        );
    }

    #[test]
    fn paging_then_relative_index() {
        let answer = posts_menu().ask_on(&mut console("\n4\n2\n")).unwrap();
        assert_eq!(
            answer,
            Selection::ChoiceAction("post 14".to_string(), "publish".to_string())
        );
    }

    #[test]
    fn global_action_returns_its_id() {
        let answer = posts_menu().ask_on(&mut console("exit\n")).unwrap();
        assert_eq!(answer, Selection::Global("exit".to_string()));
    }

    #[test]
    fn numeric_global_id_is_unreachable() {
        let menu = Menu::new(labels(["a"])).with_global_actions(vec![Item::new(99u16, "quit")]);
        let out = menu.ask_on(&mut console("quit\n99\n"));
        // "quit" is the label, not the token; "99" parses as an index first
        assert!(matches!(out, Err(PromptError::Closed)));
    }

    #[test]
    fn back_then_new_choice() {
        let answer = posts_menu()
            .ask_on(&mut console("2\nb\n5\nback\n7\ndelete\n"))
            .unwrap();
        assert_eq!(
            answer,
            Selection::ChoiceAction("post 7".to_string(), "delete".to_string())
        );
    }

    #[test]
    fn out_of_range_then_valid() {
        let menu = Menu::new(labels(["steak", "potatoes", "eggplant"]));
        let mut c = console("15\n2\n");
        let answer = menu.ask_on(&mut c).unwrap();
        assert_eq!(answer, Selection::Choice("eggplant".to_string()));

        let out = String::from_utf8(c.into_output()).unwrap();
        assert!(out.contains("15 is not a valid choice"));
    }

    #[test]
    fn catalog_renders_global_ids_as_tokens() {
        let menu = Menu::new(labels(["a"])).with_global_actions(vec![Item::new('n', "new post")]);
        let catalog = menu.catalog();
        assert_eq!(catalog.globals[0].token, "n");
        assert_eq!(catalog.globals[0].label, "new post");
    }

    #[test]
    fn builder_keeps_title_across_type_changes() {
        let menu = Menu::new(labels(["a"]))
            .with_title("Pick")
            .with_actions(vec![Item::new(1u8, "one")]);
        assert_eq!(menu.title(), Some("Pick"));
        assert_eq!(menu.actions().len(), 1);
    }
}
