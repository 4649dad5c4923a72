//! choice: plain-text console prompts.
//!
//! Paged choice menus with optional actions, validated free-form input,
//! and yes/no questions over a line-oriented terminal.

pub mod console;
pub mod items;
pub mod menu;
pub mod prompt;
pub mod report;
pub mod types;

pub use console::{Console, PromptError};
pub use menu::Menu;
pub use prompt::{parsed, validate, Binary, Input, ParseError, Parser};
pub use types::{labels, Item, Selection};
