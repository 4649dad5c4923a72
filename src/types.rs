//! Domain types for choice.
//!
//! Labeled items going in, selections coming out.

use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of choices shown per page.
pub const PAGE_SIZE: usize = 10;

/// Token that abandons action selection and starts the menu over.
pub const BACK_CHAR: &str = "b";

/// Word accepted in place of [`BACK_CHAR`].
pub const BACK_WORD: &str = "back";

// ============================================================================
// ITEMS
// ============================================================================

/// A selectable entry: an opaque identifier plus the text shown for it.
///
/// The identifier is handed back to the caller on selection. Nothing
/// enforces uniqueness; name lookups take the first matching label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item<T> {
    pub id: T,
    pub label: String,
}

impl<T> Item<T> {
    pub fn new(id: T, label: impl Into<String>) -> Self {
        Item {
            id,
            label: label.into(),
        }
    }
}

impl Item<String> {
    /// An item whose identifier is its own label.
    pub fn named(label: impl Into<String>) -> Self {
        let label = label.into();
        Item {
            id: label.clone(),
            label,
        }
    }
}

/// Build items from bare names, each name doubling as its identifier.
pub fn labels<I, S>(names: I) -> Vec<Item<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Item::named).collect()
}

/// Item as written in a JSON list: `"name"` or `["id", "name"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    Name(String),
    Pair(String, String),
}

impl From<ItemSpec> for Item<String> {
    fn from(spec: ItemSpec) -> Self {
        match spec {
            ItemSpec::Name(name) => Item::named(name),
            ItemSpec::Pair(id, label) => Item::new(id, label),
        }
    }
}

// ============================================================================
// SELECTIONS
// ============================================================================

/// Final answer of a menu.
///
/// A menu with fewer than two actions never asks for one, so it answers
/// with `Choice`. Menus with two or more actions answer with
/// `ChoiceAction`. A global action bypasses both and answers `Global`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selection<C, A, G> {
    Choice(C),
    ChoiceAction(C, A),
    Global(G),
}

impl<C, A, G> Selection<C, A, G> {
    /// The chosen item's identifier, if a choice was made.
    pub fn choice(&self) -> Option<&C> {
        match self {
            Selection::Choice(c) | Selection::ChoiceAction(c, _) => Some(c),
            Selection::Global(_) => None,
        }
    }

    /// The chosen action's identifier, if the action phase ran.
    pub fn action(&self) -> Option<&A> {
        match self {
            Selection::ChoiceAction(_, a) => Some(a),
            _ => None,
        }
    }

    /// The global action's identifier, if one short-circuited the menu.
    pub fn global(&self) -> Option<&G> {
        match self {
            Selection::Global(g) => Some(g),
            _ => None,
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for reporting answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_name_as_id() {
        let items = labels(["steak", "potatoes"]);
        assert_eq!(items[0], Item::new("steak".to_string(), "steak"));
        assert_eq!(items[1].id, items[1].label);
    }

    #[test]
    fn item_spec_accepts_name_or_pair() {
        let specs: Vec<ItemSpec> = serde_json::from_str(r#"["edit", ["rm", "delete"]]"#).unwrap();
        let items: Vec<Item<String>> = specs.into_iter().map(Item::from).collect();
        assert_eq!(items[0], Item::named("edit"));
        assert_eq!(items[1], Item::new("rm".to_string(), "delete"));
    }

    #[test]
    fn selection_accessors_match_shape() {
        let single: Selection<u32, u32, String> = Selection::Choice(3);
        assert_eq!(single.choice(), Some(&3));
        assert_eq!(single.action(), None);

        let pair: Selection<u32, u32, String> = Selection::ChoiceAction(3, 1);
        assert_eq!(pair.choice(), Some(&3));
        assert_eq!(pair.action(), Some(&1));

        let global: Selection<u32, u32, String> = Selection::Global("exit".into());
        assert_eq!(global.choice(), None);
        assert_eq!(global.global().map(String::as_str), Some("exit"));
    }

    #[test]
    fn selection_serializes_with_kind_tag() {
        let pair: Selection<String, String, String> =
            Selection::ChoiceAction("post 3".into(), "edit".into());
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["kind"], "choice_action");
        assert_eq!(json["value"][1], "edit");
    }
}
