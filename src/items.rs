//! Loading item lists from disk.

use std::fs;
use std::io;
use std::path::Path;

use crate::types::{Item, ItemSpec};

/// Read a JSON array of items, each `"name"` or `["id", "name"]`.
pub fn load_items(path: &Path) -> io::Result<Vec<Item<String>>> {
    let contents = fs::read_to_string(path)?;
    let specs: Vec<ItemSpec> = serde_json::from_str(&contents).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Invalid item list: {}", e))
    })?;
    Ok(specs.into_iter().map(Item::from).collect())
}
