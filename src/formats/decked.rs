//! Decked Builder `.coll2` collection
//!
//! A YAML document that only knows card ids and counts:
//!
//! ```yaml
//! doc:
//! - version: 1
//! - items:
//!   - - id: '12345'
//!     - r: 3
//! ```

use std::io::{Read, Write};

use log::{debug, trace, warn};
use serde::Serialize;
use serde_yaml::Value;

use super::{CollectionAdapter, CollectionFormat};
use crate::card::Card;
use crate::collection::Collection;
use crate::error::{Error, Result};

/// Document version written on export
pub const VERSION: u64 = 1;

#[derive(Serialize)]
struct DocumentFile<'a> {
    doc: (VersionEntry, ItemsEntry<'a>),
}

#[derive(Serialize)]
struct VersionEntry {
    version: u64,
}

#[derive(Serialize)]
struct ItemsEntry<'a> {
    items: Vec<(IdEntry<'a>, CountEntry)>,
}

#[derive(Serialize)]
struct IdEntry<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct CountEntry {
    r: i64,
}

/// Reads and writes Decked Builder collections
#[derive(Debug, Default, Clone, Copy)]
pub struct DeckedAdapter;

impl DeckedAdapter {
    pub fn new() -> Self {
        Self
    }

    fn malformed(message: impl Into<String>) -> Error {
        Error::format(CollectionFormat::Decked, message)
    }

    /// Locates `doc[1].items`. `items: null` counts as an empty list.
    fn items(root: &Value) -> Result<&[Value]> {
        let doc = root
            .get("doc")
            .ok_or_else(|| Self::malformed("missing top-level 'doc' key"))?
            .as_sequence()
            .ok_or_else(|| Self::malformed("'doc' is not a list"))?;

        match doc.first().and_then(|entry| entry.get("version")) {
            Some(version) if version.as_u64() == Some(VERSION) => {}
            Some(version) => warn!("Unexpected Decked collection version {:?}", version),
            None => warn!("Decked collection has no version entry"),
        }

        let items = doc
            .get(1)
            .and_then(|entry| entry.get("items"))
            .ok_or_else(|| Self::malformed("second 'doc' entry has no 'items' key"))?;

        match items {
            Value::Null => Ok(&[][..]),
            Value::Sequence(items) => Ok(items.as_slice()),
            _ => Err(Self::malformed("'items' is not a list")),
        }
    }

    /// Parses one `[{id: ...}, {r: ...}]` pair
    fn parse_item(item: &Value, index: usize) -> Result<Card> {
        let pair = item
            .as_sequence()
            .filter(|pair| pair.len() == 2)
            .ok_or_else(|| {
                Self::malformed(format!("item {index}: expected an [id, r] pair, got {item:?}"))
            })?;

        let id = match pair[0].get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            Some(other) => {
                return Err(Self::malformed(format!(
                    "item {index}: 'id' must be a string or number, got {other:?}"
                )))
            }
            None => return Err(Self::malformed(format!("item {index}: missing 'id'"))),
        };
        if id.is_empty() {
            return Err(Self::malformed(format!("item {index}: empty 'id'")));
        }

        let count = match pair[1].get("r") {
            Some(Value::Number(r)) => r.as_i64(),
            Some(Value::String(r)) => r.trim().parse::<i64>().ok(),
            Some(_) => None,
            None => return Err(Self::malformed(format!("item {index} ({id}): missing 'r'"))),
        }
        .ok_or_else(|| {
            Self::malformed(format!(
                "item {index} ({id}): 'r' is not an integer ({:?})",
                pair[1]
            ))
        })?;

        Ok(Card::new(id, count))
    }
}

impl CollectionAdapter for DeckedAdapter {
    fn format(&self) -> CollectionFormat {
        CollectionFormat::Decked
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Card>> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;

        let root: Value = serde_yaml::from_slice(&content)
            .map_err(|e| Self::malformed(format!("invalid YAML: {e}")))?;

        let cards = Self::items(&root)?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                trace!("Decked item {index}: {:?}", item);
                Self::parse_item(item, index)
            })
            .collect::<Result<Vec<Card>>>()?;

        debug!("Parsed {} Decked items", cards.len());
        Ok(cards)
    }

    fn serialize(&self, collection: &Collection, writer: &mut dyn Write) -> Result<()> {
        let file = DocumentFile {
            doc: (
                VersionEntry { version: VERSION },
                ItemsEntry {
                    items: collection
                        .iter()
                        .map(|card| (IdEntry { id: card.id() }, CountEntry { r: card.count() }))
                        .collect(),
                },
            ),
        };

        let content = serde_yaml::to_string(&file)
            .map_err(|e| Error::encode(CollectionFormat::Decked, e.to_string()))?;
        writer.write_all(content.as_bytes())?;

        debug!("Serialized {} Decked items", collection.len());
        Ok(())
    }
}

#[cfg(test)]
#[path = "decked_tests.rs"]
mod tests;
