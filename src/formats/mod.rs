//! Collection file formats
//!
//! Every supported format implements [`CollectionAdapter`], which turns a byte
//! stream into an ordered list of cards and writes a [`Collection`] back out.
//!
//! # Module Structure
//!
//! - [`scryglass`] - ScryGlass CSV export, one row per card
//! - [`decked`] - Decked Builder `.coll2` YAML document, ids and counts only

pub mod decked;
pub mod scryglass;

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::card::Card;
use crate::collection::Collection;
use crate::error::{Error, Result};

pub use decked::DeckedAdapter;
pub use scryglass::ScryGlassAdapter;

/// Parse/serialize capability shared by all collection formats
pub trait CollectionAdapter {
    /// The format this adapter reads and writes
    fn format(&self) -> CollectionFormat;

    /// Parses a whole collection file into cards, in file order.
    ///
    /// Fails with [`Error::Format`] on any structural or numeric mismatch.
    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Card>>;

    /// Writes every card of `collection` in collection order
    fn serialize(&self, collection: &Collection, writer: &mut dyn Write) -> Result<()>;
}

/// Supported collection formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionFormat {
    ScryGlass,
    Decked,
}

impl CollectionFormat {
    /// Returns the name used on the command line (e.g., "scryglass")
    pub fn name(&self) -> &'static str {
        match self {
            CollectionFormat::ScryGlass => "scryglass",
            CollectionFormat::Decked => "decked",
        }
    }

    /// Returns all supported formats
    pub fn all() -> &'static [CollectionFormat] {
        &[CollectionFormat::Decked, CollectionFormat::ScryGlass]
    }

    /// Comma separated list of valid format names, for help and error text
    pub fn valid_names() -> String {
        Self::all()
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Creates the adapter that reads and writes this format
    pub fn adapter(&self) -> Box<dyn CollectionAdapter> {
        match self {
            CollectionFormat::ScryGlass => Box::new(ScryGlassAdapter::new()),
            CollectionFormat::Decked => Box::new(DeckedAdapter::new()),
        }
    }
}

impl FromStr for CollectionFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "scryglass" => Ok(CollectionFormat::ScryGlass),
            "decked" => Ok(CollectionFormat::Decked),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for CollectionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
