//! Card collection keyed by catalog id
//!
//! A collection is populated exactly once, either by [`Collection::load`]ing
//! freshly parsed cards or by [`Collection::merge`]ing another collection
//! into it, and is then written out through a format adapter.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, trace, warn};

use crate::atomic_write::write_atomic;
use crate::card::Card;
use crate::error::{Error, Result};
use crate::formats::CollectionAdapter;

/// Outcome of a merge, for reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Cards that were not in the collection before
    pub added: usize,
    /// Cards already present whose count went up by one
    pub incremented: usize,
}

/// Cards keyed by id, iterated in the order ids were first inserted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    cards: IndexMap<String, Card>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    /// Iterate over all cards in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Sum of all card counts, saturating at the `i64` bounds
    pub fn total_count(&self) -> i64 {
        self.cards
            .values()
            .fold(0i64, |total, card| total.saturating_add(card.count()))
    }

    /// Adopts freshly parsed cards as the initial content.
    ///
    /// A later card with an already seen id replaces the earlier one but keeps
    /// its position.
    pub fn load(&mut self, cards: Vec<Card>) -> Result<()> {
        if !self.is_empty() {
            return Err(Error::AlreadyPopulated {
                existing: self.len(),
            });
        }

        for card in cards {
            self.insert_replacing(card);
        }

        for card in self.iter() {
            debug!("{}", card);
        }
        Ok(())
    }

    /// Reads `path` through `adapter` into this empty collection.
    ///
    /// A missing file is not an error: the collection simply stays as it is,
    /// so a destination that does not exist yet can be merged into.
    pub fn read(&mut self, adapter: &dyn CollectionAdapter, path: &Path) -> Result<()> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "{} collection {} does not exist, nothing to read",
                    adapter.format(),
                    path.display()
                );
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        trace!("Reading {} collection {}", adapter.format(), path.display());
        self.read_from(adapter, &mut BufReader::new(file))
    }

    /// Stream form of [`Collection::read`]
    pub fn read_from(
        &mut self,
        adapter: &dyn CollectionAdapter,
        reader: &mut dyn Read,
    ) -> Result<()> {
        if !self.is_empty() {
            return Err(Error::AlreadyPopulated {
                existing: self.len(),
            });
        }

        let cards = adapter.parse(reader)?;
        self.load(cards)
    }

    /// Merges `other` into this collection.
    ///
    /// An empty collection takes over `other` as is. Otherwise unknown ids are
    /// added and every id that is already present gets its count raised by
    /// exactly one, whatever the incoming count is.
    // TODO: decide whether existing entries should gain the incoming count
    // instead of one; changing it alters the output of repeated merges.
    pub fn merge(&mut self, other: Collection) -> MergeReport {
        if self.is_empty() {
            let report = MergeReport {
                added: other.len(),
                incremented: 0,
            };
            *self = other;
            return report;
        }

        let mut report = MergeReport::default();
        for (id, card) in other.cards {
            match self.cards.entry(id) {
                Entry::Occupied(mut entry) => {
                    let existing = entry.get_mut();
                    existing.increment();
                    trace!(
                        "Merged {} into existing entry, count now {}",
                        existing.id(),
                        existing.count()
                    );
                    report.incremented += 1;
                }
                Entry::Vacant(entry) => {
                    trace!("Merged new card {}", card);
                    entry.insert(card);
                    report.added += 1;
                }
            }
        }
        report
    }

    /// Atomically writes the collection to `path` through `adapter`
    pub fn write(&self, adapter: &dyn CollectionAdapter, path: &Path) -> Result<()> {
        trace!("Writing {} collection {}", adapter.format(), path.display());
        write_atomic(path, |writer| self.write_to(adapter, writer))
    }

    /// Stream form of [`Collection::write`]
    pub fn write_to(
        &self,
        adapter: &dyn CollectionAdapter,
        writer: &mut dyn Write,
    ) -> Result<()> {
        adapter.serialize(self, writer)
    }

    fn insert_replacing(&mut self, card: Card) {
        if let Some(previous) = self.cards.insert(card.id().to_string(), card) {
            warn!(
                "Duplicate card id {}, keeping the later entry (replaced: {})",
                previous.id(),
                previous
            );
        }
    }
}

impl FromIterator<Card> for Collection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for card in iter {
            collection.insert_replacing(card);
        }
        collection
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
