//! ScryGlass CSV export
//!
//! One header line followed by one row per card:
//! `Count,Name,Edition,Card Number,Set Code,ID`

use std::io::{Read, Write};

use log::{debug, trace};

use super::{CollectionAdapter, CollectionFormat};
use crate::card::Card;
use crate::collection::Collection;
use crate::error::{Error, Result};

/// Column headers written on export
pub const HEADER: [&str; 6] = ["Count", "Name", "Edition", "Card Number", "Set Code", "ID"];

const COUNT: usize = 0;
const NAME: usize = 1;
const SET_NAME: usize = 2;
const CARD_NUMBER: usize = 3;
const SET_CODE: usize = 4;
const ID: usize = 5;

/// Reads and writes ScryGlass CSV exports
#[derive(Debug, Default, Clone, Copy)]
pub struct ScryGlassAdapter;

impl ScryGlassAdapter {
    pub fn new() -> Self {
        Self
    }

    fn malformed(message: impl Into<String>) -> Error {
        Error::format(CollectionFormat::ScryGlass, message)
    }

    /// Parses one data row. `line` is only used for error messages.
    fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Card> {
        if record.len() < HEADER.len() {
            return Err(Self::malformed(format!(
                "line {line}: expected {} fields, found {} ({:?})",
                HEADER.len(),
                record.len(),
                record
            )));
        }

        let count_field = &record[COUNT];
        let count = count_field.parse::<i64>().map_err(|_| {
            Self::malformed(format!("line {line}: count '{count_field}' is not an integer"))
        })?;

        let id = &record[ID];
        if id.is_empty() {
            return Err(Self::malformed(format!("line {line}: card has an empty ID")));
        }

        Ok(Card::with_details(
            id,
            optional(&record[NAME]),
            optional(&record[CARD_NUMBER]),
            optional(&record[SET_NAME]),
            optional(&record[SET_CODE]),
            count,
        ))
    }
}

/// Empty cells mean the field is absent
fn optional(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

impl CollectionAdapter for ScryGlassAdapter {
    fn format(&self) -> CollectionFormat {
        CollectionFormat::ScryGlass
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Card>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut cards = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| Error::from_csv(self.format(), e))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            trace!("ScryGlass row {line}: {:?}", record);

            cards.push(Self::parse_record(&record, line)?);
        }

        debug!("Parsed {} ScryGlass rows", cards.len());
        Ok(cards)
    }

    fn serialize(&self, collection: &Collection, writer: &mut dyn Write) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(HEADER)
            .map_err(|e| Error::from_csv_write(self.format(), e))?;

        for card in collection.iter() {
            let count = card.count().to_string();
            wtr.write_record([
                count.as_str(),
                card.name().unwrap_or_default(),
                card.set_name().unwrap_or_default(),
                card.card_number().unwrap_or_default(),
                card.set_code().unwrap_or_default(),
                card.id(),
            ])
            .map_err(|e| Error::from_csv_write(self.format(), e))?;
        }

        wtr.flush()?;
        debug!("Serialized {} ScryGlass rows", collection.len());
        Ok(())
    }
}

#[cfg(test)]
#[path = "scryglass_tests.rs"]
mod tests;
