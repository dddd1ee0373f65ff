//! One conversion run: read the source, optionally merge into the existing
//! destination, write the result.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::collection::{Collection, MergeReport};
use crate::error::Result;
use crate::formats::CollectionFormat;

/// Everything a run needs, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Source collection file
    pub input: PathBuf,
    /// Destination collection file
    pub output: Option<PathBuf>,
    /// Format of `input`
    pub from: CollectionFormat,
    /// Format of `output`
    pub to: Option<CollectionFormat>,
    /// Pre-load the destination and merge into it instead of overwriting it
    pub merge: bool,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>, from: CollectionFormat) -> Self {
        Self {
            input: input.into(),
            output: None,
            from,
            to: None,
            merge: false,
        }
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn to(mut self, to: CollectionFormat) -> Self {
        self.to = Some(to);
        self
    }

    pub fn merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    /// Destination path and format, if both were given
    fn destination(&self) -> Option<(&Path, CollectionFormat)> {
        match (&self.output, self.to) {
            (Some(output), Some(to)) => Some((output.as_path(), to)),
            _ => None,
        }
    }
}

/// What a run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Distinct cards read from the source
    pub source_cards: usize,
    /// Distinct cards in the written destination
    pub destination_cards: usize,
    /// Set when a destination was produced
    pub merge: Option<MergeReport>,
    /// False for a read-only run (no `--to`/`--out`)
    pub written: bool,
}

/// Runs one conversion.
///
/// Nothing is written unless the whole source (and, with `merge`, the whole
/// destination) parsed successfully.
pub fn convert(options: &ConvertOptions) -> Result<ConvertSummary> {
    debug!("{:?}", options);

    if !options.input.exists() {
        warn!(
            "Input collection {} does not exist, treating it as empty",
            options.input.display()
        );
    }

    let mut source = Collection::new();
    source.read(options.from.adapter().as_ref(), &options.input)?;
    info!(
        "Read {} cards ({} copies) from {} collection {}",
        source.len(),
        source.total_count(),
        options.from,
        options.input.display()
    );

    let mut summary = ConvertSummary {
        source_cards: source.len(),
        ..ConvertSummary::default()
    };

    let Some((output, to)) = options.destination() else {
        if options.output.is_some() || options.to.is_some() {
            warn!("Both --to and --out are needed to write a collection, nothing written");
        }
        return Ok(summary);
    };

    let adapter = to.adapter();
    let mut destination = Collection::new();
    if options.merge {
        destination.read(adapter.as_ref(), output)?;
        info!(
            "Merging into {} existing cards from {}",
            destination.len(),
            output.display()
        );
    }

    let report = destination.merge(source);
    destination.write(adapter.as_ref(), output)?;
    info!(
        "Wrote {} cards to {} collection {} ({} added, {} incremented)",
        destination.len(),
        to,
        output.display(),
        report.added,
        report.incremented
    );

    summary.destination_cards = destination.len();
    summary.merge = Some(report);
    summary.written = true;
    Ok(summary)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
