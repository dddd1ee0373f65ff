//! Collection Converter - MTG collection format conversion
//!
//! Converts card collections between ScryGlass CSV exports and Decked Builder
//! `.coll2` documents, optionally merging into an existing destination file.

pub mod atomic_write;
pub mod card;
pub mod collection;
pub mod convert;
pub mod error;
pub mod formats;

pub use card::Card;
pub use collection::{Collection, MergeReport};
pub use convert::{convert, ConvertOptions, ConvertSummary};
pub use error::{ConverterError, Error, Result};
pub use formats::{CollectionAdapter, CollectionFormat, DeckedAdapter, ScryGlassAdapter};
