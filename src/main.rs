//! Collection Converter - MTG collection format conversion
//!
//! Takes a ScryGlass CSV export or a Decked Builder collection and writes it
//! in the other format. Primarily used for going from ScryGlass to Decked.

use clap::Parser;
use collection_converter::{convert, CollectionFormat, ConvertOptions, Result};
use std::path::PathBuf;

/// Convert MTG card collections between ScryGlass and Decked Builder formats
#[derive(Parser, Debug)]
#[command(name = "collection_converter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source collection file
    #[arg(short = 'i', long = "in")]
    input: PathBuf,

    /// Destination collection file
    #[arg(short = 'o', long = "out")]
    output: Option<PathBuf>,

    /// A valid collection type to convert from. Valid types: decked, scryglass
    #[arg(short, long)]
    from: String,

    /// A valid collection type to convert to. Valid types: decked, scryglass
    #[arg(short, long)]
    to: Option<String>,

    /// Merge output with destination collection
    #[arg(short, long, default_value_t = false)]
    merge: bool,

    /// Verbosity (-v, -vv, etc)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log filter used when RUST_LOG is not set
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Resolves format names before any file is touched
fn options_from_args(args: &Args) -> Result<ConvertOptions> {
    let from: CollectionFormat = args.from.parse()?;
    let to = args
        .to
        .as_deref()
        .map(str::parse::<CollectionFormat>)
        .transpose()?;

    Ok(ConvertOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        from,
        to,
        merge: args.merge,
    })
}

fn main() {
    let args = Args::parse();

    // RUST_LOG takes precedence over -v
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_level(args.verbose)),
    )
    .init();
    log::debug!("{:?}", args);

    let result = options_from_args(&args).and_then(|options| convert(&options));

    match result {
        Ok(summary) => {
            if !summary.written {
                log::info!(
                    "Read {} cards, no destination given so nothing was written",
                    summary.source_cards
                );
            }
        }
        Err(e) => {
            log::error!("Conversion failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
