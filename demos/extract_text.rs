//! Extract Text Demo
//!
//! This demo stages a bundled sample image and trained-model data file from
//! an asset directory into the application's private data directory, then
//! runs the Tesseract engine against the staged image and prints the
//! extracted text.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example extract_text --features tesseract -- [OPTIONS] --assets <DIR>
//! ```
//!
//! # Arguments
//!
//! * `-a, --assets` - Directory holding the bundled assets
//!   (`test.jpg` and `tessdata/eng.traineddata`)
//! * `--data-root` - Staging root; defaults to the per-user data directory
//! * `-l, --language` - Language code for the engine
//! * `--no-verify` - Skip the staged-image decode preflight
//!
//! # Example
//!
//! ```bash
//! cargo run --example extract_text --features tesseract -- -a ./assets
//! ```

use clap::Parser;
use ocr_stage::engine::TesseractEngine;
use ocr_stage::prelude::*;
use ocr_stage::utils::init_tracing;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for the extract_text demo
#[derive(Parser)]
#[command(name = "extract_text")]
#[command(about = "Stages bundled OCR assets and extracts text from the sample image")]
struct Args {
    /// Directory holding the bundled assets
    #[arg(short, long)]
    assets: PathBuf,

    /// Staging root; defaults to the per-user data directory
    #[arg(long)]
    data_root: Option<PathBuf>,

    /// Language code for the engine
    #[arg(short, long, default_value = "eng")]
    language: String,

    /// Skip the staged-image decode preflight
    #[arg(long)]
    no_verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let data_root = args.data_root.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ocr-stage")
    });

    let assets = DirAssetSource::new(&args.assets);
    let stage = OcrStage::builder()
        .data_root(&data_root)
        .language(args.language.as_str())
        .verify_image(!args.no_verify)
        .build()?;

    let mut engine = TesseractEngine::new(&data_root, args.language.as_str());
    let outcome = stage.run(&assets, &mut engine)?;

    info!("{}", outcome.report);
    println!("{}", outcome.text);

    Ok(())
}
