//! CLI logic for the Annals network layout tool.
//!
//! This module contains the core CLI logic: load the configuration, lay out
//! the input dataset and write the resulting JSON document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use annals::{AnnalsError, NetworkBuilder};

/// Run the Annals CLI application
///
/// This function processes the input dataset through the Annals pipeline
/// and writes the resulting layout to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `AnnalsError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Dataset parsing errors
/// - Adjacency and layout errors
pub fn run(args: &Args) -> Result<(), AnnalsError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing dataset"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(seed) = args.seed {
        info!(seed; "Overriding placement seed");
        app_config.layout_mut().set_seed(seed);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = NetworkBuilder::new(app_config);
    let dataset = builder.parse(&source)?;
    let json = builder.render_json(&dataset)?;

    fs::write(&args.output, json)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}
