//! Command implementations for Textsift CLI.

use log::debug;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::report::{CleanPreview, CorpusReport};
use crate::resources::provision;

/// Execute a CLI command.
pub fn execute_command(args: TextsiftArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, &args),
        Command::Clean(clean_args) => clean(clean_args, &args),
        Command::Provision(provision_args) => provision_resources(provision_args, &args),
    }
}

/// Build the run configuration: file first, then command line flags.
pub fn resolve_config(args: &AnalyzeArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    args.apply(&mut config);
    config.validate()?;
    Ok(config)
}

/// Analyze a text file.
fn analyze(args: &AnalyzeArgs, cli_args: &TextsiftArgs) -> Result<()> {
    let config = resolve_config(args)?;
    debug!("effective config: {config:?}");

    let resources = config.build_resources();
    let report = CorpusReport::build(&args.input, &config, resources.as_ref())?;

    output_result(
        &format!("Analysis of {}", args.input.display()),
        &report,
        cli_args,
    )
}

/// Clean a text file and count its words.
fn clean(args: &CleanArgs, cli_args: &TextsiftArgs) -> Result<()> {
    let cleaning = args.cleaning_config();
    debug!("cleaning stages: {cleaning:?}");

    let preview = CleanPreview::build(&args.input, cleaning, args.lines, args.top)?;

    output_result(
        &format!("Cleaned {}", args.input.display()),
        &preview,
        cli_args,
    )
}

/// Write the built-in resources into a directory.
fn provision_resources(args: &ProvisionArgs, cli_args: &TextsiftArgs) -> Result<()> {
    let report = provision(&args.dir)?;

    output_result(
        &format!("Provisioning {}", args.dir.display()),
        &report,
        cli_args,
    )
}
