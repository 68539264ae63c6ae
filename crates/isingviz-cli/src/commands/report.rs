use crate::cli::Cli;
use crate::config::PartialReportConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use isingviz::core::io::dat::DatFile;
use isingviz::render::progress::ProgressReporter;
use isingviz::workflows;
use tracing::info;

pub fn run(cli: &Cli) -> Result<()> {
    let partial_config = match &cli.config {
        Some(path) => PartialReportConfig::from_file(path)?,
        None => PartialReportConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let app_config = partial_config.merge_with_cli(cli)?;

    info!("Loading samples from {:?}", &cli.input);
    let samples = DatFile::load(&cli.input).map_err(|e| CliError::Load {
        path: cli.input.clone(),
        source: e,
    })?;
    info!("Loaded {} temperature samples.", samples.len());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.callback());

    info!("Invoking the report workflow...");
    let summary = workflows::report::run(
        &samples,
        &app_config.render,
        &app_config.output_path,
        &reporter,
    )?;

    println!(
        "Critical temperature of maximum specific heat: T_c ≈ {:.2} (C = {:.4})",
        summary.peak.temperature, summary.peak.value
    );
    println!("Plots saved to {}", summary.output_path.display());

    Ok(())
}
