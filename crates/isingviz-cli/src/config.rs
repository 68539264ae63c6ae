use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::parser;
use isingviz::render::config::RenderConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed default name for the output document.
const DEFAULT_OUTPUT_NAME: &str = "ising.pdf";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialReportSection {
    output: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialStyleSection {
    colors: Option<Vec<String>>,
    width: Option<u32>,
    height: Option<u32>,
}

/// The optional TOML configuration file, all fields individually omittable.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialReportConfig {
    report: Option<PartialReportSection>,
    style: Option<PartialStyleSection>,
}

/// The fully resolved configuration the command runs with.
pub struct AppConfig {
    pub output_path: PathBuf,
    pub render: RenderConfig,
}

impl PartialReportConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves the effective configuration: CLI flags win over file values,
    /// which win over built-in defaults.
    pub fn merge_with_cli(mut self, args: &Cli) -> Result<AppConfig> {
        let report = self.report.take().unwrap_or_default();
        let style = self.style.take().unwrap_or_default();

        let output_path = args
            .output
            .clone()
            .or(report.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_NAME));

        let colors = if !args.colors.is_empty() {
            Some(parser::parse_color_list(&args.colors).map_err(CliError::Argument)?)
        } else if let Some(list) = &style.colors {
            Some(parser::parse_color_list(list).map_err(CliError::Config)?)
        } else {
            None
        };

        let defaults = RenderConfig::default();
        let render = RenderConfig {
            width: args.width.or(style.width).unwrap_or(defaults.width),
            height: args.height.or(style.height).unwrap_or(defaults.height),
            colors: colors.unwrap_or(defaults.colors),
        };
        if render.width == 0 || render.height == 0 {
            return Err(CliError::Config(
                "Page dimensions must be non-zero.".to_string(),
            ));
        }

        Ok(AppConfig {
            output_path,
            render,
        })
    }
}
