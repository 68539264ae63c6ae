use crate::core::models::sample::Sample;
use crate::core::models::series::{Observable, Series};
use crate::render::chart;
use crate::render::config::{PageStyle, RenderConfig};
use crate::render::document::PdfDocument;
use crate::render::error::{RenderError, Result};
use crate::render::peak::{self, Peak};
use crate::render::progress::{Progress, ProgressReporter};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Result of a completed report run.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    /// The detected specific-heat maximum: the critical-temperature estimate.
    pub peak: Peak,
    /// Number of pages written, one per observable.
    pub page_count: usize,
    /// Where the document was written.
    pub output_path: PathBuf,
}

/// Renders the full report for `samples` into a multi-page PDF at
/// `output_path`.
///
/// Pages are produced in the fixed order magnetization, energy, specific
/// heat; the specific-heat page carries the critical-point annotation. The
/// document is written once, after all pages rendered successfully.
#[instrument(skip_all, name = "report_workflow")]
pub fn run(
    samples: &[Sample],
    config: &RenderConfig,
    output_path: &Path,
    reporter: &ProgressReporter,
) -> Result<ReportSummary> {
    let pages: Vec<(Observable, Series)> = Observable::ALL
        .iter()
        .map(|&obs| (obs, Series::project(samples, obs)))
        .collect();

    // The loader guarantees N >= 1; re-checked here so a caller bypassing it
    // cannot produce a report with empty charts.
    for (observable, series) in &pages {
        if series.is_empty() {
            return Err(RenderError::EmptySeries {
                label: observable.y_label(),
            });
        }
    }

    let heat = &pages[Observable::ALL.len() - 1].1;
    let peak = peak::find_peak(heat).ok_or(RenderError::EmptySeries {
        label: Observable::SpecificHeat.y_label(),
    })?;
    info!(
        "Specific-heat maximum {:.4} at T = {:.4} (sample {}).",
        peak.value, peak.temperature, peak.index
    );

    reporter.report(Progress::PhaseStart {
        name: "Rendering report",
        total_pages: pages.len(),
    });

    let mut document = PdfDocument::new(config.width, config.height);
    for (index, (observable, series)) in pages.iter().enumerate() {
        reporter.report(Progress::PageStart {
            number: index + 1,
            total: pages.len(),
            title: observable.title(),
        });

        let style = PageStyle {
            title: observable.title(),
            y_label: observable.y_label(),
            color: config.colors[index],
        };
        let annotation =
            (*observable == Observable::SpecificHeat).then_some(&peak);
        let svg = chart::render_page_svg(
            series,
            &style,
            annotation,
            (config.width, config.height),
        )?;
        document.push_page(svg);

        reporter.report(Progress::PageFinish { number: index + 1 });
    }

    document.write_to_file(output_path)?;
    reporter.report(Progress::PhaseFinish);

    info!(
        "Report written to {:?}: {} pages, T_c ≈ {:.2}.",
        output_path,
        document.page_count(),
        peak.temperature
    );
    Ok(ReportSummary {
        peak,
        page_count: document.page_count(),
        output_path: output_path.to_path_buf(),
    })
}
