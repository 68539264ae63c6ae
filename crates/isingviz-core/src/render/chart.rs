use crate::core::models::series::Series;
use crate::render::config::PageStyle;
use crate::render::error::{RenderError, Result};
use crate::render::peak::Peak;
use plotters::chart::ChartContext;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::ops::Range;

/// Fraction of the data span added on each side of an axis.
const AXIS_PAD_FRACTION: f64 = 0.05;
/// Pad applied when a series spans a single value, so ranges are never empty.
const DEGENERATE_PAD: f64 = 0.5;
/// Marker positions beyond this fraction of the x-range get their label
/// placed to the left of the marker line instead of the right.
const LABEL_FLIP_FRACTION: f64 = 0.82;

/// Renders one report page to an SVG string.
pub fn render_page_svg(
    series: &Series,
    style: &PageStyle,
    annotation: Option<&Peak>,
    size: (u32, u32),
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_page(&root, series, style, annotation)?;
        root.present().map_err(to_draw_error)?;
    }
    Ok(svg)
}

fn draw_page<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    series: &Series,
    style: &PageStyle,
    annotation: Option<&Peak>,
) -> Result<()> {
    root.fill(&WHITE).map_err(to_draw_error)?;

    let x_range = padded_range(series.xs());
    let y_range = padded_range(series.ys());

    let mut chart = ChartBuilder::on(root)
        .caption(style.title, ("sans-serif", 28).into_font())
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(to_draw_error)?;

    chart
        .configure_mesh()
        .x_desc("Temperature")
        .y_desc(style.y_label)
        .draw()
        .map_err(to_draw_error)?;

    chart
        .draw_series(LineSeries::new(
            series.points().iter().copied(),
            style.color.stroke_width(2),
        ))
        .map_err(to_draw_error)?;
    chart
        .draw_series(
            series
                .points()
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, style.color.filled())),
        )
        .map_err(to_draw_error)?;

    // Overlay last, against the same ranges the chart was built with.
    if let Some(peak) = annotation {
        draw_peak_annotation(&mut chart, peak, &x_range, &y_range)?;
    }
    Ok(())
}

fn draw_peak_annotation<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    peak: &Peak,
    x_range: &Range<f64>,
    y_range: &Range<f64>,
) -> Result<()> {
    chart
        .draw_series(LineSeries::new(
            [
                (peak.temperature, y_range.start),
                (peak.temperature, y_range.end),
            ],
            BLACK.stroke_width(2),
        ))
        .map_err(to_draw_error)?;

    let x_span = x_range.end - x_range.start;
    let label_x = if peak.temperature > x_range.start + LABEL_FLIP_FRACTION * x_span {
        peak.temperature - 0.16 * x_span
    } else {
        peak.temperature + 0.02 * x_span
    };
    let label_y = y_range.end - 0.06 * (y_range.end - y_range.start);

    chart
        .draw_series(std::iter::once(Text::new(
            format!("T_c ≈ {:.2}", peak.temperature),
            (label_x, label_y),
            ("sans-serif", 18).into_font(),
        )))
        .map_err(to_draw_error)?;
    Ok(())
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    let pad = if span > 0.0 {
        AXIS_PAD_FRACTION * span
    } else {
        DEGENERATE_PAD
    };
    (min - pad)..(max + pad)
}

fn to_draw_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}
