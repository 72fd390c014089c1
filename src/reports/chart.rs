// Horizontal bar chart of per-category spending, rendered to SVG.
// Bars only; the HTML page carries the legend, so no font backend is needed.
use plotters::prelude::*;
use crate::errors::{AppError, AppResult};
use super::GroupSummary;

// Legend colors, cycled by group position
pub const PALETTE: [&str; 6] = ["#007bff", "#dc3545", "#28a745", "#ffc107", "#6f42c1", "#fd7e14"];

const PALETTE_RGB: [RGBColor; 6] = [
    RGBColor(0x00, 0x7b, 0xff),
    RGBColor(0xdc, 0x35, 0x45),
    RGBColor(0x28, 0xa7, 0x45),
    RGBColor(0xff, 0xc1, 0x07),
    RGBColor(0x6f, 0x42, 0xc1),
    RGBColor(0xfd, 0x7e, 0x14),
];

const WIDTH: u32 = 480;
const BAR_HEIGHT: u32 = 28;
const GAP: u32 = 12;

pub fn palette_color(index: usize) -> RGBColor {
    PALETTE_RGB[index % PALETTE_RGB.len()]
}

fn chart_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

pub fn category_chart_svg(groups: &[GroupSummary]) -> AppResult<String> {
    let rows = groups.len().max(1) as u32;
    let height = rows * (BAR_HEIGHT + GAP) + GAP;
    let max = groups.iter().map(|g| g.total_spent).fold(0.0, f64::max);
    let track = (WIDTH - 2 * GAP) as f64;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        for (i, group) in groups.iter().enumerate() {
            let share = if max > 0.0 { group.total_spent / max } else { 0.0 };
            let x0 = GAP as i32;
            let x1 = x0 + (track * share).round() as i32;
            let y0 = (GAP + i as u32 * (BAR_HEIGHT + GAP)) as i32;

            root.draw(&Rectangle::new(
                [(x0, y0), (x1, y0 + BAR_HEIGHT as i32)],
                palette_color(i).filled(),
            ))
            .map_err(chart_error)?;
        }

        root.present().map_err(chart_error)?;
    }

    tracing::debug!("Rendered category chart with {} bars", groups.len());
    Ok(svg)
}
