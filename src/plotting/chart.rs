// plotting/chart.rs
// Text line chart of the energy series, one column per sample

use super::EnergySeries;
use crate::config::CHART_ID;
use crate::units;

const KINETIC_MARK: char = 'K';
const POTENTIAL_MARK: char = 'P';
const TOTAL_MARK: char = 'T';

fn row_for(value: f64, max: f64, height: usize) -> usize {
    if max <= 0.0 || height <= 1 {
        return 0;
    }
    let scaled = (value / max * (height - 1) as f64).round();
    (scaled.max(0.0) as usize).min(height - 1)
}

/// Render the most recent `width` samples as a `height`-row grid.
/// The first line always carries the chart id.
pub fn render_chart(series: &EnergySeries, width: usize, height: usize) -> String {
    let width = width.max(1);
    let height = height.max(1);

    if series.is_empty() {
        return format!("[{}] no samples yet\n", CHART_ID);
    }

    let skip = series.len().saturating_sub(width);
    let visible: Vec<_> = series.iter().skip(skip).collect();
    let max = visible
        .iter()
        .map(|s| s.total.max(s.potential).max(s.kinetic))
        .fold(0.0_f64, f64::max);

    let mut grid = vec![vec![' '; visible.len()]; height];
    for (col, sample) in visible.iter().enumerate() {
        // Later marks win where lines overlap
        for (value, mark) in [
            (sample.kinetic, KINETIC_MARK),
            (sample.potential, POTENTIAL_MARK),
            (sample.total, TOTAL_MARK),
        ] {
            let row = row_for(value, max, height);
            grid[height - 1 - row][col] = mark;
        }
    }

    let mut out = format!(
        "[{}] {} samples, max {}\n",
        CHART_ID,
        series.len(),
        units::format_quantity(max, units::JOULE)
    );
    for row in grid {
        out.push('|');
        out.extend(row);
        out.push('\n');
    }
    out.push('+');
    out.push_str(&"-".repeat(visible.len()));
    out.push('\n');
    out.push_str(&format!(
        " {} total  {} potential  {} kinetic\n",
        TOTAL_MARK, POTENTIAL_MARK, KINETIC_MARK
    ));
    out
}
