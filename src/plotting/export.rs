// plotting/export.rs
// Data export for the energy series

use std::path::Path;

use super::{EnergySample, EnergySeries, ExportFormat};
use crate::io::{write_atomically, ExportError};

const HEADER: [&str; 4] = ["time_s", "potential_j", "kinetic_j", "total_j"];

fn export_delimited(samples: &[EnergySample], sep: &str) -> String {
    let mut content = String::new();
    content.push_str(&HEADER.join(sep));
    content.push('\n');
    for s in samples {
        content.push_str(&format!(
            "{}{sep}{}{sep}{}{sep}{}\n",
            s.timestamp,
            s.potential,
            s.kinetic,
            s.total,
            sep = sep
        ));
    }
    content
}

pub fn render_series(series: &EnergySeries, format: ExportFormat) -> Result<String, ExportError> {
    let samples = series.samples();
    let content = match format {
        ExportFormat::CSV => export_delimited(&samples, ","),
        ExportFormat::TSV => export_delimited(&samples, "\t"),
        ExportFormat::JSON => serde_json::to_string_pretty(&samples)?,
    };
    Ok(content)
}

/// Write the retained samples to `path`. Full precision is kept, unlike the display.
pub fn export_series<P: AsRef<Path>>(
    series: &EnergySeries,
    path: P,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let content = render_series(series, format)?;
    write_atomically(path, content.as_bytes())?;
    Ok(())
}
