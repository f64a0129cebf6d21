use super::*;
use super::export::{export_series, render_series};

fn sample(t: f64, potential: f64, kinetic: f64) -> EnergySample {
    EnergySample {
        timestamp: t,
        potential,
        kinetic,
        total: potential + kinetic,
    }
}

#[test]
fn series_drops_oldest_past_capacity() {
    let mut series = EnergySeries::new(3);
    for i in 0..5 {
        series.push(sample(i as f64, i as f64, 0.0));
    }
    assert_eq!(series.len(), 3);
    let times: Vec<f64> = series.iter().map(|s| s.timestamp).collect();
    assert_eq!(times, vec![2.0, 3.0, 4.0]);
    assert_eq!(series.latest().unwrap().timestamp, 4.0);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut series = EnergySeries::new(0);
    series.push(sample(0.0, 1.0, 1.0));
    series.push(sample(1.0, 2.0, 2.0));
    assert_eq!(series.capacity(), 1);
    assert_eq!(series.len(), 1);
    assert_eq!(series.latest().unwrap().total, 4.0);
}

#[test]
fn csv_has_header_and_one_row_per_sample() {
    let mut series = EnergySeries::new(10);
    series.push(sample(0.0, 490.5, 0.0));
    series.push(sample(0.5, 0.0, 8.0));
    let csv = render_series(&series, ExportFormat::CSV).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "time_s,potential_j,kinetic_j,total_j");
    assert_eq!(lines[1], "0,490.5,0,490.5");
    assert_eq!(lines[2], "0.5,0,8,8");
    assert_eq!(lines.len(), 3);

    let tsv = render_series(&series, ExportFormat::TSV).unwrap();
    assert!(tsv.starts_with("time_s\tpotential_j"));
}

#[test]
fn json_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.json");
    let mut series = EnergySeries::new(10);
    series.push(sample(1.0, 1.62, 0.0));
    export_series(&series, &path, ExportFormat::JSON).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<EnergySample> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, series.samples());
}

#[test]
fn export_format_parses_case_insensitively() {
    assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::CSV));
    assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::JSON));
    assert!("xml".parse::<ExportFormat>().is_err());
}
