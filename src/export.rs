use std::{fs, path::Path};

use chrono::{DateTime, Local};
use itertools::Itertools;

use crate::{estimator::ChargeEstimate, prelude::*};

pub const TIMESTAMP_LABEL: &str = "Дата и время";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const CSV_HEADER: &str = "Параметр,Значение";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("txt") => Ok(Self::Text),
            Some("csv") => Ok(Self::Csv),
            _ => bail!("`{}` is neither a `.txt` nor a `.csv` destination", path.display()),
        }
    }
}

/// The thirteen result fields with their export labels, in export order.
/// Labels and order are part of the file format contract.
#[must_use]
pub fn labelled_values(estimate: &ChargeEstimate) -> [(&'static str, f64); 13] {
    [
        ("Общая энергоёмкость АКБ", estimate.total_energy.0),
        ("Энергия для заряда (DoD)", estimate.needed_energy.0),
        ("Мощность заряда (CC)", estimate.cc.charge_power.0),
        ("Потребление от генератора (CC)", estimate.cc.generator_draw.0),
        ("Время заряда (CC)", estimate.cc.time.0),
        ("Расход топлива (CC)", estimate.cc.fuel.0),
        ("Мощность заряда (CV)", estimate.cv.charge_power.0),
        ("Потребление от генератора (CV)", estimate.cv.generator_draw.0),
        ("Время заряда (CV)", estimate.cv.time.0),
        ("Расход топлива (CV)", estimate.cv.fuel.0),
        ("Общее время заряда", estimate.total_time.0),
        ("Общий расход топлива", estimate.total_fuel.0),
        ("Время автономной работы", estimate.autonomy_time.0),
    ]
}

#[must_use]
pub fn render_text(estimate: &ChargeEstimate, timestamp: DateTime<Local>) -> String {
    let header = format!("{TIMESTAMP_LABEL}: {}", timestamp.format(TIMESTAMP_FORMAT));
    let lines = labelled_values(estimate)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value:.2}"));
    format!("{}\n", std::iter::once(header).chain(lines).join("\n"))
}

#[must_use]
pub fn render_csv(estimate: &ChargeEstimate, timestamp: DateTime<Local>) -> String {
    let timestamp_row = format!("{TIMESTAMP_LABEL},{}", timestamp.format(TIMESTAMP_FORMAT));
    let rows = labelled_values(estimate)
        .into_iter()
        .map(|(label, value)| format!("{label},{value:.2}"));
    format!(
        "{}\n",
        std::iter::once(CSV_HEADER.to_string())
            .chain(std::iter::once(timestamp_row))
            .chain(rows)
            .join("\n")
    )
}

/// Serialize the most recent estimate to the destination path.
///
/// With no estimate computed yet there is nothing to write: the attempt is
/// reported and skipped. Returns whether a file was written.
pub fn export(
    estimate: Option<&ChargeEstimate>,
    path: &Path,
    timestamp: DateTime<Local>,
) -> Result<bool> {
    let Some(estimate) = estimate else {
        warn!("nothing to save yet, run the calculation first");
        return Ok(false);
    };
    let contents = match ExportFormat::from_path(path)? {
        ExportFormat::Text => render_text(estimate, timestamp),
        ExportFormat::Csv => render_csv(estimate, timestamp),
    };
    fs::write(path, contents)
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    info!(path = %path.display(), "saved");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    use super::*;
    use crate::estimator::{ChargeInputs, estimate};

    fn fixtures() -> (ChargeEstimate, DateTime<Local>) {
        let estimate = estimate(&ChargeInputs::default()).unwrap();
        let timestamp = Local.with_ymd_and_hms(2026, 8, 29, 12, 30, 0).unwrap();
        (estimate, timestamp)
    }

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.txt")).unwrap(),
            ExportFormat::Text,
        );
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")).unwrap(), ExportFormat::Csv);
        assert!(ExportFormat::from_path(Path::new("out.xlsx")).is_err());
        assert!(ExportFormat::from_path(Path::new("out")).is_err());
    }

    #[test]
    fn text_starts_with_the_timestamp_line() {
        let (estimate, timestamp) = fixtures();
        let text = render_text(&estimate, timestamp);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Дата и время: 2026-08-29 12:30:00"));
        assert_eq!(lines.next(), Some("Общая энергоёмкость АКБ: 6240.00"));
        assert_eq!(lines.count(), 12);
    }

    #[test]
    fn text_renders_two_decimals() {
        let (estimate, timestamp) = fixtures();
        let text = render_text(&estimate, timestamp);
        assert!(text.contains("Время заряда (CC): 2.98\n"));
        assert!(text.contains("Время автономной работы: 31.20\n"));
    }

    #[test]
    fn csv_round_trips_the_labelled_values() {
        let (estimate, timestamp) = fixtures();
        let csv = render_csv(&estimate, timestamp);

        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.next(), Some("Дата и время,2026-08-29 12:30:00"));

        let parsed: Vec<(&str, f64)> = lines
            .map(|line| {
                let (label, value) = line.split_once(',').unwrap();
                (label, value.parse().unwrap())
            })
            .collect();
        let expected = labelled_values(&estimate);
        assert_eq!(parsed.len(), expected.len());
        for ((label, value), (expected_label, expected_value)) in parsed.into_iter().zip(expected)
        {
            assert_eq!(label, expected_label);
            assert_abs_diff_eq!(value, expected_value, epsilon = 0.005);
        }
    }

    #[test]
    fn no_estimate_means_no_file() {
        let (_, timestamp) = fixtures();
        let path = PathBuf::from("should-not-exist.txt");
        assert!(!export(None, &path, timestamp).unwrap());
        assert!(!path.exists());
    }
}
