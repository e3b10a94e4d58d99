use chrono::NaiveDate;

use crate::angulate::total_traffic;
use crate::models::Snapshot;

const MIN_KPIS: usize = 6;
const MAX_KPIS: usize = 10;
const MIN_CLUSTERS: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// One human-readable message per failed check, in check order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Data-quality checks for generated snapshots. Never consulted by the plain transform.
pub fn validate(snapshot: &Snapshot) -> ValidationReport {
    let mut errors = Vec::new();

    let kpi_count = snapshot.kpis.len();
    if !(MIN_KPIS..=MAX_KPIS).contains(&kpi_count) {
        errors.push(format!(
            "kpis must hold between {MIN_KPIS} and {MAX_KPIS} entries, found {kpi_count}"
        ));
    }

    if snapshot.topic_clusters.len() < MIN_CLUSTERS {
        errors.push(format!(
            "topicClusters must hold at least {MIN_CLUSTERS} entries, found {}",
            snapshot.topic_clusters.len()
        ));
    }

    if total_traffic(&snapshot.topic_clusters) <= 0.0 {
        errors.push("sum of topicClusters traffic must be greater than 0".to_string());
    }

    for (idx, step) in snapshot.pipeline.iter().enumerate() {
        if !(0.0..=1.0).contains(&step.status) {
            errors.push(format!(
                "pipeline[{idx}].status must be between 0 and 1, found {}",
                step.status
            ));
        }
    }

    let health = snapshot.totals.health_score;
    if !(0.0..=100.0).contains(&health) {
        errors.push(format!(
            "totals.healthScore must be between 0 and 100, found {health}"
        ));
    }

    let period = &snapshot.period;
    check_range(&mut errors, ("from", &period.from), ("to", &period.to));
    check_range(
        &mut errors,
        ("compareFrom", &period.compare_from),
        ("compareTo", &period.compare_to),
    );

    ValidationReport { errors }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn check_range(errors: &mut Vec<String>, start: (&str, &str), end: (&str, &str)) {
    let parsed_start = parse_date(start.1);
    let parsed_end = parse_date(end.1);

    for ((field, raw), parsed) in [(start, parsed_start), (end, parsed_end)] {
        if parsed.is_none() {
            errors.push(format!("period.{field} is not a YYYY-MM-DD date: {raw:?}"));
        }
    }

    if let (Some(first), Some(last)) = (parsed_start, parsed_end) {
        if first > last {
            errors.push(format!("period.{} must not be after period.{}", start.0, end.0));
        }
    }
}
