use crate::angulate::angulate;
use crate::error::AdaptError;
use crate::models::{AdaptedSnapshot, Meta, Snapshot};
use crate::normalize::normalize_kpis;
use crate::pipeline::map_steps;
use crate::validate::validate;

pub fn parse_snapshot(raw: &str) -> Result<Snapshot, AdaptError> {
    Ok(serde_json::from_str(raw)?)
}

/// Builds the chart-ready record. Inputs are left untouched.
pub fn adapt(snapshot: &Snapshot) -> AdaptedSnapshot {
    let angulation = angulate(&snapshot.topic_clusters);
    let kpis = normalize_kpis(&snapshot.kpis);
    let pipeline = map_steps(&snapshot.pipeline);

    tracing::debug!(
        site = %snapshot.site,
        total_traffic = angulation.total_traffic,
        final_angle = angulation.final_angle,
        "clusters angulated"
    );

    let period = &snapshot.period;
    let meta = Meta {
        total_traffic: angulation.total_traffic,
        cluster_count: angulation.clusters.len(),
        kpi_count: kpis.len(),
        pipeline_steps: pipeline.len(),
        date_range: format!("{} → {}", period.from, period.to),
        compare_range: format!("{} → {}", period.compare_from, period.compare_to),
    };

    AdaptedSnapshot {
        site: snapshot.site.clone(),
        period: period.clone(),
        health: snapshot.totals.health_score,
        totals: snapshot.totals.clone(),
        clusters: angulation.clusters,
        kpis,
        pipeline,
        meta,
    }
}

/// Same as [`adapt`], but refuses snapshots that fail [`validate`].
pub fn adapt_strict(snapshot: &Snapshot) -> Result<AdaptedSnapshot, AdaptError> {
    let report = validate(snapshot);
    if !report.is_valid() {
        tracing::warn!(
            site = %snapshot.site,
            issues = report.errors.len(),
            "snapshot rejected by validation"
        );
        return Err(AdaptError::Invalid(report.errors));
    }
    Ok(adapt(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_snapshot;

    #[test]
    fn adapts_the_sample_snapshot() {
        let snapshot = sample_snapshot();
        let adapted = adapt(&snapshot);

        assert_eq!(adapted.site, "creovision.io");
        assert_eq!(adapted.health, 80.6);
        assert_eq!(adapted.totals, snapshot.totals);
        assert_eq!(adapted.clusters.len(), 8);
        assert_eq!(adapted.kpis.len(), 8);
        assert_eq!(adapted.pipeline.len(), 8);
        assert_eq!(adapted.meta.total_traffic, 37760.0);
        assert_eq!(adapted.meta.date_range, "2025-09-01 → 2025-09-30");
        assert_eq!(adapted.meta.compare_range, "2025-08-01 → 2025-08-31");

        let percents: Vec<f64> = adapted.kpis.iter().map(|k| k.percent).collect();
        assert_eq!(percents, [55.3, 4.8, 22.4, 86.0, 68.0, 66.0, 44.0, 62.0]);
        assert_eq!(adapted.pipeline[0].status_percent, 90.0);
    }

    #[test]
    fn adapting_leaves_the_input_untouched() {
        let snapshot = sample_snapshot();
        let before = snapshot.clone();
        let _ = adapt(&snapshot);
        assert_eq!(snapshot, before);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let adapted = adapt(&sample_snapshot());
        let value = serde_json::to_value(&adapted).expect("serialize");

        assert_eq!(value["period"]["compareFrom"], "2025-08-01");
        assert_eq!(value["totals"]["healthScore"], 80.6);
        assert_eq!(value["clusters"][0]["angleDegrees"], 93.4);
        assert_eq!(value["kpis"][2]["changeDirection"], "down");
        assert_eq!(value["kpis"][2]["isPositive"], true);
        assert_eq!(value["pipeline"][7]["statusLevel"], "low");
        assert_eq!(value["meta"]["clusterCount"], 8);
    }

    #[test]
    fn null_change_is_serialized_explicitly() {
        let mut snapshot = sample_snapshot();
        snapshot.kpis[0].prev = None;
        let value = serde_json::to_value(adapt(&snapshot)).expect("serialize");

        assert!(value["kpis"][0]["change"].is_null());
        assert!(value["kpis"][0].get("prev").is_none());
        assert_eq!(value["kpis"][0]["changeAbs"], 0.0);
    }

    #[test]
    fn missing_kpi_value_fails_the_whole_parse() {
        let mut value = serde_json::to_value(sample_snapshot()).expect("serialize");
        value["kpis"][3]
            .as_object_mut()
            .expect("kpi object")
            .remove("value");

        let err = parse_snapshot(&value.to_string()).unwrap_err();
        assert!(matches!(err, AdaptError::Malformed(_)));
    }

    #[test]
    fn parses_snapshot_with_optional_fields_absent() {
        let raw = r#"{
            "site": "example.com",
            "period": {"from": "2025-09-01", "to": "2025-09-30", "compareFrom": "2025-08-01", "compareTo": "2025-08-31"},
            "totals": {"sessions": 10, "users": 8, "conversions": 1, "revenue": 0, "pagesIndexed": 3, "healthScore": 50},
            "kpis": [{"id": "ctr", "label": "CTR", "value": 4.8}],
            "topicClusters": [{"name": "Only", "traffic": 0, "conversionRate": 0, "contentScore": 0}],
            "pipeline": [{"step": 1, "name": "Research", "status": 1.0, "notes": ""}]
        }"#;

        let snapshot = parse_snapshot(raw).expect("parse");
        let adapted = adapt(&snapshot);
        assert_eq!(adapted.kpis[0].percent, 24.0);
        assert_eq!(adapted.kpis[0].change, None);
        assert_eq!(adapted.clusters[0].angle_end, 0.0);
        assert_eq!(adapted.pipeline[0].status_percent, 100.0);
    }

    #[test]
    fn strict_mode_rejects_invalid_snapshots() {
        let mut snapshot = sample_snapshot();
        snapshot.kpis.truncate(2);
        match adapt_strict(&snapshot) {
            Err(AdaptError::Invalid(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(adapt_strict(&sample_snapshot()).is_ok());
    }
}
