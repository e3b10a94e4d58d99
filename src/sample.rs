use crate::models::{Kpi, Period, PipelineStep, Snapshot, TopicCluster, Totals};

/// Reference snapshot shaped like the generator's output, used by `sample` and in tests.
pub fn sample_snapshot() -> Snapshot {
    let kpis = vec![
        kpi("traffic", "Organic traffic", 27650.0, 25110.0, None, false),
        kpi("ctr", "CTR", 4.8, 4.2, Some("%"), false),
        kpi("avgPos", "Average position", 14.2, 16.8, None, true),
        kpi("pagesSpeed", "PageSpeed", 86.0, 78.0, Some("/100"), false),
        kpi("coreWebVitals", "CWV passing", 68.0, 61.0, Some("%"), false),
        kpi("backlinks", "New backlinks", 132.0, 97.0, None, false),
        kpi("domainRating", "Domain rating", 44.0, 41.0, Some("/100"), false),
        kpi("bounce", "Bounce rate", 38.0, 41.0, Some("%"), true),
    ];

    let topic_clusters = [
        ("AI for small business", 9800.0, 3.2, 72.0),
        ("SEO automation", 6400.0, 2.6, 66.0),
        ("Web design + Core Web Vitals", 5200.0, 4.1, 79.0),
        ("Local marketing", 4270.0, 2.1, 58.0),
        ("E-commerce", 3990.0, 1.8, 55.0),
        ("Analytics", 3200.0, 3.6, 70.0),
        ("Long-form content", 2800.0, 2.9, 63.0),
        ("Branding", 2100.0, 1.2, 51.0),
    ]
    .into_iter()
    .map(|(name, traffic, conversion_rate, content_score)| TopicCluster {
        name: name.to_string(),
        traffic,
        conversion_rate,
        content_score,
    })
    .collect();

    let pipeline = [
        (1, "Research", 0.9, "Keywords prioritized"),
        (2, "Clustering", 0.7, "8 clusters ready"),
        (3, "Technical audit", 0.6, "CWV in progress"),
        (4, "Content", 0.5, "5 articles queued"),
        (5, "On-page", 0.4, "Meta + schema"),
        (6, "Off-page", 0.3, "Prospecting"),
        (7, "Monitoring", 0.8, "Dashboards live"),
        (8, "Iteration", 0.2, "Backlog prioritized"),
    ]
    .into_iter()
    .map(|(step, name, status, notes)| PipelineStep {
        step,
        name: name.to_string(),
        status,
        notes: notes.to_string(),
    })
    .collect();

    Snapshot {
        site: "creovision.io".to_string(),
        period: Period {
            from: "2025-09-01".to_string(),
            to: "2025-09-30".to_string(),
            compare_from: "2025-08-01".to_string(),
            compare_to: "2025-08-31".to_string(),
        },
        totals: Totals {
            sessions: 42310.0,
            users: 35210.0,
            conversions: 1210.0,
            revenue: 17450.25,
            pages_indexed: 412.0,
            health_score: 80.6,
        },
        kpis,
        topic_clusters,
        pipeline,
    }
}

fn kpi(id: &str, label: &str, value: f64, prev: f64, unit: Option<&str>, invert: bool) -> Kpi {
    Kpi {
        id: id.to_string(),
        label: label.to_string(),
        value,
        prev: Some(prev),
        unit: unit.map(str::to_string),
        invert: invert.then_some(true),
    }
}
