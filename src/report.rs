use std::fmt::Write;

use crate::models::{AdaptedSnapshot, AngledCluster, ChangeDirection, Period};
use crate::validate::parse_date;

/// Formats a whole number with `.` thousands separators, e.g. `27.650`.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Formats an amount as whole Chilean pesos, e.g. `$17.450`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Formats a percentage with a decimal comma, e.g. `26,0%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut output = String::new();
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        output.push('-');
    }
    output.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        output.push(',');
        output.push_str(fraction);
    }
    output.push('%');
    output
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Inclusive number of days covered by `from..=to`, when both dates parse.
pub fn period_days(from: &str, to: &str) -> Option<i64> {
    let start = parse_date(from)?;
    let end = parse_date(to)?;
    Some((end - start).num_days() + 1)
}

fn describe_range(from: &str, to: &str) -> String {
    match period_days(from, to) {
        Some(days) => format!("{from} to {to} ({days} days)"),
        None => format!("{from} to {to}"),
    }
}

fn describe_change(change: Option<f64>, direction: ChangeDirection, positive: bool) -> String {
    let Some(change) = change else {
        return "no comparison".to_string();
    };
    let arrow = match direction {
        ChangeDirection::Up => "▲",
        ChangeDirection::Down => "▼",
        ChangeDirection::Neutral => "=",
    };
    let sign = if change > 0.0 { "+" } else { "" };
    let verdict = match (direction, positive) {
        (ChangeDirection::Neutral, _) => "flat",
        (_, true) => "improving",
        (_, false) => "worsening",
    };
    format!("{arrow} {sign}{} ({verdict})", format_percent(change, 1))
}

fn largest_clusters(clusters: &[AngledCluster], limit: usize) -> Vec<&AngledCluster> {
    let mut ranked: Vec<&AngledCluster> = clusters.iter().collect();
    ranked.sort_by(|a, b| b.traffic.partial_cmp(&a.traffic).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

pub fn build_report(adapted: &AdaptedSnapshot, limit: usize) -> String {
    let mut output = String::new();
    let Period {
        from,
        to,
        compare_from,
        compare_to,
    } = &adapted.period;

    let _ = writeln!(output, "# SEO Snapshot Report: {}", adapted.site);
    let _ = writeln!(output, "Period {}", describe_range(from, to));
    let _ = writeln!(output, "Compared with {}", describe_range(compare_from, compare_to));
    let _ = writeln!(output);
    let _ = writeln!(output, "Health score: {}", format_percent(adapted.health, 1));
    let _ = writeln!(
        output,
        "Sessions {} · Users {} · Conversions {} · Revenue {} · Indexed pages {}",
        format_number(adapted.totals.sessions),
        format_number(adapted.totals.users),
        format_number(adapted.totals.conversions),
        format_currency(adapted.totals.revenue),
        format_number(adapted.totals.pages_indexed)
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## KPI Scores");

    if adapted.kpis.is_empty() {
        let _ = writeln!(output, "No KPIs reported for this period.");
    } else {
        for kpi in adapted.kpis.iter() {
            let _ = writeln!(
                output,
                "- {}: score {} ({})",
                kpi.label,
                format_percent(kpi.percent, 1),
                describe_change(kpi.change, kpi.change_direction, kpi.is_positive)
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Topic Clusters");

    if adapted.meta.total_traffic <= 0.0 {
        let _ = writeln!(output, "No cluster traffic recorded for this period.");
    } else {
        for cluster in largest_clusters(&adapted.clusters, limit) {
            let _ = writeln!(
                output,
                "- {}: {} visits, {} of traffic, conversion {}, content score {}",
                cluster.name,
                format_number(cluster.traffic),
                format_percent(cluster.share, 1),
                format_percent(cluster.conversion_rate, 1),
                format_number(cluster.content_score)
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Pipeline Progress");

    if adapted.pipeline.is_empty() {
        let _ = writeln!(output, "No pipeline steps tracked.");
    } else {
        for step in adapted.pipeline.iter() {
            let _ = writeln!(
                output,
                "- {}. {}: {} [{:?}] {}",
                step.step,
                step.name,
                format_percent(step.status_percent, 0),
                step.status_level,
                step.notes
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::adapt;
    use crate::sample::sample_snapshot;

    #[test]
    fn numbers_use_dot_grouping() {
        assert_eq!(format_number(27650.0), "27.650");
        assert_eq!(format_number(1234567.4), "1.234.567");
        assert_eq!(format_number(412.0), "412");
        assert_eq!(format_number(-2540.0), "-2.540");
        assert_eq!(format_currency(17450.25), "$17.450");
        assert_eq!(format_currency(45780000.0), "$45.780.000");
        assert_eq!(format_currency(-999.6), "-$1.000");
    }

    #[test]
    fn percents_use_decimal_comma() {
        assert_eq!(format_percent(26.0, 1), "26,0%");
        assert_eq!(format_percent(-15.5, 1), "-15,5%");
        assert_eq!(format_percent(1234.56, 1), "1.234,6%");
        assert_eq!(format_percent(90.0, 0), "90%");
        assert_eq!(format_percent(-0.01, 1), "0,0%");
    }

    #[test]
    fn counts_period_days_inclusively() {
        assert_eq!(period_days("2025-09-01", "2025-09-30"), Some(30));
        assert_eq!(period_days("2025-09-01", "soon"), None);
    }

    #[test]
    fn report_covers_every_section() {
        let report = build_report(&adapt(&sample_snapshot()), 3);

        assert!(report.starts_with("# SEO Snapshot Report: creovision.io\n"));
        assert!(report.contains("Period 2025-09-01 to 2025-09-30 (30 days)"));
        assert!(report.contains("Health score: 80,6%"));
        assert!(report.contains("Conversions 1.210 · Revenue $17.450 · Indexed pages 412"));
        assert!(report.contains("- Organic traffic: score 55,3% (▲ +10,1% (improving))"));
        assert!(report.contains("- Average position: score 22,4% (▼ -15,5% (improving))"));
        assert!(report.contains("- AI for small business: 9.800 visits, 26,0% of traffic"));
        assert!(!report.contains("Branding:"));
        assert!(report.contains("- 8. Iteration: 20% [Low] Backlog prioritized"));
    }

    #[test]
    fn report_handles_zero_traffic() {
        let mut snapshot = sample_snapshot();
        for cluster in &mut snapshot.topic_clusters {
            cluster.traffic = 0.0;
        }
        let report = build_report(&adapt(&snapshot), 8);
        assert!(report.contains("No cluster traffic recorded for this period."));
    }
}
