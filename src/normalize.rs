use crate::models::{ChangeDirection, Kpi, NormalizedKpi};

const CTR_MULTIPLIER: f64 = 5.0;
const WORST_TRACKED_POSITION: f64 = 60.0;
const BACKLINKS_CEILING: f64 = 200.0;
const TRAFFIC_CEILING: f64 = 50_000.0;

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Rounds to one decimal place, half away from zero. Negative zero comes back as `0.0`.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0 + 0.0
}

pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// Per-metric scale for KPIs that do not declare a percentage unit.
pub fn scale_smart(id: &str, value: f64) -> f64 {
    match id {
        "ctr" => (value * CTR_MULTIPLIER).min(100.0),
        // rank 1 is best, anything at or past the worst tracked position scores zero
        "avgPos" => 100.0 * (1.0 - clamp((value - 1.0) / (WORST_TRACKED_POSITION - 1.0), 0.0, 1.0)),
        "backlinks" => clamp(value / BACKLINKS_CEILING * 100.0, 0.0, 100.0),
        "traffic" => clamp(value / TRAFFIC_CEILING * 100.0, 0.0, 100.0),
        _ => clamp(value, 0.0, 100.0),
    }
}

pub fn is_percent_unit(unit: Option<&str>) -> bool {
    matches!(unit, Some("%") | Some("/100"))
}

pub fn normalize_kpi(kpi: &Kpi) -> NormalizedKpi {
    let inverted = kpi.invert.unwrap_or(false);

    let mut percent = if is_percent_unit(kpi.unit.as_deref()) {
        kpi.value
    } else {
        scale_smart(&kpi.id, kpi.value)
    };

    if inverted {
        percent = 100.0 - percent;
    }

    let change = kpi
        .prev
        .and_then(|prev| percent_change(kpi.value, prev))
        .map(round1);

    NormalizedKpi {
        id: kpi.id.clone(),
        label: kpi.label.clone(),
        value: kpi.value,
        prev: kpi.prev,
        unit: kpi.unit.clone(),
        invert: kpi.invert,
        percent: round1(clamp(percent, 0.0, 100.0)),
        change,
        change_abs: round1(kpi.value - kpi.prev.unwrap_or(kpi.value)),
        change_direction: change_direction(change),
        is_positive: is_positive(change, inverted),
    }
}

pub fn normalize_kpis(kpis: &[Kpi]) -> Vec<NormalizedKpi> {
    kpis.iter().map(normalize_kpi).collect()
}

fn change_direction(change: Option<f64>) -> ChangeDirection {
    match change {
        Some(value) if value > 0.0 => ChangeDirection::Up,
        Some(value) if value < 0.0 => ChangeDirection::Down,
        _ => ChangeDirection::Neutral,
    }
}

fn is_positive(change: Option<f64>, inverted: bool) -> bool {
    match change {
        Some(value) if inverted => value < 0.0,
        Some(value) => value > 0.0,
        None => false,
    }
}
