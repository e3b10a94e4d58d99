use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::models::{ChangeDirection, Kpi, NormalizedKpi};

#[derive(Debug, Deserialize)]
struct KpiRow {
    id: String,
    label: String,
    value: f64,
    prev: Option<f64>,
    unit: Option<String>,
    invert: Option<bool>,
}

#[derive(Debug, Serialize)]
struct NormalizedRow<'a> {
    id: &'a str,
    label: &'a str,
    value: f64,
    prev: Option<f64>,
    unit: &'a str,
    percent: f64,
    change: Option<f64>,
    change_abs: f64,
    direction: &'static str,
    positive: bool,
}

/// Reads KPI rows with the header `id,label,value,prev,unit,invert`. Blank cells are treated as absent.
pub fn read_kpis<R: Read>(reader: R) -> anyhow::Result<Vec<Kpi>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut kpis = Vec::new();

    for result in reader.deserialize::<KpiRow>() {
        let row = result?;
        kpis.push(Kpi {
            id: row.id,
            label: row.label,
            value: row.value,
            prev: row.prev,
            unit: row.unit.filter(|unit| !unit.trim().is_empty()),
            invert: row.invert,
        });
    }

    Ok(kpis)
}

pub fn write_normalized<W: Write>(writer: W, kpis: &[NormalizedKpi]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    for kpi in kpis {
        writer.serialize(NormalizedRow {
            id: &kpi.id,
            label: &kpi.label,
            value: kpi.value,
            prev: kpi.prev,
            unit: kpi.unit.as_deref().unwrap_or(""),
            percent: kpi.percent,
            change: kpi.change,
            change_abs: kpi.change_abs,
            direction: match kpi.change_direction {
                ChangeDirection::Up => "up",
                ChangeDirection::Down => "down",
                ChangeDirection::Neutral => "neutral",
            },
            positive: kpi.is_positive,
        })?;
    }

    writer.flush()?;
    Ok(())
}
