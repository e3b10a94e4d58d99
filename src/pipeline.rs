use std::f64::consts::TAU;

use crate::models::{MappedStep, PipelineStep, StatusLevel};
use crate::normalize::{clamp, round1};

pub fn status_percent(status: f64) -> f64 {
    round1(clamp(status * 100.0, 0.0, 100.0))
}

pub fn status_level(status: f64) -> StatusLevel {
    if status >= 0.7 {
        StatusLevel::High
    } else if status >= 0.4 {
        StatusLevel::Medium
    } else {
        StatusLevel::Low
    }
}

pub fn map_steps(steps: &[PipelineStep]) -> Vec<MappedStep> {
    let count = steps.len() as f64;

    steps
        .iter()
        .map(|step| MappedStep {
            step: step.step,
            name: step.name.clone(),
            status: step.status,
            notes: step.notes.clone(),
            status_percent: status_percent(step.status),
            // position on the circular layout, step 1 at the top
            angle: step.step.saturating_sub(1) as f64 / count * TAU,
            status_level: status_level(step.status),
        })
        .collect()
}
