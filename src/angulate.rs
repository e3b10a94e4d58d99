use std::f64::consts::{PI, TAU};

use crate::models::{AngledCluster, TopicCluster};
use crate::normalize::round1;

#[derive(Debug, Clone)]
pub struct Angulation {
    pub clusters: Vec<AngledCluster>,
    pub total_traffic: f64,
    /// Accumulator after the last slice: a full turn when traffic is positive, zero otherwise.
    pub final_angle: f64,
}

pub fn total_traffic(clusters: &[TopicCluster]) -> f64 {
    clusters.iter().map(|cluster| cluster.traffic).sum()
}

/// Lays clusters out as contiguous slices of one turn, in the order given.
pub fn angulate(clusters: &[TopicCluster]) -> Angulation {
    let total = total_traffic(clusters);
    let mut accumulated = 0.0_f64;
    let mut angled = Vec::with_capacity(clusters.len());

    for cluster in clusters {
        let (share, angle_size) = if total > 0.0 {
            let fraction = cluster.traffic / total;
            (fraction * 100.0, fraction * TAU)
        } else {
            (0.0, 0.0)
        };

        angled.push(AngledCluster {
            name: cluster.name.clone(),
            traffic: cluster.traffic,
            conversion_rate: cluster.conversion_rate,
            content_score: cluster.content_score,
            share: round1(share),
            angle_start: accumulated,
            angle_end: accumulated + angle_size,
            angle_degrees: round1(angle_size * 180.0 / PI),
            label_angle: accumulated + angle_size / 2.0,
        });

        accumulated += angle_size;
    }

    Angulation {
        clusters: angled,
        total_traffic: total,
        final_angle: accumulated,
    }
}
