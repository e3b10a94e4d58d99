use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub site: String,
    pub period: Period,
    pub totals: Totals,
    pub kpis: Vec<Kpi>,
    pub topic_clusters: Vec<TopicCluster>,
    pub pipeline: Vec<PipelineStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub from: String,
    pub to: String,
    pub compare_from: String,
    pub compare_to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub sessions: f64,
    pub users: f64,
    pub conversions: f64,
    pub revenue: f64,
    pub pages_indexed: f64,
    pub health_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: String,
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicCluster {
    pub name: String,
    pub traffic: f64,
    pub conversion_rate: f64,
    pub content_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    pub step: i64,
    pub name: String,
    pub status: f64,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedKpi {
    pub id: String,
    pub label: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,
    pub percent: f64,
    pub change: Option<f64>,
    pub change_abs: f64,
    pub change_direction: ChangeDirection,
    pub is_positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngledCluster {
    pub name: String,
    pub traffic: f64,
    pub conversion_rate: f64,
    pub content_score: f64,
    pub share: f64,
    pub angle_start: f64,
    pub angle_end: f64,
    pub angle_degrees: f64,
    pub label_angle: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedStep {
    pub step: i64,
    pub name: String,
    pub status: f64,
    pub notes: String,
    pub status_percent: f64,
    pub angle: f64,
    pub status_level: StatusLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total_traffic: f64,
    pub cluster_count: usize,
    pub kpi_count: usize,
    pub pipeline_steps: usize,
    pub date_range: String,
    pub compare_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptedSnapshot {
    pub site: String,
    pub period: Period,
    pub health: f64,
    pub totals: Totals,
    pub clusters: Vec<AngledCluster>,
    pub kpis: Vec<NormalizedKpi>,
    pub pipeline: Vec<MappedStep>,
    pub meta: Meta,
}
