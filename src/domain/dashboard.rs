// Dashboard view domain model
use super::chart::{ChartSlot, ChartSpec};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Formatted scalar metric displays
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_cost: String,
    pub steel: String,
    pub cement: String,
}

/// Snapshot of everything currently on the dashboard surface
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub metrics: DashboardMetrics,
    pub charts: BTreeMap<ChartSlot, ChartSpec>,
    pub blueprint: String,
    pub timeline: String,
    pub rendered_at: Option<DateTime<Utc>>,
}

impl DashboardView {
    pub fn empty() -> Self {
        Self {
            metrics: DashboardMetrics::default(),
            charts: BTreeMap::new(),
            blueprint: String::new(),
            timeline: String::new(),
            rendered_at: None,
        }
    }
}
