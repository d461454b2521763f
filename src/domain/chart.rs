// Chart specification domain models
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    Doughnut,
    Bar,
    HorizontalBar,
}

/// On-screen position a chart occupies. Each slot holds at most one live chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSlot {
    Cost,
    Material,
    Timeline,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 3] = [ChartSlot::Cost, ChartSlot::Material, ChartSlot::Timeline];
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartSlot::Cost => "cost",
            ChartSlot::Material => "material",
            ChartSlot::Timeline => "timeline",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Right,
    Hidden,
}

/// Presentation hints a drawing collaborator may honour
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleHints {
    pub dataset_label: Option<String>,
    pub colors: Vec<String>,
    pub border_color: Option<String>,
    pub border_width: f64,
    pub border_radius: f64,
    pub legend: LegendPosition,
    pub show_x_axis: bool,
    pub show_tooltip: bool,
}

impl Default for StyleHints {
    fn default() -> Self {
        Self {
            dataset_label: None,
            colors: Vec::new(),
            border_color: None,
            border_width: 0.0,
            border_radius: 0.0,
            legend: LegendPosition::Hidden,
            show_x_axis: true,
            show_tooltip: true,
        }
    }
}

/// Declarative, library-agnostic chart description.
///
/// `series` holds one entry per label: a one-element `[v]` for proportion and bar charts,
/// a `[start, end]` pair for range charts. `values()` flattens the one-element form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Vec<f64>>,
    pub style: StyleHints,
}

impl ChartSpec {
    /// Flattened single-value series (first element of each entry)
    pub fn values(&self) -> Vec<f64> {
        self.series
            .iter()
            .filter_map(|entry| entry.first().copied())
            .collect()
    }
}

/// Synthetic start/end pair used to stagger timeline bars
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowInterval {
    pub start: f64,
    pub end: f64,
}

impl FlowInterval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// The three specs produced for one estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpecs {
    pub cost: ChartSpec,
    pub material: ChartSpec,
    pub timeline: ChartSpec,
}

impl ChartSpecs {
    pub fn get(&self, slot: ChartSlot) -> &ChartSpec {
        match slot {
            ChartSlot::Cost => &self.cost,
            ChartSlot::Material => &self.material,
            ChartSlot::Timeline => &self.timeline,
        }
    }
}
