// Chart spec builder - cost, material and timeline chart descriptions
use crate::application::schedule_flow::build_flow;
use crate::domain::chart::{ChartKind, ChartSpec, ChartSpecs, LegendPosition, StyleHints};
use crate::domain::estimate::{Costs, EstimateResult, Materials, Phase};

const ACCENT: &str = "#6366f1";

/// Cement is plotted at a tenth of its bag count so the bars stay comparable
pub const CEMENT_DISPLAY_DIVISOR: f64 = 10.0;

pub fn build_specs(result: &EstimateResult) -> ChartSpecs {
    ChartSpecs {
        cost: cost_spec(&result.costs),
        material: material_spec(&result.materials),
        timeline: timeline_spec(&result.schedule),
    }
}

pub fn cost_spec(costs: &Costs) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: labels(&["Materials", "Labor", "Overhead"]),
        series: vec![vec![costs.material], vec![costs.labor], vec![costs.overhead]],
        style: StyleHints {
            colors: labels(&[ACCENT, "#10b981", "#f59e0b"]),
            legend: LegendPosition::Right,
            ..StyleHints::default()
        },
    }
}

pub fn material_spec(materials: &Materials) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: labels(&["Steel", "Cement (x10)", "Sand"]),
        series: vec![
            vec![materials.steel_tons],
            vec![materials.cement_bags / CEMENT_DISPLAY_DIVISOR],
            vec![materials.sand_tons],
        ],
        style: StyleHints {
            dataset_label: Some("Quantity".to_string()),
            colors: labels(&[ACCENT]),
            border_radius: 5.0,
            ..StyleHints::default()
        },
    }
}

/// Horizontal range chart; ranges are synthetic so the value axis stays hidden
pub fn timeline_spec(schedule: &[Phase]) -> ChartSpec {
    let series = build_flow(schedule)
        .into_iter()
        .map(|interval| vec![interval.start, interval.end])
        .collect();

    ChartSpec {
        kind: ChartKind::HorizontalBar,
        labels: schedule.iter().map(|p| p.phase.clone()).collect(),
        series,
        style: StyleHints {
            dataset_label: Some("Project Flow".to_string()),
            colors: labels(&["rgba(99, 102, 241, 0.6)"]),
            border_color: Some(ACCENT.to_string()),
            border_width: 1.0,
            border_radius: 50.0,
            show_x_axis: false,
            show_tooltip: false,
            ..StyleHints::default()
        },
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
