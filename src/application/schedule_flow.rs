// Schedule flow - synthetic staggered intervals for the timeline chart
use crate::domain::chart::FlowInterval;
use crate::domain::estimate::Phase;

/// Width of every bar
pub const PHASE_DURATION: f64 = 14.0;
/// Offset between consecutive bar starts
pub const PHASE_CADENCE: f64 = 10.0;

/// One interval per phase, index-aligned. Declared `week` values are not consulted.
pub fn build_flow(phases: &[Phase]) -> Vec<FlowInterval> {
    let mut cursor = 0.0;
    phases
        .iter()
        .map(|_| {
            let start = cursor;
            cursor += PHASE_CADENCE;
            FlowInterval::new(start, start + PHASE_DURATION)
        })
        .collect()
}
