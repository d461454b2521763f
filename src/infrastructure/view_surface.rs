// In-process rendering collaborators backing the HTTP dashboard
use crate::application::dashboard_presenter::DashboardPresenter;
use crate::application::metrics::MetricFormatter;
use crate::application::rendering::{ChartRenderer, DashboardSurface};
use crate::domain::chart::{ChartSlot, ChartSpec};
use crate::domain::dashboard::{DashboardMetrics, DashboardView};
use crate::domain::error::RenderError;
use crate::domain::estimate::EstimateResult;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Handle to a live chart. Not clonable: it is given back to the registry exactly once.
#[derive(Debug)]
pub struct ChartInstance {
    id: u64,
    slot: ChartSlot,
}

/// Tracks live chart instances and the spec each one was drawn from
#[derive(Debug, Default)]
pub struct ChartRegistry {
    next_id: u64,
    live: BTreeMap<u64, (ChartSlot, ChartSpec)>,
}

impl ChartRegistry {
    pub fn live_charts(&self) -> usize {
        self.live.len()
    }

    pub fn live_in(&self, slot: ChartSlot) -> usize {
        self.live.values().filter(|(s, _)| *s == slot).count()
    }

    pub fn current_specs(&self) -> BTreeMap<ChartSlot, ChartSpec> {
        self.live
            .values()
            .map(|(slot, spec)| (*slot, spec.clone()))
            .collect()
    }
}

impl ChartRenderer for ChartRegistry {
    type Handle = ChartInstance;

    fn draw(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<ChartInstance, RenderError> {
        if self.live_in(slot) > 0 {
            return Err(RenderError::Surface(format!(
                "{} chart drawn before its previous instance was released",
                slot
            )));
        }
        self.next_id += 1;
        self.live.insert(self.next_id, (slot, spec.clone()));
        tracing::trace!(slot = %slot, id = self.next_id, "chart drawn");
        Ok(ChartInstance {
            id: self.next_id,
            slot,
        })
    }

    fn release(&mut self, handle: ChartInstance) {
        self.live.remove(&handle.id);
        tracing::trace!(slot = %handle.slot, id = handle.id, "chart released");
    }
}

#[derive(Debug, Default)]
pub struct ViewSurface {
    metrics: DashboardMetrics,
    blueprint: String,
    timeline: String,
}

impl DashboardSurface for ViewSurface {
    fn set_metrics(&mut self, metrics: DashboardMetrics) -> Result<(), RenderError> {
        self.metrics = metrics;
        Ok(())
    }

    fn replace_blueprint(&mut self, markup: String) -> Result<(), RenderError> {
        self.blueprint = markup;
        Ok(())
    }

    fn replace_timeline(&mut self, markup: String) -> Result<(), RenderError> {
        self.timeline = markup;
        Ok(())
    }
}

/// Presenter plus the surface it draws on; one per dashboard
pub struct DashboardSession {
    presenter: DashboardPresenter<ChartRegistry>,
    surface: ViewSurface,
    rendered_at: Option<DateTime<Utc>>,
}

impl DashboardSession {
    pub fn new(formatter: MetricFormatter) -> Self {
        Self {
            presenter: DashboardPresenter::new(ChartRegistry::default(), formatter),
            surface: ViewSurface::default(),
            rendered_at: None,
        }
    }

    pub fn render(&mut self, estimate: &EstimateResult) -> Result<DashboardView, RenderError> {
        self.presenter.present(estimate, &mut self.surface)?;
        self.rendered_at = Some(Utc::now());
        Ok(self.view())
    }

    pub fn view(&self) -> DashboardView {
        if self.rendered_at.is_none() {
            return DashboardView::empty();
        }
        DashboardView {
            metrics: self.surface.metrics.clone(),
            charts: self.presenter.renderer().current_specs(),
            blueprint: self.surface.blueprint.clone(),
            timeline: self.surface.timeline.clone(),
            rendered_at: self.rendered_at,
        }
    }

    pub fn live_charts(&self) -> usize {
        self.presenter.renderer().live_charts()
    }
}
