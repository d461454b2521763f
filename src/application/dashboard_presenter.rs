// Dashboard presenter - pushes one estimate onto the rendering collaborators
use crate::application::blueprint_renderer::render_blueprint;
use crate::application::chart_spec_builder::build_specs;
use crate::application::metrics::MetricFormatter;
use crate::application::rendering::{ChartRenderer, DashboardSurface};
use crate::application::timeline_list::render_timeline_list;
use crate::domain::chart::{ChartSlot, ChartSpec};
use crate::domain::error::RenderError;
use crate::domain::estimate::EstimateResult;
use std::collections::BTreeMap;

pub struct DashboardPresenter<R: ChartRenderer> {
    renderer: R,
    formatter: MetricFormatter,
    slots: BTreeMap<ChartSlot, R::Handle>,
}

impl<R: ChartRenderer> DashboardPresenter<R> {
    pub fn new(renderer: R, formatter: MetricFormatter) -> Self {
        Self {
            renderer,
            formatter,
            slots: BTreeMap::new(),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Renders metrics, charts, blueprint and timeline list for `result`.
    ///
    /// Errors from the collaborators are returned unhandled.
    pub fn present(
        &mut self,
        result: &EstimateResult,
        surface: &mut dyn DashboardSurface,
    ) -> Result<(), RenderError> {
        surface.set_metrics(self.formatter.metrics(result))?;

        let specs = build_specs(result);
        for slot in ChartSlot::ALL {
            self.replace_chart(slot, specs.get(slot))?;
        }

        surface.replace_blueprint(render_blueprint(&result.blueprint))?;
        surface.replace_timeline(render_timeline_list(&result.schedule))?;

        tracing::debug!(
            floors = result.blueprint.len(),
            phases = result.schedule.len(),
            "dashboard presented"
        );
        Ok(())
    }

    fn replace_chart(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<(), RenderError> {
        if let Some(prior) = self.slots.remove(&slot) {
            self.renderer.release(prior);
        }
        let handle = self.renderer.draw(slot, spec)?;
        self.slots.insert(slot, handle);
        Ok(())
    }
}
