// Rendering collaborator traits
use crate::domain::chart::{ChartSlot, ChartSpec};
use crate::domain::dashboard::DashboardMetrics;
use crate::domain::error::RenderError;

/// Chart-drawing collaborator.
///
/// Handles are scarce: a handle must be released before a replacement is drawn
/// into the same slot.
pub trait ChartRenderer {
    type Handle;

    fn draw(&mut self, slot: ChartSlot, spec: &ChartSpec) -> Result<Self::Handle, RenderError>;

    fn release(&mut self, handle: Self::Handle);
}

/// Markup and metric displays of the dashboard
pub trait DashboardSurface {
    fn set_metrics(&mut self, metrics: DashboardMetrics) -> Result<(), RenderError>;

    /// Replaces all previous blueprint panels
    fn replace_blueprint(&mut self, markup: String) -> Result<(), RenderError>;

    /// Replaces the previous timeline list
    fn replace_timeline(&mut self, markup: String) -> Result<(), RenderError>;
}

/// Busy indicator shown while a submission is in flight
pub trait LoadingIndicator: Send + Sync {
    fn show(&self);

    fn withdraw(&self);
}

/// Shows the indicator on creation and withdraws it when dropped, on every exit path
pub struct LoadingGuard<'a> {
    indicator: &'a dyn LoadingIndicator,
}

impl<'a> LoadingGuard<'a> {
    pub fn show(indicator: &'a dyn LoadingIndicator) -> Self {
        indicator.show();
        Self { indicator }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.indicator.withdraw();
    }
}
