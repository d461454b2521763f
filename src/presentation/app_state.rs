// Application state for HTTP handlers
use crate::application::backend_gateway::BackendGateway;
use crate::application::chat_service::ChatService;
use crate::application::metrics::MetricFormatter;
use crate::application::rendering::LoadingIndicator;
use crate::application::submission::SubmissionService;
use crate::infrastructure::view_surface::DashboardSession;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

pub struct AppState {
    pub submission_service: SubmissionService,
    pub chat_service: ChatService,
    pub dashboard: Mutex<DashboardSession>,
    pub in_flight: Arc<InFlightSubmissions>,
}

/// Loading indicator for the server: counts submissions awaiting the backend
#[derive(Debug, Default)]
pub struct InFlightSubmissions(AtomicUsize);

impl InFlightSubmissions {
    pub fn current(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl LoadingIndicator for InFlightSubmissions {
    fn show(&self) {
        let now = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(in_flight = now, "submission started");
    }

    fn withdraw(&self) {
        let now = self.0.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        tracing::debug!(in_flight = now, "submission finished");
    }
}

impl AppState {
    pub fn new(gateway: Arc<dyn BackendGateway>, formatter: MetricFormatter) -> Self {
        let in_flight = Arc::new(InFlightSubmissions::default());
        Self {
            submission_service: SubmissionService::new(gateway.clone(), in_flight.clone()),
            chat_service: ChatService::new(gateway),
            dashboard: Mutex::new(DashboardSession::new(formatter)),
            in_flight,
        }
    }
}
