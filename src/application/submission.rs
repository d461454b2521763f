// Estimate submission - backend round trip, render, guaranteed indicator cleanup
use crate::application::backend_gateway::{BackendGateway, GatewayError, ProjectForm};
use crate::application::rendering::{LoadingGuard, LoadingIndicator};
use crate::domain::error::RenderError;
use crate::domain::estimate::EstimateResult;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Backend rejected the request
    #[error("Analysis Error: {0}")]
    Analysis(String),

    #[error("Server Connection Failed. Please ensure the estimate service is running.")]
    Connection(String),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl From<GatewayError> for SubmissionError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Status { message, .. } => {
                SubmissionError::Analysis(message.unwrap_or_else(|| "Unknown error".to_string()))
            }
            GatewayError::Transport(detail) | GatewayError::Decode(detail) => {
                SubmissionError::Connection(detail)
            }
        }
    }
}

#[derive(Clone)]
pub struct SubmissionService {
    gateway: Arc<dyn BackendGateway>,
    indicator: Arc<dyn LoadingIndicator>,
}

impl SubmissionService {
    pub fn new(gateway: Arc<dyn BackendGateway>, indicator: Arc<dyn LoadingIndicator>) -> Self {
        Self { gateway, indicator }
    }

    /// Fetch an estimate for `form` and hand it to `render`.
    ///
    /// The loading indicator is shown for the whole call and withdrawn on every exit path.
    /// Concurrent submissions are neither queued nor rejected.
    pub async fn submit<F, Fut, T>(&self, form: &ProjectForm, render: F) -> Result<T, SubmissionError>
    where
        F: FnOnce(EstimateResult) -> Fut,
        Fut: Future<Output = Result<T, RenderError>>,
    {
        let _loading = LoadingGuard::show(self.indicator.as_ref());

        let document = self.gateway.calculate(form).await.map_err(|err| {
            tracing::error!("Estimate request failed: {}", err);
            SubmissionError::from(err)
        })?;
        let estimate = EstimateResult::from_value(document)?;

        Ok(render(estimate).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::backend_gateway::fakes::FakeGateway;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Indicator {
        shown: AtomicUsize,
        withdrawn: AtomicUsize,
    }

    impl LoadingIndicator for Indicator {
        fn show(&self) {
            self.shown.fetch_add(1, Ordering::SeqCst);
        }

        fn withdraw(&self) {
            self.withdrawn.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn estimate_document() -> serde_json::Value {
        serde_json::json!({
            "materials": {"steel_tons": 12, "cement_bags": 340, "sand_tons": 20},
            "costs": {"material_cost": 1, "labor_cost": 2, "overhead_cost": 3, "total_estimated_cost": 6},
            "blueprint": [],
            "schedule": [{"week": "1-2", "phase": "Site Prep", "activities": ["Marking"]}]
        })
    }

    fn submission_with(
        result: Result<serde_json::Value, GatewayError>,
    ) -> (SubmissionService, Arc<Indicator>) {
        let indicator = Arc::new(Indicator::default());
        let service = SubmissionService::new(
            Arc::new(FakeGateway::with_estimate(result)),
            indicator.clone(),
        );
        (service, indicator)
    }

    #[tokio::test]
    async fn test_successful_submission_renders() {
        let (service, indicator) = submission_with(Ok(estimate_document()));

        let phases = service
            .submit(&ProjectForm::default(), |estimate| async move {
                Ok(estimate.schedule.len())
            })
            .await
            .unwrap();

        assert_eq!(phases, 1);
        assert_eq!(indicator.shown.load(Ordering::SeqCst), 1);
        assert_eq!(indicator.withdrawn.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_backend_error_is_analysis_error() {
        let (service, indicator) = submission_with(Err(GatewayError::Status {
            status: 500,
            message: Some("could not convert string to float".to_string()),
        }));

        let err = service
            .submit(&ProjectForm::default(), |_| async { Ok(()) })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Analysis Error: could not convert string to float");
        assert_eq!(indicator.withdrawn.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_connection_error() {
        let (service, indicator) = submission_with(Err(GatewayError::Transport("refused".into())));

        let err = service
            .submit(&ProjectForm::default(), |_| async { Ok(()) })
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Connection(_)));
        assert_eq!(indicator.withdrawn.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_and_render_failures_still_withdraw() {
        let (service, indicator) = submission_with(Ok(serde_json::json!({"costs": {}})));
        let err = service
            .submit(&ProjectForm::default(), |_| async { Ok(()) })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SubmissionError::Render(RenderError::MalformedEstimate(_))
        ));
        assert_eq!(indicator.withdrawn.load(Ordering::SeqCst), 1);

        let (service, indicator) = submission_with(Ok(estimate_document()));
        let err = service
            .submit(&ProjectForm::default(), |_| async {
                Err::<(), _>(RenderError::Surface("detached".into()))
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SubmissionError::Render(RenderError::Surface(_))));
        assert_eq!(indicator.withdrawn.load(Ordering::SeqCst), 1);
    }
}
