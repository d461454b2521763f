// HTTP request handlers
use crate::application::backend_gateway::ProjectForm;
use crate::application::chat_service::bot_reply;
use crate::application::submission::SubmissionError;
use crate::domain::chat::ChatMessage;
use crate::domain::error::RenderError;
use crate::domain::estimate::EstimateResult;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize)]
pub struct FormatRequest {
    #[serde(default)]
    pub reply: Option<String>,
}

#[derive(Serialize)]
pub struct ServiceStatus {
    pub in_flight: usize,
    pub live_charts: usize,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn service_status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    let live_charts = state.dashboard.lock().await.live_charts();
    Json(ServiceStatus {
        in_flight: state.in_flight.current(),
        live_charts,
    })
}

/// Forward the project form to the estimate backend and render the result
pub async fn submit_estimate(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(form): Json<ProjectForm>,
) -> Response {
    let compress = accepts_brotli(&headers);
    let render_state = state.clone();

    let outcome = state
        .submission_service
        .submit(&form, move |estimate| async move {
            render_state.dashboard.lock().await.render(&estimate)
        })
        .await;

    match outcome {
        Ok(view) => respond(StatusCode::OK, &view, compress).await,
        Err(err) => {
            tracing::warn!("Estimate submission failed: {}", err);
            error_response(submission_status(&err), err.to_string())
        }
    }
}

/// Render an estimate document supplied by the caller
pub async fn render_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(document): Json<serde_json::Value>,
) -> Response {
    let compress = accepts_brotli(&headers);

    let rendered = match EstimateResult::from_value(document) {
        Ok(estimate) => state.dashboard.lock().await.render(&estimate),
        Err(err) => Err(err),
    };

    match rendered {
        Ok(view) => respond(StatusCode::OK, &view, compress).await,
        Err(err) => {
            tracing::warn!("Dashboard render failed: {}", err);
            error_response(render_status(&err), err.to_string())
        }
    }
}

pub async fn current_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let view = state.dashboard.lock().await.view();
    respond(StatusCode::OK, &view, accepts_brotli(&headers)).await
}

pub async fn chat(State(state): State<Arc<AppState>>, Json(request): Json<ChatRequest>) -> Response {
    match state.chat_service.send(&request.message).await {
        Some(exchange) => Json(exchange).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Format a reply locally, without a backend round trip
pub async fn format_chat(Json(request): Json<FormatRequest>) -> Json<ChatMessage> {
    Json(bot_reply(request.reply.as_deref()))
}

async fn respond<T: Serialize>(status: StatusCode, data: &T, compress: bool) -> Response {
    match json_response(status, data, compress).await {
        Ok(response) => response.into_response(),
        Err(status) => status.into_response(),
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

fn render_status(err: &RenderError) -> StatusCode {
    match err {
        RenderError::MalformedEstimate(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RenderError::Surface(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn submission_status(err: &SubmissionError) -> StatusCode {
    match err {
        SubmissionError::Analysis(_) => StatusCode::BAD_GATEWAY,
        SubmissionError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
        SubmissionError::Render(render) => render_status(render),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::backend_gateway::GatewayError;
    use crate::application::backend_gateway::fakes::FakeGateway;
    use crate::application::metrics::MetricFormatter;

    fn state_with(gateway: FakeGateway) -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(gateway), MetricFormatter::default()))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn estimate_document() -> serde_json::Value {
        serde_json::json!({
            "materials": {"steel_tons": 12, "cement_bags": 340, "sand_tons": 20},
            "costs": {"material_cost": 700000, "labor_cost": 400000, "overhead_cost": 134567, "total_estimated_cost": 1234567},
            "blueprint": [{"floor_name": "Ground Floor", "rooms": []}],
            "schedule": [{"week": "1-2", "phase": "Site Prep", "activities": ["Marking"]}]
        })
    }

    #[tokio::test]
    async fn test_render_dashboard() {
        let state = state_with(FakeGateway::with_reply(Ok(None)));

        let response =
            render_dashboard(HeaderMap::new(), State(state.clone()), Json(estimate_document())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["metrics"]["total_cost"], "₹1,234,567");
        assert_eq!(body["charts"]["material"]["series"], serde_json::json!([[12.0], [34.0], [20.0]]));

        let current = body_json(current_dashboard(HeaderMap::new(), State(state)).await).await;
        assert_eq!(current["metrics"]["cement"], "340 Bags");
    }

    #[tokio::test]
    async fn test_malformed_estimate_is_unprocessable() {
        let state = state_with(FakeGateway::with_reply(Ok(None)));

        let response = render_dashboard(
            HeaderMap::new(),
            State(state),
            Json(serde_json::json!({"costs": {"total": 1}})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("malformed estimate"));
    }

    #[tokio::test]
    async fn test_submission_renders_backend_estimate() {
        let state = state_with(FakeGateway::with_estimate(Ok(estimate_document())));

        let response =
            submit_estimate(HeaderMap::new(), State(state.clone()), Json(ProjectForm::default())).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.in_flight.current(), 0);
        assert_eq!(state.dashboard.lock().await.live_charts(), 3);
    }

    #[tokio::test]
    async fn test_submission_backend_error() {
        let state = state_with(FakeGateway::with_estimate(Err(GatewayError::Status {
            status: 500,
            message: None,
        })));

        let response =
            submit_estimate(HeaderMap::new(), State(state.clone()), Json(ProjectForm::default())).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"], "Analysis Error: Unknown error");
        assert_eq!(state.in_flight.current(), 0);
    }

    #[tokio::test]
    async fn test_blank_chat_message() {
        let state = state_with(FakeGateway::with_reply(Ok(Some("unused".into()))));

        let response = chat(State(state), Json(ChatRequest { message: "  ".into() })).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_chat_exchange() {
        let state = state_with(FakeGateway::with_reply(Ok(Some("- Cure for *7* days".into()))));

        let response = chat(State(state), Json(ChatRequest { message: "curing?".into() })).await;
        let body = body_json(response).await;

        assert_eq!(body["user"]["raw_text"], "curing?");
        assert_eq!(
            body["bot"]["formatted_markup"],
            "<span class=\"chat-list-item\">• Cure for <strong>7</strong> days</span>"
        );
    }

    #[tokio::test]
    async fn test_format_chat() {
        let Json(message) = format_chat(Json(FormatRequest {
            reply: Some("**Note**".into()),
        }))
        .await;

        assert_eq!(message.formatted_markup, "<span class=\"chat-heading\">Note</span>");
    }
}
