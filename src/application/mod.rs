// Application layer - Render pipeline and use cases
pub mod backend_gateway;
pub mod blueprint_renderer;
pub mod chart_spec_builder;
pub mod chat_service;
pub mod dashboard_presenter;
pub mod html;
pub mod markup_formatter;
pub mod metrics;
pub mod rendering;
pub mod schedule_flow;
pub mod submission;
pub mod timeline_list;
