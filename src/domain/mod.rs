// Domain layer - Estimate, chart and chat models
pub mod chart;
pub mod chat;
pub mod dashboard;
pub mod error;
pub mod estimate;
