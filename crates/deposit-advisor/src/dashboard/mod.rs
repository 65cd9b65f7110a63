//! Operator-facing dashboard: sidebar form, prediction result, business
//! interpretation and model info, rendered server-side per session.

mod assets;
pub mod render;
pub mod router;
pub mod service;
pub mod session;
pub mod views;

#[cfg(test)]
mod tests;

pub use assets::asset;
pub use router::{dashboard_router, session_cookie, session_from_headers, SESSION_COOKIE};
pub use service::{DashboardError, DashboardService};
pub use session::{DashboardSession, PredictionResult, SessionId, SessionStore};
pub use views::{
    DashboardView, ModelInfoPanel, PredictionPanel, PredictionView, Tab, AWAITING_INPUT,
    MODEL_DISCLAIMER,
};
