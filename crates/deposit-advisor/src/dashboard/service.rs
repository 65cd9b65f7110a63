use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;
use tracing::{error, info};

use super::render::render_error_page;
use super::session::{PredictionResult, SessionId, SessionStore};
use super::views::{
    form_fields, DashboardView, ModelInfoPanel, PredictionPanel, PredictionView, Tab,
    MODEL_DISCLAIMER,
};
use crate::customer::CustomerInput;
use crate::scoring::{score, ProbabilityModel, ScoringError};
use crate::segmentation::SegmentationEngine;

/// Composes the model, the segmentation engine and per-session state into
/// the views the dashboard renders.
pub struct DashboardService<M> {
    model: Arc<M>,
    engine: SegmentationEngine,
    sessions: SessionStore,
}

impl<M> DashboardService<M>
where
    M: ProbabilityModel + 'static,
{
    pub fn new(model: Arc<M>, engine: SegmentationEngine, sessions: SessionStore) -> Self {
        Self {
            model,
            engine,
            sessions,
        }
    }

    pub fn engine(&self) -> &SegmentationEngine {
        &self.engine
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn open_session(&self, requested: Option<SessionId>) -> (SessionId, bool) {
        self.sessions.open(requested)
    }

    pub fn resume_session(&self, requested: Option<SessionId>) -> Option<SessionId> {
        self.sessions.resume(requested)
    }

    /// Page for a visitor that has not just submitted the form. Without a live
    /// session the widgets show their defaults.
    pub fn view(&self, session: Option<SessionId>) -> DashboardView {
        let state = session
            .map(|id| self.sessions.snapshot(id))
            .unwrap_or_default();
        let latest = state.last_prediction().map(|result| result.probability);
        DashboardView {
            fields: form_fields(state.widgets()),
            prediction: PredictionPanel::awaiting(),
            interpretation: self.engine.interpret(latest),
            model_info: self.model_info(),
            active_tab: Tab::Prediction,
        }
    }

    /// Scores the submitted widgets and caches the result in the session. On
    /// failure the session keeps its previous prediction.
    pub fn predict(
        &self,
        session: SessionId,
        input: CustomerInput,
    ) -> Result<DashboardView, DashboardError> {
        let record = input.assemble();
        let probability = score(self.model.as_ref(), &record).map_err(|source| {
            error!(error = %source, "scoring failed");
            DashboardError::Scoring(source)
        })?;
        let tier = self.engine.tier(probability);

        info!(
            tier = tier.label(),
            probability = probability.value(),
            "scored customer"
        );
        metrics::counter!("deposit_predictions_total", "tier" => tier.label()).increment(1);

        self.sessions.update(session, |state| {
            state.record_prediction(PredictionResult {
                probability,
                predicted_at: Utc::now(),
            });
            state.set_widgets(input.clone());
        });

        let gauge = self.engine.gauge(probability);
        Ok(DashboardView {
            fields: form_fields(&input),
            prediction: PredictionPanel::Scored(Box::new(PredictionView::new(
                &record,
                probability,
                tier,
                gauge,
            ))),
            interpretation: self.engine.interpret(Some(probability)),
            model_info: self.model_info(),
            active_tab: Tab::Prediction,
        })
    }

    pub fn model_info(&self) -> ModelInfoPanel {
        ModelInfoPanel {
            description: self.model.describe(),
            disclaimer: MODEL_DISCLAIMER,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("prediction failed: {0}")]
    Scoring(#[from] ScoringError),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let page = render_error_page(&self.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
    }
}
