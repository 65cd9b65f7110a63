use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use chrono::Duration;

use crate::customer::CustomerRecord;
use crate::dashboard::{dashboard_router, DashboardService, SessionStore};
use crate::scoring::{ModelDescription, ProbabilityModel, ScoringError};
use crate::segmentation::SegmentationEngine;

/// Model stub returning a fixed probability and counting calls.
pub(super) struct FixedModel {
    probability: f64,
    calls: AtomicUsize,
}

impl FixedModel {
    pub(super) fn new(probability: f64) -> Self {
        Self {
            probability,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProbabilityModel for FixedModel {
    fn predict_proba(&self, _record: &CustomerRecord) -> Result<f64, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.probability)
    }

    fn describe(&self) -> ModelDescription {
        ModelDescription {
            name: "Fixed Stub".to_string(),
            estimator: "Logistic Regression".to_string(),
            preprocessing: vec!["One-Hot Encoding".to_string(), "StandardScaler".to_string()],
            optimized_for: "precision".to_string(),
            notes: Vec::new(),
            numeric_features: 5,
            categorical_features: 9,
        }
    }
}

pub(super) fn build_service(probability: f64) -> (DashboardService<FixedModel>, Arc<FixedModel>) {
    let model = Arc::new(FixedModel::new(probability));
    let service = DashboardService::new(
        model.clone(),
        SegmentationEngine::default(),
        SessionStore::new(Duration::minutes(30)),
    );
    (service, model)
}

pub(super) fn router_for(probability: f64) -> axum::Router {
    let (service, _) = build_service(probability);
    dashboard_router(Arc::new(service))
}

pub(super) fn form_body() -> &'static str {
    "age=41&job=technician&marital=single&education=tertiary&default=no&balance=2500\
     &housing=no&loan=no&contact=cellular&month=may&campaign=3&pdays=92&previous=2&poutcome=success"
}

pub(super) fn predict_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(form_body())).expect("request")
}

pub(super) fn index_request(cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get("/");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("request")
}

/// `name=value` part of the response's Set-Cookie header.
pub(super) fn session_pair(response: &Response) -> String {
    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie")
        .to_str()
        .expect("ascii cookie");
    raw.split(';').next().expect("cookie pair").to_string()
}

pub(super) async fn read_html_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 page")
}
