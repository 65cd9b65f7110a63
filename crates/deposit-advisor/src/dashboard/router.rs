use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};

use super::render::render_page;
use super::service::DashboardService;
use super::session::SessionId;
use crate::customer::CustomerInput;
use crate::scoring::ProbabilityModel;

pub const SESSION_COOKIE: &str = "deposit_advisor_session";

/// Router serving the dashboard page and the prediction form.
pub fn dashboard_router<M>(service: Arc<DashboardService<M>>) -> Router
where
    M: ProbabilityModel + 'static,
{
    Router::new()
        .route("/", get(index_handler::<M>))
        .route("/predict", post(predict_handler::<M>))
        .with_state(service)
}

pub(crate) async fn index_handler<M>(
    State(service): State<Arc<DashboardService<M>>>,
    headers: HeaderMap,
) -> Response
where
    M: ProbabilityModel + 'static,
{
    let session = service.resume_session(session_from_headers(&headers));
    Html(render_page(&service.view(session))).into_response()
}

pub(crate) async fn predict_handler<M>(
    State(service): State<Arc<DashboardService<M>>>,
    headers: HeaderMap,
    Form(input): Form<CustomerInput>,
) -> Response
where
    M: ProbabilityModel + 'static,
{
    let (session, created) = service.open_session(session_from_headers(&headers));
    let response = match service.predict(session, input) {
        Ok(view) => Html(render_page(&view)).into_response(),
        Err(error) => error.into_response(),
    };
    with_session_cookie(response, session, created)
}

/// Session id from the request cookies, if present and well formed.
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| SessionId::parse(value))
}

pub fn session_cookie(id: SessionId) -> String {
    format!("{SESSION_COOKIE}={id}; HttpOnly; SameSite=Lax; Path=/")
}

fn with_session_cookie(mut response: Response, session: SessionId, created: bool) -> Response {
    if created {
        if let Ok(value) = HeaderValue::from_str(&session_cookie(session)) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}
