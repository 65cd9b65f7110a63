use super::common::*;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::Form;
use std::sync::Arc;
use tower::ServiceExt;

use crate::customer::CustomerInput;
use crate::dashboard::router::{predict_handler, session_from_headers, SESSION_COOKIE};
use crate::dashboard::{AWAITING_INPUT, MODEL_DISCLAIMER};
use crate::segmentation::PENDING_INTERPRETATION;

#[tokio::test]
async fn index_shows_placeholders_before_any_prediction() {
    let router = router_for(0.42);

    let response = router.oneshot(index_request(None)).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let page = read_html_body(response).await;
    assert!(page.contains("Bank Term Deposit Prediction Dashboard"));
    assert!(page.contains(AWAITING_INPUT));
    assert!(page.contains(PENDING_INTERPRETATION));
    assert!(page.contains(MODEL_DISCLAIMER));
}

#[tokio::test]
async fn anonymous_visits_do_not_accumulate_sessions() {
    let (service, _) = build_service(0.42);
    let service = Arc::new(service);
    let router = crate::dashboard::dashboard_router(service.clone());

    for _ in 0..3 {
        let response = router
            .clone()
            .oneshot(index_request(None))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert!(service.sessions().is_empty());

    let response = router
        .oneshot(predict_request(None))
        .await
        .expect("prediction");
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("session cookie issued")
        .to_string();
    assert!(cookie.starts_with(SESSION_COOKIE));
    assert!(cookie.contains("HttpOnly"));
    assert_eq!(service.sessions().len(), 1);
}

#[tokio::test]
async fn predict_route_renders_high_priority_at_threshold() {
    let router = router_for(0.60);

    let response = router
        .oneshot(predict_request(None))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let page = read_html_body(response).await;
    assert!(page.contains("60.00%"));
    assert!(page.contains("HIGH PRIORITY SEGMENT"));
    assert!(page.contains("Revenue Acceleration Zone"));
    assert!(!page.contains(PENDING_INTERPRETATION));
}

#[tokio::test]
async fn predict_route_renders_low_priority_just_below_medium() {
    let page = read_html_body(
        router_for(0.3499)
            .oneshot(predict_request(None))
            .await
            .expect("response"),
    )
    .await;

    assert!(page.contains("34.99%"));
    assert!(page.contains("LOW PRIORITY SEGMENT"));
    assert!(page.contains("Cost Avoidance &amp; Risk Control Zone"));
}

#[tokio::test]
async fn certain_prediction_keeps_annotation_on_axis() {
    let page = read_html_body(
        router_for(1.0)
            .oneshot(predict_request(None))
            .await
            .expect("response"),
    )
    .await;

    assert!(page.contains("Customer Probability: 100.00%"));
    assert!(page.contains("gauge-bar"));
}

#[tokio::test]
async fn interpretation_persists_for_the_session_only() {
    let router = router_for(0.5);

    let first = router
        .clone()
        .oneshot(predict_request(None))
        .await
        .expect("prediction");
    let cookie = session_pair(&first);

    let same_session = read_html_body(
        router
            .clone()
            .oneshot(index_request(Some(&cookie)))
            .await
            .expect("revisit"),
    )
    .await;
    assert!(same_session.contains("MEDIUM PRIORITY SEGMENT"));
    assert!(same_session.contains(AWAITING_INPUT));

    let other_session = read_html_body(
        router
            .oneshot(index_request(None))
            .await
            .expect("fresh visit"),
    )
    .await;
    assert!(other_session.contains(PENDING_INTERPRETATION));
}

#[tokio::test]
async fn sidebar_remembers_submitted_widgets() {
    let router = router_for(0.2);
    let response = router
        .clone()
        .oneshot(predict_request(None))
        .await
        .expect("prediction");
    let cookie = session_pair(&response);

    let page = read_html_body(
        router
            .oneshot(index_request(Some(&cookie)))
            .await
            .expect("revisit"),
    )
    .await;

    assert!(page.contains("<option value=\"technician\" selected>"));
    assert!(page.contains("name=\"balance\" min=\"-10000\" max=\"150000\" step=\"1\" value=\"2500\""));
}

#[tokio::test]
async fn balance_off_the_spin_increment_is_accepted() {
    let body = form_body().replace("balance=2500", "balance=1234");
    let response = router_for(0.4)
        .oneshot(
            axum::http::Request::post("/predict")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(axum::body::Body::from(body))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let page = read_html_body(response).await;
    assert!(page.contains("<td>1234</td>"));
    assert!(page.contains("name=\"balance\" min=\"-10000\" max=\"150000\" step=\"1\" value=\"1234\""));
}

#[tokio::test]
async fn malformed_form_is_rejected_without_scoring() {
    let (service, model) = build_service(0.9);
    let router = crate::dashboard::dashboard_router(Arc::new(service));

    let response = router
        .oneshot(
            axum::http::Request::post("/predict")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(axum::body::Body::from("age=41&job=astronaut"))
                .expect("request"),
        )
        .await
        .expect("response");

    assert!(response.status().is_client_error());
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn predict_handler_reuses_known_session() {
    let (service, _) = build_service(0.7);
    let service = Arc::new(service);
    let (session, _) = service.open_session(None);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={session}"))
            .expect("cookie header"),
    );

    let response =
        predict_handler(State(service.clone()), headers, Form(CustomerInput::default())).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(service
        .sessions()
        .snapshot(session)
        .last_prediction()
        .is_some());
}

#[test]
fn garbage_cookie_is_ignored() {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::COOKIE,
        HeaderValue::from_static("deposit_advisor_session=../../etc"),
    );
    assert!(session_from_headers(&headers).is_none());
}
