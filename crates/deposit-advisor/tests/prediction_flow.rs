use std::path::PathBuf;

use chrono::Duration;
use deposit_advisor::customer::{CustomerInput, Job, PreviousOutcome};
use deposit_advisor::dashboard::{DashboardService, PredictionPanel, SessionStore};
use deposit_advisor::scoring::{score, ModelHandle};
use deposit_advisor::segmentation::{Interpretation, SegmentationEngine};

fn bundled_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/pipeline.json")
}

fn first_contact_technician() -> CustomerInput {
    CustomerInput {
        age: 35,
        job: Job::Technician,
        balance: 1000,
        pdays: -1,
        campaign: 1,
        previous: 0,
        poutcome: PreviousOutcome::Unknown,
        ..CustomerInput::default()
    }
}

#[test]
fn bundled_pipeline_scores_a_first_contact_customer() {
    let handle = ModelHandle::new(bundled_model_path());
    let model = handle.acquire().expect("bundled model loads");
    let record = first_contact_technician().assemble();

    let probability = score(model.as_ref(), &record).expect("valid probability");
    assert!((0.0..=1.0).contains(&probability.value()));

    let engine = SegmentationEngine::default();
    let report = engine.report(probability);
    assert_eq!(report.narrative.tier, report.tier);
    assert!((report.chart.marker.y - probability.value() * 100.0).abs() < 1e-9);
    assert_eq!(engine.report(probability), report);
}

#[test]
fn previous_success_raises_the_score() {
    let handle = ModelHandle::new(bundled_model_path());
    let model = handle.acquire().expect("bundled model loads");

    let unknown = score(model.as_ref(), &first_contact_technician().assemble())
        .expect("baseline");
    let success = score(
        model.as_ref(),
        &CustomerInput {
            poutcome: PreviousOutcome::Success,
            ..first_contact_technician()
        }
        .assemble(),
    )
    .expect("previous success");

    assert!(success > unknown);
}

#[test]
fn dashboard_service_runs_end_to_end_on_the_bundled_model() {
    let handle = ModelHandle::new(bundled_model_path());
    let service = DashboardService::new(
        handle.acquire().expect("bundled model loads"),
        SegmentationEngine::default(),
        SessionStore::new(Duration::minutes(5)),
    );
    let (session, created) = service.open_session(None);
    assert!(created);

    let view = service
        .predict(session, first_contact_technician())
        .expect("prediction");

    let PredictionPanel::Scored(scored) = view.prediction else {
        panic!("expected a scored panel");
    };
    match view.interpretation {
        Interpretation::Ready(report) => assert_eq!(report.tier, scored.tier),
        other => panic!("expected a report, got {other:?}"),
    }
}

#[test]
fn missing_artifact_fails_to_load() {
    let handle = ModelHandle::new("does/not/exist.json");
    assert!(handle.acquire().is_err());
    assert!(!handle.is_loaded());
}
