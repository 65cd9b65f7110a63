//! Scoring adapter around the pre-fitted subscription pipeline.
//!
//! The dashboard never talks to a concrete estimator: it holds something that
//! implements [`ProbabilityModel`] and calls [`score`], which guarantees the
//! returned value is a usable probability. Preprocessing (one-hot encoding,
//! scaling) belongs to the model, not to this adapter.

mod artifact;
mod handle;
mod pipeline;

pub use artifact::{
    ArtifactMetadata, CategoricalFeature, ModelLoadError, NumericFeature, PipelineArtifact,
    ARTIFACT_FORMAT_VERSION,
};
pub use handle::ModelHandle;
pub use pipeline::LogisticPipeline;

use crate::customer::CustomerRecord;
use serde::Serialize;

/// Anything able to estimate the probability that a customer subscribes.
pub trait ProbabilityModel: Send + Sync {
    /// Raw probability of the positive class for a single record.
    fn predict_proba(&self, record: &CustomerRecord) -> Result<f64, ScoringError>;

    /// Human readable description for the model info panel.
    fn describe(&self) -> ModelDescription;
}

/// Static facts about the loaded model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDescription {
    pub name: String,
    pub estimator: String,
    pub preprocessing: Vec<String>,
    pub optimized_for: String,
    pub notes: Vec<String>,
    pub numeric_features: usize,
    pub categorical_features: usize,
}

/// Probability of subscription, guaranteed finite and within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    pub fn new(value: f64) -> Result<Self, ScoringError> {
        if !value.is_finite() {
            return Err(ScoringError::NonFinite);
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ScoringError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Position on the 0..100 chart axes.
    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Percentage with two decimals, e.g. `63.21%`.
    pub fn percent_label(self) -> String {
        format!("{:.2}%", self.percent())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("model produced a non-finite probability")]
    NonFinite,
    #[error("model produced {0}, outside the [0, 1] probability range")]
    OutOfRange(f64),
    #[error("record is missing feature '{0}' required by the model")]
    MissingFeature(String),
}

/// Score one record and validate the model output.
pub fn score<M>(model: &M, record: &CustomerRecord) -> Result<Probability, ScoringError>
where
    M: ProbabilityModel + ?Sized,
{
    let raw = model.predict_proba(record)?;
    Probability::new(raw)
}
