use super::artifact::{ModelLoadError, PipelineArtifact};
use super::{ModelDescription, ProbabilityModel, ScoringError};
use crate::customer::CustomerRecord;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

struct ScaledTerm {
    feature: String,
    mean: f64,
    scale: f64,
    coefficient: f64,
}

struct OneHotTerm {
    feature: String,
    weights: HashMap<String, f64>,
}

/// Logistic regression over standard-scaled numerics and one-hot categoricals.
pub struct LogisticPipeline {
    description: ModelDescription,
    intercept: f64,
    numeric: Vec<ScaledTerm>,
    categorical: Vec<OneHotTerm>,
}

impl LogisticPipeline {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let pipeline = Self::from_artifact(PipelineArtifact::from_path(path)?);
        info!(
            model = %pipeline.description.name,
            path = %path.display(),
            numeric = pipeline.numeric.len(),
            categorical = pipeline.categorical.len(),
            "model artifact loaded"
        );
        Ok(pipeline)
    }

    /// Builds the pipeline from an artifact that already passed validation.
    pub fn from_artifact(artifact: PipelineArtifact) -> Self {
        let PipelineArtifact {
            metadata,
            intercept,
            numeric,
            categorical,
            ..
        } = artifact;

        let description = ModelDescription {
            name: metadata.name,
            estimator: metadata.estimator,
            preprocessing: metadata.preprocessing,
            optimized_for: metadata.optimized_for,
            notes: metadata.notes,
            numeric_features: numeric.len(),
            categorical_features: categorical.len(),
        };

        let numeric = numeric
            .into_iter()
            .map(|feature| ScaledTerm {
                feature: feature.feature,
                mean: feature.mean,
                scale: feature.scale,
                coefficient: feature.coefficient,
            })
            .collect();

        let categorical = categorical
            .into_iter()
            .map(|feature| {
                for level in feature.levels.keys() {
                    if !is_known_level(&feature.feature, level) {
                        warn!(
                            feature = %feature.feature,
                            level = %level,
                            "artifact level never produced by the input form; ignoring"
                        );
                    }
                }
                OneHotTerm {
                    feature: feature.feature,
                    weights: feature.levels.into_iter().collect(),
                }
            })
            .collect();

        Self {
            description,
            intercept,
            numeric,
            categorical,
        }
    }

    /// Linear predictor before the sigmoid.
    fn decision_function(&self, record: &CustomerRecord) -> Result<f64, ScoringError> {
        let mut z = self.intercept;

        for term in &self.numeric {
            let value = record
                .numeric(&term.feature)
                .ok_or_else(|| ScoringError::MissingFeature(term.feature.clone()))?;
            z += term.coefficient * (value - term.mean) / term.scale;
        }

        for term in &self.categorical {
            let category = record
                .categorical(&term.feature)
                .ok_or_else(|| ScoringError::MissingFeature(term.feature.clone()))?;
            // Categories unseen during fitting encode to all zeros.
            z += term.weights.get(category).copied().unwrap_or(0.0);
        }

        Ok(z)
    }
}

impl std::fmt::Debug for LogisticPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogisticPipeline")
            .field("model", &self.description.name)
            .field("intercept", &self.intercept)
            .finish_non_exhaustive()
    }
}

impl ProbabilityModel for LogisticPipeline {
    fn predict_proba(&self, record: &CustomerRecord) -> Result<f64, ScoringError> {
        let z = self.decision_function(record)?;
        Ok(sigmoid(z))
    }

    fn describe(&self) -> ModelDescription {
        self.description.clone()
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

fn is_known_level(feature: &str, level: &str) -> bool {
    use crate::customer::{
        ClosedSet, ContactChannel, ContactMonth, Education, Job, MaritalStatus, PreviousOutcome,
        YesNo,
    };

    match feature {
        "job" => Job::parse(level).is_some(),
        "marital" => MaritalStatus::parse(level).is_some(),
        "education" => Education::parse(level).is_some(),
        "default" | "housing" | "loan" => YesNo::parse(level).is_some(),
        "contact" => ContactChannel::parse(level).is_some(),
        "month" => ContactMonth::parse(level).is_some(),
        "poutcome" => PreviousOutcome::parse(level).is_some(),
        _ => false,
    }
}
