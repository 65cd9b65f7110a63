use crate::customer::{CATEGORICAL_FEATURES, NUMERIC_FEATURES};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// JSON export of the fitted one-hot + scaler + logistic regression pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineArtifact {
    pub format_version: u32,
    pub metadata: ArtifactMetadata,
    pub intercept: f64,
    pub numeric: Vec<NumericFeature>,
    pub categorical: Vec<CategoricalFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub name: String,
    pub estimator: String,
    #[serde(default)]
    pub preprocessing: Vec<String>,
    #[serde(default)]
    pub optimized_for: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Standard-scaled numeric column and its fitted weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFeature {
    pub feature: String,
    pub mean: f64,
    pub scale: f64,
    pub coefficient: f64,
}

/// One-hot encoded column: weight per category seen during fitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub feature: String,
    pub levels: BTreeMap<String, f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported artifact format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("artifact does not define feature '{0}'")]
    MissingFeature(String),
    #[error("artifact defines feature '{0}' more than once")]
    DuplicateFeature(String),
    #[error("artifact defines unexpected feature '{0}'")]
    UnexpectedFeature(String),
    #[error("artifact value for '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: &'static str },
}

impl PipelineArtifact {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelLoadError> {
        let artifact: PipelineArtifact = serde_json::from_str(raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Checks that the artifact describes exactly the record's features with
    /// finite parameters.
    pub fn validate(&self) -> Result<(), ModelLoadError> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(ModelLoadError::UnsupportedVersion {
                found: self.format_version,
                expected: ARTIFACT_FORMAT_VERSION,
            });
        }

        ensure_finite("intercept", self.intercept)?;

        check_feature_set(
            self.numeric.iter().map(|feature| feature.feature.as_str()),
            &NUMERIC_FEATURES,
        )?;
        check_feature_set(
            self.categorical.iter().map(|feature| feature.feature.as_str()),
            &CATEGORICAL_FEATURES,
        )?;

        for feature in &self.numeric {
            ensure_finite(&feature.feature, feature.mean)?;
            ensure_finite(&feature.feature, feature.coefficient)?;
            if !feature.scale.is_finite() || feature.scale <= 0.0 {
                return Err(ModelLoadError::InvalidValue {
                    field: format!("{}.scale", feature.feature),
                    reason: "scale must be positive and finite",
                });
            }
        }

        for feature in &self.categorical {
            if feature.levels.is_empty() {
                return Err(ModelLoadError::InvalidValue {
                    field: feature.feature.clone(),
                    reason: "categorical feature has no levels",
                });
            }
            for (level, weight) in &feature.levels {
                ensure_finite(&format!("{}={}", feature.feature, level), *weight)?;
            }
        }

        Ok(())
    }
}

fn ensure_finite(field: &str, value: f64) -> Result<(), ModelLoadError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ModelLoadError::InvalidValue {
            field: field.to_string(),
            reason: "value must be finite",
        })
    }
}

fn check_feature_set<'a>(
    defined: impl Iterator<Item = &'a str>,
    required: &[&str],
) -> Result<(), ModelLoadError> {
    let mut seen = HashSet::new();
    for name in defined {
        if !required.contains(&name) {
            return Err(ModelLoadError::UnexpectedFeature(name.to_string()));
        }
        if !seen.insert(name) {
            return Err(ModelLoadError::DuplicateFeature(name.to_string()));
        }
    }

    match required.iter().find(|name| !seen.contains(**name)) {
        Some(missing) => Err(ModelLoadError::MissingFeature((*missing).to_string())),
        None => Ok(()),
    }
}
