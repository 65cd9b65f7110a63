use crate::config::ConfigError;
use crate::scoring::ModelLoadError;
use crate::telemetry::TelemetryError;
use std::error::Error;
use std::fmt;

/// Failures that abort startup or a CLI command. Request-level failures are
/// rendered by the dashboard itself.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Model(ModelLoadError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Model(err) => write!(f, "model error: {}", err),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Model(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ModelLoadError> for AppError {
    fn from(value: ModelLoadError) -> Self {
        Self::Model(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_load_failure_keeps_its_cause() {
        let error = AppError::from(ModelLoadError::MissingFeature("age".to_string()));

        assert!(error.to_string().starts_with("model error:"));
        assert!(error.to_string().contains("age"));
        assert!(matches!(error.source(), Some(source) if source.is::<ModelLoadError>()));
    }
}
