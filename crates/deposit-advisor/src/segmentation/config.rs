use serde::{Deserialize, Serialize};

pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.35;
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.60;

/// Lower bounds of the MEDIUM and HIGH priority tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    medium: f64,
    high: f64,
}

impl SegmentationConfig {
    pub fn new(medium: f64, high: f64) -> Result<Self, ThresholdError> {
        for (name, value) in [("medium", medium), ("high", high)] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ThresholdError::OutOfRange { name, value });
            }
        }
        if medium >= high {
            return Err(ThresholdError::Unordered { medium, high });
        }
        Ok(Self { medium, high })
    }

    pub fn medium(&self) -> f64 {
        self.medium
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            medium: DEFAULT_MEDIUM_THRESHOLD,
            high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    #[error("{name} threshold {value} must be within (0, 1]")]
    OutOfRange { name: &'static str, value: f64 },
    #[error("medium threshold {medium} must be below high threshold {high}")]
    Unordered { medium: f64, high: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_thresholds_are_valid() {
        let config = SegmentationConfig::default();
        assert_eq!(
            SegmentationConfig::new(config.medium(), config.high()),
            Ok(config)
        );
    }

    #[test]
    fn rejects_inverted_or_out_of_range_thresholds() {
        assert!(matches!(
            SegmentationConfig::new(0.6, 0.35),
            Err(ThresholdError::Unordered { .. })
        ));
        assert!(matches!(
            SegmentationConfig::new(0.0, 0.5),
            Err(ThresholdError::OutOfRange { name: "medium", .. })
        ));
        assert!(matches!(
            SegmentationConfig::new(0.3, f64::NAN),
            Err(ThresholdError::OutOfRange { name: "high", .. })
        ));
    }
}
