//! Priority segmentation of a subscription probability and the business
//! report rendered for it.

pub mod chart;
mod config;
mod narrative;

pub use chart::{
    gauge_chart, threshold_chart, Annotation, ChartBand, GaugeChart, GaugeStep, MarkerLine,
    ThresholdChart,
};
pub use config::{
    SegmentationConfig, ThresholdError, DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD,
};
pub use narrative::{narrative_for, ExecutiveTakeaway, TierNarrative, Tone, EXECUTIVE_TAKEAWAY};

use crate::scoring::Probability;
use serde::Serialize;

/// Placeholder shown when the interpretation is requested before any prediction.
pub const PENDING_INTERPRETATION: &str = "Run prediction first to unlock executive insights.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    pub const fn zone_name(self) -> &'static str {
        match self {
            Self::High => "High Priority Zone",
            Self::Medium => "Medium Priority Zone",
            Self::Low => "Low Priority Zone",
        }
    }

    pub const fn zone_color(self) -> &'static str {
        match self {
            Self::High => "#28a745",
            Self::Medium => "#ffc107",
            Self::Low => "#dc3545",
        }
    }

    pub const fn gauge_color(self) -> &'static str {
        match self {
            Self::High => "#d4edda",
            Self::Medium => "#fff3cd",
            Self::Low => "#f8d7da",
        }
    }
}

/// Stateless mapper from probability to tier, narrative and chart.
#[derive(Debug, Clone, Default)]
pub struct SegmentationEngine {
    config: SegmentationConfig,
}

impl SegmentationEngine {
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Lower bounds are inclusive: a probability equal to a threshold lands in
    /// the higher tier.
    pub fn tier(&self, probability: Probability) -> PriorityTier {
        let p = probability.value();
        if p >= self.config.high() {
            PriorityTier::High
        } else if p >= self.config.medium() {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn report(&self, probability: Probability) -> SegmentationReport {
        let tier = self.tier(probability);
        SegmentationReport {
            probability,
            probability_label: probability.percent_label(),
            tier,
            narrative: narrative_for(tier),
            chart: threshold_chart(&self.config, probability),
            takeaway: &EXECUTIVE_TAKEAWAY,
        }
    }

    /// Interpretation for whatever probability the caller has cached.
    pub fn interpret(&self, latest: Option<Probability>) -> Interpretation {
        match latest {
            Some(probability) => Interpretation::Ready(Box::new(self.report(probability))),
            None => Interpretation::Pending {
                message: PENDING_INTERPRETATION,
            },
        }
    }

    pub fn gauge(&self, probability: Probability) -> GaugeChart {
        gauge_chart(&self.config, probability)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentationReport {
    pub probability: Probability,
    pub probability_label: String,
    pub tier: PriorityTier,
    pub narrative: &'static TierNarrative,
    pub chart: ThresholdChart,
    pub takeaway: &'static ExecutiveTakeaway,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Interpretation {
    Pending { message: &'static str },
    Ready(Box<SegmentationReport>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(value: f64) -> Probability {
        Probability::new(value).expect("valid probability")
    }

    #[test]
    fn tiers_cover_the_unit_interval() {
        let engine = SegmentationEngine::default();
        assert_eq!(engine.tier(p(0.0)), PriorityTier::Low);
        assert_eq!(engine.tier(p(0.3499)), PriorityTier::Low);
        assert_eq!(engine.tier(p(0.35)), PriorityTier::Medium);
        assert_eq!(engine.tier(p(0.5999)), PriorityTier::Medium);
        assert_eq!(engine.tier(p(0.60)), PriorityTier::High);
        assert_eq!(engine.tier(p(1.0)), PriorityTier::High);
    }

    #[test]
    fn custom_thresholds_move_the_boundaries() {
        let config = SegmentationConfig::new(0.2, 0.8).expect("valid thresholds");
        let engine = SegmentationEngine::new(config);
        assert_eq!(engine.tier(p(0.35)), PriorityTier::Medium);
        assert_eq!(engine.tier(p(0.79)), PriorityTier::Medium);
        assert_eq!(engine.tier(p(0.8)), PriorityTier::High);

        let chart = engine.report(p(0.5)).chart;
        assert!((chart.bands[0].top() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn report_is_idempotent() {
        let engine = SegmentationEngine::default();
        assert_eq!(engine.report(p(0.42)), engine.report(p(0.42)));
    }

    #[test]
    fn pending_interpretation_without_prediction() {
        let engine = SegmentationEngine::default();
        match engine.interpret(None) {
            Interpretation::Pending { message } => assert!(message.contains("Run prediction")),
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn narrative_matches_tier() {
        let engine = SegmentationEngine::default();
        let report = engine.report(p(0.61));
        assert_eq!(report.tier, PriorityTier::High);
        assert_eq!(report.narrative.tier, PriorityTier::High);
        assert_eq!(report.narrative.tone, Tone::Success);
        assert_eq!(report.probability_label, "61.00%");
    }
}
