use super::config::SegmentationConfig;
use super::PriorityTier;
use crate::scoring::Probability;
use serde::Serialize;

pub const AXIS_MIN: f64 = 0.0;
pub const AXIS_MAX: f64 = 100.0;

/// Gap between the marker line and its annotation, in axis units.
const ANNOTATION_OFFSET: f64 = 2.0;

/// One coloured zone on a 0..100 probability axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBand {
    pub tier: PriorityTier,
    pub name: &'static str,
    pub base: f64,
    pub height: f64,
    pub color: &'static str,
}

impl ChartBand {
    pub fn top(&self) -> f64 {
        self.base + self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerLine {
    pub y: f64,
    pub color: &'static str,
    pub width: u8,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub y: f64,
    pub text: String,
}

/// Stacked priority zones with the customer's position marked on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdChart {
    pub title: &'static str,
    pub y_axis_title: &'static str,
    pub bands: Vec<ChartBand>,
    pub marker: MarkerLine,
    pub annotation: Annotation,
}

/// Coloured step of the gauge dial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeStep {
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeChart {
    pub title: &'static str,
    pub value: f64,
    pub suffix: &'static str,
    pub bar_color: &'static str,
    pub steps: Vec<GaugeStep>,
}

fn tier_edges(config: &SegmentationConfig) -> [(PriorityTier, f64, f64); 3] {
    let medium = config.medium() * AXIS_MAX;
    let high = config.high() * AXIS_MAX;
    [
        (PriorityTier::Low, AXIS_MIN, medium),
        (PriorityTier::Medium, medium, high),
        (PriorityTier::High, high, AXIS_MAX),
    ]
}

pub fn threshold_chart(config: &SegmentationConfig, probability: Probability) -> ThresholdChart {
    let bands = tier_edges(config)
        .into_iter()
        .map(|(tier, from, to)| ChartBand {
            tier,
            name: tier.zone_name(),
            base: from,
            height: to - from,
            color: tier.zone_color(),
        })
        .collect();

    let y = probability.percent();

    ThresholdChart {
        title: "Customer Position Relative to Business Decision Threshold",
        y_axis_title: "Probability (%)",
        bands,
        marker: MarkerLine {
            y,
            color: "black",
            width: 3,
            dashed: true,
        },
        annotation: Annotation {
            y: (y + ANNOTATION_OFFSET).min(AXIS_MAX),
            text: format!("Customer Probability: {}", probability.percent_label()),
        },
    }
}

pub fn gauge_chart(config: &SegmentationConfig, probability: Probability) -> GaugeChart {
    let steps = tier_edges(config)
        .into_iter()
        .map(|(tier, from, to)| GaugeStep {
            from,
            to,
            color: tier.gauge_color(),
        })
        .collect();

    GaugeChart {
        title: "Conversion Probability",
        value: probability.percent(),
        suffix: "%",
        bar_color: "#1f77b4",
        steps,
    }
}
