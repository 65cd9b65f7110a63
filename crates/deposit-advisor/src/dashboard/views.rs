use crate::customer::{customer_fields, CustomerInput, CustomerRecord, FieldSpec};
use crate::scoring::{ModelDescription, Probability};
use crate::segmentation::{GaugeChart, Interpretation, PriorityTier};
use serde::Serialize;

pub const PAGE_TITLE: &str = "Bank Term Deposit Prediction Dashboard";
pub const PAGE_SUBTITLE: &str = "Decision Support System for Telemarketing Campaign Optimization";
pub const AWAITING_INPUT: &str = "Please input customer data and click Predict Potential.";
pub const MODEL_DISCLAIMER: &str = "This tool supports decision-making, not replaces it.";
pub const FOOTER: &str = "Bank Marketing Prediction | Term Deposit Decision Support";

/// Card in the information bar under the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const INFO_BAR: [InfoCard; 3] = [
    InfoCard {
        title: "Business Objective",
        body: "Optimize telemarketing campaign efficiency by identifying high-potential customers before contact is made.",
    },
    InfoCard {
        title: "Model Focus",
        body: "Prediction model optimized for precision, prioritizing quality of leads over call volume.",
    },
    InfoCard {
        title: "Important Note",
        body: "Call duration is excluded to prevent data leakage and ensure fair real-world inference.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Prediction,
    Interpretation,
    ModelInfo,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Prediction, Tab::Interpretation, Tab::ModelInfo];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Prediction => "Prediction Result",
            Self::Interpretation => "Business Interpretation",
            Self::ModelInfo => "Model Info",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Prediction => "prediction",
            Self::Interpretation => "interpretation",
            Self::ModelInfo => "model-info",
        }
    }
}

/// Sidebar widget with the value it currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub spec: FieldSpec,
    pub value: String,
}

pub fn form_fields(input: &CustomerInput) -> Vec<FieldView> {
    customer_fields()
        .into_iter()
        .map(|spec| {
            let value = input.value_of(spec.name).unwrap_or_default();
            FieldView { spec, value }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub campaign_contacts: u32,
    pub days_since_last_contact: i32,
    pub profile: Vec<(&'static str, String)>,
    pub probability: Probability,
    pub probability_label: String,
    pub tier: PriorityTier,
    pub gauge: GaugeChart,
}

impl PredictionView {
    pub fn new(
        record: &CustomerRecord,
        probability: Probability,
        tier: PriorityTier,
        gauge: GaugeChart,
    ) -> Self {
        Self {
            campaign_contacts: record.campaign,
            days_since_last_contact: record.pdays,
            profile: record.columns(),
            probability,
            probability_label: probability.percent_label(),
            tier,
            gauge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PredictionPanel {
    AwaitingInput { message: &'static str },
    Scored(Box<PredictionView>),
}

impl PredictionPanel {
    pub fn awaiting() -> Self {
        Self::AwaitingInput {
            message: AWAITING_INPUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfoPanel {
    pub description: ModelDescription,
    pub disclaimer: &'static str,
}

/// Everything one page render needs.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub fields: Vec<FieldView>,
    pub prediction: PredictionPanel,
    pub interpretation: Interpretation,
    pub model_info: ModelInfoPanel,
    pub active_tab: Tab,
}
