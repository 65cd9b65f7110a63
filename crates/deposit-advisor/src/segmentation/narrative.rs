use super::PriorityTier;
use serde::Serialize;

/// Alert style a narrative block is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Error,
}

/// Pre-authored guidance shown for a priority tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierNarrative {
    pub tier: PriorityTier,
    pub tone: Tone,
    pub headline: &'static str,
    pub zone: &'static str,
    pub key_insight: &'static [&'static str],
    pub business_implication: &'static [&'static str],
    pub recommended_action: &'static [&'static str],
}

static HIGH: TierNarrative = TierNarrative {
    tier: PriorityTier::High,
    tone: Tone::Success,
    headline: "HIGH PRIORITY SEGMENT",
    zone: "Revenue Acceleration Zone",
    key_insight: &[
        "The customer's history closely resembles customers who went on to open a term deposit.",
        "The model is highly confident in the conversion potential.",
    ],
    business_implication: &[
        "Every call in this segment carries a positive expected value.",
        "Risk of wasted telemarketing spend is low.",
        "Contributes directly to higher conversion rate and campaign ROI.",
    ],
    recommended_action: &[
        "Make this customer a top priority in the running campaign.",
        "Assign the strongest telemarketers and premium contact hours.",
        "Well suited to campaigns with aggressive revenue targets.",
    ],
};

static MEDIUM: TierNarrative = TierNarrative {
    tier: PriorityTier::Medium,
    tone: Tone::Warning,
    headline: "MEDIUM PRIORITY SEGMENT",
    zone: "Optimization & Selective Growth Zone",
    key_insight: &[
        "The customer shows conversion potential, but the signal is not yet strong.",
        "The outcome depends heavily on communication approach and timing.",
    ],
    business_implication: &[
        "False positive risk is moderate.",
        "Effective for filling idle telemarketing capacity.",
        "Fits experimental or retention campaigns.",
    ],
    recommended_action: &[
        "Contact selectively and on a schedule.",
        "Use a more personal communication script.",
        "Monitor performance closely to re-evaluate the threshold later.",
    ],
};

static LOW: TierNarrative = TierNarrative {
    tier: PriorityTier::Low,
    tone: Tone::Error,
    headline: "LOW PRIORITY SEGMENT",
    zone: "Cost Avoidance & Risk Control Zone",
    key_insight: &[
        "Historical patterns show a low conversion success rate.",
        "There is no strong indicator that direct contact would be effective.",
    ],
    business_implication: &[
        "Telemarketing in this segment tends to produce negative ROI.",
        "Risk of over-contacting and degraded customer experience increases.",
    ],
    recommended_action: &[
        "Avoid direct telemarketing.",
        "Route to low-cost channels (email, SMS, digital nurturing).",
        "Keep for long-term campaigns or product education.",
    ],
};

pub fn narrative_for(tier: PriorityTier) -> &'static TierNarrative {
    match tier {
        PriorityTier::High => &HIGH,
        PriorityTier::Medium => &MEDIUM,
        PriorityTier::Low => &LOW,
    }
}

/// Closing summary shown under every interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutiveTakeaway {
    pub title: &'static str,
    pub purpose: &'static str,
    pub goals: &'static [&'static str],
    pub closing: &'static str,
}

pub static EXECUTIVE_TAKEAWAY: ExecutiveTakeaway = ExecutiveTakeaway {
    title: "Executive Takeaway",
    purpose: "This application is a Decision Support System for management, aimed at:",
    goals: &[
        "Identifying high-priority customers before the campaign starts",
        "Optimizing telemarketing resource allocation",
        "Raising conversion rate without increasing operating cost",
        "Reducing false positive risk and customer fatigue",
    ],
    closing: "The model is tuned for precision, so every call placed has a higher probability of success.",
};
