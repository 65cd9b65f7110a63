use super::domain::{
    ClosedSet, ContactChannel, ContactMonth, CustomerRecord, Education, Job, MaritalStatus,
    PreviousOutcome, YesNo, NEVER_CONTACTED,
};
use serde::{Deserialize, Serialize};

/// Range constraint declared by a numeric input widget. Any integer inside
/// the range is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberBounds {
    pub min: i64,
    pub max: Option<i64>,
}

impl NumberBounds {
    pub const fn new(min: i64, max: Option<i64>) -> Self {
        Self { min, max }
    }

    /// Pull a value back into the range the widget accepts.
    pub fn clamp(&self, value: i64) -> i64 {
        let upper = self.max.unwrap_or(i64::from(i32::MAX));
        value.clamp(self.min, upper)
    }
}

pub const AGE_BOUNDS: NumberBounds = NumberBounds::new(18, Some(100));
pub const BALANCE_BOUNDS: NumberBounds = NumberBounds::new(-10_000, Some(150_000));
pub const CAMPAIGN_BOUNDS: NumberBounds = NumberBounds::new(1, None);
pub const PDAYS_BOUNDS: NumberBounds = NumberBounds::new(NEVER_CONTACTED as i64, None);
pub const PREVIOUS_BOUNDS: NumberBounds = NumberBounds::new(0, None);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    Number(NumberBounds),
    Select(Vec<&'static str>),
}

/// Declarative description of one sidebar input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub help: Option<&'static str>,
    pub widget: WidgetKind,
}

impl FieldSpec {
    fn number(name: &'static str, label: &'static str, bounds: NumberBounds) -> Self {
        Self {
            name,
            label,
            help: None,
            widget: WidgetKind::Number(bounds),
        }
    }

    fn select<T: ClosedSet>(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            help: None,
            widget: WidgetKind::Select(T::options().iter().map(|o| o.as_str()).collect()),
        }
    }

    fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

/// Sidebar inputs in display order.
pub fn customer_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("age", "Age", AGE_BOUNDS),
        FieldSpec::select::<Job>("job", "Job"),
        FieldSpec::select::<MaritalStatus>("marital", "Marital Status"),
        FieldSpec::select::<Education>("education", "Education"),
        FieldSpec::number("balance", "Average Yearly Balance (€)", BALANCE_BOUNDS),
        FieldSpec::select::<YesNo>("default", "Credit in Default?"),
        FieldSpec::select::<YesNo>("housing", "Housing Loan"),
        FieldSpec::select::<YesNo>("loan", "Personal Loan"),
        FieldSpec::select::<ContactChannel>("contact", "Contact Type"),
        FieldSpec::select::<ContactMonth>("month", "Last Contact Month"),
        FieldSpec::number(
            "campaign",
            "Number of Contacts (Current Campaign)",
            CAMPAIGN_BOUNDS,
        ),
        FieldSpec::number("pdays", "Days Since Last Contact", PDAYS_BOUNDS)
            .with_help("-1 means customer has not been contacted before"),
        FieldSpec::number("previous", "Number of Previous Contacts", PREVIOUS_BOUNDS),
        FieldSpec::select::<PreviousOutcome>("poutcome", "Previous Campaign Outcome"),
    ]
}

/// Raw widget state as posted by the sidebar form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub age: i64,
    pub job: Job,
    pub marital: MaritalStatus,
    pub education: Education,
    #[serde(rename = "default")]
    pub credit_default: YesNo,
    pub balance: i64,
    pub housing: YesNo,
    pub loan: YesNo,
    pub contact: ContactChannel,
    pub month: ContactMonth,
    pub campaign: i64,
    pub pdays: i64,
    pub previous: i64,
    pub poutcome: PreviousOutcome,
}

impl Default for CustomerInput {
    fn default() -> Self {
        Self {
            age: 35,
            job: Job::Admin,
            marital: MaritalStatus::Married,
            education: Education::Primary,
            credit_default: YesNo::Yes,
            balance: 1000,
            housing: YesNo::Yes,
            loan: YesNo::Yes,
            contact: ContactChannel::Cellular,
            month: ContactMonth::Jan,
            campaign: 1,
            pdays: i64::from(NEVER_CONTACTED),
            previous: 0,
            poutcome: PreviousOutcome::Success,
        }
    }
}

impl CustomerInput {
    /// Current widget value rendered back into the form.
    pub fn value_of(&self, field: &str) -> Option<String> {
        let value = match field {
            "age" => self.age.to_string(),
            "job" => self.job.as_str().to_string(),
            "marital" => self.marital.as_str().to_string(),
            "education" => self.education.as_str().to_string(),
            "default" => self.credit_default.as_str().to_string(),
            "balance" => self.balance.to_string(),
            "housing" => self.housing.as_str().to_string(),
            "loan" => self.loan.as_str().to_string(),
            "contact" => self.contact.as_str().to_string(),
            "month" => self.month.as_str().to_string(),
            "campaign" => self.campaign.to_string(),
            "pdays" => self.pdays.to_string(),
            "previous" => self.previous.to_string(),
            "poutcome" => self.poutcome.as_str().to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Builds the record to score. Infallible: options are closed types and
    /// numbers are held to the ranges their widgets declare.
    pub fn assemble(&self) -> CustomerRecord {
        CustomerRecord {
            age: AGE_BOUNDS.clamp(self.age) as u8,
            job: self.job,
            marital: self.marital,
            education: self.education,
            credit_default: self.credit_default,
            balance: BALANCE_BOUNDS.clamp(self.balance),
            housing: self.housing,
            loan: self.loan,
            contact: self.contact,
            month: self.month,
            campaign: CAMPAIGN_BOUNDS.clamp(self.campaign) as u32,
            pdays: PDAYS_BOUNDS.clamp(self.pdays) as i32,
            previous: PREVIOUS_BOUNDS.clamp(self.previous) as u32,
            poutcome: self.poutcome,
        }
    }
}
