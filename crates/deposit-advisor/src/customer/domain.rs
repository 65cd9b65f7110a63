use serde::{Deserialize, Serialize};

/// Closed option set backing a select widget and a categorical model feature.
pub trait ClosedSet: Copy + Sized + 'static {
    /// Every option in display order. The first entry is the widget default.
    fn options() -> &'static [Self];
    /// Wire value as it appears in the training data and the form payload.
    fn as_str(self) -> &'static str;

    fn parse(raw: &str) -> Option<Self> {
        Self::options()
            .iter()
            .copied()
            .find(|option| option.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    #[serde(rename = "admin.")]
    Admin,
    #[serde(rename = "blue-collar")]
    BlueCollar,
    #[serde(rename = "entrepreneur")]
    Entrepreneur,
    #[serde(rename = "housemaid")]
    Housemaid,
    #[serde(rename = "management")]
    Management,
    #[serde(rename = "retired")]
    Retired,
    #[serde(rename = "self-employed")]
    SelfEmployed,
    #[serde(rename = "services")]
    Services,
    #[serde(rename = "student")]
    Student,
    #[serde(rename = "technician")]
    Technician,
    #[serde(rename = "unemployed")]
    Unemployed,
    #[serde(rename = "unknown")]
    Unknown,
}

impl ClosedSet for Job {
    fn options() -> &'static [Self] {
        &[
            Self::Admin,
            Self::BlueCollar,
            Self::Entrepreneur,
            Self::Housemaid,
            Self::Management,
            Self::Retired,
            Self::SelfEmployed,
            Self::Services,
            Self::Student,
            Self::Technician,
            Self::Unemployed,
            Self::Unknown,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin.",
            Self::BlueCollar => "blue-collar",
            Self::Entrepreneur => "entrepreneur",
            Self::Housemaid => "housemaid",
            Self::Management => "management",
            Self::Retired => "retired",
            Self::SelfEmployed => "self-employed",
            Self::Services => "services",
            Self::Student => "student",
            Self::Technician => "technician",
            Self::Unemployed => "unemployed",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Married,
    Single,
    Divorced,
}

impl ClosedSet for MaritalStatus {
    fn options() -> &'static [Self] {
        &[Self::Married, Self::Single, Self::Divorced]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Married => "married",
            Self::Single => "single",
            Self::Divorced => "divorced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Education {
    Primary,
    Secondary,
    Tertiary,
    Unknown,
}

impl ClosedSet for Education {
    fn options() -> &'static [Self] {
        &[Self::Primary, Self::Secondary, Self::Tertiary, Self::Unknown]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Unknown => "unknown",
        }
    }
}

/// Answer for the credit default, housing loan and personal loan flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl ClosedSet for YesNo {
    fn options() -> &'static [Self] {
        &[Self::Yes, Self::No]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactChannel {
    Cellular,
    Telephone,
    Unknown,
}

impl ClosedSet for ContactChannel {
    fn options() -> &'static [Self] {
        &[Self::Cellular, Self::Telephone, Self::Unknown]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Cellular => "cellular",
            Self::Telephone => "telephone",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMonth {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl ClosedSet for ContactMonth {
    fn options() -> &'static [Self] {
        &[
            Self::Jan,
            Self::Feb,
            Self::Mar,
            Self::Apr,
            Self::May,
            Self::Jun,
            Self::Jul,
            Self::Aug,
            Self::Sep,
            Self::Oct,
            Self::Nov,
            Self::Dec,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Jan => "jan",
            Self::Feb => "feb",
            Self::Mar => "mar",
            Self::Apr => "apr",
            Self::May => "may",
            Self::Jun => "jun",
            Self::Jul => "jul",
            Self::Aug => "aug",
            Self::Sep => "sep",
            Self::Oct => "oct",
            Self::Nov => "nov",
            Self::Dec => "dec",
        }
    }
}

/// Outcome of the previous marketing campaign for this customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviousOutcome {
    Success,
    Failure,
    Other,
    Unknown,
}

impl ClosedSet for PreviousOutcome {
    fn options() -> &'static [Self] {
        &[Self::Success, Self::Failure, Self::Other, Self::Unknown]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Other => "other",
            Self::Unknown => "unknown",
        }
    }
}

/// `pdays` value recorded for customers never reached by a previous campaign.
pub const NEVER_CONTACTED: i32 = -1;

/// Numeric model features, in training column order.
pub const NUMERIC_FEATURES: [&str; 5] = ["age", "balance", "campaign", "pdays", "previous"];

/// Categorical model features, in training column order.
pub const CATEGORICAL_FEATURES: [&str; 9] = [
    "job",
    "marital",
    "education",
    "default",
    "housing",
    "loan",
    "contact",
    "month",
    "poutcome",
];

/// One prospective customer, as scored by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRecord {
    pub age: u8,
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
    pub campaign: u32,
    pub pdays: i32,
    pub previous: u32,
    pub poutcome: PreviousOutcome,
}

impl CustomerRecord {
    pub fn numeric(&self, feature: &str) -> Option<f64> {
        match feature {
            "age" => Some(f64::from(self.age)),
            "balance" => Some(self.balance as f64),
            "campaign" => Some(f64::from(self.campaign)),
            "pdays" => Some(f64::from(self.pdays)),
            "previous" => Some(f64::from(self.previous)),
            _ => None,
        }
    }

    pub fn categorical(&self, feature: &str) -> Option<&'static str> {
        match feature {
            "job" => Some(self.job.as_str()),
            "marital" => Some(self.marital.as_str()),
            "education" => Some(self.education.as_str()),
            "default" => Some(self.credit_default.as_str()),
            "housing" => Some(self.housing.as_str()),
            "loan" => Some(self.loan.as_str()),
            "contact" => Some(self.contact.as_str()),
            "month" => Some(self.month.as_str()),
            "poutcome" => Some(self.poutcome.as_str()),
            _ => None,
        }
    }

    /// Column/value pairs in training column order, for the profile echo.
    pub fn columns(&self) -> Vec<(&'static str, String)> {
        vec![
            ("age", self.age.to_string()),
            ("job", self.job.as_str().to_string()),
            ("marital", self.marital.as_str().to_string()),
            ("education", self.education.as_str().to_string()),
            ("default", self.credit_default.as_str().to_string()),
            ("balance", self.balance.to_string()),
            ("housing", self.housing.as_str().to_string()),
            ("loan", self.loan.as_str().to_string()),
            ("contact", self.contact.as_str().to_string()),
            ("month", self.month.as_str().to_string()),
            ("campaign", self.campaign.to_string()),
            ("pdays", self.pdays.to_string()),
            ("previous", self.previous.to_string()),
            ("poutcome", self.poutcome.as_str().to_string()),
        ]
    }
}
