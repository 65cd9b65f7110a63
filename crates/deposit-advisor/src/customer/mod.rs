//! Customer attributes captured by the sidebar and assembled into a scoring record.

mod assembler;
pub mod domain;

pub use assembler::{
    customer_fields, CustomerInput, FieldSpec, NumberBounds, WidgetKind, AGE_BOUNDS,
    BALANCE_BOUNDS, CAMPAIGN_BOUNDS, PDAYS_BOUNDS, PREVIOUS_BOUNDS,
};
pub use domain::{
    ClosedSet, ContactChannel, ContactMonth, CustomerRecord, Education, Job, MaritalStatus,
    PreviousOutcome, YesNo, CATEGORICAL_FEATURES, NEVER_CONTACTED, NUMERIC_FEATURES,
};
