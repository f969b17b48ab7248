//! Avion Capital lead-capture core
//!
//! This crate holds the state behind the "Apply for Financing" dialog: the
//! application form, the arithmetic challenge, the dialog state machine, the
//! submission gate and the submission handler. It has no UI dependency so the
//! whole lifecycle can be driven and tested without a browser.

pub mod carousel;
pub mod challenge;
pub mod choices;
pub mod delivery;
pub mod dialog;
pub mod form;
pub mod gate;
pub mod session;

use thiserror::Error;

pub use carousel::Carousel;
pub use challenge::{Challenge, ChallengeStatus};
pub use choices::{AmountRange, AnnualRevenue, FinancingType, Industry, TimeInBusiness};
pub use delivery::{LeadDelivery, LoggingDelivery};
pub use dialog::DialogState;
pub use form::{ApplicationForm, FieldUpdate, Lead};
pub use gate::submission_enabled;
pub use session::{ApplicationSession, Confirmation};

/// Reasons a submission is blocked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please solve the math problem correctly to verify you're human.")]
    ChallengeUnsolved,

    #[error("Please agree to be contacted regarding your financing application.")]
    TermsNotAccepted,

    #[error("Please fill in the required field: {0}")]
    MissingField(&'static str),
}

#[derive(Error, Debug)]
pub enum LeadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type LeadResult<T> = Result<T, LeadError>;
