//! Application form state and the lead snapshot built from it

use serde::{Deserialize, Serialize};

use crate::choices::{AmountRange, AnnualRevenue, FinancingType, Industry, TimeInBusiness};
use crate::ValidationError;

/// Field values of the financing application as the visitor edits them.
///
/// Nothing is validated while editing; see [`Lead::try_from`] for the
/// submit-time checks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    company: String,
    industry: Option<Industry>,
    financing_type: Option<FinancingType>,
    amount: Option<AmountRange>,
    time_in_business: Option<TimeInBusiness>,
    annual_revenue: Option<AnnualRevenue>,
    description: String,
    agree_to_terms: bool,
}

/// A single edit to one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Company(String),
    Industry(Option<Industry>),
    FinancingType(Option<FinancingType>),
    Amount(Option<AmountRange>),
    TimeInBusiness(Option<TimeInBusiness>),
    AnnualRevenue(Option<AnnualRevenue>),
    Description(String),
    AgreeToTerms(bool),
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::FirstName(v) => self.first_name = v,
            FieldUpdate::LastName(v) => self.last_name = v,
            FieldUpdate::Email(v) => self.email = v,
            FieldUpdate::Phone(v) => self.phone = v,
            FieldUpdate::Company(v) => self.company = v,
            FieldUpdate::Industry(v) => self.industry = v,
            FieldUpdate::FinancingType(v) => self.financing_type = v,
            FieldUpdate::Amount(v) => self.amount = v,
            FieldUpdate::TimeInBusiness(v) => self.time_in_business = v,
            FieldUpdate::AnnualRevenue(v) => self.annual_revenue = v,
            FieldUpdate::Description(v) => self.description = v,
            FieldUpdate::AgreeToTerms(v) => self.agree_to_terms = v,
        }
    }

    /// Restore every field to its empty value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn industry(&self) -> Option<Industry> {
        self.industry
    }

    pub fn financing_type(&self) -> Option<FinancingType> {
        self.financing_type
    }

    pub fn amount(&self) -> Option<AmountRange> {
        self.amount
    }

    pub fn time_in_business(&self) -> Option<TimeInBusiness> {
        self.time_in_business
    }

    pub fn annual_revenue(&self) -> Option<AnnualRevenue> {
        self.annual_revenue
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn agree_to_terms(&self) -> bool {
        self.agree_to_terms
    }
}

/// Snapshot of a completed application, handed to a [`crate::LeadDelivery`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: Industry,
    pub financing_type: FinancingType,
    pub amount: Option<AmountRange>,
    pub time_in_business: Option<TimeInBusiness>,
    pub annual_revenue: Option<AnnualRevenue>,
    pub description: String,
    pub agree_to_terms: bool,
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value.to_string())
}

impl TryFrom<&ApplicationForm> for Lead {
    type Error = ValidationError;

    fn try_from(form: &ApplicationForm) -> Result<Self, Self::Error> {
        Ok(Lead {
            first_name: required(&form.first_name, "First Name")?,
            last_name: required(&form.last_name, "Last Name")?,
            email: required(&form.email, "Email")?,
            phone: required(&form.phone, "Phone")?,
            company: required(&form.company, "Company Name")?,
            industry: form.industry.ok_or(ValidationError::MissingField("Industry"))?,
            financing_type: form
                .financing_type
                .ok_or(ValidationError::MissingField("Financing Type"))?,
            amount: form.amount,
            time_in_business: form.time_in_business,
            annual_revenue: form.annual_revenue,
            description: form.description.trim().to_string(),
            agree_to_terms: form.agree_to_terms,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Form with every required field filled in and terms accepted
    pub(crate) fn complete_form() -> ApplicationForm {
        let mut form = ApplicationForm::new();
        for update in [
            FieldUpdate::FirstName("Dana".into()),
            FieldUpdate::LastName("Okafor".into()),
            FieldUpdate::Email("dana@northlinefreight.ca".into()),
            FieldUpdate::Phone("416-555-0182".into()),
            FieldUpdate::Company("Northline Freight".into()),
            FieldUpdate::Industry(Some(Industry::Trucking)),
            FieldUpdate::FinancingType(Some(FinancingType::Factoring)),
            FieldUpdate::AgreeToTerms(true),
        ] {
            form.apply(update);
        }
        form
    }

    #[test]
    fn test_apply_sets_only_the_named_field() {
        let mut form = ApplicationForm::new();
        form.apply(FieldUpdate::Company("Northline Freight".into()));
        assert_eq!(form.company(), "Northline Freight");
        assert_eq!(form.first_name(), "");
        assert!(!form.agree_to_terms());
    }

    #[test]
    fn test_later_update_overwrites_earlier() {
        let mut form = ApplicationForm::new();
        form.apply(FieldUpdate::Amount(Some(AmountRange::From10kTo50k)));
        form.apply(FieldUpdate::Amount(Some(AmountRange::Over5m)));
        assert_eq!(form.amount(), Some(AmountRange::Over5m));
        form.apply(FieldUpdate::Amount(None));
        assert_eq!(form.amount(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = complete_form();
        form.apply(FieldUpdate::Description("Two reefer trailers".into()));
        assert!(!form.is_empty());
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form, ApplicationForm::default());
    }

    #[test]
    fn test_lead_from_complete_form() {
        let mut form = complete_form();
        form.apply(FieldUpdate::FirstName("  Dana ".into()));
        form.apply(FieldUpdate::TimeInBusiness(Some(TimeInBusiness::TwoToFiveYears)));
        let lead = Lead::try_from(&form).unwrap();
        assert_eq!(lead.first_name, "Dana");
        assert_eq!(lead.industry, Industry::Trucking);
        assert_eq!(lead.time_in_business, Some(TimeInBusiness::TwoToFiveYears));
        assert_eq!(lead.amount, None);
        assert!(lead.agree_to_terms);
    }

    #[test]
    fn test_lead_requires_identity_fields() {
        let mut form = complete_form();
        form.apply(FieldUpdate::Email("   ".into()));
        assert_eq!(Lead::try_from(&form), Err(ValidationError::MissingField("Email")));
    }

    #[test]
    fn test_lead_requires_classification() {
        let mut form = complete_form();
        form.apply(FieldUpdate::FinancingType(None));
        assert_eq!(
            Lead::try_from(&form),
            Err(ValidationError::MissingField("Financing Type"))
        );
    }

    #[test]
    fn test_lead_serializes_with_form_field_names() {
        let mut form = complete_form();
        form.apply(FieldUpdate::AnnualRevenue(Some(AnnualRevenue::From1mTo2m)));
        let json = serde_json::to_value(Lead::try_from(&form).unwrap()).unwrap();
        assert_eq!(json["firstName"], "Dana");
        assert_eq!(json["financingType"], "factoring");
        assert_eq!(json["annualRevenue"], "1m-2m");
        assert_eq!(json["agreeToTerms"], true);
        assert!(json["amount"].is_null());
    }
}
