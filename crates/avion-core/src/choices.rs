//! Fixed option sets offered by the application form
//!
//! Every option has a stable id, used as the `<option value>` and in the
//! serialized lead, and a display label.

use serde::{Deserialize, Serialize};

/// Industry the applicant operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Trucking,
    Construction,
    Staffing,
    Hospitality,
    Aviation,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Trucking,
        Industry::Construction,
        Industry::Staffing,
        Industry::Hospitality,
        Industry::Aviation,
        Industry::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Industry::Trucking => "trucking",
            Industry::Construction => "construction",
            Industry::Staffing => "staffing",
            Industry::Hospitality => "hospitality",
            Industry::Aviation => "aviation",
            Industry::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Trucking => "Trucking & Logistics",
            Industry::Construction => "Construction & Trades",
            Industry::Staffing => "Staffing & Payroll Services",
            Industry::Hospitality => "Hospitality & Food Services",
            Industry::Aviation => "Aviation",
            Industry::Other => "Other",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }
}

/// Kind of financing requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancingType {
    Equipment,
    Factoring,
    Loan,
    Unsure,
}

impl FinancingType {
    pub const ALL: [FinancingType; 4] = [
        FinancingType::Equipment,
        FinancingType::Factoring,
        FinancingType::Loan,
        FinancingType::Unsure,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FinancingType::Equipment => "equipment",
            FinancingType::Factoring => "factoring",
            FinancingType::Loan => "loan",
            FinancingType::Unsure => "unsure",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FinancingType::Equipment => "Equipment Leasing & Financing",
            FinancingType::Factoring => "Invoice Factoring",
            FinancingType::Loan => "Secured Business Loan",
            FinancingType::Unsure => "Not Sure",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }
}

/// Amount of financing needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountRange {
    #[serde(rename = "10k-50k")]
    From10kTo50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k-250k")]
    From100kTo250k,
    #[serde(rename = "250k-500k")]
    From250kTo500k,
    #[serde(rename = "500k-1m")]
    From500kTo1m,
    #[serde(rename = "1m-5m")]
    From1mTo5m,
    #[serde(rename = "5m+")]
    Over5m,
}

impl AmountRange {
    pub const ALL: [AmountRange; 7] = [
        AmountRange::From10kTo50k,
        AmountRange::From50kTo100k,
        AmountRange::From100kTo250k,
        AmountRange::From250kTo500k,
        AmountRange::From500kTo1m,
        AmountRange::From1mTo5m,
        AmountRange::Over5m,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AmountRange::From10kTo50k => "10k-50k",
            AmountRange::From50kTo100k => "50k-100k",
            AmountRange::From100kTo250k => "100k-250k",
            AmountRange::From250kTo500k => "250k-500k",
            AmountRange::From500kTo1m => "500k-1m",
            AmountRange::From1mTo5m => "1m-5m",
            AmountRange::Over5m => "5m+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AmountRange::From10kTo50k => "$10K - $50K",
            AmountRange::From50kTo100k => "$50K - $100K",
            AmountRange::From100kTo250k => "$100K - $250K",
            AmountRange::From250kTo500k => "$250K - $500K",
            AmountRange::From500kTo1m => "$500K - $1M",
            AmountRange::From1mTo5m => "$1M - $5M",
            AmountRange::Over5m => "$5M+",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }
}

/// How long the business has been operating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInBusiness {
    #[serde(rename = "startup")]
    Startup,
    #[serde(rename = "1-2")]
    OneToTwoYears,
    #[serde(rename = "2-5")]
    TwoToFiveYears,
    #[serde(rename = "5-10")]
    FiveToTenYears,
    #[serde(rename = "10+")]
    OverTenYears,
}

impl TimeInBusiness {
    pub const ALL: [TimeInBusiness; 5] = [
        TimeInBusiness::Startup,
        TimeInBusiness::OneToTwoYears,
        TimeInBusiness::TwoToFiveYears,
        TimeInBusiness::FiveToTenYears,
        TimeInBusiness::OverTenYears,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TimeInBusiness::Startup => "startup",
            TimeInBusiness::OneToTwoYears => "1-2",
            TimeInBusiness::TwoToFiveYears => "2-5",
            TimeInBusiness::FiveToTenYears => "5-10",
            TimeInBusiness::OverTenYears => "10+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeInBusiness::Startup => "Startup (Less than 1 year)",
            TimeInBusiness::OneToTwoYears => "1-2 years",
            TimeInBusiness::TwoToFiveYears => "2-5 years",
            TimeInBusiness::FiveToTenYears => "5-10 years",
            TimeInBusiness::OverTenYears => "10+ years",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }
}

/// Annual revenue bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnualRevenue {
    #[serde(rename = "under-100k")]
    Under100k,
    #[serde(rename = "100k-250k")]
    From100kTo250k,
    #[serde(rename = "250k-500k")]
    From250kTo500k,
    #[serde(rename = "500k-1m")]
    From500kTo1m,
    #[serde(rename = "1m-2m")]
    From1mTo2m,
    #[serde(rename = "2m-5m")]
    From2mTo5m,
    #[serde(rename = "5m-10m")]
    From5mTo10m,
    #[serde(rename = "10m+")]
    Over10m,
}

impl AnnualRevenue {
    pub const ALL: [AnnualRevenue; 8] = [
        AnnualRevenue::Under100k,
        AnnualRevenue::From100kTo250k,
        AnnualRevenue::From250kTo500k,
        AnnualRevenue::From500kTo1m,
        AnnualRevenue::From1mTo2m,
        AnnualRevenue::From2mTo5m,
        AnnualRevenue::From5mTo10m,
        AnnualRevenue::Over10m,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AnnualRevenue::Under100k => "under-100k",
            AnnualRevenue::From100kTo250k => "100k-250k",
            AnnualRevenue::From250kTo500k => "250k-500k",
            AnnualRevenue::From500kTo1m => "500k-1m",
            AnnualRevenue::From1mTo2m => "1m-2m",
            AnnualRevenue::From2mTo5m => "2m-5m",
            AnnualRevenue::From5mTo10m => "5m-10m",
            AnnualRevenue::Over10m => "10m+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnnualRevenue::Under100k => "Under $100K",
            AnnualRevenue::From100kTo250k => "$100K - $250K",
            AnnualRevenue::From250kTo500k => "$250K - $500K",
            AnnualRevenue::From500kTo1m => "$500K - $1M",
            AnnualRevenue::From1mTo2m => "$1M - $2M",
            AnnualRevenue::From2mTo5m => "$2M - $5M",
            AnnualRevenue::From5mTo10m => "$5M - $10M",
            AnnualRevenue::Over10m => "$10M+",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }
}
