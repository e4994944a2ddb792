//! Rule-based loan recommendation
//!
//! [`recommend`] turns a [`LoanApplication`] into a [`LoanDecision`]: the
//! eligibility ceiling, interest rate, approval verdict and repayment
//! schedule. The rules are fixed arithmetic; the function is pure and keeps
//! no state between calls.
//!
//! ```
//! use algokit::loan::{recommend, LoanApplication};
//!
//! let decision = recommend(&LoanApplication::default());
//! assert!(decision.approved);
//! assert_eq!(decision.tenure_months, 36);
//! ```

mod decision;
mod emi;
mod money;
mod tiers;

pub use decision::{debt_to_income, recommend, Advisory, LoanDecision, Rejection};
pub use emi::{calculate_emi, round2};
pub use money::format_rupees;
pub use tiers::{CreditTier, RatioBands, ScoreTiers};

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors from validating an application before scoring
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Unknown employment type '{0}'. Valid types: salaried, self-employed, business-owner")]
    UnknownEmployment(String),

    #[error("Unknown loan purpose '{0}'. Valid purposes: personal, home-purchase, vehicle, education, business")]
    UnknownPurpose(String),
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EmploymentType {
    #[default]
    Salaried,
    #[serde(rename = "Self Employed")]
    SelfEmployed,
    #[serde(rename = "Business Owner")]
    BusinessOwner,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::Salaried => "Salaried",
            EmploymentType::SelfEmployed => "Self Employed",
            EmploymentType::BusinessOwner => "Business Owner",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "salaried" => Ok(EmploymentType::Salaried),
            "self-employed" => Ok(EmploymentType::SelfEmployed),
            "business-owner" => Ok(EmploymentType::BusinessOwner),
            _ => Err(ApplicationError::UnknownEmployment(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stated purpose of the loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoanPurpose {
    #[default]
    Personal,
    #[serde(rename = "Home Purchase")]
    HomePurchase,
    Vehicle,
    Education,
    Business,
}

/// Product offered for a purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanType {
    #[serde(rename = "Personal Loan")]
    Personal,
    #[serde(rename = "Home Loan")]
    Home,
    #[serde(rename = "Vehicle Loan")]
    Vehicle,
    #[serde(rename = "Education Loan")]
    Education,
    #[serde(rename = "Business Loan")]
    Business,
}

impl LoanType {
    pub fn label(self) -> &'static str {
        match self {
            LoanType::Personal => "Personal Loan",
            LoanType::Home => "Home Loan",
            LoanType::Vehicle => "Vehicle Loan",
            LoanType::Education => "Education Loan",
            LoanType::Business => "Business Loan",
        }
    }
}

impl std::fmt::Display for LoanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl LoanPurpose {
    /// Loan product and fixed tenure (months) for this purpose
    pub fn product(self) -> (LoanType, u32) {
        match self {
            LoanPurpose::Personal => (LoanType::Personal, 36),
            LoanPurpose::HomePurchase => (LoanType::Home, 240),
            LoanPurpose::Vehicle => (LoanType::Vehicle, 60),
            LoanPurpose::Education => (LoanType::Education, 84),
            LoanPurpose::Business => (LoanType::Business, 60),
        }
    }

    /// Lenient parse for free-form labels: anything unrecognized is
    /// treated as a personal loan.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            LoanPurpose::Personal => "Personal",
            LoanPurpose::HomePurchase => "Home Purchase",
            LoanPurpose::Vehicle => "Vehicle",
            LoanPurpose::Education => "Education",
            LoanPurpose::Business => "Business",
        }
    }
}

impl FromStr for LoanPurpose {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "personal" => Ok(LoanPurpose::Personal),
            "home-purchase" | "home" => Ok(LoanPurpose::HomePurchase),
            "vehicle" => Ok(LoanPurpose::Vehicle),
            "education" => Ok(LoanPurpose::Education),
            "business" => Ok(LoanPurpose::Business),
            _ => Err(ApplicationError::UnknownPurpose(s.to_string())),
        }
    }
}

impl std::fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// "Self Employed", "self_employed" and "self-employed" all normalize the same
fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

/// Applicant attributes. Money figures are monthly rupee amounts except
/// `requested_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub age: u32,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub existing_loan_payments: f64,
    /// Collected for the record; no rule reads it
    pub dependents: u32,
    pub employment_type: EmploymentType,
    pub employment_years: f64,
    pub credit_score: u32,
    pub purpose: LoanPurpose,
    pub requested_amount: f64,
    pub has_collateral: bool,
}

impl Default for LoanApplication {
    fn default() -> Self {
        Self {
            age: 25,
            monthly_income: 50_000.0,
            monthly_expenses: 15_000.0,
            existing_loan_payments: 5_000.0,
            dependents: 1,
            employment_type: EmploymentType::Salaried,
            employment_years: 2.0,
            credit_score: 700,
            purpose: LoanPurpose::Personal,
            requested_amount: 200_000.0,
            has_collateral: false,
        }
    }
}

impl LoanApplication {
    /// Reject non-finite or negative amounts.
    ///
    /// [`recommend`] does not call this; it scores whatever it is given.
    pub fn validate(&self) -> ApplicationResult<()> {
        let amounts = [
            ("monthly_income", self.monthly_income),
            ("monthly_expenses", self.monthly_expenses),
            ("existing_loan_payments", self.existing_loan_payments),
            ("employment_years", self.employment_years),
            ("requested_amount", self.requested_amount),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(ApplicationError::InvalidField {
                    field,
                    reason: format!("{value} is not a finite number"),
                });
            }
            if value < 0.0 {
                return Err(ApplicationError::InvalidField {
                    field,
                    reason: format!("{value} must not be negative"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purpose_products() {
        assert_eq!(LoanPurpose::Personal.product(), (LoanType::Personal, 36));
        assert_eq!(LoanPurpose::HomePurchase.product(), (LoanType::Home, 240));
        assert_eq!(LoanPurpose::Vehicle.product(), (LoanType::Vehicle, 60));
        assert_eq!(LoanPurpose::Education.product(), (LoanType::Education, 84));
        assert_eq!(LoanPurpose::Business.product(), (LoanType::Business, 60));
    }

    #[test]
    fn test_unrecognized_purpose_defaults_to_personal() {
        assert_eq!(LoanPurpose::from_label("Wedding"), LoanPurpose::Personal);
        assert_eq!(LoanPurpose::from_label("Home Purchase"), LoanPurpose::HomePurchase);
        assert!("Wedding".parse::<LoanPurpose>().is_err());
    }

    #[test]
    fn test_employment_parsing_accepts_labels() {
        assert_eq!("Self Employed".parse::<EmploymentType>().unwrap(), EmploymentType::SelfEmployed);
        assert_eq!("business_owner".parse::<EmploymentType>().unwrap(), EmploymentType::BusinessOwner);
        assert_eq!("SALARIED".parse::<EmploymentType>().unwrap(), EmploymentType::Salaried);
        assert!(matches!(
            "contractor".parse::<EmploymentType>(),
            Err(ApplicationError::UnknownEmployment(_))
        ));
    }

    #[test]
    fn test_labels_roundtrip_through_from_str() {
        for purpose in [
            LoanPurpose::Personal,
            LoanPurpose::HomePurchase,
            LoanPurpose::Vehicle,
            LoanPurpose::Education,
            LoanPurpose::Business,
        ] {
            assert_eq!(purpose.label().parse::<LoanPurpose>().unwrap(), purpose);
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(LoanApplication::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_income() {
        let app = LoanApplication {
            monthly_income: -1.0,
            ..Default::default()
        };
        let err = app.validate().unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::InvalidField { field: "monthly_income", .. }
        ));
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let app = LoanApplication {
            requested_amount: f64::NAN,
            ..Default::default()
        };
        assert!(app.validate().is_err());
    }

    #[test]
    fn test_application_serializes_labels() {
        let app = LoanApplication {
            employment_type: EmploymentType::SelfEmployed,
            purpose: LoanPurpose::HomePurchase,
            ..Default::default()
        };
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["employment_type"], "Self Employed");
        assert_eq!(json["purpose"], "Home Purchase");
    }
}
