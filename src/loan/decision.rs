//! Approval rules and decision assembly

use super::emi::{calculate_emi, round2};
use super::money::format_rupees;
use super::tiers::{CreditTier, BASE_RATE, CREDITWORTHINESS, DTI_PENALTY, INCOME_MULTIPLIER};
use super::{EmploymentType, LoanApplication, LoanType};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

const MIN_AGE: u32 = 21;
const MAX_AGE: u32 = 65;
const MIN_MONTHLY_INCOME: f64 = 20_000.0;
const MIN_CREDIT_SCORE: u32 = 600;
const MIN_EMPLOYMENT_YEARS: f64 = 0.5;
const STABLE_EMPLOYMENT_YEARS: f64 = 1.0;
const MAX_DTI: f64 = 50.0;
const HIGH_DTI: f64 = 40.0;
/// Requests up to this multiple of the ceiling warn instead of rejecting
const OVER_LIMIT_TOLERANCE: f64 = 1.5;
const SALARIED_DISCOUNT: f64 = 0.5;
const COLLATERAL_DISCOUNT: f64 = 1.0;

/// Hard rule that blocks approval
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    AgeOutOfRange,
    IncomeTooLow,
    CreditScoreTooLow,
    InsufficientEmployment,
    DebtToIncomeTooHigh,
    AmountTooHigh,
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::AgeOutOfRange => "age_out_of_range",
            Rejection::IncomeTooLow => "income_too_low",
            Rejection::CreditScoreTooLow => "credit_score_too_low",
            Rejection::InsufficientEmployment => "insufficient_employment",
            Rejection::DebtToIncomeTooHigh => "dti_too_high",
            Rejection::AmountTooHigh => "amount_too_high",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::AgeOutOfRange => write!(f, "Age must be {MIN_AGE}-{MAX_AGE}"),
            Rejection::IncomeTooLow => {
                write!(f, "Income < {}", format_rupees(MIN_MONTHLY_INCOME, 0))
            }
            Rejection::CreditScoreTooLow => write!(f, "Credit score < {MIN_CREDIT_SCORE}"),
            Rejection::InsufficientEmployment => write!(f, "Need 6+ months employment"),
            Rejection::DebtToIncomeTooHigh => write!(f, "DTI > {MAX_DTI}%"),
            Rejection::AmountTooHigh => write!(f, "Amount too high"),
        }
    }
}

/// Soft rule: reported, never blocks approval
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    LowEmploymentDuration,
    HighDebtToIncome,
    ExceedsLimit { max_loan: f64 },
}

impl Advisory {
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::LowEmploymentDuration => "low_employment_duration",
            Advisory::HighDebtToIncome => "high_dti",
            Advisory::ExceedsLimit { .. } => "exceeds_limit",
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::LowEmploymentDuration => write!(f, "Low employment duration"),
            Advisory::HighDebtToIncome => write!(f, "High DTI"),
            Advisory::ExceedsLimit { max_loan } => {
                write!(f, "Exceeds limit of {}", format_rupees(*max_loan, 0))
            }
        }
    }
}

fn serialize_notice<S: Serializer>(
    serializer: S,
    name: &'static str,
    code: &str,
    message: String,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct(name, 2)?;
    state.serialize_field("code", code)?;
    state.serialize_field("message", &message)?;
    state.end()
}

impl Serialize for Rejection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_notice(serializer, "Rejection", self.code(), self.to_string())
    }
}

impl Serialize for Advisory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_notice(serializer, "Advisory", self.code(), self.to_string())
    }
}

/// Outcome of scoring one application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanDecision {
    pub approved: bool,
    pub reasons: Vec<Rejection>,
    pub warnings: Vec<Advisory>,
    pub loan_type: LoanType,
    pub tenure_months: u32,
    pub approved_amount: f64,
    pub max_eligible_amount: f64,
    /// Percent per annum, rounded to 2 decimals
    pub interest_rate: f64,
    pub monthly_installment: f64,
    /// Percent of monthly income
    pub debt_to_income: f64,
    pub total_payable: f64,
    pub creditworthiness: CreditTier,
}

impl LoanDecision {
    /// Interest paid over the full tenure
    pub fn total_interest(&self) -> f64 {
        self.total_payable - self.approved_amount
    }

    /// Fraction of the total payable that is interest; 0 when nothing is payable
    pub fn interest_share(&self) -> f64 {
        if self.total_payable > 0.0 {
            self.total_interest() / self.total_payable
        } else {
            0.0
        }
    }
}

/// Debt-to-income ratio in percent; 0 for zero income
pub fn debt_to_income(application: &LoanApplication) -> f64 {
    if application.monthly_income > 0.0 {
        (application.existing_loan_payments + application.monthly_expenses)
            / application.monthly_income
            * 100.0
    } else {
        0.0
    }
}

fn interest_rate(application: &LoanApplication) -> f64 {
    let mut rate = BASE_RATE.lookup(application.credit_score);
    if application.employment_type == EmploymentType::Salaried {
        rate -= SALARIED_DISCOUNT;
    }
    if application.has_collateral {
        rate -= COLLATERAL_DISCOUNT;
    }
    rate
}

/// Score an application.
///
/// Total over its input: every rule is evaluated and every failing hard
/// rule is reported, not just the first.
pub fn recommend(application: &LoanApplication) -> LoanDecision {
    let dti = debt_to_income(application);
    let multiplier = INCOME_MULTIPLIER.lookup(application.credit_score) * DTI_PENALTY.lookup(dti);
    let max_loan = application.monthly_income * 12.0 * multiplier;

    let rate = interest_rate(application);
    let creditworthiness = CREDITWORTHINESS.lookup(application.credit_score);
    let (loan_type, tenure_months) = application.purpose.product();

    let mut reasons = Vec::new();
    let mut warnings = Vec::new();

    if !(MIN_AGE..=MAX_AGE).contains(&application.age) {
        reasons.push(Rejection::AgeOutOfRange);
    }
    if application.monthly_income < MIN_MONTHLY_INCOME {
        reasons.push(Rejection::IncomeTooLow);
    }
    if application.credit_score < MIN_CREDIT_SCORE {
        reasons.push(Rejection::CreditScoreTooLow);
    }

    if application.employment_years < MIN_EMPLOYMENT_YEARS {
        reasons.push(Rejection::InsufficientEmployment);
    } else if application.employment_years < STABLE_EMPLOYMENT_YEARS {
        warnings.push(Advisory::LowEmploymentDuration);
    }

    if dti > MAX_DTI {
        reasons.push(Rejection::DebtToIncomeTooHigh);
    } else if dti > HIGH_DTI {
        warnings.push(Advisory::HighDebtToIncome);
    }

    if application.requested_amount > max_loan * OVER_LIMIT_TOLERANCE {
        reasons.push(Rejection::AmountTooHigh);
    } else if application.requested_amount > max_loan {
        warnings.push(Advisory::ExceedsLimit { max_loan });
    }

    let approved_amount = application.requested_amount.min(max_loan);
    let monthly_installment = calculate_emi(approved_amount, rate, tenure_months);

    LoanDecision {
        approved: reasons.is_empty(),
        reasons,
        warnings,
        loan_type,
        tenure_months,
        approved_amount,
        max_eligible_amount: max_loan,
        interest_rate: round2(rate),
        monthly_installment,
        debt_to_income: dti,
        total_payable: monthly_installment * f64::from(tenure_months),
        creditworthiness,
    }
}
