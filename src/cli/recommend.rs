//! Recommend command - score a loan application

use super::OutputSettings;
use algokit::loan::{recommend, EmploymentType, LoanApplication, LoanPurpose};
use algokit::reporters::render_decision;
use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

/// Applicant attributes. Defaults match a typical salaried applicant.
#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Applicant age in years
    #[arg(long, default_value_t = 25)]
    pub age: u32,

    /// Monthly income (₹)
    #[arg(long, default_value_t = 50_000.0)]
    pub income: f64,

    /// Monthly expenses (₹)
    #[arg(long, default_value_t = 15_000.0)]
    pub expenses: f64,

    /// Existing monthly loan payments (₹)
    #[arg(long, default_value_t = 5_000.0)]
    pub existing_loans: f64,

    /// Number of dependents
    #[arg(long, default_value_t = 1)]
    pub dependents: u32,

    /// Employment type
    #[arg(long, default_value = "salaried", value_parser = ["salaried", "self-employed", "business-owner"])]
    pub employment: String,

    /// Years in current employment
    #[arg(long, default_value_t = 2.0)]
    pub employment_years: f64,

    /// Credit score (300-850)
    #[arg(long, default_value_t = 700)]
    pub credit_score: u32,

    /// Loan purpose
    #[arg(long, default_value = "personal", value_parser = ["personal", "home-purchase", "vehicle", "education", "business"])]
    pub purpose: String,

    /// Requested loan amount (₹)
    #[arg(long, default_value_t = 200_000.0)]
    pub amount: f64,

    /// Collateral is pledged
    #[arg(long)]
    pub collateral: bool,

    /// Exit with code 1 if the application is not approved
    #[arg(long)]
    pub fail_on_reject: bool,
}

impl RecommendArgs {
    pub fn to_application(&self) -> Result<LoanApplication> {
        let employment_type: EmploymentType = self.employment.parse()?;
        let purpose: LoanPurpose = self.purpose.parse()?;
        Ok(LoanApplication {
            age: self.age,
            monthly_income: self.income,
            monthly_expenses: self.expenses,
            existing_loan_payments: self.existing_loans,
            dependents: self.dependents,
            employment_type,
            employment_years: self.employment_years,
            credit_score: self.credit_score,
            purpose,
            requested_amount: self.amount,
            has_collateral: self.collateral,
        })
    }
}

pub fn run(args: &RecommendArgs, output: OutputSettings) -> Result<()> {
    let application = args.to_application()?;
    application
        .validate()
        .context("Invalid loan application")?;

    let decision = recommend(&application);
    info!(
        approved = decision.approved,
        reasons = decision.reasons.len(),
        warnings = decision.warnings.len(),
        "Scored {} application",
        application.purpose
    );

    print!("{}", render_decision(&decision, output.format, output.style)?);

    if args.fail_on_reject && !decision.approved {
        std::process::exit(1);
    }
    Ok(())
}
