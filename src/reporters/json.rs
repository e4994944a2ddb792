//! JSON reporter
//!
//! Pretty-printed JSON for piping to jq or further processing.

use crate::loan::LoanDecision;
use crate::models::TraversalReport;
use anyhow::Result;
use serde::Serialize;

/// Decision plus the derived principal/interest breakdown
#[derive(Serialize)]
struct DecisionView<'a> {
    #[serde(flatten)]
    decision: &'a LoanDecision,
    total_interest: f64,
    interest_share: f64,
}

pub fn render_decision(decision: &LoanDecision) -> Result<String> {
    let view = DecisionView {
        decision,
        total_interest: decision.total_interest(),
        interest_share: decision.interest_share(),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Always an array, even for a single run
pub fn render_traversals(reports: &[TraversalReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
