//! Output reporters for traversal and loan results
//!
//! Supports two output formats:
//! - `text` - Terminal output with styling and (optionally) emoji
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::loan::LoanDecision;
use crate::models::TraversalReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render options that only the text reporter reads
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStyle {
    pub no_emoji: bool,
}

/// Render one or more traversal runs
pub fn render_traversals(reports: &[TraversalReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_traversals(reports)),
        OutputFormat::Json => json::render_traversals(reports),
    }
}

/// Render a loan decision
pub fn render_decision(
    decision: &LoanDecision,
    format: OutputFormat,
    style: TextStyle,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_decision(decision, style)),
        OutputFormat::Json => json::render_decision(decision),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::graph::Algorithm;
    use crate::loan::{recommend, LoanApplication};

    pub(crate) fn approved_decision() -> LoanDecision {
        recommend(&LoanApplication {
            age: 30,
            ..Default::default()
        })
    }

    pub(crate) fn rejected_decision() -> LoanDecision {
        recommend(&LoanApplication {
            age: 19,
            credit_score: 550,
            ..Default::default()
        })
    }

    pub(crate) fn sample_reports() -> Vec<TraversalReport> {
        vec![
            TraversalReport {
                algorithm: Algorithm::Bfs,
                start: "A".into(),
                order: vec!["A".into(), "B".into(), "C".into()],
            },
            TraversalReport {
                algorithm: Algorithm::Dfs,
                start: "A".into(),
                order: vec!["A".into(), "C".into(), "B".into()],
            },
        ]
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_dispatch_by_format() {
        let d = approved_decision();
        let json = render_decision(&d, OutputFormat::Json, TextStyle::default()).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let text = render_decision(&d, OutputFormat::Text, TextStyle::default()).unwrap();
        assert!(text.contains("Loan Approved"));
    }
}
