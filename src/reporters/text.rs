//! Text (terminal) reporter

use super::TextStyle;
use crate::loan::{format_rupees, LoanDecision};
use crate::models::TraversalReport;
use console::style;

/// Emoji markers, with plain fallbacks for CI logs
struct Markers {
    approved: &'static str,
    rejected: &'static str,
    reason: &'static str,
    warning: &'static str,
    hint: &'static str,
}

impl Markers {
    fn for_style(text_style: TextStyle) -> Self {
        if text_style.no_emoji {
            Self {
                approved: "[OK]",
                rejected: "[REJECTED]",
                reason: "-",
                warning: "!",
                hint: "Tip:",
            }
        } else {
            Self {
                approved: "✅",
                rejected: "❌",
                reason: "❌",
                warning: "⚠️",
                hint: "💡",
            }
        }
    }
}

/// One line per run: `bfs from A: A -> B -> C`
pub fn render_traversals(reports: &[TraversalReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!(
            "{} from {}: {}\n",
            style(report.algorithm).bold(),
            style(&report.start).cyan(),
            report.order.join(" -> ")
        ));
    }
    out
}

pub fn render_decision(decision: &LoanDecision, text_style: TextStyle) -> String {
    let markers = Markers::for_style(text_style);
    let mut out = String::new();

    if !decision.approved {
        out.push_str(&format!(
            "\n{} {}\n\n",
            markers.rejected,
            style("Not Approved").red().bold()
        ));
        out.push_str(&format!("{}\n", style("REASONS").bold()));
        for reason in &decision.reasons {
            out.push_str(&format!("  {} {}\n", markers.reason, style(reason).red()));
        }
        out.push_str(&format!(
            "\n{} Improve the highlighted areas and reapply.\n",
            markers.hint
        ));
        return out;
    }

    out.push_str(&format!(
        "\n{} {}\n\n",
        markers.approved,
        style("Loan Approved!").green().bold()
    ));

    out.push_str(&format!("{}\n", style("LOAN DETAILS").bold()));
    let rows = [
        ("Type", decision.loan_type.to_string()),
        ("Amount", format_rupees(decision.approved_amount, 0)),
        ("Rate", format!("{}% p.a.", decision.interest_rate)),
        ("Tenure", format!("{} months", decision.tenure_months)),
        ("EMI", format_rupees(decision.monthly_installment, 2)),
        ("Total", format_rupees(decision.total_payable, 2)),
        ("Credit", decision.creditworthiness.to_string()),
        ("DTI", format!("{:.2}%", decision.debt_to_income)),
    ];
    for (label, value) in rows {
        out.push_str(&format!("  {:<8} {}\n", format!("{label}:"), value));
    }

    if !decision.warnings.is_empty() {
        out.push_str(&format!("\n{}\n", style("WARNINGS").yellow().bold()));
        for warning in &decision.warnings {
            out.push_str(&format!("  {} {}\n", markers.warning, style(warning).yellow()));
        }
    }

    out.push_str(&format!("\n{}\n", style("BREAKDOWN").bold()));
    out.push_str(&format!(
        "  {:<10} {}\n",
        "Principal:",
        format_rupees(decision.approved_amount, 0)
    ));
    out.push_str(&format!(
        "  {:<10} {} ({:.1}% of total)\n",
        "Interest:",
        format_rupees(decision.total_interest(), 2),
        decision.interest_share() * 100.0
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{recommend, LoanApplication};
    use crate::reporters::tests::{approved_decision, rejected_decision, sample_reports};

    #[test]
    fn test_approved_text_has_details() {
        let out = render_decision(&approved_decision(), TextStyle::default());
        assert!(out.contains("Loan Approved!"));
        assert!(out.contains("Personal Loan"));
        assert!(out.contains("₹200,000"));
        assert!(out.contains("8.5% p.a."));
        assert!(out.contains("36 months"));
        assert!(out.contains("₹6,313.51"));
        assert!(out.contains("40.00%"));
        assert!(!out.contains("WARNINGS"));
    }

    #[test]
    fn test_warnings_section_shown() {
        let d = recommend(&LoanApplication {
            employment_years: 0.5,
            ..Default::default()
        });
        let out = render_decision(&d, TextStyle::default());
        assert!(out.contains("WARNINGS"));
        assert!(out.contains("Low employment duration"));
    }

    #[test]
    fn test_rejected_text_lists_reasons() {
        let out = render_decision(&rejected_decision(), TextStyle::default());
        assert!(out.contains("Not Approved"));
        assert!(out.contains("Age must be 21-65"));
        assert!(out.contains("Credit score < 600"));
        assert!(out.contains("reapply"));
        assert!(!out.contains("LOAN DETAILS"));
    }

    #[test]
    fn test_no_emoji_mode() {
        let out = render_decision(&rejected_decision(), TextStyle { no_emoji: true });
        assert!(!out.contains('❌'));
        assert!(out.contains("[REJECTED]"));
    }

    #[test]
    fn test_traversal_lines() {
        let out = render_traversals(&sample_reports());
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("A -> B -> C"));
        assert!(out.contains("A -> C -> B"));
    }
}
