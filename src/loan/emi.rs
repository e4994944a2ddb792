//! Installment arithmetic
//!
//! EMI = P × r × (1 + r)^n / [(1 + r)^n - 1], with r = annual rate / 1200.

/// Round to two decimal places (paise)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Monthly installment for an amortizing loan, rounded to paise.
///
/// Returns 0.0 for non-positive principal or tenure, and straight-line
/// `principal / tenure` when the rate is zero or negative.
pub fn calculate_emi(principal: f64, annual_rate_percent: f64, tenure_months: u32) -> f64 {
    if tenure_months == 0 || principal <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_percent / 1200.0;
    if monthly_rate <= 0.0 {
        return round2(principal / f64::from(tenure_months));
    }

    // Same formula divided through by (1 + r)^n; stays finite for huge n
    let periods = i32::try_from(tenure_months).unwrap_or(i32::MAX);
    let discount = (1.0 + monthly_rate).powi(-periods);
    round2(principal * monthly_rate / (1.0 - discount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_emi() {
        // 1 lakh at 12% for 12 months
        let emi = calculate_emi(100_000.0, 12.0, 12);
        assert!((emi - 8884.88).abs() < 0.01);
    }

    #[test]
    fn test_calculate_emi_personal_loan() {
        let emi = calculate_emi(200_000.0, 8.5, 36);
        assert!((emi - 6313.51).abs() < 0.011);
    }

    #[test]
    fn test_calculate_emi_zero_principal() {
        assert_eq!(calculate_emi(0.0, 12.0, 12), 0.0);
    }

    #[test]
    fn test_calculate_emi_zero_tenure() {
        assert_eq!(calculate_emi(100_000.0, 12.0, 0), 0.0);
    }

    #[test]
    fn test_calculate_emi_zero_rate() {
        assert_eq!(calculate_emi(120_000.0, 0.0, 12), 10_000.0);
    }

    #[test]
    fn test_calculate_emi_huge_tenure_approaches_interest_only() {
        // r = 1% per month, so the installment tends to P * r
        let emi = calculate_emi(100_000.0, 12.0, u32::MAX);
        assert!(emi.is_finite());
        assert_eq!(emi, 1000.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(8.5), 8.5);
    }
}
