//! Threshold tables for credit score and DTI banding
//!
//! Bands are listed from the highest threshold down and the first matching
//! band wins. Anything below every threshold gets the table's floor value.

use serde::{Deserialize, Serialize};

/// Credit score lookup: a band matches when `score >= threshold`
#[derive(Debug, Clone, Copy)]
pub struct ScoreTiers<T: 'static> {
    bands: &'static [(u32, T)],
    floor: T,
}

impl<T: Copy> ScoreTiers<T> {
    pub const fn new(bands: &'static [(u32, T)], floor: T) -> Self {
        Self { bands, floor }
    }

    pub fn lookup(&self, score: u32) -> T {
        self.bands
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, value)| *value)
            .unwrap_or(self.floor)
    }
}

/// Ratio lookup: a band matches when `ratio > threshold` (strict)
#[derive(Debug, Clone, Copy)]
pub struct RatioBands {
    bands: &'static [(f64, f64)],
    floor: f64,
}

impl RatioBands {
    pub const fn new(bands: &'static [(f64, f64)], floor: f64) -> Self {
        Self { bands, floor }
    }

    pub fn lookup(&self, ratio: f64) -> f64 {
        self.bands
            .iter()
            .find(|(threshold, _)| ratio > *threshold)
            .map(|(_, value)| *value)
            .unwrap_or(self.floor)
    }
}

/// Creditworthiness label derived from the credit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditTier {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl CreditTier {
    pub fn label(self) -> &'static str {
        match self {
            CreditTier::Excellent => "Excellent",
            CreditTier::Good => "Good",
            CreditTier::Fair => "Fair",
            CreditTier::Poor => "Poor",
            CreditTier::VeryPoor => "Very Poor",
        }
    }
}

impl std::fmt::Display for CreditTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Income multiple used for the eligibility ceiling
pub const INCOME_MULTIPLIER: ScoreTiers<f64> =
    ScoreTiers::new(&[(750, 5.0), (700, 4.0), (650, 3.5)], 3.0);

/// Scale-down of the income multiple for high debt-to-income ratios
pub const DTI_PENALTY: RatioBands = RatioBands::new(&[(50.0, 0.5), (40.0, 0.7), (30.0, 0.85)], 1.0);

/// Base annual interest rate (percent)
pub const BASE_RATE: ScoreTiers<f64> =
    ScoreTiers::new(&[(750, 7.5), (700, 9.0), (650, 10.5), (600, 12.0)], 15.0);

pub const CREDITWORTHINESS: ScoreTiers<CreditTier> = ScoreTiers::new(
    &[
        (750, CreditTier::Excellent),
        (700, CreditTier::Good),
        (650, CreditTier::Fair),
        (600, CreditTier::Poor),
    ],
    CreditTier::VeryPoor,
);
