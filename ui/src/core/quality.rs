//! Quality index calculation and the three-tier status classification.
//!
//! The index scores how far a product sits from the reference weight (2.5 kg)
//! and size (7 cm). Weight deviation costs 20 points per unit, size deviation
//! 10 points per unit. The result is rounded to two decimals and clamped to
//! `[0, 100]`.

pub const REFERENCE_WEIGHT: f64 = 2.5;
pub const REFERENCE_SIZE: f64 = 7.0;
pub const WEIGHT_PENALTY: f64 = 20.0;
pub const SIZE_PENALTY: f64 = 10.0;

pub const INDEX_MIN: f64 = 0.0;
pub const INDEX_MAX: f64 = 100.0;

/// Compute the quality index for a `(weight, size)` pair.
///
/// Inputs are not validated; callers reject missing values before getting here.
pub fn calculate(weight: f64, size: f64) -> f64 {
    let raw = INDEX_MAX
        - (weight - REFERENCE_WEIGHT).abs() * WEIGHT_PENALTY
        - (size - REFERENCE_SIZE).abs() * SIZE_PENALTY;
    round2(raw).clamp(INDEX_MIN, INDEX_MAX)
}

/// Round to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Severity tier shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    Excellent,
    Good,
    Poor,
}

impl QualityTier {
    pub const EXCELLENT_FLOOR: f64 = 80.0;
    pub const GOOD_FLOOR: f64 = 60.0;

    pub fn classify(index: f64) -> Self {
        if index >= Self::EXCELLENT_FLOOR {
            Self::Excellent
        } else if index >= Self::GOOD_FLOOR {
            Self::Good
        } else {
            Self::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Poor => "Poor",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Excellent => "✅",
            Self::Good => "⚠️",
            Self::Poor => "❌",
        }
    }

    /// Text colour for the status line.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "orange",
            Self::Poor => "red",
        }
    }

    /// Full status sentence, e.g. `Product Quality: Good ⚠️`.
    pub fn headline(&self) -> String {
        format!("Product Quality: {} {}", self.label(), self.glyph())
    }

    /// CSS modifier class, e.g. `status--excellent`.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Excellent => "status--excellent",
            Self::Good => "status--good",
            Self::Poor => "status--poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_point_scores_full_marks() {
        assert_eq!(calculate(2.5, 7.0), 100.0);
    }

    #[test]
    fn far_outliers_clamp_to_zero() {
        assert_eq!(calculate(100.0, 100.0), 0.0);
        assert_eq!(calculate(-50.0, 7.0), 0.0);
    }

    #[test]
    fn index_stays_in_range_across_inputs() {
        let samples = [-1000.0, -3.2, 0.0, 1.0, 2.5, 4.75, 7.0, 12.5, 1e6];
        for w in samples {
            for s in samples {
                let idx = calculate(w, s);
                assert!((INDEX_MIN..=INDEX_MAX).contains(&idx), "{w},{s} -> {idx}");
            }
        }
    }

    #[test]
    fn index_is_rounded_to_two_decimals() {
        // 100 - 0.123*20 - 0 = 97.54
        assert_eq!(calculate(2.623, 7.0), 97.54);
        // 100 - 0.5*20 - 1.5*10 = 75
        assert_eq!(calculate(3.0, 8.5), 75.0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(QualityTier::classify(80.0), QualityTier::Excellent);
        assert_eq!(QualityTier::classify(79.99), QualityTier::Good);
        assert_eq!(QualityTier::classify(60.0), QualityTier::Good);
        assert_eq!(QualityTier::classify(59.99), QualityTier::Poor);
        assert_eq!(QualityTier::classify(0.0), QualityTier::Poor);
        assert_eq!(QualityTier::classify(100.0), QualityTier::Excellent);
    }

    #[test]
    fn tier_presentation() {
        assert_eq!(QualityTier::Good.color(), "orange");
        assert_eq!(QualityTier::Poor.headline(), "Product Quality: Poor ❌");
    }
}
