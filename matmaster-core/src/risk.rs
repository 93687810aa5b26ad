use crate::types::{ValidationResult, ValidationStatus};

pub const MAX_RISK_SCORE: u8 = 100;

/// Points added per finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskWeights {
    pub error: u32,
    pub warning: u32,
    pub duplicate: u32,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            error: 30,
            warning: 15,
            duplicate: 20,
        }
    }
}

impl RiskWeights {
    pub fn score(&self, errors: usize, warnings: usize, duplicates: usize) -> u8 {
        let total = self.error as u64 * errors as u64
            + self.warning as u64 * warnings as u64
            + self.duplicate as u64 * duplicates as u64;
        total.min(MAX_RISK_SCORE as u64) as u8
    }
}

/// Risk score for a set of validation results plus a duplicate count.
pub fn risk_score(validations: &[ValidationResult], duplicates: usize, weights: &RiskWeights) -> u8 {
    let count = |status| validations.iter().filter(|v| v.status == status).count();
    weights.score(
        count(ValidationStatus::Error),
        count(ValidationStatus::Warning),
        duplicates,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = RiskWeights::default();
        assert_eq!(weights.score(0, 0, 0), 0);
        assert_eq!(weights.score(1, 1, 1), 65);
        assert_eq!(weights.score(4, 0, 0), 100);
    }

    #[test]
    fn test_counts_by_status() {
        let validations = vec![
            ValidationResult::error("materialCode", "missing", None),
            ValidationResult::warning("materialGroup", "format", None),
            ValidationResult::valid("description", "ok"),
        ];
        assert_eq!(risk_score(&validations, 0, &RiskWeights::default()), 45);
    }

    #[test]
    fn test_without_duplicate_weight() {
        let weights = RiskWeights {
            duplicate: 0,
            ..Default::default()
        };
        assert_eq!(weights.score(0, 1, 5), 15);
    }
}
