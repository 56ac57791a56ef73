use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;

/// How eagerly the metric detector may override the upstream `has_metrics`
/// claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricRule {
    /// Any single signal counts, including the business-keyword fallback.
    Gate,
    /// At least `minimum` distinct pattern classes must match; the keyword
    /// fallback is not counted.
    MatchCount { minimum: usize },
}

/// Score constants for the behavioral decision table, evaluated top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralTable {
    pub complete_with_metrics: i16,
    pub partial_with_metrics: i16,
    pub complete_structure: i16,
    pub partial_structure: i16,
    pub fragmentary: i16,
    pub fallback: i16,
}

/// Score constants for the background branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRubric {
    pub relevant_bonus: i16,
    pub clarity_bonus: i16,
    /// Hard ceiling applied when `relevant_history` is false.
    pub weak_score: i16,
    /// Floor applied when metrics are detected, never an additive bonus.
    pub metrics_floor: i16,
}

/// Rubric configuration describing one scoring policy.
///
/// The engine treats policies as interchangeable strategies: same inputs, same
/// output shape, same red-flag precedence. Policies differ only in these
/// constants and in metric-detection intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub name: String,
    pub score_floor: i16,
    pub score_ceiling: i16,
    pub behavioral: BehavioralTable,
    pub background: BackgroundRubric,
    pub metric_rule: MetricRule,
}

impl ScoringPolicy {
    /// Reference policy: 1/3/5 tiers over a 1-5 range with gated metrics.
    pub fn balanced_1_5() -> Self {
        Self {
            name: "balanced-1-5".to_string(),
            score_floor: 1,
            score_ceiling: 5,
            behavioral: BehavioralTable {
                complete_with_metrics: 5,
                partial_with_metrics: 5,
                complete_structure: 3,
                partial_structure: 3,
                fragmentary: 3,
                fallback: 1,
            },
            background: BackgroundRubric {
                relevant_bonus: 3,
                clarity_bonus: 1,
                weak_score: 2,
                metrics_floor: 4,
            },
            metric_rule: MetricRule::Gate,
        }
    }

    /// Compressed 2/3/4 tiers over a 1-4 range; the floor stays reserved for
    /// red-flag overrides.
    pub fn compressed_2_4() -> Self {
        Self {
            name: "compressed-2-4".to_string(),
            score_floor: 1,
            score_ceiling: 4,
            behavioral: BehavioralTable {
                complete_with_metrics: 4,
                partial_with_metrics: 4,
                complete_structure: 3,
                partial_structure: 3,
                fragmentary: 3,
                fallback: 2,
            },
            background: BackgroundRubric {
                relevant_bonus: 2,
                clarity_bonus: 1,
                weak_score: 2,
                metrics_floor: 3,
            },
            metric_rule: MetricRule::Gate,
        }
    }

    /// Hybrid 1/3/4/5 tiers that distinguish complete from partial structure
    /// and demand stronger metric evidence before awarding the top tier.
    pub fn hybrid_1_5() -> Self {
        Self {
            name: "hybrid-1-5".to_string(),
            score_floor: 1,
            score_ceiling: 5,
            behavioral: BehavioralTable {
                complete_with_metrics: 5,
                partial_with_metrics: 4,
                complete_structure: 4,
                partial_structure: 3,
                fragmentary: 3,
                fallback: 1,
            },
            background: BackgroundRubric {
                relevant_bonus: 3,
                clarity_bonus: 1,
                weak_score: 2,
                metrics_floor: 4,
            },
            metric_rule: MetricRule::MatchCount { minimum: 2 },
        }
    }

    /// Look up a built-in policy by identifier.
    ///
    /// Unknown identifiers are a caller error, never silently defaulted, since
    /// picking a policy on the caller's behalf would corrupt score
    /// comparability across an interview.
    pub fn by_name(name: &str) -> Result<Self, EvaluationError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "balanced-1-5" => Ok(Self::balanced_1_5()),
            "compressed-2-4" => Ok(Self::compressed_2_4()),
            "hybrid-1-5" => Ok(Self::hybrid_1_5()),
            other => Err(EvaluationError::UnknownPolicy(other.to_string())),
        }
    }

    pub fn builtin() -> Vec<Self> {
        vec![
            Self::balanced_1_5(),
            Self::compressed_2_4(),
            Self::hybrid_1_5(),
        ]
    }

    /// The fixed fail value returned for red-flag overrides.
    pub fn red_flag_score(&self) -> i16 {
        self.score_floor
    }

    pub(crate) fn clamp(&self, score: i16) -> i16 {
        score.clamp(self.score_floor, self.score_ceiling)
    }
}
