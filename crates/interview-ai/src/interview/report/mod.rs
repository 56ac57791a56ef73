use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interview::domain::InterviewTurn;
use crate::interview::evaluation::ScoringPolicy;

/// Thresholds mapping an average score to a user-facing tier.
///
/// Thresholds are policy configuration, not constants, since different
/// score-range policies need different boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationPolicy {
    pub high_threshold: f64,
    pub mid_threshold: f64,
}

impl AggregationPolicy {
    /// Boundaries for the 1-5 score range.
    pub fn standard_1_5() -> Self {
        Self {
            high_threshold: 3.5,
            mid_threshold: 2.5,
        }
    }

    /// Boundaries for the compressed 1-4 score range.
    pub fn compressed_1_4() -> Self {
        Self {
            high_threshold: 3.25,
            mid_threshold: 2.4,
        }
    }

    /// Pick the boundaries matching a scoring policy's ceiling.
    pub fn for_scoring(policy: &ScoringPolicy) -> Self {
        if policy.score_ceiling <= 4 {
            Self::compressed_1_4()
        } else {
            Self::standard_1_5()
        }
    }

    fn tier_for(&self, average: f64) -> PerformanceTier {
        if average >= self.high_threshold {
            PerformanceTier::WellDone
        } else if average >= self.mid_threshold {
            PerformanceTier::Average
        } else {
            PerformanceTier::NeedsWork
        }
    }
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        Self::standard_1_5()
    }
}

/// Coarse performance bucket shown to the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    NeedsWork,
    Average,
    WellDone,
}

impl PerformanceTier {
    pub const fn label(self) -> &'static str {
        match self {
            PerformanceTier::NeedsWork => "Needs Work",
            PerformanceTier::Average => "Average",
            PerformanceTier::WellDone => "Well Done",
        }
    }
}

/// Aggregate view over an interview, recomputed on demand and never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub average_score: f64,
    pub tier: PerformanceTier,
    pub per_question_scores: Vec<i16>,
}

impl AggregateReport {
    pub fn scored_turns(&self) -> usize {
        self.per_question_scores.len()
    }
}

/// Compute the mean over scored turns and map it to a performance tier.
///
/// Turns without a score (e.g. the opening handshake) are excluded; counting
/// them as zero would systematically deflate every candidate's average. An
/// empty scorable history yields the sentinel rather than a division fault.
pub fn aggregate(history: &[InterviewTurn], policy: &AggregationPolicy) -> AggregateReport {
    let per_question_scores: Vec<i16> = history.iter().filter_map(|turn| turn.score).collect();

    if per_question_scores.is_empty() {
        return AggregateReport {
            average_score: 0.0,
            tier: PerformanceTier::NeedsWork,
            per_question_scores,
        };
    }

    let total: i64 = per_question_scores.iter().map(|score| i64::from(*score)).sum();
    let average_score = total as f64 / per_question_scores.len() as f64;
    let tier = policy.tier_for(average_score);

    debug!(
        scored_turns = per_question_scores.len(),
        average_score,
        tier = tier.label(),
        "aggregated interview history"
    );

    AggregateReport {
        average_score,
        tier,
        per_question_scores,
    }
}
