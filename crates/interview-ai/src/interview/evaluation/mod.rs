mod config;
mod metrics;
mod policy;
mod structure;

pub use config::{BackgroundRubric, BehavioralTable, MetricRule, ScoringPolicy};
pub use metrics::{MetricDetector, RegexMetricDetector};
pub use structure::{LexiconStructureDetector, StructureDetector};

use tracing::debug;

use crate::error::EvaluationError;
use crate::interview::domain::{
    AnswerEvaluationInput, OverrideReason, QuestionRole, ScoreResult,
};

/// Stateless resolver that applies one scoring policy to upstream judgments.
///
/// Detectors are injected rather than swapped globally, so concurrent callers
/// and tests can hold differently-configured resolvers side by side.
pub struct ScoreResolver<M = RegexMetricDetector, S = LexiconStructureDetector> {
    policy: ScoringPolicy,
    metrics: M,
    structure: S,
}

impl ScoreResolver {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self::with_detectors(
            policy,
            RegexMetricDetector::new(),
            LexiconStructureDetector::new(),
        )
    }

    pub fn from_name(name: &str) -> Result<Self, EvaluationError> {
        Ok(Self::new(ScoringPolicy::by_name(name)?))
    }
}

impl<M, S> ScoreResolver<M, S>
where
    M: MetricDetector,
    S: StructureDetector,
{
    pub fn with_detectors(policy: ScoringPolicy, metrics: M, structure: S) -> Self {
        Self {
            policy,
            metrics,
            structure,
        }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Resolve one answer into a score and an optional override explanation.
    pub fn resolve(&self, input: &AnswerEvaluationInput) -> ScoreResult {
        // The red-flag override is unconditional and precedes every other
        // rule, for both question roles.
        if input.checklist.red_flag {
            debug!(
                policy = %self.policy.name,
                score = self.policy.red_flag_score(),
                "red flag forced the minimum score"
            );
            return ScoreResult {
                score: self.policy.red_flag_score(),
                override_reason: Some(OverrideReason::ToxicBehavior),
            };
        }

        let corrected = self
            .structure
            .corroborate(&input.answer_text, &input.checklist);
        let has_metrics = self.metrics.detect(
            &input.answer_text,
            input.checklist.has_metrics,
            &self.policy.metric_rule,
        );

        let score = match input.question_role {
            QuestionRole::Background => {
                policy::score_background(&corrected, has_metrics, &self.policy)
            }
            QuestionRole::Behavioral => {
                policy::score_behavioral(&corrected, has_metrics, &self.policy)
            }
        };

        debug!(
            policy = %self.policy.name,
            role = input.question_role.label(),
            has_metrics,
            score,
            "resolved answer score"
        );

        ScoreResult {
            score,
            override_reason: None,
        }
    }
}

/// Resolve one answer under the named built-in policy.
///
/// Convenience wrapper over [`ScoreResolver`] for callers that select the
/// policy by identifier per call.
pub fn resolve_score(
    input: &AnswerEvaluationInput,
    policy_name: &str,
) -> Result<ScoreResult, EvaluationError> {
    Ok(ScoreResolver::from_name(policy_name)?.resolve(input))
}
