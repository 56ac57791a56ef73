//! Interview answer scoring: rubric corroboration, score resolution, and
//! report aggregation.

pub mod domain;
pub mod evaluation;
pub mod report;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerEvaluationInput, InterviewTurn, OverrideReason, QuestionRole, RubricChecklist,
    ScoreResult,
};
pub use evaluation::{
    resolve_score, BackgroundRubric, BehavioralTable, LexiconStructureDetector, MetricDetector,
    MetricRule, RegexMetricDetector, ScoreResolver, ScoringPolicy, StructureDetector,
};
pub use report::{aggregate, AggregateReport, AggregationPolicy, PerformanceTier};
