use crate::interview::domain::RubricChecklist;

use super::config::ScoringPolicy;

/// Score a background question from the corrected checklist.
///
/// Irrelevance is a hard ceiling, not merely an absence of bonus, and the
/// metrics floor never applies to an irrelevant answer.
pub(crate) fn score_background(
    checklist: &RubricChecklist,
    has_metrics: bool,
    policy: &ScoringPolicy,
) -> i16 {
    if !checklist.relevant_history {
        return policy.clamp(policy.background.weak_score);
    }

    let mut score = policy.background.relevant_bonus;
    if checklist.communicated_clearly {
        score += policy.background.clarity_bonus;
    }
    if has_metrics {
        // A floor rather than an add, so metrics cannot stack with the
        // relevance bonus past the intended ceiling.
        score = score.max(policy.background.metrics_floor);
    }

    policy.clamp(score)
}

/// Score a behavioral question via the policy's decision table, evaluated top
/// to bottom with first match winning.
pub(crate) fn score_behavioral(
    checklist: &RubricChecklist,
    has_metrics: bool,
    policy: &ScoringPolicy,
) -> i16 {
    let complete_structure =
        checklist.situation_present && checklist.action_present && checklist.result_present;
    // Action plus result counts as structured thinking even without an
    // explicit situation statement.
    let partial_structure = checklist.action_present && checklist.result_present;

    let table = &policy.behavioral;
    let score = if complete_structure && has_metrics {
        table.complete_with_metrics
    } else if partial_structure && has_metrics {
        table.partial_with_metrics
    } else if complete_structure {
        table.complete_structure
    } else if partial_structure {
        table.partial_structure
    } else if checklist.action_present
        || (checklist.delivery_organized && checklist.result_present)
    {
        table.fragmentary
    } else {
        table.fallback
    };

    policy.clamp(score)
}
