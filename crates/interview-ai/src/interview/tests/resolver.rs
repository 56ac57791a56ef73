use crate::error::EvaluationError;
use crate::interview::domain::{OverrideReason, QuestionRole, RubricChecklist};
use crate::interview::evaluation::{resolve_score, ScoreResolver, ScoringPolicy};

use super::common::{
    background_checklist, background_input, balanced_resolver, behavioral_input, star_checklist,
};

#[test]
fn red_flag_forces_minimum_score_over_everything_else() {
    let resolver = balanced_resolver();
    let checklist = RubricChecklist {
        red_flag: true,
        situation_present: true,
        action_present: true,
        result_present: true,
        has_metrics: true,
        delivery_organized: true,
        ..RubricChecklist::default()
    };
    let input = behavioral_input(checklist, "I led the team and delivered $35M in savings.");

    let result = resolver.resolve(&input);

    assert_eq!(result.score, 1);
    assert_eq!(result.override_reason, Some(OverrideReason::ToxicBehavior));
    assert_eq!(
        result.override_reason.map(OverrideReason::label),
        Some("Toxic Behavior Detected")
    );
}

#[test]
fn red_flag_applies_to_background_questions_too() {
    let resolver = balanced_resolver();
    let checklist = RubricChecklist {
        red_flag: true,
        relevant_history: true,
        communicated_clearly: true,
        ..RubricChecklist::default()
    };
    let input = background_input(checklist, "Ten years of relevant experience.");

    let result = resolver.resolve(&input);

    assert_eq!(result.score, 1);
    assert!(result.override_reason.is_some());
}

#[test]
fn irrelevant_background_is_forced_to_the_weak_constant() {
    let resolver = balanced_resolver();
    let checklist = background_checklist(false, true);
    let input = background_input(checklist, "We grew revenue by 40% at my last role.");

    let result = resolver.resolve(&input);

    // Clarity and detected metrics cannot rescue an irrelevant answer.
    assert_eq!(result.score, 2);
    assert!(result.override_reason.is_none());
}

#[test]
fn background_metrics_are_a_floor_not_an_additive_bonus() {
    let resolver = balanced_resolver();
    let with_metrics = background_input(
        background_checklist(true, true),
        "I drove $35M EBITDA growth over three years.",
    );
    let without_metrics = background_input(
        background_checklist(true, true),
        "I spent three years leading the finance group.",
    );

    // Relevance plus clarity already reaches the metrics floor; detected
    // metrics must not stack past it.
    assert_eq!(resolver.resolve(&with_metrics).score, 4);
    assert_eq!(resolver.resolve(&without_metrics).score, 4);
}

#[test]
fn background_metrics_floor_lifts_a_relevant_but_unclear_answer() {
    let resolver = balanced_resolver();
    let input = background_input(
        background_checklist(true, false),
        "Cut costs 18% across the portfolio.",
    );

    assert_eq!(resolver.resolve(&input).score, 4);
}

#[test]
fn relevant_background_without_extras_scores_the_base_bonus() {
    let resolver = balanced_resolver();
    let input = background_input(
        background_checklist(true, false),
        "I have worked in this field for a while.",
    );

    assert_eq!(resolver.resolve(&input).score, 3);
}

#[test]
fn complete_structure_with_metrics_earns_the_top_tier() {
    let resolver = balanced_resolver();
    let input = behavioral_input(
        star_checklist(true, true, true, true),
        "Our launch slipped. I led a recovery plan and we delivered 2 weeks early.",
    );

    assert_eq!(resolver.resolve(&input).score, 5);
}

#[test]
fn partial_structure_with_metrics_is_not_penalized() {
    let resolver = balanced_resolver();
    let input = behavioral_input(
        star_checklist(false, true, true, true),
        "I implemented caching and latency dropped 60%.",
    );

    assert_eq!(resolver.resolve(&input).score, 5);
}

#[test]
fn gap_logic_penalizes_missing_action_even_with_metrics() {
    let resolver = balanced_resolver();
    let input = behavioral_input(
        star_checklist(true, false, true, true),
        "The company needed better data quality. After some time, it improved.",
    );

    // No action-lexicon words, so the structural detector does not flip the
    // missing action and the answer falls through to the bottom tier.
    assert_eq!(resolver.resolve(&input).score, 1);
}

#[test]
fn corroborated_action_and_result_reach_the_middle_tier() {
    let resolver = balanced_resolver();
    let input = behavioral_input(
        star_checklist(false, false, false, false),
        "I organized meetings with the team. We reassigned tasks and got the project done on time.",
    );

    assert_eq!(resolver.resolve(&input).score, 3);
}

#[test]
fn organized_delivery_with_a_result_earns_partial_credit() {
    let checklist = RubricChecklist {
        result_present: true,
        delivery_organized: true,
        ..RubricChecklist::default()
    };
    let input = behavioral_input(checklist, "It turned out fine in the end.");

    assert_eq!(balanced_resolver().resolve(&input).score, 3);
}

#[test]
fn unstructured_answer_lands_in_the_bottom_tier() {
    let input = behavioral_input(
        star_checklist(false, false, false, false),
        "Things happened and then other things happened.",
    );

    assert_eq!(balanced_resolver().resolve(&input).score, 1);
}

#[test]
fn resolution_is_idempotent() {
    let resolver = balanced_resolver();
    let input = behavioral_input(
        star_checklist(true, true, false, false),
        "I coordinated the rollout and we completed it on schedule.",
    );

    let first = resolver.resolve(&input);
    let second = resolver.resolve(&input);

    assert_eq!(first, second);
}

#[test]
fn compressed_policy_keeps_the_floor_for_red_flags() {
    let resolver = ScoreResolver::new(ScoringPolicy::compressed_2_4());
    let red_flag = RubricChecklist {
        red_flag: true,
        ..RubricChecklist::default()
    };
    let weak = star_checklist(false, false, false, false);

    let flagged = resolver.resolve(&behavioral_input(red_flag, "hostile remarks"));
    let merely_weak = resolver.resolve(&behavioral_input(weak, "nothing to say"));

    // The compressed policy bottoms out at 2 for weak answers; 1 stays
    // reserved for toxic behavior.
    assert_eq!(flagged.score, 1);
    assert_eq!(merely_weak.score, 2);
}

#[test]
fn hybrid_policy_separates_complete_from_partial_structure() {
    let resolver = ScoreResolver::new(ScoringPolicy::hybrid_1_5());
    let text = "A short answer without any of the lexicon words.";

    let complete = resolver.resolve(&behavioral_input(star_checklist(true, true, true, false), text));
    let partial = resolver.resolve(&behavioral_input(star_checklist(false, true, true, false), text));

    assert_eq!(complete.score, 4);
    assert_eq!(partial.score, 3);
}

#[test]
fn hybrid_policy_demands_stronger_metric_evidence() {
    let resolver = ScoreResolver::new(ScoringPolicy::hybrid_1_5());
    // A single percentage is one pattern class, below the hybrid minimum of
    // two, so the answer scores as complete structure without metrics.
    let input = behavioral_input(
        star_checklist(true, true, true, false),
        "Defects fell 30% after the review process changed.",
    );

    assert_eq!(resolver.resolve(&input).score, 4);
}

#[test]
fn resolve_score_selects_the_policy_by_identifier() {
    let input = behavioral_input(
        star_checklist(true, true, true, true),
        "I led the fix and we delivered it.",
    );

    let result = resolve_score(&input, "balanced-1-5").expect("known policy");
    assert_eq!(result.score, 5);
}

#[test]
fn unknown_policy_identifier_is_a_caller_error() {
    let input = behavioral_input(star_checklist(true, true, true, true), "answer");

    match resolve_score(&input, "generous-0-10") {
        Err(EvaluationError::UnknownPolicy(name)) => assert_eq!(name, "generous-0-10"),
        other => panic!("expected unknown policy error, got {other:?}"),
    }
}

#[test]
fn unknown_question_role_is_a_caller_error() {
    match "technical".parse::<QuestionRole>() {
        Err(EvaluationError::UnknownRole(role)) => assert_eq!(role, "technical"),
        other => panic!("expected unknown role error, got {other:?}"),
    }
}
