use crate::interview::domain::{AnswerEvaluationInput, QuestionRole, RubricChecklist};
use crate::interview::evaluation::{ScoreResolver, ScoringPolicy};

pub(super) fn star_checklist(
    situation: bool,
    action: bool,
    result: bool,
    metrics: bool,
) -> RubricChecklist {
    RubricChecklist {
        situation_present: situation,
        action_present: action,
        result_present: result,
        has_metrics: metrics,
        ..RubricChecklist::default()
    }
}

pub(super) fn background_checklist(relevant: bool, clear: bool) -> RubricChecklist {
    RubricChecklist {
        relevant_history: relevant,
        communicated_clearly: clear,
        ..RubricChecklist::default()
    }
}

pub(super) fn behavioral_input(
    checklist: RubricChecklist,
    answer: &str,
) -> AnswerEvaluationInput {
    AnswerEvaluationInput {
        question_role: QuestionRole::Behavioral,
        answer_text: answer.to_string(),
        checklist,
    }
}

pub(super) fn background_input(
    checklist: RubricChecklist,
    answer: &str,
) -> AnswerEvaluationInput {
    AnswerEvaluationInput {
        question_role: QuestionRole::Background,
        answer_text: answer.to_string(),
        checklist,
    }
}

pub(super) fn balanced_resolver() -> ScoreResolver {
    ScoreResolver::new(ScoringPolicy::balanced_1_5())
}
