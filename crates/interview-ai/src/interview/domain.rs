use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;

/// Boolean claims an upstream AI judge makes about a single answer.
///
/// Every field is lenient on the wire: a missing key or a value of the wrong
/// type deserializes to `false`, since upstream judges are expected to be
/// occasionally sloppy and the engine exists to tolerate that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RubricChecklist {
    #[serde(deserialize_with = "lenient_bool")]
    pub situation_present: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub action_present: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub result_present: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub has_metrics: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub delivery_organized: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub red_flag: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub relevant_history: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub communicated_clearly: bool,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientBool;

    impl<'de> Visitor<'de> for LenientBool {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a boolean claim")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_str<E>(self, _: &str) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(false)
        }

        fn visit_i64<E>(self, _: i64) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(false)
        }

        fn visit_u64<E>(self, _: u64) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(false)
        }

        fn visit_f64<E>(self, _: f64) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(false)
        }

        fn visit_unit<E>(self) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(false)
        }

        fn visit_none<E>(self) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(false)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<bool, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(LenientBool)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<bool, A::Error>
        where
            A: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(false)
        }

        fn visit_map<A>(self, mut map: A) -> Result<bool, A::Error>
        where
            A: MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(false)
        }
    }

    deserializer.deserialize_any(LenientBool)
}

/// Which scoring branch applies to an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionRole {
    Background,
    Behavioral,
}

impl QuestionRole {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionRole::Background => "background",
            QuestionRole::Behavioral => "behavioral",
        }
    }
}

impl FromStr for QuestionRole {
    type Err = EvaluationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "background" => Ok(QuestionRole::Background),
            "behavioral" => Ok(QuestionRole::Behavioral),
            other => Err(EvaluationError::UnknownRole(other.to_string())),
        }
    }
}

/// One answer plus the upstream judgment of it, consumed once per evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEvaluationInput {
    pub question_role: QuestionRole,
    pub answer_text: String,
    pub checklist: RubricChecklist,
}

/// Reason a hard rule determined the score independent of the graduated logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideReason {
    ToxicBehavior,
}

impl OverrideReason {
    pub const fn label(self) -> &'static str {
        match self {
            OverrideReason::ToxicBehavior => "Toxic Behavior Detected",
        }
    }
}

/// Resolved score for a single answer, clamped to the policy bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_reason: Option<OverrideReason>,
}

/// One completed interview turn as recorded by the conversation session.
///
/// A turn with `score: None` carries no rubric evaluation (e.g. the opening
/// handshake) and is excluded from aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewTurn {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub score: Option<i16>,
    #[serde(default)]
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl InterviewTurn {
    /// Convenience constructor for a scored turn.
    pub fn scored(question: impl Into<String>, answer: impl Into<String>, score: i16) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            score: Some(score),
            feedback: String::new(),
            recorded_at: None,
        }
    }

    /// A turn that carries no rubric evaluation, such as the opening handshake.
    pub fn unscored(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            score: None,
            feedback: String::new(),
            recorded_at: None,
        }
    }
}
