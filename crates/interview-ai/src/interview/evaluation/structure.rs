use regex::Regex;

use crate::interview::domain::RubricChecklist;

/// Strategy seam for corroborating the upstream structural checklist with
/// independent lexical evidence.
pub trait StructureDetector: Send + Sync {
    /// Produce a corrected copy of `checklist`; the upstream input is never
    /// mutated.
    fn corroborate(&self, text: &str, checklist: &RubricChecklist) -> RubricChecklist;
}

const ACTION_VERBS: &[&str] = &[
    "led",
    "managed",
    "built",
    "created",
    "implemented",
    "designed",
    "facilitated",
    "recruited",
    "supervised",
    "organized",
    "coordinated",
    "established",
];

const RESULT_INDICATORS: &[&str] = &[
    "result",
    "results",
    "outcome",
    "achieved",
    "delivered",
    "generated",
    "increased",
    "reduced",
    "improved",
    "successful",
    "completed",
    "done",
];

fn lexicon_pattern(words: &[&str]) -> Regex {
    let alternation = words.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("lexicon pattern is valid")
}

/// Default detector backed by fixed action/result lexicons.
///
/// Corrections are one-directional: a `false` claim may flip to `true` on a
/// lexicon hit, never the reverse. Only `action_present` and `result_present`
/// are corrected; situation detection has no reliable lexical signature and a
/// false positive on `red_flag` is unacceptable, so both are taken as-is.
pub struct LexiconStructureDetector {
    action: Regex,
    result: Regex,
}

impl LexiconStructureDetector {
    pub fn new() -> Self {
        Self {
            action: lexicon_pattern(ACTION_VERBS),
            result: lexicon_pattern(RESULT_INDICATORS),
        }
    }
}

impl Default for LexiconStructureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureDetector for LexiconStructureDetector {
    fn corroborate(&self, text: &str, checklist: &RubricChecklist) -> RubricChecklist {
        let mut corrected = checklist.clone();

        if !corrected.action_present && self.action.is_match(text) {
            corrected.action_present = true;
        }
        if !corrected.result_present && self.result.is_match(text) {
            corrected.result_present = true;
        }

        corrected
    }
}
