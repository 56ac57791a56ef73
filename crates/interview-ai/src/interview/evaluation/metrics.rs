use regex::Regex;

use super::config::MetricRule;

/// Strategy seam for quantitative-impact detection so the pattern battery can
/// be extended or replaced without touching the resolver contract.
pub trait MetricDetector: Send + Sync {
    /// Scan `text` for quantitative or business-impact signals.
    ///
    /// `prior` is the upstream judge's `has_metrics` claim; an asserted `true`
    /// is never downgraded.
    fn detect(&self, text: &str, prior: bool, rule: &MetricRule) -> bool;
}

/// One pattern class per known way candidates quantify impact.
const METRIC_PATTERNS: &[&str] = &[
    // currency amounts: "$35M", "€1,200"
    r"(?i)[$€£]\s?\d[\d,]*(?:\.\d+)?",
    // percentages: "40%", "12.5 %"
    r"(?i)\d+(?:\.\d+)?\s?%",
    // magnitude-suffixed numbers: "35M", "250k"
    r"(?i)\b\d+(?:\.\d+)?\s?(?:k|m|b|mm)\b",
    // spelled-out magnitudes: "2 million", "two million"
    r"(?i)\b(?:\d[\d,]*(?:\.\d+)?\s?|(?:a|one|two|three|four|five|six|seven|eight|nine|ten|several)\s)(?:thousand|million|billion)s?\b",
    // multiplier expressions: "3x", "2.5x"
    r"(?i)\b\d+(?:\.\d+)?x\b",
    // superlative-compliance phrases: "zero incidents"
    r"(?i)\bzero\s+(?:incidents?|defects?|outages?|errors?|downtime|complaints?)\b",
    // count-threshold phrases: "300+ systems"; the plus must sit on the
    // number so arithmetic like "2 + 2" does not count
    r"(?i)\b\d[\d,]*\+\s?\w+",
];

const BUSINESS_KEYWORDS: &str = r"(?i)\b(?:revenue|profit|sales|roi|margin|ebitda|growth|efficiency|costs?|savings?|budget|retention|conversion|churn|throughput|productivity|headcount|uptime|compliance)\b";

/// Default detector backed by a fixed, read-only regex battery.
pub struct RegexMetricDetector {
    patterns: Vec<Regex>,
    business_keywords: Regex,
}

impl RegexMetricDetector {
    pub fn new() -> Self {
        let patterns = METRIC_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("metric pattern is valid"))
            .collect();
        let business_keywords =
            Regex::new(BUSINESS_KEYWORDS).expect("business keyword pattern is valid");

        Self {
            patterns,
            business_keywords,
        }
    }

    fn pattern_matches(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .filter(|pattern| pattern.is_match(text))
            .count()
    }

    fn keyword_cooccurrence(&self, text: &str) -> bool {
        self.business_keywords.is_match(text) && text.bytes().any(|byte| byte.is_ascii_digit())
    }
}

impl Default for RegexMetricDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricDetector for RegexMetricDetector {
    fn detect(&self, text: &str, prior: bool, rule: &MetricRule) -> bool {
        if prior {
            return true;
        }

        match rule {
            MetricRule::Gate => {
                self.patterns.iter().any(|pattern| pattern.is_match(text))
                    || self.keyword_cooccurrence(text)
            }
            MetricRule::MatchCount { minimum } => self.pattern_matches(text) >= *minimum,
        }
    }
}
