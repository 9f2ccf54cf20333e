//! Keyword rules that turn insight-bearing messages into [`Insight`](crate::Insight)s.
//!
//! Rules are tried in table order; the first rule with any keyword occurring
//! in the lowercased text wins.  No match means no insight.

use crate::{ChatMessage, InsightDraft, InsightType, Priority};

/// Maximum characters of message text used as an insight title.
const TITLE_CHARS: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct InsightRule {
    /// Lowercase substrings; any one matches.
    pub keywords: &'static [&'static str],
    pub kind: InsightType,
    pub priority: Priority,
    pub impact: &'static str,
    pub mitigation: &'static str,
}

impl InsightRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

pub const INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        keywords:   &["tight", "clearance", "spacing", "close"],
        kind:       InsightType::Risk,
        priority:   Priority::High,
        impact:     "Ergonomic issue may affect usability",
        mitigation: "Increase spacing or component size",
    },
    InsightRule {
        keywords:   &["hard to read", "obscured", "visibility", "dim"],
        kind:       InsightType::Risk,
        priority:   Priority::Medium,
        impact:     "Visibility concern in certain conditions",
        mitigation: "Improve labeling or add illumination",
    },
    InsightRule {
        keywords:   &["consider", "could benefit", "might need", "would be preferable"],
        kind:       InsightType::Action,
        priority:   Priority::Medium,
        impact:     "Enhancement opportunity identified",
        mitigation: "Evaluate feasibility and implement",
    },
    InsightRule {
        keywords:   &["warning", "safety", "prevent", "avoid"],
        kind:       InsightType::Risk,
        priority:   Priority::Critical,
        impact:     "Potential safety or operational risk",
        mitigation: "Add protective measures or warnings",
    },
];

/// First-match-wins classifier over an ordered rule table.
#[derive(Clone, Debug)]
pub struct InsightExtractor {
    rules: Vec<InsightRule>,
}

impl Default for InsightExtractor {
    fn default() -> Self {
        Self::new(INSIGHT_RULES.to_vec())
    }
}

impl InsightExtractor {
    pub fn new(rules: Vec<InsightRule>) -> Self {
        Self { rules }
    }

    /// The first rule matching `text`, case-insensitively.
    pub fn classify(&self, text: &str) -> Option<&InsightRule> {
        let lowered = text.to_lowercase();
        self.rules.iter().find(|r| r.matches(&lowered))
    }

    /// Build an insight from `message`.  `poi_key` and `agent_key` name the
    /// review in the design-driver string.
    pub fn extract(&self, message: &ChatMessage, poi_key: &str, agent_key: &str) -> Option<InsightDraft> {
        let rule = self.classify(&message.text)?;
        Some(InsightDraft {
            kind:            rule.kind,
            priority:        rule.priority,
            poi:             message.poi,
            agent:           message.agent,
            source_messages: vec![message.id],
            title:           title_of(&message.text),
            description:     message.text.clone(),
            impact:          rule.impact.to_owned(),
            mitigation:      rule.mitigation.to_owned(),
            design_driver:   format!("{poi_key} review by {agent_key}"),
        })
    }
}

/// First 50 characters of `text`, with `...` appended when cut.
pub fn title_of(text: &str) -> String {
    match text.char_indices().nth(TITLE_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}
