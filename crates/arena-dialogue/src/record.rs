//! Message and insight records.

use std::fmt;

use arena_core::{AgentId, InsightId, MessageId, PoiId, SimTime};

// ── Enums ─────────────────────────────────────────────────────────────────────

/// Tone of a dialogue line.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    Observation,
    Concern,
    Positive,
    Question,
    Suggestion,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineKind::Observation => "observation",
            LineKind::Concern     => "concern",
            LineKind::Positive    => "positive",
            LineKind::Question    => "question",
            LineKind::Suggestion  => "suggestion",
        })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsightType {
    Risk,
    Action,
    Rationale,
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsightType::Risk      => "RISK",
            InsightType::Action    => "ACTION",
            InsightType::Rationale => "RATIONALE",
        })
    }
}

/// Insight priority, most urgent first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Priority::Critical => "CRITICAL",
            Priority::High     => "HIGH",
            Priority::Medium   => "MEDIUM",
            Priority::Low      => "LOW",
        })
    }
}

// ── ChatMessage ───────────────────────────────────────────────────────────────

/// One emitted dialogue line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatMessage {
    pub id: MessageId,
    pub at: SimTime,
    pub agent: AgentId,
    pub agent_name: String,
    pub agent_color: String,
    pub text: String,
    pub kind: LineKind,
    /// The POI the line concerns.
    pub poi: PoiId,
    /// Whether the line is queued for insight extraction.
    pub insight_bearing: bool,
}

// ── Insight ───────────────────────────────────────────────────────────────────

/// A structured finding extracted from a message.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insight {
    pub id: InsightId,
    pub at: SimTime,
    pub kind: InsightType,
    pub priority: Priority,
    pub poi: PoiId,
    pub agent: AgentId,
    pub source_messages: Vec<MessageId>,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub mitigation: String,
    pub design_driver: String,
}

/// An [`Insight`] before the transcript assigns its id and timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct InsightDraft {
    pub kind: InsightType,
    pub priority: Priority,
    pub poi: PoiId,
    pub agent: AgentId,
    pub source_messages: Vec<MessageId>,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub mitigation: String,
    pub design_driver: String,
}

impl InsightDraft {
    pub fn into_insight(self, id: InsightId, at: SimTime) -> Insight {
        Insight {
            id,
            at,
            kind:            self.kind,
            priority:        self.priority,
            poi:             self.poi,
            agent:           self.agent,
            source_messages: self.source_messages,
            title:           self.title,
            description:     self.description,
            impact:          self.impact,
            mitigation:      self.mitigation,
            design_driver:   self.design_driver,
        }
    }
}

/// Field-wise edit applied by [`Transcript::update_insight`](crate::Transcript::update_insight).
/// `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsightPatch {
    pub kind: Option<InsightType>,
    pub priority: Option<Priority>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub impact: Option<String>,
    pub mitigation: Option<String>,
}

impl InsightPatch {
    pub(crate) fn apply(self, insight: &mut Insight) {
        if let Some(kind) = self.kind {
            insight.kind = kind;
        }
        if let Some(priority) = self.priority {
            insight.priority = priority;
        }
        if let Some(title) = self.title {
            insight.title = title;
        }
        if let Some(description) = self.description {
            insight.description = description;
        }
        if let Some(impact) = self.impact {
            insight.impact = impact;
        }
        if let Some(mitigation) = self.mitigation {
            insight.mitigation = mitigation;
        }
    }
}
