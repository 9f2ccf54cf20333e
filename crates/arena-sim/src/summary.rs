//! Meeting summary statistics over a transcript.

use std::collections::{BTreeMap, BTreeSet};

use arena_core::{AgentId, InsightId};
use arena_dialogue::{InsightType, Priority, Transcript};

/// Messages emitted in one wall-clock minute of the session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MinuteActivity {
    pub minute: u64,
    pub total: usize,
    pub by_agent: BTreeMap<AgentId, usize>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MeetingSummary {
    pub total_insights: usize,
    pub critical_count: usize,
    /// Distinct POIs referenced by at least one insight.
    pub unique_components: usize,
    pub total_messages: usize,
    /// `total_messages / max(agent_count, 1)`.
    pub avg_messages_per_agent: f64,
    /// Insight ids per type, in emission order.  Every type has an entry.
    pub insights_by_type: BTreeMap<InsightType, Vec<InsightId>>,
    /// Ascending by minute; minutes without messages are omitted.
    pub timeline: Vec<MinuteActivity>,
}

impl MeetingSummary {
    pub fn compute(transcript: &Transcript, agent_count: usize) -> Self {
        let insights = transcript.insights();
        let messages = transcript.messages();

        let mut insights_by_type: BTreeMap<InsightType, Vec<InsightId>> =
            [InsightType::Risk, InsightType::Action, InsightType::Rationale]
                .into_iter()
                .map(|t| (t, Vec::new()))
                .collect();
        for i in insights {
            insights_by_type.entry(i.kind).or_default().push(i.id);
        }

        let mut minutes: BTreeMap<u64, MinuteActivity> = BTreeMap::new();
        for m in messages {
            let minute = m.at.minute();
            let bucket = minutes.entry(minute).or_insert_with(|| MinuteActivity {
                minute,
                total: 0,
                by_agent: BTreeMap::new(),
            });
            bucket.total += 1;
            *bucket.by_agent.entry(m.agent).or_insert(0) += 1;
        }

        Self {
            total_insights: insights.len(),
            critical_count: insights.iter().filter(|i| i.priority == Priority::Critical).count(),
            unique_components: insights.iter().map(|i| i.poi).collect::<BTreeSet<_>>().len(),
            total_messages: messages.len(),
            avg_messages_per_agent: messages.len() as f64 / agent_count.max(1) as f64,
            insights_by_type,
            timeline: minutes.into_values().collect(),
        }
    }
}
