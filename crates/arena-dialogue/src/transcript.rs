//! `Transcript`: the session's message and insight log.

use tracing::debug;

use arena_agent::Agent;
use arena_core::{InsightId, MessageId, PoiId, SimTime};

use crate::{ChatMessage, DialogueLine, Insight, InsightDraft, InsightPatch};

/// Append-only message log plus an editable insight list, both in emission
/// order.  Ids are sequential and never reused within a session.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    insights: Vec<Insight>,
    next_message: u64,
    next_insight: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Messages ──────────────────────────────────────────────────────────

    /// Append a message spoken by `agent` about `poi`.
    pub fn record_message(
        &mut self,
        at:    SimTime,
        agent: &Agent,
        poi:   PoiId,
        line:  &DialogueLine,
    ) -> &ChatMessage {
        let id = MessageId(self.next_message);
        self.next_message += 1;
        self.messages.push(ChatMessage {
            id,
            at,
            agent:           agent.id,
            agent_name:      agent.name.clone(),
            agent_color:     agent.color.clone(),
            text:            line.text.clone(),
            kind:            line.kind,
            poi,
            insight_bearing: line.insight,
        });
        let msg = &self.messages[self.messages.len() - 1];
        debug!(message = %msg.id, agent = %msg.agent_name, kind = %msg.kind, "message recorded");
        msg
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Message ids are dense from zero and messages are never removed, so the
    /// id is the slot.
    pub fn message(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.get(id.index())
    }

    // ── Insights ──────────────────────────────────────────────────────────

    pub fn record_insight(&mut self, at: SimTime, draft: InsightDraft) -> InsightId {
        let id = InsightId(self.next_insight);
        self.next_insight += 1;
        debug!(insight = %id, kind = %draft.kind, priority = %draft.priority, "insight recorded");
        self.insights.push(draft.into_insight(id, at));
        id
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn insight(&self, id: InsightId) -> Option<&Insight> {
        self.insights.iter().find(|i| i.id == id)
    }

    /// Apply `patch` to insight `id`.  Returns `false` for an unknown id.
    pub fn update_insight(&mut self, id: InsightId, patch: InsightPatch) -> bool {
        match self.insights.iter_mut().find(|i| i.id == id) {
            Some(insight) => {
                patch.apply(insight);
                true
            }
            None => false,
        }
    }

    /// Returns `false` for an unknown id.
    pub fn remove_insight(&mut self, id: InsightId) -> bool {
        let before = self.insights.len();
        self.insights.retain(|i| i.id != id);
        self.insights.len() != before
    }
}
