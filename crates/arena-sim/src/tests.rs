//! Unit and scenario tests for arena-sim.

use std::collections::BTreeSet;

use arena_agent::{AgentSpec, Behavior};
use arena_camera::ViewMode;
use arena_core::{AgentId, ArenaConfig, PoiId, SimRng, SimSpeed, SimTime, Vec3};
use arena_dialogue::{ChatMessage, DialogueBook, DialogueLine, Insight, LineKind};
use arena_scene::synthesizer_scene;

use crate::{Session, SessionBuilder, SessionError, SessionEvent, SessionObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f32 = 0.1;

#[derive(Default)]
struct Recorder {
    moving:   BTreeSet<AgentId>,
    changes:  Vec<(AgentId, Behavior, Behavior)>,
    messages: Vec<ChatMessage>,
    insights: Vec<Insight>,
    modes:    Vec<ViewMode>,
    selected: Vec<Option<PoiId>>,
    hovered:  Vec<Option<PoiId>>,
    frames:   usize,
    starts:   usize,
    stops:    usize,
}

impl SessionObserver for Recorder {
    fn on_start(&mut self, _now: SimTime) {
        self.starts += 1;
    }
    fn on_stop(&mut self, _now: SimTime) {
        self.stops += 1;
    }
    fn on_behavior_change(&mut self, agent: AgentId, from: Behavior, to: Behavior) {
        if to == Behavior::Moving {
            self.moving.insert(agent);
        }
        self.changes.push((agent, from, to));
    }
    fn on_message(&mut self, message: &ChatMessage) {
        self.messages.push(message.clone());
    }
    fn on_insight(&mut self, insight: &Insight) {
        self.insights.push(insight.clone());
    }
    fn on_view_mode(&mut self, mode: ViewMode) {
        self.modes.push(mode);
    }
    fn on_select(&mut self, poi: Option<PoiId>) {
        self.selected.push(poi);
    }
    fn on_hover(&mut self, poi: Option<PoiId>) {
        self.hovered.push(poi);
    }
    fn on_frame(&mut self, _now: SimTime, _frame: &arena_camera::CameraFrame) {
        self.frames += 1;
    }
}

type TestSession = Session<SimRng, Recorder>;

fn synthesizer(seed: u64) -> TestSession {
    SessionBuilder::synthesizer()
        .unwrap()
        .build_with(SimRng::new(seed), Recorder::default())
        .unwrap()
}

/// Config whose scheduler never fires within a test's horizon.
fn pinned() -> ArenaConfig {
    ArenaConfig {
        retarget_min_ms: 3_600_000,
        retarget_max_ms: 3_600_001,
        ..ArenaConfig::default()
    }
}

/// One agent parked on its mark in front of `poi_key`, with `lines` as the
/// only dialogue in the book.
fn lone_reviewer(poi_key: &str, lines: Vec<DialogueLine>) -> (TestSession, PoiId) {
    let scene = synthesizer_scene().unwrap();
    let poi = scene.registry.lookup(poi_key).unwrap();
    let at = scene.registry.position(poi).unwrap();
    let mut book = DialogueBook::new();
    book.insert(poi, lines);

    let mut session = SessionBuilder::new(scene)
        .config(pinned())
        .book(book)
        .agent(
            AgentSpec::new("agent-solo", "Solo", "#000000")
                .at(at + pinned().poi_standoff)
                .looking_at(at)
                .targeting(poi),
        )
        .build_with(SimRng::new(3), Recorder::default())
        .unwrap();
    // Retarget to the same POI: MOVING now, INSPECTING on the next frame.
    assert!(session.set_agent_target(AgentId(0), poi));
    (session, poi)
}

fn run_for(session: &mut TestSession, secs: f32) {
    let frames = (secs / DT).round() as usize;
    for _ in 0..frames {
        session.frame(DT);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn synthesizer_session_starts_stopped_with_three_reviewers() {
        let s = synthesizer(1);
        assert!(!s.is_running());
        assert_eq!(s.pending_events(), 0);
        assert_eq!(s.agents().len(), 3);
        assert_eq!(s.split_agent(), Some(AgentId(0)));
        assert_eq!(s.camera().mode(), ViewMode::Free);

        let alpha = s.agent(AgentId(0)).unwrap();
        assert_eq!(alpha.key, "agent-alpha");
        assert_eq!(alpha.color, "#4F46E5");
        assert_eq!(alpha.behavior, Behavior::Idle);
        let knob = alpha.target_poi.unwrap();
        let at = s.scene().registry.position(knob).unwrap();
        assert_eq!(s.scene().registry.key(knob), "osc-1-knob");
        assert_eq!(alpha.position, at + Vec3::new(0.0, 0.7, 1.2));
        assert_eq!(alpha.look_at, at);
    }

    #[test]
    fn rejects_empty_agent_list() {
        let scene = synthesizer_scene().unwrap();
        assert!(matches!(SessionBuilder::new(scene).build(), Err(SessionError::NoAgents)));
    }

    #[test]
    fn rejects_unknown_target_poi() {
        let scene = synthesizer_scene().unwrap();
        let result = SessionBuilder::new(scene)
            .agent(AgentSpec::new("a", "A", "#000000").targeting(PoiId(200)))
            .build();
        assert!(matches!(result, Err(SessionError::UnknownPoi { .. })));
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ArenaConfig { group_affinity: 1.5, ..ArenaConfig::default() };
        let result = SessionBuilder::synthesizer().unwrap().config(config).build();
        assert!(matches!(result, Err(SessionError::Config(_))));
    }

    #[test]
    fn follow_relations_resolve_by_key() {
        let s = SessionBuilder::synthesizer()
            .unwrap()
            .follow("agent-gamma", "agent-alpha")
            .split_agent("agent-beta")
            .build()
            .unwrap();
        let gamma = s.agent(AgentId(2)).unwrap();
        assert_eq!(gamma.following, Some(AgentId(0)));
        assert_eq!(gamma.behavior, Behavior::Following);
        assert_eq!(s.agent(AgentId(0)).unwrap().display_name(), "Alpha + Gamma");
        assert_eq!(s.split_agent(), Some(AgentId(1)));

        let bad = SessionBuilder::synthesizer().unwrap().follow("agent-zeta", "agent-alpha").build();
        assert!(matches!(bad, Err(SessionError::UnknownAgent(_))));
        let selfish = SessionBuilder::synthesizer().unwrap().follow("agent-beta", "agent-beta").build();
        assert!(matches!(selfish, Err(SessionError::InvalidFollow { .. })));
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn start_arms_one_timer_per_agent_plus_poll() {
        let mut s = synthesizer(2);
        assert!(s.start());
        assert!(!s.start());
        assert_eq!(s.pending_events(), 4);
        let retargets = s
            .pending()
            .filter(|(_, e)| matches!(e, SessionEvent::Retarget(_)))
            .count();
        assert_eq!(retargets, 3);
        for (at, _) in s.pending() {
            assert!(at <= SimTime(15_000));
        }
        assert_eq!(s.observer().starts, 1);
    }

    #[test]
    fn every_agent_moves_within_the_scheduler_window() {
        for speed in [SimSpeed::Normal, SimSpeed::Double, SimSpeed::Quadruple] {
            let mut s = synthesizer(5);
            s.set_speed(speed);
            let initial: Vec<_> = s.agents().iter().map(|a| a.target_poi).collect();
            let mut retargeted = vec![false; initial.len()];
            s.start();
            let frames = (15.0 / speed.factor() / DT).round() as usize;
            for _ in 0..frames {
                s.frame(DT);
                for (i, a) in s.agents().iter().enumerate() {
                    retargeted[i] |= a.target_poi != initial[i];
                }
            }

            assert_eq!(s.observer().moving.len(), 3, "{speed}");
            assert!(retargeted.iter().all(|&r| r), "{speed}: {retargeted:?}");
        }
    }

    #[test]
    fn stop_cancels_every_timer() {
        let mut s = synthesizer(9);
        s.start();
        run_for(&mut s, 2.0);
        assert!(s.stop());
        assert!(!s.stop());
        assert_eq!(s.pending_events(), 0);

        let targets: Vec<_> = s.agents().iter().map(|a| a.target_poi).collect();
        let messages = s.transcript().messages().len();
        run_for(&mut s, 60.0);
        let after: Vec<_> = s.agents().iter().map(|a| a.target_poi).collect();
        assert_eq!(targets, after);
        assert_eq!(s.transcript().messages().len(), messages);
        assert_eq!(s.observer().stops, 1);
    }

    #[test]
    fn speed_change_rearms_scheduler_timers() {
        let mut s = synthesizer(4);
        s.start();
        run_for(&mut s, 1.0);
        s.set_speed(SimSpeed::Quadruple);
        let now = s.now();
        let retargets: Vec<SimTime> = s
            .pending()
            .filter(|(_, e)| matches!(e, SessionEvent::Retarget(_)))
            .map(|(at, _)| at)
            .collect();
        assert_eq!(retargets.len(), 3);
        for at in retargets {
            assert!(at >= now + 1_250 && at <= now + 3_750, "{at}");
        }
        assert_eq!(s.speed(), SimSpeed::Quadruple);
    }

    #[test]
    fn motion_and_camera_run_while_stopped() {
        let mut s = synthesizer(6);
        run_for(&mut s, 1.0);
        assert_eq!(s.observer().frames, 10);
        assert_eq!(s.observer().moving.len(), 3);
        assert!(s.transcript().messages().is_empty());
    }
}

// ── Dialogue and insights ─────────────────────────────────────────────────────

#[cfg(test)]
mod dialogue {
    use super::*;

    fn two_lines() -> Vec<DialogueLine> {
        vec![
            DialogueLine::new("The knob feels solid.", LineKind::Positive),
            DialogueLine::new("Markings are crisp.", LineKind::Observation),
        ]
    }

    #[test]
    fn two_line_pool_goes_quiet_after_two_messages() {
        let (mut s, poi) = lone_reviewer("osc-2-knob", two_lines());
        s.start();
        run_for(&mut s, 30.0);

        let msgs = &s.observer().messages;
        assert_eq!(msgs.len(), 2);
        assert_ne!(msgs[0].text, msgs[1].text);
        assert!(msgs.iter().all(|m| m.poi == poi && m.agent == AgentId(0)));
        // Spaced by at least the minimum cooldown.
        assert!(msgs[1].at.since(msgs[0].at) >= 3_000);
        assert_eq!(s.agent(AgentId(0)).unwrap().behavior, Behavior::Inspecting);
    }

    #[test]
    fn restart_clears_usage() {
        let (mut s, _) = lone_reviewer("osc-2-knob", two_lines());
        s.start();
        run_for(&mut s, 30.0);
        s.stop();
        s.start();
        run_for(&mut s, 1.0);
        assert_eq!(s.observer().messages.len(), 3);
    }

    #[test]
    fn flagged_message_yields_insight_after_delay() {
        let line = DialogueLine::new("Knob has tight clearance to the bezel.", LineKind::Concern).with_insight();
        let (mut s, poi) = lone_reviewer("master-volume", vec![line]);
        s.start();

        run_for(&mut s, 1.2);
        assert_eq!(s.observer().messages.len(), 1);
        assert_eq!(s.observer().messages[0].at, SimTime(500));
        assert!(s.observer().insights.is_empty());

        run_for(&mut s, 0.8);
        let insights = &s.observer().insights;
        assert_eq!(insights.len(), 1);
        let i = &insights[0];
        assert_eq!(i.at, SimTime(1_500));
        assert_eq!(i.kind, arena_dialogue::InsightType::Risk);
        assert_eq!(i.priority, arena_dialogue::Priority::High);
        assert_eq!(i.poi, poi);
        assert_eq!(i.source_messages, vec![s.observer().messages[0].id]);
        assert_eq!(i.design_driver, "master-volume review by agent-solo");
        assert_eq!(s.transcript().insights().len(), 1);
    }

    #[test]
    fn unmatched_flagged_message_yields_nothing() {
        let line = DialogueLine::new("Lovely finish.", LineKind::Positive).with_insight();
        let (mut s, _) = lone_reviewer("main-body", vec![line]);
        s.start();
        run_for(&mut s, 5.0);
        assert_eq!(s.observer().messages.len(), 1);
        assert!(s.transcript().insights().is_empty());
    }

    #[test]
    fn stop_cancels_pending_extraction() {
        let line = DialogueLine::new("Add a safety cover.", LineKind::Suggestion).with_insight();
        let (mut s, _) = lone_reviewer("usb-port", vec![line]);
        s.start();
        run_for(&mut s, 0.8);
        assert_eq!(s.observer().messages.len(), 1);
        s.stop();
        run_for(&mut s, 5.0);
        assert!(s.observer().insights.is_empty());
    }

    #[test]
    fn moving_agents_stay_silent() {
        let (mut s, _) = lone_reviewer("osc-2-knob", two_lines());
        let far = s.scene().registry.lookup("usb-port").unwrap();
        s.start();
        s.set_agent_target(AgentId(0), far);
        run_for(&mut s, 0.6);
        assert_eq!(s.agent(AgentId(0)).unwrap().behavior, Behavior::Moving);
        assert!(s.observer().messages.is_empty());
    }

    #[test]
    fn insight_maintenance() {
        let line = DialogueLine::new("Spacing is tight.", LineKind::Concern).with_insight();
        let (mut s, _) = lone_reviewer("osc-2-knob", vec![line]);
        s.start();
        run_for(&mut s, 2.0);
        let id = s.transcript().insights()[0].id;

        let patch = arena_dialogue::InsightPatch {
            title: Some("Widen OSC spacing".into()),
            ..Default::default()
        };
        assert!(s.update_insight(id, patch));
        assert_eq!(s.transcript().insight(id).unwrap().title, "Widen OSC spacing");
        assert!(s.remove_insight(id));
        assert!(!s.remove_insight(id));
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod commands {
    use super::*;

    #[test]
    fn unknown_ids_are_noops() {
        let mut s = synthesizer(1);
        assert!(!s.set_agent_target(AgentId(0), PoiId(999)));
        assert!(!s.set_agent_target(AgentId(9), PoiId(0)));
        assert!(!s.set_following(AgentId(9), Some(AgentId(0))));
        assert!(!s.select_split_agent(AgentId(9)));
    }

    #[test]
    fn following_cancels_and_release_rearms_timer() {
        let mut s = synthesizer(8);
        s.start();
        assert!(s.set_following(AgentId(1), Some(AgentId(0))));
        let owns_timer = |s: &TestSession, a: AgentId| {
            s.pending().any(|(_, e)| *e == SessionEvent::Retarget(a))
        };
        assert!(!owns_timer(&s, AgentId(1)));
        assert!(owns_timer(&s, AgentId(0)));
        assert!(s.observer().changes.contains(&(AgentId(1), Behavior::Idle, Behavior::Following)));

        // Followers keep following through retarget rounds.
        run_for(&mut s, 20.0);
        assert_eq!(s.agent(AgentId(1)).unwrap().behavior, Behavior::Following);

        assert!(s.set_following(AgentId(1), None));
        assert!(owns_timer(&s, AgentId(1)));
        assert_eq!(s.agent(AgentId(1)).unwrap().behavior, Behavior::Moving);
    }

    #[test]
    fn selection_and_hover_are_signalled() {
        let mut s = synthesizer(1);
        s.select_component(Some(PoiId(3)));
        s.hover_component(Some(PoiId(4)));
        s.hover_component(None);
        assert_eq!(s.selected_component(), Some(PoiId(3)));
        assert_eq!(s.hovered_component(), None);
        assert_eq!(s.observer().selected, vec![Some(PoiId(3))]);
        assert_eq!(s.observer().hovered, vec![Some(PoiId(4)), None]);
    }

    #[test]
    fn sync_leader_draws_agents_into_formation() {
        let mut s = synthesizer(1);
        assert!(s.set_view_mode(ViewMode::SyncLeader));
        assert!(!s.set_view_mode(ViewMode::SyncLeader));
        assert_eq!(s.observer().modes, vec![ViewMode::SyncLeader]);
        run_for(&mut s, 10.0);

        // Arrival stops short by at most the arrival threshold.
        let viewer = s.camera().viewer();
        let slack = s.config().arrival_threshold + 1e-4;
        for a in s.agents().iter() {
            assert!((a.position.y - viewer.position.y).abs() <= slack, "{}", a.name);
            assert!(a.position.z > viewer.position.z, "{} is behind the viewer", a.name);
            assert!(a.look_at.distance(viewer.look_at) < 1e-3);
        }

        s.set_view_mode(ViewMode::Free);
        assert!(!s.camera().is_leader());
    }

    #[test]
    fn split_frame_tracks_selected_agent() {
        let mut s = synthesizer(1);
        s.set_view_mode(ViewMode::SplitScreen);
        assert!(s.select_split_agent(AgentId(2)));
        let frame = s.frame(DT);
        let gamma = s.agent(AgentId(2)).unwrap();
        let eye = frame.secondary.unwrap();
        assert_eq!(eye.position, gamma.position);
        assert_eq!(eye.look_at, gamma.look_at);
    }

    #[test]
    fn heat_accumulates_where_agents_inspect() {
        let (mut s, poi) = lone_reviewer("led-strip", Vec::new());
        run_for(&mut s, 2.0);
        let cells = s.heat_cells();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].poi, poi);
        assert!((cells[0].seconds - 1.9).abs() < 1e-3, "{}", cells[0].seconds);
        assert_eq!(cells[0].intensity, 1.0);
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary {
    use super::*;
    use crate::MeetingSummary;
    use arena_dialogue::{InsightExtractor, InsightType, Transcript};

    #[test]
    fn statistics_over_a_transcript() {
        let s = synthesizer(1);
        let alpha = s.agent(AgentId(0)).unwrap();
        let beta = s.agent(AgentId(1)).unwrap();
        let risky = DialogueLine::new("Clearance is tight.", LineKind::Concern).with_insight();
        let urgent = DialogueLine::new("Add a safety interlock.", LineKind::Suggestion).with_insight();
        let plain = DialogueLine::new("Looks fine.", LineKind::Positive);

        let mut t = Transcript::new();
        let x = InsightExtractor::default();
        let m0 = t.record_message(SimTime(10_000), alpha, PoiId(3), &risky).clone();
        t.record_message(SimTime(59_999), beta, PoiId(6), &plain);
        let m2 = t.record_message(SimTime(61_000), beta, PoiId(9), &urgent).clone();
        let m3 = t.record_message(SimTime(62_000), beta, PoiId(3), &risky).clone();
        for m in [&m0, &m2, &m3] {
            let d = x.extract(m, "poi", "agent").unwrap();
            t.record_insight(m.at, d);
        }

        let sum = MeetingSummary::compute(&t, 3);
        assert_eq!(sum.total_messages, 4);
        assert_eq!(sum.total_insights, 3);
        assert_eq!(sum.critical_count, 1);
        assert_eq!(sum.unique_components, 2);
        assert!((sum.avg_messages_per_agent - 4.0 / 3.0).abs() < 1e-9);
        assert_eq!(sum.insights_by_type[&InsightType::Risk].len(), 3);
        assert!(sum.insights_by_type[&InsightType::Action].is_empty());
        assert!(sum.insights_by_type[&InsightType::Rationale].is_empty());

        assert_eq!(sum.timeline.len(), 2);
        assert_eq!(sum.timeline[0].minute, 0);
        assert_eq!(sum.timeline[0].total, 2);
        assert_eq!(sum.timeline[1].minute, 1);
        assert_eq!(sum.timeline[1].by_agent[&AgentId(1)], 2);
    }

    #[test]
    fn empty_session_floors_denominators() {
        let sum = MeetingSummary::compute(&Transcript::new(), 0);
        assert_eq!(sum.avg_messages_per_agent, 0.0);
        assert!(sum.timeline.is_empty());
        assert_eq!(sum.insights_by_type.len(), 3);
    }
}
