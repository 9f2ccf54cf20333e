//! Unit tests for arena-agent.

use arena_core::{AgentId, PoiId, Vec3};

use crate::{AgentSpec, AgentStore, AgentStoreBuilder, Behavior};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn trio() -> AgentStore {
    AgentStoreBuilder::new()
        .agent(AgentSpec::new("a", "Alpha", "#4F46E5").targeting(PoiId(0)))
        .agent(AgentSpec::new("b", "Beta", "#10B981").targeting(PoiId(1)))
        .agent(AgentSpec::new("c", "Gamma", "#F59E0B").targeting(PoiId(2)))
        .build()
        .unwrap()
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn agents_start_idle_and_unfollowed() {
        let store = trio();
        assert_eq!(store.len(), 3);
        for (i, a) in store.iter().enumerate() {
            assert_eq!(a.id, AgentId(i as u32));
            assert_eq!(a.behavior, Behavior::Idle);
            assert!(a.following.is_none());
            assert!(a.dwell.is_empty());
        }
        assert_eq!(store.find("b"), Some(AgentId(1)));
        assert_eq!(store.find("zzz"), None);
    }

    #[test]
    fn duplicate_key_rejected() {
        let result = AgentStoreBuilder::new()
            .agent(AgentSpec::new("a", "A", "#000"))
            .agent(AgentSpec::new("a", "A2", "#fff"))
            .build();
        assert!(result.is_err());
    }
}

// ── Named operations ──────────────────────────────────────────────────────────

#[cfg(test)]
mod operations {
    use super::*;

    #[test]
    fn unknown_id_is_noop() {
        let mut store = trio();
        let before = store.clone();
        let ghost = AgentId(42);
        assert!(!store.update_position(ghost, Vec3::ONE));
        assert!(!store.update_look_at(ghost, Vec3::ONE));
        assert!(!store.update_behavior(ghost, Behavior::Moving));
        assert!(!store.set_target(ghost, PoiId(0)));
        assert!(!store.add_dwell(ghost, PoiId(0), 1.0));
        assert!(!store.set_following(ghost, Some(AgentId(0))));
        assert_eq!(store.agents(), before.agents());
    }

    #[test]
    fn set_target_switches_to_moving() {
        let mut store = trio();
        assert!(store.set_target(AgentId(0), PoiId(5)));
        let a = store.get(AgentId(0)).unwrap();
        assert_eq!(a.target_poi, Some(PoiId(5)));
        assert_eq!(a.behavior, Behavior::Moving);
    }

    #[test]
    fn dwell_never_decreases() {
        let mut store = trio();
        store.add_dwell(AgentId(1), PoiId(1), 0.5);
        store.add_dwell(AgentId(1), PoiId(1), 0.25);
        assert!(!store.add_dwell(AgentId(1), PoiId(1), -3.0));
        assert!(!store.add_dwell(AgentId(1), PoiId(1), f32::NAN));
        assert_eq!(store.get(AgentId(1)).unwrap().dwell_at(PoiId(1)), 0.75);
        assert_eq!(store.get(AgentId(1)).unwrap().dwell_at(PoiId(9)), 0.0);
    }
}

// ── Follow relation ───────────────────────────────────────────────────────────

#[cfg(test)]
mod following {
    use super::*;

    #[test]
    fn follow_merges_name_into_leader() {
        let mut store = trio();
        assert!(store.set_following(AgentId(1), Some(AgentId(0))));
        let beta = store.get(AgentId(1)).unwrap();
        assert_eq!(beta.following, Some(AgentId(0)));
        assert_eq!(beta.behavior, Behavior::Following);
        let alpha = store.get(AgentId(0)).unwrap();
        assert_eq!(alpha.merged_with, vec!["Beta".to_string()]);
        assert_eq!(alpha.display_name(), "Alpha + Beta");
    }

    #[test]
    fn self_follow_and_chains_rejected() {
        let mut store = trio();
        assert!(!store.set_following(AgentId(0), Some(AgentId(0))));
        store.set_following(AgentId(1), Some(AgentId(0)));
        // Gamma may not follow Beta, who is already following.
        assert!(!store.set_following(AgentId(2), Some(AgentId(1))));
        // Alpha is being followed, so it may not follow anyone.
        assert!(!store.set_following(AgentId(0), Some(AgentId(2))));
    }

    #[test]
    fn switching_leader_moves_name() {
        let mut store = trio();
        store.set_following(AgentId(1), Some(AgentId(0)));
        assert!(store.set_following(AgentId(1), Some(AgentId(2))));
        assert!(store.get(AgentId(0)).unwrap().merged_with.is_empty());
        assert_eq!(store.get(AgentId(2)).unwrap().merged_with, vec!["Beta".to_string()]);
    }

    #[test]
    fn release_restores_free_movement() {
        let mut store = trio();
        store.set_following(AgentId(1), Some(AgentId(0)));
        assert!(store.set_following(AgentId(1), None));
        let beta = store.get(AgentId(1)).unwrap();
        assert!(beta.following.is_none());
        assert_eq!(beta.behavior, Behavior::Moving);
        assert!(store.get(AgentId(0)).unwrap().merged_with.is_empty());
        // Releasing an agent that follows nobody is a no-op.
        assert!(!store.set_following(AgentId(1), None));
    }

    #[test]
    fn target_on_follower_is_remembered_not_acted_on() {
        let mut store = trio();
        store.set_following(AgentId(1), Some(AgentId(0)));
        assert!(store.set_target(AgentId(1), PoiId(7)));
        let beta = store.get(AgentId(1)).unwrap();
        assert_eq!(beta.behavior, Behavior::Following);
        assert_eq!(beta.target_poi, Some(PoiId(7)));
    }
}
