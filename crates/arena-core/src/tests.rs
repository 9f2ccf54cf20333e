//! Unit tests for arena-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, PoiId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(2);
        assert_eq!(id.index(), 2);
        assert_eq!(AgentId::try_from(2usize).unwrap(), id);
    }

    #[test]
    fn poi_id_rejects_overflow() {
        assert!(PoiId::try_from(70_000usize).is_err());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(PoiId::default(), PoiId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PoiId(7).to_string(), "PoiId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::geo::{approach, centroid};
    use crate::Vec3;

    #[test]
    fn approach_clamps_factor() {
        let a = Vec3::ZERO;
        let b = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(approach(a, b, 0.25), Vec3::new(2.5, 0.0, 0.0));
        assert_eq!(approach(a, b, 5.0), b);
        assert_eq!(approach(a, b, -1.0), a);
    }

    #[test]
    fn centroid_of_empty_is_origin() {
        assert_eq!(centroid(std::iter::empty()), Vec3::ZERO);
    }

    #[test]
    fn centroid_averages() {
        let c = centroid([Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, 2.0, 0.0)]);
        assert_eq!(c, Vec3::new(2.0, 1.0, 0.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn clock_accumulates_fractional_frames() {
        let mut clock = SimClock::new();
        for _ in 0..3 {
            clock.advance(0.0004); // 0.4 ms per frame
        }
        assert_eq!(clock.now(), SimTime(1));
    }

    #[test]
    fn clock_ignores_bad_deltas() {
        let mut clock = SimClock::new();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        assert_eq!(clock.now(), SimTime::ZERO);
    }

    #[test]
    fn arithmetic_and_display() {
        assert_eq!(SimTime(1_500) + 500, SimTime(2_000));
        assert_eq!(SimTime(100).since(SimTime(400)), 0);
        assert_eq!(SimTime(125_000).minute(), 2);
        assert_eq!(SimTime(1_250).to_string(), "1.250s");
    }
}

#[cfg(test)]
mod speed {
    use crate::SimSpeed;

    #[test]
    fn scale_divides_by_factor() {
        assert_eq!(SimSpeed::Normal.scale_ms(5_000.0), 5_000);
        assert_eq!(SimSpeed::Quadruple.scale_ms(5_000.0), 1_250);
        assert_eq!(SimSpeed::Half.scale_ms(3_000.0), 6_000);
    }

    #[test]
    fn try_from_float() {
        assert_eq!(SimSpeed::try_from(2.0).unwrap(), SimSpeed::Double);
        assert!(SimSpeed::try_from(3.0).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, ScriptedRng, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..32 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn scripted_cycles() {
        let mut r = ScriptedRng::new(vec![0.1, 0.9]);
        assert_eq!(r.next_unit(), 0.1);
        assert_eq!(r.next_unit(), 0.9);
        assert_eq!(r.next_unit(), 0.1);
        assert_eq!(r.draws(), 3);
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut r = ScriptedRng::constant(1.0);
        assert_eq!(r.index(4), Some(3));
        assert_eq!(r.index(0), None);
    }

    #[test]
    fn range_and_chance() {
        let mut r = ScriptedRng::new(vec![0.5, 0.69, 0.7]);
        assert_eq!(r.range(5_000.0, 15_000.0), 10_000.0);
        assert!(r.chance(0.7));
        assert!(!r.chance(0.7));
    }
}

#[cfg(test)]
mod config {
    use crate::ArenaConfig;

    #[test]
    fn default_is_valid() {
        ArenaConfig::default().validate().unwrap();
    }

    #[test]
    fn inverted_interval_rejected() {
        let cfg = ArenaConfig { cooldown_min_ms: 9_000, ..ArenaConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn affinity_out_of_range_rejected() {
        let cfg = ArenaConfig { group_affinity: 1.5, ..ArenaConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
