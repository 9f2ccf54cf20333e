//! review: headless design review of the built-in synthesizer.
//!
//! Three reviewers wander the synthesizer for a few simulated minutes while
//! the script below exercises the view modes, speed changes and a follow
//! relation.  The chat log streams to stdout; the heatmap and the meeting
//! summary (as JSON) are printed at the end.
//!
//! ```text
//! cargo run -p review --release [config.json]
//! RUST_LOG=arena_sim=debug cargo run -p review
//! ```

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use arena_camera::ViewMode;
use arena_core::{AgentId, ArenaConfig, SimRng, SimSpeed, SimTime};
use arena_dialogue::{ChatMessage, Insight};
use arena_sim::{SessionBuilder, SessionObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const FRAME_SECS:  f32 = 1.0 / 60.0;
const REVIEW_SECS: u32 = 180;

/// `(second, step)`: commands issued at fixed points of the review.
const SCRIPT: &[(u32, Step)] = &[
    (0,   Step::Start),
    (20,  Step::View(ViewMode::AiGuided)),
    (45,  Step::Speed(SimSpeed::Double)),
    (60,  Step::Follow(2, Some(0))),
    (75,  Step::View(ViewMode::SyncLeader)),
    (100, Step::Follow(2, None)),
    (110, Step::View(ViewMode::SplitScreen)),
    (130, Step::Speed(SimSpeed::Normal)),
    (150, Step::View(ViewMode::Heatmap)),
    (175, Step::Stop),
];

#[derive(Copy, Clone, Debug)]
enum Step {
    Start,
    Stop,
    Speed(SimSpeed),
    View(ViewMode),
    Follow(u32, Option<u32>),
}

// ── Chat log observer ─────────────────────────────────────────────────────────

#[derive(Default)]
struct ChatLog {
    poi_keys: Vec<String>,
    messages: usize,
    insights: usize,
}

impl ChatLog {
    fn poi(&self, index: usize) -> &str {
        self.poi_keys.get(index).map_or("?", String::as_str)
    }
}

impl SessionObserver for ChatLog {
    fn on_message(&mut self, m: &ChatMessage) {
        self.messages += 1;
        println!(
            "[{:>9}] {:<6} @ {:<17} ({}) {}",
            m.at.to_string(),
            m.agent_name,
            self.poi(m.poi.index()),
            m.kind,
            m.text
        );
    }

    fn on_insight(&mut self, i: &Insight) {
        self.insights += 1;
        println!(
            "[{:>9}]   => {} / {}: {}",
            i.at.to_string(),
            i.kind,
            i.priority,
            i.title
        );
    }

    fn on_view_mode(&mut self, mode: ViewMode) {
        println!("---- view: {mode}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    // 1. Config: optional JSON file, seeded for reproducibility otherwise.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening {path}"))?;
            serde_json::from_reader::<_, ArenaConfig>(BufReader::new(file))
                .with_context(|| format!("parsing {path}"))?
        }
        None => ArenaConfig { seed: Some(SEED), ..ArenaConfig::default() },
    };
    info!(seed = ?config.seed, speed = %config.speed, "config loaded");

    // 2. Session.
    let rng = SimRng::from_seed_opt(config.seed);
    let mut session = SessionBuilder::synthesizer()?
        .config(config)
        .build_with(rng, ChatLog::default())?;
    let keys: Vec<String> = session.scene().registry.iter().map(|p| p.key.clone()).collect();
    session.observer_mut().poi_keys = keys;

    println!("=== review — synthesizer design review ===");
    println!(
        "POIs: {}  |  Agents: {}  |  Duration: {REVIEW_SECS} s",
        session.scene().registry.len(),
        session.agents().len()
    );
    println!();

    // 3. Run the script frame by frame.
    let frames_per_sec = (1.0 / FRAME_SECS).round() as u32;
    let mut script = SCRIPT.iter().peekable();
    let t0 = Instant::now();
    for second in 0..REVIEW_SECS {
        while let Some(&(_, step)) = script.next_if(|(at, _)| *at <= second) {
            apply(&mut session, step);
        }
        for _ in 0..frames_per_sec {
            session.frame(FRAME_SECS);
        }
    }
    let elapsed = t0.elapsed();

    // 4. Heatmap.
    println!();
    println!("{:<18} {:>9} {:>9}", "POI", "Dwell (s)", "Heat");
    println!("{}", "-".repeat(38));
    for cell in session.heat_cells() {
        println!(
            "{:<18} {:>9.1} {:>9.2}",
            session.scene().registry.key(cell.poi),
            cell.seconds,
            cell.intensity
        );
    }

    // 5. Summary.
    let log = session.observer();
    println!();
    println!(
        "Reviewed {} in {:.3} s: {} messages, {} insights",
        SimTime(u64::from(REVIEW_SECS) * 1_000),
        elapsed.as_secs_f64(),
        log.messages,
        log.insights
    );
    println!("{}", serde_json::to_string_pretty(&session.summary())?);

    Ok(())
}

fn apply<O: SessionObserver>(session: &mut arena_sim::Session<SimRng, O>, step: Step) {
    match step {
        Step::Start => {
            session.start();
        }
        Step::Stop => {
            session.stop();
        }
        Step::Speed(speed) => session.set_speed(speed),
        Step::View(mode) => {
            session.set_view_mode(mode);
        }
        Step::Follow(follower, leader) => {
            session.set_following(AgentId(follower), leader.map(AgentId));
        }
    }
}
