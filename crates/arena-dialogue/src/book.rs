//! Candidate dialogue lines per POI.

use rustc_hash::FxHashMap;

use arena_core::PoiId;
use arena_scene::PoiRegistry;

use crate::record::LineKind::{Concern, Observation, Positive, Question, Suggestion};
use crate::{DialogueError, DialogueResult, LineKind};

/// One scripted line.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogueLine {
    pub text: String,
    pub kind: LineKind,
    /// Messages built from this line are mined for an insight.
    pub insight: bool,
}

impl DialogueLine {
    pub fn new(text: &str, kind: LineKind) -> Self {
        Self { text: text.to_owned(), kind, insight: false }
    }

    pub fn with_insight(mut self) -> Self {
        self.insight = true;
        self
    }
}

/// Fixed, ordered candidate lines keyed by POI.  A POI with no entry has
/// nothing to say.
#[derive(Clone, Debug, Default)]
pub struct DialogueBook {
    lines: FxHashMap<PoiId, Vec<DialogueLine>>,
}

impl DialogueBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from a `(poi key, [(text, kind, insight)])` table,
    /// resolving keys against `registry`.
    pub fn from_table(
        registry: &PoiRegistry,
        table:    &[(&str, &[(&str, LineKind, bool)])],
    ) -> DialogueResult<Self> {
        let mut book = Self::new();
        for &(key, lines) in table {
            let poi = registry
                .lookup(key)
                .ok_or_else(|| DialogueError::UnknownPoi(key.to_owned()))?;
            book.insert(
                poi,
                lines
                    .iter()
                    .map(|&(text, kind, insight)| DialogueLine { text: text.to_owned(), kind, insight })
                    .collect(),
            );
        }
        Ok(book)
    }

    /// The built-in synthesizer lines.
    pub fn synthesizer(registry: &PoiRegistry) -> DialogueResult<Self> {
        Self::from_table(registry, SYNTHESIZER_DIALOGUE)
    }

    /// Replace the lines of `poi`.
    pub fn insert(&mut self, poi: PoiId, lines: Vec<DialogueLine>) {
        self.lines.insert(poi, lines);
    }

    /// Lines for `poi` in their fixed order; empty when it has none.
    pub fn lines(&self, poi: PoiId) -> &[DialogueLine] {
        self.lines.get(&poi).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn line(&self, poi: PoiId, index: usize) -> Option<&DialogueLine> {
        self.lines(poi).get(index)
    }

    /// Number of POIs with at least one entry.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Lines spoken about the synthesizer.  `true` marks insight-bearing lines.
pub const SYNTHESIZER_DIALOGUE: &[(&str, &[(&str, LineKind, bool)])] = &[
    ("osc-1-knob", &[
        ("The OSC 1 knob placement follows standard synthesizer ergonomics.", Observation, false),
        ("I'm noticing the frequency range indicator is quite small. Might be hard to read in dim studio lighting.", Concern, false),
        ("The tactile feedback on this encoder feels premium - good haptic response.", Positive, false),
    ]),
    ("osc-2-knob", &[
        ("OSC 2 spacing from OSC 1 looks tight. Users might accidentally adjust both during performance.", Concern, true),
        ("The color differentiation between oscillators is subtle but effective.", Observation, false),
    ]),
    ("osc-mix-knob", &[
        ("Mix control is well-positioned between the two oscillators - intuitive layout.", Positive, false),
        ("This knob is smaller than the main controls. Intentional hierarchy?", Question, false),
    ]),
    ("filter-cutoff", &[
        ("Filter cutoff has good travel range. The sweep feels smooth across the full spectrum.", Positive, false),
        ("The cutoff label placement might get obscured by the user's hand during adjustment.", Concern, true),
    ]),
    ("filter-resonance", &[
        ("Resonance control proximity to cutoff enables one-handed filter manipulation.", Positive, false),
        ("At extreme resonance settings, this could benefit from a visual warning indicator.", Suggestion, true),
    ]),
    ("filter-env", &[
        ("Envelope amount positioned logically below the main filter controls.", Observation, false),
    ]),
    ("master-volume", &[
        ("The Master Volume clearance looks tight for gloved hands. Consider increasing knob diameter.", Concern, true),
        ("Master volume is appropriately the largest control - establishes clear visual hierarchy.", Positive, false),
        ("Red color coding for master level is a good safety indicator.", Positive, false),
    ]),
    ("master-tune", &[
        ("Master tune is recessed - good for preventing accidental adjustments mid-performance.", Positive, false),
    ]),
    ("main-screen", &[
        ("Display viewing angle seems optimal for standing operation.", Positive, false),
        ("Screen brightness might need adjustment range for different lighting conditions.", Concern, true),
        ("The information density on the display is well-balanced - not overwhelming.", Positive, false),
    ]),
    ("led-strip", &[
        ("LED indicators provide good at-a-glance system status.", Positive, false),
        ("The color progression from green to red is intuitive for level monitoring.", Observation, false),
    ]),
    ("audio-out", &[
        ("Audio outputs are easily accessible from the rear panel.", Positive, false),
        ("Dual output jacks allow for stereo or split signal routing.", Observation, false),
    ]),
    ("midi-ports", &[
        ("MIDI port spacing is sufficient for standard DIN connectors.", Positive, false),
        ("Consider adding MIDI activity LEDs near the ports for troubleshooting.", Suggestion, true),
    ]),
    ("usb-port", &[
        ("USB-C would be preferable to this USB-A port for modern studio integration.", Concern, true),
        ("USB placement on the back prevents cable interference during performance.", Positive, false),
    ]),
    ("main-body", &[
        ("The chassis dimensions fit standard 19-inch rack mounting with adapters.", Observation, false),
        ("Material choice provides good rigidity while keeping weight manageable.", Positive, false),
    ]),
    ("side-panel-left", &[
        ("Wood side panels add warmth to the industrial aesthetic.", Positive, false),
        ("Left panel could incorporate a carrying handle for portability.", Suggestion, false),
    ]),
    ("side-panel-right", &[
        ("Matching panels maintain visual symmetry.", Observation, false),
    ]),
];
