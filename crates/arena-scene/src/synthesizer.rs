//! The built-in scene: a desktop synthesizer under design review.

use arena_core::Vec3;

use crate::{Scene, SceneBuilder, SceneResult};

/// `(key, position, description)` for every POI on the synthesizer.
pub const SYNTHESIZER_POIS: &[(&str, [f32; 3], &str)] = &[
    ("main-body",        [0.0, 0.0, 0.0],     "Main chassis body"),
    ("side-panel-left",  [-2.5, 0.0, 0.0],    "Left side panel"),
    ("side-panel-right", [2.5, 0.0, 0.0],     "Right side panel"),
    ("osc-1-knob",       [-1.5, 0.8, 0.8],    "Oscillator 1 frequency control"),
    ("osc-2-knob",       [-0.8, 0.8, 0.8],    "Oscillator 2 frequency control"),
    ("osc-mix-knob",     [-1.15, 0.8, 0.4],   "Oscillator mix control"),
    ("filter-cutoff",    [0.2, 0.8, 0.8],     "Filter cutoff frequency"),
    ("filter-resonance", [0.9, 0.8, 0.8],     "Filter resonance control"),
    ("filter-env",       [0.55, 0.8, 0.4],    "Filter envelope amount"),
    ("master-volume",    [1.8, 0.8, 0.8],     "Master volume output level"),
    ("master-tune",      [1.8, 0.8, 0.4],     "Master tuning adjustment"),
    ("main-screen",      [0.0, 1.2, 0.6],     "Main display screen"),
    ("led-strip",        [0.0, 1.0, 1.0],     "Status LED strip"),
    ("audio-out",        [0.0, -0.3, -1.2],   "Audio output jacks"),
    ("midi-ports",       [-1.0, -0.3, -1.2],  "MIDI input/output ports"),
    ("usb-port",         [1.0, -0.3, -1.2],   "USB connectivity port"),
];

/// Logical clusters the scheduler prefers to stay within.
pub const SYNTHESIZER_GROUPS: &[(&str, &[&str])] = &[
    ("oscillators", &["osc-1-knob", "osc-2-knob", "osc-mix-knob"]),
    ("filter",      &["filter-cutoff", "filter-resonance", "filter-env"]),
    ("master",      &["master-volume", "master-tune"]),
    ("display",     &["main-screen", "led-strip"]),
    ("io",          &["audio-out", "midi-ports", "usb-port"]),
    ("chassis",     &["main-body", "side-panel-left", "side-panel-right"]),
];

/// Build the synthesizer scene.
pub fn synthesizer_scene() -> SceneResult<Scene> {
    let mut b = SceneBuilder::new();
    for &(key, pos, description) in SYNTHESIZER_POIS {
        b.add_poi(key, Vec3::from_array(pos), description)?;
    }
    for &(name, members) in SYNTHESIZER_GROUPS {
        b.add_group(name, members)?;
    }
    Ok(b.build())
}
