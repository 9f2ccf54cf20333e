use std::fmt;

/// The active way of viewing the scene.  Exactly one is active at a time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    #[default]
    Free,
    SplitScreen,
    AiGuided,
    SyncLeader,
    Overhead,
    Heatmap,
}

impl ViewMode {
    pub const ALL: [ViewMode; 6] = [
        ViewMode::Free,
        ViewMode::SplitScreen,
        ViewMode::AiGuided,
        ViewMode::SyncLeader,
        ViewMode::Overhead,
        ViewMode::Heatmap,
    ];

    /// Position in [`ViewMode::ALL`]; used as the dispatch-table index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Free        => "FREE",
            ViewMode::SplitScreen => "SPLIT_SCREEN",
            ViewMode::AiGuided    => "AI_GUIDED",
            ViewMode::SyncLeader  => "SYNC_LEADER",
            ViewMode::Overhead    => "OVERHEAD",
            ViewMode::Heatmap     => "HEATMAP",
        })
    }
}
