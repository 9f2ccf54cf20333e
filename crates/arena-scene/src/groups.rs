//! The group partition table used by the behavior scheduler.
//!
//! Groups are named clusters of related POIs (oscillators, filter, …).  A POI
//! belongs to at most one group.  Group membership is derived from this table
//! and never stored on the POI itself.

use arena_core::PoiId;

/// One named cluster of POIs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoiGroup {
    pub name: String,
    pub members: Vec<PoiId>,
}

/// The full partition, with a reverse index `PoiId → group`.
#[derive(Clone, Debug, Default)]
pub struct PoiGroups {
    groups:   Vec<PoiGroup>,
    /// `group_of[poi.index()]` is the index into `groups`, if any.
    group_of: Vec<Option<usize>>,
}

impl PoiGroups {
    pub(crate) fn new(groups: Vec<PoiGroup>, poi_count: usize) -> Self {
        let mut group_of = vec![None; poi_count];
        for (g, group) in groups.iter().enumerate() {
            for &poi in &group.members {
                if let Some(slot) = group_of.get_mut(poi.index()) {
                    *slot = Some(g);
                }
            }
        }
        Self { groups, group_of }
    }

    /// The group containing `poi`, if it belongs to one.
    pub fn group_of(&self, poi: PoiId) -> Option<&PoiGroup> {
        self.group_of
            .get(poi.index())
            .copied()
            .flatten()
            .map(|g| &self.groups[g])
    }

    /// `true` if `a` and `b` are in the same group.
    pub fn same_group(&self, a: PoiId, b: PoiId) -> bool {
        match (self.group_index(a), self.group_index(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    fn group_index(&self, poi: PoiId) -> Option<usize> {
        self.group_of.get(poi.index()).copied().flatten()
    }

    pub fn get(&self, name: &str) -> Option<&PoiGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PoiGroup> + '_ {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
