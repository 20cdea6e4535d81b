use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of territories on every map.
pub const TERRITORY_COUNT: usize = 5;

/// An army color. Compared by exact label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Faction(String);

impl Faction {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Faction {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub owner: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<String>, owner: impl Into<Faction>, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            troops,
        }
    }

    pub fn is_owned_by(&self, faction: &Faction) -> bool {
        &self.owner == faction
    }
}

pub type Territories = [Territory; TERRITORY_COUNT];

/// What one faction holds across the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FactionTally {
    pub territories: usize,
    pub troops: u32,
}

/// Per-faction totals, in order of first appearance on the map.
pub fn faction_totals(map: &[Territory]) -> IndexMap<Faction, FactionTally> {
    let mut totals: IndexMap<Faction, FactionTally> = IndexMap::new();
    for t in map {
        let entry = totals.entry(t.owner.clone()).or_default();
        entry.territories += 1;
        entry.troops += t.troops;
    }
    totals
}

/// Exclusive access to two distinct territories at once.
/// Callers guarantee `a != b` and both in range.
pub(crate) fn pair_mut(map: &mut [Territory], a: usize, b: usize) -> (&mut Territory, &mut Territory) {
    debug_assert!(a != b);
    if a < b {
        let (left, right) = map.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = map.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
