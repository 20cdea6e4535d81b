use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::mission::Mission;
use crate::territory::{Territories, Territory, TERRITORY_COUNT};

pub const DEFAULT_MAP: &str = "classic";

pub fn builtin_maps() -> HashMap<&'static str, &'static str> {
    HashMap::from([("classic", include_str!("../content/maps/classic.json"))])
}

#[derive(Debug, Clone, Deserialize)]
struct RawMap {
    name: String,
    territories: Vec<Territory>,
    missions: Vec<Mission>,
}

/// A validated starting position plus the missions that can be drawn on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDef {
    pub name: String,
    pub territories: Territories,
    pub missions: Vec<Mission>,
}

pub fn load_builtin_map(id: &str) -> Result<MapDef> {
    let maps = builtin_maps();
    let Some(text) = maps.get(id) else {
        let mut known: Vec<_> = maps.keys().copied().collect();
        known.sort_unstable();
        bail!("unknown map '{}' (available: {})", id, known.join(", "));
    };
    parse_map(text).with_context(|| format!("failed to load built-in map: {}", id))
}

pub fn parse_map(text: &str) -> Result<MapDef> {
    let raw: RawMap = serde_json::from_str(text).context("failed to parse map JSON")?;

    for t in &raw.territories {
        if t.name.trim().is_empty() || t.owner.as_str().trim().is_empty() {
            bail!("territory entries need a name and an owner");
        }
    }
    if raw.missions.is_empty() {
        bail!("map '{}' has no missions", raw.name);
    }
    if raw.missions.contains(&Mission::ConquerCount(0)) {
        bail!("conquer missions need a target of at least 1");
    }

    let found = raw.territories.len();
    let territories: Territories = raw.territories.try_into().map_err(|_| {
        anyhow::anyhow!("map '{}' has {} territories, expected {}", raw.name, found, TERRITORY_COUNT)
    })?;

    Ok(MapDef {
        name: raw.name,
        territories,
        missions: raw.missions,
    })
}
