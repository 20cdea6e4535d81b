use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dice::Dice;
use crate::territory::{faction_totals, Faction, Territory};

/// Secret objective, drawn once per game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mission {
    /// Leave the target army with no troops anywhere on the map.
    DestroyFaction(Faction),
    /// Own at least this many territories.
    ConquerCount(usize),
}

impl Mission {
    /// Uniform draw from the pool. `None` only for an empty pool.
    pub fn draw(pool: &[Mission], dice: &mut Dice) -> Option<Mission> {
        let mission = pool.get(dice.pick(pool.len()))?.clone();
        info!(?mission, "mission drawn");
        Some(mission)
    }

    pub fn describe(&self) -> String {
        match self {
            Mission::DestroyFaction(target) => format!("Destroy the {} army.", target),
            Mission::ConquerCount(n) => format!("Conquer {} territories (own {} or more).", n, n),
        }
    }

    /// Pure query over the map. Destroying your own army can never succeed.
    pub fn is_complete(&self, map: &[Territory], player: &Faction) -> bool {
        let totals = faction_totals(map);
        match self {
            Mission::DestroyFaction(target) => {
                if target == player {
                    return false;
                }
                totals.get(target).map_or(0, |t| t.troops) == 0
            }
            Mission::ConquerCount(n) => totals.get(player).map_or(0, |t| t.territories) >= *n,
        }
    }
}
