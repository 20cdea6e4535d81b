use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::info;

use crate::combat::{self, AttackReport};
use crate::content::MapDef;
use crate::dice::Dice;
use crate::error::GameError;
use crate::mission::Mission;
use crate::territory::{faction_totals, Faction, FactionTally, Territories, Territory};

pub const DEFAULT_PLAYER: &str = "Azul";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won,
    Quit,
}

/// One line of menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Attack,
    CheckMission,
    Quit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.parse::<i64>() {
            Ok(1) => MenuChoice::Attack,
            Ok(2) => MenuChoice::CheckMission,
            Ok(0) => MenuChoice::Quit,
            _ => MenuChoice::Invalid(line.to_string()),
        }
    }
}

#[derive(Debug)]
pub struct GameState {
    territories: Territories,
    player: Faction,
    mission: Mission,
    dice: Dice,
    status: GameStatus,
}

impl GameState {
    /// Set up a fresh game on `map`, drawing the mission with `dice`.
    pub fn new(map: MapDef, player: Faction, mut dice: Dice) -> Result<Self> {
        let mission = Mission::draw(&map.missions, &mut dice)
            .with_context(|| format!("map '{}' has no missions to draw", map.name))?;
        info!(map = %map.name, player = %player, "game set up");
        Ok(Self::with_mission(map.territories, player, mission, dice))
    }

    /// Fixed mission, no draw.
    pub fn with_mission(territories: Territories, player: Faction, mission: Mission, dice: Dice) -> Self {
        Self {
            territories,
            player,
            mission,
            dice,
            status: GameStatus::Running,
        }
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn player(&self) -> &Faction {
        &self.player
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn seed(&self) -> Option<u64> {
        self.dice.seed()
    }

    pub fn faction_totals(&self) -> IndexMap<Faction, FactionTally> {
        faction_totals(&self.territories)
    }

    /// `attacker_id`/`defender_id` are 1-based, as entered by the player.
    pub fn attack(&mut self, attacker_id: i64, defender_id: i64) -> Result<AttackReport, GameError> {
        self.ensure_running()?;
        let report = combat::attack(
            &mut self.territories,
            &self.player,
            &mut self.dice,
            attacker_id,
            defender_id,
        )?;
        Ok(report)
    }

    /// Victory query; a satisfied mission ends the game.
    pub fn check_mission(&mut self) -> Result<bool, GameError> {
        self.ensure_running()?;
        let won = self.mission.is_complete(&self.territories, &self.player);
        if won {
            info!(mission = ?self.mission, "mission complete");
            self.status = GameStatus::Won;
        }
        Ok(won)
    }

    pub fn quit(&mut self) {
        if self.is_running() {
            self.status = GameStatus::Quit;
        }
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_running() {
            Ok(())
        } else {
            Err(GameError::Finished)
        }
    }
}
