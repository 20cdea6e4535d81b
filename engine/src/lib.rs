pub mod combat;
pub mod content;
pub mod dice;
pub mod error;
pub mod game;
pub mod mission;
pub mod render;
pub mod territory;

pub use combat::{attack, resolve_battle, validate_attack, AttackReport, BattleOutcome};
pub use content::{builtin_maps, load_builtin_map, parse_map, MapDef, DEFAULT_MAP};
pub use dice::Dice;
pub use error::{AttackError, GameError};
pub use game::{GameState, GameStatus, MenuChoice, DEFAULT_PLAYER};
pub use mission::Mission;
pub use territory::{faction_totals, Faction, FactionTally, Territories, Territory, TERRITORY_COUNT};

/// Classic starting position, fixed mission and dice. Handy for tests and demos.
pub fn classic_game(mission: Mission, dice: Dice) -> anyhow::Result<GameState> {
    let map = load_builtin_map(DEFAULT_MAP)?;
    Ok(GameState::with_mission(
        map.territories,
        Faction::new(DEFAULT_PLAYER),
        mission,
        dice,
    ))
}
