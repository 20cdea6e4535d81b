use thiserror::Error;

use crate::territory::Faction;

/// Rejected attack orders, in the order they are checked. None of them mutate the map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("ERROR: invalid territory IDs. Choose between 1 and {count}.")]
    InvalidTerritory { count: usize },
    #[error("ERROR: you can only attack from your own territories ({faction} army)!")]
    NotYourTerritory { faction: Faction },
    #[error("ERROR: you cannot attack a territory that is already yours!")]
    OwnTerritory,
    #[error("ERROR: you need at least 2 troops to launch an attack!")]
    InsufficientTroops,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Attack(#[from] AttackError),
    #[error("the game is already over")]
    Finished,
}
