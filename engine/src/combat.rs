//! Attack orders: validation against the current map, then one roll pair.

use tracing::{debug, info};

use crate::dice::Dice;
use crate::error::AttackError;
use crate::territory::{pair_mut, Faction, Territory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Attacker rolled equal or higher; defender lost one troop and held.
    DefenderLostTroop,
    /// Defender's last troop fell; the territory changed hands.
    Conquered,
    /// Defender rolled higher; attacker lost one troop.
    AttackerLostTroop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    /// 0-based map indices.
    pub attacker: usize,
    pub defender: usize,
    pub attacker_name: String,
    pub defender_name: String,
    pub attacker_faction: Faction,
    /// Owner before the battle.
    pub defender_faction: Faction,
    pub attack_roll: u32,
    pub defend_roll: u32,
    pub outcome: BattleOutcome,
}

/// Convert a 1-based id as typed by the player into a map index.
fn to_index(id: i64, count: usize) -> Option<usize> {
    let idx = usize::try_from(id.checked_sub(1)?).ok()?;
    (idx < count).then_some(idx)
}

/// Check an attack order without touching the map. Returns 0-based
/// `(attacker, defender)` on success.
pub fn validate_attack(
    map: &[Territory],
    player: &Faction,
    attacker_id: i64,
    defender_id: i64,
) -> Result<(usize, usize), AttackError> {
    let count = map.len();
    let (Some(att), Some(def)) = (to_index(attacker_id, count), to_index(defender_id, count))
    else {
        return Err(AttackError::InvalidTerritory { count });
    };
    if !map[att].is_owned_by(player) {
        return Err(AttackError::NotYourTerritory {
            faction: player.clone(),
        });
    }
    if att == def || map[def].is_owned_by(player) {
        return Err(AttackError::OwnTerritory);
    }
    if map[att].troops <= 1 {
        return Err(AttackError::InsufficientTroops);
    }
    Ok((att, def))
}

/// Apply one roll pair. Ties go to the attacker.
pub fn resolve_battle(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u32,
    defend_roll: u32,
) -> BattleOutcome {
    if attack_roll >= defend_roll {
        defender.troops = defender.troops.saturating_sub(1);
        if defender.troops == 0 {
            defender.owner = attacker.owner.clone();
            defender.troops = 1;
            // the occupying troop; the attacker's floor is not re-checked here
            attacker.troops = attacker.troops.saturating_sub(1);
            return BattleOutcome::Conquered;
        }
        BattleOutcome::DefenderLostTroop
    } else {
        attacker.troops = attacker.troops.saturating_sub(1);
        BattleOutcome::AttackerLostTroop
    }
}

/// Validate, roll once for each side, and update both territories in place.
pub fn attack(
    map: &mut [Territory],
    player: &Faction,
    dice: &mut Dice,
    attacker_id: i64,
    defender_id: i64,
) -> Result<AttackReport, AttackError> {
    let (att, def) = validate_attack(map, player, attacker_id, defender_id).inspect_err(|e| {
        debug!(attacker_id, defender_id, error = %e, "attack rejected");
    })?;

    let attack_roll = dice.d6();
    let defend_roll = dice.d6();
    let (attacker, defender) = pair_mut(map, att, def);
    let defender_faction = defender.owner.clone();
    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attack_roll,
        defend_roll,
        "dice rolled"
    );

    let outcome = resolve_battle(attacker, defender, attack_roll, defend_roll);
    if outcome == BattleOutcome::Conquered {
        info!(territory = %defender.name, owner = %defender.owner, "territory conquered");
    }

    Ok(AttackReport {
        attacker: att,
        defender: def,
        attacker_name: attacker.name.clone(),
        defender_name: defender.name.clone(),
        attacker_faction: attacker.owner.clone(),
        defender_faction,
        attack_roll,
        defend_roll,
        outcome,
    })
}
