//! Console text for the map, mission, menu and battle results.

use crate::combat::{AttackReport, BattleOutcome};
use crate::game::GameState;
use crate::mission::Mission;
use crate::territory::{Faction, FactionTally, Territory};

const RULE: &str = "------------------------------------------------";

pub fn render_map(map: &[Territory]) -> String {
    let mut out = String::from("--- WORLD MAP (current state) ---\n");
    out.push_str(&format!(
        "{:<2} | {:<15} | {:<10} | {}\n",
        "ID", "Territory", "Army", "Troops"
    ));
    out.push_str(RULE);
    out.push('\n');
    for (i, t) in map.iter().enumerate() {
        out.push_str(&format!(
            "{:<2} | {:<15} | {:<10} | {}\n",
            i + 1,
            t.name,
            t.owner,
            t.troops
        ));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

pub fn render_standings<'a>(totals: impl IntoIterator<Item = (&'a Faction, &'a FactionTally)>) -> String {
    let parts: Vec<String> = totals
        .into_iter()
        .map(|(f, t)| {
            let noun = if t.territories == 1 { "territory" } else { "territories" };
            format!("{} {} {} ({} troops)", f, t.territories, noun, t.troops)
        })
        .collect();
    format!("Forces: {}\n", parts.join(" | "))
}

pub fn render_mission(mission: &Mission, player: &Faction) -> String {
    format!(
        "\n--- YOUR SECRET MISSION ---\nYou are the {} army.\nObjective: {}\n",
        player,
        mission.describe()
    )
}

pub fn render_menu() -> String {
    "\n--- ACTIONS ---\n1. Attack\n2. Check mission\n0. Quit\n".to_string()
}

/// Everything shown before each prompt.
pub fn render_screen(game: &GameState) -> String {
    let totals = game.faction_totals();
    let mut out = render_map(game.territories());
    out.push_str(&render_standings(&totals));
    out.push_str(&render_mission(game.mission(), game.player()));
    out.push_str(&render_menu());
    out
}

pub fn render_attack(report: &AttackReport) -> String {
    let mut out = format!(
        "\nIMMINENT ATTACK: {} ({}) attacks {} ({})!\n",
        report.attacker_name, report.attacker_faction, report.defender_name, report.defender_faction
    );
    out.push_str("... rolling dice ...\n");
    out.push_str(&format!("  > Attack rolled: {}\n", report.attack_roll));
    out.push_str(&format!("  > Defense rolled: {}\n", report.defend_roll));
    match report.outcome {
        BattleOutcome::DefenderLostTroop => {
            out.push_str("\nRESULT: ATTACK WINS! The defender lost 1 troop.\n");
        }
        BattleOutcome::Conquered => {
            out.push_str("\nRESULT: ATTACK WINS! The defender lost 1 troop.\n");
            out.push_str("!!! TERRITORY CONQUERED !!!\n");
            out.push_str(&format!(
                "{} now belongs to the {} army!\n",
                report.defender_name, report.attacker_faction
            ));
        }
        BattleOutcome::AttackerLostTroop => {
            out.push_str("\nRESULT: DEFENSE WINS! The attacker lost 1 troop.\n");
        }
    }
    out
}

pub fn render_mission_result(won: bool) -> String {
    if won {
        "\n*** CONGRATULATIONS! YOU COMPLETED YOUR MISSION AND WON THE GAME! ***\n".to_string()
    } else {
        "\nYou have not completed your mission yet. Keep fighting!\n".to_string()
    }
}
