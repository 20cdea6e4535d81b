use conquista_engine::render::{render_attack, render_map, render_mission, render_screen, render_standings};
use conquista_engine::{classic_game, Dice, Faction, Mission};

#[test]
fn map_table_lines_up() {
    let game = classic_game(Mission::ConquerCount(3), Dice::from_scripted(vec![])).unwrap();
    insta::assert_snapshot!(render_map(game.territories()), @r"
--- WORLD MAP (current state) ---
ID | Territory       | Army       | Troops
------------------------------------------------
1  | Brasil          | Verde      | 8
2  | Argentina       | Azul       | 5
3  | Peru            | Verde      | 3
4  | Siberia         | Vermelho   | 10
5  | China           | Vermelho   | 8
------------------------------------------------
");
}

#[test]
fn standings_follow_map_order() {
    let game = classic_game(Mission::ConquerCount(3), Dice::from_scripted(vec![])).unwrap();
    assert_eq!(
        render_standings(&game.faction_totals()),
        "Forces: Verde 2 territories (11 troops) | Azul 1 territory (5 troops) | Vermelho 2 territories (18 troops)\n"
    );
}

#[test]
fn mission_block_names_player_and_objective() {
    let text = render_mission(&Mission::DestroyFaction(Faction::new("Verde")), &Faction::new("Azul"));
    assert!(text.contains("You are the Azul army."));
    assert!(text.contains("Objective: Destroy the Verde army."));
}

#[test]
fn screen_has_map_mission_and_menu() {
    let game = classic_game(Mission::ConquerCount(3), Dice::from_scripted(vec![])).unwrap();
    let screen = render_screen(&game);
    assert!(screen.contains("--- WORLD MAP (current state) ---"));
    assert!(screen.contains("Objective: Conquer 3 territories (own 3 or more)."));
    assert!(screen.contains("1. Attack\n2. Check mission\n0. Quit\n"));
}

#[test]
fn conquest_report_announces_new_owner() {
    let mut game =
        classic_game(Mission::ConquerCount(3), Dice::from_scripted(vec![6, 1, 6, 1, 5, 5])).unwrap();
    game.attack(2, 3).unwrap();
    game.attack(2, 3).unwrap();
    let text = render_attack(&game.attack(2, 3).unwrap());
    assert!(text.contains("IMMINENT ATTACK: Argentina (Azul) attacks Peru (Verde)!"));
    assert!(text.contains("  > Attack rolled: 5\n  > Defense rolled: 5\n"));
    assert!(text.contains("!!! TERRITORY CONQUERED !!!"));
    assert!(text.contains("Peru now belongs to the Azul army!"));
}

#[test]
fn defense_report() {
    let mut game = classic_game(Mission::ConquerCount(3), Dice::from_scripted(vec![1, 2])).unwrap();
    let text = render_attack(&game.attack(2, 5).unwrap());
    assert!(text.contains("RESULT: DEFENSE WINS! The attacker lost 1 troop."));
    assert!(!text.contains("CONQUERED"));
}
