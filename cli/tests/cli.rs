use assert_cmd::Command;
use predicates::prelude::*;

fn conquista() -> Command {
    let mut cmd = Command::cargo_bin("conquista").unwrap();
    cmd.args(["--seed", "42", "--no-pause"]);
    cmd
}

#[test]
fn quit_exits_cleanly() {
    conquista()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- WORLD MAP (current state) ---"))
        .stdout(predicate::str::contains("You are the Azul army."))
        .stdout(predicate::str::contains("Leaving the game... See you next time!"));
}

#[test]
fn end_of_input_exits_cleanly() {
    conquista().write_stdin("").assert().success();
}

#[test]
fn invalid_menu_choice_is_reported() {
    conquista()
        .write_stdin("9\nabc\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Try again."));
}

#[test]
fn rejected_attacks_explain_why() {
    conquista()
        .write_stdin("1\n1\n3\n1\n2\n2\n1\n0\n3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ERROR: you can only attack from your own territories (Azul army)!",
        ))
        .stdout(predicate::str::contains(
            "ERROR: you cannot attack a territory that is already yours!",
        ))
        .stdout(predicate::str::contains(
            "ERROR: invalid territory IDs. Choose between 1 and 5.",
        ));
}

#[test]
fn attack_rolls_are_shown() {
    conquista()
        .args(["--player", "Verde"])
        .write_stdin("1\n1\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "IMMINENT ATTACK: Brasil (Verde) attacks Argentina (Azul)!",
        ))
        .stdout(predicate::str::contains("  > Attack rolled: "))
        .stdout(predicate::str::contains("RESULT: "));
}

#[test]
fn unknown_map_is_fatal() {
    Command::cargo_bin("conquista")
        .unwrap()
        .args(["--map", "atlantis"])
        .write_stdin("0\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown map 'atlantis'"));
}

#[test]
fn same_seed_same_game() {
    let run = || {
        conquista()
            .write_stdin("1\n2\n3\n1\n2\n3\n0\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
