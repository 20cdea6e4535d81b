//! Blocking console loop: render, prompt, dispatch, repeat.

use std::io::{BufRead, Write};

use anyhow::Result;
use conquista_engine::render::{render_attack, render_mission_result, render_screen};
use conquista_engine::{GameState, MenuChoice, TERRITORY_COUNT};
use tracing::debug;

/// Next line of input, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt(out: &mut impl Write, text: &str) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Non-numeric ids fall outside every valid range.
fn parse_id(line: &str) -> i64 {
    line.trim().parse().unwrap_or(0)
}

fn attack_phase(game: &mut GameState, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n--- ATTACK PHASE ---")?;
    prompt(out, &format!("Choose your attacking territory (1-{}): ", TERRITORY_COUNT))?;
    let Some(attacker) = read_line(input)? else {
        game.quit();
        return Ok(());
    };
    prompt(out, &format!("Choose the target territory (1-{}): ", TERRITORY_COUNT))?;
    let Some(defender) = read_line(input)? else {
        game.quit();
        return Ok(());
    };

    match game.attack(parse_id(&attacker), parse_id(&defender)) {
        Ok(report) => write!(out, "{}", render_attack(&report))?,
        Err(e) => writeln!(out, "\n{}", e)?,
    }
    Ok(())
}

/// Play until the mission is won, the player quits, or input runs out.
pub fn run<R: BufRead, W: Write>(game: &mut GameState, mut input: R, mut out: W, pause: bool) -> Result<()> {
    while game.is_running() {
        write!(out, "\n{}", render_screen(game))?;
        prompt(&mut out, "\nYour choice: ")?;
        let Some(line) = read_line(&mut input)? else {
            game.quit();
            break;
        };

        let choice = MenuChoice::parse(&line);
        debug!(?choice, "menu choice");
        match &choice {
            MenuChoice::Attack => attack_phase(game, &mut input, &mut out)?,
            MenuChoice::CheckMission => {
                let won = game.check_mission()?;
                write!(out, "{}", render_mission_result(won))?;
            }
            MenuChoice::Quit => game.quit(),
            MenuChoice::Invalid(_) => writeln!(out, "\nInvalid option. Try again.")?,
        }

        if pause && choice != MenuChoice::Quit {
            prompt(&mut out, "\nPress Enter to continue...")?;
            if read_line(&mut input)?.is_none() {
                game.quit();
            }
        }
    }
    writeln!(out, "\nLeaving the game... See you next time!")?;
    out.flush()?;
    Ok(())
}
