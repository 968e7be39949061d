//! Dispatcher routing tests.
//!
//! These drive the menu loop through scripted consoles and a probe
//! registry, checking the 1:1 selection-to-entry-point contract and the
//! never-let-a-game-crash-the-hub boundary.

use minigames_hub::console::{Console, GameError};
use minigames_hub::games::GameEntry;
use minigames_hub::menu;
use std::io::Cursor;

fn probe_one(c: &mut Console) -> Result<(), GameError>
{
    c.line("probe one ran")
}

fn probe_two(c: &mut Console) -> Result<(), GameError>
{
    c.line("probe two ran")
}

fn probe_panics(_c: &mut Console) -> Result<(), GameError>
{
    panic!("probe exploded")
}

fn probe_registry() -> Vec<GameEntry>
{
    vec![
        GameEntry { title: "One", run: probe_one },
        GameEntry { title: "Two", run: probe_two },
        GameEntry { title: "Boomer", run: probe_panics },
    ]
}

fn run_menu(input: &str) -> (Result<(), GameError>, String)
{
    let games = probe_registry();
    let mut out = Vec::new();
    let result = {
        let mut con = Console::new(Cursor::new(input.to_string()), &mut out, 9);
        menu::run(&mut con, &games)
    };
    (result, String::from_utf8(out).expect("menu output is utf-8"))
}

#[test]
fn each_selection_runs_exactly_its_entry()
{
    for (selection, ran, not_ran) in
        [("1", "probe one ran", "probe two ran"), ("2", "probe two ran", "probe one ran")]
    {
        let (result, output) = run_menu(&format!("{selection}\n0\n"));
        assert!(result.is_ok());
        assert!(output.contains(ran), "selection {selection} should run its probe");
        assert!(!output.contains(not_ran), "selection {selection} ran the wrong probe");
    }
}

#[test]
fn zero_quits_without_running_anything()
{
    let (result, output) = run_menu("0\n");
    assert!(result.is_ok());
    assert!(output.contains("Bye! Thanks for playing."));
    assert!(!output.contains("probe"));
}

#[test]
fn empty_selection_redisplays_the_menu()
{
    let (result, output) = run_menu("\n0\n");
    assert!(result.is_ok());
    assert_eq!(output.matches("=== Minigames Hub ===").count(), 2);
}

#[test]
fn panicking_game_returns_to_browsing()
{
    // selection 3 panics; the report pause eats one line; 0 then quits
    let (result, output) = run_menu("3\n\n0\n");
    assert!(result.is_ok(), "a game panic must not escape the dispatcher");
    assert!(output.contains("Something went wrong in 'Boomer': probe exploded"));
    assert_eq!(
        output.matches("=== Minigames Hub ===").count(),
        2,
        "the menu should come back after the failure report"
    );
    assert!(output.contains("Bye! Thanks for playing."));
}

#[test]
fn closed_stdin_surfaces_as_interrupted()
{
    let (result, _) = run_menu("");
    assert!(matches!(result, Err(GameError::Interrupted)));
}

#[test]
fn full_registry_titles_match_menu_lines()
{
    let games = minigames_hub::games::registry();
    let mut out = Vec::new();
    {
        let mut con = Console::new(Cursor::new("0\n".to_string()), &mut out, 9);
        menu::run(&mut con, &games).expect("quit cleanly");
    }
    let output = String::from_utf8(out).expect("utf-8");
    for (i, game) in games.iter().enumerate() {
        let line = format!("{}. {}", i + 1, game.title);
        assert!(output.contains(&line), "menu is missing '{line}'");
    }
    assert!(output.contains("0. Quit"));
}
