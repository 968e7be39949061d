use crate::console::{Console, GameError};
use crate::games::GameEntry;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Top-level dispatch loop. Clears the screen, prints the numbered
/// catalogue, reads a selection, runs the matching entry point. `0` quits.
///
/// This is the one error boundary in the hub: a game that returns `Err`
/// or panics is reported and the menu comes back; a broken minigame can
/// never take the hub down with it. The single exception is
/// [`GameError::Interrupted`], which means stdin itself is gone and is
/// left for the caller to turn into a farewell.
pub fn run(console: &mut Console, games: &[GameEntry]) -> Result<(), GameError>
{
    loop {
        console.clear()?;
        console.line("=== Minigames Hub ===")?;
        console.line("")?;
        for (i, game) in games.iter().enumerate() {
            console.line(format!("{}. {}", i + 1, game.title))?;
        }
        console.line("0. Quit")?;

        let picked = console.prompt_int("\nPick a game (number): ", 0..=games.len() as i64)?;
        let Some(picked) = picked else {
            continue;
        };
        if picked == 0 {
            console.line("Bye! Thanks for playing.")?;
            return Ok(());
        }

        let entry = &games[picked as usize - 1];
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| (entry.run)(console)));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(GameError::Interrupted)) => return Err(GameError::Interrupted),
            Ok(Err(err)) => report(console, entry.title, &err.to_string())?,
            Err(payload) => {
                let text = panic_text(payload.as_ref()).to_string();
                report(console, entry.title, &text)?;
            }
        }
    }
}

fn report(console: &mut Console, title: &str, detail: &str) -> Result<(), GameError>
{
    console.line(format!("Something went wrong in '{title}': {detail}"))?;
    console.pause()
}

fn panic_text(payload: &(dyn Any + Send)) -> &str
{
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text
    } else {
        "unexplained panic"
    }
}
