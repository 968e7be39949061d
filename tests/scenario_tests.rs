//! Seeded end-to-end game scenarios.
//!
//! Each test scripts a whole game through an in-memory console with a
//! fixed seed, re-deriving the random draws with the same generator so
//! the assertions can pin exact outcomes.

use minigames_hub::console::{Console, GameError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Cursor;

fn play(
    game: fn(&mut Console) -> Result<(), GameError>,
    input: &str,
    seed: u64,
) -> String
{
    let mut out = Vec::new();
    {
        let mut con = Console::new(Cursor::new(input.to_string()), &mut out, seed);
        game(&mut con).expect("the game should finish cleanly");
    }
    String::from_utf8(out).expect("game output is utf-8")
}

#[test]
fn guess_number_low_high_then_win()
{
    const SEED: u64 = 42;
    // the secret is the game's first draw once both bounds default
    let secret = ChaCha8Rng::seed_from_u64(SEED).gen_range(1..=100i64);
    let input = format!("\n\n{}\n{}\n{}\n\n", secret - 1, secret + 1, secret);
    let output = play(minigames_hub::games::guess::guess_number, &input, SEED);
    assert!(output.contains("Too low."));
    assert!(output.contains("Too high."));
    assert!(output.contains("Guessed it in 3 tries"));
}

#[test]
fn guess_number_quit_reveals_secret()
{
    const SEED: u64 = 7;
    let secret = ChaCha8Rng::seed_from_u64(SEED).gen_range(1..=100i64);
    let output = play(minigames_hub::games::guess::guess_number, "\n\n\n\n", SEED);
    assert!(output.contains(&format!("You quit. The number was {secret}.")));
}

#[test]
fn math_quiz_empty_input_takes_default_rounds()
{
    // defaults for both prompts, five skipped questions, final pause
    let input = "\n".repeat(8);
    let output = play(minigames_hub::games::quiz::math_quiz, &input, 3);
    assert!(output.contains("Question 5/5"), "rounds must default to 5");
    assert!(output.contains("You scored 0/5"));
}

#[test]
fn math_quiz_scores_a_correct_answer()
{
    const SEED: u64 = 11;
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let a = rng.gen_range(1..=12i64);
    let b = rng.gen_range(1..=12i64);
    let op = *['+', '-', '*'].choose(&mut rng).expect("ops are non-empty");
    let answer = match op {
        '+' => a + b,
        '-' => a - b,
        _ => a * b,
    };
    let input = format!("1\n\n{answer}\n\n");
    let output = play(minigames_hub::games::quiz::math_quiz, &input, SEED);
    assert!(output.contains("Correct!"));
    assert!(output.contains("You scored 1/1"));
}

#[test]
fn thermometer_quit_reveals_secret()
{
    const SEED: u64 = 19;
    let secret = ChaCha8Rng::seed_from_u64(SEED).gen_range(1..=100i64);
    let output = play(minigames_hub::games::guess::thermometer, "\n\n", SEED);
    assert!(output.contains(&format!("You quit. It was {secret}.")));
}

#[test]
fn glass_bridge_safe_path_crosses()
{
    const SEED: u64 = 5;
    // the tile layout is the game's only randomness before the walk
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let safe: String = (0..12)
        .map(|_| if rng.gen_bool(0.5) { "L\n" } else { "R\n" })
        .collect();
    let input = format!("\n\n{safe}\n");
    let output = play(minigames_hub::games::board::glass_bridge, &input, SEED);
    assert!(output.contains("You crossed the bridge"));
}

#[test]
fn glass_bridge_wrong_tile_falls()
{
    const SEED: u64 = 5;
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let first_safe = if rng.gen_bool(0.5) { "L" } else { "R" };
    let wrong = if first_safe == "L" { "R" } else { "L" };
    let input = format!("\n\n{wrong}\n\n");
    let output = play(minigames_hub::games::board::glass_bridge, &input, SEED);
    assert!(output.contains("You fell through the glass"));
}

#[test]
fn red_light_standing_still_is_safe()
{
    // stand for a few rounds, then quit; standing can never lose
    let output = play(
        minigames_hub::games::board::red_green_light,
        "\n\ns\ns\ns\nq\n\n",
        23,
    );
    assert!(!output.contains("You lose"));
}
