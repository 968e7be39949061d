//! Memorization games: growing sequences and the classic pairs board.

use crate::console::{Console, GameError};

pub const TOPPINGS: [&str; 7] =
    ["cheese", "tomato", "mushroom", "pepperoni", "olive", "onion", "basil"];
pub const FOODS: [&str; 8] =
    ["apple", "banana", "bread", "cheese", "cake", "egg", "fish", "tomato"];
pub const SOUNDS: [&str; 6] = ["beep", "boop", "ding", "buzz", "click", "tock"];

/// Grow a random sequence one item per level; the player retypes it from
/// memory after it is wiped off the screen. False means a miss ended the
/// run early.
fn sequence_drill(
    c: &mut Console,
    pool: &[&str],
    levels: i64,
    one_at_a_time: bool,
) -> Result<bool, GameError>
{
    let mut sequence: Vec<String> = Vec::new();
    for level in 1..=levels {
        sequence.push(c.pick(pool).unwrap_or(&pool[0]).to_string());
        c.clear()?;
        c.line(format!("Level {level}: memorize the sequence:"))?;
        if one_at_a_time {
            for item in &sequence {
                c.say(item.to_uppercase())?;
                c.clear()?;
            }
        } else {
            c.say(sequence.join(" "))?;
            c.clear()?;
        }
        let answer = c.prompt_line("Type the sequence, separated by spaces: ")?.to_lowercase();
        let typed: Vec<&str> = answer.split_whitespace().collect();
        if typed != sequence {
            c.line(format!("Wrong. It was: {}", sequence.join(" ")))?;
            return Ok(false);
        }
        c.say("Correct!")?;
    }
    Ok(true)
}

pub fn pizza_memory(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Pizza Memory ===")?;
    let levels = c.prompt_int("Levels (default 5): ", 1..)?.unwrap_or(5);
    if sequence_drill(c, &TOPPINGS, levels, false)? {
        c.line("You cleared every pizza level. Nice!")?;
    }
    c.pause()
}

pub fn food_memory(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Food Memory ===")?;
    let rounds = c.prompt_int("Rounds (default 6): ", 1..)?.unwrap_or(6);
    if sequence_drill(c, &FOODS, rounds, false)? {
        c.line("You remembered all the food!")?;
    }
    c.pause()
}

pub fn sound_memory(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Sound Memory ===")?;
    let rounds = c.prompt_int("Rounds (default 5): ", 1..)?.unwrap_or(5);
    if sequence_drill(c, &SOUNDS, rounds, true)? {
        c.line("You passed Sound Memory!")?;
    }
    c.pause()
}

pub fn pairs(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Memory (Pairs) ===")?;
    let size = c.prompt_int("Number of pairs (default 6): ", 2..)?.unwrap_or(6);
    let mut cards: Vec<i64> = (0..size).chain(0..size).collect();
    c.shuffle(&mut cards);
    let mut revealed = vec![false; cards.len()];
    let mut tries = 0;
    while revealed.iter().any(|open| !open) {
        c.clear()?;
        c.line("Cards:")?;
        let row: Vec<String> = cards
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if revealed[i] { format!("[{value}]") } else { format!("[{i}]") }
            })
            .collect();
        c.line(row.join(" "))?;
        let a = c.prompt_int("Pick card A (index): ", 0..cards.len() as i64)?;
        let b = c.prompt_int("Pick card B (index): ", 0..cards.len() as i64)?;
        let (Some(a), Some(b)) = (a, b) else {
            c.say("Bad pick.")?;
            continue;
        };
        if a == b {
            c.say("Bad pick.")?;
            continue;
        }
        let (a, b) = (a as usize, b as usize);
        tries += 1;
        if cards[a] == cards[b] {
            c.say(format!("A pair! ({})", cards[a]))?;
            revealed[a] = true;
            revealed[b] = true;
        } else {
            c.say(format!("Not a pair: {} {}", cards[a], cards[b]))?;
        }
    }
    c.line(format!("All open! Tries: {tries}"))?;
    c.pause()
}
