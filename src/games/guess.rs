//! Guessing and reflex games: numbers, words, odd-one-out, chopping and
//! clicking against the clock.

use crate::console::{Console, GameError};
use std::collections::HashSet;
use std::time::Instant;

const WORDS: [&str; 20] = [
    "python", "banana", "puzzle", "guitar", "suspicious", "memory", "fight", "lumber", "movie",
    "baker", "hospital", "nurse", "down", "righty", "cursor", "mouse", "turbowarp", "scratch",
    "csharp", "common",
];

pub fn guess_number(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Guess the Number ===")?;
    let low = c.prompt_int("Lower bound (default 1): ", ..)?.unwrap_or(1);
    let high = c.prompt_int("Upper bound (default 100): ", ..)?.unwrap_or(100);
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    let secret = c.roll(low..=high);
    let mut tries = 0;
    loop {
        let guess =
            c.prompt_int(&format!("Guess a number between {low} and {high} (Enter to quit): "), ..)?;
        let Some(guess) = guess else {
            c.line(format!("You quit. The number was {secret}."))?;
            break;
        };
        tries += 1;
        if guess < secret {
            c.line("Too low.")?;
        } else if guess > secret {
            c.line("Too high.")?;
        } else {
            c.line(format!("Guessed it in {tries} tries! Well done."))?;
            break;
        }
    }
    c.pause()
}

pub fn thermometer(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Thermometer ===")?;
    let secret = c.roll(1..=100i64);
    let mut prev_diff: Option<i64> = None;
    let mut attempts = 0;
    loop {
        let guess = c.prompt_int("Guess a number 1..100 (Enter to quit): ", 1..=100)?;
        let Some(guess) = guess else {
            c.line(format!("You quit. It was {secret}."))?;
            break;
        };
        attempts += 1;
        let diff = (secret - guess).abs();
        if diff == 0 {
            c.line(format!("Guessed it in {attempts} tries!"))?;
            break;
        }
        match prev_diff {
            None => c.line(if diff <= 20 { "Warm" } else { "Cold" })?,
            Some(prev) if diff < prev => c.line("Warmer")?,
            Some(prev) if diff > prev => c.line("Colder")?,
            Some(_) => c.line("Same as before")?,
        }
        prev_diff = Some(diff);
    }
    c.pause()
}

pub fn guess_the_word(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Guess the Word ===")?;
    let word = c.pick(&WORDS).unwrap_or(&"puzzle").to_string();
    let mut guessed: HashSet<char> = HashSet::new();
    let mut attempts = 7;
    while attempts > 0 {
        let display: String =
            word.chars().map(|ch| if guessed.contains(&ch) { ch } else { '_' }).collect();
        c.line(format!("Word: {display}"))?;
        if word.chars().all(|ch| guessed.contains(&ch)) {
            c.line(format!("You guessed the word! {word}"))?;
            return c.pause();
        }
        let entry = c.prompt_line("Enter a letter (or the whole word): ")?.to_lowercase();
        let mut letters = entry.chars();
        match (letters.next(), letters.next()) {
            (None, _) => {
                c.line("Enter one letter.")?;
                continue;
            }
            (Some(ch), None) => {
                if guessed.contains(&ch) {
                    c.line("Already tried.")?;
                    continue;
                }
                if word.contains(ch) {
                    guessed.insert(ch);
                    c.say("That letter is in there!")?;
                } else {
                    attempts -= 1;
                    c.say(format!("No. Attempts left: {attempts}"))?;
                }
            }
            _ => {
                if entry == word {
                    c.line(format!("You guessed the word! {word}"))?;
                    return c.pause();
                }
                attempts -= 1;
                c.say(format!("Not that word. Attempts left: {attempts}"))?;
            }
        }
    }
    c.line(format!("Out of attempts. The word was: {word}"))?;
    c.pause()
}

pub fn odd_one_out(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Odd One Out ===")?;
    let rounds = c.prompt_int("How many rounds? (default 5): ", 1..)?.unwrap_or(5);
    let puzzles: [(&[&str], &str); 5] = [
        (&["apple", "pear", "carrot"], "carrot"),
        (&["cat", "dog", "car"], "car"),
        (&["red", "blue", "circle"], "circle"),
        (&["lion", "tiger", "shark"], "shark"),
        (&["hammer", "screwdriver", "banana"], "banana"),
    ];
    let mut score = 0;
    for _ in 0..rounds {
        let &(items, odd) = c.pick(&puzzles).unwrap_or(&puzzles[0]);
        let mut shuffled: Vec<&str> = items.to_vec();
        c.shuffle(&mut shuffled);
        c.line(format!("Find the odd one: {}", shuffled.join(", ")))?;
        let answer = c.prompt_line("Your answer: ")?.to_lowercase();
        if answer == odd {
            c.say("Right!")?;
            score += 1;
        } else {
            c.say(format!("Wrong. It was: {odd}"))?;
        }
    }
    c.line(format!("Total: {score}/{rounds}"))?;
    c.pause()
}

pub fn lumber_jack(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Lumber Jack ===")?;
    let chops_needed = c.prompt_int("Chops required (default 10): ", 1..)?.unwrap_or(10);
    let time_limit = c.prompt_int("Seconds allowed (default 8): ", 1..)?.unwrap_or(8);
    c.line(format!("You have {time_limit}s to chop {chops_needed} times (press Enter)."))?;
    c.pause()?;
    let start = Instant::now();
    let mut chops = 0;
    while (start.elapsed().as_secs() as i64) < time_limit && chops < chops_needed {
        c.prompt_line("")?;
        chops += 1;
        c.line(format!("Chop #{chops}"))?;
    }
    let elapsed = start.elapsed().as_secs_f64();
    if chops >= chops_needed {
        c.line("Made it! The lumberjack wins.")?;
    } else {
        c.line(format!("Too slow. Chops done: {chops}"))?;
    }
    c.line(format!("Time: {elapsed:.2}s"))?;
    c.pause()
}

pub fn clicker(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Clicker ===")?;
    let target = c.prompt_int("How many clicks is the goal? (default 50): ", 1..)?.unwrap_or(50);
    let mut score = 0;
    let start = Instant::now();
    c.line("Press Enter to click. Type q to stop early.")?;
    while score < target {
        if c.prompt_line("")? == "q" {
            break;
        }
        score += 1;
        if score % 10 == 0 {
            c.line(format!("Clicks: {score}"))?;
        }
    }
    let elapsed = start.elapsed().as_secs_f64();
    c.line(format!("Done! Clicks: {score}. Time: {elapsed:.2}s"))?;
    c.pause()
}
