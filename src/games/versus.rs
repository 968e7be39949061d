//! Simulated-opponent variants: the same games, but with a roster of
//! NPC players whose decisions come from biased random draws.

use crate::console::{Console, GameError, roster};
use crate::games::memory::{FOODS, SOUNDS, TOPPINGS};
use std::collections::HashSet;
use std::time::Instant;

/// Stand-in for another player's decision: every option starts at weight
/// one, the caller may bias some of them, and each NPC adds its own
/// jitter so the table does not act in lockstep.
pub fn npc_choice<'t>(
    c: &mut Console,
    options: &'t [&str],
    bias: &[(&str, f64)],
) -> &'t str
{
    let weights: Vec<f64> = options
        .iter()
        .map(|option| {
            let mut weight = 1.0;
            if let Some((_, extra)) = bias.iter().find(|(name, _)| name == option) {
                weight += extra;
            }
            weight * c.roll(0.7..1.3)
        })
        .collect();
    match c.pick_weighted(&weights) {
        Some(i) => options[i],
        None => c.pick(options).copied().unwrap_or(options[0]),
    }
}

fn show_scores(c: &mut Console, names: &[String], scores: &[i64]) -> Result<(), GameError>
{
    for (name, score) in names.iter().zip(scores) {
        c.line(format!("{name}: {score}"))?;
    }
    Ok(())
}

pub fn minesweeper_race(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Minesweeper Race ===")?;
    let n = c.prompt_int("Players, you included (default 4): ", 2..)?.unwrap_or(4);
    let rows = c.prompt_int("Rows (default 6): ", 3..)?.unwrap_or(6) as usize;
    let cols = c.prompt_int("Columns (default 8): ", 3..)?.unwrap_or(8) as usize;
    let max_mines = (rows * cols - 1) as i64;
    let mine_count =
        c.prompt_int("Number of mines (default 8): ", 1..=max_mines)?.unwrap_or(8) as usize;
    let names = roster(n);
    let mut mined: HashSet<(usize, usize)> = HashSet::new();
    while mined.len() < mine_count {
        mined.insert((c.roll(0..rows), c.roll(0..cols)));
    }
    let mut counts = vec![vec![0i64; cols]; rows];
    for r in 0..rows {
        for cl in 0..cols {
            if mined.contains(&(r, cl)) {
                counts[r][cl] = -1;
                continue;
            }
            let mut around = 0;
            for dr in -1i64..=1 {
                for dc in -1i64..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (nr, nc) = (r as i64 + dr, cl as i64 + dc);
                    if nr >= 0
                        && nc >= 0
                        && (nr as usize) < rows
                        && (nc as usize) < cols
                        && mined.contains(&(nr as usize, nc as usize))
                    {
                        around += 1;
                    }
                }
            }
            counts[r][cl] = around;
        }
    }
    let mut revealed = vec![vec![false; cols]; rows];
    let mut alive = names.clone();
    let mut turn = 0usize;
    while alive.len() > 1 {
        let current = alive[turn % alive.len()].clone();
        c.clear()?;
        c.line(format!("Players still in: {}", alive.join(", ")))?;
        c.line("The board: unopened cells show their index, opened show a count or M")?;
        for r in 0..rows {
            let row: Vec<String> = (0..cols)
                .map(|cl| {
                    if revealed[r][cl] {
                        if counts[r][cl] == -1 {
                            "M".to_string()
                        } else {
                            counts[r][cl].to_string()
                        }
                    } else {
                        format!("[{r},{cl}]")
                    }
                })
                .collect();
            c.line(row.join(" "))?;
        }
        c.line(format!("Turn: {current}"))?;
        let picked = if current == "You" {
            let row = c.prompt_int("Pick a row: ", 0..rows as i64)?;
            let col = c.prompt_int("Pick a column: ", 0..cols as i64)?;
            match (row, col) {
                (Some(r), Some(cl)) => Some((r as usize, cl as usize)),
                _ => {
                    c.line("Turn skipped.")?;
                    None
                }
            }
        } else {
            let open: Vec<(usize, usize)> = (0..rows)
                .flat_map(|r| (0..cols).map(move |cl| (r, cl)))
                .filter(|&(r, cl)| !revealed[r][cl])
                .collect();
            let choice = c.pick(&open).copied();
            if let Some(cell) = choice {
                c.say(format!("{current} picks {cell:?}"))?;
            }
            choice
        };
        let Some((r, cl)) = picked else {
            turn += 1;
            continue;
        };
        if revealed[r][cl] {
            c.say("Already open - the turn is wasted.")?;
            turn += 1;
            continue;
        }
        revealed[r][cl] = true;
        if counts[r][cl] == -1 {
            c.say(format!("Boom! {current} hit a mine and is out."))?;
            alive.retain(|p| *p != current);
            continue;
        }
        c.say(format!("Opened a count of {}", counts[r][cl]))?;
        turn += 1;
    }
    c.clear()?;
    match alive.first() {
        Some(winner) => c.line(format!("Winner: {winner}"))?,
        None => c.line("Nobody made it.")?,
    }
    c.pause()
}

pub fn chase_race(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Chase vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 5): ", 2..)?.unwrap_or(5);
    let length = c.prompt_int("Track length (default 30): ", 10..)?.unwrap_or(30);
    let names = roster(n);
    let chaser = c.pick(&names).cloned().unwrap_or_else(|| "You".to_string());
    let mut positions = vec![0i64; names.len()];
    let chaser_idx = names.iter().position(|p| *p == chaser).unwrap_or(0);
    positions[chaser_idx] = -3;
    let mut done: HashSet<String> = HashSet::new();
    c.line(format!("Chaser: {chaser}"))?;
    c.pause()?;
    loop {
        for i in 0..names.len() {
            let player = names[i].clone();
            if done.contains(&player) {
                continue;
            }
            if player == "You" {
                let cmd = c.prompt_line("Your move: run/sneak (r/s): ")?.to_lowercase();
                positions[i] += if cmd == "r" { c.roll(2..=4i64) } else { c.roll(0..=2i64) };
            } else if player != chaser {
                let gap = positions[chaser_idx] - positions[i];
                positions[i] += if gap >= -3 { c.roll(1..=3i64) } else { c.roll(0..=2i64) };
            }
            if player == chaser {
                positions[chaser_idx] += c.roll(2..=4i64);
            }
            for q in 0..names.len() {
                if names[q] != chaser
                    && positions[chaser_idx] >= positions[q]
                    && !done.contains(&names[q])
                {
                    c.line(format!("{chaser} caught {}!", names[q]))?;
                    done.insert(names[q].clone());
                }
            }
            for q in 0..names.len() {
                if positions[q] >= length {
                    done.insert(names[q].clone());
                }
            }
        }
        c.clear()?;
        for (name, pos) in names.iter().zip(&positions) {
            let mark = if done.contains(name) { " (out)" } else { "" };
            c.line(format!("{name} {pos}{mark}"))?;
        }
        c.say("")?;
        let still_in: Vec<&String> = names.iter().filter(|p| !done.contains(*p)).collect();
        if still_in.len() <= 1 {
            let list: Vec<String> = still_in.iter().map(|p| p.to_string()).collect();
            c.line(format!("Game over. Still running: {}", list.join(", ")))?;
            return c.pause();
        }
    }
}

pub fn ball_chase_race(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Ball Chase vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 5): ", 2..)?.unwrap_or(5);
    let length = c.prompt_int("Track length (default 28): ", 10..)?.unwrap_or(28);
    let names = roster(n);
    let mut holder = c.pick(&names).cloned().unwrap_or_else(|| "You".to_string());
    let mut positions = vec![0i64; names.len()];
    c.line(format!("Starting with the ball: {holder}"))?;
    c.pause()?;
    loop {
        for i in 0..names.len() {
            let player = names[i].clone();
            if positions[i] >= length {
                continue;
            }
            if player == "You" {
                let action = c.prompt_line("Your move: run/sneak/throw (r/s/t): ")?.to_lowercase();
                if action == "r" {
                    positions[i] += c.roll(2..=4i64);
                } else if action == "t" && holder == "You" {
                    let typed = c.prompt_line("Throw to whom? (name, Enter for random): ")?;
                    let receiver = if names.contains(&typed) && typed != "You" {
                        typed
                    } else {
                        let others: Vec<String> =
                            names.iter().filter(|p| *p != "You").cloned().collect();
                        c.pick(&others).cloned().unwrap_or_else(|| "You".to_string())
                    };
                    if c.chance(0.6) {
                        holder = receiver;
                        c.line(format!("Clean throw - the ball is with {holder}"))?;
                    }
                } else {
                    positions[i] += c.roll(0..=2i64);
                }
            } else if holder == player {
                positions[i] += c.roll(1..=3i64);
                if c.chance(0.2) {
                    let ahead: Vec<String> = names
                        .iter()
                        .enumerate()
                        .filter(|&(q, _)| positions[q] > positions[i])
                        .map(|(_, name)| name.clone())
                        .collect();
                    if let Some(receiver) = c.pick(&ahead) {
                        holder = receiver.clone();
                    }
                }
            } else {
                positions[i] += c.roll(0..=2i64);
            }
        }
        for (i, name) in names.iter().enumerate() {
            if positions[i] >= length && holder == *name {
                c.line(format!("{name} reached the finish with the ball - victory!"))?;
                return c.pause();
            }
        }
        c.clear()?;
        for (name, pos) in names.iter().zip(&positions) {
            let mark = if holder == *name { " (ball)" } else { "" };
            c.line(format!("{name} {pos}{mark}"))?;
        }
        c.say("")?;
    }
}

pub fn clicker_race(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Clicker vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 4): ", 2..)?.unwrap_or(4);
    let duration = c.prompt_int("Seconds (default 10): ", 3..)?.unwrap_or(10);
    let names = roster(n);
    let rates: Vec<f64> = names.iter().map(|_| c.roll(0.8..2.5)).collect();
    let mut tallies: Vec<f64> = vec![0.0; names.len()];
    let start = Instant::now();
    c.line("Hammer Enter as fast as you can. GO! (q stops early)")?;
    while start.elapsed().as_secs() < duration as u64 {
        // NPC click rates accrue while you type
        for i in 1..names.len() {
            tallies[i] += rates[i] * 0.2;
        }
        if c.prompt_line("")? == "q" {
            break;
        }
        tallies[0] += 1.0;
    }
    c.clear()?;
    c.line("Clicker results:")?;
    let scores: Vec<i64> = tallies.iter().map(|t| *t as i64).collect();
    show_scores(c, &names, &scores)?;
    c.pause()
}

pub fn pairs_match(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Memory vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 4): ", 2..)?.unwrap_or(4);
    let pairs = c.prompt_int("Card pairs (default 8): ", 2..)?.unwrap_or(8);
    let names = roster(n);
    let mut cards: Vec<i64> = (0..pairs).chain(0..pairs).collect();
    c.shuffle(&mut cards);
    let mut revealed = vec![false; cards.len()];
    let mut scores = vec![0i64; names.len()];
    let mut turn = 0usize;
    while revealed.iter().any(|open| !open) {
        let current = turn % names.len();
        c.clear()?;
        c.line(format!("Current player: {}", names[current]))?;
        let row: Vec<String> = cards
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if revealed[i] { format!("[{value}]") } else { format!("[{i}]") }
            })
            .collect();
        c.line(row.join(" "))?;
        let (a, b) = if current == 0 {
            let a = c.prompt_int("Pick card A index: ", 0..cards.len() as i64)?;
            let b = c.prompt_int("Pick card B index: ", 0..cards.len() as i64)?;
            (a, b)
        } else {
            let open: Vec<i64> = (0..cards.len() as i64)
                .filter(|&i| !revealed[i as usize])
                .collect();
            let a = c.pick(&open).copied();
            let b = match a {
                Some(first) => {
                    let rest: Vec<i64> = open.into_iter().filter(|&i| i != first).collect();
                    c.pick(&rest).copied()
                }
                None => None,
            };
            if let (Some(a), Some(b)) = (a, b) {
                c.say(format!("{} picks {a} and {b}", names[current]))?;
            }
            (a, b)
        };
        let (Some(a), Some(b)) = (a, b) else {
            c.say("Bad pick - turn lost.")?;
            turn += 1;
            continue;
        };
        if a == b {
            c.say("Bad pick - turn lost.")?;
            turn += 1;
            continue;
        }
        let (a, b) = (a as usize, b as usize);
        c.line(format!("Shown: {} {}", cards[a], cards[b]))?;
        if cards[a] == cards[b] {
            c.say(format!("{} found a pair!", names[current]))?;
            scores[current] += 1;
            revealed[a] = true;
            revealed[b] = true;
            // a match earns another go
        } else {
            turn += 1;
        }
    }
    c.clear()?;
    c.line("Memory standings:")?;
    show_scores(c, &names, &scores)?;
    c.pause()
}

/// Shared loop for the sequence-memory races: the sequence grows, you
/// retype it, NPCs reproduce it with accuracy that fades per level.
fn sequence_race(
    c: &mut Console,
    title: &str,
    pool: &[&str],
    level_prompt: &str,
    default_levels: i64,
    fade: f64,
    floor: f64,
    one_at_a_time: bool,
) -> Result<(), GameError>
{
    c.clear()?;
    c.line(format!("=== {title} ==="))?;
    let n = c.prompt_int("Players, you included (default 4): ", 2..)?.unwrap_or(4);
    let levels = c.prompt_int(level_prompt, 1..)?.unwrap_or(default_levels);
    let names = roster(n);
    let mut scores = vec![0i64; names.len()];
    let mut sequence: Vec<String> = Vec::new();
    for level in 1..=levels {
        sequence.push(c.pick(pool).unwrap_or(&pool[0]).to_string());
        c.clear()?;
        if one_at_a_time {
            for item in &sequence {
                c.say(item.to_uppercase())?;
                c.clear()?;
            }
        } else {
            c.line("Memorize:")?;
            c.say(sequence.join(" "))?;
            c.clear()?;
        }
        for (i, name) in names.iter().enumerate() {
            let correct = if i == 0 {
                let answer =
                    c.prompt_line("Type the sequence, separated by spaces: ")?.to_lowercase();
                answer.split_whitespace().collect::<Vec<&str>>() == sequence
            } else {
                let accuracy =
                    (1.0 - level as f64 * fade + c.roll(-0.1..0.1)).max(floor);
                let got_it = c.chance(accuracy.clamp(0.0, 1.0));
                c.line(format!("{name} -> {}", if got_it { "right" } else { "wrong" }))?;
                got_it
            };
            if correct {
                scores[i] += 1;
            }
        }
        c.say("")?;
    }
    c.clear()?;
    c.line(format!("{title} standings:"))?;
    show_scores(c, &names, &scores)?;
    c.pause()
}

pub fn pizza_memory_race(c: &mut Console) -> Result<(), GameError>
{
    sequence_race(c, "Pizza Memory Race", &TOPPINGS, "Levels (default 5): ", 5, 0.12, 0.2, false)
}

pub fn food_memory_race(c: &mut Console) -> Result<(), GameError>
{
    sequence_race(c, "Food Memory Race", &FOODS, "Rounds (default 6): ", 6, 0.13, 0.3, false)
}

pub fn sound_memory_race(c: &mut Console) -> Result<(), GameError>
{
    sequence_race(c, "Sound Memory Race", &SOUNDS, "Rounds (default 5): ", 5, 0.15, 0.2, true)
}

pub fn construction_crew(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Construction Crew ===")?;
    let n = c.prompt_int("Players, you included (default 4): ", 1..)?.unwrap_or(4);
    let days = c.prompt_int("Days (default 10): ", 1..)?.unwrap_or(10);
    let names = roster(n);
    let mut progresses = vec![0i64; names.len()];
    let mut budget: i64 = 200;
    for day in 1..=days {
        c.clear()?;
        c.line(format!("Day {day}/{days}. Budget: {budget}"))?;
        for (i, name) in names.iter().enumerate() {
            if i == 0 {
                let action =
                    c.prompt_line("Invest or rest? invest/rest (i/r): ")?.to_lowercase();
                if action == "i" && budget > 0 {
                    let invested = budget.min(20);
                    let gained = invested / 2 + c.roll(0..=5i64);
                    progresses[0] += gained;
                    budget -= invested;
                    c.line(format!("You put in {invested}, progress {gained}"))?;
                } else {
                    c.line("You rested.")?;
                }
            } else if c.chance(0.6) {
                let invested = c.roll(5..=20i64);
                progresses[i] += invested / 2 + c.roll(0..=4i64);
                budget -= invested;
                c.line(format!("{name} put in {invested}"))?;
            }
        }
        let total: i64 = progresses.iter().sum();
        c.line(format!("Total progress: {total}"))?;
        if total >= 100 {
            c.line("The build is done!")?;
            return c.pause();
        }
        c.say("")?;
    }
    let total: i64 = progresses.iter().sum();
    c.line(format!("Out of time. Total progress: {total}"))?;
    c.pause()
}

pub fn rooms_hunt(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Rooms vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 5): ", 2..)?.unwrap_or(5);
    let room_count = c.prompt_int("How many rooms (default 8): ", 3..)?.unwrap_or(8);
    let names = roster(n);
    let mut rooms: Vec<i64> = names.iter().map(|_| c.roll(0..room_count)).collect();
    let mut hidden = vec![false; names.len()];
    let mut alive: HashSet<String> = names.iter().cloned().collect();
    let rounds = c.prompt_int("Rounds (default 10): ", 1..)?.unwrap_or(10);
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}. Players alive: {}", alive.len()))?;
        for (i, name) in names.iter().enumerate() {
            if !alive.contains(name) {
                continue;
            }
            if i == 0 {
                let cmd = c
                    .prompt_line("Your action: move / hide / search (m/h/s) (Enter skip): ")?
                    .to_lowercase();
                if cmd.starts_with('m') {
                    let side = c.prompt_line("L or R: ")?.to_lowercase();
                    let next = if side == "l" { rooms[0] - 1 } else { rooms[0] + 1 };
                    if (0..room_count).contains(&next) {
                        rooms[0] = next;
                        hidden[0] = false;
                        c.line(format!("You entered room {next}"))?;
                    }
                } else if cmd == "h" {
                    hidden[0] = true;
                    c.line("You hid.")?;
                } else if cmd == "s" {
                    c.line("You searched the room.")?;
                }
            } else {
                let act: f64 = c.roll(0.0..1.0);
                if act < 0.4 {
                    let next = rooms[i] + if c.chance(0.5) { -1 } else { 1 };
                    if (0..room_count).contains(&next) {
                        rooms[i] = next;
                        hidden[i] = false;
                    }
                } else if act < 0.7 {
                    hidden[i] = true;
                }
            }
        }
        if c.chance(0.35) {
            let lair = c.roll(0..room_count);
            for (i, name) in names.iter().enumerate() {
                if alive.contains(name) && rooms[i] == lair && !hidden[i] {
                    c.line(format!("The monster ate {name}"))?;
                    alive.remove(name);
                }
            }
        }
        c.say("")?;
        if alive.len() <= 1 {
            break;
        }
    }
    c.clear()?;
    let mut left: Vec<String> = alive.into_iter().collect();
    left.sort();
    c.line(format!("Game over. Survivors: {}", left.join(", ")))?;
    c.pause()
}

pub fn curse_house(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Curse vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 5): ", 2..)?.unwrap_or(5);
    let room_count = c.prompt_int("Rooms in the house (default 6): ", 2..)?.unwrap_or(6);
    let names = roster(n);
    let mut health = vec![10i64; names.len()];
    let mut rooms: Vec<i64> = names.iter().map(|_| c.roll(0..room_count)).collect();
    let rounds = c.prompt_int("Rounds (default 12): ", 1..)?.unwrap_or(12);
    let effects: [(&str, i64); 6] = [
        ("shadow", -2),
        ("blessing", 2),
        ("freeze", -1),
        ("feast", 1),
        ("sleep curse", -1),
        ("mana", 1),
    ];
    let mut standing: Vec<usize> = (0..names.len()).collect();
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}"))?;
        let spots: Vec<String> = standing
            .iter()
            .map(|&i| format!("{}: room {}", names[i], rooms[i]))
            .collect();
        c.line(format!("Positions: {}", spots.join(", ")))?;
        for &i in &standing {
            if i == 0 {
                let cmd =
                    c.prompt_line("move L/R or stay (m/s) (Enter stay): ")?.to_lowercase();
                if cmd.starts_with('m') {
                    let side = c.prompt_line("L or R: ")?.to_lowercase();
                    let next = if side == "l" { rooms[0] - 1 } else { rooms[0] + 1 };
                    if (0..room_count).contains(&next) {
                        rooms[0] = next;
                    }
                }
            } else if c.chance(0.6) {
                rooms[i] = (rooms[i] + c.roll(-1..=1i64)).clamp(0, room_count - 1);
            }
        }
        let &(effect, delta) = c.pick(&effects).unwrap_or(&effects[0]);
        let room = c.roll(0..room_count);
        c.line(format!("Room {room} flared with: {effect} ({delta:+})"))?;
        for &i in &standing {
            if rooms[i] == room {
                health[i] += delta;
                c.line(format!("{} -> health {}", names[i], health[i]))?;
            }
        }
        let dead: Vec<usize> = standing.iter().copied().filter(|&i| health[i] <= 0).collect();
        for &i in &dead {
            c.line(format!("{} died to the effect.", names[i]))?;
        }
        standing.retain(|&i| health[i] > 0);
        c.say("")?;
        if standing.len() <= 1 {
            break;
        }
    }
    c.clear()?;
    c.line("Final player health:")?;
    for (name, hp) in names.iter().zip(&health) {
        c.line(format!("{name}: {}", (*hp).max(0)))?;
    }
    c.pause()
}

pub fn pet_car(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Pet Car vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 4): ", 1..)?.unwrap_or(4);
    let names = roster(n);
    let mut mood: i64 = 5;
    let mut fuel: i64 = 5;
    let mut dirt: i64 = 3;
    let rounds = c.prompt_int("Rounds of attention (default 8): ", 1..)?.unwrap_or(8);
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}. The car - mood {mood}, fuel {fuel}, dirt {dirt}"))?;
        for i in 0..names.len() {
            if i == 0 {
                let action = c.prompt_choice(
                    "Something for the car:",
                    &["feed (fuel it)", "clean", "talk", "drive", "skip"],
                )?;
                match action {
                    Some(0) => {
                        fuel = (fuel + 3).min(10);
                        mood = (mood + 1).min(10);
                        c.line("You fueled the car.")?;
                    }
                    Some(1) => {
                        dirt = (dirt - 2).max(0);
                        mood = (mood + 1).min(10);
                        c.line("You cleaned the car.")?;
                    }
                    Some(2) => {
                        mood = (mood + 1).min(10);
                        c.line("You talked to the car.")?;
                    }
                    Some(3) => {
                        if fuel > 0 {
                            fuel -= 1;
                            mood = (mood + 1).min(10);
                            c.line("You went for a drive - the car is happy.")?;
                        } else {
                            c.line("No fuel.")?;
                        }
                    }
                    _ => c.line("Skipped.")?,
                }
            } else {
                let act: f64 = c.roll(0.0..1.0);
                if act < 0.25 {
                    fuel = (fuel + 2).min(10);
                    mood += 1;
                } else if act < 0.5 {
                    dirt = (dirt - 1).max(0);
                    mood += 1;
                } else if act < 0.8 && fuel > 0 {
                    fuel -= 1;
                    mood += 1;
                }
            }
        }
        mood = (mood - 1).max(0);
        dirt = (dirt + 1).min(10);
        c.say("")?;
    }
    c.clear()?;
    c.line(format!("The car winds up with mood {mood}, fuel {fuel}, dirt {dirt}"))?;
    c.pause()
}

pub fn revenge_club(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Revenge vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 4): ", 2..)?.unwrap_or(4);
    let names = roster(n);
    let mut scores = vec![0i64; names.len()];
    let options = ["Sabotage", "Public shaming", "Forgiveness", "Ignore"];
    for round in 1..=4 {
        let victim = c.pick(&names).cloned().unwrap_or_default();
        c.line(format!("Round {round}, target: {victim}"))?;
        for i in 0..names.len() {
            if i == 0 {
                let picked = c.prompt_choice("What do you do?", &options)?;
                if matches!(picked, Some(0) | Some(1)) {
                    scores[0] += c.roll(0..=2i64);
                }
            } else {
                let choice = npc_choice(c, &options, &[("Sabotage", 0.5)]);
                if choice == "Sabotage" || choice == "Public shaming" {
                    scores[i] += c.roll(0..=2i64);
                }
            }
        }
        c.say("")?;
    }
    c.clear()?;
    c.line("The avengers' tallies:")?;
    show_scores(c, &names, &scores)?;
    c.pause()
}

pub fn apocalypse_together(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== End of the World vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 5): ", 2..)?.unwrap_or(5);
    let names = roster(n);
    let mut resources: Vec<i64> = names.iter().map(|_| c.roll(1..=5i64)).collect();
    let rounds = c.prompt_int("Rounds of survival (default 6): ", 1..)?.unwrap_or(6);
    for round in 1..=rounds {
        c.line(format!("Round {round}"))?;
        match *c.pick(&["radiation", "storm", "panic", "calm"]).unwrap_or(&"calm") {
            "storm" => {
                let loser = c.roll(0..names.len());
                resources[loser] = (resources[loser] - 2).max(0);
                c.say(format!("{} lost resources.", names[loser]))?;
            }
            "panic" => {
                let giver = c.roll(0..names.len());
                let mut taker = c.roll(0..names.len());
                while taker == giver {
                    taker = c.roll(0..names.len());
                }
                let moved = resources[giver].min(2);
                resources[giver] -= moved;
                resources[taker] += moved;
                c.say(format!("{} shared with {}", names[giver], names[taker]))?;
            }
            _ => c.say("Stable, for now.")?,
        }
    }
    c.line("Resource standings:")?;
    show_scores(c, &names, &resources)?;
    c.pause()
}

pub fn five_nights_shift(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Five Nights vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 3): ", 1..)?.unwrap_or(3);
    let names = roster(n);
    let mut sanity = vec![10i64; names.len()];
    let nights = c.prompt_int("Nights (default 3): ", 1..)?.unwrap_or(3);
    for night in 1..=nights {
        c.line(format!("Night {night}"))?;
        for (i, name) in names.iter().enumerate() {
            let lost = c.roll(0..=3i64);
            sanity[i] -= lost;
            c.line(format!("{name} lost {lost}"))?;
        }
        c.say("")?;
    }
    c.line("Sanity remaining:")?;
    show_scores(c, &names, &sanity)?;
    c.pause()
}

pub fn abandoned_crawl(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Abandoned Place vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 4): ", 1..)?.unwrap_or(4);
    let names = roster(n);
    let mut health = vec![10i64; names.len()];
    let rooms = ["kitchen", "attic", "basement", "hall"];
    for _ in 0..5 {
        let room = *c.pick(&rooms).unwrap_or(&rooms[0]);
        c.line(format!("Room: {room}"))?;
        for i in 0..names.len() {
            if i == 0 {
                let cmd =
                    c.prompt_line("Brick / search / leave (brick/search/leave): ")?.to_lowercase();
                if cmd == "search" && c.chance(0.3) {
                    health[0] += 1;
                    c.line("You found a first-aid kit.")?;
                }
            } else {
                let choice = npc_choice(c, &["search", "leave"], &[]);
                if choice == "search" && c.chance(0.2) {
                    health[i] -= 1;
                }
            }
        }
        c.say("")?;
    }
    c.line("Player health:")?;
    show_scores(c, &names, &health)?;
    c.pause()
}

pub fn oddities_gala(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Oddities vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 5): ", 1..)?.unwrap_or(5);
    let names = roster(n);
    let mut weirdness = vec![0i64; names.len()];
    for _ in 0..6 {
        let effect =
            *c.pick(&["mirror", "voices", "timewarp", "shadows"]).unwrap_or(&"mirror");
        c.line(format!("Effect: {effect}"))?;
        for score in weirdness.iter_mut() {
            if c.chance(0.3) {
                *score += 1;
            }
        }
        c.say("")?;
    }
    c.line("Weirdness readings:")?;
    show_scores(c, &names, &weirdness)?;
    c.pause()
}

pub fn revive_circle(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Power to Revive vs Other Players ===")?;
    let n = c.prompt_int("Players, you included (default 4): ", 1..)?.unwrap_or(4);
    let names = roster(n);
    let mut alive: Vec<bool> = names.iter().map(|_| !c.chance(1.0 / 3.0)).collect();
    let shown: Vec<String> =
        names.iter().zip(&alive).map(|(name, ok)| format!("{name}: {ok}")).collect();
    c.line(format!("Starting state (alive): {}", shown.join(", ")))?;
    for i in 0..names.len() {
        if i == 0 {
            let typed = c.prompt_line("Whom do you revive? (name, Enter for random): ")?;
            let target = names
                .iter()
                .position(|p| *p == typed)
                .unwrap_or_else(|| c.roll(0..names.len()));
            let success = c.chance(0.6);
            alive[target] = success;
            c.line(format!("You tried to revive {}, success = {success}", names[target]))?;
        } else if c.chance(0.4) {
            let target = c.roll(0..names.len());
            alive[target] = c.chance(0.5);
        }
    }
    let shown: Vec<String> =
        names.iter().zip(&alive).map(|(name, ok)| format!("{name}: {ok}")).collect();
    c.line(format!("Final state (alive): {}", shown.join(", ")))?;
    c.pause()
}
