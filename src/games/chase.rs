//! Pursuit games on a one-dimensional track plus the hide-and-seek
//! family and fog navigation.

use crate::console::{Console, GameError};
use std::collections::{HashMap, HashSet};

fn draw_track(
    c: &mut Console,
    length: i64,
    runner: (i64, char),
    chaser: (i64, char),
) -> Result<(), GameError>
{
    let mut track: Vec<char> = vec!['.'; length as usize];
    if (0..length).contains(&runner.0) {
        track[runner.0 as usize] = runner.1;
    }
    if (0..length).contains(&chaser.0) {
        track[chaser.0 as usize] =
            if chaser.0 == runner.0 { 'X' } else { chaser.1 };
    }
    c.line(track.into_iter().collect::<String>())
}

pub fn tag(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Tag ===")?;
    let length = c.prompt_int("Track length (default 20): ", 5..)?.unwrap_or(20);
    let max_turns = c.prompt_int("Turns before a draw (default 200): ", 10..)?.unwrap_or(200);
    let mut player: i64 = 0;
    let mut chaser: i64 = -3;
    c.line("Rules: you are P, the chaser is C. Move: b (sprint) or s (slow down).")?;
    c.pause()?;
    let mut turn = 0;
    let mut decided = false;
    while turn < max_turns {
        turn += 1;
        c.clear()?;
        c.line(format!("Turn {turn}"))?;
        draw_track(c, length, (player, 'P'), (chaser, 'C'))?;
        let cmd = c.prompt_line("Your move: (b) sprint, (s) slow down, (q) quit: ")?.to_lowercase();
        if cmd.is_empty() || cmd == "q" {
            c.line("You quit.")?;
            decided = true;
            break;
        }
        player += if cmd == "b" { c.roll(1..=3i64) } else { c.roll(0..=1i64) };
        chaser += if player - chaser <= 2 { c.roll(1..=3i64) } else { c.roll(1..=2i64) };
        player = player.min(length - 1);
        chaser = chaser.min(length - 1);
        if chaser >= player {
            c.clear()?;
            c.line("The chaser caught you! You lose.")?;
            decided = true;
            break;
        }
        if player >= length - 1 {
            c.clear()?;
            c.line("You reached the finish and got away! Victory!")?;
            decided = true;
            break;
        }
    }
    if !decided {
        c.line("Turn limit reached - a draw.")?;
    }
    c.pause()
}

pub fn hide_and_seek(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Hide & Seek ===")?;
    let size = c.prompt_int("Number of hiding spots (default 10): ", 5..)?.unwrap_or(10);
    let rounds = c.prompt_int("How many rounds? (default 2): ", 1..)?.unwrap_or(2);
    let mut your_score = 0;
    let mut ai_score = 0;
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}: you hide, the seeker looks."))?;
        let spot = match c.prompt_int(&format!("Pick a hiding spot 0..{}: ", size - 1), 0..size)? {
            Some(spot) => spot,
            None => {
                let spot = c.roll(0..size);
                c.line(format!("A spot was picked for you: {spot}"))?;
                spot
            }
        };
        c.say("The seeker starts looking...")?;
        let mut order: Vec<i64> = (0..size).collect();
        c.shuffle(&mut order);
        let mut found = false;
        for (i, checked) in order.iter().enumerate() {
            c.say(format!("The seeker checks spot {checked}..."))?;
            if *checked == spot {
                c.line(format!("The seeker found you after {} tries!", i + 1))?;
                ai_score += 1;
                found = true;
                break;
            }
        }
        if !found {
            c.line("The seeker never found you. You win the round.")?;
            your_score += 1;
        }
        c.pause()?;
        c.clear()?;
        c.line(format!("Round {round}/{rounds}: now the seeker hides, you look."))?;
        let ai_spot = c.roll(0..size);
        let attempts = size / 2 + 1;
        let mut resolved = false;
        for attempt in 1..=attempts {
            let guess =
                c.prompt_int(&format!("Try {attempt}/{attempts}: your guess: "), 0..size)?;
            let Some(guess) = guess else {
                c.line(format!("You pass. The hider was at {ai_spot}."))?;
                ai_score += 1;
                resolved = true;
                break;
            };
            if guess == ai_spot {
                c.line("You found the hider! You win the round.")?;
                your_score += 1;
                resolved = true;
                break;
            }
            c.line("Not there.")?;
        }
        if !resolved {
            c.line(format!("Out of tries. The hider wins; the spot was {ai_spot}."))?;
            ai_score += 1;
        }
        c.pause()?;
    }
    c.clear()?;
    c.line("Final tally:")?;
    c.line(format!("Your points: {your_score}, seeker: {ai_score}"))?;
    if your_score > ai_score {
        c.line("You won!")?;
    } else if your_score < ai_score {
        c.line("The seeker won.")?;
    } else {
        c.line("A draw.")?;
    }
    c.pause()
}

pub fn virus_tag(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Virus Tag ===")?;
    let places = c.prompt_int("Number of places (default 12): ", 5..)?.unwrap_or(12);
    let players = ["You", "NPC1", "NPC2", "NPC3"];
    let mut infected: HashSet<&str> = HashSet::new();
    let first = *c.pick(&players[1..]).unwrap_or(&"NPC1");
    infected.insert(first);
    c.line(format!("Players: {}", players.join(", ")))?;
    c.line(format!("Infected from the start: {first}"))?;
    let rounds = c.prompt_int("How many rounds? (default 3): ", 1..)?.unwrap_or(3);
    let mut score: HashMap<&str, i64> = players.iter().map(|&p| (p, 0)).collect();
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}"))?;
        let your_spot = c
            .prompt_int(&format!("Pick a place 0..{} (Enter for random): ", places - 1), 0..places)?;
        let your_spot = match your_spot {
            Some(spot) => spot,
            None => c.roll(0..places),
        };
        let mut spots: HashMap<&str, i64> = HashMap::new();
        spots.insert("You", your_spot);
        for npc in &players[1..] {
            spots.insert(npc, c.roll(0..places));
        }
        c.line("Everyone searches in turn. The infected pass it on when they find someone.")?;
        let order = ["NPC1", "NPC2", "NPC3", "You"];
        let mut found_pairs: Vec<(&str, &str)> = Vec::new();
        for seeker in order {
            let mut search: Vec<i64> = (0..places).collect();
            c.shuffle(&mut search);
            for spot in search {
                let targets: Vec<&str> = players
                    .iter()
                    .copied()
                    .filter(|&p| p != seeker && spots[p] == spot)
                    .collect();
                if targets.is_empty() {
                    continue;
                }
                for target in targets {
                    found_pairs.push((seeker, target));
                    if infected.contains(seeker) {
                        infected.insert(target);
                    }
                    if infected.contains(target) {
                        infected.insert(seeker);
                    }
                }
                break;
            }
        }
        for p in players {
            *score.entry(p).or_insert(0) += if infected.contains(p) { -1 } else { 1 };
        }
        c.clear()?;
        c.line("Round results:")?;
        c.line("Who found whom (seeker -> found):")?;
        for (seeker, target) in &found_pairs {
            c.line(format!("  {seeker} -> {target}"))?;
        }
        let mut sick: Vec<&str> = infected.iter().copied().collect();
        sick.sort_unstable();
        c.line(format!("Infected now: {}", sick.join(", ")))?;
        c.line("Score:")?;
        for p in players {
            c.line(format!("  {p}: {}", score[p]))?;
        }
        c.pause()?;
    }
    c.clear()?;
    c.line("Final infection and score:")?;
    let mut sick: Vec<&str> = infected.iter().copied().collect();
    sick.sort_unstable();
    c.line(format!("Infected: {}", sick.join(", ")))?;
    for p in players {
        c.line(format!("  {p}: {}", score[p]))?;
    }
    c.pause()
}

pub fn ball_chase(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Ball Chase ===")?;
    let length = c.prompt_int("Field length (default 20): ", 8..)?.unwrap_or(20);
    let max_turns = c.prompt_int("Max turns (default 150): ", 10..)?.unwrap_or(150);
    let mut player: i64 = 0;
    let mut chaser: i64 = -4;
    let mut you_hold_ball = true;
    c.line("Rules: you carry the ball (B). Run (b), pass (p) or slow down (s).")?;
    c.line("If the chaser catches you and takes the ball, you lose.")?;
    c.pause()?;
    let mut turn = 0;
    let mut decided = false;
    while turn < max_turns {
        turn += 1;
        c.clear()?;
        let player_mark = if you_hold_ball { 'B' } else { 'P' };
        draw_track(c, length, (player, player_mark), (chaser, 'C'))?;
        let action = c
            .prompt_line("Your move: (b) run, (p) pass - risky, (s) slow down, (q) quit: ")?
            .to_lowercase();
        match action.as_str() {
            "" | "q" => {
                c.line("You quit.")?;
                decided = true;
                break;
            }
            "b" => {
                let step = c.roll(1..=3i64);
                player += step;
                c.line(format!("You ran {step} cells."))?;
            }
            "s" => {
                let step = c.roll(0..=1i64);
                player += step;
                c.line(format!("You crept forward by {step}."))?;
            }
            "p" => {
                if c.chance(0.6) {
                    let gain = c.roll(2..=4i64);
                    player += gain;
                    c.line(format!("Clean pass - you advanced {gain}."))?;
                } else {
                    c.line("Fumbled pass! The chaser has the ball.")?;
                    you_hold_ball = false;
                }
            }
            _ => {}
        }
        let dist = player - chaser;
        chaser += if !you_hold_ball {
            c.roll(1..=3i64)
        } else if dist <= 2 {
            c.roll(1..=3i64)
        } else {
            c.roll(1..=2i64)
        };
        if chaser >= player {
            if you_hold_ball {
                you_hold_ball = false;
                c.line("The chaser caught you and stripped the ball!")?;
            } else {
                c.line("The chaser caught you!")?;
            }
            c.pause()?;
            c.clear()?;
            c.line("You lose. Try again.")?;
            decided = true;
            break;
        }
        if player >= length - 1 && you_hold_ball {
            c.clear()?;
            c.line("You reached the end zone with the ball. Victory!")?;
            decided = true;
            break;
        }
        if !you_hold_ball && c.chance(0.3) {
            c.line("The chaser dropped the ball!")?;
            if (player - chaser).abs() <= 2 {
                you_hold_ball = true;
                c.line("You scooped it up!")?;
            }
        }
        player = player.min(length - 1);
        chaser = chaser.min(length - 1);
        c.say("")?;
    }
    if !decided {
        c.line("Turn limit reached - a draw.")?;
    }
    c.pause()
}

pub fn dodgeball(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Dodgeball ===")?;
    let mut team_you: Vec<String> =
        vec!["You".to_string(), "P1".to_string(), "P2".to_string()];
    let mut team_enemy: Vec<String> =
        vec!["E1".to_string(), "E2".to_string(), "E3".to_string()];
    let mut hits: HashMap<String, i64> = HashMap::new();
    c.line("Knock out the whole opposing team. Everyone has 2 lives.")?;
    c.pause()?;
    let mut round = 0;
    loop {
        round += 1;
        c.clear()?;
        c.line(format!("Round {round}"))?;
        c.line(format!("Your side: {}", team_you.join(", ")))?;
        c.line(format!("Enemies: {}", team_enemy.join(", ")))?;
        if team_enemy.is_empty() {
            c.line("All enemies are out - you win!")?;
            break;
        }
        if team_you.is_empty() {
            c.line("Your team is out - you lose.")?;
            break;
        }
        c.line(format!("Your turn. Targets: {}", team_enemy.join(", ")))?;
        let typed = c.prompt_line("Target (name, or Enter for random): ")?;
        let target = if team_enemy.contains(&typed) {
            typed
        } else {
            if !typed.is_empty() {
                c.line("No such target, picking one at random.")?;
            }
            c.pick(&team_enemy).cloned().unwrap_or_default()
        };
        let thrown = c.chance(0.65);
        let dodged = c.chance(0.35);
        if thrown && !dodged {
            let count = hits.entry(target.clone()).or_insert(0);
            *count += 1;
            c.line(format!("You hit {target}! Damage #{count}."))?;
            if *count >= 2 {
                drop_member(&mut team_enemy, &target);
                c.line(format!("{target} is out of the game!"))?;
            }
        } else {
            c.line("Missed or dodged.")?;
        }
        for enemy in team_enemy.clone() {
            if team_you.is_empty() {
                break;
            }
            let target = c.pick(&team_you).cloned().unwrap_or_default();
            if c.chance(0.55) && !c.chance(0.3) {
                let count = hits.entry(target.clone()).or_insert(0);
                *count += 1;
                c.line(format!("{enemy} hit {target} (damage #{count})"))?;
                if *count >= 2 {
                    drop_member(&mut team_you, &target);
                    if target == "You" {
                        c.line("You are out of the game!")?;
                    } else {
                        c.line(format!("{target} is out."))?;
                    }
                }
            } else {
                c.line(format!("{enemy} missed {target}."))?;
            }
        }
        c.pause()?;
    }
    c.pause()
}

fn drop_member(team: &mut Vec<String>, gone: &str)
{
    team.retain(|member| member != gone);
}

pub fn pursuit(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Pursuit (you are the chaser) ===")?;
    let length = c.prompt_int("Track length (default 25): ", 10..)?.unwrap_or(25);
    let mut runner: i64 = 0;
    let mut chaser: i64 = -3;
    c.line("You are C, the runner is R. Commands: run (push hard) or sneak (hang back).")?;
    c.pause()?;
    loop {
        c.clear()?;
        draw_track(c, length, (runner, 'R'), (chaser, 'C'))?;
        let cmd = c.prompt_line("Your move (run/sneak/q): ")?.to_lowercase();
        if cmd.is_empty() || cmd == "q" {
            break;
        }
        chaser += if cmd == "run" { c.roll(2..=4i64) } else { c.roll(0..=2i64) };
        // the runner sprints when the chaser gets close
        runner += if chaser - runner >= -2 { c.roll(1..=3i64) } else { c.roll(0..=2i64) };
        runner = runner.min(length - 1);
        chaser = chaser.min(length - 1);
        if chaser >= runner {
            c.clear()?;
            c.line("You caught the runner! Victory.")?;
            return c.pause();
        }
        if runner >= length - 1 {
            c.clear()?;
            c.line("The runner reached the finish and escaped.")?;
            return c.pause();
        }
        c.say("")?;
    }
    c.pause()
}

pub fn ball_pursuit(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Ball Pursuit (you are the chaser) ===")?;
    let length = c.prompt_int("Field length (default 22): ", 10..)?.unwrap_or(22);
    let mut runner: i64 = 0;
    let mut chaser: i64 = -3;
    let mut runner_has_ball = true;
    c.line("You are the chaser (C). The runner (R) holds the ball. Catch them and take it!")?;
    c.pause()?;
    loop {
        c.clear()?;
        let runner_mark = if runner_has_ball { 'B' } else { 'R' };
        draw_track(c, length, (runner, runner_mark), (chaser, 'C'))?;
        let action = c.prompt_line("Your move (run/sneak/tackle/q): ")?.to_lowercase();
        match action.as_str() {
            "" | "q" => break,
            "run" => chaser += c.roll(2..=4i64),
            "sneak" => chaser += c.roll(0..=2i64),
            "tackle" => {
                if (chaser - runner).abs() <= 2 && c.chance(0.6) {
                    runner_has_ball = false;
                    c.line("Got it! The ball is yours.")?;
                } else {
                    c.line("The tackle failed.")?;
                }
            }
            _ => {}
        }
        runner += if runner_has_ball { c.roll(1..=3i64) } else { c.roll(0..=2i64) };
        runner = runner.min(length - 1);
        chaser = chaser.min(length - 1);
        if chaser >= runner && !runner_has_ball {
            c.clear()?;
            c.line("You ran the ball carrier down and kept the ball - victory!")?;
            return c.pause();
        }
        if runner >= length - 1 && runner_has_ball {
            c.clear()?;
            c.line("The runner carried the ball to the finish - you lose.")?;
            return c.pause();
        }
        c.say("")?;
    }
    c.pause()
}

pub fn run_run_run(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== RUN ===")?;
    let mut distance = 0;
    while distance < 20 {
        let cmd = c.prompt_line("Run fast or slow? (fast/slow): ")?.to_lowercase();
        if cmd == "fast" {
            distance += c.roll(2..=5i64);
            c.say("You speed up.")?;
        } else {
            distance += c.roll(0..=2i64);
            c.say("You jog along.")?;
        }
        if c.chance(0.1) {
            c.line("Something is gaining on you!")?;
        }
    }
    c.line("You got away to a safe distance.")?;
    c.pause()
}

pub fn fog(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Fog ===")?;
    let size = c.prompt_int("Board size (default 8): ", 4..)?.unwrap_or(8);
    let mut player = (0i64, 0i64);
    let goal = (size - 1, size - 1);
    let mut obstacles: HashSet<(i64, i64)> = HashSet::new();
    for _ in 0..size {
        obstacles.insert((c.roll(0..size), c.roll(0..size)));
    }
    obstacles.remove(&(0, 0));
    obstacles.remove(&goal);
    let mut view: i64 = 1;
    c.line("Head for the goal in the bottom-right corner. Visibility is limited.")?;
    c.pause()?;
    loop {
        c.clear()?;
        for r in 0..size {
            let mut line = String::new();
            for col in 0..size {
                let visible =
                    (r - player.0).abs() <= view && (col - player.1).abs() <= view;
                let mark = if !visible {
                    " ?"
                } else if (r, col) == goal {
                    " G"
                } else if (r, col) == player {
                    " P"
                } else if obstacles.contains(&(r, col)) {
                    " #"
                } else {
                    " ."
                };
                line.push_str(mark);
            }
            c.line(line)?;
        }
        if player == goal {
            c.line("You reached the goal. Victory!")?;
            break;
        }
        let cmd = c.prompt_line("Move (w/a/s/d), q to quit: ")?.to_lowercase();
        if cmd.is_empty() || cmd == "q" {
            break;
        }
        match cmd.as_str() {
            "w" if player.0 > 0 => player.0 -= 1,
            "s" if player.0 < size - 1 => player.0 += 1,
            "a" if player.1 > 0 => player.1 -= 1,
            "d" if player.1 < size - 1 => player.1 += 1,
            _ => {}
        }
        if c.chance(0.12) {
            if c.chance(0.5) {
                view = (view - 1).max(0);
                c.say("The fog thickens. You can see less.")?;
            } else {
                view = (view + 1).min(size);
                c.say("The fog lifts. You can see further.")?;
            }
        }
    }
    c.pause()
}
