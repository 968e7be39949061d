//! Short prompt-driven vignettes: duels, reflex tests, haunted houses and
//! the phobia trilogy.

use crate::console::{Console, GameError};
use std::time::Instant;

pub fn fight(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Brawl ===")?;
    let mut enemy_hp = c.roll(8..=15i64);
    let mut your_hp = c.roll(8..=15i64);
    c.line(format!("Opponent HP: {enemy_hp}. Your HP: {your_hp}."))?;
    c.pause()?;
    while enemy_hp > 0 && your_hp > 0 {
        c.clear()?;
        c.line(format!("Your HP: {your_hp}  Opponent HP: {enemy_hp}"))?;
        let picked = c.prompt_choice("Pick a move:", &["punch", "block", "special (risky)"])?;
        let move_idx = picked.unwrap_or(0);
        match move_idx {
            0 => {
                let damage = c.roll(2..=5i64);
                enemy_hp -= damage;
                c.line(format!("You dealt {damage}"))?;
            }
            1 => c.line("You brace - the next blow lands softer.")?,
            _ => {
                if c.chance(0.6) {
                    let damage = c.roll(5..=9i64);
                    enemy_hp -= damage;
                    c.line(format!("The special lands: {damage}"))?;
                } else {
                    let backfire = c.roll(1..=4i64);
                    your_hp -= backfire;
                    c.line(format!("The special failed - you took {backfire}"))?;
                }
            }
        }
        if enemy_hp <= 0 {
            break;
        }
        match *c.pick(&["hit", "hit", "hit", "heavy", "miss"]).unwrap_or(&"miss") {
            "hit" => {
                let mut damage = c.roll(1..=4i64);
                if move_idx == 1 {
                    damage = (damage - 2).max(0);
                }
                your_hp -= damage;
                c.say(format!("The opponent dealt {damage}"))?;
            }
            "heavy" => {
                let damage = c.roll(3..=6i64);
                your_hp -= damage;
                c.say(format!("A heavy blow! -{damage}"))?;
            }
            _ => c.say("The opponent missed.")?,
        }
    }
    if your_hp > 0 {
        c.line("You won the brawl!")?;
    } else {
        c.line("You were beaten.")?;
    }
    c.pause()
}

pub fn sumo(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Sumo ===")?;
    let ring = c.prompt_int("Ring size (default 9): ", 5..)?.unwrap_or(9);
    let center = ring / 2;
    let mut you = center - 1;
    let mut enemy = center + 1;
    c.line("Push the opponent over the edge (0..n-1). Controls: l/r push.")?;
    c.pause()?;
    while (0..ring).contains(&you) && (0..ring).contains(&enemy) {
        c.clear()?;
        let mut field = vec!['.'; ring as usize];
        field[you as usize] = 'Y';
        field[enemy as usize] = 'E';
        c.line(field.into_iter().collect::<String>())?;
        let action = c.prompt_line("Your move (l/r/q): ")?.to_lowercase();
        if action.is_empty() || action == "q" {
            break;
        }
        if (action == "r" && you < enemy) || (action == "l" && you > enemy) {
            if c.chance(0.6) {
                enemy += if action == "r" { 1 } else { -1 };
                c.line("You shoved the opponent!")?;
            } else {
                you += if action == "r" { -1 } else { 1 };
                c.line("A miss - you lose balance and give ground.")?;
            }
        } else {
            c.line("You cannot push that way.")?;
        }
        if (0..ring).contains(&enemy) && (0..ring).contains(&you) && c.chance(0.65) {
            you += if enemy > you { -1 } else { 1 };
            c.say("The opponent shoves back.")?;
        }
    }
    if !(0..ring).contains(&enemy) {
        c.line("The opponent flew out - you win!")?;
    } else if !(0..ring).contains(&you) {
        c.line("You flew out - a loss.")?;
    } else {
        c.line("The bout is over.")?;
    }
    c.pause()
}

/// Print the ready line, wait a random interval, shout the signal and
/// time the Enter press.
fn reflex_round(c: &mut Console, signal: &str) -> Result<f64, GameError>
{
    c.say("Get ready...")?;
    let armed = Instant::now();
    c.line(format!("{signal} Press Enter!"))?;
    c.prompt_line("")?;
    Ok(armed.elapsed().as_secs_f64())
}

pub fn karate(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Karate ===")?;
    let rounds = c.prompt_int("Rounds (default 5): ", 1..)?.unwrap_or(5);
    let mut score = 0;
    c.line("Wait for \"STRIKE!\" and press Enter as fast as you can.")?;
    c.pause()?;
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}:"))?;
        let reaction = reflex_round(c, "STRIKE!")?;
        c.line(format!("Your reaction: {reaction:.3}s"))?;
        if reaction < 0.3 {
            c.say("Excellent!")?;
            score += 2;
        } else if reaction < 0.6 {
            c.say("Good.")?;
            score += 1;
        } else {
            c.say("Slow.")?;
        }
    }
    c.line(format!("Final score: {score}"))?;
    c.pause()
}

pub fn dentist(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Dentist ===")?;
    let rounds = c.prompt_int("How many procedures (default 4): ", 1..)?.unwrap_or(4);
    let mut score = 0;
    c.line("React when you hear \"DRILL!\" - press Enter as fast as you can.")?;
    c.pause()?;
    for _ in 0..rounds {
        c.clear()?;
        let reaction = reflex_round(c, "DRILL!")?;
        c.line(format!("Your reaction: {reaction:.3}s"))?;
        if reaction < 0.35 {
            score += 2;
            c.say("Great - quick.")?;
        } else if reaction < 0.7 {
            score += 1;
            c.say("Okay.")?;
        } else {
            c.say("Slow; that hurt.")?;
        }
    }
    c.line(format!("Procedure results, points: {score}"))?;
    c.pause()
}

pub fn rooms(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Rooms ===")?;
    let count = c.prompt_int("How many rooms (default 10): ", 5..)?.unwrap_or(10);
    let monsters: Vec<bool> = (0..count).map(|_| c.chance(0.25)).collect();
    let mut searched = vec![false; count as usize];
    let mut player: i64 = 0;
    c.line("You move through rooms 0..N-1. A monster in an unhidden room is bad luck waiting.")?;
    c.pause()?;
    loop {
        c.clear()?;
        c.line(format!("Room {player}/{}", count - 1))?;
        let cmd = c.prompt_line("Actions: move <L/R>, hide, search, q: ")?.to_lowercase();
        if cmd.is_empty() || cmd == "q" {
            break;
        }
        if let Some(rest) = cmd.strip_prefix("move") {
            let target = match rest.trim() {
                "l" => player - 1,
                "r" => player + 1,
                _ => {
                    c.say("Bad direction. move L or move R.")?;
                    continue;
                }
            };
            if !(0..count).contains(&target) {
                c.say("You cannot go that way.")?;
                continue;
            }
            player = target;
            c.line(format!("You entered room {player}"))?;
            if monsters[player as usize] {
                if c.chance(0.5) {
                    c.say("Lucky - the monster did not notice you!")?;
                } else {
                    c.line("The monster spotted you and ate you. Game over.")?;
                    return c.pause();
                }
            }
        } else if cmd == "hide" {
            c.say("You hid in the room.")?;
        } else if cmd == "search" {
            if searched[player as usize] {
                c.say("Already searched.")?;
            } else {
                searched[player as usize] = true;
                if c.chance(0.4) {
                    c.say("You found something useful (food).")?;
                } else {
                    c.say("Nothing here.")?;
                }
            }
        } else {
            c.say("Unknown command.")?;
        }
    }
    c.pause()
}

pub fn monster(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Monster ===")?;
    let size = c.prompt_int("Board side (default 7): ", 4..)?.unwrap_or(7);
    let mut player = (0i64, 0i64);
    let mut beast = (size - 1, size - 1);
    let goal = (size - 1, size - 1);
    c.line("Keep away from the monster. Move w/a/s/d. Reach the far corner to escape.")?;
    c.pause()?;
    loop {
        c.clear()?;
        for r in 0..size {
            let row: Vec<&str> = (0..size)
                .map(|cl| {
                    if (r, cl) == player {
                        "P"
                    } else if (r, cl) == beast {
                        "M"
                    } else if (r, cl) == goal {
                        "G"
                    } else {
                        "."
                    }
                })
                .collect();
            c.line(row.join(" "))?;
        }
        if player == beast {
            c.line("The monster caught you. You lose.")?;
            return c.pause();
        }
        if player == goal {
            c.line("You reached the escape point. Victory!")?;
            return c.pause();
        }
        let cmd = c.prompt_line("Move (w/a/s/d, q to quit): ")?.to_lowercase();
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
        step_towards(&mut beast, player);
        if c.chance(0.12) {
            step_towards(&mut beast, player);
        }
    }
    c.pause()
}

fn step_towards(beast: &mut (i64, i64), player: (i64, i64))
{
    if beast.0 < player.0 {
        beast.0 += 1;
    } else if beast.0 > player.0 {
        beast.0 -= 1;
    }
    if beast.1 < player.1 {
        beast.1 += 1;
    } else if beast.1 > player.1 {
        beast.1 -= 1;
    }
}

pub fn fairy_tale(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Fairy Tale ===")?;
    let heroes = [
        ("Ivan the Fool", "find a magic sword"),
        ("The Tsar Maiden", "find a lost jewel"),
        ("Kolovrat", "defeat a dragon"),
    ];
    let mut score: i64 = 0;
    c.line("You meet the heroes and may stage one event to help each of them.")?;
    c.pause()?;
    for (name, need) in heroes {
        c.clear()?;
        c.line(format!("Hero: {name}. They need to: {need}"))?;
        let action = c.prompt_line("How do you help? (gift/action/trick/skip): ")?.to_lowercase();
        match action.as_str() {
            "gift" => {
                c.say("You gifted a useful item.")?;
                score += 1;
            }
            "action" => {
                if c.chance(0.6) {
                    c.say("Your help made the difference!")?;
                    score += 2;
                } else {
                    c.say("The attempt fell flat.")?;
                }
            }
            "trick" => {
                if c.chance(0.4) {
                    c.say("You slyly fooled the villains - it helped.")?;
                    score += 1;
                } else {
                    c.say("The trick came back around.")?;
                    score -= 1;
                }
            }
            _ => c.say("Skipped.")?,
        }
    }
    c.clear()?;
    c.line(format!("The heroes thank you. Valor points: {score}"))?;
    c.pause()
}

pub fn curse(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Curse ===")?;
    let rooms = c.prompt_int("Rooms in the house (default 6): ", 3..)?.unwrap_or(6);
    let rounds = c.prompt_int("Rounds of roaming? (default 10): ", 1..)?.unwrap_or(10);
    let mut room: i64 = 0;
    let mut health: i64 = 10;
    let effects: [(i64, &str); 6] = [
        (-2, "A shadow bit you: -2 health."),
        (2, "A blessing helped: +2 health."),
        (-1, "Freezing cold: -1 health."),
        (1, "An unexpected meal: +1 health."),
        (-1, "A curse of weariness: -1 health."),
        (1, "Magic filled you: +1 health."),
    ];
    c.line("You roam the house. Any room may flare with an effect each round.")?;
    c.pause()?;
    let mut survived = true;
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}. Room {room}. Health: {health}"))?;
        c.line("Commands: move L/R, stay, q - quit")?;
        let cmd = c.prompt_line("> ")?.to_lowercase();
        if cmd.is_empty() || cmd == "q" {
            break;
        }
        if let Some(rest) = cmd.strip_prefix("move") {
            let target = match rest.trim() {
                "l" => room - 1,
                "r" => room + 1,
                _ => {
                    c.say("Bad command: move L or move R.")?;
                    continue;
                }
            };
            if (0..rooms).contains(&target) {
                room = target;
                c.line(format!("You entered room {room}"))?;
            } else {
                c.line("You cannot go that way.")?;
            }
        } else if cmd == "stay" {
            c.line("You stay put and watch.")?;
        } else {
            c.line("Bad command.")?;
        }
        let &(delta, message) = c.pick(&effects).unwrap_or(&effects[0]);
        health = (health + delta).max(0);
        c.line(format!("Effect: {message}"))?;
        if c.chance(0.12) {
            c.line("The effect settled into the room - watch your step next time.")?;
            if c.chance(0.5) {
                health += 1;
                c.line("A bonus boon: +1")?;
            } else {
                health -= 1;
                c.line("A bonus bane: -1")?;
            }
        }
        if health <= 0 {
            c.line("The curse took you...")?;
            survived = false;
            break;
        }
        c.pause()?;
    }
    if survived {
        c.line(format!("You walked out of the curse. Final health: {health}"))?;
    }
    c.pause()
}

pub fn spider(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Spider ===")?;
    let size = c.prompt_int("Web side (default 7): ", 5..)?.unwrap_or(7);
    let mut player = (0i64, size / 2);
    let mut spider = (size / 2, size / 2);
    c.line("Cross the web left edge to right, avoiding the spider's legs (X).")?;
    c.pause()?;
    loop {
        let legs = leg_cells(spider, size);
        c.clear()?;
        for r in 0..size {
            let row: Vec<&str> = (0..size)
                .map(|cl| {
                    if (r, cl) == player {
                        "P"
                    } else if (r, cl) == spider {
                        "S"
                    } else if legs.contains(&(r, cl)) {
                        "X"
                    } else {
                        "."
                    }
                })
                .collect();
            c.line(row.join(" "))?;
        }
        if player.1 >= size - 1 {
            c.line("You reached the far edge of the web. Success!")?;
            break;
        }
        let cmd = c.prompt_line("Move (w/a/s/d, q to quit): ")?.to_lowercase();
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
        if leg_cells(spider, size).contains(&player) {
            c.line("You stepped on a leg - the spider bit you! You lose.")?;
            return c.pause();
        }
        if c.chance(0.2) {
            spider.0 = (spider.0 + c.roll(-1..=1i64)).clamp(0, size - 1);
            spider.1 = (spider.1 + c.roll(-1..=1i64)).clamp(0, size - 1);
        }
    }
    c.pause()
}

fn leg_cells(spider: (i64, i64), size: i64) -> Vec<(i64, i64)>
{
    let mut cells = Vec::new();
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (r, cl) = (spider.0 + dr, spider.1 + dc);
            if (0..size).contains(&r) && (0..size).contains(&cl) {
                cells.push((r, cl));
            }
        }
    }
    cells
}

pub fn birthday(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Birthday ===")?;
    let mut mood: i64 = 5;
    let tasks = ["cake", "music", "guests", "decor"];
    let mut completed: Vec<&str> = Vec::new();
    c.line("Throw the party: finish tasks to lift the mood.")?;
    c.pause()?;
    for task in tasks {
        c.clear()?;
        c.line(format!("Current task: {task}"))?;
        let act = c.prompt_line("Action: do / skip (Enter skip): ")?.to_lowercase();
        if act == "do" {
            if c.chance(0.8) {
                mood += 1;
                completed.push(task);
                c.say("Done and done!")?;
            } else {
                mood -= 1;
                c.say("That did not go perfectly.")?;
            }
        } else {
            c.say("Skipped.")?;
        }
    }
    c.clear()?;
    c.line(format!("The party is ready! Completed: {}", completed.join(", ")))?;
    c.line(format!("Guest mood: {mood}"))?;
    c.pause()
}

pub fn aquaphobia(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Aquaphobia ===")?;
    let mut breath: i64 = 10;
    let mut panic: i64 = 0;
    let mut oxygen_sources: i64 = 3;
    let rounds = c.prompt_int("How many steps (default 8): ", 3..)?.unwrap_or(8);
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!(
            "Round {round}/{rounds}. Breath: {breath}, Panic: {panic}, O2 pockets: {oxygen_sources}"
        ))?;
        let action = c
            .prompt_line("Actions: calm down, search for air, swim on [c/s/w]: ")?
            .to_lowercase();
        match action.as_str() {
            "c" => {
                panic = (panic - 1).max(0);
                breath = (breath + 1).min(10);
                c.say("You work on staying calm.")?;
            }
            "s" => {
                if oxygen_sources > 0 && c.chance(0.6) {
                    oxygen_sources -= 1;
                    breath = (breath + 3).min(10);
                    c.say("An air pocket!")?;
                } else {
                    breath = (breath - 1).max(0);
                    panic += 1;
                    c.say("The search found nothing.")?;
                }
            }
            _ => {
                if c.chance(0.6) {
                    breath = (breath - 1).max(0);
                    c.say("You pushed forward.")?;
                } else {
                    panic += 1;
                    breath = (breath - 2).max(0);
                    c.say("Swimming got harder.")?;
                }
            }
        }
        if breath <= 0 || panic >= 10 {
            c.line("Panic and airlessness took you under.")?;
            return c.pause();
        }
    }
    c.line("You lived through the water terror. Congratulations.")?;
    c.pause()
}

pub fn arachnophobia(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Arachnophobia ===")?;
    let rooms = c.prompt_int("Number of rooms (default 8): ", 3..)?.unwrap_or(8);
    let mut room: i64 = 0;
    let mut courage: i64 = 5;
    while room < rooms {
        c.clear()?;
        c.line(format!("Room {}/{rooms}. Courage: {courage}/10", room + 1))?;
        if c.chance(0.5) {
            c.line("A spider in the room!")?;
            let choice = c.prompt_line("Confront or avoid? (c/a): ")?.to_lowercase();
            if choice == "c" {
                if c.chance(0.6) {
                    courage = (courage + 1).min(10);
                    c.say("You squashed the spider. Courage +1.")?;
                } else {
                    courage = (courage - 2).max(0);
                    c.say("The spider spooked you - courage -2.")?;
                }
            } else {
                c.say("You edged around the room.")?;
            }
        } else {
            c.say("An empty room. Walk on through.")?;
            room += 1;
        }
        if courage <= 0 {
            c.line("The fear beat you. Game over.")?;
            return c.pause();
        }
    }
    c.line("You cleared every room. Well done!")?;
    c.pause()
}

pub fn claustrophobia(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Claustrophobia ===")?;
    let size = c.prompt_int("Starting space (units, default 10): ", 3..)?.unwrap_or(10);
    let mut space = size;
    let mut health: i64 = 10;
    while space > 0 && health > 0 {
        c.clear()?;
        c.line(format!("Current space: {space}, health: {health}"))?;
        let action = c
            .prompt_line("Action: expand (push the walls), conserve (hold out) [e/c]: ")?
            .to_lowercase();
        if action == "e" {
            if c.chance(0.5) {
                let gained = c.roll(1..=3i64);
                space += gained;
                c.say(format!("It worked! Space +{gained}."))?;
            } else {
                health -= 1;
                c.say("The push ended in an injury: -1 health.")?;
            }
        } else if c.chance(0.6) {
            space -= 1;
            c.say("You curled up - the space shrank a little.")?;
        } else {
            space -= 2;
            health -= 1;
            c.say("The squeeze hurt.")?;
        }
        space -= 1;
        if space >= size * 2 {
            c.line("You pushed the walls wide enough to slip out. Freedom!")?;
            return c.pause();
        }
        if space <= 0 {
            c.line("The space closed in - you are pinned.")?;
            return c.pause();
        }
    }
    if health > 0 {
        c.line("You held out in the crush and found a way through.")?;
    } else {
        c.line("You could not take it - the end.")?;
    }
    c.pause()
}

pub fn trolley(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Trolley Decision ===")?;
    c.line("You work the switch. A train is coming and you can change its track.")?;
    let scenarios: [(i64, i64); 4] = [(3, 1), (5, 2), (1, 0), (0, 1)];
    let &(left, right) = c.pick(&scenarios).unwrap_or(&scenarios[0]);
    c.line(format!("The left branch holds {left} person(s)."))?;
    c.line(format!("The right branch holds {right} person(s)."))?;
    let choice = c.prompt_line("Switch to the right branch? (y/n): ")?.to_lowercase();
    let (killed, saved) = if choice == "y" || choice == "yes" {
        c.line(format!("You threw the switch. {right} person(s) died."))?;
        (right, left)
    } else {
        c.line(format!("You did nothing. {left} person(s) died."))?;
        (left, right)
    };
    let reputation = c.roll(-5..=5i64) + (saved - killed);
    c.line(format!("Moral fallout, such as it is: reputation {reputation}"))?;
    c.pause()
}

pub fn the_path(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Path ===")?;
    let steps = c.prompt_int("How many steps to walk (default 12): ", 1..)?.unwrap_or(12);
    let encounters =
        ["an old bridge", "a tree with a note", "an empty well", "a watch-stone", "a mirage"];
    let mut mood: i64 = 0;
    for step in 1..=steps {
        let found = *c.pick(&encounters).unwrap_or(&encounters[0]);
        c.line(format!("Step {step}: you came across {found}"))?;
        let cmd = c.prompt_line("Interact? (y/n): ")?.to_lowercase();
        if cmd == "y" {
            match *c.pick(&["good", "bad", "neutral"]).unwrap_or(&"neutral") {
                "good" => {
                    mood += 1;
                    c.say("It brought some comfort.")?;
                }
                "bad" => {
                    mood -= 1;
                    c.say("That was dangerous.")?;
                }
                _ => c.say("Nothing happened.")?,
            }
        }
    }
    c.line(format!("Final state of mind: {mood}"))?;
    c.pause()
}

pub fn lights_off(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Lights Out ===")?;
    c.line("You are in the house and the lights die. Feel your way to the door.")?;
    let mut pos = 0;
    while pos < 6 {
        let step = c.prompt_choice("Which way?", &["Left", "Right", "Forward", "Listen"])?;
        match step {
            Some(2) => {
                pos += 1;
                c.say("You inched forward.")?;
            }
            Some(3) => {
                let hint = *c
                    .pick(&["footsteps to the right", "water to the left", "silence"])
                    .unwrap_or(&"silence");
                c.say(format!("You hear: {hint}"))?;
            }
            _ => c.say("You drifted sideways and lost time.")?,
        }
        if c.chance(0.12) {
            c.line("Something stirred in the dark...")?;
        }
    }
    c.line("You found the door and stepped into the light.")?;
    c.pause()
}

pub fn clown(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Clown ===")?;
    let mut mood: i64 = 0;
    for _ in 0..4 {
        let action =
            c.prompt_choice("What do you do?", &["Laugh", "Step closer", "Run away", "Stay put"])?;
        match action {
            Some(0) => {
                mood += 1;
                c.say("The clown smiles. You feel a little lighter.")?;
            }
            Some(1) => {
                mood += if c.chance(0.5) { 2 } else { -2 };
                c.say("The clown reacts unpredictably.")?;
            }
            Some(2) => {
                mood -= 1;
                c.say("You ran - but the clown caught up in your nightmare.")?;
            }
            _ => c.say("Nothing happens.")?,
        }
    }
    c.line(format!("Final tally: {mood}"))?;
    c.pause()
}

pub fn happy_car(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Happy Car ===")?;
    let mut mood: i64 = 5;
    let mut fuel: i64 = 3;
    for _ in 0..5 {
        c.clear()?;
        c.line(format!("Mood: {mood}, Fuel: {fuel}"))?;
        let action = c.prompt_choice(
            "Action:",
            &["Wash it", "Change the oil", "Go for a drive", "Feed it fuel", "Talk to it"],
        )?;
        match action {
            Some(0) => {
                mood = (mood + 1).min(10);
                c.say("The car gleams and grins.")?;
            }
            Some(1) => {
                mood = (mood + 2).min(10);
                fuel = (fuel - 1).max(0);
                c.say("The car purrs.")?;
            }
            Some(2) => {
                if fuel > 0 {
                    fuel -= 1;
                    mood = (mood + 2).min(10);
                    c.say("A joyride!")?;
                } else {
                    c.say("No fuel.")?;
                }
            }
            Some(3) => {
                fuel += 2;
                c.say("Fuel topped up.")?;
            }
            Some(4) => {
                mood = (mood + 1).min(10);
                c.say("The car answers \"Beep-beep!\"")?;
            }
            _ => c.say("You did nothing.")?,
        }
    }
    c.line(format!("In the end the car is happy at {mood}"))?;
    c.pause()
}
