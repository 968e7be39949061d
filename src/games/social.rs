//! Social deduction against simulated players: mafia, impostor hunts,
//! bluff-calling and a few nerve games.

use crate::console::{Console, GameError, roster};
use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Role
{
    Mafia,
    Detective,
    Doctor,
    Town,
}

impl Role
{
    fn label(self) -> &'static str
    {
        match self {
            Role::Mafia => "Mafia",
            Role::Detective => "Detective",
            Role::Doctor => "Doctor",
            Role::Town => "Town",
        }
    }
}

fn pick_other(c: &mut Console, pool: &[String], not: &str) -> String
{
    let others: Vec<String> = pool.iter().filter(|p| *p != not).cloned().collect();
    c.pick(&others).cloned().unwrap_or_else(|| not.to_string())
}

pub fn mafia(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Mafia ===")?;
    let n = c.prompt_int("Players, you included (default 7): ", 5..)?.unwrap_or(7);
    let names = roster(n);
    let mut shuffled = names.clone();
    c.shuffle(&mut shuffled);
    let mut roles: HashMap<String, Role> =
        names.iter().map(|p| (p.clone(), Role::Town)).collect();
    roles.insert(shuffled[0].clone(), Role::Mafia);
    roles.insert(shuffled[1].clone(), Role::Detective);
    roles.insert(shuffled[2].clone(), Role::Doctor);
    let mafia_player = shuffled[0].clone();
    let detective = shuffled[1].clone();
    let doctor = shuffled[2].clone();
    c.line(format!("Roles are dealt. You are: {}", roles["You"].label()))?;
    let mut alive = names.clone();
    let mut day = 1;
    loop {
        let mafia_count = alive.iter().filter(|p| roles[*p] == Role::Mafia).count();
        let town_count = alive.len() - mafia_count;
        if mafia_count == 0 {
            c.line("The mafia is destroyed. The town wins!")?;
            return c.pause();
        }
        if mafia_count >= town_count {
            c.line("The mafia took over. The mafia wins.")?;
            return c.pause();
        }
        c.clear()?;
        let mut sorted = alive.clone();
        sorted.sort();
        c.line(format!("Night {day}. Alive: {}", sorted.join(", ")))?;
        let target = if alive.contains(&mafia_player) {
            let victim = if mafia_player == "You" {
                c.line("You are the mafia. Pick a victim:")?;
                let typed = c.prompt_line("Victim's name: ")?;
                if typed != "You" && alive.contains(&typed) {
                    typed
                } else {
                    let random = pick_other(c, &alive, "You");
                    c.line(format!("Bad name. Picked at random: {random}"))?;
                    random
                }
            } else {
                pick_other(c, &alive, &mafia_player)
            };
            c.line("The mafia has chosen a victim.")?;
            Some(victim)
        } else {
            None
        };
        let saved = if alive.contains(&doctor) {
            if doctor == "You" {
                let typed = c.prompt_line("Whom do you protect? (Enter - nobody): ")?;
                alive.contains(&typed).then_some(typed)
            } else {
                c.pick(&alive).cloned()
            }
        } else {
            None
        };
        if alive.contains(&detective) && detective == "You" {
            let typed = c.prompt_line("Whom to investigate? (Enter - skip): ")?;
            if alive.contains(&typed) {
                c.line(format!("{typed}'s role is {}", roles[&typed].label()))?;
            } else {
                c.line("Investigation skipped.")?;
            }
        }
        match target {
            Some(victim) if Some(&victim) != saved.as_ref() => {
                c.line(format!("Killed in the night: {victim}"))?;
                alive.retain(|p| *p != victim);
            }
            _ => c.line("Nobody died tonight.")?,
        }
        c.pause()?;
        c.clear()?;
        let mut sorted = alive.clone();
        sorted.sort();
        c.line(format!("Day. Alive: {}", sorted.join(", ")))?;
        let mut votes: HashMap<String, i64> = alive.iter().map(|p| (p.clone(), 0)).collect();
        for voter in alive.clone() {
            let choice = if voter == "You" {
                let typed = c.prompt_line("Whom do you vote against? ")?;
                if votes.contains_key(&typed) {
                    typed
                } else {
                    let random = pick_other(c, &alive, &voter);
                    c.line(format!("Bad pick, voting for {random}"))?;
                    random
                }
            } else {
                pick_other(c, &alive, &voter)
            };
            *votes.entry(choice).or_insert(0) += 1;
        }
        let lynched = votes
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        c.line(format!("Voted out: {lynched}"))?;
        alive.retain(|p| *p != lynched);
        c.pause()?;
        day += 1;
    }
}

pub fn whos_sus(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Who's SUS? ===")?;
    let n = c.prompt_int("Players, you included (default 7): ", 3..)?.unwrap_or(7);
    let players = roster(n);
    let impostor = c.pick(&players).cloned().unwrap_or_else(|| "You".to_string());
    c.line("One impostor is in the game. Gather the evidence and vote.")?;
    c.pause()?;
    let mut suspicion: HashMap<String, i64> = players.iter().map(|p| (p.clone(), 0)).collect();
    for _ in 0..3 {
        for p in &players {
            let slipped = if *p == impostor { c.chance(0.6) } else { c.chance(0.2) };
            if slipped {
                *suspicion.entry(p.clone()).or_insert(0) += 1;
            }
        }
    }
    c.line("Suspicion counts, for the record:")?;
    for p in &players {
        c.line(format!("{p} suspicion: {}", suspicion[p]))?;
    }
    let mut votes: HashMap<String, i64> = players.iter().map(|p| (p.clone(), 0)).collect();
    for voter in &players {
        let choice = if voter == "You" {
            let typed = c.prompt_line("Whom do you vote against?: ")?;
            if votes.contains_key(&typed) {
                typed
            } else {
                let random = pick_other(c, &players, "You");
                c.line(format!("Bad input, picked: {random}"))?;
                random
            }
        } else {
            let top = suspicion.values().copied().max().unwrap_or(0);
            let candidates: Vec<String> = players
                .iter()
                .filter(|p| suspicion[*p] == top && *p != voter)
                .cloned()
                .collect();
            if candidates.is_empty() {
                pick_other(c, &players, voter)
            } else {
                c.pick(&candidates).cloned().unwrap_or_else(|| voter.clone())
            }
        };
        *votes.entry(choice).or_insert(0) += 1;
    }
    let ejected = votes
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(name, _)| name.clone())
        .unwrap_or_default();
    c.line(format!("The vote is in. Ejected: {ejected}"))?;
    if ejected == impostor {
        c.line("The impostor is out! The crew wins.")?;
    } else {
        c.line("Wrong call. The impostor remains.")?;
    }
    c.pause()
}

pub fn traitor(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Traitor ===")?;
    let players: Vec<String> =
        ["You", "P1", "P2", "P3", "P4", "P5"].iter().map(|s| s.to_string()).collect();
    let traitor = c.pick(&players).cloned().unwrap_or_else(|| "P1".to_string());
    c.line("Roles are dealt. Night move: the traitor picks a victim.")?;
    c.pause()?;
    let victim = if traitor == "You" {
        c.line("You are the traitor. Pick a victim.")?;
        for (i, p) in players.iter().enumerate() {
            if p != "You" {
                c.line(format!("{i} {p}"))?;
            }
        }
        let idx = c.prompt_int("Victim index: ", 0..players.len() as i64)?;
        let picked = idx.map(|i| players[i as usize].clone()).filter(|p| p != "You");
        let victim = match picked {
            Some(p) => p,
            None => pick_other(c, &players, "You"),
        };
        c.line(format!("You killed {victim}"))?;
        victim
    } else {
        let victim = pick_other(c, &players, &traitor);
        c.line(format!("Somebody was killed in the night: {victim}"))?;
        victim
    };
    let alive: Vec<String> = players.iter().filter(|p| **p != victim).cloned().collect();
    c.pause()?;
    c.line("By day the accusations fly. Everyone votes for a suspected traitor.")?;
    let mut votes: HashMap<String, i64> = alive.iter().map(|p| (p.clone(), 0)).collect();
    for voter in &alive {
        let choice = if voter == "You" {
            c.line(format!("Still alive: {}", alive.join(", ")))?;
            let typed = c.prompt_line("Whom do you vote against (name): ")?;
            if votes.contains_key(&typed) {
                typed
            } else {
                let random = pick_other(c, &alive, "You");
                c.line(format!("Bad name, picking at random: {random}"))?;
                random
            }
        } else {
            pick_other(c, &alive, voter)
        };
        *votes.entry(choice).or_insert(0) += 1;
    }
    let (accused, count) = votes
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(name, count)| (name.clone(), *count))
        .unwrap_or_default();
    c.clear()?;
    c.line(format!("The vote is over. Accused: {accused} with {count} vote(s)."))?;
    if accused == traitor {
        c.line("The traitor is caught! The innocents win.")?;
    } else {
        c.line("Wrong pick. The traitor walks free.")?;
    }
    c.pause()
}

pub fn liars_bar(c: &mut Console) -> Result<(), GameError>
{
    const MENU: [(&str, [&str; 3]); 6] = [
        ("Mojito", ["mint", "rum", "lime"]),
        ("Coffee", ["beans", "caffeine", "hot"]),
        ("Tea", ["leaves", "hot", "herbal"]),
        ("Beer", ["barley", "hops", "fermented"]),
        ("Wine", ["grapes", "fermented", "vintage"]),
        ("Smoothie", ["fruit", "blender", "cold"]),
    ];
    const LIES: [&str; 4] =
        ["contains nuts", "is served frozen", "is made of stone", "contains sugar"];

    c.clear()?;
    c.line("=== Liar's Bar ===")?;
    let rounds = c.prompt_int("Rounds (default 6): ", 1..)?.unwrap_or(6);
    let mut score = 0;
    for _ in 0..rounds {
        let &(drink, facts) = c.pick(&MENU).unwrap_or(&MENU[0]);
        let truth = c.chance(0.5);
        let statement = if truth {
            let fact = *c.pick(&facts).unwrap_or(&facts[0]);
            format!("{drink} contains {fact}")
        } else {
            let lie = *c.pick(&LIES).unwrap_or(&LIES[0]);
            format!("{drink} {lie}")
        };
        c.clear()?;
        c.line(format!("The bartender: \"{statement}\""))?;
        let answer = c.prompt_line("True or false? (t/f): ")?.to_lowercase();
        if (answer == "t" && truth) || (answer == "f" && !truth) {
            c.say("You are right!")?;
            score += 1;
        } else {
            c.say("You are mistaken.")?;
        }
    }
    c.line(format!("Final score: {score}"))?;
    c.pause()
}

pub fn hitman(c: &mut Console) -> Result<(), GameError>
{
    struct Suspect
    {
        name: &'static str,
        hat: bool,
        scar: bool,
    }
    const SUSPECTS: [Suspect; 4] = [
        Suspect { name: "A", hat: true, scar: false },
        Suspect { name: "B", hat: false, scar: true },
        Suspect { name: "C", hat: true, scar: true },
        Suspect { name: "D", hat: false, scar: false },
    ];

    c.clear()?;
    c.line("=== Hitman ===")?;
    let by_hat = c.chance(0.5);
    let clue = if by_hat { "the killer wore a hat" } else { "the killer has a scar" };
    c.line(format!("The clue: {clue}"))?;
    let possible: Vec<&str> = SUSPECTS
        .iter()
        .filter(|s| if by_hat { s.hat } else { s.scar })
        .map(|s| s.name)
        .collect();
    let all: Vec<&str> = SUSPECTS.iter().map(|s| s.name).collect();
    c.line(format!("Who could it be? {}", all.join(", ")))?;
    let choice = c.prompt_line("Pick a suspect: ")?.to_uppercase();
    if possible.contains(&choice.as_str()) {
        c.line("Clean hit - you found the target.")?;
    } else {
        c.line(format!("A miss - wrong pick. Could have been: {}", possible.join(", ")))?;
    }
    c.pause()
}

pub fn russian_roulette(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Russian Roulette ===")?;
    let chambers = c.prompt_int("Chambers in the cylinder (1..6, default 6): ", 1..=6)?.unwrap_or(6);
    let bullets = c
        .prompt_int("How many bullets to load (default 1): ", 0..=chambers)?
        .filter(|&b| b > 0)
        .unwrap_or(1);
    let players = c.prompt_int("Players, you included (default 3): ", 2..)?.unwrap_or(3);
    let mut order = roster(players);
    let mut cylinder = vec![0u8; chambers as usize];
    let mut loaded = 0;
    while loaded < bullets {
        let pos = c.roll(0..chambers as usize);
        if cylinder[pos] == 0 {
            cylinder[pos] = 1;
            loaded += 1;
        }
    }
    let mut idx = 0usize;
    loop {
        let current = order[idx % order.len()].clone();
        c.line(format!("{current}'s turn. Press Enter to spin and pull the trigger."))?;
        c.prompt_line("")?;
        let fired = *c.pick(&cylinder).unwrap_or(&0) == 1;
        if fired {
            c.line(format!("{current} is dead!"))?;
            if current == "You" {
                c.line("You lose.")?;
                return c.pause();
            }
            idx %= order.len() - 1;
            order.retain(|p| *p != current);
            if order.len() == 1 {
                c.line(format!("The remaining player wins: {}", order[0]))?;
                return c.pause();
            }
        } else {
            c.say(format!("{current} lives."))?;
            idx += 1;
        }
    }
}

pub fn reputation(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Reputation ===")?;
    let mut rep: i64 = 50;
    let rounds = c.prompt_int("Rounds (default 6): ", 1..)?.unwrap_or(6);
    let scenarios: [(&str, i64); 4] = [
        ("Helped someone with their bags", 10),
        ("Spread a rumor", -12),
        ("Donated to a charity", 8),
        ("Showed up late to a meeting", -5),
    ];
    for _ in 0..rounds {
        c.clear()?;
        c.line(format!("Reputation: {rep}/100"))?;
        let &(event, delta) = c.pick(&scenarios).unwrap_or(&scenarios[0]);
        c.line(format!("Event: {event}"))?;
        let choice = c.prompt_line("Choice: act / skip (a/s): ")?.to_lowercase();
        if choice == "a" {
            rep = (rep + delta).clamp(0, 100);
            c.say("Done.")?;
        } else {
            rep = (rep - 3).max(0);
            c.say("You passed - that has consequences too.")?;
        }
    }
    c.line(format!("Final reputation: {rep}"))?;
    c.pause()
}

pub fn fear(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Fear ===")?;
    let mut fear: i64 = 0;
    let rounds = c.prompt_int("How many trials (default 6): ", 1..)?.unwrap_or(6);
    let scenarios: [(&str, i64); 5] = [
        ("a dark corridor", 2),
        ("noise in the basement", 3),
        ("a shadow in the window", 1),
        ("a strange whisper", 4),
        ("a wardrobe that moves", 3),
    ];
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Trial {round}/{rounds}. Fear level: {fear}/10"))?;
        let &(scene, spike) = c.pick(&scenarios).unwrap_or(&scenarios[0]);
        c.line(format!("The scene: {scene}"))?;
        let action = c.prompt_line("Choose: Investigate / Run / Hide (i/r/h): ")?.to_lowercase();
        match action.as_str() {
            "i" => {
                if c.chance(0.4) {
                    fear = (fear - 1).max(0);
                    c.say("You are brave - the fear recedes.")?;
                } else {
                    fear += spike;
                    c.say("You are rattled - the fear grows.")?;
                }
            }
            "r" => {
                fear = (fear - 1).max(0);
                c.say("You run - less stress, more exhaustion.")?;
            }
            _ => {
                fear += 1;
                c.say("You hide - the fear creeps up.")?;
            }
        }
        if fear >= 10 {
            c.line("The fear peaked - you blacked out.")?;
            return c.pause();
        }
    }
    c.line(format!("You passed the trials. Fear level: {fear}"))?;
    c.pause()
}
