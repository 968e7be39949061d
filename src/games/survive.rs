//! Survival loops: day-by-day resource management, bunker defense, and
//! the short horror-night games.

use crate::console::{Console, GameError};
use std::collections::HashMap;

struct Supplies
{
    food: i64,
    wood: i64,
    water: i64,
    ammo: i64,
}

impl Supplies
{
    fn describe(&self) -> String
    {
        format!(
            "food {}, wood {}, water {}, ammo {}",
            self.food, self.wood, self.water, self.ammo
        )
    }
}

pub fn survival(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Survival ===")?;
    let days = c.prompt_int("How many days do you want to last? (default 7): ", 1..)?.unwrap_or(7);
    let mut hunger: i64 = 0;
    let mut fatigue: i64 = 0;
    let mut health: i64 = 10;
    let mut supplies = Supplies { food: 5, wood: 3, water: 5, ammo: 2 };
    let mut day = 0;
    c.line("Goal: make it through the days by juggling supplies and condition.")?;
    c.pause()?;
    while day < days && health > 0 {
        day += 1;
        c.clear()?;
        c.line(format!("Day {day}/{days}"))?;
        c.line(format!("Health: {health}, Hunger: {hunger}, Fatigue: {fatigue}"))?;
        c.line(format!("Supplies: {}", supplies.describe()))?;
        let action = c
            .prompt_line("Plan for the day: (s) scavenge, (r) rest, (h) hunt, (q) quit: ")?
            .to_lowercase();
        match action.as_str() {
            "" | "q" => {
                c.line("You gave up. Leaving the wilderness.")?;
                break;
            }
            "s" => {
                let food = c.roll(0..=2i64);
                let wood = c.roll(0..=2i64);
                let water = c.roll(0..=1i64);
                supplies.food += food;
                supplies.wood += wood;
                supplies.water += water;
                c.line(format!("You found: food+{food}, wood+{wood}, water+{water}"))?;
                if c.chance(0.2) {
                    supplies.ammo += 1;
                    c.line("You also found a round of ammo.")?;
                }
                if c.chance(0.15) {
                    let injury = c.roll(1..=3i64);
                    health -= injury;
                    c.line(format!("You got hurt: -{injury} health."))?;
                }
                hunger += 1;
                fatigue += 1;
            }
            "r" => {
                fatigue = (fatigue - 2).max(0);
                health = (health + 1).min(10);
                c.line("The rest helped: fatigue -2, health +1")?;
                hunger += 1;
            }
            "h" => {
                if c.chance(0.65) {
                    let gained = c.roll(1..=4i64);
                    supplies.food += gained;
                    c.line(format!("Good hunt: food+{gained}"))?;
                } else {
                    c.line("The hunt came up empty.")?;
                }
                if c.chance(0.2) {
                    let injury = c.roll(1..=4i64);
                    health -= injury;
                    c.line(format!("You got hurt: -{injury} health."))?;
                }
                hunger += 1;
                fatigue += 2;
            }
            _ => {}
        }
        if supplies.food > 0 && supplies.water > 0 {
            supplies.food -= 1;
            supplies.water -= 1;
            hunger = (hunger - 1).max(0);
        } else {
            hunger += 2;
            health -= 1;
            c.line("Not enough food or water: health is slipping.")?;
        }
        if hunger >= 5 {
            health -= 1;
            c.line("Severe hunger: health -1")?;
        }
        if c.chance(0.12) {
            match *c.pick(&["wolf", "raiders", "storm"]).unwrap_or(&"storm") {
                "wolf" => {
                    c.line("A wolf attacks!")?;
                    if supplies.wood >= 1 && c.chance(0.5) {
                        supplies.wood -= 1;
                        c.line("You drove the wolf off, losing some firewood.")?;
                    } else {
                        let damage = c.roll(1..=3i64);
                        health -= damage;
                        c.line(format!("The wolf hurt you: -{damage} health."))?;
                    }
                }
                "raiders" => {
                    c.line("A raider band attacks!")?;
                    if supplies.ammo >= 1 {
                        supplies.ammo -= 1;
                        c.line("You fired a warning shot and they scattered. Ammo -1.")?;
                    } else {
                        let stolen = supplies.food.min(c.roll(0..=2i64));
                        supplies.food -= stolen;
                        c.line(format!("The raiders stole food-{stolen}."))?;
                    }
                }
                _ => {
                    c.line("A storm. A harder day: fatigue +1.")?;
                    fatigue += 1;
                }
            }
        }
        if fatigue >= 6 {
            health -= 1;
            c.line("Total exhaustion: health -1")?;
        }
        c.say(format!(
            "End of day: health={health}, hunger={hunger}, fatigue={fatigue}, supplies: {}",
            supplies.describe()
        ))?;
        if health <= 0 {
            c.line("You did not make it...")?;
            break;
        }
        c.pause()?;
    }
    c.clear()?;
    if health > 0 && day >= days {
        c.line(format!("Congratulations! You survived {days} days."))?;
    } else {
        c.line("Sadly, you did not survive.")?;
    }
    c.pause()
}

pub fn bunker(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Bunker ===")?;
    let rounds = c.prompt_int("How many waves? (default 6): ", 1..)?.unwrap_or(6);
    let mut stock: HashMap<&str, i64> =
        [("food", 10), ("water", 10), ("ammo", 5), ("morale", 5)].into();
    let mut survivors: i64 = 5;
    c.line("You run the bunker. Allocate resources every wave.")?;
    c.pause()?;
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Wave {round}/{rounds}"))?;
        c.line("Bunker status:")?;
        for key in ["food", "water", "ammo", "morale"] {
            c.line(format!("  {key}: {}", stock[key]))?;
        }
        c.line(format!("Survivors: {survivors}"))?;
        let event = *c.pick(&["raiders", "sickness", "storm", "quiet"]).unwrap_or(&"quiet");
        c.line(format!("Event this wave: {event}"))?;
        c.line("Spend 3 points across priorities: food, water, ammo, morale")?;
        let mut points = 3;
        while points > 0 {
            c.line(format!("Points left: {points}"))?;
            let choice = c
                .prompt_line("Where to spend (food/water/ammo/morale, Enter to stop): ")?
                .to_lowercase();
            if choice.is_empty() {
                break;
            }
            match stock.get_mut(choice.as_str()) {
                Some(value) => {
                    *value += 1;
                    points -= 1;
                }
                None => c.line("Not a resource.")?,
            }
        }
        let upkeep = survivors / 2;
        drain(&mut stock, "food", upkeep);
        drain(&mut stock, "water", upkeep);
        match event {
            "raiders" => {
                if stock["ammo"] >= 1 {
                    c.line("You fought the raiders off.")?;
                    drain(&mut stock, "ammo", 1);
                } else {
                    let lost = c.roll(1..=3i64).min(survivors);
                    survivors -= lost;
                    c.line(format!("The raiders took their toll: -{lost} survivors."))?;
                }
            }
            "sickness" => {
                if stock["water"] >= survivors / 3 {
                    c.line("The sickness was contained.")?;
                    drain(&mut stock, "water", 1);
                } else {
                    let lost = c.roll(0..=2i64).min(survivors);
                    survivors -= lost;
                    c.line(format!("The sickness claimed: -{lost} survivors."))?;
                }
            }
            "storm" => {
                c.line("The storm damaged the stores.")?;
                for key in ["food", "water", "morale"] {
                    drain(&mut stock, key, 1);
                }
            }
            _ => c.line("A quiet night. Nothing notable.")?,
        }
        if stock["morale"] <= 0 && survivors > 0 && c.chance(0.5) {
            survivors -= 1;
            c.line("One survivor walked out over the low morale.")?;
        }
        if survivors <= 0 {
            c.line("Every survivor is gone. Game over.")?;
            break;
        }
        c.pause()?;
    }
    c.clear()?;
    c.line("Final tally:")?;
    c.line(format!("Survivors: {survivors}"))?;
    for key in ["food", "water", "ammo", "morale"] {
        c.line(format!("  {key}: {}", stock[key]))?;
    }
    c.pause()
}

fn drain(stock: &mut HashMap<&str, i64>, key: &str, amount: i64)
{
    if let Some(value) = stock.get_mut(key) {
        *value = (*value - amount).max(0);
    }
}

const PROFESSIONS: [&str; 8] =
    ["Doctor", "Engineer", "Farmer", "Teacher", "Programmer", "Cook", "Artist", "Pilot"];
const HOBBIES: [&str; 7] =
    ["fishing", "chess", "gardening", "dancing", "reading", "video games", "cooking"];
const PHOBIAS: [&str; 5] =
    ["acrophobia", "claustrophobia", "aquaphobia", "arachnophobia", "aerophobia"];
const HEALTHS: [&str; 5] =
    ["healthy", "allergies", "asthma", "heart condition", "chronic fatigue"];
const FACTS: [&str; 4] = [
    "runs marathons",
    "speaks four languages",
    "won a contest once",
    "grew rare plants",
];
const OCCUPATIONS: [&str; 5] =
    ["manager", "freelancer", "soldier", "administrator", "architect"];
const DETAILS: [&str; 5] = ["hobby", "phobia", "health", "fact", "occupation"];

struct Profile
{
    name: String,
    age: i64,
    profession: String,
    hobby: &'static str,
    phobia: &'static str,
    health: &'static str,
    fact: &'static str,
    occupation: &'static str,
}

impl Profile
{
    fn detail(&self, key: &str) -> String
    {
        match key {
            "hobby" => self.hobby.to_string(),
            "phobia" => self.phobia.to_string(),
            "health" => self.health.to_string(),
            "fact" => self.fact.to_string(),
            _ => self.occupation.to_string(),
        }
    }
}

/// The board-game Bunker: seven players reveal pieces of their profile,
/// then everyone votes. Two spots in the bunker, five go out the airlock.
pub fn bunker_board(c: &mut Console) -> Result<(), GameError>
{
    const SPOTS: usize = 2;

    c.clear()?;
    c.line("=== Bunker: The Board Game ===")?;
    let mut players: Vec<Profile> = Vec::new();
    for i in 0..7 {
        let name = if i == 0 { "You".to_string() } else { format!("NPC{i}") };
        players.push(Profile {
            name,
            age: c.roll(18..=70i64),
            profession: c.pick(&PROFESSIONS).unwrap_or(&"Farmer").to_string(),
            hobby: *c.pick(&HOBBIES).unwrap_or(&"chess"),
            phobia: *c.pick(&PHOBIAS).unwrap_or(&"acrophobia"),
            health: *c.pick(&HEALTHS).unwrap_or(&"healthy"),
            fact: *c.pick(&FACTS).unwrap_or(&"runs marathons"),
            occupation: *c.pick(&OCCUPATIONS).unwrap_or(&"manager"),
        });
    }
    c.line("Enter your age and profession (leave blank for random).")?;
    if let Some(age) = c.prompt_int("Your age (Enter for random): ", 1..)? {
        players[0].age = age;
    }
    let profession = c.prompt_line("Your profession (Enter for random): ")?;
    if !profession.is_empty() {
        players[0].profession = profession;
    }
    c.pause()?;

    c.clear()?;
    c.line("Reveal round: everyone shows age and profession.")?;
    for p in &players {
        c.say(format!("{}: age {}, profession {}", p.name, p.age, p.profession))?;
    }
    c.pause()?;

    c.line("Now each player may reveal one detail: hobby, phobia, health, fact or occupation.")?;
    let mut revealed: HashMap<String, Vec<(&str, String)>> =
        players.iter().map(|p| (p.name.clone(), Vec::new())).collect();
    for i in 0..players.len() {
        c.clear()?;
        c.line(format!("{}'s turn", players[i].name))?;
        let key = if i == 0 {
            let picked = c.prompt_choice(
                "What to reveal?",
                &["Hobby", "Phobia", "Health", "Fact", "Occupation", "Skip"],
            )?;
            match picked {
                None | Some(5) => {
                    c.say("Skipped.")?;
                    None
                }
                Some(idx) => Some(DETAILS[idx]),
            }
        } else {
            Some(*c.pick(&DETAILS).unwrap_or(&"hobby"))
        };
        if let Some(key) = key {
            let value = players[i].detail(key);
            c.say(format!("{} revealed {key}: {value}", players[i].name))?;
            if let Some(entries) = revealed.get_mut(&players[i].name) {
                entries.push((key, value));
            }
        }
    }
    c.pause()?;

    c.clear()?;
    c.line(format!(
        "The vote begins! {SPOTS} spots in the bunker - {} players leave.",
        players.len() - SPOTS
    ))?;
    let mut votes: HashMap<String, i64> = players.iter().map(|p| (p.name.clone(), 0)).collect();
    for voter in 0..players.len() {
        if voter == 0 {
            c.line("Players and revealed details:")?;
            for p in &players {
                let shown: Vec<String> = revealed[&p.name]
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                c.line(format!(
                    " - {}: age {}, profession {}, revealed: [{}]",
                    p.name,
                    p.age,
                    p.profession,
                    shown.join(", ")
                ))?;
            }
            let mut choice = c.prompt_line("Whom do you vote out? Enter a name: ")?;
            if !votes.contains_key(&choice) {
                let names: Vec<String> = players.iter().map(|p| p.name.clone()).collect();
                choice = c.pick(&names).cloned().unwrap_or_default();
                c.line(format!("Unknown name - your vote lands on {choice}"))?;
            }
            *votes.entry(choice).or_insert(0) += 1;
        } else {
            let candidates: Vec<&Profile> =
                players.iter().filter(|p| p.name != players[voter].name).collect();
            let weights: Vec<f64> = candidates
                .iter()
                .map(|p| {
                    let mut weight = 1.0;
                    for (key, value) in &revealed[&p.name] {
                        if *key == "health" && (value.contains("heart") || value.contains("chronic"))
                        {
                            weight += 2.0;
                        }
                        if *key == "phobia"
                            && (value == "arachnophobia" || value == "aquaphobia")
                        {
                            weight += 1.0;
                        }
                    }
                    if p.name == "You" {
                        weight += 0.5;
                    }
                    weight
                })
                .collect();
            if let Some(idx) = c.pick_weighted(&weights) {
                *votes.entry(candidates[idx].name.clone()).or_insert(0) += 1;
            }
        }
    }
    c.clear()?;
    c.line("Vote results:")?;
    let mut tally: Vec<(String, i64)> = votes.into_iter().collect();
    tally.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (name, count) in &tally {
        c.line(format!("{name}: {count} vote(s)"))?;
    }
    // ties on the cut line break randomly
    let mut ranked: Vec<(String, i64, f64)> =
        tally.into_iter().map(|(name, count)| (name, count, c.roll(0.0..1.0))).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.total_cmp(&b.2)));
    let eliminated: Vec<String> =
        ranked.iter().take(players.len() - SPOTS).map(|(name, ..)| name.clone()).collect();
    let survivors: Vec<String> =
        ranked.iter().skip(players.len() - SPOTS).map(|(name, ..)| name.clone()).collect();
    c.line(format!("\nOut the door: {}", eliminated.join(", ")))?;
    c.line(format!("Staying in the bunker: {}", survivors.join(", ")))?;
    c.pause()
}

pub fn raid(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Raid ===")?;
    let team = ["Alpha", "Bravo", "Charlie"];
    let defense = c.prompt_int("Defense strength (1-10, default 5): ", 1..=10)?.unwrap_or(5);
    c.line("You lead the raid. Pick a strategy: stealth, frontal, or diversion.")?;
    let strategy = c.prompt_line("Strategy (stealth/frontal/diversion): ")?.to_lowercase();
    let mut odds = 0.5;
    match strategy.as_str() {
        "stealth" => odds += 0.15,
        "frontal" => odds -= 0.1,
        "diversion" => odds += 0.05,
        _ => {}
    }
    odds -= (defense - 5) as f64 * 0.05;
    let succeeded = c.chance(odds.clamp(0.0, 1.0));
    c.clear()?;
    if succeeded {
        c.line("The raid succeeded! Objectives taken.")?;
    } else {
        let losses = c.roll(0..=team.len() as i64);
        c.line(format!("The raid failed. Team losses: {losses}."))?;
    }
    c.pause()
}

pub fn last_survivor(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Last Survivor ===")?;
    let n = c.prompt_int("Players, you included (default 8): ", 2..)?.unwrap_or(8);
    let mut alive = crate::console::roster(n);
    let mut round = 0;
    while alive.len() > 1 {
        round += 1;
        c.clear()?;
        c.line(format!("Round {round}. Standing: {} -> {}", alive.len(), alive.join(", ")))?;
        let action = c.prompt_line("Press Enter to play the round, q to quit: ")?.to_lowercase();
        if action == "q" {
            break;
        }
        let eliminate = c.roll(1..=(alive.len() as i64 / 4).max(1));
        let mut gone = Vec::new();
        for _ in 0..eliminate {
            if alive.len() <= 1 {
                break;
            }
            let idx = c.roll(0..alive.len());
            gone.push(alive.swap_remove(idx));
        }
        c.say(format!("Eliminated: {}", gone.join(", ")))?;
    }
    if alive.iter().any(|name| name == "You") {
        c.line("You are the last survivor! Victory!")?;
    } else {
        c.line("You did not hold out. Game over.")?;
    }
    c.pause()
}

pub fn catastrophe(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Catastrophe ===")?;
    let days = c.prompt_int("Days to survive? (default 7): ", 1..)?.unwrap_or(7);
    let mut health: i64 = 10;
    let mut supplies: i64 = 5;
    for day in 1..=days {
        c.clear()?;
        c.line(format!("Day {day}/{days}. Health {health}, supplies {supplies}."))?;
        let event = *c
            .pick(&["earthquake", "flood", "heat", "drought", "calm"])
            .unwrap_or(&"calm");
        c.line(format!("Today: {event}"))?;
        let action = c.prompt_line("Action: prepare/use/rest (Enter to skip): ")?.to_lowercase();
        let mitigated = action == "prepare" && supplies > 0;
        if mitigated {
            supplies -= 1;
            c.line("You prepared; the risk is lower.")?;
        }
        match event {
            "earthquake" => {
                let damage = if mitigated { 1 } else { 3 };
                health -= damage;
                c.line(format!("Earthquake: -{damage} health."))?;
            }
            "flood" => {
                if mitigated {
                    c.line("The preparation held.")?;
                } else {
                    supplies = (supplies - 2).max(0);
                    c.line("Flood: supplies washed away.")?;
                }
            }
            "heat" => {
                health -= 1;
                supplies = (supplies - 1).max(0);
                c.line("Heat wave: -1 health, -1 supplies.")?;
            }
            "drought" => {
                supplies = (supplies - 2).max(0);
                if supplies == 0 {
                    health -= 2;
                    c.line("Drought with nothing in reserve: -2 health.")?;
                } else {
                    c.line("You weathered the drought.")?;
                }
            }
            _ => c.line("A calm day.")?,
        }
        if health <= 0 {
            c.line("You did not live through the catastrophe...")?;
            return c.pause();
        }
        c.pause()?;
    }
    c.line("You survived the string of catastrophes. Congratulations!")?;
    c.pause()
}

pub fn zombie_apocalypse(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Zombie Apocalypse ===")?;
    let mut survivors: i64 = 3;
    let mut supplies: i64 = 5;
    let days = c.prompt_int("How many days to survive? (default 5): ", 1..)?.unwrap_or(5);
    for day in 1..=days {
        c.line(format!("Day {day}: supplies {supplies}, survivors {survivors}"))?;
        match *c.pick(&["raid", "quiet", "horde"]).unwrap_or(&"quiet") {
            "raid" => {
                survivors -= c.roll(0..=1i64);
                supplies -= c.roll(0..=2i64);
                c.say("Marauders hit the camp!")?;
            }
            "horde" => {
                let lost = c.roll(0..=2i64);
                survivors -= lost;
                c.say(format!("The horde took {lost} of ours"))?;
            }
            _ => {
                supplies += c.roll(0..=2i64);
                c.say("A quiet day - the stores grew.")?;
            }
        }
        if survivors <= 0 || supplies < 0 {
            c.line("Everyone has fallen.")?;
            return c.pause();
        }
    }
    c.line(format!("You survived! People left: {survivors}"))?;
    c.pause()
}

pub fn apocalypse(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== End of the World ===")?;
    let scenario = *c
        .pick(&["meteor shower", "nuclear war", "mass panic", "climate collapse"])
        .unwrap_or(&"mass panic");
    c.line(format!("Scenario: {scenario}"))?;
    c.prompt_choice("What do you do?", &["Hide", "Flee", "Join others", "Record it"])?;
    let outcome = *c
        .pick(&["You survive", "You perish", "You are left in limbo"])
        .unwrap_or(&"You are left in limbo");
    c.line(format!("Outcome of your choice: {outcome}"))?;
    c.pause()
}

pub fn five_nights(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Five Nights (abridged) ===")?;
    let nights = c.prompt_int("Nights (default 3): ", 1..)?.unwrap_or(3);
    let mut sanity: i64 = 10;
    for night in 1..=nights {
        c.line(format!("Night {night}"))?;
        let checks = c.roll(1..=3i64);
        for _ in 0..checks {
            if c.chance(0.25) {
                sanity -= c.roll(1..=3i64);
                c.say("The animatronic is close! Sanity slips.")?;
            } else {
                c.say("Silence...")?;
            }
        }
        if sanity <= 0 {
            c.line("You lost your mind.")?;
            return c.pause();
        }
    }
    c.line(format!("You made it through the nights! Sanity: {sanity}"))?;
    c.pause()
}

pub fn abandoned_place(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Abandoned Place ===")?;
    let rooms = ["kitchen", "basement", "attic", "hall", "veranda"];
    let room = *c.pick(&rooms).unwrap_or(&"hall");
    c.line(format!("You are in the {room}"))?;
    for _ in 0..5 {
        let found = *c
            .pick(&["an old couch", "a broken window", "a letter", "a bloody mark", "a child's toy"])
            .unwrap_or(&"a letter");
        c.line(format!("Found: {found}"))?;
        let answer = c.prompt_line("Take it or leave it? (take/leave): ")?.to_lowercase();
        if answer == "take" && c.chance(0.2) {
            c.line("You picked up a mysterious item...")?;
        }
        c.say("")?;
    }
    c.pause()
}

pub fn scareman(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Scareman ===")?;
    let mut fear = 0;
    for _ in 0..5 {
        let event = *c.pick(&["a whisper", "a shadow", "a shriek", "a rustle"]).unwrap_or(&"a shadow");
        c.line(format!("Event: {event}"))?;
        let response = c.prompt_line("Hide or run? (h/run): ")?.to_lowercase();
        if response == "h" {
            fear += c.roll(0..=1i64);
            c.say("You hold still...")?;
        } else {
            fear += c.roll(1..=3i64);
            c.say("You run - heart pounding!")?;
        }
    }
    c.line(format!("Fear level: {fear}"))?;
    c.pause()
}

pub fn be_quieter(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Be Quieter! ===")?;
    let mut noise = 0;
    for _ in 0..6 {
        let action = c.prompt_line("Keep quiet or make noise? (quiet/noisy): ")?.to_lowercase();
        if action == "quiet" {
            c.say("Quiet...")?;
        } else {
            noise += c.roll(1..=3i64);
            c.say("Noise!")?;
        }
        if noise >= 6 && c.chance(0.5) {
            c.line("You drew attention.")?;
            return c.pause();
        }
    }
    c.line("You slipped through unnoticed.")?;
    c.pause()
}

pub fn dont_eat_cake(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Don't Eat the Cake ===")?;
    c.line("There is a cake in front of you. Do not eat it.")?;
    for _ in 0..3 {
        let answer = c.prompt_line("Resist? (y/n): ")?.to_lowercase();
        if answer == "y" {
            c.say("You are strong!")?;
        } else {
            c.line("You ate the cake and something strange happened...")?;
            break;
        }
    }
    c.pause()
}

pub fn revive_ability(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Power to Revive ===")?;
    let tries = c.prompt_int("How many times to use the power? (default 3): ", 1..)?.unwrap_or(3);
    let targets = ["A plant", "An animal", "An abandoned thing", "A stone"];
    for _ in 0..tries {
        let picked = c.prompt_choice("Whom to revive?", &targets)?;
        let name = picked.map(|idx| targets[idx]).unwrap_or("Nothing");
        if c.chance(0.5) {
            c.say(format!("It worked - {name} came alive!"))?;
        } else {
            c.say("It failed. The price: you feel weaker.")?;
        }
    }
    c.pause()
}

pub fn revenge(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Revenge ===")?;
    let reason = *c
        .pick(&["You were betrayed", "You lost something", "You were humiliated"])
        .unwrap_or(&"You were betrayed");
    c.line(format!("The story: {reason}"))?;
    let options = ["Confront", "Sabotage", "Forgive"];
    let picked = c.prompt_choice("How to take revenge?", &options)?;
    if picked == Some(2) {
        c.line("Revenge called off. You feel relief.")?;
    } else {
        let outcome = *c.pick(&["Success", "Backfire", "Unclear"]).unwrap_or(&"Unclear");
        c.line(format!("Outcome: {outcome}"))?;
    }
    c.pause()
}
