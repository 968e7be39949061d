//! "Everything is alive" games - talking objects, moody planets and the
//! small management simulators.

use crate::console::{Console, GameError};
use std::collections::HashSet;

const PLANETS: [&str; 6] = ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn"];

pub fn living_car(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Living Car ===")?;
    let distance = c.prompt_int("Distance to the goal (default 30): ", 5..)?.unwrap_or(30);
    let mut fuel = c.prompt_int("Fuel reserve (default 10): ", 1..)?.unwrap_or(10);
    let mut integrity: i64 = 10;
    let mut position: i64 = 0;
    c.line("Each turn: drive, refuel (risky), or repair (a gamble).")?;
    c.pause()?;
    while position < distance && integrity > 0 {
        c.clear()?;
        c.line(format!("Position: {position}/{distance}, fuel: {fuel}, integrity: {integrity}"))?;
        let cmd = c.prompt_line("Action (drive/refuel/repair/q): ")?.to_lowercase();
        match cmd.as_str() {
            "" | "q" => break,
            "drive" => {
                if fuel <= 0 {
                    c.line("No fuel.")?;
                } else {
                    let moved = c.roll(2..=5i64);
                    position += moved;
                    fuel -= 1;
                    if c.chance(0.15) {
                        let damage = c.roll(1..=3i64);
                        integrity -= damage;
                        c.line(format!("A road hazard dinged the car: -{damage} integrity."))?;
                    }
                    c.line(format!("You drove {moved}."))?;
                }
            }
            "refuel" => {
                if c.chance(0.7) {
                    fuel += 3;
                    c.line("A clean refuel: +3 fuel.")?;
                } else {
                    let damage = c.roll(1..=2i64);
                    integrity -= damage;
                    c.line(format!("A botched refuel: damage -{damage}."))?;
                }
            }
            "repair" => {
                if c.chance(0.6) {
                    let healed = c.roll(1..=3i64);
                    integrity = (integrity + healed).min(10);
                    c.line(format!("The repair held: +{healed} integrity."))?;
                } else {
                    c.line("The repair failed.")?;
                }
            }
            _ => {}
        }
        if c.chance(0.08) {
            fuel = (fuel - 1).max(0);
            c.line("A fuel leak: -1.")?;
        }
        c.say("")?;
    }
    c.clear()?;
    if position >= distance && integrity > 0 {
        c.line("You reached the goal and the car lives. Victory!")?;
    } else if integrity <= 0 {
        c.line("The car broke down for good. A loss.")?;
    } else {
        c.line("The trip is over.")?;
    }
    c.pause()
}

pub fn living_car_face(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Living Car with Eyes and a Mouth ===")?;
    let distance = c.prompt_int("Distance (default 25): ", 5..)?.unwrap_or(25);
    let mut fuel = c.prompt_int("Fuel (default 8): ", 1..)?.unwrap_or(8);
    let mut mood: i64 = 5;
    let mut pos: i64 = 0;
    c.line("The car is alive: its eyes blink and its mouth reacts to events.")?;
    c.pause()?;
    while pos < distance && fuel > 0 && mood > 0 {
        c.clear()?;
        let eyes = if c.chance(0.12) { "- -" } else { "o o" };
        let mouth = if mood >= 5 { ":)" } else { ":(" };
        c.line(format!("Eyes: {eyes}   Mouth: {mouth}"))?;
        c.line(format!("Position: {pos}/{distance}  Fuel: {fuel}  Mood: {mood}/10"))?;
        let action = c.prompt_line("Action: drive/refuel/talk/exit: ")?.to_lowercase();
        match action.as_str() {
            "" | "exit" => break,
            "drive" => {
                let step = c.roll(2..=4i64);
                pos += step;
                fuel -= 1;
                if !c.chance(0.8) {
                    mood = (mood - 1).max(0);
                }
                c.line(format!("Rolling: +{step}"))?;
            }
            "refuel" => {
                if c.chance(0.75) {
                    let gained = c.roll(2..=4i64);
                    fuel += gained;
                    mood = (mood + 1).min(10);
                    c.line(format!("Refueled +{gained}. The car is pleased."))?;
                } else {
                    mood -= 1;
                    c.line("Bad fuel - the car is offended.")?;
                }
            }
            "talk" => {
                let phrase = c.prompt_line("What do you tell the car? ")?.to_lowercase();
                let kind = ["good", "nice", "thanks", "great", "well done"]
                    .iter()
                    .any(|word| phrase.contains(word));
                if kind {
                    mood = (mood + 2).min(10);
                    c.line("The car beams!")?;
                } else {
                    c.line("The car goes: vroom.")?;
                }
            }
            _ => {}
        }
        if c.chance(0.1) {
            c.line("The car winks at you!")?;
            mood = (mood + 1).min(10);
        }
        c.say("")?;
    }
    c.clear()?;
    if pos >= distance {
        c.line("You made it! The car is ecstatic: O O  :D")?;
    } else if fuel <= 0 {
        c.line("You ran dry. The car is sad :(")?;
    } else if mood <= 0 {
        c.line("The car is too upset to drive on.")?;
    }
    c.pause()
}

pub fn everything_alive(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Everything Comes Alive! ===")?;
    let items = ["chair", "lamp", "clock", "painting", "keyboard"];
    let mut moods: Vec<i64> = items.iter().map(|_| c.roll(0..=5i64)).collect();
    let rounds = c.prompt_int("How many rounds to watch? (default 8): ", 1..)?.unwrap_or(8);
    c.line("The things around you pick up moods and act on their own.")?;
    c.pause()?;
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}"))?;
        for (i, name) in items.iter().enumerate() {
            let roll: f64 = c.roll(0.0..1.0);
            let action = if roll < 0.2 {
                moods[i] = (moods[i] + 1).min(10);
                "stirs"
            } else if roll < 0.5 {
                moods[i] = (moods[i] - 1).max(0);
                match *name {
                    "clock" => "chimes",
                    "lamp" => "flickers",
                    _ => "creaks",
                }
            } else {
                "keeps quiet"
            };
            c.line(format!("The {name} [{}/10]: {action}", moods[i]))?;
        }
        if c.chance(0.3) {
            let a = c.roll(0..items.len());
            let mut b = c.roll(0..items.len());
            while b == a {
                b = c.roll(0..items.len());
            }
            moods[a] = (moods[a] + 1).min(10);
            moods[b] = (moods[b] - 1).max(0);
            c.line(format!("Interaction: the {} nudged the {}.", items[a], items[b]))?;
        }
        c.say("")?;
    }
    c.line("The watch is over.")?;
    c.pause()
}

pub fn chat_with_items(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Chat with the Living Things ===")?;
    let names = ["chair", "lamp", "clock"];
    let mut moods: Vec<i64> = vec![5, 4, 6];
    let mut hungers: Vec<i64> = vec![0, 0, 0];
    let rounds = c.prompt_int("How many interactions? (default 8): ", 1..)?.unwrap_or(8);
    c.line("You can feed, fix, talk and watch. Goal: keep moods above 3.")?;
    c.pause()?;
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}"))?;
        for (i, name) in names.iter().enumerate() {
            c.line(format!(" - {name}: mood {}/10, hunger {}", moods[i], hungers[i]))?;
        }
        let choice = c
            .prompt_line("Pick a thing by name, or \"all\" (Enter for random): ")?
            .to_lowercase();
        let targets: Vec<usize> = if choice.is_empty() {
            let i = c.roll(0..names.len());
            c.line(format!("Auto-picked: {}", names[i]))?;
            vec![i]
        } else if choice == "all" {
            (0..names.len()).collect()
        } else if let Some(i) = names.iter().position(|n| *n == choice) {
            vec![i]
        } else {
            c.say("No such thing here.")?;
            continue;
        };
        let action = c.prompt_line("Action: talk/feed/fix/watch: ")?.to_lowercase();
        for i in targets {
            let name = names[i];
            match action.as_str() {
                "talk" => {
                    if c.chance(0.6) {
                        moods[i] = (moods[i] + 1).min(10);
                        c.line(format!("You chatted with the {name}. Mood +1."))?;
                    } else {
                        c.line(format!("The {name} stays silent..."))?;
                    }
                }
                "feed" => {
                    hungers[i] = (hungers[i] - 1).max(0);
                    moods[i] = (moods[i] + 1).min(10);
                    c.line(format!("You fed the {name}."))?;
                }
                "fix" => {
                    if c.chance(0.7) {
                        moods[i] = (moods[i] + 2).min(10);
                        c.line(format!("You fixed the {name}. It is delighted!"))?;
                    } else {
                        moods[i] = (moods[i] - 1).max(0);
                        c.line(format!("The repair went badly. The {name} is upset."))?;
                    }
                }
                "watch" => {
                    if c.chance(0.4) {
                        moods[i] = (moods[i] + 1).min(10);
                        c.line(format!("The {name} noticed your attention. Mood +1."))?;
                    } else {
                        c.line(format!("You just watched the {name}."))?;
                    }
                }
                _ => c.line("Unknown action.")?,
            }
        }
        for i in 0..names.len() {
            if c.chance(0.25) {
                moods[i] = (moods[i] - 1).max(0);
                hungers[i] = (hungers[i] + 1).min(5);
            }
        }
        c.say("")?;
    }
    c.clear()?;
    c.line("How the caretaking went:")?;
    for (i, name) in names.iter().enumerate() {
        c.line(format!("{name}: mood {}/10, hunger {}", moods[i], hungers[i]))?;
    }
    c.pause()
}

pub fn living_world(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The World Came Alive ===")?;
    let steps = c.prompt_int("How many steps to walk? (default 10): ", 1..)?.unwrap_or(10);
    let items = ["chair", "lantern", "stone", "tree", "clock", "book", "ball", "window"];
    let mut mood: i64 = 5;
    for step in 1..=steps {
        c.clear()?;
        let item = *c.pick(&items).unwrap_or(&items[0]);
        c.line(format!("Step {step}/{steps}. On the path you meet: a {item}"))?;
        let action = c.prompt_line("Action: talk / ignore / touch (t/i/c): ")?.to_lowercase();
        match action.as_str() {
            "t" | "talk" => {
                if c.chance(0.7) {
                    mood = (mood + 1).min(10);
                    c.say(format!("The {item} answered! Mood +1."))?;
                } else {
                    mood = (mood - 1).max(0);
                    c.say(format!("The {item} says nothing. Mood -1."))?;
                }
            }
            "c" | "touch" => {
                if c.chance(0.3) {
                    mood = (mood - 2).max(0);
                    c.say(format!("The {item} stung you! -2."))?;
                } else {
                    c.say(format!("The {item} shifted - nothing more."))?;
                }
            }
            _ => c.say("You walked past.")?,
        }
    }
    c.line(format!("The walk is over. Mood: {mood}"))?;
    c.pause()
}

pub fn planetarium(c: &mut Console) -> Result<(), GameError>
{
    const FACTS: [(&str, &str); 8] = [
        ("Mercury", "closest to the Sun"),
        ("Venus", "hottest planet"),
        ("Earth", "has life"),
        ("Mars", "red planet"),
        ("Jupiter", "largest planet"),
        ("Saturn", "has rings"),
        ("Uranus", "tilted axis"),
        ("Neptune", "far and blue"),
    ];

    c.clear()?;
    c.line("=== Planetarium ===")?;
    for (planet, fact) in FACTS {
        c.line(format!("{planet}: {fact}"))?;
    }
    let &(planet, fact) = c.pick(&FACTS).unwrap_or(&FACTS[0]);
    let answer = c.prompt_line(&format!("Question: which planet is \"{fact}\"? "))?;
    if answer.eq_ignore_ascii_case(planet) {
        c.line("Right!")?;
    } else {
        c.line(format!("Wrong. The answer is {planet}"))?;
    }
    c.pause()
}

pub fn living_planets(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== The Living Planets ===")?;
    let mut moods: Vec<i64> = PLANETS.iter().map(|_| c.roll(0..=5i64)).collect();
    let turns = c.prompt_int("Rounds of visits (default 6): ", 1..)?.unwrap_or(6);
    for _ in 0..turns {
        c.clear()?;
        let i = c.roll(0..PLANETS.len());
        c.line(format!("{} [{}/10] says: \"...\"", PLANETS[i], moods[i]))?;
        let action = c.prompt_line("Listen / Ignore / Sing (l/i/s): ")?.to_lowercase();
        match action.as_str() {
            "l" => {
                moods[i] = (moods[i] + 2).min(10);
                c.say(format!("{} is glad.", PLANETS[i]))?;
            }
            "s" => {
                moods[i] = (moods[i] + 1).min(10);
                c.say("The music went over well.")?;
            }
            _ => {
                moods[i] = (moods[i] - 1).max(0);
                c.say("Offense taken.")?;
            }
        }
    }
    c.line("Final moods:")?;
    for (planet, mood) in PLANETS.iter().zip(&moods) {
        c.line(format!("{planet}: {mood}"))?;
    }
    c.pause()
}

pub fn stars(c: &mut Console) -> Result<(), GameError>
{
    const CONSTELLATIONS: [(&str, [&str; 3]); 3] = [
        ("Orion", ["Betelgeuse", "Rigel", "Bellatrix"]),
        ("Ursa Major", ["Dubhe", "Merak", "Phecda"]),
        ("Lyra", ["Vega", "Sheliak", "Sulafat"]),
    ];

    c.clear()?;
    c.line("=== Stars ===")?;
    let &(name, members) = c.pick(&CONSTELLATIONS).unwrap_or(&CONSTELLATIONS[0]);
    c.line(format!("Name one star from the constellation: {name}"))?;
    let answer = c.prompt_line("Enter a star's name: ")?;
    if members.iter().any(|star| star.eq_ignore_ascii_case(&answer)) {
        c.line("Correct!")?;
    } else {
        c.line(format!("Wrong. Options were: {}", members.join(", ")))?;
    }
    c.pause()
}

pub fn shine(c: &mut Console) -> Result<(), GameError>
{
    const TARGET: i64 = 5;

    c.clear()?;
    c.line("=== Shine ===")?;
    let gems = c.prompt_int("How many gems? (default 3): ", 1..)?.unwrap_or(3);
    let mut polish = vec![0i64; gems as usize];
    while polish.iter().max().copied().unwrap_or(0) < TARGET {
        c.clear()?;
        c.line(format!("Gem polish: {polish:?}"))?;
        let picked =
            c.prompt_int(&format!("Which gem to polish (0..{}) (Enter to quit): ", gems - 1),
                0..gems)?;
        let Some(i) = picked else {
            break;
        };
        polish[i as usize] += 1;
        c.say("Polishing...")?;
    }
    c.line(format!("Final shine: {polish:?}"))?;
    c.pause()
}

pub fn talk_planets(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Talk to the Planets ===")?;
    for _ in 0..4 {
        let planet = *c.pick(&PLANETS).unwrap_or(&PLANETS[0]);
        let words = *c
            .pick(&["Help me", "I am lonely", "Thank you", "I am fine"])
            .unwrap_or(&"Thank you");
        c.line(format!("{planet} says: {words}"))?;
        c.prompt_line("Answer (Enter): ")?;
    }
    c.pause()
}

pub fn spirits_of_months(c: &mut Console) -> Result<(), GameError>
{
    const MONTHS: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];

    c.clear()?;
    c.line("=== Spirits of the Months ===")?;
    c.line("You summon the spirit of a month...")?;
    let month = *c.pick(&MONTHS).unwrap_or(&MONTHS[0]);
    let prophecy = *c
        .pick(&["a scorching summer", "a bitter winter", "a rich harvest", "a storm"])
        .unwrap_or(&"a storm");
    c.line(format!("The spirit of {month} delivers a prophecy: {prophecy}"))?;
    c.pause()
}

pub fn spirits_of_seasons(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Spirits of the Seasons ===")?;
    for season in ["spring", "summer", "autumn", "winter"] {
        let state =
            *c.pick(&["triumphs", "sleeps", "weeps", "sings"]).unwrap_or(&"sleeps");
        c.line(format!("{season} -> {state}"))?;
    }
    c.pause()
}

pub fn spirits_of_weekdays(c: &mut Console) -> Result<(), GameError>
{
    const DAYS: [&str; 7] =
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

    c.clear()?;
    c.line("=== Spirits of the Weekdays ===")?;
    for day in DAYS {
        let temper = *c
            .pick(&["energy", "calm", "longing", "cheer", "gloom", "joy", "drowsiness"])
            .unwrap_or(&"calm");
        c.line(format!("{day} - {temper}"))?;
    }
    c.pause()
}

pub fn oddities(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Oddities ===")?;
    for _ in 0..5 {
        let event = *c
            .pick(&[
                "the mirror shows someone else",
                "the clock runs backwards",
                "the tree whispers",
                "the shadow smiles",
            ])
            .unwrap_or(&"the shadow smiles");
        c.line(format!("Oddity: {event}"))?;
        c.prompt_line("Press Enter to continue...")?;
    }
    c.pause()
}

pub fn school(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== School ===")?;
    let mut energy: i64 = 10;
    let mut knowledge: i64 = 0;
    let days = c.prompt_int("Days of school (default 5): ", 1..)?.unwrap_or(5);
    for day in 1..=days {
        c.clear()?;
        c.line(format!("Day {day}/{days}. Energy: {energy}. Knowledge: {knowledge}"))?;
        let action = c.prompt_line("Study / Skip / Sleep (study/skip/sleep): ")?.to_lowercase();
        match action.as_str() {
            "study" => {
                energy -= 2;
                knowledge += c.roll(1..=4i64);
                c.say("You studied.")?;
            }
            "sleep" => {
                energy = (energy + 3).min(10);
                c.say("You slept.")?;
            }
            _ => {
                energy -= 1;
                c.say("You played hooky.")?;
            }
        }
        if energy <= 0 {
            c.line("You collapsed from exhaustion and missed the exam.")?;
            return c.pause();
        }
    }
    c.line(format!("Exam time! Knowledge: {knowledge}"))?;
    if knowledge >= 8 {
        c.line("You passed the exam!")?;
    } else {
        c.line("A fail - more studying needed.")?;
    }
    c.pause()
}

pub fn virus_simulator(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Computer Virus Simulator ===")?;
    let nodes = c.prompt_int("Computers on the network (default 10): ", 3..)?.unwrap_or(10);
    let mut infected: HashSet<i64> = HashSet::new();
    infected.insert(c.roll(0..nodes));
    let mut patched: HashSet<i64> = HashSet::new();
    let rounds = c.prompt_int("Rounds of spread (default 8): ", 1..)?.unwrap_or(8);
    for round in 1..=rounds {
        c.clear()?;
        c.line(format!("Round {round}/{rounds}"))?;
        let mut sick: Vec<i64> = infected.iter().copied().collect();
        sick.sort_unstable();
        c.line(format!("Infected: {sick:?}"))?;
        let action =
            c.prompt_line("Patch one machine or watch (patch <id> / skip): ")?.to_lowercase();
        if let Some(rest) = action.strip_prefix("patch") {
            match rest.trim().parse::<i64>() {
                Ok(id) if (0..nodes).contains(&id) => {
                    patched.insert(id);
                    infected.remove(&id);
                    c.line("Machine patched.")?;
                }
                Ok(_) => c.line("Bad ID.")?,
                Err(_) => c.line("Bad command.")?,
            }
        }
        let mut fresh: HashSet<i64> = HashSet::new();
        for _ in infected.iter() {
            for _ in 0..2 {
                let target = c.roll(0..nodes);
                if !patched.contains(&target) && c.chance(0.4) {
                    fresh.insert(target);
                }
            }
        }
        infected.extend(fresh);
        if infected.len() as i64 == nodes {
            c.line("The virus owns the whole network.")?;
            return c.pause();
        }
        c.say("")?;
    }
    c.line(format!("Simulation over. Infected: {} of {nodes}", infected.len()))?;
    c.pause()
}

pub fn construction(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Construction Simulator ===")?;
    let mut progress: i64 = 0;
    let mut budget: i64 = 100;
    let mut workers: i64 = 5;
    let days = c.prompt_int("Days to run the site? (default 10): ", 1..)?.unwrap_or(10);
    for day in 1..=days {
        c.clear()?;
        c.line(format!(
            "Day {day}/{days}. Progress: {progress}%. Budget: {budget}. Workers: {workers}"
        ))?;
        let action = c.prompt_line("Action: hire / fire / invest / work (h/f/i/w): ")?.to_lowercase();
        match action.as_str() {
            "h" => {
                if budget >= 10 {
                    workers += 1;
                    budget -= 10;
                    c.say("Hired a worker.")?;
                } else {
                    c.say("Not enough budget.")?;
                }
            }
            "f" => {
                if workers > 1 {
                    workers -= 1;
                    c.say("Let a worker go.")?;
                } else {
                    c.say("Already at the minimum crew.")?;
                }
            }
            "i" => {
                let invested = budget.min(20);
                budget -= invested;
                progress += invested / 2;
                c.say(format!("Invested {invested}"))?;
            }
            _ => {
                let gained = workers * c.roll(1..=3i64);
                progress += gained;
                budget += workers * c.roll(0..=2i64);
                c.say(format!("The work moved forward by {gained}"))?;
            }
        }
        progress = progress.min(100);
        if progress >= 100 {
            c.line("The build is finished!")?;
            return c.pause();
        }
    }
    c.line(format!("Out of time. Progress: {progress}"))?;
    c.pause()
}
