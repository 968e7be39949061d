//! Arithmetic and general-knowledge quizzes, solo and against simulated
//! players.

use crate::console::{Console, GameError, roster};
use std::time::Instant;

const DEFAULT_ROUNDS: i64 = 5;
const DEFAULT_MAX_OPERAND: i64 = 12;

const KNOWLEDGE: [(&str, &str); 5] = [
    ("Capital of France?", "paris"),
    ("2+2*2 = ?", "6"),
    ("Which gas do we need to breathe?", "oxygen"),
    ("Days in February outside a leap year?", "28"),
    ("Who wrote 'Eugene Onegin'?", "pushkin"),
];

const KNOWLEDGE_HARD: [(&str, &str); 2] = [
    ("Who discovered the law of gravitation?", "newton"),
    ("sin(90 degrees) = ?", "1"),
];

fn apply(op: char, a: i64, b: i64) -> i64
{
    match op {
        '+' => a + b,
        '-' => a - b,
        _ => a * b,
    }
}

pub fn math_quiz(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Math Quiz ===")?;
    let rounds = c.prompt_int("How many questions? (default 5): ", 1..)?.unwrap_or(DEFAULT_ROUNDS);
    let max_val = c
        .prompt_int("Largest operand (default 12): ", 2..)?
        .unwrap_or(DEFAULT_MAX_OPERAND);
    let mut score = 0;
    for i in 1..=rounds {
        let a = c.roll(1..=max_val);
        let b = c.roll(1..=max_val);
        let op = *c.pick(&['+', '-', '*']).unwrap_or(&'+');
        let correct = apply(op, a, b);
        let answer = c.prompt_int(&format!("Question {i}/{rounds}: {a} {op} {b} = "), ..)?;
        match answer {
            None => c.line(format!("Skipped. The answer was {correct}."))?,
            Some(value) if value == correct => {
                c.line("Correct!")?;
                score += 1;
            }
            Some(_) => c.line(format!("Wrong. The answer was {correct}."))?,
        }
    }
    c.line(format!("\nYou scored {score}/{rounds}"))?;
    c.pause()
}

pub fn hard_math_quiz(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Hard Math Quiz ===")?;
    let rounds = c.prompt_int("Questions (default 7): ", 1..)?.unwrap_or(7);
    let mut score = 0;
    for _ in 0..rounds {
        let a = c.roll(2..=50i64);
        let b = c.roll(2..=20i64);
        match *c.pick(&['+', '-', '*', '/', '^']).unwrap_or(&'+') {
            '^' => {
                let exponent = c.roll(2..=3u32);
                let correct = a.pow(exponent);
                let answer =
                    c.prompt_int(&format!("{a} ^ ? = {correct} (find the exponent): "), ..)?;
                if answer == Some(exponent as i64) {
                    score += 1;
                }
            }
            '/' => {
                let correct = a as f64 / b as f64;
                let answer =
                    c.prompt_line(&format!("{a} / {b} = ? (up to 3 decimal places): "))?;
                if let Ok(value) = answer.parse::<f64>() {
                    if (value - correct).abs() < 1e-3 {
                        score += 1;
                    }
                }
            }
            op => {
                let correct = apply(op, a, b);
                let answer = c.prompt_int(&format!("{a} {op} {b} = "), ..)?;
                if answer == Some(correct) {
                    score += 1;
                }
            }
        }
        c.say(format!("Current score: {score}"))?;
    }
    c.line(format!("Final score: {score}/{rounds}"))?;
    c.pause()
}

pub fn timed_math_quiz(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Timed Math Quiz ===")?;
    let limit = c.prompt_int("Seconds on the clock (default 20): ", 5..)?.unwrap_or(20);
    let start = Instant::now();
    let mut score = 0;
    while (start.elapsed().as_secs() as i64) < limit {
        let a = c.roll(1..=20i64);
        let b = c.roll(1..=20i64);
        let op = *c.pick(&['+', '-', '*']).unwrap_or(&'+');
        let correct = apply(op, a, b);
        let Some(answer) = c.prompt_int(&format!("{a} {op} {b} = "), ..)? else {
            break;
        };
        if answer == correct {
            score += 1;
        }
    }
    c.line(format!("Time is up (or you stopped). Points: {score}"))?;
    c.pause()
}

pub fn very_hard_math_quiz(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Very Hard Math Quiz ===")?;
    let rounds = c.prompt_int("Questions (default 5): ", 1..)?.unwrap_or(5);
    let mut score = 0;
    for _ in 0..rounds {
        let a = c.roll(100..=999i64);
        let b = c.roll(10..=99i64);
        let modulus = c.roll(2..=50i64);
        let correct = (a * b) % modulus;
        let answer = c.prompt_int(&format!("({a} * {b}) mod {modulus} = "), ..)?;
        if answer == Some(correct) {
            score += 1;
        }
    }
    c.line(format!("Score: {score}/{rounds}"))?;
    c.pause()
}

pub fn math_quiz_vs_players(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Math Quiz vs Other Players ===")?;
    let players = c.prompt_int("How many players, you included? (default 4): ", 2..)?.unwrap_or(4);
    let names = roster(players);
    let rounds = c.prompt_int("Rounds (default 6): ", 1..)?.unwrap_or(6);
    let mut scores = vec![0i64; names.len()];
    let skills: Vec<f64> = names.iter().map(|_| c.roll(0.3..0.9)).collect();
    for round in 1..=rounds {
        let a = c.roll(1..=50i64);
        let b = c.roll(1..=50i64);
        let correct = a + b;
        c.line(format!("Question {round}: {a} + {b} = ?"))?;
        let answer = c.prompt_int("Your answer: ", ..)?;
        if answer == Some(correct) {
            scores[0] += 1;
        }
        for i in 1..names.len() {
            if c.chance(skills[i]) {
                scores[i] += 1;
            }
        }
    }
    c.line("Standings:")?;
    for (name, score) in names.iter().zip(&scores) {
        c.line(format!("{name}: {score}"))?;
    }
    c.pause()
}

struct QuizSetup
{
    rounds: i64,
    hard: bool,
    timed: bool,
    players: i64,
}

/// One knowledge quiz loop shared by every variant. Simulated players
/// answer probabilistically, worse on the hard deck.
fn knowledge_quiz(c: &mut Console, setup: QuizSetup) -> Result<(), GameError>
{
    const TIME_PER_QUESTION: u64 = 8;

    c.clear()?;
    c.line("=== Quiz ===")?;
    let names = roster(setup.players);
    let mut scores = vec![0i64; names.len()];
    let mut deck: Vec<(&str, &str)> = KNOWLEDGE.to_vec();
    if setup.hard {
        deck.extend(KNOWLEDGE_HARD);
    }
    for _ in 0..setup.rounds {
        let &(question, expected) = c.pick(&deck).unwrap_or(&KNOWLEDGE[0]);
        if setup.timed {
            c.line(format!("Time to answer: {TIME_PER_QUESTION}s"))?;
        }
        c.line(format!("Question: {question}"))?;
        let asked = Instant::now();
        let mut answer = c.prompt_line("Your answer: ")?;
        if setup.timed && asked.elapsed().as_secs() > TIME_PER_QUESTION {
            c.line("Out of time.")?;
            answer.clear();
        }
        if answer.to_lowercase() == expected {
            scores[0] += 1;
        }
        let npc_accuracy = if setup.hard { 0.35 } else { 0.6 };
        for i in 1..names.len() {
            if c.chance(npc_accuracy) {
                scores[i] += 1;
            }
        }
    }
    c.line("Results:")?;
    for (name, score) in names.iter().zip(&scores) {
        c.line(format!("{name}: {score}"))?;
    }
    c.pause()
}

pub fn quiz_easy(c: &mut Console) -> Result<(), GameError>
{
    knowledge_quiz(c, QuizSetup { rounds: 5, hard: false, timed: false, players: 1 })
}

pub fn quiz_hard(c: &mut Console) -> Result<(), GameError>
{
    knowledge_quiz(c, QuizSetup { rounds: 7, hard: true, timed: false, players: 1 })
}

pub fn quiz_timed(c: &mut Console) -> Result<(), GameError>
{
    knowledge_quiz(c, QuizSetup { rounds: 6, hard: false, timed: true, players: 1 })
}

pub fn quiz_very_hard(c: &mut Console) -> Result<(), GameError>
{
    knowledge_quiz(c, QuizSetup { rounds: 8, hard: true, timed: true, players: 1 })
}

pub fn quiz_vs_players(c: &mut Console) -> Result<(), GameError>
{
    let players = c.prompt_int("How many players, you included? (default 4): ", 2..)?.unwrap_or(4);
    knowledge_quiz(c, QuizSetup { rounds: 6, hard: false, timed: false, players })
}

pub fn true_or_false(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== True or False ===")?;
    let mut statements = [
        ("The Earth orbits the Sun", true),
        ("Python is only a snake", false),
        ("Water boils at 100C at sea level", true),
        ("Humans can breathe in outer space without aid", false),
    ];
    c.shuffle(&mut statements);
    let mut score = 0;
    for (statement, truth) in statements {
        let answer = match c.prompt_line(&format!("{statement} (t/f): "))?.to_lowercase().as_str() {
            "t" => Some(true),
            "f" => Some(false),
            _ => None,
        };
        if answer == Some(truth) {
            score += 1;
            c.say("OK")?;
        } else {
            c.say("Wrong")?;
        }
    }
    c.line(format!("Score: {score}/{}", statements.len()))?;
    c.pause()
}

pub fn interpretation(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Interpretation ===")?;
    let prompts = [
        "A cat sits on the roof.",
        "The clock stopped at three.",
        "Rain sounds like music.",
        "The window looks out on the city.",
    ];
    let phrase = *c.pick(&prompts).unwrap_or(&prompts[0]);
    c.line(format!("Phrase to interpret: {phrase}"))?;
    let answer = c.prompt_line("Tell your interpretation: ")?;
    let wordiness = answer.split_whitespace().count() as i64 / 2;
    let score = (wordiness + c.roll(-1..=2i64)).clamp(0, 10);
    c.line(format!("Interpretation rated {score}/10"))?;
    c.pause()
}
