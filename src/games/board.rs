//! Grid and track games: minesweeper, snakes-and-ladders, snake, tanks
//! and the other games played on a small board drawn in text.

use crate::console::{Console, GameError};
use std::collections::HashSet;

const LADDERS: [(i64, i64); 11] = [
    (2, 38),
    (7, 14),
    (8, 31),
    (15, 26),
    (28, 84),
    (21, 42),
    (36, 44),
    (51, 67),
    (71, 91),
    (78, 98),
    (87, 94),
];

const SNAKES: [(i64, i64); 10] = [
    (16, 6),
    (46, 25),
    (49, 11),
    (62, 19),
    (64, 60),
    (74, 53),
    (89, 68),
    (92, 88),
    (95, 75),
    (99, 80),
];

struct Minefield
{
    rows: usize,
    cols: usize,
    mines: HashSet<(usize, usize)>,
    counts: Vec<Vec<u8>>,
    revealed: Vec<Vec<bool>>,
    flagged: Vec<Vec<bool>>,
}

impl Minefield
{
    fn generate(c: &mut Console, rows: usize, cols: usize, mine_count: usize) -> Self
    {
        let mut mines = HashSet::new();
        while mines.len() < mine_count {
            mines.insert((c.roll(0..rows), c.roll(0..cols)));
        }
        let mut counts = vec![vec![0u8; cols]; rows];
        for r in 0..rows {
            for col in 0..cols {
                if mines.contains(&(r, col)) {
                    continue;
                }
                counts[r][col] = neighbors(r, col, rows, cols)
                    .filter(|cell| mines.contains(cell))
                    .count() as u8;
            }
        }
        Self {
            rows,
            cols,
            mines,
            counts,
            revealed: vec![vec![false; cols]; rows],
            flagged: vec![vec![false; cols]; rows],
        }
    }

    fn render(&self, c: &mut Console) -> Result<(), GameError>
    {
        c.clear()?;
        let header: String = (0..self.cols).map(|col| format!("{col:2}")).collect::<Vec<_>>().join(" ");
        c.line(format!("   {header}"))?;
        for r in 0..self.rows {
            let mut line = format!("{r:2} ");
            for col in 0..self.cols {
                let cell = if self.flagged[r][col] {
                    " F".to_string()
                } else if !self.revealed[r][col] {
                    " #".to_string()
                } else if self.mines.contains(&(r, col)) {
                    " *".to_string()
                } else if self.counts[r][col] == 0 {
                    " .".to_string()
                } else {
                    format!(" {}", self.counts[r][col])
                };
                line.push_str(&cell);
            }
            c.line(line)?;
        }
        Ok(())
    }

    /// Open a safe cell, flood-filling through zero-count neighbours.
    /// Returns how many cells got revealed.
    fn reveal(&mut self, row: usize, col: usize) -> usize
    {
        let mut stack = vec![(row, col)];
        let mut opened = 0;
        while let Some((r, cl)) = stack.pop() {
            if self.revealed[r][cl] {
                continue;
            }
            self.revealed[r][cl] = true;
            opened += 1;
            if self.counts[r][cl] == 0 {
                stack.extend(
                    neighbors(r, cl, self.rows, self.cols).filter(|&(nr, nc)| !self.revealed[nr][nc]),
                );
            }
        }
        opened
    }
}

fn neighbors(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)>
{
    let (row, col) = (row as i64, col as i64);
    (-1..=1)
        .flat_map(move |dr| (-1..=1).map(move |dc| (row + dr, col + dc)))
        .filter(move |&(nr, nc)| {
            (nr, nc) != (row, col) && nr >= 0 && nc >= 0 && nr < rows as i64 && nc < cols as i64
        })
        .map(|(nr, nc)| (nr as usize, nc as usize))
}

pub fn minesweeper(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Minesweeper ===")?;
    let rows = c.prompt_int("Rows (default 8): ", 2..)?.unwrap_or(8) as usize;
    let cols = c.prompt_int("Columns (default 8): ", 2..)?.unwrap_or(8) as usize;
    let max_mines = rows * cols - 1;
    let mine_count = c
        .prompt_int("Mines (default 10): ", 1..=max_mines as i64)?
        .map(|v| v as usize)
        .unwrap_or_else(|| 10.min(max_mines));

    let mut field = Minefield::generate(c, rows, cols, mine_count);
    let mut remaining = rows * cols - mine_count;
    loop {
        field.render(c)?;
        c.line("\nCommands: r row col - reveal; f row col - toggle flag; q - quit")?;
        let cmd = c.prompt_line("> ")?.to_lowercase();
        if cmd.is_empty() || cmd == "q" {
            c.line("Leaving the minefield.")?;
            break;
        }
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        if parts.len() < 3 {
            c.say("Bad command.")?;
            continue;
        }
        let (Ok(row), Ok(col)) = (parts[1].parse::<usize>(), parts[2].parse::<usize>()) else {
            c.say("Bad coordinates.")?;
            continue;
        };
        if row >= rows || col >= cols {
            c.say("Coordinates are off the board.")?;
            continue;
        }
        match parts[0] {
            "f" => field.flagged[row][col] = !field.flagged[row][col],
            "r" => {
                if field.flagged[row][col] {
                    c.say("Remove the flag first.")?;
                    continue;
                }
                if field.revealed[row][col] {
                    c.say("Already open.")?;
                    continue;
                }
                if field.mines.contains(&(row, col)) {
                    let mines: Vec<(usize, usize)> = field.mines.iter().copied().collect();
                    for (r, cl) in mines {
                        field.revealed[r][cl] = true;
                    }
                    field.render(c)?;
                    c.line("\nBoom! You stepped on a mine. Game over.")?;
                    break;
                }
                remaining -= field.reveal(row, col);
                if remaining == 0 {
                    field.render(c)?;
                    c.line("\nCongratulations! Every safe cell is open. You win!")?;
                    break;
                }
            }
            _ => c.say("Bad command.")?,
        }
    }
    c.pause()
}

fn chute(position: i64) -> Option<(i64, &'static str)>
{
    if let Some(&(_, up)) = LADDERS.iter().find(|&&(from, _)| from == position) {
        return Some((up, "Ladder!"));
    }
    if let Some(&(_, down)) = SNAKES.iter().find(|&&(from, _)| from == position) {
        return Some((down, "Snake!"));
    }
    None
}

pub fn snakes_and_ladders(c: &mut Console) -> Result<(), GameError>
{
    const GOAL: i64 = 100;

    c.clear()?;
    c.line("=== Snakes and Ladders ===")?;
    let count = c.prompt_int("Number of players (1-4): ", 1..=4)?.unwrap_or(2);
    let mut names = Vec::new();
    for i in 1..=count {
        let name = c.prompt_line(&format!("Player {i} name (Enter for \"Player{i}\"): "))?;
        names.push(if name.is_empty() { format!("Player{i}") } else { name });
    }
    while names.len() < 2 {
        names.push(format!("CPU{}", names.len() + 1));
    }
    let mut positions = vec![0i64; names.len()];
    let mut turn = 0usize;
    loop {
        c.clear()?;
        c.line("Positions:")?;
        for (name, pos) in names.iter().zip(&positions) {
            c.line(format!("{name}: {pos}"))?;
        }
        let current = turn % names.len();
        c.line(format!("\n{}'s turn", names[current]))?;
        let rolled = if names[current].starts_with("CPU") {
            let rolled = c.roll(1..=6i64);
            c.say(format!("CPU rolled {rolled}"))?;
            rolled
        } else {
            c.prompt_line("Press Enter to roll the die...")?;
            let rolled = c.roll(1..=6i64);
            c.line(format!("You rolled {rolled}"))?;
            rolled
        };
        positions[current] += rolled;
        if positions[current] > GOAL {
            positions[current] = GOAL - (positions[current] - GOAL);
        }
        if let Some((landing, callout)) = chute(positions[current]) {
            c.line(format!("{callout} {} -> {landing}", positions[current]))?;
            positions[current] = landing;
        }
        if positions[current] == GOAL {
            c.line(format!("\n{} reached square {GOAL} and wins! Congratulations!", names[current]))?;
            break;
        }
        turn += 1;
        c.say("")?;
    }
    c.pause()
}

pub fn snake(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Snake ===")?;
    let size = c.prompt_int("Board size (default 10): ", 5..)?.unwrap_or(10);
    let mut body: Vec<(i64, i64)> = vec![(size / 2, size / 2)];
    let mut direction = (0i64, 1i64);
    let mut food = (c.roll(0..size), c.roll(0..size));
    let mut score = 0;
    c.line("Controls: w/a/s/d, one step per turn. Eat as much food as you can.")?;
    c.pause()?;
    loop {
        c.clear()?;
        for r in 0..size {
            let row: Vec<&str> = (0..size)
                .map(|cl| {
                    if body.contains(&(r, cl)) {
                        "S"
                    } else if food == (r, cl) {
                        "F"
                    } else {
                        "."
                    }
                })
                .collect();
            c.line(row.join(" "))?;
        }
        c.line(format!("Score: {score}"))?;
        let cmd = c.prompt_line("Move (w/a/s/d), q to quit: ")?.to_lowercase();
        match cmd.as_str() {
            "" | "q" => break,
            "w" => direction = (-1, 0),
            "s" => direction = (1, 0),
            "a" => direction = (0, -1),
            "d" => direction = (0, 1),
            _ => {}
        }
        let head = body[0];
        let next = (head.0 + direction.0, head.1 + direction.1);
        let off_board = next.0 < 0 || next.1 < 0 || next.0 >= size || next.1 >= size;
        if off_board || body.contains(&next) {
            c.clear()?;
            c.line(format!("You crashed. Game over. Score: {score}"))?;
            break;
        }
        body.insert(0, next);
        if next == food {
            score += 1;
            for _ in 0..100 {
                let spot = (c.roll(0..size), c.roll(0..size));
                if !body.contains(&spot) {
                    food = spot;
                    break;
                }
            }
        } else {
            body.pop();
        }
    }
    c.pause()
}

pub fn tanks(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Tanks ===")?;
    let size = c.prompt_int("Board size (default 7): ", 5..)?.unwrap_or(7);
    let mut player = (0i64, 0i64);
    let mut enemy = (size - 1, size - 1);
    let mut player_hp = 3;
    let mut enemy_hp = 3;
    let in_range = |a: (i64, i64), b: (i64, i64)| {
        (a.0 == b.0 && (a.1 - b.1).abs() <= 2) || (a.1 == b.1 && (a.0 - b.0).abs() <= 2)
    };
    while player_hp > 0 && enemy_hp > 0 {
        c.clear()?;
        for r in 0..size {
            let row: Vec<&str> = (0..size)
                .map(|cl| {
                    if (r, cl) == player {
                        "P"
                    } else if (r, cl) == enemy {
                        "E"
                    } else {
                        "."
                    }
                })
                .collect();
            c.line(row.join(" "))?;
        }
        c.line(format!("Your HP: {player_hp}  Enemy HP: {enemy_hp}"))?;
        let cmd = c.prompt_line("move (w/a/s/d) or fire (f): ")?.to_lowercase();
        match cmd.as_str() {
            "w" if player.0 > 0 => player.0 -= 1,
            "s" if player.0 < size - 1 => player.0 += 1,
            "a" if player.1 > 0 => player.1 -= 1,
            "d" if player.1 < size - 1 => player.1 += 1,
            "f" => {
                if in_range(player, enemy) {
                    enemy_hp -= 1;
                    c.line("Hit!")?;
                } else {
                    c.line("Miss.")?;
                }
            }
            _ => {}
        }
        if c.chance(0.7) {
            if enemy.0 < player.0 {
                enemy.0 += 1;
            } else if enemy.0 > player.0 {
                enemy.0 -= 1;
            }
            if enemy.1 < player.1 {
                enemy.1 += 1;
            } else if enemy.1 > player.1 {
                enemy.1 -= 1;
            }
        } else if c.chance(0.5) && (enemy.0 == player.0 || enemy.1 == player.1) && in_range(enemy, player)
        {
            player_hp -= 1;
            c.say("The enemy tank hit you!")?;
        }
    }
    if player_hp > 0 {
        c.line("You won the tank duel!")?;
    } else {
        c.line("Your tank is destroyed.")?;
    }
    c.pause()
}

pub fn death_columns(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Death Columns ===")?;
    let cols = c.prompt_int("Number of columns (default 5): ", 2..)?.unwrap_or(5) as usize;
    let limit = c.prompt_int("Height that ends the game (default 6): ", 3..)?.unwrap_or(6);
    let mut heights = vec![0i64; cols];
    let mut turn = 0;
    loop {
        turn += 1;
        c.clear()?;
        c.line(format!("Turn {turn}"))?;
        c.line(format!("Heights: {heights:?}"))?;
        for height in heights.iter_mut() {
            if c.chance(0.5) {
                *height += 1;
            }
        }
        c.line(format!("After the drop: {heights:?}"))?;
        if heights.iter().any(|&h| h >= limit) {
            c.line("A column reached the limit. Game over.")?;
            break;
        }
        let removed =
            c.prompt_int(&format!("Which column to lower 0..{}? (Enter to skip): ", cols - 1),
                0..=cols as i64 - 1)?;
        match removed {
            Some(i) if heights[i as usize] > 0 => {
                heights[i as usize] -= 1;
                c.say(format!("Lowered column {i}"))?;
            }
            Some(_) => c.say("That column is already empty.")?,
            None => c.say("Skipped.")?,
        }
    }
    c.pause()
}

pub fn glass_bridge(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Glass Bridge ===")?;
    let length = c.prompt_int("Bridge length (default 12): ", 4..)?.unwrap_or(12) as usize;
    let safe: Vec<char> =
        (0..length).map(|_| if c.chance(0.5) { 'L' } else { 'R' }).collect();
    let mut pos = 0;
    c.line("Each step, pick L or R. The wrong tile shatters.")?;
    c.pause()?;
    while pos < length {
        c.clear()?;
        c.line(format!("Step {}/{length}", pos + 1))?;
        let choice = c.prompt_line("Choose (L/R): ")?.to_uppercase();
        if choice.is_empty() {
            c.line("You stepped off the bridge queue.")?;
            break;
        }
        let Some(tile) = choice.chars().next().filter(|ch| matches!(ch, 'L' | 'R')) else {
            c.say("Bad input.")?;
            continue;
        };
        if tile == safe[pos] {
            c.line("Solid! Keep going.")?;
            pos += 1;
        } else {
            c.line("Crack! You fell through the glass.")?;
            return c.pause();
        }
    }
    if pos >= length {
        c.line("You crossed the bridge. Hooray!")?;
    }
    c.pause()
}

pub fn sugar_honeycomb(c: &mut Console) -> Result<(), GameError>
{
    const TYPES: [char; 4] = ['*', '#', '@', '%'];

    c.clear()?;
    c.line("=== Sugar Honeycomb ===")?;
    let rows = c.prompt_int("Rows (default 5): ", 3..)?.unwrap_or(5) as usize;
    let cols = c.prompt_int("Columns (default 6): ", 3..)?.unwrap_or(6) as usize;
    let mut grid: Vec<Vec<char>> = (0..rows)
        .map(|_| (0..cols).map(|_| *c.pick(&TYPES).unwrap_or(&'*')).collect())
        .collect();
    let mut score = 0;
    c.pause()?;
    loop {
        c.clear()?;
        for row in &grid {
            let text: String =
                row.iter().map(|ch| ch.to_string()).collect::<Vec<_>>().join(" ");
            c.line(text)?;
        }
        c.line(format!("Score: {score}"))?;
        c.line("Swap two cells to line up a triple.")?;
        let cmd = c.prompt_line("Format: r1 c1 r2 c2 (Enter to quit): ")?;
        if cmd.is_empty() {
            break;
        }
        let coords: Vec<usize> = cmd.split_whitespace().filter_map(|p| p.parse().ok()).collect();
        let [r1, c1, r2, c2] = coords[..] else {
            c.say("Bad input.")?;
            continue;
        };
        if r1 >= rows || r2 >= rows || c1 >= cols || c2 >= cols {
            c.say("Coordinates out of range. They start at 0.")?;
            continue;
        }
        let held = grid[r1][c1];
        grid[r1][c1] = grid[r2][c2];
        grid[r2][c2] = held;
        let cleared = clear_triples(&mut grid);
        if cleared == 0 {
            c.say("No triple - swap undone.")?;
            let held = grid[r1][c1];
            grid[r1][c1] = grid[r2][c2];
            grid[r2][c2] = held;
        } else {
            score += cleared;
            c.say(format!("Cleared {cleared}!"))?;
            refill(c, &mut grid, &TYPES);
        }
    }
    c.line(format!("Game over. Score: {score}"))?;
    c.pause()
}

/// Mark every horizontal/vertical run of 3+ and hollow the cells out,
/// returning how many were cleared. Cleared cells become spaces until
/// `refill` drops the survivors down.
fn clear_triples(grid: &mut [Vec<char>]) -> usize
{
    let rows = grid.len();
    let cols = grid[0].len();
    let mut doomed = vec![vec![false; cols]; rows];
    for r in 0..rows {
        mark_runs((0..cols).map(|cl| grid[r][cl]), |k| doomed[r][k] = true);
    }
    for cl in 0..cols {
        mark_runs((0..rows).map(|r| grid[r][cl]), |k| doomed[k][cl] = true);
    }
    let mut cleared = 0;
    for r in 0..rows {
        for cl in 0..cols {
            if doomed[r][cl] {
                grid[r][cl] = ' ';
                cleared += 1;
            }
        }
    }
    cleared
}

fn mark_runs(line: impl Iterator<Item = char>, mut mark: impl FnMut(usize))
{
    let cells: Vec<char> = line.collect();
    let mut start = 0;
    while start < cells.len() {
        let mut end = start;
        while end < cells.len() && cells[end] == cells[start] {
            end += 1;
        }
        if end - start >= 3 {
            for k in start..end {
                mark(k);
            }
        }
        start = end;
    }
}

fn refill(c: &mut Console, grid: &mut [Vec<char>], types: &[char])
{
    let rows = grid.len();
    let cols = grid[0].len();
    for cl in 0..cols {
        let mut kept: Vec<char> = (0..rows).map(|r| grid[r][cl]).filter(|&ch| ch != ' ').collect();
        for r in (0..rows).rev() {
            grid[r][cl] = kept.pop().unwrap_or_else(|| *c.pick(types).unwrap_or(&'*'));
        }
    }
}

pub fn red_green_light(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Red Light, Green Light ===")?;
    let distance = c.prompt_int("Distance to the finish (default 15): ", 5..)?.unwrap_or(15);
    let mut pos = 0;
    let mut rounds = 0;
    c.line("Walk on green (w); move on red and you are caught.")?;
    c.pause()?;
    while pos < distance {
        rounds += 1;
        let green = c.chance(0.6);
        let state = if green { "GREEN" } else { "RED" };
        c.clear()?;
        c.line(format!("Round {rounds}. Light: {state}. Position: {pos}/{distance}"))?;
        let cmd = c.prompt_line("Input (w - step, s - stand, q - quit): ")?.to_lowercase();
        if cmd.is_empty() || cmd == "q" {
            break;
        }
        if cmd == "w" {
            if green {
                pos += 1;
                c.say("You stepped forward.")?;
            } else {
                c.line("Oops! Moving on red - you were spotted. You lose.")?;
                return c.pause();
            }
        } else {
            c.say("Standing still.")?;
        }
    }
    if pos >= distance {
        c.line("You made it to the finish! Victory.")?;
    }
    c.pause()
}

pub fn racing(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Racing ===")?;
    let length = c.prompt_int("Track length (default 50): ", 20..)?.unwrap_or(50);
    let max_turns = c.prompt_int("Max turns (default 200): ", 10..)?.unwrap_or(200);
    let mut you: i64 = 0;
    let mut rival: i64 = -3;
    let mut your_speed: i64 = 0;
    let mut rival_speed: i64 = 0;
    c.line("You control your speed: a - accelerate, d - brake, n - coast.")?;
    c.pause()?;
    let mut turn = 0;
    let mut decided = false;
    while turn < max_turns {
        turn += 1;
        c.clear()?;
        c.line(format!("Turn {turn}"))?;
        c.line(format!("Positions: You: {you}  Rival: {rival}"))?;
        let action = c.prompt_line("Your move (a/d/n, q to quit): ")?.to_lowercase();
        match action.as_str() {
            "" | "q" => break,
            "a" => your_speed += 1,
            "d" => your_speed = (your_speed - 1).max(0),
            _ => {}
        }
        if c.chance(0.6) {
            rival_speed += c.roll(0..=1i64);
        } else {
            rival_speed = (rival_speed - 1).max(0);
        }
        you += advance(c, your_speed);
        rival += advance(c, rival_speed);
        if you >= length {
            c.clear()?;
            c.line("You crossed the line first! Victory!")?;
            decided = true;
            break;
        }
        if rival >= length {
            c.clear()?;
            c.line("The rival finished first. You lose.")?;
            decided = true;
            break;
        }
        c.say("")?;
    }
    if !decided && turn >= max_turns {
        c.line("Out of turns - a draw.")?;
    }
    c.pause()
}

/// Distance covered this turn: current speed, a little jitter, and a slip
/// risk once the car is going too fast.
fn advance(c: &mut Console, speed: i64) -> i64
{
    let slip = speed > 5 && c.chance(0.2);
    speed + c.roll(0..=1i64) - if slip { 1 } else { 0 }
}

pub fn rails(c: &mut Console) -> Result<(), GameError>
{
    c.clear()?;
    c.line("=== Rails ===")?;
    c.line("A rail section with switches: route the train to the target.")?;
    let n = c.prompt_int("Section length (default 8): ", 4..)?.unwrap_or(8);
    let mut switches: Vec<u8> = (0..n).map(|_| if c.chance(0.5) { 1 } else { 0 }).collect();
    let target = c.roll(0..n);
    c.line(format!("Positions are numbered 0..{}", n - 1))?;
    c.pause()?;
    loop {
        c.clear()?;
        let shown: Vec<String> = switches.iter().map(|s| s.to_string()).collect();
        c.line(format!("Switches: {}", shown.join(" ")))?;
        c.line(format!("Start at 0, target at {target}"))?;
        let cmd = c
            .prompt_line("Commands: t i - toggle switch i; r - run the train; q - quit\n> ")?
            .to_lowercase();
        if cmd.is_empty() || cmd == "q" {
            break;
        }
        if cmd == "r" {
            let mut pos: i64 = 0;
            let mut visited = vec![pos];
            let mut steps = 0;
            while pos >= 0 && pos < n && steps < 100 {
                pos += if switches[pos as usize] == 0 { 1 } else { -1 };
                visited.push(pos);
                steps += 1;
                if pos == target {
                    break;
                }
            }
            if pos == target {
                c.line(format!("The train arrived! Route: {visited:?}"))?;
            } else {
                c.line(format!("The train ran off or looped. Route: {visited:?}"))?;
            }
            c.pause()?;
            continue;
        }
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        if parts.len() == 2 && parts[0] == "t" {
            match parts[1].parse::<usize>() {
                Ok(i) if i < n as usize => {
                    switches[i] = 1 - switches[i];
                    c.say("Toggled.")?;
                }
                Ok(_) => c.say("Index out of range.")?,
                Err(_) => c.say("Bad index.")?,
            }
            continue;
        }
        c.say("Bad command.")?;
    }
    c.pause()
}
