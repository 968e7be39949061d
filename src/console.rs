use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Write};
use std::ops::{Bound, RangeBounds};
use std::time::Duration;

const PACE: Duration = Duration::from_millis(600);

#[derive(Debug, thiserror::Error)]
pub enum GameError
{
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("input stream closed")]
    Interrupted,
}

/// Line-oriented terminal bundle handed to every game: one reader, one
/// writer, one random generator, one pacing delay. Games never touch
/// stdin/stdout or an RNG directly, which is what lets the test suites
/// script them end to end.
pub struct Console<'a>
{
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
    rng: ChaCha8Rng,
    pace: Duration,
    ansi: bool,
}

impl Console<'static>
{
    /// Interactive console over stdin/stdout with real pacing and screen
    /// clearing enabled.
    pub fn stdio(seed: u64) -> Self
    {
        Self {
            input: Box::new(BufReader::new(io::stdin())),
            output: Box::new(io::stdout()),
            rng: ChaCha8Rng::seed_from_u64(seed),
            pace: PACE,
            ansi: true,
        }
    }
}

impl<'a> Console<'a>
{
    /// Console over arbitrary reader/writer. Pacing is zero and screen
    /// clearing writes nothing, so scripted runs stay fast and their
    /// captured output stays free of escape bytes.
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a, seed: u64) -> Self
    {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            rng: ChaCha8Rng::seed_from_u64(seed),
            pace: Duration::ZERO,
            ansi: false,
        }
    }

    pub fn line(&mut self, text: impl Display) -> Result<(), GameError>
    {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Paced print: one line, then a short delay so the text can be read
    /// before the next one lands.
    pub fn say(&mut self, text: impl Display) -> Result<(), GameError>
    {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        if !self.pace.is_zero() {
            std::thread::sleep(self.pace);
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), GameError>
    {
        if self.ansi {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Blocks until the user submits a line; its content is ignored.
    pub fn pause(&mut self) -> Result<(), GameError>
    {
        write!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Free-text prompt. Returns the trimmed line, possibly empty.
    pub fn prompt_line(&mut self, text: &str) -> Result<String, GameError>
    {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let line = self.read_line()?;
        Ok(line.trim().to_string())
    }

    /// Bounded integer prompt. An empty line is `None` (the caller
    /// supplies its default via `unwrap_or`). Anything unparsable or out
    /// of range is reported and re-asked, so the returned value is always
    /// either `None` or inside `bounds`.
    pub fn prompt_int(
        &mut self,
        text: &str,
        bounds: impl RangeBounds<i64>,
    ) -> Result<Option<i64>, GameError>
    {
        let min = match bounds.start_bound() {
            Bound::Included(&v) => Some(v),
            Bound::Excluded(&v) => Some(v + 1),
            Bound::Unbounded => None,
        };
        let max = match bounds.end_bound() {
            Bound::Included(&v) => Some(v),
            Bound::Excluded(&v) => Some(v - 1),
            Bound::Unbounded => None,
        };

        loop {
            write!(self.output, "{text}")?;
            self.output.flush()?;
            let line = self.read_line()?;
            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }
            let value = match line.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    self.line("Enter a whole number.")?;
                    continue;
                }
            };
            let below = min.is_some_and(|lo| value < lo);
            let above = max.is_some_and(|hi| value > hi);
            if below || above {
                match (min, max) {
                    (Some(lo), Some(hi)) => {
                        self.line(format!("Enter a number between {lo} and {hi}."))?
                    }
                    (Some(lo), None) => self.line(format!("Enter a number of at least {lo}."))?,
                    (None, Some(hi)) => self.line(format!("Enter a number of at most {hi}."))?,
                    (None, None) => {}
                }
                continue;
            }
            return Ok(Some(value));
        }
    }

    /// Numbered pick from a list. Prints `text`, then the options from 1,
    /// then asks for a number in range. Returns the 0-based index, or
    /// `None` when the user skipped with an empty line.
    pub fn prompt_choice(
        &mut self,
        text: &str,
        options: &[&str],
    ) -> Result<Option<usize>, GameError>
    {
        self.line(text)?;
        for (i, option) in options.iter().enumerate() {
            self.line(format!("{}. {option}", i + 1))?;
        }
        let picked = self.prompt_int("Pick a number (Enter to skip): ", 1..=options.len() as i64)?;
        Ok(picked.map(|v| v as usize - 1))
    }

    pub fn roll<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    pub fn chance(&mut self, probability: f64) -> bool
    {
        self.rng.gen_bool(probability)
    }

    pub fn pick<'t, T>(&mut self, items: &'t [T]) -> Option<&'t T>
    {
        items.choose(&mut self.rng)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T])
    {
        items.shuffle(&mut self.rng)
    }

    /// Index drawn proportionally to `weights`; they need not sum to one.
    /// `None` when the weights are empty or all zero.
    pub fn pick_weighted(&mut self, weights: &[f64]) -> Option<usize>
    {
        let total: f64 = weights.iter().sum();
        if weights.is_empty() || total <= 0.0 {
            return None;
        }
        let mut threshold = self.rng.r#gen::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if threshold <= 0.0 {
                return Some(i);
            }
        }
        Some(weights.len() - 1)
    }

    fn read_line(&mut self) -> Result<String, GameError>
    {
        let mut buf = String::new();
        let read = self.input.read_line(&mut buf)?;
        if read == 0 {
            return Err(GameError::Interrupted);
        }
        Ok(buf)
    }
}

/// `You, P2 .. Pn`: the player roster used by every simulated-opponent
/// mode. A count below one still yields the human player.
pub fn roster(count: i64) -> Vec<String>
{
    let mut names = vec!["You".to_string()];
    for i in 2..=count {
        names.push(format!("P{i}"));
    }
    names
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::io::Cursor;

    fn scripted(input: &str) -> Console<'static>
    {
        Console::new(Cursor::new(input.to_string()), Vec::new(), 7)
    }

    #[test]
    fn empty_line_is_none()
    {
        let mut con = scripted("\n");
        assert_eq!(con.prompt_int("? ", 1..=10).unwrap(), None);
    }

    #[test]
    fn out_of_range_reprompts()
    {
        let mut con = scripted("99\n0\n5\n");
        assert_eq!(con.prompt_int("? ", 1..=10).unwrap(), Some(5));
    }

    #[test]
    fn garbage_reprompts()
    {
        let mut con = scripted("banana\n3\n");
        assert_eq!(con.prompt_int("? ", ..).unwrap(), Some(3));
    }

    #[test]
    fn open_bounds_accept_extremes()
    {
        let mut con = scripted("-40\n");
        assert_eq!(con.prompt_int("? ", ..=0).unwrap(), Some(-40));
    }

    #[test]
    fn eof_is_interrupted()
    {
        let mut con = scripted("");
        assert!(matches!(con.prompt_int("? ", ..), Err(GameError::Interrupted)));
    }

    #[test]
    fn choice_maps_to_index()
    {
        let mut con = scripted("2\n");
        let picked = con.prompt_choice("Pick:", &["red", "green", "blue"]).unwrap();
        assert_eq!(picked, Some(1));
    }

    #[test]
    fn roster_names()
    {
        assert_eq!(roster(3), vec!["You", "P2", "P3"]);
        assert_eq!(roster(0), vec!["You"]);
    }

    #[test]
    fn seeded_rolls_repeat()
    {
        let mut a = scripted("");
        let mut b = scripted("");
        for _ in 0..20 {
            assert_eq!(a.roll(0..1000), b.roll(0..1000i64));
        }
    }
}
