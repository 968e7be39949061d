//! Input-helper properties.
//!
//! The bounded prompt must never hand a game an out-of-range value, no
//! matter what the user types, and an empty line always means "use the
//! default".

use minigames_hub::Console;
use proptest::prelude::*;
use std::io::Cursor;

fn console(input: String) -> Console<'static>
{
    Console::new(Cursor::new(input), Vec::new(), 1)
}

proptest! {
    // Any single input line either skips (empty after trim) or, after the
    // reprompt loop, yields a value inside the declared bounds. The "7"
    // sentinel line satisfies the reprompt when the first line is garbage.
    #[test]
    fn bounded_prompt_never_escapes_bounds(line in "[^\r\n]{0,40}") {
        let mut con = console(format!("{line}\n7\n"));
        let value = con.prompt_int("? ", 1..=10).expect("prompt must not fail");
        match value {
            None => prop_assert!(line.trim().is_empty()),
            Some(v) => prop_assert!((1..=10).contains(&v)),
        }
    }

    #[test]
    fn open_lower_bound_accepts_any_small_value(v in -1000i64..=0) {
        let mut con = console(format!("{v}\n"));
        let value = con.prompt_int("? ", ..=0).expect("prompt must not fail");
        prop_assert_eq!(value, Some(v));
    }
}

#[test]
fn empty_line_is_the_skip_signal()
{
    let mut con = console("\n".to_string());
    assert_eq!(con.prompt_int("? ", 1..=10).unwrap(), None);
}

#[test]
fn out_of_range_then_in_range_lands_in_range()
{
    let mut con = console("0\n11\n10\n".to_string());
    assert_eq!(con.prompt_int("? ", 1..=10).unwrap(), Some(10));
}

#[test]
fn choice_skip_propagates_none()
{
    let mut con = console("\n".to_string());
    let picked = con.prompt_choice("Pick:", &["a", "b"]).unwrap();
    assert_eq!(picked, None);
}
