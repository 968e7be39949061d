use minigames_hub::console::{Console, GameError};
use minigames_hub::{games, menu};
use std::env;

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String>
{
    let mut args = env::args().skip(1);
    let command = args.next();
    match command.as_deref() {
        None => play(),
        Some("list") => {
            list_games();
            Ok(())
        }
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(other) => Err(format!("Unknown command '{other}'. Run with --help.")),
    }
}

fn play() -> Result<(), String>
{
    let seed = rand::random::<u64>();
    let mut console = Console::stdio(seed);
    let registry = games::registry();
    match menu::run(&mut console, &registry) {
        Ok(()) => Ok(()),
        // Stdin closed mid-game: same farewell, still a clean exit.
        Err(GameError::Interrupted) => {
            println!("\nBye! Thanks for playing.");
            Ok(())
        }
        Err(err) => Err(err.to_string()),
    }
}

fn list_games()
{
    println!("Available games:");
    for (i, game) in games::registry().iter().enumerate() {
        println!("{:>3}. {}", i + 1, game.title);
    }
}

fn print_help()
{
    println!("minigames-hub");
    println!("\nUsage:");
    println!("  minigames-hub         interactive menu");
    println!("  minigames-hub list    print the game catalogue");
    println!("\nInside the menu, pick a game by number; 0 quits.");
    println!("Empty input at a parameter prompt takes the default.");
}
