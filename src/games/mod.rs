pub mod board;
pub mod chase;
pub mod guess;
pub mod living;
pub mod memory;
pub mod quiz;
pub mod social;
pub mod story;
pub mod survive;
pub mod versus;

use crate::console::{Console, GameError};

pub struct GameEntry
{
    pub title: &'static str,
    pub run: fn(&mut Console) -> Result<(), GameError>,
}

/// The full catalogue, in menu order. The dispatcher numbers entries from
/// 1 in exactly this order, so appending is safe and reordering is not.
pub fn registry() -> Vec<GameEntry>
{
    fn entry(title: &'static str, run: fn(&mut Console) -> Result<(), GameError>) -> GameEntry
    {
        GameEntry { title, run }
    }

    vec![
        entry("Math Quiz", quiz::math_quiz),
        entry("Guess the Number", guess::guess_number),
        entry("Minesweeper", board::minesweeper),
        entry("Tag", chase::tag),
        entry("Hide & Seek", chase::hide_and_seek),
        entry("Snakes and Ladders", board::snakes_and_ladders),
        entry("Virus Tag", chase::virus_tag),
        entry("Bunker", survive::bunker),
        entry("Ball Chase", chase::ball_chase),
        entry("Survival", survive::survival),
        entry("Rails", board::rails),
        entry("Racing", board::racing),
        entry("Dodgeball", chase::dodgeball),
        entry("Fog", chase::fog),
        entry("Raid", survive::raid),
        entry("Thermometer", guess::thermometer),
        entry("Snake", board::snake),
        entry("The Trolley Decision", story::trolley),
        entry("The Living Car", living::living_car),
        entry("The Living Car with Eyes and a Mouth", living::living_car_face),
        entry("Red Light, Green Light", board::red_green_light),
        entry("Odd One Out", guess::odd_one_out),
        entry("Sugar Honeycomb", board::sugar_honeycomb),
        entry("Last Survivor", survive::last_survivor),
        entry("Glass Bridge", board::glass_bridge),
        entry("Brawl", story::fight),
        entry("Sumo", story::sumo),
        entry("Karate", story::karate),
        entry("Everything Comes Alive!", living::everything_alive),
        entry("Chat with the Living Things", living::chat_with_items),
        entry("Rooms", story::rooms),
        entry("Monster", story::monster),
        entry("Catastrophe", survive::catastrophe),
        entry("Pursuit (you are the chaser)", chase::pursuit),
        entry("Ball Pursuit (you are the chaser)", chase::ball_pursuit),
        entry("Fairy Tale", story::fairy_tale),
        entry("The Curse", story::curse),
        entry("Bunker: The Board Game", survive::bunker_board),
        entry("Traitor", social::traitor),
        entry("Fear", social::fear),
        entry("Spider", story::spider),
        entry("Birthday", story::birthday),
        entry("Dentist", story::dentist),
        entry("Aquaphobia", story::aquaphobia),
        entry("Arachnophobia", story::arachnophobia),
        entry("Claustrophobia", story::claustrophobia),
        entry("Lumber Jack", guess::lumber_jack),
        entry("Pizza Memory", memory::pizza_memory),
        entry("Food Memory", memory::food_memory),
        entry("Sound Memory", memory::sound_memory),
        entry("Memory (Pairs)", memory::pairs),
        entry("Liar's Bar", social::liars_bar),
        entry("Hitman", social::hitman),
        entry("True or False", quiz::true_or_false),
        entry("Death Columns", board::death_columns),
        entry("Guess the Word", guess::guess_the_word),
        entry("Who's SUS?", social::whos_sus),
        entry("Mafia", social::mafia),
        entry("The World Came Alive", living::living_world),
        entry("Russian Roulette", social::russian_roulette),
        entry("Interpretation", quiz::interpretation),
        entry("Reputation", social::reputation),
        entry("Tanks", board::tanks),
        entry("Computer Virus Simulator", living::virus_simulator),
        entry("Construction Simulator", living::construction),
        entry("School", living::school),
        entry("Hard Math Quiz", quiz::hard_math_quiz),
        entry("Clicker", guess::clicker),
        entry("Timed Math Quiz", quiz::timed_math_quiz),
        entry("Very Hard Math Quiz", quiz::very_hard_math_quiz),
        entry("Math Quiz vs Other Players", quiz::math_quiz_vs_players),
        entry("Planetarium", living::planetarium),
        entry("The Living Planets", living::living_planets),
        entry("Stars", living::stars),
        entry("Shine", living::shine),
        entry("Quiz (basic)", quiz::quiz_easy),
        entry("Hard Quiz", quiz::quiz_hard),
        entry("Timed Quiz", quiz::quiz_timed),
        entry("Very Hard Quiz", quiz::quiz_very_hard),
        entry("Quiz vs Other Players", quiz::quiz_vs_players),
        entry("Minesweeper Race", versus::minesweeper_race),
        entry("Chase vs Other Players", versus::chase_race),
        entry("Ball Chase vs Other Players", versus::ball_chase_race),
        entry("Clicker vs Other Players", versus::clicker_race),
        entry("Memory vs Other Players", versus::pairs_match),
        entry("Pizza Memory vs Other Players", versus::pizza_memory_race),
        entry("Food Memory vs Other Players", versus::food_memory_race),
        entry("Sound Memory vs Other Players", versus::sound_memory_race),
        entry("Construction Crew", versus::construction_crew),
        entry("Rooms vs Other Players", versus::rooms_hunt),
        entry("The Curse vs Other Players", versus::curse_house),
        entry("The Pet Car vs Other Players", versus::pet_car),
        entry("Revenge", survive::revenge),
        entry("The Happy Car", story::happy_car),
        entry("The Path", story::the_path),
        entry("Lights Out", story::lights_off),
        entry("Scareman", survive::scareman),
        entry("The Clown", story::clown),
        entry("Spirits of the Months", living::spirits_of_months),
        entry("Spirits of the Seasons", living::spirits_of_seasons),
        entry("Spirits of the Weekdays", living::spirits_of_weekdays),
        entry("Abandoned Place", survive::abandoned_place),
        entry("Zombie Apocalypse", survive::zombie_apocalypse),
        entry("Don't Eat the Cake", survive::dont_eat_cake),
        entry("Five Nights", survive::five_nights),
        entry("RUN", chase::run_run_run),
        entry("Be Quieter!", survive::be_quieter),
        entry("Oddities", living::oddities),
        entry("Talk to the Planets", living::talk_planets),
        entry("End of the World", survive::apocalypse),
        entry("The Power to Revive", survive::revive_ability),
        entry("Revenge vs Other Players", versus::revenge_club),
        entry("End of the World vs Other Players", versus::apocalypse_together),
        entry("Five Nights vs Other Players", versus::five_nights_shift),
        entry("Abandoned Place vs Other Players", versus::abandoned_crawl),
        entry("Oddities vs Other Players", versus::oddities_gala),
        entry("The Power to Revive vs Other Players", versus::revive_circle),
    ]
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn registry_is_well_formed()
    {
        let games = registry();
        assert!(games.len() > 100);
        assert!(games.iter().all(|game| !game.title.is_empty()));
    }
}
