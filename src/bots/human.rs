use std::io::{self, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::state::GameView;
use crate::visualize::{describe_action, render_view, rules_text};

/// Interactive seat that queries a human via standard input.
pub struct HumanBot {
    name: String,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Bot for HumanBot {
    fn select_action(&mut self, view: &GameView, legal_actions: &[Action]) -> Action {
        loop {
            println!(
                "\n=== {}'s turn (player {}) ===",
                self.name,
                view.current_player + 1
            );
            println!("{}", render_view(view));
            println!("Available actions:");
            for (index, action) in legal_actions.iter().enumerate() {
                println!("  [{index}] {}", describe_action(view, action));
            }
            println!("Type the action index, 'restart', 'rules', 'help' or 'q' to quit.");
            print!("Selection: ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            match io::stdin().read_line(&mut input) {
                Ok(0) => {
                    println!("Input closed. Exiting game.");
                    std::process::exit(0);
                }
                Ok(_) => {}
                Err(_) => {
                    eprintln!("failed to read input");
                    continue;
                }
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            if trimmed.eq_ignore_ascii_case("restart") {
                return Action::Restart;
            }
            if trimmed.eq_ignore_ascii_case("rules") {
                println!("{}", rules_text());
                continue;
            }
            if trimmed.eq_ignore_ascii_case("help") {
                println!("Enter the numeric index listed next to the action you wish to perform.");
                println!("'restart' resets both scores and starts over with Player 1.");
                continue;
            }
            let Ok(choice) = trimmed.parse::<usize>() else {
                println!("Invalid input: '{trimmed}'. Please enter a number.");
                continue;
            };
            if let Some(action) = legal_actions.get(choice) {
                println!("You selected: {}", describe_action(view, action));
                return *action;
            }
            println!("Index out of range. Please choose a valid option.");
        }
    }
}
