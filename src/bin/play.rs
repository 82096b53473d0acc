use std::error::Error;
use std::process;

use clap::Parser;
use tracing::{debug, warn};

use farkle::{
    Action, ActionOutcome, Bot, Game, PLAYER_COUNT, TerminalBell, create_bot_from_spec,
    render_view, rules_text,
};

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play a two-player game of Farkle in the terminal.")]
struct Args {
    /// Seed for the dice (a fresh random seed when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Ring the terminal bell on every roll
    #[arg(long = "bell")]
    bell: bool,

    /// Safety cap on actions; the game stops when reached
    #[arg(long = "max-actions")]
    max_actions: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Seat specs: human[:name], random[:seed], threshold[:points] (default: two humans)
    seats: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut seats = args.seats;
    if seats.is_empty() {
        seats = vec![String::from("human"), String::from("human")];
    }
    if seats.len() != PLAYER_COUNT {
        return Err(format!("expected {PLAYER_COUNT} seats, received {}", seats.len()).into());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(seed, "starting game");
    let mut builder = Game::builder().with_seed(seed);
    if args.bell {
        builder = builder.with_feedback(TerminalBell::stderr());
    }
    let mut game = builder.build();

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(PLAYER_COUNT);
    for (index, spec) in seats.iter().enumerate() {
        bots.push(create_bot_from_spec(spec, index, seed)?);
    }

    println!("Farkle (Two Player)\n");
    println!("{}\n", rules_text());

    let mut actions = 0usize;
    while !game.is_finished() {
        if let Some(limit) = args.max_actions {
            if actions >= limit {
                println!("Action limit {limit} reached. Stopping game.");
                return Ok(());
            }
        }
        let current = game.current_player();
        let view = game.view();
        let legal = game.legal_actions();
        let action = bots[current].select_action(&view, &legal);
        if action != Action::Restart && !legal.contains(&action) {
            warn!(?action, "seat chose an action that is not enabled");
        }
        if game.apply_action(action) == ActionOutcome::Applied && action != Action::Restart {
            println!("{}", game.view().message);
        }
        actions += 1;
    }

    println!("\n{}", render_view(&game.view()));
    Ok(())
}
