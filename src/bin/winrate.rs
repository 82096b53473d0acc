use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use plotters::prelude::*;
use tracing::{debug, info, warn};

use farkle::{Bot, Game, PLAYER_COUNT, create_bot_from_spec, label_for_spec};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xC0FFEE_u64 << 32 | 0x5EED_u64;

#[derive(Parser, Debug)]
#[command(
    name = "winrate",
    about = "Run many bot-vs-bot Farkle games and plot per-bot win rates."
)]
struct Args {
    /// Number of games to simulate
    #[arg(short = 'g', long = "games", default_value_t = 500)]
    games: usize,

    /// Base RNG seed (dice and bot RNGs are derived deterministically)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Output chart file (png)
    #[arg(short = 'o', long = "out", default_value = "winrates.png")]
    out: PathBuf,

    /// Show a textual summary only (no chart)
    #[arg(long = "no-chart", action = ArgAction::SetTrue)]
    no_chart: bool,

    /// Safety cap on actions per game; games exceeding this are aborted
    #[arg(long = "max-actions", default_value_t = 20_000)]
    max_actions: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Two bot specs, e.g. `threshold:300 threshold:500`
    bots: Vec<String>,
}

#[derive(Default)]
struct LabelStats {
    wins: usize,
    seats: usize,
    turns: usize,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.bots.len() != PLAYER_COUNT {
        return Err(format!(
            "expected {PLAYER_COUNT} bot specs (e.g. threshold random), received {}",
            args.bots.len()
        )
        .into());
    }
    // Disallow human in batch sims; it would block waiting for input.
    if args
        .bots
        .iter()
        .any(|s| s.to_ascii_lowercase().starts_with("human"))
    {
        return Err("human players are not supported in winrate runs".into());
    }

    // Labels keep their argument so `threshold:300` and `threshold:500` stay apart.
    let labels_for_spec: Vec<String> = args
        .bots
        .iter()
        .map(|spec| match spec.split_once(':') {
            Some((_, value)) => format!("{}:{}", label_for_spec(spec), value.trim()),
            None => label_for_spec(spec),
        })
        .collect();

    let mut stats: HashMap<String, LabelStats> = HashMap::new();
    let mut aborted_games = 0usize;

    for game_idx in 0..args.games {
        // Alternate who opens; the first player has a small edge.
        let order: [usize; PLAYER_COUNT] = if game_idx % 2 == 0 { [0, 1] } else { [1, 0] };
        let dice_seed = mix_seed(args.seed, game_idx as u64, 0x5EED_15);
        let mut game = Game::builder().with_seed(dice_seed).build();

        let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(PLAYER_COUNT);
        let mut labels: Vec<String> = Vec::with_capacity(PLAYER_COUNT);
        for (seat, src_idx) in order.iter().enumerate() {
            let bot_seed = mix_seed(args.seed, game_idx as u64, seat as u64);
            bots.push(create_bot_from_spec(&args.bots[*src_idx], seat, bot_seed)?);
            labels.push(labels_for_spec[*src_idx].clone());
        }
        for label in &labels {
            stats.entry(label.clone()).or_default().seats += 1;
        }

        let record = play_game(&mut game, &mut bots, args.max_actions);
        match record.winner_turns() {
            Some((winner, turns)) => {
                debug!(game = game_idx, winner = %labels[winner], turns, "game finished");
                let entry = stats.entry(labels[winner].clone()).or_default();
                entry.wins += 1;
                entry.turns += turns;
            }
            None => {
                warn!(game = game_idx, actions = record.actions, "game aborted without a winner");
                aborted_games += 1;
            }
        }
    }

    let mut results: Vec<(String, f64, &LabelStats)> = stats
        .iter()
        .map(|(label, s)| {
            let rate = if s.seats > 0 {
                s.wins as f64 / s.seats as f64
            } else {
                0.0
            };
            (label.clone(), rate, s)
        })
        .collect();
    results.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    println!("Win rates (per-seat):");
    for (label, rate, s) in &results {
        let avg_turns = if s.wins > 0 {
            s.turns as f64 / s.wins as f64
        } else {
            0.0
        };
        println!(
            "  {label:<16}  {}/{}  ({:.2}%)   avg turns to win: {avg_turns:>6.2}",
            s.wins,
            s.seats,
            rate * 100.0
        );
    }
    if aborted_games > 0 {
        println!("\nNote: {aborted_games} game(s) hit the action cap without a winner.");
    }

    if !args.no_chart {
        let data: Vec<(String, f64)> = results
            .iter()
            .map(|(label, rate, _)| (label.clone(), *rate))
            .collect();
        render_bar_chart(&args.out, &data)?;
        info!(path = %args.out.display(), "chart written");
        println!("\nChart written to {}", args.out.display());
    }

    Ok(())
}

struct GameRecord {
    winner: Option<usize>,
    /// Turns each seat handed over; the winning turn ends without a handover.
    seat_turns: [usize; PLAYER_COUNT],
    actions: usize,
}

impl GameRecord {
    /// Winner and the number of turns the winner took, winning turn included.
    fn winner_turns(&self) -> Option<(usize, usize)> {
        self.winner
            .map(|winner| (winner, self.seat_turns[winner] + 1))
    }
}

fn play_game(game: &mut Game, bots: &mut [Box<dyn Bot>], max_actions: usize) -> GameRecord {
    let mut actions = 0usize;
    let mut seat_turns = [0usize; PLAYER_COUNT];
    while !game.is_finished() && actions < max_actions {
        let current = game.current_player();
        let view = game.view();
        let legal = game.legal_actions();
        if legal.is_empty() {
            break;
        }
        let action = bots[current].select_action(&view, &legal);
        game.apply_action(action);
        if game.current_player() != current {
            seat_turns[current] += 1;
        }
        actions += 1;
    }
    GameRecord {
        winner: game.winner(),
        seat_turns,
        actions,
    }
}

fn mix_seed(base: u64, a: u64, b: u64) -> u64 {
    let mut z =
        base ^ (a.wrapping_mul(0x9E37_79B97F4A7C15)) ^ (b.wrapping_mul(0xBF58_476D1CE4E5B9));
    z ^= z >> 12;
    z ^= z << 25;
    z ^= z >> 27;
    z
}

fn render_bar_chart(out: &PathBuf, data: &[(String, f64)]) -> Result<(), Box<dyn Error>> {
    let labels: Vec<String> = data.iter().map(|(l, _)| l.clone()).collect();
    let values: Vec<f64> = data.iter().map(|(_, r)| r * 100.0).collect();

    let root = BitMapBackend::new(out, (800, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Farkle Bot Win Rates (per-seat)", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..labels.len(), 0.0f64..100.0)
        .map_err(|e| format!("{e}"))?;

    chart
        .configure_mesh()
        .y_desc("Win rate (%)")
        .x_desc("Bot")
        .x_labels(labels.len())
        .x_label_formatter(&|idx| labels.get(*idx).cloned().unwrap_or_default())
        .y_label_formatter(&|v| format!("{v:.0}"))
        .light_line_style(&WHITE.mix(0.0))
        .draw()
        .map_err(|e| format!("{e}"))?;

    for (i, value) in values.iter().enumerate() {
        let rect = Rectangle::new([(i, 0.0), (i, *value)], BLUE.filled());
        chart
            .draw_series(std::iter::once(rect))
            .map_err(|e| format!("{e}"))?;
    }

    root.present().map_err(|e| format!("{e}"))?;
    Ok(())
}
