use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pegjump_engine::engine::config::{load_default_definitions, load_definitions};
use pegjump_engine::engine::models::GameStatus;
use pegjump_engine::engine::session::SinglePlayerGame;
use pegjump_engine::engine::simulator::run_playouts;
use pegjump_engine::games::peg_solitaire::{BoardLayout, Hole, HoleId};
use pegjump_engine::games::BoardRegistry;

#[derive(Parser)]
#[command(name = "pegjump", about = "Peg solitaire rules engine")]
struct Cli {
    /// Path to boards.toml (default: auto-discover)
    #[arg(long, env = "PEGJUMP_BOARDS", global = true)]
    boards: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available boards
    List,

    /// Print a board and its ready holes
    Show { board: String },

    /// Print the point cloud and hole spots as JSON
    Layout { board: String },

    /// Apply jumps given as FROM:TO hole ids
    Play {
        board: String,
        #[arg(value_parser = parse_jump)]
        jumps: Vec<(usize, usize)>,
    },

    /// Run random playouts and summarize pegs left
    Playout {
        board: String,
        /// Number of playouts
        #[arg(long, default_value = "1000")]
        games: usize,
        /// Base random seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn parse_jump(s: &str) -> Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got {s:?}"))?;
    let from = from.trim().parse().map_err(|e| format!("bad hole id {from:?}: {e}"))?;
    let to = to.trim().parse().map_err(|e| format!("bad hole id {to:?}: {e}"))?;
    Ok((from, to))
}

fn hole_ids(holes: &[&Hole]) -> Vec<usize> {
    holes.iter().map(|h| h.id().0).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut registry = BoardRegistry::with_presets();
    let file = match cli.boards {
        Some(ref path) => load_definitions(path)?,
        None => load_default_definitions(),
    };
    registry.extend_from(file);

    match cli.command {
        Command::List => {
            for name in registry.list_board_names() {
                let description = registry
                    .get(&name)
                    .and_then(|d| d.description.clone())
                    .unwrap_or_default();
                println!("{name:<12} {description}");
            }
        }
        Command::Show { board } => {
            let board = registry.build(&board)?;
            print!("{board}");
            println!("pegs: {}", board.peg_count());
            println!("ready: {:?}", hole_ids(&board.ready_holes()));
        }
        Command::Layout { board } => {
            let board = registry.build(&board)?;
            let layout = BoardLayout::from_board(&board);
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Command::Play { board, jumps } => {
            let mut game = SinglePlayerGame::new(registry.game_data(&board)?)?;
            // no renderer here, so the peg asset counts as loaded
            game.on_peg_loaded(Ok(()))?;
            game.load_board_data()?;

            for (from, to) in jumps {
                let from_hole = game.find_hole_by_id(HoleId(from)).map(Hole::id);
                let to_hole = game.find_hole_by_id(HoleId(to)).map(Hole::id);
                match game.try_jump(from_hole, to_hole) {
                    Some(peg) => println!("{from} -> {to}: removed peg {peg}"),
                    None => println!("{from} -> {to}: no jump"),
                }
                if game.status().is_over() {
                    break;
                }
            }

            print!("{}", game.board());
            println!(
                "pegs remaining: {}",
                game.pegs_remaining().unwrap_or_default()
            );
            println!("ready: {:?}", hole_ids(&game.holes_ready()));
            if game.status() != GameStatus::Ready {
                println!("status: {:?}", game.status());
            }
        }
        Command::Playout { board, games, seed } => {
            let definition = registry
                .get(&board)
                .ok_or_else(|| format!("unknown board: {board}"))?;
            let summary = run_playouts(definition, games, seed)?;
            println!("{}", summary.summary());
            if let Some(best) = &summary.best {
                let line: Vec<String> = best
                    .jumps
                    .iter()
                    .map(|j| format!("{}:{}", j.from, j.to))
                    .collect();
                println!("  best line ({} left): {}", best.pegs_left, line.join(" "));
            }
        }
    }

    Ok(())
}
