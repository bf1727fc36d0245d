// Terminal renju: play against the engine
//
// Usage:
//   renju [OPTIONS]
//
// Options:
//   --advanced          Deeper search and threat budget
//   --engine-black      Engine plays Black and moves first
//   --size <N>          Board size (5..=16)
//   --config <path>     Path to Renju.toml (default: Renju.toml)

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use renju::board::{Pos, Stone};
use renju::config::{Difficulty, EngineConfig};
use renju::engine::{AIEngine, Decision};
use renju::game::Game;
use renju::rules::Verdict;

struct Options {
    difficulty: Option<Difficulty>,
    engine_color: Stone,
    size: Option<usize>,
    config_path: String,
}

fn print_usage() {
    eprintln!("Renju against the engine");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  renju [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --advanced          Deeper search and threat budget");
    eprintln!("  --engine-black      Engine plays Black and moves first");
    eprintln!("  --size <N>          Board size (5..=16, default 15)");
    eprintln!("  --config <path>     Path to Renju.toml (default: Renju.toml)");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("COMMANDS:");
    eprintln!("  <row> <col>         Place a stone");
    eprintln!("  undo                Take back your last move");
    eprintln!("  new                 Start a new game");
    eprintln!("  quit                Leave");
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        difficulty: None,
        engine_color: Stone::White,
        size: None,
        config_path: "Renju.toml".to_string(),
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--advanced" => options.difficulty = Some(Difficulty::Advanced),
            "--engine-black" => options.engine_color = Stone::Black,
            "--size" => {
                let value = args.next().ok_or("--size requires a value")?;
                let size = value
                    .parse::<usize>()
                    .map_err(|e| format!("Invalid board size '{}': {}", value, e))?;
                options.size = Some(size);
            }
            "--config" => {
                options.config_path = args.next().ok_or("--config requires a path")?;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }
    Ok(options)
}

/// Text board with forbidden cells marked when Black is to move
fn render(game: &Game) -> String {
    let board = game.board();
    let forbidden = game.forbidden_cells();
    let last = game.last_move().map(|m| m.pos);

    let mut out = String::from("   ");
    for c in 0..board.size() {
        out.push_str(&format!("{c:3}"));
    }
    out.push('\n');
    for r in 0..board.size() {
        out.push_str(&format!("{r:3}"));
        for c in 0..board.size() {
            let pos = Pos::new(r as u8, c as u8);
            let symbol = if forbidden.contains(&pos) {
                '*'
            } else {
                board.get(pos).symbol()
            };
            let marker = if last == Some(pos) { '>' } else { ' ' };
            out.push(' ');
            out.push(marker);
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse::<u8>().ok()?;
    let col = parts.next()?.parse::<u8>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}

fn announce(verdict: Verdict) {
    match verdict {
        Verdict::Win(color) => println!("{color} wins."),
        Verdict::Draw => println!("Draw."),
        Verdict::Ongoing => {}
    }
}

fn main() {
    env_logger::init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    let config = match EngineConfig::load_or_default(&options.config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let difficulty = options.difficulty.unwrap_or(config.difficulty);
    let search = config.search(difficulty);
    let size = options.size.unwrap_or(config.board_size);

    let mut game = match Game::new(size) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let mut engine = AIEngine::new();
    let engine_color = options.engine_color;

    log::info!("starting {size}x{size} game, engine plays {engine_color} at {difficulty:?}");
    println!(
        "You play {}. Type 'row col' to move, or 'undo', 'new', 'quit'.",
        engine_color.opponent()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if game.turn() == engine_color && !game.verdict().is_over() {
            match game.engine_move(&mut engine, search) {
                Ok(Decision::Move(result)) => println!(
                    "Engine plays {} ({}, {}ms)",
                    result.best_move, result.search_type, result.time_ms
                ),
                Ok(Decision::Draw) => println!("No moves left."),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
            announce(game.verdict());
        }

        println!();
        print!("{}", render(&game));
        if game.verdict().is_over() {
            print!("Game over. 'new', 'undo' or 'quit'> ");
        } else {
            print!("{} to move> ", game.turn());
        }
        if let Err(e) = io::stdout().flush() {
            log::warn!("failed to flush prompt: {e}");
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "new" => game.reset(),
            "undo" => {
                // Take back the engine's reply too so it is our move again
                game.undo_last();
                if game.turn() == engine_color {
                    game.undo_last();
                }
            }
            input => match parse_move(input) {
                Some(pos) => match game.play(pos) {
                    Ok(verdict) => announce(verdict),
                    Err(e) => println!("{e}"),
                },
                None => println!("Expected 'row col', 'undo', 'new' or 'quit'."),
            },
        }
    }
}
