use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use memora_core::*;
use tracing_subscriber::EnvFilter;

mod command;
mod render;

use command::Command;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board size: easy, medium or hard
    #[arg(short = 'z', long, default_value_t = BoardSize::Easy)]
    size: BoardSize,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play a custom game with this name, using the images given by --image
    #[arg(short, long, requires = "images")]
    name: Option<String>,

    /// Image reference for a custom game, once per pair
    #[arg(short, long = "image", value_name = "URL")]
    images: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.verbose.tracing_level_filter().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(time_seed);
    log::debug!("seed: {seed}");

    let mut session = match args.name {
        Some(name) => {
            let custom = CustomGame::new(&name, args.size, args.images)?;
            Session::with_custom(custom, seed)?
        }
        None => Session::new(args.size, seed)?,
    };

    let mut lines = io::stdin().lock().lines();
    print!("{}", render::render_table(&session.view()));
    println!("{}", render::HELP);

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Flip(position) => flip(&mut session, position),
            Command::New => {
                if confirm_quit(&session, &mut lines)? {
                    session.restart()?;
                    print!("{}", render::render_table(&session.view()));
                }
            }
            Command::Size(board_size) => {
                if confirm_quit(&session, &mut lines)? {
                    session.change_size(board_size)?;
                    print!("{}", render::render_table(&session.view()));
                }
            }
            Command::Help => println!("{}", render::HELP),
            Command::Quit => break,
        }
    }

    Ok(())
}

fn flip(session: &mut Session, position: Position) {
    match session.flip(position) {
        Ok(outcome) => {
            print!("{}", render::render_table(&session.view()));
            if outcome.found_match() {
                let game = session.game();
                println!(
                    "Pair found! {}/{}",
                    game.num_pairs_found(),
                    game.board_size().num_pairs()
                );
            }
            if outcome == FlipOutcome::Won {
                println!("You won in {} moves!", session.game().num_moves());
            }
        }
        Err(GameError::AlreadyWon) => println!("Already won, type `new` to play again"),
        Err(GameError::AlreadyFaceUp) => println!("Invalid move, that card is already up"),
        Err(err) => println!("{err}"),
    }
}

fn confirm_quit(
    session: &Session,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    if !session.needs_quit_confirmation() {
        return Ok(true);
    }

    print!("Quit your current game? [y/N] ");
    io::stdout().flush()?;
    let answer = lines.next().transpose()?.unwrap_or_default();
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn time_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
