//! Play against the random computer opponent in the terminal.
//!
//! Configured through `SHOGI_HUMAN_SIDE`, `SHOGI_SEED`, `SHOGI_RULES` and
//! `SHOGI_START_SFEN`; logs go to stderr as set by `RUST_LOG`.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use shogi_match::opponent::RandomSelector;
use shogi_match::vs_computer::{Update, VsComputer};
use shogi_match::{MatchError, PlayConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PlayConfig::from_env();
    info!("starting with {config:?}");

    let selector = match config.seed {
        Some(seed) => RandomSelector::from_seed(seed),
        None => RandomSelector::from_entropy(),
    };
    let mut session = VsComputer::with_position(
        config.human_side,
        selector,
        config.start_position(),
        config.rules,
    )
    .context("the computer failed to make its first move")?;

    println!("You play {}. Type a move as listed, or `quit`.", session.human_side());

    let stdin = io::stdin();
    let mut update = session.snapshot();

    loop {
        match &update {
            Update::State { board, moves } => {
                println!("{}", session.game().position());
                println!("{board}");
                println!("Moves: {}", moves.join(", "));
            }
            Update::HumanWins { board } => {
                println!("{board}");
                println!("You win!");
                return Ok(());
            }
            Update::HumanLoses { board } => {
                println!("{board}");
                println!("You lose.");
                return Ok(());
            }
        }

        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let text = line.trim();
        if text == "quit" {
            return Ok(());
        }

        match session.submit(text) {
            Ok(next) => update = next,
            Err(err @ MatchError::IllegalComputerMove(_)) => return Err(err.into()),
            Err(err) => println!("{err}"),
        }
    }
}
