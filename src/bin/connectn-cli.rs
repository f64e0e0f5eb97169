#![deny(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
// --> they are ridiculous and not necessary
#![allow(
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::fallible_impl_from
)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

//! Console driver: two people take turns at the same terminal.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use connectn_rs::{Game, GameConfig, GameResult, Player};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Who places the first mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FirstTurn {
    Red,
    Black,
    Random,
}

/// Play Connect Four on the console
#[derive(Parser, Debug)]
#[command(name = "connectn-cli")]
#[command(version)]
struct Cli {
    /// Number of rows
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    columns: usize,

    /// Marks in a row required to win
    #[arg(long, default_value_t = GameConfig::DEFAULT_NUM_TO_WIN)]
    num_to_win: usize,

    /// Player who starts
    #[arg(long, value_enum, default_value_t = FirstTurn::Red)]
    first: FirstTurn,
}

/// A line typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Slot { row: usize, column: usize },
    Column(usize),
}

/// Accepts `row column` or just `column`.
fn parse_input(line: &str) -> Option<Input> {
    let numbers = line
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    match numbers.as_slice() {
        &[row, column] => Some(Input::Slot { row, column }),
        &[column] => Some(Input::Column(column)),
        _ => None,
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let first = match cli.first {
        FirstTurn::Red => Player::Red,
        FirstTurn::Black => Player::Black,
        FirstTurn::Random => Player::random(&mut rand::rng()),
    };
    let mut game = Game::new(cli.rows, cli.columns, cli.num_to_win, first)?;

    run(&mut game, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// Plays until the game is over or `input` runs dry.
fn run(game: &mut Game, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut lines = input.lines();
    while !game.result().is_over() {
        writeln!(out, "{game}")?;
        writeln!(out, "{}: Where do you want to mark? Enter row column", game.turn())?;

        let Some(line) = lines.next() else {
            writeln!(out, "Bye.")?;
            return Ok(());
        };
        let line = line?;

        let outcome = match parse_input(&line) {
            Some(Input::Slot { row, column }) => game.take_turn(row, column),
            Some(Input::Column(column)) => game.drop_into(column),
            None => {
                writeln!(out, "Please enter two numbers: row column")?;
                continue;
            }
        };
        if let Err(err) = outcome {
            writeln!(out, "Invalid move: {err}")?;
        }
    }

    writeln!(out, "{game}")?;
    match game.result() {
        GameResult::Winner(player) => writeln!(out, "{player} Won!"),
        result => writeln!(out, "{result}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["connectn-cli"]);
        assert_eq!((cli.rows, cli.columns, cli.num_to_win), (8, 8, 4));
        assert_eq!(cli.first, FirstTurn::Red);

        let cli = Cli::parse_from([
            "connectn-cli",
            "--rows",
            "6",
            "--columns",
            "7",
            "--num-to-win",
            "3",
            "--first",
            "random",
        ]);
        assert_eq!((cli.rows, cli.columns, cli.num_to_win), (6, 7, 3));
        assert_eq!(cli.first, FirstTurn::Random);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(
            parse_input("2 5"),
            Some(Input::Slot { row: 2, column: 5 })
        );
        assert_eq!(
            parse_input("  0\t3 \n"),
            Some(Input::Slot { row: 0, column: 3 })
        );
        assert_eq!(parse_input("4"), Some(Input::Column(4)));
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("1 2 3"), None);
        assert_eq!(parse_input("-1 2"), None);
        assert_eq!(parse_input("a b"), None);
    }

    fn run_with(game: &mut Game, input: &str) -> String {
        let mut out = Vec::new();
        run(game, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_until_winner() {
        let mut game = Game::new(4, 4, 2, Player::Red).unwrap();
        let out = run_with(&mut game, "0 0\nfoo\n2 1\n0 1\n1 0\n");

        assert!(out.contains("RED: Where do you want to mark? Enter row column"));
        assert!(out.contains("Please enter two numbers: row column"));
        assert!(out.contains("Invalid move: space below (2, 1) is empty"));
        assert!(out.ends_with("RED Won!\n"));
        assert_eq!(game.result(), GameResult::Winner(Player::Red));
    }

    #[test]
    fn test_run_until_draw() {
        let mut game = Game::new(2, 2, 2, Player::Black).unwrap();
        let out = run_with(&mut game, "0\n1\n1\n0\n");

        assert!(out.starts_with("EMPTY | EMPTY | \nEMPTY | EMPTY | \n"));
        assert!(out.ends_with("DRAW\n"));
        assert_eq!(game.result(), GameResult::Draw);
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut game = Game::new(4, 4, 4, Player::Red).unwrap();
        let out = run_with(&mut game, "0 0\n");

        assert!(out.contains("BLACK: Where do you want to mark? Enter row column"));
        assert!(out.ends_with("Bye.\n"));
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.marks_placed(), 1);
    }
}
