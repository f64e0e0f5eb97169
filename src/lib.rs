//! A generalized Connect Four engine.
//!
//! Two players take turns placing marks on a board of configurable size. Marks
//! must rest on the bottom row or on another mark. Whoever first lines up
//! `num_to_win` of their marks in a column or within a row wins; a full board
//! without a winner is a draw. Diagonal runs do not count.
//!
//! - [`Game`] is the engine: it validates moves, detects the end of the game
//!   and notifies listeners about every accepted move.
//! - [`Gameboard`] is the board with its gravity queries.
//! - [`table::Table`] is a headless controller for graphical front ends.

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

mod board;
mod config;
mod error;
mod event;
mod game;
pub mod table;

pub use board::{Gameboard, Mark, Player};
pub use config::GameConfig;
pub use error::{ConfigError, MoveError};
pub use event::{ListenerId, MoveEvent};
pub use game::{Game, GameResult};
