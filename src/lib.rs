//! This crate implements the rules of [Ard-Rí](https://en.wikipedia.org/wiki/Tafl_games#Ard_R%C3%AD),
//! the 7x7 member of the tafl family of board games. It validates and applies plays, removes
//! captured pieces and decides when the game is over. It is not a goal of this crate to provide a
//! game client or an AI; the `ardri-demo` binary (behind the `demo` feature) is only a thin console
//! loop over the library.
//!
//! # Getting started
//!
//! Most users will only need [`game::Arbiter`], which owns the state of a single game:
//!
//! - [`game::Arbiter::play`] makes a play on behalf of the side whose turn it is, returning the
//!   pieces it captured and the outcome of the game if the play ended it. An illegal play is
//!   rejected with a [`error::PlayInvalid`] and leaves the game untouched.
//! - The query methods ([`game::Arbiter::turn`], [`game::Arbiter::status`],
//!   [`game::Arbiter::board`], etc) return copies, so nothing handed out can change the game.
//! - [`game::Arbiter::place_pieces`] sets up an arbitrary position, which is mostly useful for
//!   testing and puzzles.
//!
//! Underneath, the rules are split in the same way as they would be for any tafl variant:
//!
//! - [`rules::Ruleset`]: The few parameters of the game that may be changed. The standard rules
//!   are in [`preset::rules`].
//! - [`game::logic::GameLogic`]: Keeps a copy of the rules and the board geometry, and implements
//!   the logic required to assess the validity and outcome of a given play. It does not keep
//!   information about the current game state, but rather, its methods take a reference to that
//!   state as necessary.
//! - [`game::state::GameState`]: Keeps track of the current state of the game, that is, the
//!   positions of pieces on the board, which side is to play and so on. It is small and `Copy`.
//!
//! # Board state
//!
//! Piece placement is held in [`board::state::Board`] as two 49-bit bitfields (one for attackers,
//! one for defenders) plus the position of the king. The board's shape never changes: the throne
//! is the centre tile and the four corners are the only other special tiles (see
//! [`board::geometry::BoardGeometry`]).
//!
//! Positions can be written in a compact FEN-like form (`"3A3/3A3/3D3/AADRDAA/3D3/3A3/3A3"` is the
//! opening) or as the printed diagram produced by [`board::state::Board::to_display_str`].
//! Individual tiles use algebraic notation, file `a`-`g` and rank `1`-`7`, so the throne is `d4`.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events: rejected plays and captures at `debug` level, the end of a
//! game at `info` level. No subscriber is installed by the library.

/// Miscellaneous utilities used elsewhere in the crate.
#[macro_use]
mod utils;

/// Code for defining game rules.
pub mod rules;

/// Code relating to game pieces.
pub mod pieces;

/// Errors used elsewhere in the crate.
pub mod error;

/// Code for implementing a game, including game logic and state.
pub mod game;

/// Code relating to board tiles and coordinates.
pub mod tiles;

/// An implementation of a bitfield, used to hold board state.
pub mod bitfield;

/// Code relating to "plays" (ie, game moves).
pub mod play;

/// Pre-defined rulesets and board positions.
pub mod preset;

/// Code relating to the board, including board state and geometry.
pub mod board;
