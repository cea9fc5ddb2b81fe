//! Mastermind: break a secret code of colored pegs within ten guesses.
//!
//! The game is split up roughly leaf to root:
//!
//! - [`geometry`] draws the circles the board is made of.
//! - [`code`] makes secrets and scores guesses against them.
//! - [`layout`] knows where everything is on screen, and which peg a click landed on.
//! - [`state`] is the state machine: home screen, rules, the board, and the two ways a game ends.
//! - [`input`] turns clicks and keypresses into moves in that state machine.
//! - [`render`] draws whichever screen is up, purely from the state.
//! - [`app`] ties all that to a [`mastermind_iosys::IoSystem`].
//!
//! Everything platform-specific lives in `mastermind-iosys`, so the whole game can be driven headless.

pub mod app;
pub mod assets;
pub mod code;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;
pub mod state;

mod error;

pub use error::{Error, Result};
