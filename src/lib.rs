//! Rules engine for the card game Coup.
//!
//! The crate models the turn/action state machine and role-ability resolution
//! only; rendering, input prompting and any "does anyone want to block?"
//! polling belong to the presentation layer, which calls in with fully
//! resolved actor/target/blocker arguments.

mod error;
mod game;

pub use error::GameError;
pub use game::{ArrestOutcome, Game, GameOptions, Player, PlayerId, Role};
