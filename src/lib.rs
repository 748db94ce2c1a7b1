//! Third Law Client - client-side mirror of an on-chain space duel
//!
//! The authoritative game state and turn resolution live in a smart
//! contract. This crate handles everything a client needs around that:
//! - Typed models of the game snapshot the contract exposes
//! - One-step position prediction for ships and torpedoes
//! - Per-square threat classification for board rendering
//! - Encoding of a player's turn into the contract's action vocabulary
//! - Polling plumbing that feeds fresh snapshots to the pure core
//!
//! Nothing here resolves a turn. Collisions, fuel, fleeing and win
//! conditions are all decided by the contract; this crate only predicts
//! and presents.

pub mod board;
pub mod chain;
pub mod config;
pub mod game;
pub mod panel;

pub use board::BoardView;
pub use chain::{Address, GameId};
pub use config::BoardConfig;
pub use game::model::{Game, Mine, Ship, Side, SideColor, Status, Torpedo, Vector2};
pub use game::threat::{BoardContext, SquareState};
