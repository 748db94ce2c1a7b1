//! Chain collaborator interfaces
//!
//! The contract is read and written through the two traits here; the rest
//! of the crate never talks to a wallet or an RPC endpoint directly. A
//! concrete implementation (RPC client, test stub) lives with the caller.

pub mod watcher;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::game::model::Game;

pub use watcher::spawn_game_watcher;

/// A 20-byte chain address identifying a player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address([u8; 20]);

impl Address {
    /// The zero address, used by the contract as "no player"
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|_| AddressError::InvalidHex)?;
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| AddressError::WrongLength)?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.to_string()
    }
}

/// Address parsing errors
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("Address is not valid hex")]
    InvalidHex,

    #[error("Address must be exactly 20 bytes")]
    WrongLength,
}

/// Identifier of a game on the contract
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One encoded turn, ready to hand to the transaction collaborator.
/// Argument order matches the contract's `takeTurn(gameId, horizontal,
/// vertical, deploy)` signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCall {
    pub game_id: GameId,
    pub args: [u8; 3],
}

/// Errors surfaced by chain collaborators
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Chain read failed: {0}")]
    Read(String),

    #[error("Game {0} not found")]
    NotFound(GameId),

    #[error("Could not decode game state: {0}")]
    Decode(String),

    #[error("Transaction submission failed: {0}")]
    Submit(String),
}

/// Read side of the contract: fetch the current snapshot of a game
pub trait GameStateSource: Send + Sync {
    fn get_game(&self, id: GameId) -> impl Future<Output = Result<Game, SourceError>> + Send;
}

/// Write side of the contract: submit one resolved turn.
/// Fire-and-forget from the core's perspective; confirmation tracking is
/// the implementor's business.
pub trait TurnSubmitter: Send + Sync {
    fn take_turn(&self, call: TurnCall) -> impl Future<Output = Result<(), SourceError>> + Send;
}
