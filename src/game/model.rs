//! Game snapshot types mirrored from the contract ABI
//! Field names serialize in the contract's camelCase so JSON fixtures and
//! decoded chain reads share one shape.

use serde::{Deserialize, Serialize};

use crate::chain::{Address, GameId};

/// Integer board coordinate or per-turn delta
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vector2 {
    pub row: i64,
    pub col: i64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { row: 0, col: 0 };

    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl std::ops::Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// Which seat a player occupies in a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Player1, Side::Player2];

    pub fn opponent(self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }

    pub fn color(self) -> SideColor {
        match self {
            Side::Player1 => SideColor::Red,
            Side::Player2 => SideColor::Blue,
        }
    }
}

/// Ownership color used by the UI: player 1 is red, player 2 is blue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideColor {
    Red,
    Blue,
}

/// A torpedo in flight. Inert once its fuel hits zero; every predicate in
/// the crate treats an inert torpedo as absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Torpedo {
    pub position: Vector2,
    pub velocity: Vector2,
    pub remaining_fuel: u32,
}

impl Torpedo {
    pub fn is_active(&self) -> bool {
        self.remaining_fuel > 0
    }
}

/// A stationary mine. Never expires once placed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mine {
    pub position: Vector2,
    /// Ownership coloring hint; absent on older snapshots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<SideColor>,
}

/// One player's ship and its deployed weapons
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub owner_address: Address,
    pub position: Vector2,
    /// Carried turn to turn; changed only by the owner's own thrust
    pub velocity: Vector2,
    pub remaining_torpedoes: u32,
    pub remaining_mines: u32,
    pub torpedoes: Vec<Torpedo>,
    pub mines: Vec<Mine>,
}

impl Ship {
    pub fn is_owned_by(&self, actor: Option<Address>) -> bool {
        actor == Some(self.owner_address)
    }
}

/// Game outcome state. The ordinals are the contract's and must not be
/// reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
#[serde(try_from = "u8", into = "u8")]
pub enum Status {
    NotStarted = 0,
    Player1Destroyed = 1,
    Player2Destroyed = 2,
    Player1Fled = 3,
    Player2Fled = 4,
    Draw = 5,
    Active = 6,
    Over = 7,
}

impl Status {
    /// A terminal game can never be mutated again by either player
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Status::Player1Destroyed
                | Status::Player2Destroyed
                | Status::Player1Fled
                | Status::Player2Fled
                | Status::Draw
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::Player1Destroyed => "Player 1 Destroyed",
            Status::Player2Destroyed => "Player 2 Destroyed",
            Status::Player1Fled => "Player 1 Fled",
            Status::Player2Fled => "Player 2 Fled",
            Status::Draw => "Draw",
            Status::Active => "Active",
            Status::Over => "Over",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Status {
    type Error = UnknownStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Status::NotStarted),
            1 => Ok(Status::Player1Destroyed),
            2 => Ok(Status::Player2Destroyed),
            3 => Ok(Status::Player1Fled),
            4 => Ok(Status::Player2Fled),
            5 => Ok(Status::Draw),
            6 => Ok(Status::Active),
            7 => Ok(Status::Over),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status as u8
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown game status code: {0}")]
pub struct UnknownStatus(pub u8);

/// Snapshot of one game as the contract exposes it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub player1_address: Address,
    pub player2_address: Address,
    /// Absent until the invite is accepted and ships are placed
    #[serde(default)]
    pub player1_ship: Option<Ship>,
    #[serde(default)]
    pub player2_ship: Option<Ship>,
    pub status: Status,
    /// Stake paid to the victor, split on a draw
    pub value: u128,
    /// Zero address while no one's move is pending
    pub current_player: Address,
    pub round: u64,
}

impl Game {
    /// A freshly created, not-yet-accepted game
    pub fn empty(id: GameId) -> Self {
        Self {
            id,
            player1_address: Address::ZERO,
            player2_address: Address::ZERO,
            player1_ship: None,
            player2_ship: None,
            status: Status::NotStarted,
            value: 0,
            current_player: Address::ZERO,
            round: 0,
        }
    }

    pub fn ship(&self, side: Side) -> Option<&Ship> {
        match side {
            Side::Player1 => self.player1_ship.as_ref(),
            Side::Player2 => self.player2_ship.as_ref(),
        }
    }

    pub fn address(&self, side: Side) -> Address {
        match side {
            Side::Player1 => self.player1_address,
            Side::Player2 => self.player2_address,
        }
    }

    /// The player whose move is pending, if any
    pub fn turn_holder(&self) -> Option<Address> {
        if self.current_player.is_zero() {
            None
        } else {
            Some(self.current_player)
        }
    }

    /// Ship of the player whose move is pending
    pub fn turn_holder_ship(&self) -> Option<&Ship> {
        let holder = self.turn_holder()?;
        Side::BOTH
            .into_iter()
            .find(|&side| self.address(side) == holder)
            .and_then(|side| self.ship(side))
    }

    /// Which seat the given actor occupies, if any
    pub fn side_of(&self, actor: Option<Address>) -> Option<Side> {
        let actor = actor?;
        Side::BOTH
            .into_iter()
            .find(|&side| !self.address(side).is_zero() && self.address(side) == actor)
    }

    pub fn is_local_turn(&self, actor: Option<Address>) -> bool {
        actor.is_some() && self.turn_holder() == actor
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
