//! Turn action vocabulary and contract encoding
//!
//! The contract's `takeTurn` takes three numeric slots after the game id:
//! horizontal thrust, vertical thrust and deploy choice, each 0/1/2. The
//! encoder is total over all 27 combinations and validates nothing;
//! capacity gating happens upstream via [`Deploy::is_available`].

use serde::{Deserialize, Serialize};

use super::model::{Ship, Vector2};

/// Horizontal acceleration choice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Horizontal {
    #[default]
    None = 0,
    Left = 1,
    Right = 2,
}

impl Horizontal {
    /// Column delta this choice adds to the ship's velocity
    pub fn col_delta(self) -> i64 {
        match self {
            Horizontal::None => 0,
            Horizontal::Left => -1,
            Horizontal::Right => 1,
        }
    }
}

/// Vertical acceleration choice. Up is towards smaller row indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Vertical {
    #[default]
    None = 0,
    Up = 1,
    Down = 2,
}

impl Vertical {
    /// Row delta this choice adds to the ship's velocity
    pub fn row_delta(self) -> i64 {
        match self {
            Vertical::None => 0,
            Vertical::Up => -1,
            Vertical::Down => 1,
        }
    }
}

/// Weapon deploy choice
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Deploy {
    #[default]
    None = 0,
    Torpedo = 1,
    Mine = 2,
}

impl Deploy {
    /// Capacity gate for the UI: a deploy option is offered only while the
    /// ship has stock left. The encoder itself never checks this.
    pub fn is_available(self, ship: Option<&Ship>) -> bool {
        match self {
            Deploy::None => true,
            Deploy::Torpedo => ship.is_some_and(|ship| ship.remaining_torpedoes > 0),
            Deploy::Mine => ship.is_some_and(|ship| ship.remaining_mines > 0),
        }
    }
}

/// A player's complete choice for one turn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAction {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
    pub deploy: Deploy,
}

impl TurnAction {
    /// Encode into the contract's three argument slots, in `takeTurn`
    /// argument order
    pub fn encode(self) -> [u8; 3] {
        [
            self.horizontal as u8,
            self.vertical as u8,
            self.deploy as u8,
        ]
    }

    /// The provisional velocity delta this selection implies, fed to the
    /// predictor as pending thrust
    pub fn thrust(self) -> Vector2 {
        Vector2::new(self.vertical.row_delta(), self.horizontal.col_delta())
    }
}
