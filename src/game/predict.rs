//! One-step next-position prediction
//!
//! Ships integrate velocity once per turn; the locally selected thrust is
//! folded in as a preview before it is ever submitted. Torpedoes integrate
//! velocity too but take no direct input. Everything here is exact
//! integer arithmetic: same inputs, same outputs.

use crate::chain::Address;

use super::model::{Ship, Torpedo, Vector2};

/// Predict where a ship ends up after the next resolution.
///
/// `pending_thrust` is the not-yet-submitted acceleration the local player
/// is currently selecting. It applies only to the local player's own ship;
/// for every other ship the prediction is position + velocity alone.
pub fn ship_next_position(
    ship: &Ship,
    local_actor: Option<Address>,
    pending_thrust: Vector2,
) -> Vector2 {
    let thrust = if ship.is_owned_by(local_actor) {
        pending_thrust
    } else {
        Vector2::ZERO
    };
    ship.position + ship.velocity + thrust
}

/// Predict where an active torpedo ends up after the next resolution.
/// A spent torpedo has no next position.
pub fn torpedo_next_position(torpedo: &Torpedo) -> Option<Vector2> {
    torpedo
        .is_active()
        .then(|| torpedo.position + torpedo.velocity)
}

/// Does `square` match a ship's predicted next position? Absent ship
/// never matches.
pub fn is_ship_next_position(
    square: Vector2,
    ship: Option<&Ship>,
    local_actor: Option<Address>,
    pending_thrust: Vector2,
) -> bool {
    ship.is_some_and(|ship| ship_next_position(ship, local_actor, pending_thrust) == square)
}

/// Does `square` match any active torpedo's predicted next position?
pub fn is_torpedo_next_position(square: Vector2, torpedoes: &[Torpedo]) -> bool {
    torpedoes
        .iter()
        .any(|torpedo| torpedo_next_position(torpedo) == Some(square))
}
