//! Distance and effect-zone tests
//!
//! Mines threaten a manhattan-distance disc. Torpedoes home one step per
//! turn, so their effect zone is an axis-aligned box around their
//! predicted next position, with half-width equal to the contract's
//! torpedo acceleration.

use super::model::{Mine, Ship, Torpedo, Vector2};
use super::predict::torpedo_next_position;

/// |Δrow| + |Δcol|
pub fn manhattan_distance(a: Vector2, b: Vector2) -> i64 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Is `square` inside the box of the given per-axis half-width around
/// `center`?
pub fn within_box(square: Vector2, center: Vector2, half_width: i64) -> bool {
    (square.row - center.row).abs() <= half_width
        && (square.col - center.col).abs() <= half_width
}

/// Is `square` inside a mine's blast disc? Absent mine never matches.
pub fn within_mine_effect_range(square: Vector2, mine: Option<&Mine>, mine_range: i64) -> bool {
    mine.is_some_and(|mine| manhattan_distance(square, mine.position) <= mine_range)
}

/// Is `square` inside the reachable box of any active torpedo?
pub fn within_torpedo_effect_range(square: Vector2, torpedoes: &[Torpedo], accel: i64) -> bool {
    torpedoes.iter().any(|torpedo| {
        torpedo_next_position(torpedo)
            .is_some_and(|next| within_box(square, next, accel))
    })
}

/// Is `square` close enough to a ship that a torpedo detonating there
/// could reach it? Used to escalate effect-range shading to a warning.
pub fn effect_square_near_ship(square: Vector2, ship: Option<&Ship>, accel: i64) -> bool {
    ship.is_some_and(|ship| within_box(square, ship.position, accel))
}

/// The tighter "imminent threat" test: an active torpedo whose predicted
/// next position lands within `warning_range` on both axes of the ship's
/// current position. Drives a blinking warning only; no gameplay effect.
pub fn torpedo_threatens_ship(
    torpedo: &Torpedo,
    ship_position: Vector2,
    warning_range: i64,
) -> bool {
    torpedo_next_position(torpedo)
        .is_some_and(|next| within_box(ship_position, next, warning_range))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_at(row: i64, col: i64) -> Mine {
        Mine {
            position: Vector2::new(row, col),
            color: None,
        }
    }

    fn torpedo(pos: Vector2, vel: Vector2, fuel: u32) -> Torpedo {
        Torpedo {
            position: pos,
            velocity: vel,
            remaining_fuel: fuel,
        }
    }

    #[test]
    fn manhattan_distance_identity_and_symmetry() {
        let points = [
            Vector2::ZERO,
            Vector2::new(3, -7),
            Vector2::new(-20, 20),
            Vector2::new(1, 1),
        ];
        for p in points {
            assert_eq!(manhattan_distance(p, p), 0);
            for q in points {
                assert_eq!(manhattan_distance(p, q), manhattan_distance(q, p));
            }
        }
    }

    #[test]
    fn mine_range_membership() {
        let mine = mine_at(0, 0);
        let range = 2;

        for inside in [(2, 0), (0, 2), (1, 1), (0, 0), (-2, 0)] {
            assert!(
                within_mine_effect_range(Vector2::new(inside.0, inside.1), Some(&mine), range),
                "{inside:?} should be in range"
            );
        }
        for outside in [(3, 0), (2, 2), (-1, -2)] {
            assert!(
                !within_mine_effect_range(Vector2::new(outside.0, outside.1), Some(&mine), range),
                "{outside:?} should be out of range"
            );
        }
    }

    #[test]
    fn absent_mine_never_matches() {
        assert!(!within_mine_effect_range(Vector2::ZERO, None, 100));
    }

    #[test]
    fn torpedo_effect_box_centers_on_next_position() {
        // Torpedo at (0, 0) moving (2, 2): box is centered on (2, 2)
        let torpedoes = [torpedo(Vector2::ZERO, Vector2::new(2, 2), 3)];

        assert!(within_torpedo_effect_range(Vector2::new(2, 2), &torpedoes, 1));
        assert!(within_torpedo_effect_range(Vector2::new(1, 3), &torpedoes, 1));
        assert!(within_torpedo_effect_range(Vector2::new(3, 1), &torpedoes, 1));
        // Current position is outside the box
        assert!(!within_torpedo_effect_range(Vector2::ZERO, &torpedoes, 1));
        assert!(!within_torpedo_effect_range(Vector2::new(4, 2), &torpedoes, 1));
    }

    #[test]
    fn spent_torpedo_has_no_effect_range() {
        let torpedoes = [torpedo(Vector2::ZERO, Vector2::ZERO, 0)];
        assert!(!within_torpedo_effect_range(Vector2::ZERO, &torpedoes, 5));
        assert!(!torpedo_threatens_ship(&torpedoes[0], Vector2::ZERO, 5));
    }

    #[test]
    fn imminent_threat_uses_predicted_position() {
        // Next position (4, 4); ship sitting one square off on each axis
        let t = torpedo(Vector2::new(3, 3), Vector2::new(1, 1), 2);
        assert!(torpedo_threatens_ship(&t, Vector2::new(5, 5), 1));
        assert!(torpedo_threatens_ship(&t, Vector2::new(4, 4), 1));
        // Too far on the row axis
        assert!(!torpedo_threatens_ship(&t, Vector2::new(6, 4), 1));
        // Current position proximity does not count
        assert!(!torpedo_threatens_ship(&t, Vector2::new(2, 2), 1));
    }
}
