//! Per-square threat classification for rendering
//!
//! One square can satisfy several conditions at once (a ship sitting in a
//! mine's blast disc inside the asteroid field); what the player sees is
//! the single dominant state. The priority order is fixed:
//!
//! ship-occupied > torpedo-in-transit > predicted position (ship, then
//! torpedo) > mine > range shading (hovered mine blast, then torpedo
//! effect box) > asteroid hazard > empty.

use crate::chain::Address;
use crate::config::BoardConfig;

use super::model::{Game, Mine, Side, SideColor, Vector2};
use super::predict::{is_ship_next_position, is_torpedo_next_position};
use super::range::{
    effect_square_near_ship, manhattan_distance, torpedo_threatens_ship,
    within_mine_effect_range, within_torpedo_effect_range,
};

/// Everything needed to classify a square: the latest snapshot plus the
/// purely local view state (identity, uncommitted thrust, hovered mine).
/// The core never reads ambient state; all of it is threaded in here.
#[derive(Clone, Copy, Debug)]
pub struct BoardContext<'a> {
    pub game: Option<&'a Game>,
    pub config: BoardConfig,
    /// Local player's identity, if a wallet is connected
    pub local_actor: Option<Address>,
    /// Thrust currently selected but not yet submitted
    pub pending_thrust: Vector2,
    /// Mine the pointer is hovering over, for blast-radius shading
    pub hovered_mine: Option<&'a Mine>,
}

impl<'a> BoardContext<'a> {
    pub fn new(game: Option<&'a Game>, config: BoardConfig) -> Self {
        Self {
            game,
            config,
            local_actor: None,
            pending_thrust: Vector2::ZERO,
            hovered_mine: None,
        }
    }
}

/// Dominant state of one board square
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareState {
    /// A ship is here; `under_torpedo_fire` when an active enemy torpedo
    /// shares the square
    Ship { side: Side, under_torpedo_fire: bool },
    /// An active torpedo is here; `imminent` when its predicted next
    /// position closes on the enemy ship
    Torpedo { side: Side, imminent: bool },
    /// A ship is predicted to be here next turn
    ShipNext { side: Side },
    /// An active torpedo is predicted to be here next turn
    TorpedoNext { side: Side },
    /// A mine sits here
    Mine { side: Side },
    /// Inside the hovered mine's blast disc
    MineBlast { color: SideColor },
    /// Inside an active torpedo's reachable box; `over_ship` when the
    /// square is also within torpedo reach of the enemy ship
    TorpedoRange { side: Side, over_ship: bool },
    /// Inside the central asteroid field
    Asteroid,
    Empty,
}

/// Classify one square against the latest snapshot.
/// Total over every input: missing game, ships, torpedoes or mines all
/// fall through to the lower-priority states.
pub fn classify_square(square: Vector2, ctx: &BoardContext<'_>) -> SquareState {
    let config = &ctx.config;

    if let Some(game) = ctx.game {
        // Ship occupied, torpedo strike shown on top of the ship
        for side in Side::BOTH {
            let Some(ship) = game.ship(side) else { continue };
            if ship.position != square {
                continue;
            }
            let under_torpedo_fire = game
                .ship(side.opponent())
                .is_some_and(|enemy| {
                    enemy
                        .torpedoes
                        .iter()
                        .any(|t| t.is_active() && t.position == square)
                });
            return SquareState::Ship {
                side,
                under_torpedo_fire,
            };
        }

        // Torpedo in transit
        for side in Side::BOTH {
            let Some(ship) = game.ship(side) else { continue };
            let enemy_position = game.ship(side.opponent()).map(|enemy| enemy.position);
            let here = ship
                .torpedoes
                .iter()
                .find(|t| t.is_active() && t.position == square);
            if let Some(torpedo) = here {
                let imminent = enemy_position.is_some_and(|position| {
                    torpedo_threatens_ship(torpedo, position, config.torpedo_warning_range)
                });
                return SquareState::Torpedo { side, imminent };
            }
        }

        // Predicted ship positions; pending thrust previews only the
        // local player's own ship
        for side in Side::BOTH {
            if is_ship_next_position(
                square,
                game.ship(side),
                ctx.local_actor,
                ctx.pending_thrust,
            ) {
                return SquareState::ShipNext { side };
            }
        }

        // Predicted torpedo positions
        for side in Side::BOTH {
            let Some(ship) = game.ship(side) else { continue };
            if is_torpedo_next_position(square, &ship.torpedoes) {
                return SquareState::TorpedoNext { side };
            }
        }

        // Mines
        for side in Side::BOTH {
            let Some(ship) = game.ship(side) else { continue };
            if ship.mines.iter().any(|mine| mine.position == square) {
                return SquareState::Mine { side };
            }
        }

        // Blast disc of the hovered mine
        if within_mine_effect_range(square, ctx.hovered_mine, config.mine_range) {
            let color = ctx
                .hovered_mine
                .and_then(|mine| mine.color)
                .unwrap_or(SideColor::Blue);
            return SquareState::MineBlast { color };
        }

        // Torpedo effect boxes
        for side in Side::BOTH {
            let Some(ship) = game.ship(side) else { continue };
            if within_torpedo_effect_range(square, &ship.torpedoes, config.torpedo_accel) {
                let over_ship = effect_square_near_ship(
                    square,
                    game.ship(side.opponent()),
                    config.torpedo_accel,
                );
                return SquareState::TorpedoRange { side, over_ship };
            }
        }
    }

    if manhattan_distance(square, Vector2::ZERO) <= config.asteroid_radius {
        SquareState::Asteroid
    } else {
        SquareState::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::GameId;
    use crate::game::model::{Ship, Status, Torpedo};

    fn addr(last_byte: u8) -> Address {
        let mut hex = String::from("0x");
        hex.push_str(&"00".repeat(19));
        hex.push_str(&format!("{last_byte:02x}"));
        hex.parse().unwrap()
    }

    fn ship(owner: Address, row: i64, col: i64) -> Ship {
        Ship {
            owner_address: owner,
            position: Vector2::new(row, col),
            velocity: Vector2::ZERO,
            remaining_torpedoes: 2,
            remaining_mines: 2,
            torpedoes: Vec::new(),
            mines: Vec::new(),
        }
    }

    fn two_player_game() -> Game {
        let mut game = Game::empty(GameId(1));
        game.status = Status::Active;
        game.player1_address = addr(1);
        game.player2_address = addr(2);
        game.player1_ship = Some(ship(addr(1), -15, -15));
        game.player2_ship = Some(ship(addr(2), 15, 15));
        game.current_player = addr(1);
        game
    }

    #[test]
    fn empty_board_shows_asteroid_field_and_space() {
        let config = BoardConfig::default();
        let ctx = BoardContext::new(None, config);

        assert_eq!(classify_square(Vector2::ZERO, &ctx), SquareState::Asteroid);
        assert_eq!(
            classify_square(Vector2::new(5, 5), &ctx),
            SquareState::Asteroid
        );
        assert_eq!(
            classify_square(Vector2::new(5, 6), &ctx),
            SquareState::Empty
        );
    }

    #[test]
    fn ship_square_dominates_asteroid_field() {
        let mut game = two_player_game();
        game.player1_ship.as_mut().unwrap().position = Vector2::new(1, 1);
        let ctx = BoardContext::new(Some(&game), BoardConfig::default());

        assert_eq!(
            classify_square(Vector2::new(1, 1), &ctx),
            SquareState::Ship {
                side: Side::Player1,
                under_torpedo_fire: false
            }
        );
    }

    #[test]
    fn ship_sharing_square_with_enemy_torpedo_shows_the_strike() {
        let mut game = two_player_game();
        let target = Vector2::new(15, 15);
        game.player1_ship.as_mut().unwrap().torpedoes.push(Torpedo {
            position: target,
            velocity: Vector2::ZERO,
            remaining_fuel: 3,
        });
        let ctx = BoardContext::new(Some(&game), BoardConfig::default());

        assert_eq!(
            classify_square(target, &ctx),
            SquareState::Ship {
                side: Side::Player2,
                under_torpedo_fire: true
            }
        );
    }

    #[test]
    fn spent_torpedo_on_ship_square_is_not_a_strike() {
        let mut game = two_player_game();
        let target = Vector2::new(15, 15);
        game.player1_ship.as_mut().unwrap().torpedoes.push(Torpedo {
            position: target,
            velocity: Vector2::ZERO,
            remaining_fuel: 0,
        });
        let ctx = BoardContext::new(Some(&game), BoardConfig::default());

        assert_eq!(
            classify_square(target, &ctx),
            SquareState::Ship {
                side: Side::Player2,
                under_torpedo_fire: false
            }
        );
    }

    #[test]
    fn active_torpedo_in_open_space() {
        let mut game = two_player_game();
        game.player1_ship.as_mut().unwrap().torpedoes.push(Torpedo {
            position: Vector2::new(-12, 14),
            velocity: Vector2::new(1, 0),
            remaining_fuel: 4,
        });
        let ctx = BoardContext::new(Some(&game), BoardConfig::default());

        assert_eq!(
            classify_square(Vector2::new(-12, 14), &ctx),
            SquareState::Torpedo {
                side: Side::Player1,
                imminent: false
            }
        );
    }

    #[test]
    fn torpedo_closing_on_enemy_ship_is_imminent() {
        let mut game = two_player_game();
        // Player 2 sits at (15, 15); torpedo predicted to land at (14, 15)
        game.player1_ship.as_mut().unwrap().torpedoes.push(Torpedo {
            position: Vector2::new(12, 15),
            velocity: Vector2::new(2, 0),
            remaining_fuel: 4,
        });
        let ctx = BoardContext::new(Some(&game), BoardConfig::default());

        assert_eq!(
            classify_square(Vector2::new(12, 15), &ctx),
            SquareState::Torpedo {
                side: Side::Player1,
                imminent: true
            }
        );
    }

    #[test]
    fn spent_torpedo_square_falls_through() {
        let mut game = two_player_game();
        game.player1_ship.as_mut().unwrap().torpedoes.push(Torpedo {
            position: Vector2::new(-12, 14),
            velocity: Vector2::new(1, 0),
            remaining_fuel: 0,
        });
        let ctx = BoardContext::new(Some(&game), BoardConfig::default());

        assert_eq!(
            classify_square(Vector2::new(-12, 14), &ctx),
            SquareState::Empty
        );
    }

    #[test]
    fn predicted_ship_position_outranks_mine() {
        let mut game = two_player_game();
        let square = Vector2::new(-14, -15);
        // Player 1 drifting down one row into a square player 2 mined
        game.player1_ship.as_mut().unwrap().velocity = Vector2::new(1, 0);
        game.player2_ship.as_mut().unwrap().mines.push(Mine {
            position: square,
            color: Some(SideColor::Blue),
        });
        let ctx = BoardContext::new(Some(&game), BoardConfig::default());

        assert_eq!(
            classify_square(square, &ctx),
            SquareState::ShipNext {
                side: Side::Player1
            }
        );
    }

    #[test]
    fn pending_thrust_moves_only_the_local_ship_preview() {
        let mut game = two_player_game();
        game.player1_ship.as_mut().unwrap().velocity = Vector2::new(1, 0);
        let mut ctx = BoardContext::new(Some(&game), BoardConfig::default());
        ctx.local_actor = Some(addr(1));
        ctx.pending_thrust = Vector2::new(0, 1);

        // Local ship previews velocity + thrust
        assert_eq!(
            classify_square(Vector2::new(-14, -14), &ctx),
            SquareState::ShipNext {
                side: Side::Player1
            }
        );
        // Enemy ship preview ignores the local pending thrust
        assert_eq!(
            classify_square(Vector2::new(15, 16), &ctx),
            SquareState::Empty
        );
        assert_eq!(
            classify_square(Vector2::new(15, 15), &ctx),
            SquareState::Ship {
                side: Side::Player2,
                under_torpedo_fire: false
            }
        );
    }

    #[test]
    fn hovered_mine_shades_its_blast_disc() {
        let mut game = two_player_game();
        let mine = Mine {
            position: Vector2::new(-15, 15),
            color: Some(SideColor::Red),
        };
        game.player1_ship.as_mut().unwrap().mines.push(mine.clone());
        let mut ctx = BoardContext::new(Some(&game), BoardConfig::default());
        ctx.hovered_mine = Some(&mine);

        // The mine square itself still renders as a mine
        assert_eq!(
            classify_square(Vector2::new(-15, 15), &ctx),
            SquareState::Mine {
                side: Side::Player1
            }
        );
        // Distance 2 is inside the default blast disc
        assert_eq!(
            classify_square(Vector2::new(-14, 16), &ctx),
            SquareState::MineBlast {
                color: SideColor::Red
            }
        );
        // Distance 3 is outside
        assert_eq!(
            classify_square(Vector2::new(-13, 16), &ctx),
            SquareState::Empty
        );
    }

    #[test]
    fn torpedo_effect_box_shades_and_escalates_over_enemy_ship() {
        let mut game = two_player_game();
        // Torpedo predicted next position (14, 14); default accel 1 box
        // covers (13..=15, 13..=15), overlapping player 2 at (15, 15)
        game.player1_ship.as_mut().unwrap().torpedoes.push(Torpedo {
            position: Vector2::new(13, 13),
            velocity: Vector2::new(1, 1),
            remaining_fuel: 2,
        });
        let ctx = BoardContext::new(Some(&game), BoardConfig::default());

        assert_eq!(
            classify_square(Vector2::new(13, 14), &ctx),
            SquareState::TorpedoRange {
                side: Side::Player1,
                over_ship: false
            }
        );
        assert_eq!(
            classify_square(Vector2::new(15, 14), &ctx),
            SquareState::TorpedoRange {
                side: Side::Player1,
                over_ship: true
            }
        );
        // The box center itself is the predicted torpedo square
        assert_eq!(
            classify_square(Vector2::new(14, 14), &ctx),
            SquareState::TorpedoNext {
                side: Side::Player1
            }
        );
    }
}
