//! Control-panel view model
//!
//! Holds the player's in-progress turn selection and decides which of the
//! four panel states the UI shows. The selection is purely local until
//! submitted; it survives snapshot refreshes and resets once the round
//! advances past it.

use crate::chain::{Address, GameId, TurnCall};
use crate::game::action::{Deploy, Horizontal, TurnAction, Vertical};
use crate::game::model::{Game, Side, SideColor, Status, Vector2};

/// What the control panel shows, decided by early-return branching:
/// no snapshot, finished game, in-flight submission, opponent's move,
/// or ready for input. Input is only accepted in `Ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelPhase {
    /// Snapshot not loaded yet
    Loading,
    /// Game is not (or no longer) playable; shows the outcome
    GameOver(Status),
    /// Local turn submitted, resolution pending
    Processing,
    /// Opponent's move is pending
    WaitingForOpponent,
    /// Local player may select and submit a turn
    Ready,
}

/// Decide the panel phase for the latest snapshot
pub fn panel_phase(
    game: Option<&Game>,
    local_actor: Option<Address>,
    submission_in_flight: bool,
) -> PanelPhase {
    let Some(game) = game else {
        return PanelPhase::Loading;
    };

    if game.is_local_turn(local_actor) && submission_in_flight {
        return PanelPhase::Processing;
    }

    if game.status != Status::Active {
        return PanelPhase::GameOver(game.status);
    }

    if !game.is_local_turn(local_actor) {
        return PanelPhase::WaitingForOpponent;
    }

    PanelPhase::Ready
}

/// Display color for the local player: red seat, blue seat, or neutral
pub fn display_color(game: &Game, local_actor: Option<Address>) -> Option<SideColor> {
    game.side_of(local_actor).map(Side::color)
}

/// The player's uncommitted turn selection
#[derive(Clone, Debug, Default)]
pub struct ControlState {
    action: TurnAction,
    last_seen_round: Option<u64>,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action(&self) -> TurnAction {
        self.action
    }

    /// Velocity delta implied by the current selection, for the predictor
    pub fn pending_thrust(&self) -> Vector2 {
        self.action.thrust()
    }

    pub fn set_horizontal(&mut self, choice: Horizontal) {
        self.action.horizontal = choice;
    }

    pub fn set_vertical(&mut self, choice: Vertical) {
        self.action.vertical = choice;
    }

    /// Select a deploy choice, refusing options the ship has no stock
    /// for. Returns whether the selection was applied.
    pub fn set_deploy(&mut self, choice: Deploy, ship: Option<&crate::game::model::Ship>) -> bool {
        if !choice.is_available(ship) {
            return false;
        }
        self.action.deploy = choice;
        true
    }

    /// Fold in a fresh snapshot. The pending selection is preserved
    /// across refreshes of the same round and cleared once the round
    /// advances (our turn resolved, or the turn changed hands).
    pub fn observe(&mut self, game: &Game) {
        if self.last_seen_round != Some(game.round) {
            if self.last_seen_round.is_some() {
                self.action = TurnAction::default();
            }
            self.last_seen_round = Some(game.round);
        }
    }

    /// Produce the submission payload and clear the selection.
    /// Fire-and-forget: confirmation tracking belongs to the caller.
    pub fn submit(&mut self, game_id: GameId) -> TurnCall {
        let call = TurnCall {
            game_id,
            args: self.action.encode(),
        };
        self.action = TurnAction::default();
        call
    }
}
