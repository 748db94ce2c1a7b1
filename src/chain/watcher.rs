//! Polling loop that feeds game snapshots to the pure core
//!
//! The prediction and classification layer takes the latest snapshot as a
//! plain argument and never blocks; this task owns the refresh loop on its
//! behalf. It publishes through a watch channel so consumers always see
//! only the most recent state, and it stops on its own once the game
//! reaches a terminal status.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{info, warn};

use crate::game::model::Game;

use super::{GameId, GameStateSource};

/// Spawn a watcher polling `source` for `game_id` every `poll_interval`.
///
/// Returns the receiver for the latest snapshot (`None` until the first
/// successful read) and the task handle. The task exits when the game
/// turns terminal or every receiver is dropped; read errors are logged
/// and retried on the next tick.
pub fn spawn_game_watcher<S>(
    source: S,
    game_id: GameId,
    poll_interval: Duration,
) -> (watch::Receiver<Option<Game>>, JoinHandle<()>)
where
    S: GameStateSource + 'static,
{
    let (tx, rx) = watch::channel(None);

    let handle = tokio::spawn(async move {
        let mut ticker = interval(poll_interval);

        loop {
            ticker.tick().await;

            match source.get_game(game_id).await {
                Ok(game) => {
                    let terminal = game.status.is_terminal();
                    if tx.send(Some(game)).is_err() {
                        // No receivers left
                        break;
                    }
                    if terminal {
                        info!(%game_id, "game reached terminal status, watcher stopping");
                        break;
                    }
                }
                Err(err) => {
                    warn!(%game_id, error = %err, "game state poll failed");
                }
            }
        }
    });

    (rx, handle)
}
