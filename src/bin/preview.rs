//! Board preview tool - renders a saved game snapshot as a text grid
//!
//! Usage: preview <snapshot.json> [local-address]
//!
//! The snapshot is the JSON shape of the contract's `getGame` return
//! value. Passing the local player's address enables the thrust preview
//! gating and seat coloring exactly as the browser UI applies them.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use third_law_client::game::threat::BoardContext;
use third_law_client::panel::{display_color, panel_phase};
use third_law_client::{Address, BoardConfig, BoardView, Game};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = BoardConfig::from_env()?;

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: preview <snapshot.json> [local-address]")?;
    let local_actor = args
        .next()
        .map(|raw| raw.parse::<Address>())
        .transpose()
        .context("local address is not a valid 20-byte hex address")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("could not read snapshot {path}"))?;
    let game: Game =
        serde_json::from_str(&raw).with_context(|| format!("could not decode snapshot {path}"))?;

    info!(game_id = %game.id, status = %game.status, round = game.round, "loaded snapshot");

    let mut ctx = BoardContext::new(Some(&game), config);
    ctx.local_actor = local_actor;
    let view = BoardView::build(&ctx);

    println!("{}", view.render_text());
    println!("Legend: R/B ships  X ship under fire  r/b torpedoes  ! imminent");
    println!("        1/2 predicted ships  + predicted torpedo  * mine  ~ blast");
    println!("        :/% torpedo reach  # asteroid field  . open space");
    println!();
    println!("Game {}  round {}  status: {}", game.id, game.round, game.status);
    if let Some(ship) = game.turn_holder_ship() {
        println!(
            "To move: {} ({} torpedoes, {} mines left)",
            game.current_player, ship.remaining_torpedoes, ship.remaining_mines
        );
    }

    let phase = panel_phase(Some(&game), local_actor, false);
    match display_color(&game, local_actor) {
        Some(color) => println!("You are the {color:?} player. Panel: {phase:?}"),
        None => println!("Spectating. Panel: {phase:?}"),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
