//! Relay server binary.
//!
//! Listens on `DUEL_TETRIS_HOST:DUEL_TETRIS_PORT` and passes player
//! documents between connected games. Logs to stderr (`RUST_LOG`, default
//! `info`).

use anyhow::Result;

use duel_tetris::sync::{run_relay, SyncConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SyncConfig::from_env();
    run_relay(config, None).await?;
    Ok(())
}
