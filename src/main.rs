//! Terminal duel runner (default binary).
//!
//! One loop owns the session: it turns key presses into actions, adds a tick
//! every 10ms, feeds in opponent updates from the relay, runs the queued
//! events and draws the result.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event as TermEvent};

use duel_tetris::core::{Effect, Event, GameSnapshot, Session};
use duel_tetris::input::{handle_key_event, should_quit};
use duel_tetris::sync::{PlayerRecord, SyncClient, SyncConfig, SyncEvent, SyncRequest};
use duel_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use duel_tetris::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let seed = seed_from_env();
    log::info!("starting with seed {seed}");

    let sync = match SyncClient::start(SyncConfig::from_env()) {
        Ok(client) => client,
        Err(e) => {
            log::warn!("sync unavailable: {e}");
            None
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Session::new(seed), sync);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to `DUEL_TETRIS_LOG_PATH` if set; the terminal itself is in raw mode.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("DUEL_TETRIS_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_env() -> u32 {
    std::env::var("DUEL_TETRIS_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
}

fn run(
    term: &mut TerminalRenderer,
    mut session: Session,
    mut sync: Option<SyncClient>,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut effects = Vec::new();

    let tick = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                TermEvent::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.push(Event::Action(action));
                    }
                }
                TermEvent::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Catch up on every elapsed tick so gravity keeps wall-clock pace.
        while last_tick.elapsed() >= tick {
            last_tick += tick;
            session.push(Event::Tick);
        }

        if let Some(client) = sync.as_mut() {
            while let Some(ev) = client.try_recv() {
                match ev {
                    SyncEvent::Opponent(record) => match record.to_opponent() {
                        Ok(view) => session.push(Event::Opponent(view)),
                        Err(e) => log::warn!("dropping opponent update: {e}"),
                    },
                    SyncEvent::OpponentLeft => session.push(Event::OpponentLeft),
                }
            }
        }

        effects.clear();
        session.run_pending(&mut effects);
        if let Some(client) = sync.as_ref() {
            for effect in &effects {
                match *effect {
                    Effect::ReadyChanged(ready) => client.send(SyncRequest::SetReady(ready)),
                    Effect::PublishState => {
                        let record = PlayerRecord::from_game(session.game());
                        client.send(SyncRequest::Publish(record));
                    }
                }
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }
}
