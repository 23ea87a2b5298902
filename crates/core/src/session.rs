//! Session - serialized event processing for one local player
//!
//! Keyboard actions, timer ticks and remote opponent updates all arrive as
//! [`Event`]s on one queue and are handled strictly one at a time, so a tick
//! can never interleave with a half-applied move. Anything the host must do
//! outside the game (talk to the relay) comes back as an [`Effect`].

use std::collections::VecDeque;

use crate::game_state::GameState;
use crate::snapshot::{GameSnapshot, OpponentView};
use crate::types::GameAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Action(GameAction),
    Tick,
    /// Fresh state from the paired opponent
    Opponent(OpponentView),
    OpponentLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The ready flag flipped; the host announces or withdraws the player
    ReadyChanged(bool),
    /// Local state changed and the opponent should see it
    PublishState,
}

#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    opponent: OpponentView,
    ready: bool,
    paired: bool,
    queue: VecDeque<Event>,
    published_revision: Option<u64>,
}

impl Session {
    pub fn new(seed: u32) -> Self {
        Self {
            game: GameState::new(seed),
            opponent: OpponentView::default(),
            ready: false,
            paired: false,
            queue: VecDeque::with_capacity(64),
            published_revision: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[doc(hidden)]
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn opponent(&self) -> &OpponentView {
        &self.opponent
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_paired(&self) -> bool {
        self.paired
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Drain the queue, handling each event to completion.
    ///
    /// Effects are appended to `effects`; at most one `PublishState` is
    /// emitted per call.
    pub fn run_pending(&mut self, effects: &mut Vec<Effect>) {
        while let Some(event) = self.queue.pop_front() {
            self.handle(event, effects);
        }

        if self.ready && self.paired && self.published_revision != Some(self.game.revision()) {
            self.published_revision = Some(self.game.revision());
            effects.push(Effect::PublishState);
        }
    }

    fn handle(&mut self, event: Event, effects: &mut Vec<Effect>) {
        match event {
            Event::Action(GameAction::ToggleReady) => {
                self.ready = !self.ready;
                if !self.ready {
                    self.drop_opponent();
                }
                log::info!("ready: {}", self.ready);
                effects.push(Effect::ReadyChanged(self.ready));
            }
            Event::Action(action) => {
                self.game.apply_action(action);
            }
            Event::Tick => {
                self.game.tick();
            }
            Event::Opponent(view) => {
                if !self.ready {
                    return;
                }
                if !self.paired {
                    log::info!("opponent paired");
                    self.paired = true;
                    // New opponent has not seen us yet.
                    self.published_revision = None;
                }
                self.opponent = view;
            }
            Event::OpponentLeft => {
                if self.paired {
                    log::info!("opponent left");
                }
                self.drop_opponent();
            }
        }
    }

    fn drop_opponent(&mut self) {
        self.paired = false;
        self.opponent = OpponentView::default();
        self.published_revision = None;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        out.opponent = self.opponent;
        out.ready = self.ready;
        out.paired = self.paired;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
