//! Opponent selection from the relay's document stream.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::protocol::RelayMessage;
use crate::record::{PlayerDoc, PlayerRecord};

/// Events delivered to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Latest state of the paired opponent
    Opponent(PlayerRecord),
    /// The opponent withdrew or disconnected
    OpponentLeft,
}

/// Tracks every other player's document and which one we are paired with.
///
/// Pairing only happens while we are ready: the first other document with
/// `ready == true` (in id order) becomes the opponent. Losing it emits
/// `OpponentLeft` and lets the next ready document pair.
#[derive(Debug, Default)]
pub struct Pairing {
    me: Option<Uuid>,
    ready: bool,
    opponent: Option<Uuid>,
    others: BTreeMap<Uuid, PlayerDoc>,
}

impl Pairing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<Uuid> {
        self.me
    }

    pub fn opponent(&self) -> Option<Uuid> {
        self.opponent
    }

    pub fn set_ready(&mut self, ready: bool, out: &mut Vec<SyncEvent>) {
        self.ready = ready;
        if ready {
            self.try_pair(out);
        } else {
            // The session clears its own view when it un-readies.
            self.opponent = None;
        }
    }

    pub fn handle(&mut self, msg: RelayMessage, out: &mut Vec<SyncEvent>) {
        match msg {
            RelayMessage::Registered { id } => {
                log::info!("registered with relay as {id}");
                self.me = Some(id);
                self.others.remove(&id);
            }
            RelayMessage::Changed { id, doc } => {
                if Some(id) == self.me {
                    return;
                }
                let ready = doc.ready;
                let record = doc.record.clone();
                self.others.insert(id, doc);

                if self.opponent == Some(id) {
                    match (ready, record) {
                        (false, _) => self.lose_opponent(out),
                        (true, Some(record)) => out.push(SyncEvent::Opponent(record)),
                        (true, None) => {}
                    }
                } else if self.opponent.is_none() {
                    self.try_pair(out);
                }
            }
            RelayMessage::Removed { id } => {
                self.others.remove(&id);
                if self.opponent == Some(id) {
                    self.lose_opponent(out);
                }
            }
        }
    }

    fn lose_opponent(&mut self, out: &mut Vec<SyncEvent>) {
        if let Some(id) = self.opponent.take() {
            log::info!("opponent {id} left");
        }
        out.push(SyncEvent::OpponentLeft);
        self.try_pair(out);
    }

    fn try_pair(&mut self, out: &mut Vec<SyncEvent>) {
        if !self.ready || self.opponent.is_some() {
            return;
        }
        let Some((&id, doc)) = self.others.iter().find(|(_, doc)| doc.ready) else {
            return;
        };
        log::info!("paired with {id}");
        self.opponent = Some(id);
        out.push(SyncEvent::Opponent(doc.record.clone().unwrap_or_default()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(id: Uuid, ready: bool, score: u32) -> RelayMessage {
        let record = PlayerRecord {
            score,
            ..PlayerRecord::default()
        };
        RelayMessage::Changed {
            id,
            doc: PlayerDoc {
                ready,
                record: Some(record),
            },
        }
    }

    #[test]
    fn not_ready_never_pairs() {
        let mut pairing = Pairing::new();
        let mut out = Vec::new();
        pairing.handle(changed(Uuid::new_v4(), true, 10), &mut out);
        assert!(out.is_empty());
        assert_eq!(pairing.opponent(), None);
    }

    #[test]
    fn becoming_ready_pairs_with_waiting_player() {
        let mut pairing = Pairing::new();
        let mut out = Vec::new();
        let other = Uuid::new_v4();
        pairing.handle(changed(other, true, 10), &mut out);

        pairing.set_ready(true, &mut out);
        assert_eq!(pairing.opponent(), Some(other));
        assert!(matches!(&out[..], [SyncEvent::Opponent(r)] if r.score == 10));
    }

    #[test]
    fn own_document_is_ignored() {
        let mut pairing = Pairing::new();
        let mut out = Vec::new();
        let me = Uuid::new_v4();
        pairing.handle(RelayMessage::Registered { id: me }, &mut out);
        pairing.set_ready(true, &mut out);
        pairing.handle(changed(me, true, 0), &mut out);
        assert!(out.is_empty());
        assert_eq!(pairing.opponent(), None);
    }

    #[test]
    fn removal_hands_over_to_next_ready_player() {
        let mut pairing = Pairing::new();
        let mut out = Vec::new();
        pairing.set_ready(true, &mut out);

        let (a, b) = {
            let x = Uuid::new_v4();
            let y = Uuid::new_v4();
            if x < y {
                (x, y)
            } else {
                (y, x)
            }
        };
        pairing.handle(changed(a, true, 1), &mut out);
        pairing.handle(changed(b, true, 2), &mut out);
        assert_eq!(pairing.opponent(), Some(a));
        out.clear();

        pairing.handle(RelayMessage::Removed { id: a }, &mut out);
        assert_eq!(pairing.opponent(), Some(b));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], SyncEvent::OpponentLeft);
        assert!(matches!(&out[1], SyncEvent::Opponent(r) if r.score == 2));
    }

    #[test]
    fn opponent_unready_counts_as_leaving() {
        let mut pairing = Pairing::new();
        let mut out = Vec::new();
        let other = Uuid::new_v4();
        pairing.set_ready(true, &mut out);
        pairing.handle(changed(other, true, 5), &mut out);
        out.clear();

        pairing.handle(changed(other, false, 5), &mut out);
        assert_eq!(out, vec![SyncEvent::OpponentLeft]);
        assert_eq!(pairing.opponent(), None);
    }
}
