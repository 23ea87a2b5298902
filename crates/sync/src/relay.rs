//! Relay server: a tiny document store that broadcasts changes.
//!
//! Every connection gets a fresh UUID and may own at most one document. A
//! `put` replaces it and is broadcast to every other registered connection;
//! `delete` or a disconnect removes it. Newly registered clients receive the
//! full current document set right after `registered`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot, RwLock};
use uuid::Uuid;

use crate::config::SyncConfig;
use crate::error::SyncResult;
use crate::protocol::{decode_line, encode_line, ClientMessage, RelayMessage};
use crate::record::PlayerDoc;

#[derive(Default)]
struct RelayState {
    docs: HashMap<Uuid, PlayerDoc>,
    peers: HashMap<Uuid, mpsc::UnboundedSender<RelayMessage>>,
}

impl RelayState {
    fn broadcast(&self, from: Uuid, msg: &RelayMessage) {
        for (id, tx) in &self.peers {
            if *id != from {
                let _ = tx.send(msg.clone());
            }
        }
    }
}

type Shared = Arc<RwLock<RelayState>>;

/// Bind and serve until the listener fails.
///
/// `ready_tx` receives the bound address once listening, which lets tests
/// bind port 0.
pub async fn run_relay(
    config: SyncConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> SyncResult<()> {
    let listener = TcpListener::bind(config.address()).await?;
    let bound = listener.local_addr()?;
    log::info!("relay listening on {bound}");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let state: Shared = Arc::new(RwLock::new(RelayState::default()));

    loop {
        let (socket, addr) = listener.accept().await?;
        let id = Uuid::new_v4();
        log::info!("client {id} connected from {addr}");

        let state = Arc::clone(&state);
        tokio::spawn(async move {
            if let Err(e) = handle_peer(socket, id, &state).await {
                log::warn!("client {id} error: {e}");
            }
            drop_peer(&state, id).await;
            log::info!("client {id} disconnected");
        });
    }
}

async fn handle_peer(socket: TcpStream, id: Uuid, state: &Shared) -> SyncResult<()> {
    let (reader, mut writer) = socket.into_split();
    let mut reader = BufReader::new(reader);
    let (tx, mut rx) = mpsc::unbounded_channel::<RelayMessage>();

    let write_task = tokio::spawn(async move {
        let mut buf = Vec::with_capacity(1024);
        while let Some(msg) = rx.recv().await {
            if encode_line(&msg, &mut buf).is_err() {
                continue;
            }
            if writer.write_all(&buf).await.is_err() {
                break;
            }
        }
    });

    let mut line = String::new();
    let result = loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break Ok(()),
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
        if line.trim().is_empty() {
            continue;
        }

        let msg: ClientMessage = match decode_line(&line) {
            Ok(msg) => msg,
            Err(e) => {
                log::warn!("client {id} sent a bad line: {e}");
                continue;
            }
        };

        match msg {
            ClientMessage::Register => {
                let mut st = state.write().await;
                if st.peers.contains_key(&id) {
                    continue;
                }
                let _ = tx.send(RelayMessage::Registered { id });
                for (other, doc) in &st.docs {
                    let _ = tx.send(RelayMessage::Changed {
                        id: *other,
                        doc: doc.clone(),
                    });
                }
                st.peers.insert(id, tx.clone());
            }
            ClientMessage::Put { doc } => {
                let mut st = state.write().await;
                if !st.peers.contains_key(&id) {
                    log::warn!("client {id} put before register");
                    continue;
                }
                st.docs.insert(id, doc.clone());
                st.broadcast(id, &RelayMessage::Changed { id, doc });
            }
            ClientMessage::Delete => {
                let mut st = state.write().await;
                if st.docs.remove(&id).is_some() {
                    st.broadcast(id, &RelayMessage::Removed { id });
                }
            }
        }
    };

    drop(tx);
    write_task.abort();
    result
}

async fn drop_peer(state: &Shared, id: Uuid) {
    let mut st = state.write().await;
    st.peers.remove(&id);
    if st.docs.remove(&id).is_some() {
        st.broadcast(id, &RelayMessage::Removed { id });
    }
}
