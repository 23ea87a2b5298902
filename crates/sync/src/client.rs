//! Runtime bridge between the synchronous game loop and the relay.
//!
//! The game loop never awaits: it hands requests to [`SyncClient::send`] and
//! polls [`SyncClient::try_recv`] once per frame. All socket work happens on
//! the client's own tokio runtime.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::pairing::{Pairing, SyncEvent};
use crate::protocol::{decode_line, encode_line, ClientMessage, RelayMessage};
use crate::record::{PlayerDoc, PlayerRecord};

/// Requests from the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncRequest {
    SetReady(bool),
    Publish(PlayerRecord),
}

pub struct SyncClient {
    _rt: Runtime,
    req_tx: mpsc::UnboundedSender<SyncRequest>,
    event_rx: mpsc::UnboundedReceiver<SyncEvent>,
}

impl SyncClient {
    /// Start the background connection.
    ///
    /// Returns `Ok(None)` when sync is disabled. A relay that cannot be
    /// reached is not an error here: the failure is logged and the client
    /// simply never reports an opponent.
    pub fn start(config: SyncConfig) -> SyncResult<Option<Self>> {
        if config.disabled {
            log::info!("relay sync disabled");
            return Ok(None);
        }

        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let rt = Runtime::new()?;
        rt.spawn(async move {
            if let Err(e) = run_link(config, req_rx, event_tx).await {
                log::warn!("relay unavailable: {e}");
            }
        });

        Ok(Some(Self {
            _rt: rt,
            req_tx,
            event_rx,
        }))
    }

    pub fn send(&self, req: SyncRequest) {
        let _ = self.req_tx.send(req);
    }

    pub fn try_recv(&mut self) -> Option<SyncEvent> {
        self.event_rx.try_recv().ok()
    }
}

/// Connect to the relay and shuttle requests and events until either side
/// goes away.
pub async fn run_link(
    config: SyncConfig,
    mut req_rx: mpsc::UnboundedReceiver<SyncRequest>,
    event_tx: mpsc::UnboundedSender<SyncEvent>,
) -> SyncResult<()> {
    let socket = TcpStream::connect(config.address()).await?;
    log::info!("connected to relay at {}", config.address());
    let (reader, mut writer) = socket.into_split();
    let mut lines = BufReader::new(reader).lines();

    let mut buf = Vec::with_capacity(1024);
    encode_line(&ClientMessage::Register, &mut buf)?;
    writer.write_all(&buf).await?;

    let mut pairing = Pairing::new();
    let mut ready = false;
    let mut latest: Option<PlayerRecord> = None;
    let mut events = Vec::new();

    loop {
        tokio::select! {
            req = req_rx.recv() => {
                let Some(req) = req else {
                    // Game loop is gone.
                    return Ok(());
                };
                let outgoing = match req {
                    SyncRequest::SetReady(true) => {
                        ready = true;
                        pairing.set_ready(true, &mut events);
                        Some(ClientMessage::Put { doc: PlayerDoc::ready(latest.clone()) })
                    }
                    SyncRequest::SetReady(false) => {
                        ready = false;
                        pairing.set_ready(false, &mut events);
                        Some(ClientMessage::Delete)
                    }
                    SyncRequest::Publish(record) => {
                        latest = Some(record);
                        ready.then(|| ClientMessage::Put { doc: PlayerDoc::ready(latest.clone()) })
                    }
                };
                if let Some(msg) = outgoing {
                    encode_line(&msg, &mut buf)?;
                    writer.write_all(&buf).await?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Err(SyncError::Closed);
                };
                if line.trim().is_empty() {
                    continue;
                }
                match decode_line::<RelayMessage>(&line) {
                    Ok(msg) => pairing.handle(msg, &mut events),
                    Err(e) => log::warn!("ignoring relay line: {e}"),
                }
            }
        }

        for event in events.drain(..) {
            if event_tx.send(event).is_err() {
                return Ok(());
            }
        }
    }
}
