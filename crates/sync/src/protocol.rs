//! Relay wire protocol: one JSON object per line, tagged by `type`.
//!
//! ```text
//! client -> relay   {"type":"register"}
//!                   {"type":"put","doc":{...}}
//!                   {"type":"delete"}
//! relay -> client   {"type":"registered","id":"<uuid>"}
//!                   {"type":"changed","id":"<uuid>","doc":{...}}
//!                   {"type":"removed","id":"<uuid>"}
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SyncResult;
use crate::record::PlayerDoc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Register,
    /// Create or replace this connection's document
    Put { doc: PlayerDoc },
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayMessage {
    Registered { id: Uuid },
    Changed { id: Uuid, doc: PlayerDoc },
    Removed { id: Uuid },
}

/// Serialize into `buf` followed by a newline.
pub fn encode_line<T: Serialize>(msg: &T, buf: &mut Vec<u8>) -> SyncResult<()> {
    buf.clear();
    serde_json::to_writer(&mut *buf, msg)?;
    buf.push(b'\n');
    Ok(())
}

pub fn decode_line<T: DeserializeOwned>(line: &str) -> SyncResult<T> {
    Ok(serde_json::from_str(line.trim())?)
}
