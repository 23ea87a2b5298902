//! Two-player synchronization through a line-based JSON relay.
//!
//! Each player publishes a [`PlayerDoc`] (ready flag plus a [`PlayerRecord`]
//! of board, score and level) to the relay, which fans changes out to every
//! other connection. [`Pairing`] picks the opponent from that stream and
//! [`SyncClient`] bridges it all to the synchronous game loop.

pub mod client;
pub mod config;
pub mod error;
pub mod pairing;
pub mod protocol;
pub mod record;
pub mod relay;

pub use client::{run_link, SyncClient, SyncRequest};
pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use pairing::{Pairing, SyncEvent};
pub use protocol::{ClientMessage, RelayMessage};
pub use record::{PlayerDoc, PlayerRecord};
pub use relay::run_relay;
