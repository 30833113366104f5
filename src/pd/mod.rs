//! Placement Driver (PD) access
//!
//! Fetches the store list, the region list and hotspot statistics as JSON
//! over HTTP.

pub mod client;
pub mod hot;

pub use client::PdClient;
pub use hot::{HotKind, HotPeerStat, HotPeersStat, StoreHotPeersInfos};
