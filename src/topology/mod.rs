//! Cluster topology as reported by PD
//!
//! - Wire records for stores and regions
//! - The block-padded key codec used for region boundaries
//! - Lookup tables from store/region ids

pub mod codec;
pub mod index;
pub mod model;

pub use codec::{decode_key, encode_key};
pub use index::TopologyIndex;
pub use model::{Peer, RegionInfo, RegionsInfo, StoreInfo, StoresInfo};
