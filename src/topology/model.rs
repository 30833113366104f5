//! Store and region records as served by the PD HTTP API

use serde::{Deserialize, Deserializer, Serialize};

/// A replica of a region hosted on one store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub id: u64,
    pub store_id: u64,
    pub is_learner: bool,
}

impl Peer {
    pub fn new(id: u64, store_id: u64) -> Self {
        Self {
            id,
            store_id,
            is_learner: false,
        }
    }

    pub fn learner(id: u64, store_id: u64) -> Self {
        Self {
            id,
            store_id,
            is_learner: true,
        }
    }
}

/// A contiguous key range; keys are hex encoded on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    pub id: u64,
    #[serde(default)]
    pub start_key: String,
    #[serde(default)]
    pub end_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub peers: Vec<Peer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<Peer>,
}

impl RegionInfo {
    pub fn new(id: u64, start_key: impl Into<String>, end_key: impl Into<String>) -> Self {
        Self {
            id,
            start_key: start_key.into(),
            end_key: end_key.into(),
            ..Default::default()
        }
    }

    pub fn with_peers(mut self, peers: Vec<Peer>) -> Self {
        self.peers = peers;
        self
    }

    pub fn with_leader(mut self, leader: Peer) -> Self {
        self.leader = Some(leader);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionsInfo {
    #[serde(default)]
    pub count: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<RegionInfo>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMeta {
    pub id: u64,
}

/// A node hosting region replicas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub store: StoreMeta,
}

impl StoreInfo {
    pub fn new(id: u64) -> Self {
        Self {
            store: StoreMeta { id },
        }
    }

    pub fn id(&self) -> u64 {
        self.store.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoresInfo {
    #[serde(default)]
    pub count: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stores: Vec<StoreInfo>,
}

/// PD serializes empty lists as `null`
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_regions() {
        let json = r#"{
            "count": 2,
            "regions": [
                {
                    "id": 2,
                    "start_key": "",
                    "end_key": "7480000000000000ff0500000000000000f8",
                    "peers": [{"id": 3, "store_id": 1}, {"id": 7, "store_id": 4, "is_learner": true}],
                    "leader": {"id": 3, "store_id": 1}
                },
                {"id": 9, "start_key": "7480000000000000ff0500000000000000f8", "end_key": ""}
            ]
        }"#;
        let info: RegionsInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.count, 2);
        assert_eq!(info.regions[0].peers[1], Peer::learner(7, 4));
        assert_eq!(info.regions[0].leader, Some(Peer::new(3, 1)));
        assert!(info.regions[1].peers.is_empty());
        assert!(info.regions[1].leader.is_none());
    }

    #[test]
    fn test_null_lists() {
        let info: RegionsInfo = serde_json::from_str(r#"{"count": 0, "regions": null}"#).unwrap();
        assert!(info.regions.is_empty());

        let info: RegionInfo =
            serde_json::from_str(r#"{"id": 1, "start_key": "", "end_key": "", "peers": null}"#)
                .unwrap();
        assert!(info.peers.is_empty());

        let stores: StoresInfo = serde_json::from_str(r#"{"stores": null}"#).unwrap();
        assert!(stores.stores.is_empty());
    }

    #[test]
    fn test_parse_stores() {
        let json = r#"{"count": 2, "stores": [
            {"store": {"id": 5, "address": "tikv-5:20160"}, "status": {}},
            {"store": {"id": 1}}
        ]}"#;
        let stores: StoresInfo = serde_json::from_str(json).unwrap();
        let ids: Vec<u64> = stores.stores.iter().map(StoreInfo::id).collect();
        assert_eq!(ids, vec![5, 1]);
    }
}
