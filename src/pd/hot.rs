//! Hot-region statistics served by PD

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::topology::model::null_as_default;

/// Which hotspot endpoint to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotKind {
    Read,
    Write,
}

impl HotKind {
    pub fn api_path(&self) -> &'static str {
        match self {
            HotKind::Read => "/pd/api/v1/hotspot/regions/read",
            HotKind::Write => "/pd/api/v1/hotspot/regions/write",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HotKind::Read => "read",
            HotKind::Write => "write",
        }
    }
}

impl std::fmt::Display for HotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hot peers per store, keyed by store id as a decimal string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreHotPeersInfos {
    #[serde(default, deserialize_with = "null_as_default")]
    pub as_peer: HashMap<String, HotPeersStat>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub as_leader: HashMap<String, HotPeersStat>,
}

impl StoreHotPeersInfos {
    /// `as_leader` entries with a numeric store id, ascending by id
    pub fn leaders_by_store(&self) -> Vec<(u64, &HotPeersStat)> {
        let mut stores: Vec<(u64, &HotPeersStat)> = self
            .as_leader
            .iter()
            .filter_map(|(id, stat)| match id.parse::<u64>() {
                Ok(id) => Some((id, stat)),
                Err(_) => {
                    tracing::warn!("Skipping hot stats for malformed store id {:?}", id);
                    None
                }
            })
            .collect();
        stores.sort_by_key(|(id, _)| *id);
        stores
    }
}

/// Aggregated hot statistics of one store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotPeersStat {
    #[serde(rename = "total_flow_bytes")]
    pub total_bytes_rate: f64,
    #[serde(rename = "total_flow_keys")]
    pub total_keys_rate: f64,
    #[serde(rename = "total_flow_query")]
    pub total_query_rate: f64,
    #[serde(rename = "regions_count")]
    pub count: usize,
    #[serde(rename = "statistics", deserialize_with = "null_as_default")]
    pub stats: Vec<HotPeerStat>,
}

/// One hot peer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotPeerStat {
    pub store_id: u64,
    pub region_id: u64,
    pub hot_degree: i64,
    #[serde(rename = "flow_bytes")]
    pub byte_rate: f64,
    #[serde(rename = "flow_keys")]
    pub key_rate: f64,
    #[serde(rename = "flow_query")]
    pub query_rate: f64,
    pub anti_count: i64,
    pub last_update_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "as_peer": null,
        "as_leader": {
            "4": {
                "total_flow_bytes": 1024.5,
                "total_flow_keys": 10.0,
                "total_flow_query": 3.25,
                "regions_count": 1,
                "statistics": [{
                    "store_id": 4,
                    "region_id": 12,
                    "hot_degree": 7,
                    "flow_bytes": 1024.5,
                    "flow_keys": 10.0,
                    "flow_query": 3.25,
                    "anti_count": 2,
                    "last_update_time": "2021-06-01T08:00:00Z"
                }]
            },
            "1": {"total_flow_bytes": 0, "regions_count": 0, "statistics": null},
            "x": {}
        }
    }"#;

    #[test]
    fn test_parse_hot_regions() {
        let hot: StoreHotPeersInfos = serde_json::from_str(SAMPLE).unwrap();
        assert!(hot.as_peer.is_empty());
        let stat = &hot.as_leader["4"];
        assert_eq!(stat.count, 1);
        assert_eq!(stat.stats[0].region_id, 12);
        assert_eq!(stat.stats[0].byte_rate, 1024.5);
        assert!(stat.stats[0].last_update_time.is_some());
        assert!(hot.as_leader["1"].stats.is_empty());
    }

    #[test]
    fn test_leaders_by_store_sorted_and_filtered() {
        let hot: StoreHotPeersInfos = serde_json::from_str(SAMPLE).unwrap();
        let ids: Vec<u64> = hot.leaders_by_store().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_api_path() {
        assert_eq!(HotKind::Read.api_path(), "/pd/api/v1/hotspot/regions/read");
        assert_eq!(HotKind::Write.api_path(), "/pd/api/v1/hotspot/regions/write");
        assert_eq!(HotKind::Write.to_string(), "write");
    }
}
