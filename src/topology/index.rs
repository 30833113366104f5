//! Lookup tables over one topology snapshot

use std::collections::HashMap;

use super::model::{RegionInfo, StoreInfo};

/// Store id → column, region id → record.
///
/// Columns follow ascending store id so the grid does not depend on the
/// order PD happened to return stores in.
#[derive(Debug, Default)]
pub struct TopologyIndex<'a> {
    store_ids: Vec<u64>,
    columns: HashMap<u64, usize>,
    regions: HashMap<u64, &'a RegionInfo>,
}

impl<'a> TopologyIndex<'a> {
    pub fn build(stores: &[StoreInfo], regions: &'a [RegionInfo]) -> Self {
        let mut store_ids: Vec<u64> = stores.iter().map(StoreInfo::id).collect();
        store_ids.sort_unstable();
        store_ids.dedup();

        let columns = store_ids
            .iter()
            .enumerate()
            .map(|(col, id)| (*id, col))
            .collect();

        // later duplicates overwrite earlier ones
        let regions = regions.iter().map(|r| (r.id, r)).collect();

        Self {
            store_ids,
            columns,
            regions,
        }
    }

    /// Store ids in column order
    pub fn store_ids(&self) -> &[u64] {
        &self.store_ids
    }

    pub fn column_of(&self, store_id: u64) -> Option<usize> {
        self.columns.get(&store_id).copied()
    }

    pub fn region(&self, region_id: u64) -> Option<&'a RegionInfo> {
        self.regions.get(&region_id).copied()
    }

    pub fn store_count(&self) -> usize {
        self.store_ids.len()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}
