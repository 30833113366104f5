//! Store × region grid
//!
//! Stores become columns (ascending id), regions become rows (ascending
//! decoded start key) and every intersection is classified by the role the
//! store plays for that region. Terminal rendering and sheet export both
//! read this one structure.

use std::collections::HashMap;

use super::width::display_width;
use crate::topology::{decode_key, RegionInfo, StoreInfo, TopologyIndex};

/// Margin added to every label and key column
pub const FIELD_MARGIN: usize = 2;

/// Floor for the shared key column width
pub const MIN_KEY_WIDTH: usize = 6;

/// Role of a store for one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Absent,
    Leader,
    Follower,
    Learner,
}

impl Cell {
    /// The leader check wins over whatever the peer list says for the same
    /// store.
    pub fn classify(region: &RegionInfo, store_id: u64) -> Self {
        if region
            .leader
            .as_ref()
            .is_some_and(|leader| leader.store_id == store_id)
        {
            return Cell::Leader;
        }
        match region.peers.iter().find(|p| p.store_id == store_id) {
            Some(peer) if peer.is_learner => Cell::Learner,
            Some(_) => Cell::Follower,
            None => Cell::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, Cell::Absent)
    }
}

/// Column widths in terminal columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Left gutter holding `R<id>`
    pub label: usize,
    /// One per store column, same order as [`GridLayout::store_ids`]
    pub stores: Vec<usize>,
    /// Shared by the start and end key columns
    pub key: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub region_id: u64,
    /// Decoded boundaries (raw hex when decoding failed)
    pub start_key: String,
    pub end_key: String,
    pub leader_store: Option<u64>,
    pub cells: Vec<Cell>,
}

impl GridRow {
    pub fn label(&self) -> String {
        region_label(self.region_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub store_ids: Vec<u64>,
    pub widths: ColumnWidths,
    pub rows: Vec<GridRow>,
    columns: HashMap<u64, usize>,
}

pub fn store_label(store_id: u64) -> String {
    format!("S{}", store_id)
}

pub fn region_label(region_id: u64) -> String {
    format!("R{}", region_id)
}

impl GridLayout {
    pub fn build(stores: &[StoreInfo], regions: &[RegionInfo]) -> Self {
        Self::build_filtered(stores, regions, None)
    }

    /// Like [`build`](Self::build) but keeps only the listed stores as
    /// columns. Rows are not filtered.
    pub fn build_filtered(
        stores: &[StoreInfo],
        regions: &[RegionInfo],
        only_stores: Option<&[u64]>,
    ) -> Self {
        let kept: Vec<StoreInfo> = match only_stores {
            Some(ids) => stores
                .iter()
                .filter(|s| ids.contains(&s.id()))
                .copied()
                .collect(),
            None => stores.to_vec(),
        };
        let index = TopologyIndex::build(&kept, regions);
        let store_ids = index.store_ids().to_vec();
        let columns = store_ids
            .iter()
            .filter_map(|id| index.column_of(*id).map(|col| (*id, col)))
            .collect();

        let mut rows: Vec<GridRow> = regions
            .iter()
            .map(|region| GridRow {
                region_id: region.id,
                start_key: decode_key(&region.start_key),
                end_key: decode_key(&region.end_key),
                leader_store: region.leader.as_ref().map(|l| l.store_id),
                cells: store_ids
                    .iter()
                    .map(|store_id| Cell::classify(region, *store_id))
                    .collect(),
            })
            .collect();
        rows.sort_by(|a, b| {
            a.start_key
                .cmp(&b.start_key)
                .then(a.region_id.cmp(&b.region_id))
        });

        let widths = ColumnWidths {
            label: rows
                .iter()
                .map(|r| FIELD_MARGIN + display_width(&r.label()))
                .max()
                .unwrap_or(0),
            stores: store_ids
                .iter()
                .map(|id| FIELD_MARGIN + display_width(&store_label(*id)))
                .collect(),
            key: rows
                .iter()
                .flat_map(|r| [&r.start_key, &r.end_key])
                .map(|k| FIELD_MARGIN + display_width(k))
                .fold(MIN_KEY_WIDTH, usize::max),
        };

        tracing::debug!(
            stores = store_ids.len(),
            regions = rows.len(),
            key_width = widths.key,
            "Built region grid"
        );

        Self {
            store_ids,
            widths,
            rows,
            columns,
        }
    }

    pub fn column_of(&self, store_id: u64) -> Option<usize> {
        self.columns.get(&store_id).copied()
    }

    /// Number of present cells per store column
    pub fn peer_counts(&self) -> Vec<usize> {
        (0..self.store_ids.len())
            .map(|col| self.rows.iter().filter(|r| r.cells[col].is_present()).count())
            .collect()
    }
}
