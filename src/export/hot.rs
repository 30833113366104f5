//! Hot-region sheet
//!
//! One row per hot leader peer, with the same store presence markers as the
//! region sheet, the flow metrics in the read or write triple, and three
//! trailing rows of per-store totals.

use std::collections::HashMap;

use super::sheet::Sheet;
use crate::grid::{GridLayout, GridRow};
use crate::pd::{HotKind, StoreHotPeersInfos};

pub const METRIC_COLUMNS: [&str; 6] = [
    "read_bytes",
    "read_keys",
    "read_qps",
    "write_bytes",
    "write_keys",
    "write_qps",
];

pub const TOTAL_ROWS: [&str; 3] = ["total_bytes", "total_keys", "total_qps"];

/// Column positions derived from the store count
#[derive(Debug, Clone, Copy)]
struct Columns {
    leader: usize,
    metrics: usize,
    start_key: usize,
    end_key: usize,
}

impl Columns {
    fn new(stores: usize) -> Self {
        let leader = stores + 1;
        let metrics = leader + 1;
        let start_key = metrics + METRIC_COLUMNS.len();
        Self {
            leader,
            metrics,
            start_key,
            end_key: start_key + 1,
        }
    }

    fn metric(&self, kind: HotKind) -> usize {
        match kind {
            HotKind::Read => self.metrics,
            HotKind::Write => self.metrics + 3,
        }
    }
}

/// Summary of a built hot sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotSheetStats {
    pub hot_regions: usize,
    /// Hot stats whose region was not in the region list
    pub unknown_regions: usize,
}

pub fn hot_sheet(
    grid: &GridLayout,
    hot: &StoreHotPeersInfos,
    kind: HotKind,
) -> (Sheet, HotSheetStats) {
    let mut sheet = Sheet::new(format!("hot-{}", kind));
    let mut stats = HotSheetStats::default();
    let cols = Columns::new(grid.store_ids.len());
    let rows: HashMap<u64, &GridRow> = grid.rows.iter().map(|r| (r.region_id, r)).collect();

    sheet.set(0, 0, "region");
    for (col, store_id) in grid.store_ids.iter().enumerate() {
        sheet.set(0, col + 1, *store_id);
    }
    sheet.set(0, cols.leader, "leader");
    for (offset, title) in METRIC_COLUMNS.into_iter().enumerate() {
        sheet.set(0, cols.metrics + offset, title);
    }
    sheet.set(0, cols.start_key, "start_key");
    sheet.set(0, cols.end_key, "end_key");

    let leaders = hot.leaders_by_store();
    let mut r = 0;
    for (store_id, store) in &leaders {
        for peer in &store.stats {
            r += 1;
            stats.hot_regions += 1;
            sheet.set(r, 0, peer.region_id);
            sheet.set(r, cols.leader, *store_id);
            let metric_col = cols.metric(kind);
            for (offset, value) in [peer.byte_rate, peer.key_rate, peer.query_rate]
                .into_iter()
                .enumerate()
            {
                sheet.set(r, metric_col + offset, value);
            }

            match rows.get(&peer.region_id) {
                Some(row) => {
                    for (col, cell) in row.cells.iter().enumerate() {
                        if cell.is_present() {
                            sheet.set(r, col + 1, 1u64);
                        }
                    }
                    sheet.set(r, cols.start_key, row.start_key.as_str());
                    sheet.set(r, cols.end_key, row.end_key.as_str());
                }
                None => {
                    stats.unknown_regions += 1;
                    tracing::warn!(
                        "Hot region {} on store {} is missing from the region list",
                        peer.region_id,
                        store_id
                    );
                }
            }
        }
    }

    for (offset, title) in TOTAL_ROWS.into_iter().enumerate() {
        let row = r + 1 + offset;
        sheet.set(row, 0, title);
        for (store_id, store) in &leaders {
            let Some(col) = grid.column_of(*store_id) else {
                continue;
            };
            let total = match offset {
                0 => store.total_bytes_rate,
                1 => store.total_keys_rate,
                _ => store.total_query_rate,
            };
            sheet.set(row, col + 1, total);
        }
    }

    (sheet, stats)
}
