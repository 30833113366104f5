//! Region distribution sheet

use super::sheet::Sheet;
use crate::grid::GridLayout;

pub const SHEET_NAME: &str = "region";

/// Header row: `region`, one column per store id, then `leader`,
/// `start_key`, `end_key`. One row per grid row, same order; a present
/// peer is marked with `1`.
pub fn region_sheet(grid: &GridLayout) -> Sheet {
    let mut sheet = Sheet::new(SHEET_NAME);
    let stores = grid.store_ids.len();
    let leader_col = stores + 1;

    sheet.set(0, 0, "region");
    for (col, store_id) in grid.store_ids.iter().enumerate() {
        sheet.set(0, col + 1, *store_id);
    }
    for (offset, title) in ["leader", "start_key", "end_key"].into_iter().enumerate() {
        sheet.set(0, leader_col + offset, title);
    }

    for (i, row) in grid.rows.iter().enumerate() {
        let r = i + 1;
        sheet.set(r, 0, row.region_id);
        for (col, cell) in row.cells.iter().enumerate() {
            if cell.is_present() {
                sheet.set(r, col + 1, 1u64);
            }
        }
        if let Some(leader) = row.leader_store {
            sheet.set(r, leader_col, leader);
        }
        sheet.set(r, leader_col + 1, row.start_key.as_str());
        sheet.set(r, leader_col + 2, row.end_key.as_str());
    }

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::CellValue;
    use crate::topology::{encode_key, Peer, RegionInfo, StoreInfo};

    #[test]
    fn test_region_sheet_layout() {
        let stores = vec![StoreInfo::new(2), StoreInfo::new(1)];
        let regions = vec![
            RegionInfo::new(8, encode_key(b"m"), "")
                .with_peers(vec![Peer::new(1, 2)])
                .with_leader(Peer::new(1, 2)),
            RegionInfo::new(5, "", encode_key(b"m"))
                .with_peers(vec![Peer::new(2, 1), Peer::learner(3, 2)]),
        ];
        let sheet = region_sheet(&GridLayout::build(&stores, &regions));

        assert_eq!(sheet.dimensions(), (3, 6));
        assert_eq!(sheet.get(0, 1), Some(&CellValue::UInt(1)));
        assert_eq!(sheet.get(0, 2), Some(&CellValue::UInt(2)));
        assert_eq!(sheet.get(0, 3), Some(&CellValue::from("leader")));

        // region 5 sorts first: empty start key
        assert_eq!(sheet.get(1, 0), Some(&CellValue::UInt(5)));
        assert_eq!(sheet.get(1, 1), Some(&CellValue::UInt(1)));
        assert_eq!(sheet.get(1, 2), Some(&CellValue::UInt(1)));
        assert_eq!(sheet.get(1, 3), None);
        assert_eq!(sheet.get(1, 5), Some(&CellValue::from("6D")));

        assert_eq!(sheet.get(2, 0), Some(&CellValue::UInt(8)));
        assert_eq!(sheet.get(2, 1), None);
        assert_eq!(sheet.get(2, 3), Some(&CellValue::UInt(2)));
        assert_eq!(sheet.get(2, 4), Some(&CellValue::from("6D")));
    }
}
