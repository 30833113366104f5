//! Spreadsheet export of the region grid

pub mod hot;
pub mod region;
pub mod sheet;

pub use hot::{hot_sheet, HotSheetStats};
pub use region::region_sheet;
pub use sheet::{cell_name, column_name, CellValue, Sheet};
