//! Commands against a live PD

pub mod hot;
pub mod region;

pub use hot::export_hot_regions;
pub use region::{
    export_grid, export_regions, print_grid, print_regions, ExportReport, GridOptions,
    PrintReport,
};
