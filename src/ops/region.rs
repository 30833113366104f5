//! `region print` and `region export`

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::common::{ExportFormat, Result};
use crate::export::region_sheet;
use crate::grid::{GridLayout, Renderer};
use crate::pd::PdClient;
use crate::topology::{RegionsInfo, StoresInfo};

/// Options shared by the region commands
#[derive(Debug, Clone, Default)]
pub struct GridOptions {
    /// Colorize markers (terminal only)
    pub color: bool,
    /// Restrict columns to these stores
    pub stores: Option<Vec<u64>>,
}

impl GridOptions {
    pub fn layout(&self, stores: &StoresInfo, regions: &RegionsInfo) -> GridLayout {
        GridLayout::build_filtered(&stores.stores, &regions.regions, self.stores.as_deref())
    }
}

#[derive(Debug)]
pub struct PrintReport {
    pub stores: usize,
    pub regions: usize,
    pub lines: usize,
}

#[derive(Debug)]
pub struct ExportReport {
    pub path: PathBuf,
    pub stores: usize,
    pub rows: usize,
    pub unknown_regions: usize,
}

pub async fn print_regions<W: Write>(
    client: &PdClient,
    opts: &GridOptions,
    out: &mut W,
) -> Result<PrintReport> {
    let stores = client.stores().await?;
    let regions = client.regions().await?;
    print_grid(&stores, &regions, opts, out)
}

/// Render already-fetched topology to `out`
pub fn print_grid<W: Write>(
    stores: &StoresInfo,
    regions: &RegionsInfo,
    opts: &GridOptions,
    out: &mut W,
) -> Result<PrintReport> {
    let grid = opts.layout(stores, regions);
    for (store_id, peers) in grid.store_ids.iter().zip(grid.peer_counts()) {
        tracing::debug!("Store {} holds {} peers", store_id, peers);
    }
    let lines = Renderer::new(opts.color).render_to(&grid, out)?;
    Ok(PrintReport {
        stores: grid.store_ids.len(),
        regions: grid.rows.len(),
        lines,
    })
}

pub async fn export_regions(
    client: &PdClient,
    opts: &GridOptions,
    path: &Path,
    format: ExportFormat,
) -> Result<ExportReport> {
    tracing::info!("Exporting region distribution to {}", path.display());
    let stores = client.stores().await?;
    let regions = client.regions().await?;
    export_grid(&stores, &regions, opts, path, format)
}

pub fn export_grid(
    stores: &StoresInfo,
    regions: &RegionsInfo,
    opts: &GridOptions,
    path: &Path,
    format: ExportFormat,
) -> Result<ExportReport> {
    let grid = opts.layout(stores, regions);
    region_sheet(&grid).save(path, format)?;
    Ok(ExportReport {
        path: path.to_path_buf(),
        stores: grid.store_ids.len(),
        rows: grid.rows.len(),
        unknown_regions: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{Peer, RegionInfo, StoreInfo};

    #[test]
    fn test_print_grid() {
        let stores = StoresInfo {
            count: 2,
            stores: vec![StoreInfo::new(2), StoreInfo::new(1)],
        };
        let regions = RegionsInfo {
            count: 1,
            regions: vec![RegionInfo::new(3, "", "")
                .with_peers(vec![Peer::new(1, 1)])
                .with_leader(Peer::new(1, 1))],
        };
        let opts = GridOptions {
            color: false,
            stores: Some(vec![1]),
        };
        let mut out = Vec::new();
        let report = print_grid(&stores, &regions, &opts, &mut out).unwrap();
        assert_eq!(report.stores, 1);
        assert_eq!(report.regions, 1);
        assert_eq!(report.lines, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "    S1  start end   \nR3  ▀               \n"
        );
    }
}
