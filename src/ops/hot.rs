//! `hot read` and `hot write`

use std::path::Path;

use super::region::{ExportReport, GridOptions};
use crate::common::{ExportFormat, Result};
use crate::export::hot_sheet;
use crate::pd::{HotKind, PdClient};

pub async fn export_hot_regions(
    client: &PdClient,
    kind: HotKind,
    opts: &GridOptions,
    path: &Path,
    format: ExportFormat,
) -> Result<ExportReport> {
    tracing::info!(
        "Exporting hot {} regions from {} to {}",
        kind,
        client.url(kind.api_path()),
        path.display()
    );
    let stores = client.stores().await?;
    let regions = client.regions().await?;
    let hot = client.hot_regions(kind).await?;

    let grid = opts.layout(&stores, &regions);
    let (sheet, stats) = hot_sheet(&grid, &hot, kind);
    sheet.save(path, format)?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        stores: grid.store_ids.len(),
        rows: stats.hot_regions,
        unknown_regions: stats.unknown_regions,
    })
}
