//! Utility functions for region-dist

use super::error::{Error, Result};

/// Split a comma separated endpoint list into normalized base URLs.
///
/// Entries without a scheme get `http://`, trailing slashes are dropped and
/// blank entries are skipped.
pub fn normalize_endpoints(addrs: &str) -> Vec<String> {
    addrs
        .split(',')
        .map(str::trim)
        .filter(|ep| !ep.is_empty())
        .map(|ep| {
            let ep = ep.trim_end_matches('/');
            if ep.contains("://") {
                ep.to_string()
            } else {
                format!("http://{}", ep.trim_start_matches("//"))
            }
        })
        .collect()
}

/// First endpoint of a comma separated list
pub fn primary_endpoint(addrs: &str) -> Result<String> {
    normalize_endpoints(addrs)
        .into_iter()
        .next()
        .ok_or_else(|| Error::InvalidEndpoint(addrs.to_string()))
}

/// Parse a comma separated list of store ids (`"1,2, 5"`). A list with no
/// ids is rejected since it would hide every column.
pub fn parse_store_ids(s: &str) -> Result<Vec<u64>> {
    let ids = s
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>()
                .map_err(|_| Error::InvalidConfig(format!("invalid store id: {}", id)))
        })
        .collect::<Result<Vec<u64>>>()?;
    if ids.is_empty() {
        return Err(Error::InvalidConfig(format!("no store ids in {:?}", s)));
    }
    Ok(ids)
}
