//! HTTP client for the PD API

use serde::de::DeserializeOwned;
use std::time::Duration;

use super::hot::{HotKind, StoreHotPeersInfos};
use crate::common::{primary_endpoint, Error, Result};
use crate::topology::{RegionsInfo, StoresInfo};

pub const STORES_PATH: &str = "/pd/api/v1/stores";
pub const REGIONS_PATH: &str = "/pd/api/v1/regions";

/// Read-only PD client. Requests are issued one at a time.
#[derive(Clone)]
pub struct PdClient {
    http: reqwest::Client,
    base_url: String,
}

impl PdClient {
    /// `endpoints` may be a comma separated list; the first entry is used.
    pub fn new(endpoints: &str, timeout: Duration) -> Result<Self> {
        let base_url = primary_endpoint(endpoints)?;
        reqwest::Url::parse(&base_url)
            .map_err(|e| Error::InvalidEndpoint(format!("{}: {}", base_url, e)))?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stores(&self) -> Result<StoresInfo> {
        let stores: StoresInfo = self.get_json(STORES_PATH).await?;
        tracing::info!("Fetched {} stores", stores.stores.len());
        Ok(stores)
    }

    pub async fn regions(&self) -> Result<RegionsInfo> {
        let regions: RegionsInfo = self.get_json(REGIONS_PATH).await?;
        tracing::info!("Fetched {} regions", regions.regions.len());
        Ok(regions)
    }

    pub async fn hot_regions(&self, kind: HotKind) -> Result<StoreHotPeersInfos> {
        let hot: StoreHotPeersInfos = self.get_json(kind.api_path()).await?;
        tracing::info!(
            "Fetched hot {} stats for {} leader stores",
            kind,
            hot.as_leader.len()
        );
        Ok(hot)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_urls() {
        let client = PdClient::new("pd-0:2379/, pd-1:2379", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://pd-0:2379");
        assert_eq!(client.url(REGIONS_PATH), "http://pd-0:2379/pd/api/v1/regions");
        assert_eq!(
            client.url(HotKind::Read.api_path()),
            "http://pd-0:2379/pd/api/v1/hotspot/regions/read"
        );
    }

    #[test]
    fn test_rejects_empty_endpoint() {
        assert!(matches!(
            PdClient::new(" ", Duration::from_secs(1)),
            Err(Error::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_rejects_unparsable_endpoint() {
        assert!(PdClient::new("http://exa mple:2379", Duration::from_secs(1)).is_err());
    }
}
