use std::sync::Arc;

use promptdeck::{FacetValues, ResourceKind, ResourceRecord};
use serde::Deserialize;

use crate::credentials::CredentialProvider;
use crate::error::FetchError;

/// One page of list results as the transport hands it back.
/// `total_pages` stays optional here; the pagination layer applies the
/// default so the wire contract remains visible at the seam.
#[derive(Debug, Clone)]
pub struct ListPage {
    pub records: Vec<ResourceRecord>,
    pub total_pages: Option<u32>,
}

/// HTTP client for the marketplace REST API.
///
/// Pure transport: it builds URLs, attaches credentials, and maps
/// failures into the fetch error taxonomy. Query assembly and result
/// interpretation live with the caller.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            client: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(url).header("User-Agent", "promptdeck");

        if let Some(token) = self.credentials.bearer_token() {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }

    /// Fetch one page of resources with the given query pairs.
    pub async fn fetch_page(
        &self,
        kind: ResourceKind,
        query: &[(String, String)],
    ) -> Result<ListPage, FetchError> {
        let url = format!("{}/{}/", self.base_url, kind.path_segment());

        let response = self
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{kind} list fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "{kind} list fetch returned HTTP {}",
                response.status()
            )));
        }

        let body: ListResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Malformed(format!("failed to parse {kind} list JSON: {e}")))?;

        Ok(ListPage {
            records: body.data,
            total_pages: body.total_pages,
        })
    }

    /// Fetch the available facet values for a kind's filter sidebar.
    pub async fn fetch_facets(&self, kind: ResourceKind) -> Result<FacetValues, FetchError> {
        let url = format!("{}/{}/filters", self.base_url, kind.path_segment());

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("{kind} filters fetch failed: {e}")))?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "{kind} filters fetch returned HTTP {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            FetchError::Malformed(format!("failed to parse {kind} filters JSON: {e}"))
        })
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    data: Vec<ResourceRecord>,
    #[serde(default)]
    total_pages: Option<u32>,
}
