use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::models::center::Center;
use crate::models::search::SearchResult;

#[async_trait::async_trait]
pub trait CentrosFetcher: Send + Sync + 'static {
    async fn fetch(&self, url: &str) -> Result<Vec<Center>, FetchError>;
}

#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    // no timeout: a cycle waits as long as the transport does
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl CentrosFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<Center>, FetchError> {
        let url = Url::parse(url)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        // status is not checked, a decodable error body renders like a success
        let status = response.status();
        let body = response.bytes().await?;
        debug!(%status, len = body.len(), "response received");

        decode_centros(&body)
    }
}

pub fn decode_centros(body: &[u8]) -> Result<Vec<Center>, FetchError> {
    let value: Value = serde_json::from_slice(body)?;

    if value.get("centros").is_none() {
        return Err(FetchError::Shape("missing field `centros`".to_string()));
    }

    let result: SearchResult =
        serde_json::from_value(value).map_err(|e| FetchError::Shape(e.to_string()))?;

    Ok(result.centros)
}
