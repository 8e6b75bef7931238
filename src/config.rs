use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_HOST: &str = "localhost:8000";
pub const DEFAULT_PATH: &str = "/api/centros";
pub const QUERY_PARAM: &str = "provincia";

#[derive(Clone, Debug)]
pub struct Config {
    endpoint: Url,
}

impl Config {
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.as_ref();
        let url = Url::parse(endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;

        // `provincia` is appended with `?`, an existing query would be corrupted
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::EndpointHasQuery(endpoint.to_string()));
        }

        Ok(Self { endpoint: url })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let scheme = std::env::var("CENTROS_SCHEME").unwrap_or_else(|_| "http".to_string());
        let host = std::env::var("CENTROS_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = std::env::var("CENTROS_PORT").unwrap_or_else(|_| "".to_string());
        let path = std::env::var("CENTROS_PATH").unwrap_or_else(|_| DEFAULT_PATH.to_string());

        Self::new(compose_endpoint(&scheme, &host, &port, &path))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Raw substitution of the query into `<endpoint>?provincia=<query>`.
    pub fn request_url(&self, query: &str) -> String {
        format!("{}?{}={}", self.endpoint, QUERY_PARAM, query)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(&format!("http://{DEFAULT_HOST}{DEFAULT_PATH}"))
                .expect("default endpoint is a valid url"),
        }
    }
}

fn compose_endpoint(scheme: &str, host: &str, port: &str, path: &str) -> String {
    let authority = if port.is_empty() {
        host.to_string()
    } else {
        format!("{}:{}", host, port)
    };

    let path = path.trim_start_matches('/');

    format!("{}://{}/{}", scheme, authority, path)
}
