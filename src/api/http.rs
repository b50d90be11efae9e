//! Blocking HTTP transport for the stats API.
//!
//! Builds the client with the request headers stats.nba.com requires,
//! issues one GET per call, and translates every transport or status
//! failure into the error taxonomy before it reaches the retry layer.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONNECTION, REFERER, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{NbaError, Result};
use crate::table::DataTable;

/// Base path for the stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

// The stats API rejects requests without a browser-ish identity.
const STATS_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Build the shared blocking client with the standard stats headers.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(STATS_USER_AGENT));
    headers.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
    headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|err| NbaError::Unexpected {
            message: format!("failed to build HTTP client: {err}"),
        })
}

/// Response envelope shared by the tabular stats endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    pub fn into_table(self) -> DataTable {
        DataTable::from_rows(self.headers, self.row_set)
    }
}

impl StatsResponse {
    /// Extract the named result set as a table. The envelope always names
    /// its sets, so a miss means the endpoint contract changed.
    pub fn into_table(self, name: &str) -> Result<DataTable> {
        let resource = self.resource;
        self.result_sets
            .into_iter()
            .find(|set| set.name == name)
            .map(ResultSet::into_table)
            .ok_or_else(|| NbaError::Unexpected {
                message: format!("result set '{name}' missing from '{resource}' response"),
            })
    }
}

/// Issue a GET against `{STATS_BASE_URL}/{endpoint}` with the given query
/// parameters and per-attempt timeout.
pub fn get_stats(
    client: &Client,
    endpoint: &str,
    params: &[(&str, String)],
    timeout: Duration,
) -> Result<StatsResponse> {
    let url = format!("{STATS_BASE_URL}/{endpoint}");

    let response = client
        .get(&url)
        .query(params)
        .timeout(timeout)
        .send()
        .map_err(|err| transport_error(err, endpoint, timeout))?;

    let status = response.status().as_u16();
    if status != 200 {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        return Err(status_error(status, endpoint, retry_after));
    }

    response
        .json::<StatsResponse>()
        .map_err(|err| transport_error(err, endpoint, timeout))
}

/// Translate a transport-level failure into the taxonomy.
///
/// Timeouts are transient. Anything without a status code (connection
/// refused, DNS, TLS, body decode) is `Unexpected` and therefore not
/// retried.
pub fn transport_error(err: reqwest::Error, endpoint: &str, timeout: Duration) -> NbaError {
    if err.is_timeout() {
        return NbaError::Timeout {
            timeout_seconds: timeout.as_secs(),
            endpoint: Some(endpoint.to_string()),
        };
    }

    if let Some(status) = err.status() {
        return status_error(status.as_u16(), endpoint, None);
    }

    NbaError::Unexpected {
        message: format!("request to '{endpoint}' failed: {err}"),
    }
}

/// Map an HTTP status into the taxonomy: 429 becomes a rate-limit error
/// carrying any `Retry-After` hint, everything else a generic API error
/// classified by status code.
pub fn status_error(status: u16, endpoint: &str, retry_after: Option<u64>) -> NbaError {
    if status == 429 {
        return NbaError::RateLimited {
            retry_after,
            endpoint: Some(endpoint.to_string()),
        };
    }

    NbaError::Api {
        status: Some(status),
        endpoint: Some(endpoint.to_string()),
        message: "HTTP error".to_string(),
    }
}
