use crate::{ConnectorError, ConnectorResult};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;

/// Create a JSON request, parse the response.
/// Throws error on non-success status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: HeaderMap,
) -> ConnectorResult<R> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    parse_json(response).await
}

/// Issue a GET request with the given query pairs, parse the JSON response.
/// Query values are URL-encoded by the client.
/// Throws error on non-success status code.
pub async fn get_json<R: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
    headers: HeaderMap,
) -> ConnectorResult<R> {
    let response = client.get(url).headers(headers).query(query).send().await?;
    parse_json(response).await
}

async fn parse_json<R: DeserializeOwned>(response: Response) -> ConnectorResult<R> {
    let status = response.status();
    if !status.is_success() {
        return Err(ConnectorError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ));
    }
    Ok(response.json::<R>().await?)
}

/// Build a header map from user supplied key/value pairs.
pub fn build_headers(
    provider: &'static str,
    headers: &HashMap<String, String>,
) -> ConnectorResult<HeaderMap> {
    let mut map = HeaderMap::new();

    for (key, value) in headers {
        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
            ConnectorError::InvalidInput(format!(
                "Invalid {provider} header name '{key}': {error}"
            ))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|error| {
            ConnectorError::InvalidInput(format!(
                "Invalid {provider} header value for '{key}': {error}"
            ))
        })?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}
