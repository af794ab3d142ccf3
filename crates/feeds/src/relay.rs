use crate::error::FeedError;

/// Public CORS relay the air-quality feed is routed through.
pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw";

/// Send a built request, mapping transport failures and non-success
/// statuses onto `FeedError`.
pub async fn send_checked(request: reqwest::RequestBuilder) -> Result<reqwest::Response, FeedError> {
    let response = request
        .send()
        .await
        .map_err(|e| FeedError::Relay(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Upstream(status.as_u16()));
    }
    Ok(response)
}

/// GET `target` through the relay. reqwest percent-encodes the wrapped
/// URL when it serializes the `url` query parameter.
pub async fn fetch_via_relay(
    client: &reqwest::Client,
    relay_url: &str,
    target: &str,
) -> Result<reqwest::Response, FeedError> {
    send_checked(client.get(relay_url).query(&[("url", target)])).await
}
