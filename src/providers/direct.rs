use crate::core::error::ProbeError;
use crate::display;
use crate::providers::base_client::check_status;
use crate::providers::resolve_target;
use crate::providers::types::GenerationRequest;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Request};
use serde_json::Value;

/// One-shot POST of `request` to an absolute endpoint URL.
///
/// The HTTP client lives only for this call. Prints the outgoing request, the status
/// line and the pretty-printed body, and returns the body as generic JSON.
pub async fn call_direct(
    endpoint: &str,
    api_key: &str,
    request: &GenerationRequest,
) -> Result<Value, ProbeError> {
    let url = resolve_target("", endpoint)?;
    let client = Client::builder().build()?;

    let body = serde_json::to_string(request)?;
    let http_request = client
        .post(url)
        .header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))?,
        )
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
        .body(body)
        .build()?;

    display::display_lines(&describe_request(&http_request));
    tracing::info!(url = %http_request.url(), "direct call");

    let response = client.execute(http_request).await?;
    display::display_status(response.version(), response.status());
    let response = check_status(response).await?;

    let text = response.text().await?;
    let value: Value = serde_json::from_str(&text)?;

    display::display_separator();
    println!("{}", serde_json::to_string_pretty(&value)?);
    display::display_separator();

    Ok(value)
}

/// Request line, headers, entity summary and body
pub fn describe_request(request: &Request) -> Vec<String> {
    let mut lines = vec![format!("{} {} HTTP/1.1", request.method(), request.url())];
    lines.extend(display::format_headers(request.headers()));

    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    let bytes = request.body().and_then(|b| b.as_bytes()).unwrap_or_default();

    lines.push(format!(
        "[Content-Type: {},Content-Length: {},Chunked: {}]",
        content_type,
        bytes.len(),
        request.body().is_some_and(|b| b.as_bytes().is_none())
    ));
    lines.push(String::from_utf8_lossy(bytes).into_owned());
    lines
}
