use crate::core::error::ProbeError;
use crate::display;
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderValue};

/// One rewriting step applied to every outgoing request, in registration order.
pub trait RequestStage: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, request: Request) -> Result<Request, ProbeError>;
}

/// Sets the bearer token and JSON content type, replacing whatever was there.
pub struct AuthHeaders {
    authorization: HeaderValue,
}

impl AuthHeaders {
    pub fn new(api_key: &str) -> Result<Self, ProbeError> {
        let authorization = HeaderValue::from_str(&format!("Bearer {}", api_key))?;
        Ok(Self { authorization })
    }
}

impl RequestStage for AuthHeaders {
    fn name(&self) -> &'static str {
        "auth-headers"
    }

    fn apply(&self, mut request: Request) -> Result<Request, ProbeError> {
        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(request)
    }
}

/// Dumps method, URL, headers and the buffered body before the request leaves.
pub struct RequestLogger;

impl RequestLogger {
    pub fn describe(request: &Request) -> Vec<String> {
        let mut lines = vec![format!("{} {}", request.method(), request.url())];
        lines.extend(display::format_headers(request.headers()));

        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .unwrap_or_else(|| "none".to_string());

        let buffered = request.body().and_then(|b| b.as_bytes());
        let content_length = request
            .headers()
            .get(CONTENT_LENGTH)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .or_else(|| buffered.map(|b| b.len().to_string()))
            .unwrap_or_else(|| "-1".to_string());

        // A streamed body can only be sent once; HTTP/1.1 bodies are never duplex.
        let one_shot = request.body().is_some() && buffered.is_none();
        lines.push(format!(
            "[Content-Type: {}, Content-Length: {}] duplex={} one_shot={}",
            content_type, content_length, false, one_shot
        ));

        match (request.body(), buffered) {
            (Some(_), Some(bytes)) => lines.push(String::from_utf8_lossy(bytes).into_owned()),
            (Some(_), None) => lines.push("<streaming body>".to_string()),
            (None, _) => lines.push("<no body>".to_string()),
        }
        lines
    }
}

impl RequestStage for RequestLogger {
    fn name(&self) -> &'static str {
        "request-logger"
    }

    fn apply(&self, request: Request) -> Result<Request, ProbeError> {
        tracing::debug!(method = %request.method(), url = %request.url(), "intercepted request");
        display::display_lines(&Self::describe(&request));
        Ok(request)
    }
}
