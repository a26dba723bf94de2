/// HTTP client for the dashboard backend and the GitHub star lookup
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::connection::TestConnectionResponse;
use crate::data_provider::SettingsApi;
use crate::swaparr::{ActionResponse, SwaparrAction, SwaparrStatus};
use crate::types::AppType;

pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Repository whose star count is shown on the Swaparr panel
pub const SWAPARR_REPO: &str = "ThijmenGThN/swaparr";

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("API base URL is missing")]
    BaseUrlMissing,
    #[error("request failed: {message}")]
    Request { message: String },
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },
    #[error("invalid JSON response: {message}")]
    Decode { message: String },
}

#[derive(Serialize)]
struct TestConnectionRequest<'a> {
    api_url: &'a str,
    api_key: &'a str,
}

#[derive(serde::Deserialize)]
struct RepoInfo {
    stargazers_count: u64,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    github_url: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("arrforms/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| ApiError::Request { message: error.to_string() })?;

        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            github_url: GITHUB_API_URL.to_string(),
            timeout,
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs.max(1)),
        )
    }

    /// Point the star lookup at another GitHub-compatible API
    pub fn with_github_url(mut self, github_url: &str) -> Result<Self, ApiError> {
        self.github_url = normalize_base_url(github_url)?;
        Ok(self)
    }

    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(request_error)?;
        decode_json_response(response).await
    }

    pub async fn post_json<Req, Res>(&self, url: &str, payload: &Req) -> Result<Res, ApiError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(request_error)?;
        decode_json_response(response).await
    }
}

#[async_trait]
impl SettingsApi for HttpClient {
    async fn test_connection(
        &self,
        app: AppType,
        api_url: &str,
        api_key: &str,
    ) -> Result<TestConnectionResponse, ApiError> {
        let url = self.endpoint(&format!("/api/{}/test-connection", app));
        tracing::debug!("POST {}", url);
        let response = self
            .http
            .post(url.as_str())
            .timeout(self.timeout)
            .json(&TestConnectionRequest { api_url, api_key })
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(request_error)?;
        if status.is_success() {
            return decode_json_bytes(&bytes);
        }

        // Failed checks come back as a non-2xx status with a JSON explanation
        match serde_json::from_slice::<TestConnectionResponse>(&bytes) {
            Ok(body) if body.message.is_some() => Ok(TestConnectionResponse { success: false, ..body }),
            _ => Err(format_http_error(status, &bytes)),
        }
    }

    async fn swaparr_status(&self) -> Result<SwaparrStatus, ApiError> {
        self.get_json(&self.endpoint("/api/swaparr/status")).await
    }

    async fn swaparr_action(&self, action: SwaparrAction) -> Result<ActionResponse, ApiError> {
        self.post_json(&self.endpoint(&action.endpoint()), &serde_json::json!({}))
            .await
    }

    async fn swaparr_stars(&self) -> Result<u64, ApiError> {
        let url = join_url(&self.github_url, &format!("/repos/{}", SWAPARR_REPO));
        let info: RepoInfo = self.get_json(&url).await?;
        Ok(info.stargazers_count)
    }
}

fn request_error(error: reqwest::Error) -> ApiError {
    ApiError::Request { message: error.to_string() }
}

pub fn format_http_error(status: StatusCode, body: &[u8]) -> ApiError {
    let body = String::from_utf8_lossy(body).trim().to_string();
    let body = if body.is_empty() { "<empty>".to_string() } else { body };
    ApiError::Http { status, body }
}

fn normalize_base_url(base_url: &str) -> Result<String, ApiError> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BaseUrlMissing);
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

async fn decode_json_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(request_error)?;

    if !status.is_success() {
        return Err(format_http_error(status, &bytes));
    }
    decode_json_bytes(&bytes)
}

fn decode_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice::<T>(bytes).map_err(|error| ApiError::Decode { message: error.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::thread;
    use tiny_http::{Header, Response, Server};

    struct Recorded {
        method: String,
        url: String,
        body: String,
    }

    /// Serve one canned response on a random port and report what was requested
    fn serve_once(status: u16, body: &'static str) -> (String, thread::JoinHandle<Recorded>) {
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let handle = thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut received = String::new();
            request.as_reader().read_to_string(&mut received).unwrap();
            let recorded = Recorded {
                method: request.method().to_string(),
                url: request.url().to_string(),
                body: received,
            };
            let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            request.respond(response).unwrap();
            recorded
        });
        (format!("http://127.0.0.1:{}", port), handle)
    }

    fn client(base_url: &str) -> HttpClient {
        HttpClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_normalizes_paths() {
        let client = client("http://localhost:9705/");
        assert_eq!(client.endpoint("/api/swaparr/status"), "http://localhost:9705/api/swaparr/status");
        assert_eq!(client.endpoint("api/swaparr/status"), "http://localhost:9705/api/swaparr/status");
    }

    #[test]
    fn test_base_url_missing_is_rejected() {
        let result = HttpClient::new("   ", Duration::from_secs(1));
        assert!(matches!(result, Err(ApiError::BaseUrlMissing)));
    }

    #[test]
    fn test_http_error_mapping() {
        let error = format_http_error(StatusCode::BAD_GATEWAY, b" gateway failed ");
        assert_eq!(error.to_string(), "HTTP 502 Bad Gateway: gateway failed");

        let empty = format_http_error(StatusCode::SERVICE_UNAVAILABLE, b" ");
        assert_eq!(empty.to_string(), "HTTP 503 Service Unavailable: <empty>");
    }

    #[tokio::test]
    async fn test_connection_success() {
        let (base_url, handle) = serve_once(200, r#"{"success": true, "version": "4.0.1"}"#);
        let response = client(&base_url)
            .test_connection(AppType::Sonarr, "http://sonarr:8989", "abc")
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.version.as_deref(), Some("4.0.1"));

        let recorded = handle.join().unwrap();
        assert_eq!(recorded.method, "POST");
        assert_eq!(recorded.url, "/api/sonarr/test-connection");
        let body: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
        assert_eq!(body, serde_json::json!({"api_url": "http://sonarr:8989", "api_key": "abc"}));
    }

    #[tokio::test]
    async fn test_connection_failure_body_is_used() {
        let (base_url, handle) = serve_once(401, r#"{"success": false, "message": "Invalid API key"}"#);
        let response = client(&base_url)
            .test_connection(AppType::Radarr, "http://radarr:7878", "bad")
            .await
            .unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid API key"));
        handle.join().unwrap();
    }

    #[tokio::test]
    async fn test_connection_failure_without_body() {
        let (base_url, handle) = serve_once(500, "Internal Server Error");
        let result = client(&base_url)
            .test_connection(AppType::Lidarr, "http://lidarr:8686", "k")
            .await;
        assert!(matches!(result, Err(ApiError::Http { status, .. }) if status == StatusCode::INTERNAL_SERVER_ERROR));
        handle.join().unwrap();
    }

    #[tokio::test]
    async fn test_swaparr_status() {
        let (base_url, handle) = serve_once(
            200,
            r#"{"enabled": true, "session_stats": {"processed": 5, "strikes": 2, "removals": 1, "ignored": 0}}"#,
        );
        let status = client(&base_url).swaparr_status().await.unwrap();
        assert!(status.enabled);
        assert_eq!(status.session_stats.processed, 5);
        assert_eq!(handle.join().unwrap().url, "/api/swaparr/status");
    }

    #[tokio::test]
    async fn test_swaparr_action() {
        let (base_url, handle) = serve_once(200, r#"{"success": true, "message": "Statistics reset"}"#);
        let response = client(&base_url).swaparr_action(SwaparrAction::Reset).await.unwrap();
        assert!(response.success);
        let recorded = handle.join().unwrap();
        assert_eq!(recorded.method, "POST");
        assert_eq!(recorded.url, "/api/swaparr/reset");
    }

    #[tokio::test]
    async fn test_swaparr_stars() {
        let (github_url, handle) = serve_once(200, r#"{"full_name": "ThijmenGThN/swaparr", "stargazers_count": 201}"#);
        let client = client("http://localhost:9705").with_github_url(&github_url).unwrap();
        assert_eq!(client.swaparr_stars().await.unwrap(), 201);
        assert_eq!(handle.join().unwrap().url, "/repos/ThijmenGThN/swaparr");
    }

    #[tokio::test]
    async fn test_decode_error() {
        let (base_url, handle) = serve_once(200, "not json");
        let result = client(&base_url).swaparr_status().await;
        assert!(matches!(result, Err(ApiError::Decode { .. })));
        handle.join().unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Port 9 (discard) is not expected to accept HTTP
        let result = client("http://127.0.0.1:9").swaparr_status().await;
        assert!(matches!(result, Err(ApiError::Request { .. })));
    }
}
