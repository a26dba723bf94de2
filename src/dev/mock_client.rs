/// Mock backend client for development and testing
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::info;

use crate::client::ApiError;
use crate::connection::TestConnectionResponse;
use crate::data_provider::SettingsApi;
use crate::fixtures;
use crate::swaparr::{ActionResponse, SwaparrAction, SwaparrStatus};
use crate::types::AppType;

/// Mock client that returns fixture data instead of making real API calls
///
/// Connection tests succeed unless the url contains "fail" (reported
/// failure) or "offline" (transport error).
#[derive(Default)]
pub struct MockClient {
    stars_unavailable: bool,
    star_requests: AtomicUsize,
}

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::default()
    }

    /// Mock whose GitHub lookup always fails
    pub fn without_stars() -> Self {
        Self { stars_unavailable: true, ..Self::new() }
    }

    /// Number of star lookups served so far
    pub fn star_requests(&self) -> usize {
        self.star_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsApi for MockClient {
    async fn test_connection(
        &self,
        app: AppType,
        api_url: &str,
        _api_key: &str,
    ) -> Result<TestConnectionResponse, ApiError> {
        info!("MockClient: Testing {} connection to {}", app, api_url);
        if api_url.contains("offline") {
            return Err(ApiError::Request {
                message: format!("error sending request for url ({})", api_url),
            });
        }
        Ok(fixtures::create_mock_test_response(api_url))
    }

    async fn swaparr_status(&self) -> Result<SwaparrStatus, ApiError> {
        info!("MockClient: Returning mock Swaparr status");
        Ok(fixtures::create_mock_swaparr_status())
    }

    async fn swaparr_action(&self, action: SwaparrAction) -> Result<ActionResponse, ApiError> {
        info!("MockClient: Swaparr {}", action.as_str());
        Ok(fixtures::create_mock_action_response(action))
    }

    async fn swaparr_stars(&self) -> Result<u64, ApiError> {
        self.star_requests.fetch_add(1, Ordering::SeqCst);
        if self.stars_unavailable {
            info!("MockClient: GitHub unavailable");
            return Err(ApiError::Request { message: "rate limited".into() });
        }
        info!("MockClient: Returning mock star count");
        Ok(fixtures::MOCK_STARS)
    }
}
