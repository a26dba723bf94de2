/// Trait for the dashboard backend, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use crate::client::ApiError;
use crate::connection::TestConnectionResponse;
use crate::swaparr::{ActionResponse, SwaparrAction, SwaparrStatus};
use crate::types::AppType;

/// Backend calls made by the settings forms, implemented by both HttpClient and MockClient
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Ask the backend to reach an instance with the given url and key
    async fn test_connection(
        &self,
        app: AppType,
        api_url: &str,
        api_key: &str,
    ) -> Result<TestConnectionResponse, ApiError>;

    /// Get Swaparr's enabled flag and session counters
    async fn swaparr_status(&self) -> Result<SwaparrStatus, ApiError>;

    /// Trigger a Swaparr test, run or statistics reset
    async fn swaparr_action(&self, action: SwaparrAction) -> Result<ActionResponse, ApiError>;

    /// Get the Swaparr repository's star count
    async fn swaparr_stars(&self) -> Result<u64, ApiError>;
}
