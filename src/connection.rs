/// Inline "Test Connection" buttons of the instance list
///
/// Each instance index has its own button. A test validates the URL and key,
/// asks the backend to reach the instance, shows the outcome, and returns
/// the button to idle three seconds later. Tests on different instances run
/// independently.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::client::ApiError;
use crate::data_provider::SettingsApi;
use crate::types::AppType;

/// Delay before a finished test returns its button to idle
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Backend reply to `POST /api/{app}/test-connection`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConnectionResponse {
    pub success: bool,
    pub version: Option<String>,
    pub message: Option<String>,
}

/// Input rejected before any request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid URL")]
    MissingUrl,
    #[error("Please enter a valid API key")]
    MissingApiKey,
}

/// Trim and check the url/key pair a test would send
pub fn validate<'a>(api_url: &'a str, api_key: &'a str) -> Result<(&'a str, &'a str), ValidationError> {
    let api_url = api_url.trim();
    let api_key = api_key.trim();
    if api_url.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    if api_key.is_empty() {
        return Err(ValidationError::MissingApiKey);
    }
    Ok((api_url, api_key))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Testing,
    Connected(String),
    Failed(String),
    Error(String),
}

impl ButtonState {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonState::Idle => "Test Connection",
            ButtonState::Testing => "Testing...",
            ButtonState::Connected(_) => "Connected!",
            ButtonState::Failed(_) => "Failed",
            ButtonState::Error(_) => "Error",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ButtonState::Connected(m) | ButtonState::Failed(m) | ButtonState::Error(m) => Some(m),
            ButtonState::Idle | ButtonState::Testing => None,
        }
    }

    /// Buttons are disabled while a request is in flight
    pub fn is_disabled(&self) -> bool {
        matches!(self, ButtonState::Testing)
    }

    /// Final state for a completed request
    pub fn from_outcome(app: AppType, outcome: &Result<TestConnectionResponse, ApiError>) -> Self {
        match outcome {
            Ok(response) if response.success => {
                let version = response
                    .version
                    .as_deref()
                    .map(|v| format!(" (version {})", v))
                    .unwrap_or_default();
                ButtonState::Connected(format!("Successfully connected to {}{}", app.title(), version))
            }
            Ok(response) => ButtonState::Failed(format!(
                "Connection failed: {}",
                response
                    .message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or("Unknown error")
            )),
            Err(error) => ButtonState::Error(format!("Connection test failed: {}", error)),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Slot {
    state: ButtonState,
    /// Bumped on every test so a stale reset never clears a newer result
    generation: u64,
}

/// Runs connection tests for one app's instance list
#[derive(Clone)]
pub struct ConnectionTester {
    api: Arc<dyn SettingsApi>,
    app: AppType,
    slots: Arc<RwLock<HashMap<usize, Slot>>>,
}

impl ConnectionTester {
    pub fn new(api: Arc<dyn SettingsApi>, app: AppType) -> Self {
        Self {
            api,
            app,
            slots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn state(&self, index: usize) -> ButtonState {
        self.slots
            .read()
            .await
            .get(&index)
            .map(|slot| slot.state.clone())
            .unwrap_or_default()
    }

    /// Test the instance at `index`, returning the state the button settles in
    ///
    /// Invalid input is rejected without touching the button. A test already
    /// running for the same index is reported as `Testing` and not repeated.
    pub async fn test(
        &self,
        index: usize,
        api_url: &str,
        api_key: &str,
    ) -> Result<ButtonState, ValidationError> {
        let (api_url, api_key) = validate(api_url, api_key)?;

        let generation = {
            let mut slots = self.slots.write().await;
            let slot = slots.entry(index).or_default();
            if slot.state == ButtonState::Testing {
                return Ok(ButtonState::Testing);
            }
            slot.state = ButtonState::Testing;
            slot.generation += 1;
            slot.generation
        };

        tracing::info!("Testing {} instance {} at {}", self.app, index + 1, api_url);
        let outcome = self.api.test_connection(self.app, api_url, api_key).await;
        if let Err(error) = &outcome {
            tracing::warn!("Connection test for {} failed: {}", self.app, error);
        }
        let state = ButtonState::from_outcome(self.app, &outcome);

        if let Some(slot) = self.slots.write().await.get_mut(&index) {
            slot.state = state.clone();
        }
        self.schedule_reset(index, generation);
        Ok(state)
    }

    fn schedule_reset(&self, index: usize, generation: u64) {
        let slots = Arc::clone(&self.slots);
        tokio::spawn(async move {
            tokio::time::sleep(RESET_DELAY).await;
            let mut slots = slots.write().await;
            if let Some(slot) = slots.get_mut(&index) {
                if slot.generation == generation && slot.state != ButtonState::Testing {
                    slot.state = ButtonState::Idle;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;

    fn tester(app: AppType) -> ConnectionTester {
        ConnectionTester::new(Arc::new(MockClient::new()), app)
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate("  ", "key"), Err(ValidationError::MissingUrl));
        assert_eq!(validate("http://x", " "), Err(ValidationError::MissingApiKey));
        assert_eq!(validate(" http://x ", " k "), Ok(("http://x", "k")));
        assert_eq!(ValidationError::MissingUrl.to_string(), "Please enter a valid URL");
    }

    #[test]
    fn test_messages() {
        let ok = Ok(TestConnectionResponse {
            success: true,
            version: Some("3.0.10".into()),
            message: None,
        });
        assert_eq!(
            ButtonState::from_outcome(AppType::Sonarr, &ok).message(),
            Some("Successfully connected to Sonarr (version 3.0.10)")
        );

        let ok_no_version = Ok(TestConnectionResponse { success: true, ..Default::default() });
        assert_eq!(
            ButtonState::from_outcome(AppType::Eros, &ok_no_version).message(),
            Some("Successfully connected to Eros")
        );

        let failed = Ok(TestConnectionResponse::default());
        assert_eq!(
            ButtonState::from_outcome(AppType::Radarr, &failed),
            ButtonState::Failed("Connection failed: Unknown error".into())
        );

        let error = Err(ApiError::Request { message: "timed out".into() });
        assert_eq!(
            ButtonState::from_outcome(AppType::Radarr, &error),
            ButtonState::Error("Connection test failed: request failed: timed out".into())
        );
    }

    #[tokio::test]
    async fn test_validation_leaves_button_idle() {
        let tester = tester(AppType::Sonarr);
        assert_eq!(tester.test(0, "", "key").await, Err(ValidationError::MissingUrl));
        assert_eq!(tester.state(0).await, ButtonState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_resets_after_delay() {
        let tester = tester(AppType::Sonarr);
        let state = tester.test(0, "http://sonarr:8989", "abc").await.unwrap();
        assert!(matches!(state, ButtonState::Connected(_)));
        assert_eq!(tester.state(0).await, state);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(tester.state(0).await, state);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(tester.state(0).await, ButtonState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_instances_are_independent() {
        let tester = tester(AppType::Radarr);
        let ok = tester.test(0, "http://radarr:7878", "abc").await.unwrap();
        let failed = tester.test(1, "http://fail.local", "abc").await.unwrap();
        let error = tester.test(2, "http://offline.local", "abc").await.unwrap();

        assert!(matches!(ok, ButtonState::Connected(_)));
        assert_eq!(failed, ButtonState::Failed("Connection failed: Invalid API key".into()));
        assert!(matches!(error, ButtonState::Error(_)));
        assert_eq!(tester.state(3).await, ButtonState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_reset_keeps_newer_result() {
        let tester = tester(AppType::Lidarr);
        tester.test(0, "http://lidarr:8686", "abc").await.unwrap();

        tokio::time::sleep(Duration::from_secs(2)).await;
        let second = tester.test(0, "http://fail.local", "abc").await.unwrap();

        // First reset fires at 3s but belongs to the older test
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(tester.state(0).await, second);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(tester.state(0).await, ButtonState::Idle);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ButtonState::Idle.label(), "Test Connection");
        assert!(ButtonState::Testing.is_disabled());
        assert!(!ButtonState::Failed(String::new()).is_disabled());
    }
}
