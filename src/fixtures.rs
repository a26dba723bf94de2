/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit tests - ensuring tests have predictable data
/// 2. Development mock mode - running the CLI without a backend
/// 3. Benchmarks - providing consistent data for performance testing
///
/// The fixtures represent realistic settings records for every app type.
use crate::connection::TestConnectionResponse;
use crate::settings::{AppSettings, InstanceConfig, SettingValue, INSTANCES_KEY};
use crate::swaparr::{ActionResponse, SessionStats, SwaparrAction, SwaparrStatus};
use crate::types::{AppType, MAX_INSTANCES};

/// Star count the mock reports for the Swaparr repository
pub const MOCK_STARS: u64 = 187;

/// Version reported by successful mock connection tests
pub const MOCK_VERSION: &str = "4.0.14.2939";

fn default_port(app: AppType) -> u16 {
    match app {
        AppType::Sonarr => 8989,
        AppType::Radarr => 7878,
        AppType::Lidarr => 8686,
        AppType::Readarr => 8787,
        AppType::Whisparr | AppType::Eros => 6969,
        AppType::Swaparr | AppType::General => 9705,
    }
}

/// A configured instance pointing at the app's usual port
pub fn create_mock_instance(app: AppType, index: usize) -> InstanceConfig {
    InstanceConfig {
        name: format!("{} {}", app.title(), index + 1),
        api_url: format!("http://{}-{}:{}", app.as_str(), index + 1, default_port(app)),
        api_key: format!("{:032x}", (index as u128 + 1) * 0x9e37_79b9_7f4a_7c15),
        enabled: index % 3 != 2,
        swaparr_enabled: index % 2 == 1,
    }
}

/// Settings record with `count` instances (capped at the instance limit)
pub fn create_mock_settings(app: AppType, count: usize) -> AppSettings {
    let mut settings = match app {
        AppType::Sonarr => AppSettings::new()
            .with("hunt_missing_mode", SettingValue::String("episodes".into()))
            .with("hunt_missing_items", SettingValue::Int(5))
            .with("sleep_duration", SettingValue::Int(1800)),
        AppType::Radarr => AppSettings::new()
            .with("release_type", SettingValue::String("digital".into()))
            .with("hunt_upgrade_movies", SettingValue::Int(2)),
        AppType::Swaparr => AppSettings::new()
            .with("enabled", SettingValue::Bool(true))
            .with("max_strikes", SettingValue::Int(5))
            .with("max_download_time", SettingValue::String("6h".into()))
            .with("ignore_above_size", SettingValue::String("50GB".into())),
        AppType::General => AppSettings::new()
            .with("timezone", SettingValue::String("Europe/Amsterdam".into()))
            .with("auth_mode", SettingValue::String("local_bypass".into()))
            .with("enable_notifications", SettingValue::Bool(true))
            .with(
                "apprise_urls",
                SettingValue::List(vec![
                    "discord://webhook_id/webhook_token".into(),
                    "tgram://bottoken/ChatID".into(),
                ]),
            ),
        _ => AppSettings::new().with("hourly_cap", SettingValue::Int(40)),
    };

    if app.has_instances() {
        let instances = (0..count.min(MAX_INSTANCES))
            .map(|i| create_mock_instance(app, i))
            .collect();
        settings.set(INSTANCES_KEY, SettingValue::Instances(instances));
    }
    settings
}

/// Mock reply to a connection test; the url picks the outcome
pub fn create_mock_test_response(api_url: &str) -> TestConnectionResponse {
    if api_url.contains("fail") {
        TestConnectionResponse {
            success: false,
            version: None,
            message: Some("Invalid API key".into()),
        }
    } else {
        TestConnectionResponse {
            success: true,
            version: Some(MOCK_VERSION.into()),
            message: None,
        }
    }
}

pub fn create_mock_swaparr_status() -> SwaparrStatus {
    SwaparrStatus {
        enabled: true,
        session_stats: SessionStats {
            processed: 42,
            strikes: 7,
            removals: 3,
            ignored: 5,
            last_run_time: Some("2025-03-01T10:15:00+00:00".into()),
        },
    }
}

pub fn create_mock_action_response(action: SwaparrAction) -> ActionResponse {
    let message = match action {
        SwaparrAction::Test => "Swaparr configuration is valid",
        SwaparrAction::Run => "Swaparr cycle started",
        SwaparrAction::Reset => "Swaparr statistics reset",
    };
    ActionResponse { success: true, message: Some(message.into()) }
}
