/// Shared types used across the application
///
/// This module contains type definitions that are shared between
/// the library (forms, commands) and the binary (main.rs).

use std::fmt;
use std::str::FromStr;

/// Maximum number of instances an app type can be configured with
pub const MAX_INSTANCES: usize = 9;

/// The kinds of settings pages the forms can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AppType {
    Sonarr,
    Radarr,
    Lidarr,
    Readarr,
    Whisparr,
    Eros,
    Swaparr,
    General,
}

impl AppType {
    pub const ALL: [AppType; 8] = [
        AppType::Sonarr,
        AppType::Radarr,
        AppType::Lidarr,
        AppType::Readarr,
        AppType::Whisparr,
        AppType::Eros,
        AppType::Swaparr,
        AppType::General,
    ];

    /// Lowercase identifier used in URLs, element ids and form attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Sonarr => "sonarr",
            AppType::Radarr => "radarr",
            AppType::Lidarr => "lidarr",
            AppType::Readarr => "readarr",
            AppType::Whisparr => "whisparr",
            AppType::Eros => "eros",
            AppType::Swaparr => "swaparr",
            AppType::General => "general",
        }
    }

    /// Name shown in headings ("Whisparr V2 Instances")
    pub fn display_name(&self) -> &'static str {
        match self {
            AppType::Sonarr => "Sonarr",
            AppType::Radarr => "Radarr",
            AppType::Lidarr => "Lidarr",
            AppType::Readarr => "Readarr",
            AppType::Whisparr => "Whisparr V2",
            AppType::Eros => "Whisparr V3",
            AppType::Swaparr => "Swaparr",
            AppType::General => "General",
        }
    }

    /// Capitalized identifier used in button labels and connection messages
    pub fn title(&self) -> &'static str {
        match self {
            AppType::Sonarr => "Sonarr",
            AppType::Radarr => "Radarr",
            AppType::Lidarr => "Lidarr",
            AppType::Readarr => "Readarr",
            AppType::Whisparr => "Whisparr",
            AppType::Eros => "Eros",
            AppType::Swaparr => "Swaparr",
            AppType::General => "General",
        }
    }

    /// Whether the settings page carries an instance list
    pub fn has_instances(&self) -> bool {
        !matches!(self, AppType::Swaparr | AppType::General)
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown app type '{0}'")]
pub struct UnknownAppType(pub String);

impl FromStr for AppType {
    type Err = UnknownAppType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        AppType::ALL
            .iter()
            .copied()
            .find(|app| app.as_str() == lowered)
            .ok_or_else(|| UnknownAppType(s.to_string()))
    }
}
