/// Static schema tables, one per app type

use phf::phf_ordered_map;

use super::{AppSchema, Choices, FieldDefault, FieldKind, FieldSpec, Hint, Section};
use crate::types::AppType;

const HOURLY_CAP_WARNING: &str = "Setting this too high will risk your accounts being banned! You have been warned!";

const EPISODES_WARNING: &str = "Episodes mode makes excessive API calls and does not support tagging. \
Use only for targeting specific episodes. Season Packs mode is strongly recommended.";

pub static SONARR_MISSING_MODES: Choices = phf_ordered_map! {
    "seasons_packs" => "Season Packs",
    "shows" => "Shows",
    "episodes" => "Episodes",
};

pub static SONARR_UPGRADE_MODES: Choices = phf_ordered_map! {
    "seasons_packs" => "Season Packs",
    "episodes" => "Episodes",
};

pub static RELEASE_TYPES: Choices = phf_ordered_map! {
    "digital" => "Digital Release",
    "physical" => "Physical Release",
    "cinema" => "Cinema Release",
};

pub static LIDARR_MISSING_MODES: Choices = phf_ordered_map! {
    "album" => "Album",
};

pub static EROS_SEARCH_MODES: Choices = phf_ordered_map! {
    "movie" => "Movie",
    "scene" => "Scene",
};

pub static NOTIFICATION_LEVELS: Choices = phf_ordered_map! {
    "info" => "Info",
    "success" => "Success",
    "warning" => "Warning",
    "error" => "Error",
};

pub static AUTH_MODES: Choices = phf_ordered_map! {
    "login" => "Login Mode",
    "local_bypass" => "Local Bypass Mode",
    "no_login" => "No Login Mode",
};

pub static TIMEZONES: Choices = phf_ordered_map! {
    "UTC" => "UTC (Coordinated Universal Time)",
    "America/New_York" => "Eastern Time (America/New_York)",
    "America/Chicago" => "Central Time (America/Chicago)",
    "America/Denver" => "Mountain Time (America/Denver)",
    "America/Los_Angeles" => "Pacific Time (America/Los_Angeles)",
    "Pacific/Honolulu" => "Hawaii Time (Pacific/Honolulu)",
    "America/Toronto" => "Eastern Canada (America/Toronto)",
    "America/Vancouver" => "Pacific Canada (America/Vancouver)",
    "Europe/London" => "UK Time (Europe/London)",
    "Europe/Paris" => "Central Europe (Europe/Paris)",
    "Europe/Berlin" => "Germany (Europe/Berlin)",
    "Europe/Amsterdam" => "Netherlands (Europe/Amsterdam)",
    "Europe/Rome" => "Italy (Europe/Rome)",
    "Europe/Madrid" => "Spain (Europe/Madrid)",
    "Asia/Tokyo" => "Japan (Asia/Tokyo)",
    "Asia/Shanghai" => "China (Asia/Shanghai)",
    "Asia/Kolkata" => "India (Asia/Kolkata)",
    "Australia/Sydney" => "Australia East (Australia/Sydney)",
    "Australia/Perth" => "Australia West (Australia/Perth)",
    "Pacific/Auckland" => "New Zealand (Pacific/Auckland)",
};

// Fields every *arr app carries, with app-prefixed element ids
macro_rules! sleep_duration {
    ($app:literal) => {
        FieldSpec::number(
            "sleep_duration",
            concat!($app, "_sleep_duration"),
            "Sleep Duration",
            "Time in seconds between processing cycles",
            Some(60),
            None,
            900,
        )
        .with_hint(Hint::SleepDuration)
    };
}

macro_rules! hourly_cap {
    ($app:literal) => {
        FieldSpec::number(
            "hourly_cap",
            concat!($app, "_hourly_cap"),
            "API Cap - Hourly",
            "Maximum API requests per hour (helps prevent rate limiting)",
            Some(1),
            Some(500),
            20,
        )
        .with_warning(concat!($app, "_hourly_cap_warning"), HOURLY_CAP_WARNING)
    };
}

macro_rules! monitored_only {
    ($app:literal) => {
        FieldSpec::toggle(
            "monitored_only",
            concat!($app, "_monitored_only"),
            "Monitored Only",
            "Only search for monitored items",
            true,
        )
    };
}

macro_rules! skip_future_releases {
    ($app:literal) => {
        FieldSpec::toggle(
            "skip_future_releases",
            concat!($app, "_skip_future_releases"),
            "Skip Future Releases",
            "Skip searching for items with future release dates",
            true,
        )
    };
}

macro_rules! tag_processed_items {
    ($app:literal) => {
        FieldSpec::toggle(
            "tag_processed_items",
            concat!($app, "_tag_processed_items"),
            "Tag Processed Items",
            "Automatically tag items after they have been processed",
            true,
        )
    };
}

// Missing/upgrade search counts; element ids are given as-is since Sonarr's differ
macro_rules! hunt_items {
    ($missing:literal => $missing_id:literal, $upgrade:literal => $upgrade_id:literal, $noun:literal) => {
        [
            FieldSpec::number(
                $missing,
                $missing_id,
                "Missing Search",
                concat!("Number of missing ", $noun, " to search per cycle (0 to disable)"),
                Some(0),
                None,
                1,
            ),
            FieldSpec::number(
                $upgrade,
                $upgrade_id,
                "Upgrade Search",
                concat!("Number of ", $noun, " to upgrade per cycle (0 to disable)"),
                Some(0),
                None,
                0,
            ),
        ]
    };
}

const SONARR_HUNT: [FieldSpec; 2] = hunt_items!(
    "hunt_missing_items" => "sonarr-hunt-missing-items",
    "hunt_upgrade_items" => "sonarr-hunt-upgrade-items",
    "items"
);
const RADARR_HUNT: [FieldSpec; 2] = hunt_items!(
    "hunt_missing_movies" => "radarr_hunt_missing_movies",
    "hunt_upgrade_movies" => "radarr_hunt_upgrade_movies",
    "movies"
);
const LIDARR_HUNT: [FieldSpec; 2] = hunt_items!(
    "hunt_missing_items" => "lidarr_hunt_missing_items",
    "hunt_upgrade_items" => "lidarr_hunt_upgrade_items",
    "albums"
);
const READARR_HUNT: [FieldSpec; 2] = hunt_items!(
    "hunt_missing_books" => "readarr_hunt_missing_books",
    "hunt_upgrade_books" => "readarr_hunt_upgrade_books",
    "books"
);
const WHISPARR_HUNT: [FieldSpec; 2] = hunt_items!(
    "hunt_missing_items" => "whisparr_hunt_missing_items",
    "hunt_upgrade_items" => "whisparr_hunt_upgrade_items",
    "items"
);
const EROS_HUNT: [FieldSpec; 2] = hunt_items!(
    "hunt_missing_items" => "eros_hunt_missing_items",
    "hunt_upgrade_items" => "eros_hunt_upgrade_items",
    "items"
);

pub static SONARR: AppSchema = AppSchema {
    app: AppType::Sonarr,
    sections: &[
        Section {
            title: "Search Settings",
            fields: &[
                FieldSpec::select(
                    "hunt_missing_mode",
                    "sonarr-hunt-missing-mode",
                    "Missing Search Mode",
                    "How to search for missing Sonarr content (Season Packs recommended for all users)",
                    &SONARR_MISSING_MODES,
                    "seasons_packs",
                )
                .with_note("episodes-missing-warning", "episodes", EPISODES_WARNING),
                FieldSpec::select(
                    "upgrade_mode",
                    "sonarr-upgrade-mode",
                    "Upgrade Mode",
                    "How to search for Sonarr upgrades (Season Packs mode recommended)",
                    &SONARR_UPGRADE_MODES,
                    "seasons_packs",
                )
                .with_note("episodes-upgrade-warning", "episodes", EPISODES_WARNING),
                SONARR_HUNT[0],
                SONARR_HUNT[1],
                sleep_duration!("sonarr"),
                hourly_cap!("sonarr"),
            ],
        },
        Section {
            title: "Additional Options",
            fields: &[
                monitored_only!("sonarr"),
                FieldSpec::toggle(
                    "skip_future_episodes",
                    "sonarr_skip_future_episodes",
                    "Skip Future Episodes",
                    "Skip searching for episodes with future air dates",
                    true,
                ),
                tag_processed_items!("sonarr"),
            ],
        },
    ],
};

pub static RADARR: AppSchema = AppSchema {
    app: AppType::Radarr,
    sections: &[
        Section {
            title: "Search Settings",
            fields: &[
                RADARR_HUNT[0],
                RADARR_HUNT[1],
                sleep_duration!("radarr"),
                hourly_cap!("radarr"),
            ],
        },
        Section {
            title: "Additional Options",
            fields: &[
                monitored_only!("radarr"),
                skip_future_releases!("radarr"),
                FieldSpec::select(
                    "release_type",
                    "radarr_release_type",
                    "Release Type for Future Status",
                    "Which release date to use when deciding whether a movie is released",
                    &RELEASE_TYPES,
                    "physical",
                ),
                tag_processed_items!("radarr"),
            ],
        },
    ],
};

pub static LIDARR: AppSchema = AppSchema {
    app: AppType::Lidarr,
    sections: &[
        Section {
            title: "Search Settings",
            fields: &[
                FieldSpec::select(
                    "hunt_missing_mode",
                    "lidarr_hunt_missing_mode",
                    "Missing Search Mode",
                    "Search for individual albums",
                    &LIDARR_MISSING_MODES,
                    "album",
                ),
                LIDARR_HUNT[0],
                LIDARR_HUNT[1],
                sleep_duration!("lidarr"),
                hourly_cap!("lidarr"),
            ],
        },
        Section {
            title: "Additional Options",
            fields: &[
                monitored_only!("lidarr"),
                skip_future_releases!("lidarr"),
                tag_processed_items!("lidarr"),
            ],
        },
    ],
};

pub static READARR: AppSchema = AppSchema {
    app: AppType::Readarr,
    sections: &[
        Section {
            title: "Search Settings",
            fields: &[
                READARR_HUNT[0],
                READARR_HUNT[1],
                sleep_duration!("readarr"),
                hourly_cap!("readarr"),
            ],
        },
        Section {
            title: "Additional Options",
            fields: &[
                monitored_only!("readarr"),
                skip_future_releases!("readarr"),
                tag_processed_items!("readarr"),
            ],
        },
    ],
};

pub static WHISPARR: AppSchema = AppSchema {
    app: AppType::Whisparr,
    sections: &[
        Section {
            title: "Search Settings",
            fields: &[
                WHISPARR_HUNT[0],
                WHISPARR_HUNT[1],
                sleep_duration!("whisparr"),
                hourly_cap!("whisparr"),
            ],
        },
        Section {
            title: "Additional Options",
            fields: &[
                monitored_only!("whisparr"),
                skip_future_releases!("whisparr"),
                tag_processed_items!("whisparr"),
                FieldSpec::text("whisparr_version", "whisparr-api-version", "API Version", "", "", "v3")
                    .with_kind(FieldKind::Hidden, FieldDefault::Str("v3")),
            ],
        },
    ],
};

pub static EROS: AppSchema = AppSchema {
    app: AppType::Eros,
    sections: &[
        Section {
            title: "Search Settings",
            fields: &[
                FieldSpec::select(
                    "search_mode",
                    "eros_search_mode",
                    "Search Mode",
                    "Search by whole movie or by individual scene",
                    &EROS_SEARCH_MODES,
                    "movie",
                ),
                EROS_HUNT[0],
                EROS_HUNT[1],
                sleep_duration!("eros"),
                hourly_cap!("eros"),
            ],
        },
        Section {
            title: "Additional Options",
            fields: &[
                monitored_only!("eros"),
                skip_future_releases!("eros"),
                tag_processed_items!("eros"),
            ],
        },
    ],
};

pub static SWAPARR: AppSchema = AppSchema {
    app: AppType::Swaparr,
    sections: &[Section {
        title: "Swaparr Configuration",
        fields: &[
            FieldSpec::toggle(
                "enabled",
                "swaparr_enabled",
                "Enable Swaparr",
                "Monitor download queues and remove stalled downloads",
                false,
            ),
            FieldSpec::number(
                "max_strikes",
                "swaparr_max_strikes",
                "Max Strikes",
                "Strikes a stalled download receives before it is removed",
                Some(1),
                Some(10),
                3,
            ),
            FieldSpec::text(
                "max_download_time",
                "swaparr_max_download_time",
                "Max Download Time",
                "Downloads slower than this are considered stalled (e.g. 30m, 2h, 1d)",
                "2h",
                "2h",
            )
            .with_hint(Hint::DurationString),
            FieldSpec::text(
                "ignore_above_size",
                "swaparr_ignore_above_size",
                "Ignore Above Size",
                "Downloads larger than this are never struck (e.g. 25GB, 1TB)",
                "25GB",
                "25GB",
            )
            .with_hint(Hint::SizeString),
            FieldSpec::toggle(
                "remove_from_client",
                "swaparr_remove_from_client",
                "Remove From Client",
                "Also remove the download from the download client",
                true,
            ),
            FieldSpec::toggle(
                "dry_run",
                "swaparr_dry_run",
                "Dry Run",
                "Log what would be removed without removing anything",
                false,
            ),
            FieldSpec::number(
                "sleep_duration",
                "swaparr_sleep_duration",
                "Sleep Duration",
                "Time to wait between Swaparr processing cycles (default: 900 seconds / 15 minutes)",
                Some(60),
                Some(86400),
                900,
            )
            .with_hint(Hint::ReadableDuration),
        ],
    }],
};

pub static GENERAL: AppSchema = AppSchema {
    app: AppType::General,
    sections: &[
        Section {
            title: "System Settings",
            fields: &[
                FieldSpec::toggle(
                    "check_for_updates",
                    "check_for_updates",
                    "Check for Updates",
                    "Check for new releases on startup",
                    true,
                ),
                FieldSpec::toggle(
                    "display_community_resources",
                    "display_community_resources",
                    "Display Resources",
                    "Show community resources on the home page",
                    true,
                ),
                FieldSpec::toggle(
                    "low_usage_mode",
                    "low_usage_mode",
                    "Low Usage Mode",
                    "Reduce animations and polling to save resources",
                    false,
                ),
                FieldSpec::select(
                    "timezone",
                    "timezone",
                    "Timezone",
                    "Timezone used for schedules and log timestamps",
                    &TIMEZONES,
                    "UTC",
                ),
            ],
        },
        Section {
            title: "Stateful Management",
            fields: &[FieldSpec::number(
                "stateful_management_hours",
                "stateful_management_hours",
                "State Reset Interval (Hours)",
                "Hours before resetting processed media state",
                Some(1),
                None,
                168,
            )
            .with_hint(Hint::Days)],
        },
        Section {
            title: "Security",
            fields: &[
                FieldSpec::select(
                    "auth_mode",
                    "auth_mode",
                    "Authentication Mode",
                    "Login Mode requires a login for all connections; Local Bypass Mode skips it on the local network; No Login Mode disables it entirely",
                    &AUTH_MODES,
                    "login",
                )
                .with_kind(FieldKind::AuthMode, FieldDefault::Str("login")),
                FieldSpec::toggle(
                    "ssl_verify",
                    "ssl_verify",
                    "Enable SSL Verify",
                    "Verify SSL certificates when connecting to apps",
                    true,
                ),
            ],
        },
        Section {
            title: "Advanced Settings",
            fields: &[
                FieldSpec::number(
                    "api_timeout",
                    "api_timeout",
                    "API Timeout",
                    "Timeout in seconds for API requests",
                    Some(10),
                    None,
                    120,
                ),
                FieldSpec::number(
                    "command_wait_delay",
                    "command_wait_delay",
                    "Command Wait Delay",
                    "Seconds to wait between command status checks",
                    Some(1),
                    None,
                    1,
                ),
                FieldSpec::number(
                    "command_wait_attempts",
                    "command_wait_attempts",
                    "CMD Wait Attempts",
                    "Maximum number of command status checks",
                    Some(1),
                    None,
                    600,
                ),
                FieldSpec::number(
                    "log_refresh_interval_seconds",
                    "log_refresh_interval_seconds",
                    "Log Refresh Interval",
                    "Seconds between log view refreshes",
                    Some(5),
                    None,
                    30,
                ),
                FieldSpec::text(
                    "base_url",
                    "base_url",
                    "Base URL",
                    "Path prefix when served behind a reverse proxy (e.g. /huntarr)",
                    "/huntarr",
                    "",
                ),
            ],
        },
        Section {
            title: "Apprise Notifications",
            fields: &[
                FieldSpec::toggle(
                    "enable_notifications",
                    "enable_notifications",
                    "Enable Notifications",
                    "Enable sending notifications via Apprise for media processing events",
                    false,
                ),
                FieldSpec::select(
                    "notification_level",
                    "notification_level",
                    "Notification Level",
                    "Minimum level of events that will trigger notifications",
                    &NOTIFICATION_LEVELS,
                    "info",
                )
                .depends_on("enable_notifications"),
                FieldSpec::text(
                    "apprise_urls",
                    "apprise_urls",
                    "Apprise URLs",
                    "Enter one Apprise URL per line (e.g., discord://, telegram://, etc)",
                    "",
                    "",
                )
                .with_kind(FieldKind::Lines, FieldDefault::EmptyList)
                .depends_on("enable_notifications"),
                FieldSpec::toggle(
                    "notify_on_missing",
                    "notify_on_missing",
                    "Notify on Missing",
                    "Send notifications when missing media is processed",
                    true,
                )
                .depends_on("enable_notifications"),
                FieldSpec::toggle(
                    "notify_on_upgrade",
                    "notify_on_upgrade",
                    "Notify on Upgrade",
                    "Send notifications when media is upgraded",
                    true,
                )
                .depends_on("enable_notifications"),
                FieldSpec::toggle(
                    "notification_include_instance",
                    "notification_include_instance",
                    "Include Instance",
                    "Include the instance name in notifications",
                    true,
                )
                .depends_on("enable_notifications"),
                FieldSpec::toggle(
                    "notification_include_app",
                    "notification_include_app",
                    "Include App Name",
                    "Include the app name in notifications",
                    true,
                )
                .depends_on("enable_notifications"),
            ],
        },
    ],
};
