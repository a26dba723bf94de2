/// Schema tables describing every settings form
///
/// Each app type has a static `AppSchema`: titled sections of `FieldSpec`s
/// carrying the field key, element id, label, help text, input kind and
/// default. The form builder and the extractor are both driven by these
/// tables, so a field's default lives in exactly one place.

mod tables;

use crate::settings::SettingValue;
use crate::types::AppType;

pub use tables::{AUTH_MODES, NOTIFICATION_LEVELS, TIMEZONES};

/// Ordered value -> label table for select inputs
pub type Choices = phf::OrderedMap<&'static str, &'static str>;

/// Input kind of a field
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Number { min: Option<i64>, max: Option<i64> },
    Toggle,
    Select(&'static Choices),
    /// Select over `AuthMode`; extraction also writes the derived flags
    AuthMode,
    Text { placeholder: &'static str },
    /// Newline-separated list edited in a textarea
    Lines,
    Hidden,
}

/// Default used when a field is missing or unparseable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Int(i64),
    Bool(bool),
    Str(&'static str),
    EmptyList,
}

impl FieldDefault {
    pub fn to_value(&self) -> SettingValue {
        match self {
            FieldDefault::Int(i) => SettingValue::Int(*i),
            FieldDefault::Bool(b) => SettingValue::Bool(*b),
            FieldDefault::Str(s) => SettingValue::String(s.to_string()),
            FieldDefault::EmptyList => SettingValue::List(Vec::new()),
        }
    }
}

/// Extra text rendered next to a field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    None,
    /// Seconds shown as minutes or hours
    SleepDuration,
    /// Seconds spelled out ("1 hour, 30 minutes")
    ReadableDuration,
    /// Hours shown as days
    Days,
    /// Swaparr duration string shown as seconds
    DurationString,
    /// Swaparr size string shown as bytes
    SizeString,
}

/// Warning rendered under a field
#[derive(Debug, Clone, Copy)]
pub struct FieldNote {
    pub id: &'static str,
    /// Value the field must hold for the note to show; `None` always shows it
    pub when: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub dom_id: &'static str,
    pub label: &'static str,
    pub help: &'static str,
    pub kind: FieldKind,
    pub default: FieldDefault,
    pub hint: Hint,
    pub note: Option<FieldNote>,
    /// Toggle that must be on for this field to be editable
    pub depends_on: Option<&'static str>,
}

impl FieldSpec {
    pub const fn number(
        key: &'static str,
        dom_id: &'static str,
        label: &'static str,
        help: &'static str,
        min: Option<i64>,
        max: Option<i64>,
        default: i64,
    ) -> Self {
        Self::new(key, dom_id, label, help, FieldKind::Number { min, max }, FieldDefault::Int(default))
    }

    pub const fn toggle(
        key: &'static str,
        dom_id: &'static str,
        label: &'static str,
        help: &'static str,
        default: bool,
    ) -> Self {
        Self::new(key, dom_id, label, help, FieldKind::Toggle, FieldDefault::Bool(default))
    }

    pub const fn select(
        key: &'static str,
        dom_id: &'static str,
        label: &'static str,
        help: &'static str,
        choices: &'static Choices,
        default: &'static str,
    ) -> Self {
        Self::new(key, dom_id, label, help, FieldKind::Select(choices), FieldDefault::Str(default))
    }

    pub const fn text(
        key: &'static str,
        dom_id: &'static str,
        label: &'static str,
        help: &'static str,
        placeholder: &'static str,
        default: &'static str,
    ) -> Self {
        Self::new(key, dom_id, label, help, FieldKind::Text { placeholder }, FieldDefault::Str(default))
    }

    const fn new(
        key: &'static str,
        dom_id: &'static str,
        label: &'static str,
        help: &'static str,
        kind: FieldKind,
        default: FieldDefault,
    ) -> Self {
        FieldSpec {
            key,
            dom_id,
            label,
            help,
            kind,
            default,
            hint: Hint::None,
            note: None,
            depends_on: None,
        }
    }

    pub const fn with_kind(mut self, kind: FieldKind, default: FieldDefault) -> Self {
        self.kind = kind;
        self.default = default;
        self
    }

    pub const fn with_hint(mut self, hint: Hint) -> Self {
        self.hint = hint;
        self
    }

    pub const fn with_note(mut self, id: &'static str, when: &'static str, text: &'static str) -> Self {
        self.note = Some(FieldNote { id, when: Some(when), text });
        self
    }

    pub const fn with_warning(mut self, id: &'static str, text: &'static str) -> Self {
        self.note = Some(FieldNote { id, when: None, text });
        self
    }

    pub const fn depends_on(mut self, toggle_key: &'static str) -> Self {
        self.depends_on = Some(toggle_key);
        self
    }

    /// Choices offered by a select-like field
    pub fn choices(&self) -> Option<&'static Choices> {
        match self.kind {
            FieldKind::Select(choices) => Some(choices),
            FieldKind::AuthMode => Some(&AUTH_MODES),
            _ => None,
        }
    }

    /// Whether `value` is within the field's numeric bounds
    pub fn in_range(&self, value: i64) -> bool {
        match self.kind {
            FieldKind::Number { min, max } => {
                min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

#[derive(Debug, Clone, Copy)]
pub struct AppSchema {
    pub app: AppType,
    pub sections: &'static [Section],
}

impl AppSchema {
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let sections: &'static [Section] = self.sections;
        sections.iter().flat_map(|section| section.fields.iter())
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields().find(|field| field.key == key)
    }
}

/// Schema table for an app type
pub fn schema_for(app: AppType) -> &'static AppSchema {
    match app {
        AppType::Sonarr => &tables::SONARR,
        AppType::Radarr => &tables::RADARR,
        AppType::Lidarr => &tables::LIDARR,
        AppType::Readarr => &tables::READARR,
        AppType::Whisparr => &tables::WHISPARR,
        AppType::Eros => &tables::EROS,
        AppType::Swaparr => &tables::SWAPARR,
        AppType::General => &tables::GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_schema_matches_app() {
        for app in AppType::ALL {
            assert_eq!(schema_for(app).app, app);
        }
    }

    #[test]
    fn test_numeric_defaults_are_non_negative() {
        for app in AppType::ALL {
            for field in schema_for(app).fields() {
                if let FieldDefault::Int(value) = field.default {
                    assert!(value >= 0, "{}.{} defaults to {}", app, field.key, value);
                    assert!(field.in_range(value), "{}.{} default out of range", app, field.key);
                }
            }
        }
    }

    #[test]
    fn test_select_defaults_are_choices() {
        for app in AppType::ALL {
            for field in schema_for(app).fields() {
                if let (Some(choices), FieldDefault::Str(default)) = (field.choices(), field.default) {
                    assert!(choices.contains_key(default), "{}.{}", app, field.key);
                }
            }
        }
    }

    #[test]
    fn test_keys_and_ids_are_unique() {
        for app in AppType::ALL {
            let mut keys = HashSet::new();
            let mut ids = HashSet::new();
            for field in schema_for(app).fields() {
                assert!(keys.insert(field.key), "duplicate key {}.{}", app, field.key);
                assert!(ids.insert(field.dom_id), "duplicate id {}.{}", app, field.dom_id);
            }
        }
    }

    #[test]
    fn test_documented_defaults() {
        let sonarr = schema_for(AppType::Sonarr);
        assert_eq!(sonarr.field("sleep_duration").unwrap().default, FieldDefault::Int(900));
        assert_eq!(sonarr.field("hourly_cap").unwrap().default, FieldDefault::Int(20));
        assert_eq!(sonarr.field("monitored_only").unwrap().default, FieldDefault::Bool(true));
        assert_eq!(sonarr.field("hunt_missing_mode").unwrap().default, FieldDefault::Str("seasons_packs"));

        let radarr = schema_for(AppType::Radarr);
        assert_eq!(radarr.field("release_type").unwrap().default, FieldDefault::Str("physical"));

        let swaparr = schema_for(AppType::Swaparr);
        assert_eq!(swaparr.field("max_download_time").unwrap().default, FieldDefault::Str("2h"));
        assert_eq!(swaparr.field("enabled").unwrap().default, FieldDefault::Bool(false));

        let general = schema_for(AppType::General);
        assert_eq!(general.field("stateful_management_hours").unwrap().default, FieldDefault::Int(168));
        assert_eq!(general.field("apprise_urls").unwrap().default, FieldDefault::EmptyList);
        assert_eq!(general.field("timezone").unwrap().default, FieldDefault::Str("UTC"));
    }

    #[test]
    fn test_dependent_fields_point_at_toggles() {
        for app in AppType::ALL {
            let schema = schema_for(app);
            for field in schema.fields() {
                if let Some(toggle) = field.depends_on {
                    let target = schema.field(toggle).expect("dependency exists");
                    assert!(matches!(target.kind, FieldKind::Toggle));
                }
            }
        }
    }

    #[test]
    fn test_in_range() {
        let cap = schema_for(AppType::Sonarr).field("hourly_cap").unwrap();
        assert!(cap.in_range(1));
        assert!(cap.in_range(500));
        assert!(!cap.in_range(0));
        assert!(!cap.in_range(501));
    }
}
