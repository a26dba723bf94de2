use super::{Control, Form, FormSection, Input, InstanceList};
use crate::formatting::{format_bytes, seconds_to_readable, sleep_hint, stateful_days};
use crate::schema::{schema_for, AppSchema, FieldDefault, FieldKind, FieldNote, FieldSpec, Hint};
use crate::settings::AppSettings;
use crate::swaparr::{parse_size, parse_time_string};
use crate::types::AppType;

/// Map a settings record onto the app's schema, filling in defaults
pub fn build_form(app: AppType, settings: &AppSettings) -> Form {
    let schema = schema_for(app);

    let sections = schema
        .sections
        .iter()
        .map(|section| FormSection {
            title: section.title,
            controls: section
                .fields
                .iter()
                .map(|spec| build_control(schema, spec, settings))
                .collect(),
        })
        .collect();

    let instances = app
        .has_instances()
        .then(|| InstanceList::from_settings(app, settings));

    Form { app, instances, sections }
}

fn build_control(schema: &AppSchema, spec: &'static FieldSpec, settings: &AppSettings) -> Control {
    let input = current_input(spec, settings);
    let hint = hint_for(spec.hint, &input);

    let note_visible = match (&spec.note, &input) {
        (Some(FieldNote { when: None, .. }), _) => true,
        (Some(FieldNote { when: Some(when), .. }), Input::Select(value)) => value == when,
        _ => false,
    };

    let disabled = match spec.depends_on.and_then(|key| schema.field(key)) {
        Some(toggle) => !toggle_value(toggle, settings),
        None => false,
    };

    Control { spec, input, hint, note_visible, disabled }
}

fn toggle_value(spec: &FieldSpec, settings: &AppSettings) -> bool {
    settings.get_bool(spec.key).unwrap_or(match spec.default {
        FieldDefault::Bool(b) => b,
        _ => false,
    })
}

fn default_str(spec: &FieldSpec) -> String {
    match spec.default {
        FieldDefault::Str(s) => s.to_string(),
        FieldDefault::Int(i) => i.to_string(),
        FieldDefault::Bool(b) => b.to_string(),
        FieldDefault::EmptyList => String::new(),
    }
}

fn current_input(spec: &FieldSpec, settings: &AppSettings) -> Input {
    let key = spec.key;
    match spec.kind {
        FieldKind::Number { .. } => {
            let default = match spec.default {
                FieldDefault::Int(i) => i,
                _ => 0,
            };
            Input::Number(settings.get_int(key).unwrap_or(default))
        }
        FieldKind::Toggle => Input::Toggle(toggle_value(spec, settings)),
        FieldKind::Select(choices) => {
            let selected = settings
                .get_str(key)
                .filter(|value| choices.contains_key(*value))
                .map(str::to_string)
                .unwrap_or_else(|| default_str(spec));
            Input::Select(selected)
        }
        FieldKind::AuthMode => Input::Select(settings.auth_mode().as_str().to_string()),
        FieldKind::Text { .. } => Input::Text(
            settings
                .get_str(key)
                .map(str::to_string)
                .unwrap_or_else(|| default_str(spec)),
        ),
        FieldKind::Lines => {
            let lines = match (settings.get_list(key), settings.get_str(key)) {
                (Some(list), _) => list.to_vec(),
                (None, Some(text)) => split_lines(text),
                (None, None) => Vec::new(),
            };
            Input::Lines(lines)
        }
        FieldKind::Hidden => Input::Hidden(
            settings
                .get_str(key)
                .map(str::to_string)
                .unwrap_or_else(|| default_str(spec)),
        ),
    }
}

/// Split a textarea value into trimmed, non-empty lines
pub(super) fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn hint_for(hint: Hint, input: &Input) -> Option<String> {
    match (hint, input) {
        (Hint::SleepDuration, Input::Number(seconds)) => Some(sleep_hint(*seconds)),
        (Hint::ReadableDuration, Input::Number(seconds)) => Some(seconds_to_readable(*seconds)),
        (Hint::Days, Input::Number(hours)) => Some(stateful_days(*hours)),
        (Hint::DurationString, Input::Text(text)) => {
            let seconds = i64::try_from(parse_time_string(text)).unwrap_or(i64::MAX);
            Some(seconds_to_readable(seconds))
        }
        (Hint::SizeString, Input::Text(text)) => Some(format_bytes(parse_size(text))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{InstanceConfig, SettingValue, INSTANCES_KEY};

    #[test]
    fn test_empty_settings_yield_one_default_instance() {
        for app in AppType::ALL.into_iter().filter(AppType::has_instances) {
            let form = build_form(app, &AppSettings::new());
            let instances = form.instances.expect("instance list");
            assert_eq!(instances.len(), 1, "{}", app);
            assert_eq!(instances.get(0).unwrap().name, "Default");
        }
    }

    #[test]
    fn test_apps_without_instances() {
        assert!(build_form(AppType::Swaparr, &AppSettings::new()).instances.is_none());
        assert!(build_form(AppType::General, &AppSettings::new()).instances.is_none());
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let form = build_form(AppType::Sonarr, &AppSettings::new());
        assert_eq!(form.control("sleep_duration").unwrap().input, Input::Number(900));
        assert_eq!(form.control("hourly_cap").unwrap().input, Input::Number(20));
        assert_eq!(form.control("monitored_only").unwrap().input, Input::Toggle(true));
        assert_eq!(
            form.control("hunt_missing_mode").unwrap().input,
            Input::Select("seasons_packs".into())
        );
    }

    #[test]
    fn test_zero_is_not_replaced_by_default() {
        let settings = AppSettings::new().with("hunt_missing_items", SettingValue::Int(0));
        let form = build_form(AppType::Sonarr, &settings);
        assert_eq!(form.control("hunt_missing_items").unwrap().input, Input::Number(0));
    }

    #[test]
    fn test_unknown_select_value_uses_default() {
        let settings = AppSettings::new().with("release_type", SettingValue::String("vhs".into()));
        let form = build_form(AppType::Radarr, &settings);
        assert_eq!(form.control("release_type").unwrap().input, Input::Select("physical".into()));
    }

    #[test]
    fn test_episodes_warning_visibility() {
        let settings = AppSettings::new()
            .with("hunt_missing_mode", SettingValue::String("episodes".into()))
            .with("upgrade_mode", SettingValue::String("seasons_packs".into()));
        let form = build_form(AppType::Sonarr, &settings);
        assert!(form.control("hunt_missing_mode").unwrap().note_visible);
        assert!(!form.control("upgrade_mode").unwrap().note_visible);
    }

    #[test]
    fn test_hourly_cap_warning_always_visible() {
        for app in AppType::ALL.into_iter().filter(AppType::has_instances) {
            let settings = AppSettings::new().with("hourly_cap", SettingValue::Int(5));
            let form = build_form(app, &settings);
            let control = form.control("hourly_cap").unwrap();
            assert!(control.note_visible, "{}", app);
            assert!(control.spec.note.unwrap().text.contains("banned"));
        }
    }

    #[test]
    fn test_hints() {
        let settings = AppSettings::new().with("sleep_duration", SettingValue::Int(5400));
        let form = build_form(AppType::Radarr, &settings);
        assert_eq!(form.control("sleep_duration").unwrap().hint.as_deref(), Some("1.5 hours"));

        let general = build_form(AppType::General, &AppSettings::new());
        assert_eq!(
            general.control("stateful_management_hours").unwrap().hint.as_deref(),
            Some("7.0 days")
        );

        let swaparr = build_form(AppType::Swaparr, &AppSettings::new());
        assert_eq!(swaparr.control("max_download_time").unwrap().hint.as_deref(), Some("2 hours"));
        assert_eq!(swaparr.control("ignore_above_size").unwrap().hint.as_deref(), Some("25.0 GB"));
        assert_eq!(swaparr.control("sleep_duration").unwrap().hint.as_deref(), Some("15 minutes"));
    }

    #[test]
    fn test_oversized_duration_uses_default_hint() {
        let settings = AppSettings::new()
            .with("max_download_time", SettingValue::String("999999999999999d".into()));
        let form = build_form(AppType::Swaparr, &settings);
        let control = form.control("max_download_time").unwrap();
        assert_eq!(control.input, Input::Text("999999999999999d".into()));
        assert_eq!(control.hint.as_deref(), Some("2 hours"));
    }

    #[test]
    fn test_notification_fields_follow_toggle() {
        let off = build_form(AppType::General, &AppSettings::new());
        assert!(off.control("notification_level").unwrap().disabled);
        assert!(off.control("apprise_urls").unwrap().disabled);
        assert!(!off.control("enable_notifications").unwrap().disabled);

        let settings = AppSettings::new().with("enable_notifications", SettingValue::Bool(true));
        let on = build_form(AppType::General, &settings);
        assert!(!on.control("notification_level").unwrap().disabled);
    }

    #[test]
    fn test_auth_mode_from_legacy_flags() {
        let settings = AppSettings::new().with("local_access_bypass", SettingValue::Bool(true));
        let form = build_form(AppType::General, &settings);
        assert_eq!(form.control("auth_mode").unwrap().input, Input::Select("local_bypass".into()));
    }

    #[test]
    fn test_lines_accept_list_or_text() {
        let list = AppSettings::new().with(
            "apprise_urls",
            SettingValue::List(vec!["discord://a".into(), "tgram://b".into()]),
        );
        let form = build_form(AppType::General, &list);
        assert_eq!(
            form.control("apprise_urls").unwrap().input,
            Input::Lines(vec!["discord://a".into(), "tgram://b".into()])
        );

        let text = AppSettings::new().with("apprise_urls", SettingValue::String(" a \n\nb".into()));
        let form = build_form(AppType::General, &text);
        assert_eq!(form.control("apprise_urls").unwrap().input, Input::Lines(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_stored_instances_are_kept() {
        let settings = AppSettings::new().with(
            INSTANCES_KEY,
            SettingValue::Instances(vec![
                InstanceConfig { name: "4K".into(), enabled: false, ..Default::default() },
                InstanceConfig { name: "HD".into(), swaparr_enabled: true, ..Default::default() },
            ]),
        );
        let form = build_form(AppType::Radarr, &settings);
        let instances = form.instances.unwrap();
        assert_eq!(instances.len(), 2);
        assert!(!instances.get(0).unwrap().enabled);
        assert!(instances.get(1).unwrap().swaparr_enabled);
    }
}
