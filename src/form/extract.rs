use super::build::split_lines;
use super::{FormData, InstanceFields};
use crate::schema::{schema_for, FieldKind, FieldSpec};
use crate::settings::{AppSettings, AuthMode, InstanceConfig, SettingValue, INSTANCES_KEY};
use crate::types::{AppType, MAX_INSTANCES};

/// Read a form submission back into a settings record
///
/// Every schema field is written: submitted values when they parse, the
/// field's default otherwise. Instance-bearing apps always get between one
/// and nine instances; the others get an empty list.
pub fn extract(app: AppType, data: &FormData) -> AppSettings {
    let schema = schema_for(app);
    let mut settings = AppSettings::new();

    let instances = if app.has_instances() { extract_instances(data) } else { Vec::new() };
    settings.set(INSTANCES_KEY, SettingValue::Instances(instances));

    for spec in schema.fields() {
        let raw = data.get(spec.key);
        match spec.kind {
            FieldKind::AuthMode => {
                let mode = raw
                    .and_then(|value| value.trim().parse::<AuthMode>().ok())
                    .unwrap_or_default();
                let (local_access_bypass, proxy_auth_bypass) = mode.flags();
                settings.set(spec.key, SettingValue::String(mode.as_str().to_string()));
                settings.set("local_access_bypass", SettingValue::Bool(local_access_bypass));
                settings.set("proxy_auth_bypass", SettingValue::Bool(proxy_auth_bypass));
            }
            _ => settings.set(spec.key, extract_field(spec, raw)),
        }
    }

    tracing::debug!("Extracted {} settings for {}", settings.len(), app);
    settings
}

fn extract_field(spec: &FieldSpec, raw: Option<&str>) -> SettingValue {
    let default = spec.default.to_value();
    let Some(raw) = raw else {
        return default;
    };

    match spec.kind {
        FieldKind::Toggle => SettingValue::Bool(is_checked(raw)),
        FieldKind::Number { .. } => match leading_int(raw) {
            Some(value) => {
                if !spec.in_range(value) {
                    tracing::warn!("{} = {} is outside the allowed range", spec.key, value);
                }
                SettingValue::Int(value)
            }
            None => default,
        },
        FieldKind::Select(choices) => {
            if choices.contains_key(raw) {
                SettingValue::String(raw.to_string())
            } else {
                if !raw.is_empty() {
                    tracing::warn!("Unknown option '{}' for {}, using default", raw, spec.key);
                }
                default
            }
        }
        FieldKind::Lines => SettingValue::List(split_lines(raw)),
        FieldKind::Text { .. } | FieldKind::Hidden | FieldKind::AuthMode => {
            if raw.is_empty() {
                default
            } else {
                SettingValue::String(raw.to_string())
            }
        }
    }
}

fn extract_instances(data: &FormData) -> Vec<InstanceConfig> {
    let groups = data.instance_groups();
    if groups.len() > MAX_INSTANCES {
        tracing::warn!(
            "Form submitted {} instances, keeping the first {}",
            groups.len(),
            MAX_INSTANCES
        );
    }

    let mut instances: Vec<InstanceConfig> = groups
        .values()
        .take(MAX_INSTANCES)
        .enumerate()
        .map(|(position, fields)| instance_from_fields(position, fields))
        .collect();

    if instances.is_empty() {
        tracing::warn!("No instances submitted, adding a default empty instance");
        instances.push(InstanceConfig::placeholder("", ""));
    }
    instances
}

fn instance_from_fields(position: usize, fields: &InstanceFields) -> InstanceConfig {
    let text = |key: &str| fields.get(key).cloned().unwrap_or_default();
    let name = text("name");
    let api_url = text("api_url");
    let api_key = text("api_key");

    if name.is_empty() || api_url.is_empty() || api_key.is_empty() {
        tracing::debug!("Instance {} is missing required fields", position);
    }

    InstanceConfig {
        name: if name.is_empty() { format!("Instance {}", position + 1) } else { name },
        api_url,
        api_key,
        enabled: fields.get("enabled").map_or(true, |v| is_checked(v)),
        swaparr_enabled: fields.get("swaparr_enabled").map_or(false, |v| is_checked(v)),
    }
}

fn is_checked(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1")
}

/// Leading integer of the trimmed text ("12abc" -> 12)
fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse().ok()
}
