/// In-memory settings records
///
/// An `AppSettings` is the flat record the backend persists for one app type:
/// scalar fields keyed by name plus an optional `instances` list. It loads
/// from and saves to a JSON object, keeping keys it does not recognize.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::types::MAX_INSTANCES;

/// Key holding the instance list
pub const INSTANCES_KEY: &str = "instances";

/// Represents the different types of setting values
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    String(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
    Instances(Vec<InstanceConfig>),
}

impl SettingValue {
    /// Convert a JSON value, dropping shapes a settings record cannot hold
    pub fn from_json(value: &Value) -> Option<SettingValue> {
        match value {
            Value::Bool(b) => Some(SettingValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(SettingValue::Int(i))
                } else {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.is_finite())
                        .map(|f| SettingValue::Int(f as i64))
                }
            }
            Value::String(s) => Some(SettingValue::String(s.clone())),
            Value::Array(items) => {
                if items.iter().all(Value::is_string) {
                    let list = items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect();
                    Some(SettingValue::List(list))
                } else if items.iter().all(Value::is_object) {
                    let instances = items
                        .iter()
                        .filter_map(Value::as_object)
                        .map(InstanceConfig::from_json_fields)
                        .collect();
                    Some(SettingValue::Instances(instances))
                } else {
                    None
                }
            }
            Value::Null | Value::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            SettingValue::String(s) => Value::String(s.clone()),
            SettingValue::Bool(b) => Value::Bool(*b),
            SettingValue::Int(i) => Value::from(*i),
            SettingValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            SettingValue::Instances(instances) => {
                Value::Array(instances.iter().map(InstanceConfig::to_json).collect())
            }
        }
    }
}

/// One configured connection to an external application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    pub name: String,
    pub api_url: String,
    pub api_key: String,
    pub enabled: bool,
    pub swaparr_enabled: bool,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        InstanceConfig {
            name: String::new(),
            api_url: String::new(),
            api_key: String::new(),
            enabled: true,
            swaparr_enabled: false,
        }
    }
}

impl InstanceConfig {
    /// The instance synthesized when a record has none
    pub fn placeholder(api_url: &str, api_key: &str) -> Self {
        InstanceConfig {
            name: "Default".to_string(),
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            ..Default::default()
        }
    }

    /// Decode a stored instance field by field; a wrongly typed field is
    /// treated as missing so the rest of the instance survives
    pub fn from_json_fields(fields: &Map<String, Value>) -> Self {
        let defaults = InstanceConfig::default();
        let text = |key: &str| match fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                tracing::warn!("Ignoring instance field '{}' with unexpected value {}", key, other);
                String::new()
            }
        };
        let flag = |key: &str, default: bool| match fields.get(key) {
            None | Some(Value::Null) => default,
            Some(value) => bool_like(value).unwrap_or_else(|| {
                tracing::warn!("Ignoring instance field '{}' with unexpected value {}", key, value);
                default
            }),
        };

        InstanceConfig {
            name: text("name"),
            api_url: text("api_url"),
            api_key: text("api_key"),
            enabled: flag("enabled", defaults.enabled),
            swaparr_enabled: flag("swaparr_enabled", defaults.swaparr_enabled),
        }
    }

    fn to_json(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "api_url": self.api_url,
            "api_key": self.api_key,
            "enabled": self.enabled,
            "swaparr_enabled": self.swaparr_enabled,
        })
    }
}

/// Booleans, "true"/"false" style strings, and 0/1
fn bool_like(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Some(true),
            "false" | "off" | "no" | "0" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Settings record for one app type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct AppSettings {
    values: BTreeMap<String, SettingValue>,
}

impl From<Map<String, Value>> for AppSettings {
    fn from(map: Map<String, Value>) -> Self {
        let mut values = BTreeMap::new();
        for (key, value) in &map {
            match SettingValue::from_json(value) {
                Some(v) => {
                    values.insert(key.clone(), v);
                }
                None => tracing::debug!("Dropping unsupported setting value for '{}'", key),
            }
        }
        AppSettings { values }
    }
}

impl From<AppSettings> for Map<String, Value> {
    fn from(settings: AppSettings) -> Self {
        settings
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}

impl AppSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted JSON object
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.clone().into())
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: SettingValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value; numeric strings are accepted
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            SettingValue::Int(i) => Some(*i),
            SettingValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            SettingValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        match self.get(key)? {
            SettingValue::List(items) => Some(items.as_slice()),
            SettingValue::Instances(instances) if instances.is_empty() => Some(&[]),
            _ => None,
        }
    }

    /// Stored instance list, if any (an empty JSON array counts as empty)
    pub fn instances(&self) -> Option<&[InstanceConfig]> {
        match self.get(INSTANCES_KEY)? {
            SettingValue::Instances(instances) => Some(instances.as_slice()),
            SettingValue::List(items) if items.is_empty() => Some(&[]),
            _ => None,
        }
    }

    /// Instances to show on a form: the stored ones capped at the limit, or a
    /// single placeholder seeded from the legacy top-level url/key fields
    pub fn instances_or_default(&self) -> Vec<InstanceConfig> {
        match self.instances() {
            Some(instances) if !instances.is_empty() => {
                if instances.len() > MAX_INSTANCES {
                    tracing::warn!(
                        "Settings carry {} instances, keeping the first {}",
                        instances.len(),
                        MAX_INSTANCES
                    );
                }
                instances.iter().take(MAX_INSTANCES).cloned().collect()
            }
            _ => vec![InstanceConfig::placeholder(
                self.get_str("api_url").unwrap_or(""),
                self.get_str("api_key").unwrap_or(""),
            )],
        }
    }

    /// Authentication mode, falling back to the legacy bypass flags
    pub fn auth_mode(&self) -> AuthMode {
        match self.get_str("auth_mode") {
            Some(mode) if !mode.is_empty() => mode.parse().unwrap_or_default(),
            _ => AuthMode::from_flags(
                self.get_bool("local_access_bypass").unwrap_or(false),
                self.get_bool("proxy_auth_bypass").unwrap_or(false),
            ),
        }
    }
}

/// How the dashboard authenticates incoming connections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    LocalBypass,
    NoLogin,
}

impl AuthMode {
    pub const ALL: [AuthMode; 3] = [AuthMode::Login, AuthMode::LocalBypass, AuthMode::NoLogin];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::LocalBypass => "local_bypass",
            AuthMode::NoLogin => "no_login",
        }
    }

    /// Derived `(local_access_bypass, proxy_auth_bypass)` flags
    pub fn flags(&self) -> (bool, bool) {
        match self {
            AuthMode::Login => (false, false),
            AuthMode::LocalBypass => (true, false),
            AuthMode::NoLogin => (false, true),
        }
    }

    /// Inverse of `flags`; the proxy bypass wins when both are set
    pub fn from_flags(local_access_bypass: bool, proxy_auth_bypass: bool) -> Self {
        if proxy_auth_bypass {
            AuthMode::NoLogin
        } else if local_access_bypass {
            AuthMode::LocalBypass
        } else {
            AuthMode::Login
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown auth mode '{}'", s))
    }
}
