use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    #[serde(deserialize_with = "deserialize_base_url")]
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub forms: FormsConfig,
}

/// Options for the `render` command output
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FormsConfig {
    /// Wrap rendered markup in a minimal HTML document
    pub standalone: bool,
    /// Extra stylesheet linked from standalone documents
    pub stylesheet: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            api_base_url: "http://localhost:9705".to_string(),
            request_timeout_secs: 30,
            forms: FormsConfig::default(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        FormsConfig {
            standalone: false,
            stylesheet: None,
        }
    }
}

/// Deserialize the backend URL, accepting only absolute http(s) URLs
fn deserialize_base_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_base_url(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid base URL: {}", s)))
}

/// Parse a backend URL, dropping any trailing slash
fn parse_base_url(s: &str) -> Option<String> {
    let url = Url::parse(s.trim()).ok()?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => {
            Some(url.as_str().trim_end_matches('/').to_string())
        }
        _ => None,
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    toml::from_str(&content).unwrap_or_else(|_| Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        assert_eq!(parse_base_url("http://localhost:9705"), Some("http://localhost:9705".to_string()));
        assert_eq!(parse_base_url("https://arr.example.com/"), Some("https://arr.example.com".to_string()));
        assert_eq!(
            parse_base_url(" http://nas:9705/huntarr/ "),
            Some("http://nas:9705/huntarr".to_string())
        );
    }

    #[test]
    fn test_parse_base_url_invalid() {
        assert_eq!(parse_base_url("localhost:9705"), None);
        assert_eq!(parse_base_url("ftp://nas"), None);
        assert_eq!(parse_base_url(""), None);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_file, "/dev/null");
        assert_eq!(config.api_base_url, "http://localhost:9705");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.forms.standalone);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
log_level = "debug"
log_file = "/tmp/arrforms.log"
api_base_url = "http://nas.local:9705/"
request_timeout_secs = 10

[forms]
standalone = true
stylesheet = "/static/css/style.css"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_base_url, "http://nas.local:9705");
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.forms.standalone);
        assert_eq!(config.forms.stylesheet.as_deref(), Some("/static/css/style.css"));
    }

    #[test]
    fn test_config_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("log_level = \"warn\"").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.api_base_url, "http://localhost:9705");
        assert_eq!(config.forms.stylesheet, None);
    }

    #[test]
    fn test_config_rejects_bad_url() {
        let result: Result<Config, _> = toml::from_str("api_base_url = \"not a url\"");
        assert!(result.is_err());
    }
}
