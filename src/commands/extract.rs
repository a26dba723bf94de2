use crate::commands::read_input;
use crate::form::{extract, FormData};
use crate::types::AppType;
use anyhow::{Context, Result};
use std::path::Path;

/// Extract a urlencoded submission and return the settings as pretty JSON
pub fn extract_json(app: AppType, body: &str) -> Result<String> {
    let data = FormData::parse(body);
    tracing::info!("Extracting {} settings from {} submitted fields", app, data.len());
    let settings = extract(app, &data);
    serde_json::to_string_pretty(&settings).context("Failed to serialize settings")
}

pub fn run(app: AppType, form_path: Option<&Path>) -> Result<()> {
    let body = read_input(form_path)?;
    println!("{}", extract_json(app, &body)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json() {
        let json = extract_json(
            AppType::Radarr,
            "instances%5B0%5D%5Bname%5D=Main&instances%5B0%5D%5Bapi_url%5D=http%3A%2F%2Fradarr%3A7878&hourly_cap=50",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["hourly_cap"], 50);
        assert_eq!(value["instances"][0]["name"], "Main");
        assert_eq!(value["instances"][0]["api_url"], "http://radarr:7878");
        assert_eq!(value["instances"][0]["enabled"], true);
        assert_eq!(value["release_type"], "physical");
    }
}
