use crate::commands::read_input;
use crate::config::FormsConfig;
use crate::form::{escape_html, render_form};
use crate::settings::AppSettings;
use crate::types::AppType;
use anyhow::{Context, Result};
use std::path::Path;

/// Wrap form markup in a minimal HTML document
pub fn standalone_document(app: AppType, body: &str, stylesheet: Option<&str>) -> String {
    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    output.push_str(&format!(
        "<title>{} Settings</title>\n",
        escape_html(app.display_name())
    ));
    if let Some(href) = stylesheet {
        output.push_str(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">\n",
            escape_html(href)
        ));
    }
    output.push_str("</head>\n<body>\n");
    output.push_str(body);
    output.push_str("</body>\n</html>\n");
    output
}

/// Load a settings record; no path means an empty record
pub fn load_settings(path: Option<&Path>) -> Result<AppSettings> {
    let Some(path) = path else {
        return Ok(AppSettings::new());
    };
    let json = read_input(Some(path))?;
    AppSettings::from_json_str(&json)
        .with_context(|| format!("Invalid settings JSON in {}", path.display()))
}

pub fn run(app: AppType, settings_path: Option<&Path>, forms: &FormsConfig) -> Result<()> {
    let settings = load_settings(settings_path)?;
    tracing::info!("Rendering {} form from {} settings", app, settings.len());

    let html = render_form(app, &settings);
    if forms.standalone {
        print!("{}", standalone_document(app, &html, forms.stylesheet.as_deref()));
    } else {
        print!("{}", html);
    }
    Ok(())
}
