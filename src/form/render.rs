/// HTML rendering of a `Form`

use super::{build_form, instance_field_name, Control, Form, Input, InstanceList};
use crate::connection::ButtonState;
use crate::schema::FieldKind;
use crate::settings::AppSettings;
use crate::types::AppType;

/// Build and render the settings form for `app`
pub fn render_form(app: AppType, settings: &AppSettings) -> String {
    build_form(app, settings).to_html()
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn attr(name: &str, value: &str) -> String {
    format!(" {}=\"{}\"", name, escape_html(value))
}

impl Form {
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "<div class=\"settings-form\"{}>\n",
            attr("data-app-type", self.app.as_str())
        ));

        if let Some(instances) = &self.instances {
            render_instances(&mut output, instances);
        }

        for section in &self.sections {
            output.push_str("<div class=\"settings-group\">\n");
            output.push_str(&format!("<h3>{}</h3>\n", escape_html(section.title)));
            for control in &section.controls {
                render_control(&mut output, control);
            }
            output.push_str("</div>\n");
        }

        output.push_str("</div>\n");
        output
    }
}

fn render_instances(output: &mut String, list: &InstanceList) {
    let app = list.app();
    let prefix = app.as_str();

    output.push_str("<div class=\"settings-group instances-group\">\n");
    output.push_str(&format!("<h3>{} Instances</h3>\n", escape_html(app.display_name())));
    output.push_str("<div class=\"instances-container\">\n");

    for (index, instance) in list.iter().enumerate() {
        let header_name = if instance.name.is_empty() { "Unnamed" } else { instance.name.as_str() };
        output.push_str(&format!(
            "<div class=\"instance-item\" data-instance-id=\"{}\">\n",
            index
        ));
        output.push_str("<div class=\"instance-header\">\n");
        output.push_str(&format!(
            "<h4>Instance {}: {}</h4>\n",
            index + 1,
            escape_html(header_name)
        ));
        output.push_str("<div class=\"instance-actions\">\n");
        if list.is_removable(index) {
            output.push_str(&format!(
                "<button type=\"button\" class=\"remove-instance-btn\" data-instance=\"{}\">Remove</button>\n",
                index
            ));
        }
        output.push_str(&format!(
            "<button type=\"button\" class=\"test-connection-btn\" data-instance=\"{}\">{}</button>\n",
            index,
            ButtonState::Idle.label()
        ));
        output.push_str("</div>\n</div>\n");

        output.push_str("<div class=\"instance-content\">\n");
        let text_fields = [
            ("name", "name", "Name", &instance.name, format!("Friendly name for this {} instance", app.title())),
            ("url", "api_url", "URL", &instance.api_url, format!("Base URL for {} (e.g., http://localhost:8989)", app.title())),
            ("key", "api_key", "API Key", &instance.api_key, format!("API key for {}", app.title())),
        ];
        for (suffix, field, label, value, help) in text_fields {
            let id = format!("{}-{}-{}", prefix, suffix, index);
            output.push_str("<div class=\"setting-item\">\n");
            output.push_str(&format!("<label{}>{}:</label>\n", attr("for", &id), label));
            output.push_str(&format!(
                "<input type=\"text\"{}{}{}{}>\n",
                attr("id", &id),
                attr("name", &instance_field_name(index, field)),
                attr("value", value),
                attr("placeholder", &help)
            ));
            output.push_str(&format!("<p class=\"setting-help\">{}</p>\n", escape_html(&help)));
            output.push_str("</div>\n");
        }

        let toggles = [
            ("enabled", "enabled", "Enabled", instance.enabled, format!("Enable or disable this {} instance for processing", app.title())),
            ("swaparr", "swaparr_enabled", "Swaparr", instance.swaparr_enabled, format!("Enable Swaparr to monitor and remove stalled downloads for this {} instance", app.title())),
        ];
        for (suffix, field, label, checked, help) in toggles {
            let id = format!("{}-{}-{}", prefix, suffix, index);
            output.push_str("<div class=\"setting-item\">\n");
            output.push_str(&format!("<label{}>{}:</label>\n", attr("for", &id), label));
            render_toggle(output, &id, &instance_field_name(index, field), checked);
            output.push_str(&format!("<p class=\"setting-help\">{}</p>\n", escape_html(&help)));
            output.push_str("</div>\n");
        }
        output.push_str("</div>\n</div>\n");
    }
    output.push_str("</div>\n");

    let button = list.add_button();
    output.push_str("<div class=\"button-container\">\n");
    output.push_str(&format!(
        "<button type=\"button\" class=\"add-instance-btn add-{}-instance-btn\"{}{}>{}</button>\n",
        prefix,
        if button.disabled { " disabled" } else { "" },
        button.title.map(|t| attr("title", t)).unwrap_or_default(),
        escape_html(&button.label)
    ));
    output.push_str("</div>\n</div>\n");
}

fn render_toggle(output: &mut String, id: &str, name: &str, checked: bool) {
    output.push_str("<label class=\"toggle-switch\">\n");
    output.push_str(&format!("<input type=\"hidden\"{} value=\"false\">\n", attr("name", name)));
    output.push_str(&format!(
        "<input type=\"checkbox\"{}{} value=\"true\"{}>\n",
        attr("id", id),
        attr("name", name),
        if checked { " checked" } else { "" }
    ));
    output.push_str("<span class=\"toggle-slider\"></span>\n</label>\n");
}

fn render_control(output: &mut String, control: &Control) {
    let spec = control.spec;

    if let Input::Hidden(value) = &control.input {
        output.push_str(&format!(
            "<input type=\"hidden\"{}{}{}>\n",
            attr("id", spec.dom_id),
            attr("name", spec.key),
            attr("value", value)
        ));
        return;
    }

    let mut item = String::from("<div class=\"setting-item");
    if control.disabled {
        item.push_str(" disabled");
    }
    item.push('"');
    if let Some(toggle) = spec.depends_on {
        item.push_str(&attr("data-depends-on", toggle));
    }
    if control.disabled {
        item.push_str(" aria-disabled=\"true\"");
    }
    output.push_str(&item);
    output.push_str(">\n");

    output.push_str(&format!(
        "<label{}>{}:</label>\n",
        attr("for", spec.dom_id),
        escape_html(spec.label)
    ));

    match (&control.input, spec.kind) {
        (Input::Number(value), FieldKind::Number { min, max }) => {
            output.push_str(&format!(
                "<input type=\"number\"{}{}{}{}{}>\n",
                attr("id", spec.dom_id),
                attr("name", spec.key),
                attr("value", &value.to_string()),
                min.map(|m| attr("min", &m.to_string())).unwrap_or_default(),
                max.map(|m| attr("max", &m.to_string())).unwrap_or_default()
            ));
        }
        (Input::Toggle(checked), _) => render_toggle(output, spec.dom_id, spec.key, *checked),
        (Input::Select(selected), _) => {
            output.push_str(&format!(
                "<select{}{}>\n",
                attr("id", spec.dom_id),
                attr("name", spec.key)
            ));
            for (value, label) in spec.choices().into_iter().flat_map(|choices| choices.entries()) {
                output.push_str(&format!(
                    "<option{}{}>{}</option>\n",
                    attr("value", value),
                    if *value == selected.as_str() { " selected" } else { "" },
                    escape_html(label)
                ));
            }
            output.push_str("</select>\n");
        }
        (Input::Lines(lines), _) => {
            output.push_str(&format!(
                "<textarea{}{} rows=\"4\">{}</textarea>\n",
                attr("id", spec.dom_id),
                attr("name", spec.key),
                escape_html(&lines.join("\n"))
            ));
        }
        (Input::Text(value), kind) => {
            let placeholder = match kind {
                FieldKind::Text { placeholder } if !placeholder.is_empty() => {
                    attr("placeholder", placeholder)
                }
                _ => String::new(),
            };
            output.push_str(&format!(
                "<input type=\"text\"{}{}{}{}>\n",
                attr("id", spec.dom_id),
                attr("name", spec.key),
                attr("value", value),
                placeholder
            ));
        }
        _ => {}
    }

    output.push_str(&format!("<p class=\"setting-help\">{}", escape_html(spec.help)));
    if let Some(hint) = &control.hint {
        output.push_str(&format!(
            " (<span{} class=\"setting-hint\">{}</span>)",
            attr("id", &format!("{}_hint", spec.dom_id)),
            escape_html(hint)
        ));
    }
    output.push_str("</p>\n");

    if let Some(note) = &spec.note {
        output.push_str(&format!(
            "<p class=\"setting-help setting-warning\"{}{}>{}</p>\n",
            attr("id", note.id),
            attr("style", if control.note_visible { "display: block;" } else { "display: none;" }),
            escape_html(note.text)
        ));
    }

    output.push_str("</div>\n");
}
