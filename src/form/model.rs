use super::{instance_field_name, FormData, InstanceList};
use crate::schema::FieldSpec;
use crate::types::AppType;

/// Current value of one form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Number(i64),
    Toggle(bool),
    /// Selected option value
    Select(String),
    Text(String),
    Lines(Vec<String>),
    Hidden(String),
}

#[derive(Debug, Clone)]
pub struct Control {
    pub spec: &'static FieldSpec,
    pub input: Input,
    /// Human-readable rendering of the value, shown beside the help text
    pub hint: Option<String>,
    /// Whether the field's conditional warning is shown
    pub note_visible: bool,
    /// Greyed out because the toggle it depends on is off
    pub disabled: bool,
}

impl Control {
    pub fn name(&self) -> &'static str {
        self.spec.key
    }

    /// Pairs a browser would post for this control
    fn submit_into(&self, data: &mut FormData) {
        let name = self.spec.key;
        match &self.input {
            Input::Number(value) => data.push(name, value.to_string()),
            Input::Toggle(checked) => push_toggle(data, name, *checked),
            Input::Select(value) | Input::Text(value) | Input::Hidden(value) => {
                data.push(name, value.as_str())
            }
            Input::Lines(lines) => data.push(name, lines.join("\n")),
        }
    }
}

/// Hidden `false` first, then the checkbox value when checked
pub(super) fn push_toggle(data: &mut FormData, name: &str, checked: bool) {
    data.push(name, "false");
    if checked {
        data.push(name, "true");
    }
}

#[derive(Debug, Clone)]
pub struct FormSection {
    pub title: &'static str,
    pub controls: Vec<Control>,
}

/// A settings form for one app type, ready to render or submit
#[derive(Debug, Clone)]
pub struct Form {
    pub app: AppType,
    /// Present for instance-bearing apps
    pub instances: Option<InstanceList>,
    pub sections: Vec<FormSection>,
}

impl Form {
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.sections.iter().flat_map(|section| section.controls.iter())
    }

    pub fn control(&self, key: &str) -> Option<&Control> {
        self.controls().find(|control| control.name() == key)
    }

    /// Fields a browser would post for this form, in document order
    pub fn submit(&self) -> FormData {
        let mut data = FormData::new();

        if let Some(instances) = &self.instances {
            for (index, instance) in instances.iter().enumerate() {
                data.push(instance_field_name(index, "name"), instance.name.as_str());
                data.push(instance_field_name(index, "api_url"), instance.api_url.as_str());
                data.push(instance_field_name(index, "api_key"), instance.api_key.as_str());
                push_toggle(&mut data, &instance_field_name(index, "enabled"), instance.enabled);
                push_toggle(
                    &mut data,
                    &instance_field_name(index, "swaparr_enabled"),
                    instance.swaparr_enabled,
                );
            }
        }

        for control in self.controls() {
            control.submit_into(&mut data);
        }
        data
    }
}
