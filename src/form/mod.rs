/// Settings forms: typed model, HTML rendering, and submission extraction
///
/// `build_form` maps a settings record onto the app's schema table and yields
/// a `Form`. The form renders to markup with `Form::to_html` and produces the
/// fields a browser would post with `Form::submit`. `extract` reads such a
/// submission back into a settings record using the same defaults.

mod build;
mod extract;
mod instances;
mod model;
mod render;

use std::collections::BTreeMap;
use url::form_urlencoded;

pub use build::build_form;
pub use extract::extract;
pub use instances::{AddButton, InstanceError, InstanceList};
pub use model::{Control, Form, FormSection, Input};
pub use render::{escape_html, render_form};

/// Instance fields submitted for one list index
pub type InstanceFields = BTreeMap<String, String>;

/// An ordered list of submitted `(name, value)` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` body
    pub fn parse(body: &str) -> Self {
        FormData {
            pairs: form_urlencoded::parse(body.trim().as_bytes()).into_owned().collect(),
        }
    }

    pub fn to_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Last submitted value for `name`, as a browser-side lookup would see it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Fields named `instances[i][field]`, grouped by index in ascending order
    pub fn instance_groups(&self) -> BTreeMap<usize, InstanceFields> {
        let mut groups: BTreeMap<usize, InstanceFields> = BTreeMap::new();
        for (name, value) in &self.pairs {
            if let Some((index, field)) = parse_instance_field(name) {
                groups.entry(index).or_default().insert(field.to_string(), value.clone());
            }
        }
        groups
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FormData {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Form field name for an instance field
pub fn instance_field_name(index: usize, field: &str) -> String {
    format!("instances[{}][{}]", index, field)
}

fn parse_instance_field(name: &str) -> Option<(usize, &str)> {
    let rest = name.strip_prefix("instances[")?;
    let (index, rest) = rest.split_once("][")?;
    let field = rest.strip_suffix(']')?;
    if field.is_empty() || field.contains(['[', ']']) {
        return None;
    }
    Some((index.parse().ok()?, field))
}
