use crate::settings::{AppSettings, InstanceConfig};
use crate::types::{AppType, MAX_INSTANCES};

/// Reasons the instance list refuses an edit
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstanceError {
    #[error("Maximum of {max} instances allowed")]
    LimitReached { max: usize },

    #[error("The first instance cannot be removed")]
    FirstInstance,

    #[error("No instance at index {index} (list has {len})")]
    OutOfRange { index: usize, len: usize },
}

/// State of the "Add <App> Instance" button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddButton {
    pub label: String,
    pub disabled: bool,
    pub title: Option<&'static str>,
}

/// Ordered instances of one app type, always holding between 1 and 9 entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceList {
    app: AppType,
    instances: Vec<InstanceConfig>,
}

impl InstanceList {
    /// Wrap `instances`, truncating past the limit and seeding an empty list
    pub fn new(app: AppType, mut instances: Vec<InstanceConfig>) -> Self {
        if instances.len() > MAX_INSTANCES {
            tracing::warn!(
                "{} has {} instances, keeping the first {}",
                app,
                instances.len(),
                MAX_INSTANCES
            );
            instances.truncate(MAX_INSTANCES);
        }
        if instances.is_empty() {
            instances.push(InstanceConfig::placeholder("", ""));
        }
        InstanceList { app, instances }
    }

    pub fn from_settings(app: AppType, settings: &AppSettings) -> Self {
        Self::new(app, settings.instances_or_default())
    }

    pub fn app(&self) -> AppType {
        self.app
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&InstanceConfig> {
        self.instances.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstanceConfig> {
        self.instances.iter()
    }

    pub fn can_add(&self) -> bool {
        self.instances.len() < MAX_INSTANCES
    }

    pub fn is_removable(&self, index: usize) -> bool {
        index > 0 && index < self.instances.len()
    }

    /// Append an empty, enabled instance and return its index
    pub fn add(&mut self) -> Result<usize, InstanceError> {
        if !self.can_add() {
            return Err(InstanceError::LimitReached { max: MAX_INSTANCES });
        }
        self.instances.push(InstanceConfig::default());
        let index = self.instances.len() - 1;
        tracing::debug!("Added {} instance {}", self.app, index + 1);
        Ok(index)
    }

    /// Remove the instance at `index`; the first instance always stays
    pub fn remove(&mut self, index: usize) -> Result<InstanceConfig, InstanceError> {
        if index >= self.instances.len() {
            return Err(InstanceError::OutOfRange { index, len: self.instances.len() });
        }
        if index == 0 {
            return Err(InstanceError::FirstInstance);
        }
        let removed = self.instances.remove(index);
        tracing::debug!("Removed {} instance {}", self.app, index + 1);
        Ok(removed)
    }

    pub fn add_button(&self) -> AddButton {
        let disabled = !self.can_add();
        AddButton {
            label: format!(
                "Add {} Instance ({}/{})",
                self.app.title(),
                self.instances.len(),
                MAX_INSTANCES
            ),
            disabled,
            title: disabled.then_some("Maximum of 9 instances allowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> InstanceConfig {
        InstanceConfig { name: name.to_string(), ..Default::default() }
    }

    #[test]
    fn test_empty_list_gets_placeholder() {
        let list = InstanceList::new(AppType::Radarr, Vec::new());
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().name, "Default");
        assert!(!list.is_empty());
    }

    #[test]
    fn test_new_truncates_to_limit() {
        let list = InstanceList::new(AppType::Sonarr, (0..15).map(|i| named(&i.to_string())).collect());
        assert_eq!(list.len(), MAX_INSTANCES);
        assert_eq!(list.get(8).unwrap().name, "8");
    }

    #[test]
    fn test_add_until_cap() {
        let mut list = InstanceList::new(AppType::Sonarr, vec![named("Main")]);
        for expected in 1..MAX_INSTANCES {
            assert_eq!(list.add(), Ok(expected));
        }
        assert_eq!(list.len(), MAX_INSTANCES);
        assert_eq!(list.add(), Err(InstanceError::LimitReached { max: MAX_INSTANCES }));
        assert_eq!(list.len(), MAX_INSTANCES);

        let added = list.get(1).unwrap();
        assert!(added.enabled);
        assert!(!added.swaparr_enabled);
        assert_eq!(added.name, "");
    }

    #[test]
    fn test_add_button_disables_at_cap_and_recovers() {
        let mut list = InstanceList::new(AppType::Lidarr, vec![named("Main")]);
        let button = list.add_button();
        assert_eq!(button.label, "Add Lidarr Instance (1/9)");
        assert!(!button.disabled);
        assert_eq!(button.title, None);

        while list.can_add() {
            list.add().unwrap();
        }
        let button = list.add_button();
        assert_eq!(button.label, "Add Lidarr Instance (9/9)");
        assert!(button.disabled);
        assert_eq!(button.title, Some("Maximum of 9 instances allowed"));

        list.remove(4).unwrap();
        let button = list.add_button();
        assert_eq!(button.label, "Add Lidarr Instance (8/9)");
        assert!(!button.disabled);
    }

    #[test]
    fn test_remove() {
        let mut list = InstanceList::new(AppType::Readarr, vec![named("a"), named("b"), named("c")]);
        assert_eq!(list.remove(0), Err(InstanceError::FirstInstance));
        assert_eq!(list.remove(3), Err(InstanceError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(list.remove(1).unwrap().name, "b");
        assert_eq!(list.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
        assert!(list.is_removable(1));
        assert!(!list.is_removable(0));
        assert!(!list.is_removable(2));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InstanceError::LimitReached { max: 9 }.to_string(),
            "Maximum of 9 instances allowed"
        );
    }
}
