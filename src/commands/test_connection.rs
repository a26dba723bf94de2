use crate::connection::{ButtonState, ConnectionTester};
use crate::data_provider::SettingsApi;
use crate::types::AppType;
use anyhow::{bail, Result};
use std::sync::Arc;

pub async fn run(client: Arc<dyn SettingsApi>, app: AppType, url: &str, key: &str) -> Result<()> {
    if !app.has_instances() {
        bail!("{} has no instances to test", app.display_name());
    }

    let tester = ConnectionTester::new(client, app);
    let state = tester.test(0, url, key).await?;
    let message = state.message().unwrap_or_default();

    match state {
        ButtonState::Connected(_) => {
            println!("{}", message);
            Ok(())
        }
        _ => bail!("{}", message),
    }
}
