use crate::cache;
use crate::data_provider::SettingsApi;
use crate::formatting::{format_header, format_timestamp};
use crate::swaparr::{ActionResponse, SwaparrAction, SwaparrStatus};
use anyhow::{bail, Context, Result};

/// Format the Swaparr status panel
pub fn format_status(status: &SwaparrStatus, stars: u64) -> String {
    let stats = &status.session_stats;
    let mut output = String::new();

    output.push_str(&format_header("Swaparr", true));
    output.push_str(&format!(
        "Status: {}\n",
        if status.enabled { "Enabled" } else { "Disabled" }
    ));
    output.push_str(&format!("GitHub stars: {}\n\n", stars));

    output.push_str(&format_header("Session Statistics", false));
    output.push_str(&format!("{:<20}{}\n", "Processed", stats.processed));
    output.push_str(&format!("{:<20}{}\n", "Strikes", stats.strikes));
    output.push_str(&format!("{:<20}{}\n", "Removed", stats.removals));
    output.push_str(&format!("{:<20}{}\n", "Ignored", stats.ignored));
    output.push_str(&format!(
        "{:<20}{}\n",
        "Last run",
        format_timestamp(stats.last_run().as_ref())
    ));

    output
}

/// Message shown after a test/run/reset request
pub fn action_message(action: SwaparrAction, response: &ActionResponse) -> String {
    match response.message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None if response.success => format!("Swaparr {} succeeded", action.as_str()),
        None => format!("Swaparr {} failed", action.as_str()),
    }
}

pub async fn status(client: &dyn SettingsApi) -> Result<()> {
    let status = client
        .swaparr_status()
        .await
        .context("Failed to fetch Swaparr status")?;
    let stars = cache::swaparr_stars(client).await;
    print!("{}", format_status(&status, stars));
    Ok(())
}

pub async fn run(client: &dyn SettingsApi, action: SwaparrAction) -> Result<()> {
    let response = client
        .swaparr_action(action)
        .await
        .with_context(|| format!("Failed to {} Swaparr", action.as_str()))?;

    let message = action_message(action, &response);
    if !response.success {
        bail!("{}", message);
    }
    println!("{}", message);
    Ok(())
}
