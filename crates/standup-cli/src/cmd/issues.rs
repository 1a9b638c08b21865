use anyhow::Result;
use standup_core::config::Config;
use standup_jira::JiraClient;

use crate::output::print_ticket_table;

pub fn run(json: bool) -> Result<()> {
    let config = Config::from_env()?;
    let client = JiraClient::new(config.jira);

    let rt = tokio::runtime::Runtime::new()?;
    let tickets = rt.block_on(client.fetch_sprint_tickets())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
        return Ok(());
    }

    if client.is_mock() {
        println!("(tracker not configured, showing mock data)\n");
    }

    if tickets.is_empty() {
        println!("No tickets in the open sprint.");
        return Ok(());
    }

    print_ticket_table(&tickets);
    Ok(())
}
