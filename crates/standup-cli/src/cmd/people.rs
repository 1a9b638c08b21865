use anyhow::Result;
use standup_core::config::Config;
use standup_core::person::derive_people;
use standup_jira::JiraClient;

use crate::output::print_people_table;

pub fn run(json: bool) -> Result<()> {
    let config = Config::from_env()?;
    let client = JiraClient::new(config.jira);

    let rt = tokio::runtime::Runtime::new()?;
    let tickets = rt.block_on(client.fetch_sprint_tickets())?;
    let people = derive_people(&tickets);

    if json {
        println!("{}", serde_json::to_string_pretty(&people)?);
        return Ok(());
    }

    if people.is_empty() {
        println!("No one has an assigned ticket in the open sprint.");
        return Ok(());
    }

    print_people_table(&people, &tickets);
    Ok(())
}
