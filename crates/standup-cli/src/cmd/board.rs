use anyhow::{anyhow, Result};
use standup_core::config::Config;
use standup_jira::JiraClient;

pub fn run(open_browser: bool) -> Result<()> {
    let config = Config::from_env()?;
    let client = JiraClient::new(config.jira);

    let url = client
        .sprint_board_url()
        .ok_or_else(|| anyhow!("sprint board URL requires JIRA_URL and JIRA_PROJECT_KEY"))?;

    println!("{url}");
    if open_browser {
        open::that(&url)?;
    }
    Ok(())
}
