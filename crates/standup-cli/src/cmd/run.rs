use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use standup_core::config::Config;
use standup_core::Meeting;
use standup_jira::JiraClient;

use crate::ui;
use crate::ui::app::App;

pub fn run(seconds: u32, no_shuffle: bool, seed: Option<u64>) -> Result<()> {
    let config = Config::from_env()?;
    let client = JiraClient::new(config.jira);
    let board_url = client.sprint_board_url();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if client.is_mock() {
        println!("Tracker not configured, using mock data.");
    }
    println!("Fetching sprint data...");

    // One fetch per session: both reads issued together and awaited
    // jointly. Either failing puts the whole session on the error screen.
    let rt = tokio::runtime::Runtime::new()?;
    let fetched = rt.block_on(async {
        tokio::try_join!(client.fetch_sprint_tickets(), client.fetch_assignable_users())
    });

    let app = match fetched {
        Ok((tickets, users)) => {
            let mut meeting = Meeting::new(users, tickets, seconds);
            if !no_shuffle {
                meeting.shuffle(&mut rng);
            }
            App::new(meeting, board_url, rng)
        }
        Err(err) => App::failed(err.to_string(), rng),
    };

    ui::run(app)
}
