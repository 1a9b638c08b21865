use anyhow::Result;
use standup_core::config::Config;

pub fn run(port: Option<u16>) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(standup_server::serve(config))
}
