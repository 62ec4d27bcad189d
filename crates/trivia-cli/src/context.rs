use std::time::Duration;

use anyhow::Context;
use trivia_client::{ClientOptions, TriviaClient};
use trivia_config::TriviaConfig;

/// Everything a command handler needs: resolved config and a ready client.
pub struct AppContext {
    pub config: TriviaConfig,
    pub client: TriviaClient,
}

impl AppContext {
    /// Load config (`.env`, TOML layers, `TRIVIA_*` env) and build the client.
    pub fn init() -> anyhow::Result<Self> {
        let config = TriviaConfig::load_with_dotenv().context("failed to load configuration")?;
        Self::from_config(config)
    }

    pub fn from_config(config: TriviaConfig) -> anyhow::Result<Self> {
        let client = TriviaClient::with_options(client_options(&config))
            .context("failed to build HTTP client")?;
        tracing::debug!(base_url = client.base_url(), "trivia client ready");
        Ok(Self { config, client })
    }
}

fn client_options(config: &TriviaConfig) -> ClientOptions {
    ClientOptions {
        base_url: config.api.base_url.clone(),
        timeout: Duration::from_secs(config.api.timeout_secs),
        user_agent: config.api.user_agent.clone(),
    }
}
