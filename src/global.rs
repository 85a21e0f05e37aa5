use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Config;
use crate::items::ItemResolver;
use crate::player::PlayerApi;

pub struct Global {
    pub config: Config,
    pub player_api: PlayerApi,
    pub item_resolver: ItemResolver,
    pub started_at: std::time::Instant,
}

impl Global {
    pub fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.upstream.user_agent)
            .build()
            .context("http client")?;

        let player_api = PlayerApi::new(
            http_client.clone(),
            config.upstream.player_api.clone(),
            config.upstream.player_timeout(),
        );

        let item_resolver = ItemResolver::new(
            http_client,
            &config.upstream.icon_api,
            config.upstream.icon_timeout(),
            config.upstream.probe_icons,
        )?;

        tracing::info!(
            player_api = %config.upstream.player_api,
            icon_api = %config.upstream.icon_api,
            probe_icons = config.upstream.probe_icons,
            "upstream clients ready"
        );

        Ok(Arc::new(Self {
            config,
            player_api,
            item_resolver,
            started_at: std::time::Instant::now(),
        }))
    }
}
