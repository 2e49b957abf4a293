mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use aperture_core::{ImageProvider, LinkIssuer, LinkStore, StoreError};
use aperture_gateway::app::App;
use aperture_gateway::state::{AppState, RedirectBackend};
use aperture_keygen::RandomKeyGenerator;
use aperture_links::{DirectLinks, HostedLinks, ShortenedLinks};
use aperture_provider::{OpenAiImageClient, OpenAiSettings, TinyUrlShortener};
use aperture_store::{InMemoryLinkStore, RedisLinkStore};

use crate::cli::{LinkModeArg, StoreBackendArg, CLI};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;
    let public_base_url = config
        .public_base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}", config.listen_addr));

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %public_base_url,
        link_mode = %config.link_mode,
        store_backend = %config.store,
        "starting gateway server"
    );

    let provider = init_provider(&config);
    let (links, redirects) = init_links(&config, &public_base_url).await;

    let state = AppState::new(provider, links, redirects);
    let router = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}

/// Builds the image provider, or `None` when the credential is missing
/// or the client cannot be constructed. The gateway serves either way;
/// requests needing the provider answer with a configuration error.
fn init_provider(config: &CLI) -> Option<Arc<dyn ImageProvider>> {
    let Some(api_key) = config.openai_api_key.clone() else {
        warn!("OPENAI_API_KEY is not set, image generation will answer 500");
        return None;
    };

    let settings = OpenAiSettings::builder()
        .api_key(api_key)
        .api_base(config.openai_api_base.clone())
        .model(config.openai_model.clone())
        .build();

    match OpenAiImageClient::new(settings) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            error!(error = %e, "Failed to initialize the image provider");
            None
        }
    }
}

async fn init_links(
    config: &CLI,
    public_base_url: &str,
) -> (Option<Arc<dyn LinkIssuer>>, RedirectBackend) {
    match config.link_mode {
        LinkModeArg::Direct => (
            Some(Arc::new(DirectLinks::new())),
            RedirectBackend::Disabled,
        ),
        LinkModeArg::Shortened => match TinyUrlShortener::new(config.shortener_endpoint.clone()) {
            Ok(shortener) => (
                Some(Arc::new(ShortenedLinks::new(shortener))),
                RedirectBackend::Disabled,
            ),
            Err(e) => {
                error!(error = %e, "Failed to initialize the URL shortener");
                (None, RedirectBackend::Disabled)
            }
        },
        LinkModeArg::Hosted => match config.store {
            StoreBackendArg::InMemory => {
                hosted_backend(Arc::new(InMemoryLinkStore::new()), public_base_url)
            }
            StoreBackendArg::Redis => match init_redis_store(config).await {
                Ok(store) => hosted_backend(store, public_base_url),
                Err(e) => {
                    error!(error = %e, "Failed to initialize the Redis link store");
                    (None, RedirectBackend::Unavailable)
                }
            },
        },
    }
}

async fn init_redis_store(config: &CLI) -> Result<Arc<RedisLinkStore>, StoreError> {
    let redis_url = config.redis_url.as_deref().ok_or_else(|| {
        StoreError::Initialization(
            "redis url is required when the store backend is redis".to_string(),
        )
    })?;
    let conn = aperture_store::connect(redis_url).await?;
    Ok(Arc::new(RedisLinkStore::new(conn)))
}

fn hosted_backend<S: LinkStore>(
    store: Arc<S>,
    public_base_url: &str,
) -> (Option<Arc<dyn LinkIssuer>>, RedirectBackend) {
    let issuer = HostedLinks::new(
        Arc::clone(&store),
        RandomKeyGenerator::new(),
        public_base_url,
    );
    (Some(Arc::new(issuer)), RedirectBackend::Ready(store))
}
