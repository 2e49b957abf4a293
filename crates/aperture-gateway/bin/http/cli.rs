use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "APERTURE_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "APERTURE_GATEWAY_PUBLIC_BASE_URL";
pub const LINK_MODE_ENV: &str = "APERTURE_GATEWAY_LINK_MODE";
pub const STORE_BACKEND_ENV: &str = "APERTURE_GATEWAY_STORE_BACKEND";
pub const REDIS_URL_ENV: &str = "APERTURE_GATEWAY_REDIS_URL";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const OPENAI_API_BASE_ENV: &str = "APERTURE_GATEWAY_OPENAI_API_BASE";
pub const OPENAI_MODEL_ENV: &str = "APERTURE_GATEWAY_OPENAI_MODEL";
pub const SHORTENER_ENDPOINT_ENV: &str = "APERTURE_GATEWAY_SHORTENER_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// How generated image URLs are handed back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LinkModeArg {
    #[value(name = "direct")]
    Direct,
    #[value(name = "shortened")]
    Shortened,
    #[value(name = "hosted")]
    Hosted,
}

impl Display for LinkModeArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkModeArg::Direct => write!(f, "direct"),
            LinkModeArg::Shortened => write!(f, "shortened"),
            LinkModeArg::Hosted => write!(f, "hosted"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StoreBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackendArg::InMemory => write!(f, "in-memory"),
            StoreBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "aperture-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base URL advertised in hosted links; defaults to http://{listen-addr}.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    #[arg(
        long,
        env = LINK_MODE_ENV,
        value_enum,
        default_value_t = LinkModeArg::Hosted
    )]
    pub link_mode: LinkModeArg,

    #[arg(
        long,
        env = STORE_BACKEND_ENV,
        value_enum,
        default_value_t = StoreBackendArg::InMemory
    )]
    pub store: StoreBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("store", "redis"))]
    pub redis_url: Option<String>,

    #[arg(long, env = OPENAI_API_KEY_ENV, hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(
        long,
        env = OPENAI_API_BASE_ENV,
        default_value = aperture_provider::openai::DEFAULT_API_BASE
    )]
    pub openai_api_base: String,

    #[arg(
        long,
        env = OPENAI_MODEL_ENV,
        default_value = aperture_provider::openai::DEFAULT_MODEL
    )]
    pub openai_model: String,

    #[arg(
        long,
        env = SHORTENER_ENDPOINT_ENV,
        default_value = aperture_provider::tinyurl::DEFAULT_ENDPOINT
    )]
    pub shortener_endpoint: String,
}
