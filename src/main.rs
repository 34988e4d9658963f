//! rtcache demo driver - fetches one URL three times through the cache

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use reqwest::Url;

use rtcache::{CacheConfig, CacheMiddleware, HttpTransport, Transport};

/// TTL used when neither a config file nor `--ttl` is given
const DEMO_TTL: Duration = Duration::from_secs(5);

/// Pause between the first and second request
const SHORT_PAUSE: Duration = Duration::from_secs(2);

#[derive(Debug, Parser)]
#[command(name = "rtcache", version, about = "Fetch a URL three times through a TTL cache")]
struct Cli {
    /// URL to fetch
    url: String,

    /// Freshness window in seconds (overrides the config file)
    #[arg(long, allow_negative_numbers = true)]
    ttl: Option<f64>,

    /// Path to a YAML cache config (defaults to <config dir>/rtcache/config.yaml)
    #[arg(long, env = "RTCACHE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let url = Url::parse(&cli.url).with_context(|| format!("invalid URL: {}", cli.url))?;
    let config = resolve_config(&cli)?;
    let ttl = config.ttl;

    let transport = HttpTransport::new()?;
    let http = transport.client().clone();
    let cache = CacheMiddleware::new(transport, config);

    fetch(&cache, &http, &url, "First response").await?;

    tokio::time::sleep(SHORT_PAUSE).await;
    fetch(&cache, &http, &url, "Second response (within TTL)").await?;

    let until_stale = ttl
        .saturating_sub(SHORT_PAUSE)
        .saturating_add(Duration::from_secs(1));
    tokio::time::sleep(until_stale).await;
    fetch(&cache, &http, &url, "Third response (after TTL)").await?;

    Ok(())
}

/// Config precedence: --config > default file if present > demo defaults; --ttl on top
fn resolve_config(cli: &Cli) -> anyhow::Result<CacheConfig> {
    let mut config = match &cli.config {
        Some(path) => CacheConfig::load_from(path)?,
        None => {
            let default_path = default_config_path()?;
            if default_path.exists() {
                CacheConfig::load_from(default_path)?
            } else {
                CacheConfig::new().ttl(DEMO_TTL)
            }
        }
    };

    if let Some(secs) = cli.ttl {
        let Ok(ttl) = Duration::try_from_secs_f64(secs) else {
            bail!("--ttl must be a non-negative number of seconds in range, got {}", secs);
        };
        config = config.ttl(ttl);
    }

    log::debug!("Using cache config: {:?}", config);
    Ok(config)
}

/// Default config file path (`<config dir>/rtcache/config.yaml`)
fn default_config_path() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join("rtcache").join("config.yaml"))
}

async fn fetch<T: Transport>(
    cache: &CacheMiddleware<T>,
    http: &reqwest::Client,
    url: &Url,
    label: &str,
) -> anyhow::Result<()> {
    let request = http.get(url.clone()).build()?;
    let response = cache.round_trip(request).await?;

    println!("{} [{}]:", label, response.status());
    println!("{}", response.text());
    println!();
    Ok(())
}
