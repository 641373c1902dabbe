use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use nads_token_api::managers::insight_access::insight_client;
use nads_token_api::routes::token;
use nads_token_api::utils::app_config::AppConfig;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Proxy serving ERC20 / ERC721 / ERC1155 holdings from thirdweb Insight.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Optional YAML configuration file, overridden by environment variables
    #[arg(short, long)]
    config_path: Option<String>,
}

/// Initializes the logging, ensuring that the `RUST_LOG` environment
/// variable is always considered first.
fn init_logging(default_log_filter: &str) -> Result<()> {
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_log_filter))?,
            )
            .finish(),
    )?;
    Ok(())
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = AppConfig::load(args.config_path.as_deref())?;
    init_logging(&config.rust_log)?;

    if config.protection_api_key.is_none() {
        tracing::warn!("PROTECTION_API_KEY is not set, every request will be rejected");
    }
    if config.thirdweb_client_id.is_none() {
        tracing::warn!("THIRDWEB_CLIENT_ID is not set, token requests will fail");
    }

    let port = config.port;
    let insight = web::Data::new(insight_client(&config)?);
    let config = web::Data::new(config);

    tracing::info!(
        port,
        insight_base_url = %config.insight_base_url,
        chain_id = %config.chain_id,
        "starting nads token api"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("X-GIT-REVISION", env!("GIT_HASH", "N/A"))))
            .app_data(config.clone())
            .app_data(insight.clone())
            .configure(token::config::<reqwest::Client>)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
