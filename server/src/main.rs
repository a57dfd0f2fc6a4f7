mod api_error;
mod bot_session;
mod game_api;
mod server_config;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use common::config::ConfigManager;
use common::games::SessionRng;
use common::{log, logger};

use bot_session::BotSession;
use server_config::{DEFAULT_CONFIG_FILE, ServerConfig};
use web_server::{WebServerState, build_router, run_web_server};

#[derive(Parser)]
#[command(name = "gomoku_server")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to --config and exit.
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("GomokuBot".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, ServerConfig> =
        ConfigManager::from_yaml_file(args.config.clone());

    if args.write_default_config {
        config_manager.save(&ServerConfig::default())?;
        log!("Default config written to {}", args.config.display());
        return Ok(());
    }

    let config = config_manager.load()?;
    let addr = config.http.socket_addr()?;
    let bot_symbol = config.bot.symbol()?;
    let rng = SessionRng::from_seed_or_random(config.bot.rng_seed);
    log!(
        "Bot '{}' starts as {} (rng seed {})",
        config.bot.name,
        bot_symbol,
        rng.seed()
    );

    let state = WebServerState::new(config.bot.name.clone(), BotSession::new(bot_symbol, rng));
    let app = build_router(state, config.http.allow_any_origin);

    run_web_server(addr, app).await?;

    Ok(())
}
