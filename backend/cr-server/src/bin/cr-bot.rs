use cr_server::{BotRunner, TelegramBotClient, logger};

use cr_config::Config;

use std::error::Error;

use log::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate_bot()?;

    let log_file_path = logger::log_file_path(&config.logging)?;
    logger::initialize(&config.logging, log_file_path)?;

    info!("Starting cr-bot v{}", env!("CARGO_PKG_VERSION"));

    let client = TelegramBotClient::from_config(&config.telegram, &config.bot)?;
    BotRunner::new(client, &config.bot)
        .run(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), stopping bot"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await;

    Ok(())
}
