use crate::{BotApiResponse, BotError, BotResult, Update};

use cr_config::{BotConfig, TelegramConfig};

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

/// Slack on top of the long-poll timeout before the HTTP request gives up
const POLL_GRACE_SECS: u64 = 10;

#[derive(Serialize)]
struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<i64>,
    timeout: u64,
    allowed_updates: &'static [&'static str],
}

/// Minimal Telegram Bot API client: `getUpdates` and `sendMessage`.
pub struct TelegramBotClient {
    /// `<api_url>/bot<token>`; contains the token, never log it
    method_base: String,
    client: ReqwestClient,
}

impl TelegramBotClient {
    #[track_caller]
    pub fn new(api_url: &str, bot_token: &str, poll_timeout_secs: u64) -> BotResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(poll_timeout_secs + POLL_GRACE_SECS))
            .build()
            .map_err(|e| BotError::Initialization {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            method_base: format!("{}/bot{}", api_url.trim_end_matches('/'), bot_token),
            client,
        })
    }

    #[track_caller]
    pub fn from_config(telegram: &TelegramConfig, bot: &BotConfig) -> BotResult<Self> {
        Self::new(&bot.api_url, &telegram.bot_token, bot.poll_timeout_secs)
    }

    /// Long-poll for message updates after `offset`
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout_secs: u64,
    ) -> BotResult<Vec<Update>> {
        let body = GetUpdatesRequest {
            offset,
            timeout: timeout_secs,
            allowed_updates: &["message"],
        };
        let updates: Option<Vec<Update>> = self.call("getUpdates", &body).await?;
        Ok(updates.unwrap_or_default())
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> BotResult<()> {
        let body = json!({ "chat_id": chat_id, "text": text });
        let _: Option<serde_json::Value> = self.call("sendMessage", &body).await?;
        debug!("Sent message to chat {}", chat_id);
        Ok(())
    }

    async fn call<B, T>(&self, method: &'static str, body: &B) -> BotResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{}", self.method_base, method))
            .json(body)
            .send()
            .await
            .map_err(|e| BotError::Transport {
                method,
                // without_url keeps the token out of the message
                message: e.without_url().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let text = response.text().await.map_err(|e| BotError::Transport {
            method,
            message: e.without_url().to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let envelope: BotApiResponse<T> =
            serde_json::from_str(&text).map_err(|e| BotError::Decode {
                method,
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !envelope.ok {
            return Err(BotError::Api {
                method,
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(envelope.result)
    }
}
