use crate::{BotResult, TelegramBotClient};

use cr_config::BotConfig;

use std::future::Future;
use std::time::Duration;

use log::{debug, info, warn};

const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Long-poll loop with offset tracking.
pub struct BotRunner {
    client: TelegramBotClient,
    greeting: String,
    poll_timeout_secs: u64,
    offset: Option<i64>,
    retry_delay: Duration,
}

impl BotRunner {
    pub fn new(client: TelegramBotClient, config: &BotConfig) -> Self {
        Self {
            client,
            greeting: config.greeting.clone(),
            poll_timeout_secs: config.poll_timeout_secs,
            offset: None,
            retry_delay: RETRY_DELAY,
        }
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Next update id to ask for
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// Fetch one batch of updates and greet every `/start`. Returns the
    /// number of greetings sent.
    ///
    /// The offset moves past every received update, so a failed reply is
    /// logged and not retried.
    pub async fn poll_once(&mut self) -> BotResult<usize> {
        let updates = self
            .client
            .get_updates(self.offset, self.poll_timeout_secs)
            .await?;

        let mut greeted = 0;
        for update in &updates {
            self.offset = Some(self.offset.unwrap_or(0).max(update.update_id + 1));

            let Some(chat_id) = update.start_command_chat() else {
                continue;
            };

            match self.client.send_message(chat_id, &self.greeting).await {
                Ok(()) => greeted += 1,
                Err(e) => warn!("Failed to greet chat {}: {}", chat_id, e),
            }
        }

        if !updates.is_empty() {
            debug!(
                "Handled {} update(s), {} greeting(s)",
                updates.len(),
                greeted
            );
        }

        Ok(greeted)
    }

    /// Poll until `shutdown` resolves. Errors are logged and retried after
    /// a back-off.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let retry_delay = self.retry_delay;
        info!("Bot polling started");

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                result = self.poll_once() => {
                    if let Err(e) = result {
                        warn!("Polling failed, retrying in {:?}: {}", retry_delay, e);
                        tokio::select! {
                            _ = &mut shutdown => break,
                            _ = tokio::time::sleep(retry_delay) => {}
                        }
                    }
                }
            }
        }

        info!("Bot polling stopped");
    }
}
