use serde::Deserialize;

const START_COMMAND: &str = "/start";

/// Envelope of every Bot API response
#[derive(Debug, Deserialize)]
pub struct BotApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Chat to greet if this update is a `/start` command.
    ///
    /// Matches `/start`, `/start <payload>` and `/start@<bot>`.
    pub fn start_command_chat(&self) -> Option<i64> {
        let message = self.message.as_ref()?;
        let command = message.text.as_deref()?.split_whitespace().next()?;

        let is_start = command == START_COMMAND
            || command
                .strip_prefix(START_COMMAND)
                .is_some_and(|rest| rest.starts_with('@'));

        is_start.then_some(message.chat.id)
    }
}
