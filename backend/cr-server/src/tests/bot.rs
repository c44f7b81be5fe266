use crate::Update;

use googletest::prelude::*;

fn update_with_text(text: Option<&str>) -> Update {
    serde_json::from_value(serde_json::json!({
        "update_id": 10,
        "message": {
            "message_id": 1,
            "chat": { "id": 42, "type": "private" },
            "text": text,
        }
    }))
    .unwrap()
}

#[test]
fn given_start_command_when_checked_then_returns_chat() {
    assert_that!(
        update_with_text(Some("/start")).start_command_chat(),
        some(eq(42))
    );
}

#[test]
fn given_start_with_payload_or_bot_name_when_checked_then_returns_chat() {
    assert_that!(
        update_with_text(Some("/start ref123")).start_command_chat(),
        some(eq(42))
    );
    assert_that!(
        update_with_text(Some("/start@CollabRoomBot")).start_command_chat(),
        some(eq(42))
    );
}

#[test]
fn given_other_text_when_checked_then_none() {
    assert_that!(update_with_text(Some("hello")).start_command_chat(), none());
    assert_that!(update_with_text(Some("/starting")).start_command_chat(), none());
    assert_that!(update_with_text(None).start_command_chat(), none());
}

#[test]
fn given_update_without_message_when_checked_then_none() {
    let update: Update = serde_json::from_value(serde_json::json!({ "update_id": 3 })).unwrap();

    assert_that!(update.start_command_chat(), none());
}
