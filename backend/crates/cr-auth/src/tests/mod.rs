mod telegram_login_verifier;

use crate::TelegramLogin;

pub(crate) const BOT_TOKEN: &str = "123456:test-token";
pub(crate) const AUTH_DATE: i64 = 1_700_000_000;
/// HMAC-SHA256 of [`login_pairs`]' data-check-string keyed by SHA256(BOT_TOKEN)
pub(crate) const KNOWN_HASH: &str =
    "9432faa5714be8083e8143d0820b3bcdea33e6d53a398278ebfd0a369c752a0a";

pub(crate) fn login_pairs(hash: &str) -> Vec<(String, String)> {
    [
        ("id", "12345"),
        ("first_name", "Ada"),
        ("username", "ada"),
        ("auth_date", "1700000000"),
        ("hash", hash),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub(crate) fn signed_login() -> TelegramLogin {
    TelegramLogin::from_pairs(login_pairs(KNOWN_HASH)).unwrap()
}
