use super::{AUTH_DATE, BOT_TOKEN, KNOWN_HASH, login_pairs, signed_login};
use crate::{AuthError, TelegramLogin, TelegramLoginVerifier};

const MAX_AGE: u64 = 86_400;

fn verifier() -> TelegramLoginVerifier {
    TelegramLoginVerifier::new(BOT_TOKEN, MAX_AGE)
}

#[test]
fn given_known_payload_when_signed_then_matches_reference_hash() {
    let login = signed_login();

    assert_eq!(verifier().sign(&login).unwrap(), KNOWN_HASH);
}

#[test]
fn given_valid_signature_when_verified_then_returns_identity() {
    let verified = verifier().verify_at(&signed_login(), AUTH_DATE + 10).unwrap();

    assert_eq!(verified.telegram_id.as_str(), "12345");
    assert_eq!(verified.username.as_deref(), Some("ada"));
    assert_eq!(verified.first_name.as_deref(), Some("Ada"));
}

#[test]
fn given_uppercase_hex_when_verified_then_accepted() {
    let login = TelegramLogin::from_pairs(login_pairs(&KNOWN_HASH.to_uppercase())).unwrap();

    assert!(verifier().verify_at(&login, AUTH_DATE).is_ok());
}

#[test]
fn given_tampered_field_when_verified_then_signature_mismatch() {
    let pairs = login_pairs(KNOWN_HASH).into_iter().map(|(k, v)| {
        if k == "id" {
            (k, "99999".to_string())
        } else {
            (k, v)
        }
    });
    let login = TelegramLogin::from_pairs(pairs).unwrap();

    let result = verifier().verify_at(&login, AUTH_DATE);

    assert!(matches!(result, Err(AuthError::SignatureMismatch { .. })));
}

#[test]
fn given_added_field_when_verified_then_signature_mismatch() {
    let mut pairs = login_pairs(KNOWN_HASH);
    pairs.push(("photo_url".to_string(), "https://t.me/i/ada.jpg".to_string()));
    let login = TelegramLogin::from_pairs(pairs).unwrap();

    let result = verifier().verify_at(&login, AUTH_DATE);

    assert!(matches!(result, Err(AuthError::SignatureMismatch { .. })));
}

#[test]
fn given_other_bot_token_when_verified_then_signature_mismatch() {
    let other = TelegramLoginVerifier::new("654321:other-token", MAX_AGE);

    let result = other.verify_at(&signed_login(), AUTH_DATE);

    assert!(matches!(result, Err(AuthError::SignatureMismatch { .. })));
}

#[test]
fn given_non_hex_hash_when_verified_then_signature_mismatch() {
    let login = TelegramLogin::from_pairs(login_pairs("not-hex")).unwrap();

    let result = verifier().verify_at(&login, AUTH_DATE);

    assert!(matches!(result, Err(AuthError::SignatureMismatch { .. })));
}

#[test]
fn given_old_auth_date_when_verified_then_login_expired() {
    let result = verifier().verify_at(&signed_login(), AUTH_DATE + MAX_AGE as i64 + 1);

    assert!(matches!(result, Err(AuthError::LoginExpired { .. })));
}

#[test]
fn given_auth_date_at_max_age_when_verified_then_accepted() {
    let result = verifier().verify_at(&signed_login(), AUTH_DATE + MAX_AGE as i64);

    assert!(result.is_ok());
}

#[test]
fn given_auth_date_far_in_future_when_verified_then_rejected() {
    let result = verifier().verify_at(&signed_login(), AUTH_DATE - 120);

    assert!(matches!(result, Err(AuthError::LoginFromFuture { .. })));
}

#[test]
fn given_small_clock_skew_when_verified_then_accepted() {
    let result = verifier().verify_at(&signed_login(), AUTH_DATE - 30);

    assert!(result.is_ok());
}
