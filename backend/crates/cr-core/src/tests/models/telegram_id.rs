use crate::{CoreError, TelegramId};

#[test]
fn test_parse_accepts_numeric_id() {
    let id = TelegramId::parse("12345").unwrap();
    assert_eq!(id.as_str(), "12345");
    assert_eq!(id.to_string(), "12345");
}

#[test]
fn test_parse_trims_surrounding_whitespace() {
    let id = TelegramId::parse("  987  ").unwrap();
    assert_eq!(id.as_str(), "987");
}

#[test]
fn test_parse_rejects_empty() {
    let result = TelegramId::parse("   ");
    assert!(matches!(result, Err(CoreError::InvalidTelegramId { .. })));
}

#[test]
fn test_parse_rejects_inner_whitespace() {
    assert!(TelegramId::parse("12 34").is_err());
}

#[test]
fn test_parse_rejects_overlong_value() {
    let long = "9".repeat(65);
    assert!(TelegramId::parse(&long).is_err());
}

#[test]
fn test_deserialize_goes_through_parse() {
    let ok: TelegramId = serde_json::from_str("\"42\"").unwrap();
    assert_eq!(ok.as_str(), "42");

    let err = serde_json::from_str::<TelegramId>("\"\"");
    assert!(err.is_err());
}
