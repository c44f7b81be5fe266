use crate::{ProfileFields, TelegramId, User, UserUpsert};

use serde_json::json;

#[test]
fn test_user_deserializes_null_columns_as_none() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "telegram_id": "12345",
        "first_name": "Ada",
        "last_name": null,
        "telegram_handle": null
    }))
    .unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert!(user.last_name.is_none());
    assert!(user.linkedin_url.is_none());
}

#[test]
fn test_profile_maps_missing_columns_to_empty_strings() {
    let user = User {
        id: 1,
        telegram_id: TelegramId::parse("1").unwrap(),
        first_name: Some("Ada".into()),
        last_name: None,
        telegram_handle: Some("@ada".into()),
        linkedin_url: None,
    };

    let profile = user.profile();

    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.last_name, "");
    assert_eq!(profile.telegram_handle, "@ada");
    assert_eq!(profile.linkedin_url, "");
}

#[test]
fn test_user_upsert_flattens_profile_next_to_key() {
    let upsert = UserUpsert::new(
        TelegramId::parse("12345").unwrap(),
        ProfileFields {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            telegram_handle: "@ada".into(),
            linkedin_url: "https://linkedin.com/in/ada".into(),
        },
    );

    let value = serde_json::to_value(&upsert).unwrap();

    assert_eq!(
        value,
        json!({
            "telegram_id": "12345",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "telegram_handle": "@ada",
            "linkedin_url": "https://linkedin.com/in/ada"
        })
    );
}
