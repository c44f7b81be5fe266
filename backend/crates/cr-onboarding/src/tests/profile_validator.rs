use super::request;
use crate::{OnboardingError, ProfileValidator};

use cr_core::NewCompany;

use googletest::prelude::*;

fn validator() -> ProfileValidator {
    ProfileValidator::new(32)
}

fn field_of(result: std::result::Result<(), OnboardingError>) -> Option<String> {
    match result {
        Err(OnboardingError::Validation { field, .. }) => field,
        _ => None,
    }
}

#[test]
fn given_selection_only_when_validated_then_ok() {
    assert_that!(validator().validate(&request(&[1, 2], None)), ok(anything()));
}

#[test]
fn given_new_company_only_when_validated_then_ok() {
    assert_that!(validator().validate(&request(&[], Some("Beta"))), ok(anything()));
}

#[test]
fn given_selection_and_named_company_when_validated_then_rejects_new_company() {
    let result = validator().validate(&request(&[1], Some("Beta")));

    assert_that!(field_of(result), some(eq("new_company")));
}

#[test]
fn given_selection_and_blank_company_when_validated_then_ok() {
    assert_that!(validator().validate(&request(&[1], Some(""))), ok(anything()));
}

#[test]
fn given_too_long_field_when_validated_then_names_field() {
    let mut req = request(&[], None);
    req.profile.first_name = "a".repeat(33);

    assert_that!(field_of(validator().validate(&req)), some(eq("first_name")));
}

#[test]
fn given_field_at_limit_in_multibyte_chars_when_validated_then_ok() {
    let mut req = request(&[], None);
    req.profile.last_name = "é".repeat(32);

    assert_that!(validator().validate(&req), ok(anything()));
}

#[test]
fn given_non_http_linkedin_when_validated_then_rejected() {
    let mut req = request(&[], None);
    req.profile.linkedin_url = "ftp://linkedin.com/in/ada".to_string();

    assert_that!(field_of(validator().validate(&req)), some(eq("linkedin_url")));
}

#[test]
fn given_https_urls_when_validated_then_ok() {
    let mut req = request(&[], None);
    req.profile.linkedin_url = "https://linkedin.com/in/ada".to_string();
    req.new_company = Some(NewCompany {
        name: "Beta".to_string(),
        website: "http://beta.test".to_string(),
        ..Default::default()
    });

    assert_that!(validator().validate(&req), ok(anything()));
}

#[test]
fn given_bare_scheme_website_when_validated_then_rejected() {
    let mut req = request(&[], None);
    req.new_company = Some(NewCompany {
        name: "Beta".to_string(),
        website: "https://".to_string(),
        ..Default::default()
    });

    assert_that!(
        field_of(validator().validate(&req)),
        some(eq("new_company.website"))
    );
}

#[test]
fn given_non_positive_company_id_when_validated_then_rejected() {
    assert_that!(
        field_of(validator().validate(&request(&[0], None))),
        some(eq("selected_company_ids"))
    );
}

#[test]
fn given_control_character_when_validated_then_rejected() {
    let mut req = request(&[], None);
    req.profile.telegram_handle = "ada\u{0}".to_string();

    assert_that!(
        field_of(validator().validate(&req)),
        some(eq("telegram_handle"))
    );
}
