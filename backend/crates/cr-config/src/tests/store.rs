use crate::Config;
use crate::tests::{EnvGuard, set_required_env, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_missing_anon_key_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _env = set_required_env();
    let _key = EnvGuard::set("CR_STORE_ANON_KEY", "  ");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_non_http_store_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _env = set_required_env();
    let _url = EnvGuard::set("CR_STORE_URL", "ftp://store.example.test");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_zero_request_timeout_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _env = set_required_env();
    let _timeout = EnvGuard::set("CR_STORE_REQUEST_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_request_timeout_in_range_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _env = set_required_env();
    let _timeout = EnvGuard::set("CR_STORE_REQUEST_TIMEOUT_SECS", "30");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}
