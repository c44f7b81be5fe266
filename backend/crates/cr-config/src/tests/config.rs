use crate::tests::{EnvGuard, set_required_env, setup_config_dir};
use crate::{Config, ConfigError};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Loading
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.server.host.as_str(), eq(crate::DEFAULT_HOST));
    assert_that!(config.store.request_timeout_secs, eq(10));
    assert_that!(
        config.telegram.oauth_url.as_str(),
        eq("https://oauth.telegram.org/auth")
    );
    assert!(config.session.jwt_secret.is_none());
}

#[test]
#[serial]
fn given_no_config_file_and_no_env_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::remove("CR_STORE_URL");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_required_env_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _env = set_required_env();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(config.store.url.as_str(), eq("https://store.example.test"));
    assert_that!(config.telegram.bot_id.as_str(), eq("123456"));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [store]
            url = "https://toml.example.test"
            anon_key = "toml-key"
            request_timeout_secs = 5

            [validation]
            max_field_length = 128
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.store.url.as_str(), eq("https://toml.example.test"));
    assert_that!(config.store.request_timeout_secs, eq(5));
    assert_that!(config.validation.max_field_length, eq(128));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port = EnvGuard::set("CR_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_unparseable_env_var_when_load_then_keeps_previous_value() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("CR_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert!(matches!(result, Err(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _env = set_required_env();
    let _port = EnvGuard::set("CR_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _env = set_required_env();
    let _port = EnvGuard::set("CR_SERVER_PORT", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_bind_addr_when_requested_then_joins_host_and_port() {
    // Given
    let _temp = setup_config_dir();
    let _host = EnvGuard::set("CR_SERVER_HOST", "0.0.0.0");
    let _port = EnvGuard::set("CR_SERVER_PORT", "3000");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr().as_str(), eq("0.0.0.0:3000"));
}

#[test]
#[serial]
fn given_field_length_out_of_range_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _env = set_required_env();
    let _length = EnvGuard::set("CR_VALIDATION_MAX_FIELD_LENGTH", "4");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}
