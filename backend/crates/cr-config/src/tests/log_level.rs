use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn test_log_level_parses_known_levels_case_insensitively() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("warn").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
}

#[test]
fn test_log_level_unknown_value_falls_back_to_info() {
    assert_eq!(LogLevel::from_str("chatty").unwrap().0, LevelFilter::Info);
}

#[test]
fn test_log_level_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str("level = \"trace\"").unwrap();
    assert_eq!(*wrapper.level, LevelFilter::Trace);
}
