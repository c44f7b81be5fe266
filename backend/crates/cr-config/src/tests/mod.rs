mod config;
mod log_level;
mod store;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set CR_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("CR_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Set every value the server refuses to start without
pub(crate) fn set_required_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("CR_STORE_URL", "https://store.example.test"),
        EnvGuard::set("CR_STORE_ANON_KEY", "anon-key"),
        EnvGuard::set("CR_TELEGRAM_BOT_ID", "123456"),
        EnvGuard::set("CR_TELEGRAM_BOT_TOKEN", "123456:test-token"),
        EnvGuard::set(
            "CR_SESSION_JWT_SECRET",
            "test-secret-key-at-least-32-bytes-long",
        ),
    ]
}
