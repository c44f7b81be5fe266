use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] cr_config::ConfigError),

    #[error("Session secret is not configured")]
    MissingSessionSecret,

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
