pub mod claims;
pub mod error;
pub mod login_redirect;
pub mod session_issuer;
pub mod session_validator;
pub mod telegram_login;
pub mod telegram_login_verifier;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use login_redirect::LoginRedirect;
pub use session_issuer::{SessionIssuer, SessionToken};
pub use session_validator::SessionValidator;
pub use telegram_login::TelegramLogin;
pub use telegram_login_verifier::{TelegramLoginVerifier, VerifiedLogin};

#[cfg(test)]
mod tests;

/// Seconds an `auth_date` may lie ahead of the local clock
pub const MAX_CLOCK_SKEW_SECS: i64 = 60;
