use crate::{AuthError, Claims, Result as AuthErrorResult};

use cr_config::SessionConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

const BEARER_PREFIX: &str = "Bearer ";

/// Validates session tokens issued by [`crate::SessionIssuer`].
pub struct SessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionValidator {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // clock skew
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Option<Self> {
        config
            .jwt_secret
            .as_ref()
            .map(|secret| Self::with_hs256(secret.as_bytes()))
    }

    /// Validate JWT token and return claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Validate an `Authorization` header value (`Bearer <token>`)
    #[track_caller]
    pub fn validate_header(&self, header: &str) -> AuthErrorResult<Claims> {
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.validate(token)
    }
}
