use crate::error::{Result as ServerErrorResult, ServerError};

use cr_auth::{LoginRedirect, SessionIssuer, SessionValidator, TelegramLoginVerifier};
use cr_config::Config;
use cr_onboarding::{IdentityResolver, ProfileValidator, UpsertWorkflow};
use cr_store::Store;

use std::sync::Arc;

/// Shared handles for every request. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub resolver: IdentityResolver,
    pub workflow: UpsertWorkflow,
    pub login_redirect: Arc<LoginRedirect>,
    pub login_verifier: Arc<TelegramLoginVerifier>,
    pub session_issuer: Arc<SessionIssuer>,
    pub session_validator: Arc<SessionValidator>,
}

impl AppState {
    /// Wire the services around `store` from a validated config
    pub fn new(store: Arc<dyn Store>, config: &Config) -> ServerErrorResult<Self> {
        let session_issuer =
            SessionIssuer::from_config(&config.session).ok_or(ServerError::MissingSessionSecret)?;
        let session_validator = SessionValidator::from_config(&config.session)
            .ok_or(ServerError::MissingSessionSecret)?;

        Ok(Self {
            resolver: IdentityResolver::new(store.clone()),
            workflow: UpsertWorkflow::new(
                store.clone(),
                ProfileValidator::from_config(&config.validation),
            ),
            login_redirect: Arc::new(LoginRedirect::from_config(&config.telegram)),
            login_verifier: Arc::new(TelegramLoginVerifier::from_config(&config.telegram)),
            session_issuer: Arc::new(session_issuer),
            session_validator: Arc::new(session_validator),
            store,
        })
    }
}
