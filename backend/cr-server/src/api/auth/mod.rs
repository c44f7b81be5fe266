pub mod auth;
pub mod login_query;
pub mod session_response;
