pub mod dashboard;
pub mod dashboard_query;
pub mod dashboard_response;
pub mod save_dashboard_request;
pub mod save_dashboard_response;
