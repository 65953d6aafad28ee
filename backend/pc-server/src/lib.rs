pub mod api;
pub mod app_state;
pub mod audit;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        authenticated_identity::AuthenticatedIdentity,
        validated::{ValidatedForm, ValidatedJson},
    },
    preferences::{
        preferences::{get_preferences, set_preferences},
        update_preferences_request::UpdatePreferencesRequest,
    },
    status_response::StatusResponse,
    token::{token::issue_token, token_request::TokenRequest, token_response::TokenResponse},
    user_data::user_data::{delete_user_data, export_data},
};
pub use app_state::AppState;
pub use cli::{Cli, Command};
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
