pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::session::CallerSession,
    plaid::{
        account_dto::AccountDto,
        create_link_token_request::CreateLinkTokenRequest,
        exchange_token_request::ExchangeTokenRequest,
        exchange_token_response::ExchangeTokenResponse,
        fetch_data_request::FetchDataRequest,
        fetch_data_response::{FetchDataResponse, FetchMetadata},
        link_token_response::LinkTokenResponse,
        plaid::{create_link_token, exchange_token, fetch_data},
    },
    users::{
        delete_response::DeleteResponse,
        set_approval_request::SetApprovalRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        users::{delete_user, list_users, set_approval},
    },
};

pub use crate::config::{Config, PlaidRouting};
pub use crate::routes::build_router;
pub use crate::state::AppState;
