pub mod account_dto;
pub mod create_link_token_request;
pub mod exchange_token_request;
pub mod exchange_token_response;
pub mod fetch_data_request;
pub mod fetch_data_response;
pub mod link_token_response;
pub mod plaid;
