#[allow(clippy::module_inception)]
pub mod token;
pub mod token_request;
pub mod token_response;
