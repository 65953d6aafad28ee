#[allow(clippy::module_inception)]
pub mod user_data;
