pub mod authenticated_identity;
pub mod validated;
