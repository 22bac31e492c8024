pub mod auth;
pub mod digest;
pub mod list;
