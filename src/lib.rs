pub mod api;
pub mod competitions;
pub mod config;
pub mod store;
pub mod xg;
