pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod question_bank;
pub mod rowstore;
pub mod session;
pub mod state;
pub mod stores;
