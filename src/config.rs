use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::rowstore::RowStoreConfig;

const DEFAULT_QUESTION_BANK: &str = "data/question_bank.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub question_bank_path: PathBuf,
    /// Absent when the remote row store is not configured; the service then
    /// falls back to the in-memory store.
    pub row_store: Option<RowStoreConfig>,
}

impl Config {
    pub fn new_from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let question_bank_path = env::var("QUESTION_BANK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_QUESTION_BANK));

        let row_store = RowStoreConfig::new_from_env().ok();

        Self {
            bind_addr,
            question_bank_path,
            row_store,
        }
    }
}
