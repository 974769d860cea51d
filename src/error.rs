use thiserror::Error;

#[derive(Error, Debug)]
pub enum TellerError {
    #[error("Insufficient Funds")]
    InsufficientFunds,
    #[error("Unknown account: {0}")]
    UnknownAccount(String),
    #[error("Seed file error: {0}")]
    Seed(String),
}
