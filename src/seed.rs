use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::account::Account;
use crate::bank::Bank;
use crate::error::TellerError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeedConfig {
    pub bank_name: String,
    pub accounts: Vec<SeedAccount>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeedAccount {
    pub owner: String,
    pub balance: Decimal,
}

impl SeedConfig {
    pub fn load(path: &str) -> Result<Self, TellerError> {
        if !Path::new(path).exists() {
            return Err(TellerError::Seed(format!("file not found: {}", path)));
        }
        let content =
            fs::read_to_string(path).map_err(|e| TellerError::Seed(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| TellerError::Seed(e.to_string()))
    }

    /// Demonstration seed: two account holders at a sample bank.
    pub fn sample() -> Self {
        SeedConfig {
            bank_name: "First Meridian".to_string(),
            accounts: vec![
                SeedAccount {
                    owner: "alice".to_string(),
                    balance: Decimal::from(2500),
                },
                SeedAccount {
                    owner: "bob".to_string(),
                    balance: Decimal::from(1500),
                },
            ],
        }
    }

    /// Construct the bank and register one account per seed entry.
    pub fn build(&self) -> (Bank, Vec<Account>) {
        let bank = Bank::new();
        bank.set_name(&self.bank_name);
        let accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|s| Account::new(&s.owner, s.balance))
            .collect();
        for account in &accounts {
            bank.add_account(account);
        }
        (bank, accounts)
    }
}

/// Write the sample seed file.
pub fn write_sample(path: &str) -> Result<(), TellerError> {
    let config = SeedConfig::sample();
    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| TellerError::Seed(e.to_string()))?;
    fs::write(path, json).map_err(|e| TellerError::Seed(e.to_string()))?;
    println!("Created '{}'.", path);
    Ok(())
}
