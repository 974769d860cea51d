use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "teller")]
#[command(about = "In-memory bank account demo", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, default_value = "teller.toml")]
    pub config: String,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample seed file
    Init,
    /// List seeded accounts and balances
    Balances,
    /// Move funds between two seeded accounts
    Transfer {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: Decimal,
    },
}
