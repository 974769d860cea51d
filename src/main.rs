use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_teller::cli::{Cli, Commands};
use rust_teller::config::TellerConfig;
use rust_teller::seed::{self, SeedConfig};
use rust_teller::{Account, Bank, TellerError};

fn init_tracing(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_bank(config: &TellerConfig) -> Result<(Bank, Vec<Account>), TellerError> {
    let seed = SeedConfig::load(&config.seed_file)?;
    Ok(seed.build())
}

fn lookup(bank: &Bank, owner: &str) -> Result<Account, TellerError> {
    bank.find_account(owner)
        .ok_or_else(|| TellerError::UnknownAccount(owner.to_string()))
}

fn run(cli: Cli, config: &TellerConfig) -> Result<(), TellerError> {
    match cli.command {
        Some(Commands::Init) => {
            seed::write_sample(&config.seed_file)?;
        }
        Some(Commands::Balances) => {
            let (bank, accounts) = load_bank(config)?;
            println!("{}", bank.name());
            for account in accounts {
                println!("  {}  {}", account.owner(), account.balance());
            }
        }
        Some(Commands::Transfer { from, to, amount }) => {
            let (bank, _accounts) = load_bank(config)?;
            let source = lookup(&bank, &from)?;
            let dest = lookup(&bank, &to)?;
            bank.transfer(&source, &dest, amount)?;
            info!("transfer complete");
            println!(
                "{}: {} -> {}",
                bank.name(),
                source.owner(),
                dest.owner()
            );
            println!("  {}  {}", source.owner(), source.balance());
            println!("  {}  {}", dest.owner(), dest.balance());
        }
        None => {
            println!("No command given. Try 'teller --help'.");
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let config = TellerConfig::load_or_default(&cli.config);
    init_tracing(&config.log_level);

    if let Err(e) = run(cli, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
