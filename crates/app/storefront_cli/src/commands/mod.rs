//! Subcommand handlers. Output goes to stdout; diagnostics go to the log.

mod account;
mod admin;
mod catalog;
mod shop;

use std::path::PathBuf;

use storefront_client::Client;
use storefront_core::session::FileTokenStore;
use storefront_core::{ClientConfig, Session};

use crate::Result;
use crate::cli::{Cli, Commands};

pub async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        api_url,
        session_file,
        command,
    } = cli;
    let client = || connect(api_url.as_deref(), session_file.clone());

    match command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Login(credentials) => account::login(&client()?, credentials).await,
        Commands::Logout => account::logout(&client()?).await,
        Commands::Whoami => {
            account::whoami(&client()?);
            Ok(())
        }
        Commands::Register(credentials) => account::register(&client()?, credentials).await,
        Commands::Profile(args) => account::profile(&client()?, args).await,
        Commands::Refresh => account::refresh(&client()?).await,
        Commands::Password(command) => account::password(&client()?, command).await,
        Commands::Products(command) => catalog::products(&client()?, command).await,
        Commands::Image(args) => {
            catalog::image(&client()?, args);
            Ok(())
        }
        Commands::Cart(command) => shop::cart(&client()?, command).await,
        Commands::Orders(command) => shop::orders(&client()?, command).await,
        Commands::Invoices(command) => shop::invoices(&client()?, command).await,
        Commands::Pay(command) => shop::pay(&client()?, command).await,
        Commands::Reviews(command) => shop::reviews(&client()?, command).await,
        Commands::Admin(command) => admin::run(&client()?, command).await,
    }
}

/// Environment first, then command-line overrides.
fn connect(api_url: Option<&str>, session_file: Option<PathBuf>) -> Result<Client> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = api_url {
        config = config.with_api_base_url(url)?;
    }
    if let Some(path) = session_file {
        config.session_file = path;
    }
    log::debug!(
        "api {} session file {}",
        config.api_base_url,
        config.session_file.display()
    );

    let session = Session::new(FileTokenStore::new(config.session_file.clone()));
    Ok(Client::new(&config, session)?)
}

/// `(none)` for an empty list, otherwise comma-separated.
fn joined<I: IntoIterator<Item = S>, S: AsRef<str>>(items: I) -> String {
    let parts: Vec<String> = items.into_iter().map(|s| s.as_ref().to_string()).collect();
    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(", ")
    }
}
