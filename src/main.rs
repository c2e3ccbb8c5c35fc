//! Phone Book - Main entry point
//!
//! Runs an interactive session on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use phone_book::{repl, CommandInterpreter, Config, ContactStore};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // stderr only, stdout belongs to the session
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut interpreter = CommandInterpreter::new(ContactStore::new());
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    match repl::run(&mut interpreter, &config, stdin, &mut stdout).await {
        Ok(metrics) => {
            info!("{}", metrics.summary());
            Ok(())
        }
        Err(e) => {
            error!("Session terminated by I/O error: {}", e);
            Err(e.into())
        }
    }
}
