use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::AppConfig;

pub mod chat;
pub mod login;
pub mod send;

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session with the assistant
    Chat {
        /// Bearer token for the backend; falls back to SAP_ASSIST_TOKEN
        #[arg(long)]
        token: Option<String>,
    },
    /// Log in with a personnel number and print the bearer token
    Login {
        #[arg(long)]
        personnel_number: String,

        /// Prompted for on stdin when not given
        #[arg(long)]
        password: Option<String>,
    },
    /// Send a single utterance and print the assistant's reply
    Send {
        message: String,

        /// Bearer token for the backend; falls back to SAP_ASSIST_TOKEN
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Chat { token }) => {
            chat::run(&config, token).await?;
        }
        Some(Command::Login {
            personnel_number,
            password,
        }) => {
            login::run(&config, &personnel_number, password).await?;
        }
        Some(Command::Send { message, token }) => {
            send::run(&config, &message, token).await?;
        }
        None => {}
    }

    Ok(())
}
