use anyhow::Result;
use clap::{Parser, Subcommand};
use quickquid::{cli, config::Config, observability};
use quickquid_submission::{ContactFields, WaitlistFields};

/// quickquid - campus marketplace landing site
#[derive(Parser)]
#[command(name = "quickquid")]
#[command(about = "Contact and waitlist submissions for the QuickQuid site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send one contact message
    Contact {
        /// Reply address of the sender
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,

        /// Sender name, left blank to stay anonymous
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Join the waitlist with one email address
    Waitlist {
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    observability::init_tracing(&config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Contact {
            email,
            message,
            name,
        } => {
            cli::submit::contact(
                config,
                ContactFields {
                    name,
                    email,
                    message,
                },
            )
            .await
        }
        Commands::Waitlist { email } => {
            cli::submit::waitlist(config, WaitlistFields { email }).await
        }
    }
}
