use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pagecheck::config;
use pagecheck::repository::{create_diesel_pool, initialize_schema};
use pagecheck::server;

#[derive(Parser)]
#[command(name = "pagecheck", version, about = "Track URLs and check their page metadata")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server.
    Serve {
        /// Bind host.
        #[arg(long)]
        host: Option<String>,
        /// Bind port.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Create the database and exit.
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pagecheck=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = config::load_settings();

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            server::serve(&settings).await
        }
        Command::Init => {
            settings.ensure_directories()?;
            let pool = create_diesel_pool(&settings.database_path())?;
            initialize_schema(pool).await?;
            tracing::info!("Database ready at {}", settings.database_path().display());
            Ok(())
        }
    }
}
