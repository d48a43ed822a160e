use anyhow::Result;
use clap::{Parser, Subcommand};
use faq_desk_http::ServerConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "faq-desk")]
#[command(about = "FAQ widget server with an AI answer proxy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Base URL of the text-generation service
        #[arg(short, long)]
        upstream_url: Option<String>,
        /// Directory of static assets
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
        /// JSON file of {question, answer} entries replacing the built-in FAQs
        #[arg(short, long)]
        faq_file: Option<PathBuf>,
        /// Upstream request timeout in seconds
        #[arg(short, long)]
        timeout_secs: Option<u64>,
    },
    /// Filter the FAQ list locally and print the matches
    Search {
        query: String,
        #[arg(short, long)]
        faq_file: Option<PathBuf>,
    },
    /// Search like the widget does, asking a running server for an AI answer
    Ask {
        query: String,
        #[arg(short, long, default_value = "http://127.0.0.1:3000")]
        server: String,
        #[arg(short, long)]
        faq_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, upstream_url, static_dir, faq_file, timeout_secs } => {
            let mut config = ServerConfig::from_env();
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(url) = upstream_url {
                config.upstream_url = url;
            }
            if let Some(dir) = static_dir {
                config.static_dir = dir;
            }
            if faq_file.is_some() {
                config.faq_file = faq_file;
            }
            if let Some(secs) = timeout_secs {
                config.upstream_timeout = std::time::Duration::from_secs(secs);
            }
            commands::serve::run(config).await?;
        },
        Commands::Search { query, faq_file } => {
            commands::search::run(&query, faq_file.as_deref())?;
        },
        Commands::Ask { query, server, faq_file } => {
            commands::ask::run(query, &server, faq_file.as_deref()).await?;
        },
    }

    Ok(())
}
